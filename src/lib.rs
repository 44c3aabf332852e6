//! Reverse route URL generation library.
//!
//! Given a catalogue of registered route templates and a description of one
//! action invocation, produce the relative URL a request router would use to
//! reach that action, with unconsumed arguments serialized into the query
//! string. Useful where no live request is available, such as unit tests or
//! static code generation.
//!
//! ```
//! use reverse_routes::{CallDescriptor, RouteCollectionNode, RouteResolver, RouteTemplate};
//!
//! let routes = RouteCollectionNode::Collection(vec![RouteCollectionNode::Route(
//!     RouteTemplate::new("api/foo/uppercase", "FooController", "GetUppercase", ["str"]),
//! )]);
//!
//! let resolver = RouteResolver::new(&routes);
//! let url = resolver
//!     .url_for(&CallDescriptor::new("FooController", "GetUppercase").arg("str", "test"))
//!     .unwrap();
//! assert_eq!(url, "api/foo/uppercase?str=test");
//! ```

pub mod descriptor;
pub mod error;
pub mod resolver;
pub mod routing;
pub mod url;

pub use descriptor::{CallDescriptor, Scalar, Value};
pub use error::RouteError;
pub use resolver::RouteResolver;
pub use routing::{RouteCollectionNode, RouteRegistry, RouteTemplate};
pub use url::{CompositeStyle, UrlBuilder};
