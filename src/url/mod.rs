//! URL construction subsystem.
//!
//! # Data Flow
//! ```text
//! Matched RouteTemplate + CallDescriptor
//!     → builder.rs (segment parse, placeholder substitution)
//!     → serializer.rs (query pairs for every unconsumed parameter)
//!     → encode.rs (percent-encoding, path and query flavors)
//!     → Return: relative URL string or first error encountered
//! ```
//!
//! # Design Decisions
//! - Path errors surface before query-serialization errors
//! - Query pair order follows the descriptor's declaration order
//! - `?` is appended only when the query string is non-empty

pub mod builder;
pub mod encode;
pub mod serializer;

pub use builder::UrlBuilder;
pub use serializer::CompositeStyle;
