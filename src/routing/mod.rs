//! Route catalogue subsystem.
//!
//! # Data Flow
//! ```text
//! RouteCollectionNode tree (supplied by the registration boundary)
//!     → registry.rs (depth-first flatten)
//!     → RouteRegistry (flat list, registration order, immutable)
//!     → matcher.rs (action identity lookup)
//!     → Return: matched RouteTemplate or RouteNotFound
//! ```
//!
//! # Design Decisions
//! - The registry is flattened once at construction, immutable afterwards;
//!   rebuilding routes means building a new registry and swapping snapshots,
//!   which is the caller's lifecycle to manage
//! - Reverse lookup only: templates are found by action identity, the
//!   template text is never forward-matched against a request path
//! - Deterministic: same tree and descriptor always select the same route

pub mod matcher;
pub mod registry;
pub mod template;

pub use registry::RouteRegistry;
pub use template::{RouteCollectionNode, RouteTemplate};
