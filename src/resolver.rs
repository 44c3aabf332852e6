//! End-to-end resolution facade.
//!
//! # Responsibilities
//! - Flatten the registration tree once at construction
//! - Run match → build for each call descriptor
//!
//! # Design Decisions
//! - Immutable after construction; share across threads via `Arc`
//! - Re-registering routes means building a new resolver and swapping the
//!   snapshot, which is the caller's lifecycle to manage

use crate::descriptor::CallDescriptor;
use crate::error::RouteError;
use crate::routing::{matcher, RouteCollectionNode, RouteRegistry};
use crate::url::{CompositeStyle, UrlBuilder};

/// Resolves call descriptors into relative URLs over an immutable route
/// catalogue.
#[derive(Debug, Clone, Default)]
pub struct RouteResolver {
    registry: RouteRegistry,
    builder: UrlBuilder,
}

impl RouteResolver {
    /// Build a resolver by flattening a registration tree.
    pub fn new(root: &RouteCollectionNode) -> Self {
        Self::from_registry(RouteRegistry::flatten(root))
    }

    /// Build a resolver over an already-flattened registry.
    pub fn from_registry(registry: RouteRegistry) -> Self {
        Self {
            registry,
            builder: UrlBuilder::new(),
        }
    }

    /// Override the composite query convention (default: flattened fields).
    pub fn with_composite_style(mut self, style: CompositeStyle) -> Self {
        self.builder = UrlBuilder::with_composite_style(style);
        self
    }

    /// Resolve one call into a relative URL (no scheme or host).
    ///
    /// Runs the full pipeline: identity match over the flattened registry,
    /// placeholder substitution, query serialization of the remaining
    /// arguments.
    pub fn url_for(&self, descriptor: &CallDescriptor) -> Result<String, RouteError> {
        let route = matcher::find(descriptor, self.registry.routes())?;
        self.builder.build(route, descriptor)
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }
}
