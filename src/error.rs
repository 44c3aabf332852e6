//! Error definitions for route resolution.

use thiserror::Error;

/// Errors that can occur while resolving a call into a URL.
///
/// Every variant is deterministic and caller-fixable; none indicates a
/// transient fault, so nothing here is worth retrying. Failures are returned
/// to the immediate caller as typed results and never logged or defaulted
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No registered template matches the requested controller+action identity.
    #[error("no route registered for action {controller}.{action}")]
    RouteNotFound {
        /// Controller name from the call descriptor.
        controller: String,
        /// Action name from the call descriptor.
        action: String,
    },

    /// A template placeholder has no corresponding entry in the call's
    /// parameter mapping.
    #[error("template placeholder {{{placeholder}}} has no matching parameter")]
    MissingParameter {
        /// Name of the unresolvable placeholder.
        placeholder: String,
    },

    /// A value that cannot render as a single path segment (a sequence, a
    /// composite, or an absent value) was supplied for a path placeholder.
    #[error("parameter {placeholder} cannot fill a path segment: a non-empty scalar is required")]
    InvalidPathValue {
        /// Name of the placeholder the value was bound to.
        placeholder: String,
    },

    /// A composite value contains a shape query serialization does not
    /// support, such as a nested composite.
    #[error("parameter {parameter} has an unsupported value shape for query serialization")]
    UnsupportedValueShape {
        /// Name of the offending top-level parameter.
        parameter: String,
    },

    /// The template uses placeholder or segment syntax this crate does not
    /// implement, such as catch-all segments.
    #[error("template {template:?} uses an unsupported feature: {feature}")]
    UnsupportedTemplateFeature {
        /// The offending template string.
        template: String,
        /// Description of the unsupported syntax.
        feature: String,
    },
}
