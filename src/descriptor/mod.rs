//! Call description subsystem.
//!
//! # Data Flow
//! ```text
//! Caller (or a call-capture adapter)
//!     → CallDescriptor { controller, action, ordered name→Value args }
//!     → routing (identity match)
//!     → url (placeholder substitution + query serialization)
//! ```
//!
//! # Design Decisions
//! - The descriptor is plain data: this crate never inspects source-level
//!   call expressions, that conversion lives outside the boundary
//! - Parameters are an ordered list of pairs; insertion order is the
//!   action's parameter declaration order
//! - Built once per resolution, consumed, discarded

pub mod value;

pub use value::{Scalar, Value};

/// One action invocation to resolve into a URL.
#[derive(Debug, Clone, PartialEq)]
pub struct CallDescriptor {
    /// Short name of the controller type owning the action.
    pub controller_name: String,

    /// Name of the action method.
    pub action_name: String,

    /// Ordered parameter-name → value mapping; insertion order is the
    /// declaration order of the action's parameters.
    pub parameters: Vec<(String, Value)>,
}

impl CallDescriptor {
    /// Create a descriptor for an action identity with no arguments yet.
    pub fn new(controller_name: impl Into<String>, action_name: impl Into<String>) -> Self {
        Self {
            controller_name: controller_name.into(),
            action_name: action_name.into(),
            parameters: Vec::new(),
        }
    }

    /// Append one named argument. Call in parameter declaration order.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.push((name.into(), value.into()));
        self
    }

    /// Look up an argument by parameter name.
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}
