//! Action identity matching.
//!
//! # Responsibilities
//! - Locate the template registered for a descriptor's action identity
//! - Return an explicit error when nothing matches
//!
//! # Design Decisions
//! - Matching is by (controller, action) identity, never by forward path
//!   matching against the template text
//! - First match in registration order wins; when several templates share
//!   one identity (overloads, or a derived controller whose base also
//!   registered a route) the earlier registration is authoritative. This
//!   mirrors how forward routing resolves the same ambiguity and is a
//!   deliberate tie-break, not an accident of iteration.
//! - Explicit RouteNotFound rather than a silent default

use super::template::RouteTemplate;
use crate::descriptor::CallDescriptor;
use crate::error::RouteError;

/// Find the route registered for the descriptor's action identity.
///
/// Pure: scans `routes` in order without mutating anything.
pub fn find<'a>(
    descriptor: &CallDescriptor,
    routes: &'a [RouteTemplate],
) -> Result<&'a RouteTemplate, RouteError> {
    for route in routes {
        tracing::trace!(
            template = %route.template,
            controller = %route.controller_name,
            action = %route.action_name,
            "Scanning route"
        );
        if route.controller_name == descriptor.controller_name
            && route.action_name == descriptor.action_name
        {
            return Ok(route);
        }
    }
    Err(RouteError::RouteNotFound {
        controller: descriptor.controller_name.clone(),
        action: descriptor.action_name.clone(),
    })
}
