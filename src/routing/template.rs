//! Route template and registration tree definitions.

use serde::{Deserialize, Serialize};

/// A registered path pattern bound to one action identity.
///
/// Created once at registration time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTemplate {
    /// Path pattern with literal segments and `{name}` placeholders,
    /// e.g. `"api/orders/{id}"`.
    pub template: String,

    /// Short name of the controller type the action belongs to.
    pub controller_name: String,

    /// Name of the action method.
    pub action_name: String,

    /// Parameter names declared by the action signature, in order.
    pub parameter_names: Vec<String>,
}

impl RouteTemplate {
    pub fn new<P, S>(
        template: impl Into<String>,
        controller_name: impl Into<String>,
        action_name: impl Into<String>,
        parameter_names: P,
    ) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            template: template.into(),
            controller_name: controller_name.into(),
            action_name: action_name.into(),
            parameter_names: parameter_names.into_iter().map(Into::into).collect(),
        }
    }
}

/// A node in the registration tree: either a single template or an ordered
/// collection of nested nodes (routes grouped under prefixes or areas may
/// nest arbitrarily).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteCollectionNode {
    Route(RouteTemplate),
    Collection(Vec<RouteCollectionNode>),
}

impl From<RouteTemplate> for RouteCollectionNode {
    fn from(template: RouteTemplate) -> Self {
        RouteCollectionNode::Route(template)
    }
}

impl From<Vec<RouteCollectionNode>> for RouteCollectionNode {
    fn from(children: Vec<RouteCollectionNode>) -> Self {
        RouteCollectionNode::Collection(children)
    }
}
