//! Registry construction: flattening the registration tree.
//!
//! # Responsibilities
//! - Flatten a nested route-collection tree into one ordered list
//! - Expose the list for iteration in registration order
//!
//! # Design Decisions
//! - Depth-first traversal, children visited left-to-right
//! - Flattening is pure and order-preserving; the same tree always yields
//!   the same sequence, so the result can be computed once and shared
//! - Immutable after construction (thread-safe without locks)

use super::template::{RouteCollectionNode, RouteTemplate};

/// A flat, ordered, immutable route catalogue.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: Vec<RouteTemplate>,
}

impl RouteRegistry {
    /// Flatten a registration tree into a registry.
    ///
    /// An empty collection yields an empty registry; there are no error
    /// conditions.
    pub fn flatten(root: &RouteCollectionNode) -> Self {
        let mut routes = Vec::new();
        collect(root, &mut routes);
        Self { routes }
    }

    /// All templates, in registration order.
    pub fn routes(&self) -> &[RouteTemplate] {
        &self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteTemplate> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl From<Vec<RouteTemplate>> for RouteRegistry {
    fn from(routes: Vec<RouteTemplate>) -> Self {
        Self { routes }
    }
}

impl<'a> IntoIterator for &'a RouteRegistry {
    type Item = &'a RouteTemplate;
    type IntoIter = std::slice::Iter<'a, RouteTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

fn collect(node: &RouteCollectionNode, out: &mut Vec<RouteTemplate>) {
    match node {
        RouteCollectionNode::Route(template) => out.push(template.clone()),
        RouteCollectionNode::Collection(children) => {
            for child in children {
                collect(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(name: &str) -> RouteTemplate {
        RouteTemplate::new(name, "FakeController", name, Vec::<String>::new())
    }

    #[test]
    fn test_flatten_preserves_registration_order() {
        let tree = RouteCollectionNode::Collection(vec![
            RouteCollectionNode::Route(template("a")),
            RouteCollectionNode::Collection(vec![
                RouteCollectionNode::Route(template("b")),
                RouteCollectionNode::Collection(vec![RouteCollectionNode::Route(template("c"))]),
                RouteCollectionNode::Route(template("d")),
            ]),
            RouteCollectionNode::Route(template("e")),
        ]);

        let registry = RouteRegistry::flatten(&tree);
        let order: Vec<&str> = registry.iter().map(|r| r.template.as_str()).collect();
        assert_eq!(order, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let tree = RouteCollectionNode::Collection(vec![
            RouteCollectionNode::Route(template("x")),
            RouteCollectionNode::Collection(vec![RouteCollectionNode::Route(template("y"))]),
        ]);

        let first = RouteRegistry::flatten(&tree);
        let second = RouteRegistry::flatten(&tree);
        assert_eq!(first.routes(), second.routes());
    }

    #[test]
    fn test_empty_tree_yields_empty_registry() {
        let registry = RouteRegistry::flatten(&RouteCollectionNode::Collection(Vec::new()));
        assert!(registry.is_empty());
    }
}
