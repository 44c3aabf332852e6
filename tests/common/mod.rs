//! Shared helpers for integration tests.

use std::sync::Once;

use reverse_routes::{RouteCollectionNode, RouteTemplate};

static INIT: Once = Once::new();

/// Install a tracing subscriber once, honoring RUST_LOG.
/// Run tests with RUST_LOG=reverse_routes=trace to watch resolution.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The catalogue used by most pipeline tests: a prefixed controller group
/// nested inside the root collection, mirroring attribute-routed actions.
pub fn fake_controller_routes() -> RouteCollectionNode {
    RouteCollectionNode::Collection(vec![RouteCollectionNode::Collection(vec![
        RouteCollectionNode::Route(RouteTemplate::new(
            "api/fake/uppercase",
            "FakeController",
            "GetUppercase",
            ["str"],
        )),
        RouteCollectionNode::Route(RouteTemplate::new(
            "api/fake/lowercase/{str}",
            "FakeController",
            "GetLowercase",
            ["str"],
        )),
        RouteCollectionNode::Route(RouteTemplate::new(
            "api/fake/get-values",
            "FakeController",
            "GetValues",
            ["values"],
        )),
        RouteCollectionNode::Route(RouteTemplate::new(
            "api/fake/person/name",
            "FakeController",
            "GetPersonName",
            ["person"],
        )),
    ])])
}
