//! End-to-end navigation tests over an in-process history port.

use std::sync::Arc;
use wayfare::testing::{FailingHandler, RecordingHandler};
use wayfare::{HistoryPort, HistoryState, MemoryHistory, Router};

fn fixture() -> (Router, Arc<MemoryHistory>) {
    let history = Arc::new(MemoryHistory::new());
    let router = Router::new(history.clone());
    (router, history)
}

#[tokio::test]
async fn literal_route_gets_empty_params() {
    let (router, _history) = fixture();
    let handler = RecordingHandler::new();
    router.add_route("/x", handler.clone());

    router.navigate("/x").await.unwrap();

    let matches = handler.matches();
    assert_eq!(matches.len(), 1);
    assert!(matches[0].params.is_empty());
    assert_eq!(matches[0].path, "/x");
}

#[tokio::test]
async fn placeholder_and_query_extraction() {
    let (router, _history) = fixture();
    let handler = RecordingHandler::new();
    router.add_route("/editor/:id", handler.clone());

    router.navigate("/editor/42?tab=view").await.unwrap();

    let matched = &handler.matches()[0];
    assert_eq!(matched.params.get("id"), Some("42"));
    assert_eq!(matched.query.get("tab"), Some("view"));
    // The query string is split off before matching.
    assert_eq!(matched.path, "/editor/42");
}

#[tokio::test]
async fn query_is_percent_and_plus_decoded() {
    let (router, _history) = fixture();
    let handler = RecordingHandler::new();
    router.add_route("/search", handler.clone());

    router
        .navigate("/search?q=hello%20world&alt=a+b")
        .await
        .unwrap();

    let matched = &handler.matches()[0];
    assert_eq!(matched.query.get("q"), Some("hello world"));
    assert_eq!(matched.query.get("alt"), Some("a b"));
}

#[tokio::test]
async fn wildcard_consumes_the_remainder() {
    let (router, _history) = fixture();
    let handler = RecordingHandler::new();
    router.add_route("/files/*", handler.clone());

    router.navigate("/files/a/b/c").await.unwrap();

    assert_eq!(handler.count(), 1);
    assert_eq!(handler.matches()[0].path, "/files/a/b/c");
}

#[tokio::test]
async fn catch_all_route_serves_as_404() {
    let (router, _history) = fixture();
    let known = RecordingHandler::new();
    let not_found = RecordingHandler::new();
    router.add_route("/known", known.clone());
    router.add_route("*", not_found.clone());

    router.navigate("/nope").await.unwrap();

    assert_eq!(known.count(), 0);
    assert_eq!(not_found.count(), 1);
}

#[tokio::test]
async fn missing_route_invokes_nothing_and_does_not_error() {
    let (router, _history) = fixture();
    let handler = RecordingHandler::new();
    router.add_route("/only", handler.clone());

    let outcome = router.navigate("/missing").await.unwrap();

    assert!(!outcome.matched);
    assert_eq!(handler.count(), 0);
}

#[tokio::test]
async fn startup_scenario() {
    // Register /, /dashboard, /editor/:id; start at /; then navigate.
    let (router, history) = fixture();
    let root = RecordingHandler::new();
    let dashboard = RecordingHandler::new();
    let editor = RecordingHandler::new();
    router.add_route("/", root.clone());
    router.add_route("/dashboard", dashboard.clone());
    router.add_route("/editor/:id", editor.clone());

    let before = history.len();
    router.start().await.unwrap();
    assert_eq!(root.count(), 1);
    assert!(root.matches()[0].params.is_empty());

    router.navigate("/editor/7").await.unwrap();
    assert_eq!(editor.count(), 1);
    assert_eq!(editor.matches()[0].params.get("id"), Some("7"));
    assert_eq!(history.len(), before + 1);
    assert_eq!(dashboard.count(), 0);
}

#[tokio::test]
async fn back_traversal_redispatches_through_the_subscription() {
    let (router, history) = fixture();
    let root = RecordingHandler::new();
    let editor = RecordingHandler::new();
    router.add_route("/", root.clone());
    router.add_route("/editor/:id", editor.clone());

    router.start().await.unwrap();
    router.navigate("/editor/7").await.unwrap();
    assert_eq!(root.count(), 1);

    // back() itself dispatches nothing; the change arrives with delivery.
    router.back();
    assert_eq!(root.count(), 1);
    history.deliver().await.unwrap();
    assert_eq!(root.count(), 2);
    assert_eq!(router.current_path(), "/");

    router.forward();
    history.deliver().await.unwrap();
    assert_eq!(editor.count(), 2);
}

#[tokio::test]
async fn stopped_router_ignores_traversals() {
    let (router, history) = fixture();
    let root = RecordingHandler::new();
    router.add_route("/", root.clone());
    router.add_route("/away", RecordingHandler::new());

    router.start().await.unwrap();
    router.navigate("/away").await.unwrap();
    router.stop();

    history.back();
    history.deliver().await.unwrap();
    assert_eq!(root.count(), 1);
}

#[tokio::test]
async fn handler_failure_propagates_from_delivery() {
    let (router, history) = fixture();
    router.add_route("/", RecordingHandler::new());
    router.add_route("/bad", FailingHandler::new("render failed"));
    router.start().await.unwrap();

    // Seed a /bad entry without dispatching, then traverse onto it.
    history.push("/bad", None);
    history.back();
    history.deliver().await.unwrap();

    history.forward();
    let err = history.deliver().await.unwrap_err();
    let err = err.downcast::<wayfare::RouterError>().unwrap();
    let wayfare::RouterError::Handler { path, source } = *err;
    assert_eq!(path, "/bad");
    assert_eq!(source.to_string(), "render failed");
}

#[tokio::test]
async fn opaque_state_rides_the_history_entry() {
    let (router, history) = fixture();
    router.add_route("/doc/:id", RecordingHandler::new());

    let state: HistoryState = Arc::new(String::from("scroll=300"));
    router.navigate_with_state("/doc/9", state).await.unwrap();

    let restored = history.state().unwrap();
    assert_eq!(
        restored.downcast_ref::<String>().map(String::as_str),
        Some("scroll=300")
    );
}

#[tokio::test]
async fn current_path_reports_path_and_query() {
    let (router, _history) = fixture();
    router.add_route("/editor/:id", RecordingHandler::new());

    router.navigate("/editor/42?tab=view").await.unwrap();

    assert_eq!(router.current_path(), "/editor/42?tab=view");
}
