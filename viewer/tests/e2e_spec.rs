//! End-to-end tests against the real content service
//!
//! Spins up policy-server on an ephemeral port and drives the viewer's
//! fetch-and-render flow against the built-in registry.

use policy_server::{create_app, AppState};
use policy_viewer::client::PolicyClient;
use policy_viewer::render::Renderer;
use policy_viewer::view::{ViewIntent, ViewState};

async fn spawn_service() -> String {
    let app = create_app(AppState::new());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn viewer_fetches_and_renders_the_builtin_policy() {
    let base = spawn_service().await;
    let client = PolicyClient::new(&base);

    let state = ViewState::load(&client, &ViewIntent::from_path("/searchit")).await;

    let document = match &state {
        ViewState::Detail(document) => document,
        other => panic!("expected Detail, got {:?}", other),
    };
    assert_eq!(
        document.title,
        "Privacy Policy for SearchIt (Select To Search)"
    );

    let html = Renderer::new().unwrap().render(&state).unwrap();
    assert!(html.contains("<h2>Introduction</h2>"));
    assert!(html.contains("Effective Date: September 14, 2025"));
}

#[tokio::test]
async fn viewer_lists_the_builtin_registry() {
    let base = spawn_service().await;
    let client = PolicyClient::new(&base);

    let state = ViewState::load(&client, &ViewIntent::from_path("/")).await;

    match state {
        ViewState::List(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, "searchit");
        }
        other => panic!("expected List, got {:?}", other),
    }
}

#[tokio::test]
async fn viewer_surfaces_the_service_not_found_message() {
    let base = spawn_service().await;
    let client = PolicyClient::new(&base);

    let state = ViewState::load(&client, &ViewIntent::from_path("/anotherapp")).await;

    assert_eq!(
        state,
        ViewState::Error("Privacy Policy not found.".to_string())
    );
}
