//! Drive `SupabaseStore` against a local server speaking the PostgREST insert API.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use std::sync::{Arc, Mutex};
use waitlist_common::{Entry, SubmitFailure};
use waitlist_core::{Config, StoreError, SubmissionController, SupabaseStore, WaitlistStore};

#[derive(Clone, Debug)]
struct Captured {
    headers: HeaderMap,
    body: serde_json::Value,
}

#[derive(Clone)]
struct FakeRest {
    reply: (StatusCode, &'static str),
    captured: Arc<Mutex<Vec<Captured>>>,
}

async fn insert_handler(
    State(fake): State<FakeRest>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    let body = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    fake.captured.lock().unwrap().push(Captured { headers, body });
    fake.reply
}

/// Start a fake PostgREST on an ephemeral port; returns its base URL.
async fn serve(reply: (StatusCode, &'static str)) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/rest/v1/waitlist", post(insert_handler))
        .with_state(FakeRest {
            reply,
            captured: captured.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), captured)
}

fn entry() -> Entry {
    Entry::normalized(" Ada Lovelace ", " Ada@Example.COM ", "United Kingdom")
}

#[tokio::test]
async fn test_insert_sends_postgrest_request() {
    let (url, captured) = serve((StatusCode::CREATED, "")).await;
    let store = SupabaseStore::new(&url, "anon-key", "waitlist");

    store.insert(&entry()).await.unwrap();

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    let request = &captured[0];
    assert_eq!(request.headers["apikey"], "anon-key");
    assert_eq!(request.headers["authorization"], "Bearer anon-key");
    assert_eq!(request.headers["prefer"], "return=minimal");
    assert_eq!(
        request.body,
        serde_json::json!([{
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "country": "United Kingdom"
        }])
    );
}

#[tokio::test]
async fn test_unique_violation_maps_to_duplicate() {
    let (url, _) = serve((
        StatusCode::CONFLICT,
        r#"{"code":"23505","details":"Key (email)=(ada@example.com) already exists.","hint":null,"message":"duplicate key value violates unique constraint \"waitlist_email_key\""}"#,
    ))
    .await;
    let store = SupabaseStore::new(&url, "anon-key", "waitlist");

    let err = store.insert(&entry()).await.unwrap_err();
    assert!(err.is_unique_violation());

    let controller = SubmissionController::new(Arc::new(store));
    assert_eq!(
        controller.submit(&entry()).await,
        Err(SubmitFailure::Duplicate)
    );
}

#[tokio::test]
async fn test_other_rejection_maps_to_store_failure() {
    let (url, _) = serve((
        StatusCode::UNAUTHORIZED,
        r#"{"code":"42501","details":null,"hint":null,"message":"new row violates row-level security policy"}"#,
    ))
    .await;
    let store = SupabaseStore::new(&url, "anon-key", "waitlist");

    match store.insert(&entry()).await {
        Err(StoreError::Rejected { status, code, .. }) => {
            assert_eq!(status, 401);
            assert_eq!(code.as_deref(), Some("42501"));
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let controller = SubmissionController::new(Arc::new(store));
    assert_eq!(controller.submit(&entry()).await, Err(SubmitFailure::Store));
}

#[tokio::test]
async fn test_non_json_error_maps_to_store_failure() {
    let (url, _) = serve((StatusCode::BAD_GATEWAY, "upstream unavailable")).await;
    let controller =
        SubmissionController::new(Arc::new(SupabaseStore::new(&url, "anon-key", "waitlist")));

    assert_eq!(controller.submit(&entry()).await, Err(SubmitFailure::Store));
}

#[tokio::test]
async fn test_unreachable_server_maps_to_network_failure() {
    // Reserve a port, then close it so nothing is listening there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = SupabaseStore::new(&format!("http://{addr}"), "anon-key", "waitlist");
    assert!(matches!(
        store.insert(&entry()).await,
        Err(StoreError::Transport(_))
    ));

    let controller = SubmissionController::new(Arc::new(store));
    assert_eq!(
        controller.submit(&entry()).await,
        Err(SubmitFailure::Network)
    );
}

#[tokio::test]
async fn test_store_from_config() {
    let (url, captured) = serve((StatusCode::CREATED, "")).await;
    let config = Config::from_lookup(|key| match key {
        "WAITLIST_STORE_URL" => Some(format!("{url}/")),
        "WAITLIST_ANON_KEY" => Some("anon-key".to_string()),
        _ => None,
    })
    .unwrap();

    let store = SupabaseStore::from_config(&config);
    assert_eq!(store.endpoint(), format!("{url}/rest/v1/waitlist"));
    store.insert(&entry()).await.unwrap();
    assert_eq!(captured.lock().unwrap().len(), 1);
}
