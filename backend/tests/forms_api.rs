use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use ignite_backend::{build_router, config::ServerConfig, AppState};
use ignite_core::forms::catalog::{sample_values, schema_for};
use ignite_core::{FormKind, FormPayload};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

fn setup(limit: u32) -> (Arc<AppState>, Router) {
    setup_with(ServerConfig {
        form_rate_limit_per_minute: limit,
        trust_forwarded_for: true,
        ..ServerConfig::default()
    })
}

fn setup_with(config: ServerConfig) -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(&config));
    let app = build_router(state.clone(), &config);
    (state, app)
}

fn post_json(path: &str, body: &Value, client: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .header("x-forwarded-for", client)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn valid_body(kind: FormKind) -> Value {
    let payload = FormPayload::from_values(schema_for(kind), &sample_values(kind));
    serde_json::to_value(payload).unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_accepts_valid_submission() {
    let (state, app) = setup(5);

    let response = app
        .oneshot(post_json("/api/forms/volunteer", &valid_body(FormKind::Volunteer), "10.0.0.1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert!(body["id"].is_string());
    assert_eq!(state.submissions.count(FormKind::Volunteer), 1);
}

#[tokio::test]
async fn test_rejects_missing_fields_with_every_error() {
    let (state, app) = setup(5);
    let mut body = valid_body(FormKind::Sponsor);
    let fields = body.as_object_mut().unwrap();
    fields.remove("orgName");
    fields.insert("contactEmail".to_string(), json!("ab.co"));

    let response = app
        .oneshot(post_json("/api/forms/sponsor", &body, "10.0.0.2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await;
    assert_eq!(
        body["errors"],
        json!([
            {"kind": "missing_field", "detail": "orgName"},
            {"kind": "invalid_format", "detail": "contactEmail"},
        ])
    );
    assert_eq!(
        body["error"],
        "Please fix the following: Organization Name is required; Contact Email must be a valid email address."
    );
    assert_eq!(state.submissions.count(FormKind::Sponsor), 0);
}

#[tokio::test]
async fn test_enforces_category_cap() {
    let (_, app) = setup(5);
    let mut body = valid_body(FormKind::Registration);
    body["participantCategories"] = json!(["developer", "designer", "founder", "student"]);

    let response = app
        .oneshot(post_json("/api/forms/registration", &body, "10.0.0.3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await;
    assert_eq!(body["errors"][0]["kind"], "group_cardinality");
    assert_eq!(body["errors"][0]["detail"]["actual"], 4);
}

#[tokio::test]
async fn test_blank_categories_are_rejected_and_repeats_collapse() {
    let (state, app) = setup(5);

    let mut blank = valid_body(FormKind::Registration);
    blank["participantCategories"] = json!(["", "  "]);
    let response = app
        .clone()
        .oneshot(post_json("/api/forms/registration", &blank, "10.0.0.7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await;
    assert_eq!(body["errors"][0]["kind"], "group_cardinality");
    assert_eq!(body["errors"][0]["detail"]["actual"], 0);

    let mut repeated = valid_body(FormKind::Registration);
    repeated["participantCategories"] = json!(["developer", "developer", "developer"]);
    let response = app
        .oneshot(post_json("/api/forms/registration", &repeated, "10.0.0.7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored = state.submissions.latest(FormKind::Registration).unwrap();
    assert_eq!(
        serde_json::to_value(&stored.payload).unwrap()["participantCategories"],
        json!(["developer"])
    );
}

#[tokio::test]
async fn test_unknown_form_is_not_found() {
    let (_, app) = setup(5);

    let response = app
        .oneshot(post_json("/api/forms/newsletter", &json!({}), "10.0.0.4"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rate_limit_per_client() {
    let (_, app) = setup(2);
    let body = valid_body(FormKind::Exhibitor);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_json("/api/forms/exhibitor", &body, "10.0.0.5"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let limited = app
        .clone()
        .oneshot(post_json("/api/forms/exhibitor", &body, "10.0.0.5"))
        .await
        .unwrap();
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);

    let other_client = app
        .oneshot(post_json("/api/forms/exhibitor", &body, "10.0.0.6"))
        .await
        .unwrap();
    assert_eq!(other_client.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_forwarded_for_cannot_dodge_the_limit_by_default() {
    let (_, app) = setup_with(ServerConfig {
        form_rate_limit_per_minute: 1,
        ..ServerConfig::default()
    });
    let body = valid_body(FormKind::Volunteer);

    let first = app
        .clone()
        .oneshot(post_json("/api/forms/volunteer", &body, "198.51.100.1"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let spoofed = app
        .oneshot(post_json("/api/forms/volunteer", &body, "198.51.100.2"))
        .await
        .unwrap();
    assert_eq!(spoofed.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_health_check() {
    let (_, app) = setup(5);

    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}
