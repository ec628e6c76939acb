use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use ignite_core::forms::{catalog, validate};
use ignite_core::{FormKind, FormPayload, FormValues};
use serde_json::json;

use crate::handlers::client_key::ClientKey;
use crate::AppState;

type ApiResponse = (StatusCode, Json<serde_json::Value>);
type ApiResult = Result<ApiResponse, ApiResponse>;

pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Path(form): Path<String>,
    client: ClientKey,
    Json(payload): Json<FormPayload>,
) -> ApiResult {
    let kind: FormKind = match form.parse() {
        Ok(kind) => kind,
        Err(e) => {
            tracing::debug!("Rejected submission: {}", e);
            return Err((
                StatusCode::NOT_FOUND,
                Json(json!({"error": format!("Unknown form '{}'", form)})),
            ));
        }
    };

    let limiter_key = format!("{}:{}", kind, client.0);
    if state.form_limiter.check_key(&limiter_key).is_err() {
        tracing::warn!("Rate limit exceeded for {} submissions from {}", kind, client.0);
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": "Too many submissions, please try again in a minute."})),
        ));
    }

    let schema = catalog::schema_for(kind);
    let values = FormValues::from_payload(payload);
    let result = validate(schema, &values);
    if !result.valid {
        tracing::info!(
            "Rejected {} submission with {} validation error(s)",
            kind,
            result.errors.len()
        );
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": result.summary(schema),
                "errors": result.errors,
            })),
        ));
    }

    // Store exactly the fields the schema knows about.
    let stored = state
        .submissions
        .insert(kind, FormPayload::from_values(schema, &values));
    tracing::info!("Accepted {} submission {}", kind, stored.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": stored.id,
            "received_at": stored.received_at.to_rfc3339(),
        })),
    ))
}

pub async fn health_check() -> &'static str {
    "OK"
}
