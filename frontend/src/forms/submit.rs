use gloo_timers::future::TimeoutFuture;
use ignite_core::{FormKind, FormPayload, SubmitError, ValidationError};
use serde::Deserialize;

use crate::config::{self, SubmitMode};
use crate::utils::api::Api;

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
    #[serde(default)]
    errors: Vec<ValidationError>,
}

/// Hands a validated payload off. Failures come back as `SubmitError` and go
/// through the same notice path as validation errors.
pub async fn submit(kind: FormKind, payload: &FormPayload) -> Result<(), SubmitError> {
    match config::submit_mode() {
        SubmitMode::Simulated { delay_ms } => {
            TimeoutFuture::new(delay_ms).await;
            log::info!("Simulated {} submission with {} fields", kind, payload.len());
            Ok(())
        }
        SubmitMode::Remote => send(kind, payload).await,
    }
}

async fn send(kind: FormKind, payload: &FormPayload) -> Result<(), SubmitError> {
    let path = format!("/api/forms/{}", kind.slug());
    let request = Api::post(&path)
        .json(payload)
        .map_err(|e| SubmitError::SubmissionFailed(e.to_string()))?;

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Network request for {} failed: {}", kind, e);
            return Err(SubmitError::SubmissionFailed(e.to_string()));
        }
    };

    if response.ok() {
        log::info!("{} submission accepted", kind);
        return Ok(());
    }

    let status = response.status();
    match response.json::<ErrorResponse>().await {
        // 422 carries the server's validation summary, 429 a retry hint
        Ok(body) if status == 422 || status == 429 => {
            Err(SubmitError::rejected(body.error, &body.errors))
        }
        _ => Err(SubmitError::SubmissionFailed(format!(
            "server responded with status {}",
            status
        ))),
    }
}
