//! Browser-side transport. Every call posts JSON with cookies included, an
//! abort-based timeout, and a bearer header when the caller holds a token.

use crate::config::ApiConfig;
use crate::error::{classify_response, classify_transport, ApiError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Serialize};
use web_sys::{AbortController, RequestCredentials};

/// Abort in-flight requests after this long to avoid hanging UI state.
const REQUEST_TIMEOUT_MS: u32 = 10_000;

pub(crate) async fn post_json<B, T>(
    path: &str,
    body: &B,
    bearer: Option<&str>,
) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = ApiConfig::load().endpoint(path);
    let payload =
        serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;

    let controller = AbortController::new()
        .map_err(|_| ApiError::Network("failed to initialize request timeout".into()))?;
    let signal = controller.signal();
    let abortHandle = controller.clone();
    // Cancelled when dropped at the end of this call.
    let _timeout = Timeout::new(REQUEST_TIMEOUT_MS, move || abortHandle.abort());

    let mut builder = Request::post(&url)
        .header("Content-Type", "application/json")
        .credentials(RequestCredentials::Include)
        .abort_signal(Some(&signal));

    if let Some(token) = bearer {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let request = builder
        .body(payload)
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| classify_transport(&e.to_string()))?;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(classify_response(status, &body))
    }
}
