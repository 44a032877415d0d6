//! Endpoint wrappers for the auth and OTP APIs. Each call is fire-once — no
//! retry, no queueing; failures surface to the page that dispatched them.
//! The bearer token is passed in explicitly so no module-level token state
//! exists anywhere in the client.

use crate::client::post_json;
use crate::error::ApiError;
use crate::session::{extract_credentials, SessionCredentials};
use quizradix_types::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, SendOtpRequest,
    VerifyOtpRequest,
};

/// Exchanges credentials for a session. A 200 without a token fails with
/// [`ApiError::MissingCredential`].
pub async fn login(
    request: &LoginRequest,
    bearer: Option<&str>,
) -> Result<SessionCredentials, ApiError> {
    let response: LoginResponse = post_json("api/auth/login", request, bearer).await?;
    extract_credentials(response)
}

/// Submits the completed registration profile. Field-level rejections come
/// back as [`ApiError::Rejected`].
pub async fn register(
    request: &RegisterRequest,
    bearer: Option<&str>,
) -> Result<MessageResponse, ApiError> {
    post_json("api/auth/register", request, bearer).await
}

/// Asks the backend to email a one-time code to `email`.
pub async fn send_otp(email: &str, bearer: Option<&str>) -> Result<MessageResponse, ApiError> {
    let request = SendOtpRequest {
        email: email.to_string(),
    };
    post_json("api/otp/sendotp", &request, bearer).await
}

/// Checks a one-time code against the backend.
pub async fn verify_otp(
    request: &VerifyOtpRequest,
    bearer: Option<&str>,
) -> Result<MessageResponse, ApiError> {
    post_json("api/otp/verifyotp", request, bearer).await
}
