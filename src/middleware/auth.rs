use crate::errors::auth_error::AuthError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Header clients present the gateway key in
pub const API_KEY_HEADER: &str = "x-api-key";

/// Authentication middleware that validates the `X-API-Key` header
///
/// Every protected route passes through here before reaching its handler:
/// 1. Extracts the `X-API-Key` header
/// 2. Compares it against the configured key in constant time
/// 3. Returns 401 if the header is missing or does not match
///
/// # Arguments
/// * `state` - Application state containing the ServerConfig
/// * `request` - The incoming HTTP request
/// * `next` - The next middleware or handler in the chain
///
/// # Returns
/// * `Result<Response, AuthError>` - The response from the next handler or an auth error
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    // Extract request method and path for logging
    let request_method = request.method().to_string();
    let request_path = request.uri().path().to_string();

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!(
                method = %request_method,
                path = %request_path,
                "Request rejected: missing API key header"
            );
            AuthError::MissingApiKey
        })?;

    // Constant-time comparison
    let matches: bool = provided
        .as_bytes()
        .ct_eq(state.config.api_key.as_bytes())
        .into();
    if !matches {
        tracing::warn!(
            method = %request_method,
            path = %request_path,
            "Request rejected: API key mismatch"
        );
        return Err(AuthError::InvalidApiKey);
    }

    tracing::debug!(
        method = %request_method,
        path = %request_path,
        "API key accepted"
    );
    Ok(next.run(request).await)
}
