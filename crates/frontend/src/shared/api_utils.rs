//! API utilities for frontend-backend communication
//!
//! Every call goes through [`get_json`] / [`post_json`], which decode the
//! server's error body into [`ApiError`] so the form can show field-level
//! validations.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Get the base URL for API requests
///
/// The API is served from the same origin as the page.
///
/// # Returns
/// - Origin like "https://dev.example.com"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/v2/templates/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::network(format!("HTTP {}", status)),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::network(format!("Failed to parse JSON: {}", e)))
}
