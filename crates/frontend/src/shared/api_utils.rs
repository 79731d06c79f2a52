//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and for unwrapping the
//! `{ error: { message } } | data` response envelope.

use contracts::shared::api_error::ApiErrorEnvelope;
use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::system::auth::storage;

/// Get the base URL of the backend server
///
/// Constructs the base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - Base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Root of the REST API, e.g. "http://localhost:3000/api".
///
/// A build-time `API_URL` environment variable takes precedence over the
/// location-derived default.
pub fn api_root() -> String {
    match option_env!("API_URL") {
        Some(url) if !url.trim().is_empty() => url.trim_end_matches('/').to_string(),
        _ => format!("{}/api", api_base()),
    }
}

/// Build a full API URL from a path relative to the API root
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/stripe/invoices/in_123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_root(), path)
}

fn auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

fn with_auth(request: RequestBuilder) -> RequestBuilder {
    match auth_header() {
        Some(header) => request.header("Authorization", &header),
        None => request,
    }
}

/// Turn a status code and raw body into either the payload text or the
/// message to show to the user.
pub fn unwrap_envelope(status: u16, body: String) -> Result<String, String> {
    if let Some(message) = ApiErrorEnvelope::message_from_body(&body) {
        return Err(message);
    }
    if !(200..300).contains(&status) {
        return Err(format!("Request failed: {}", status));
    }
    Ok(body)
}

/// GET a JSON resource, honouring the error envelope
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    log::debug!("GET {}", url);

    let response = with_auth(Request::get(url))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    let body = unwrap_envelope(status, body)?;
    serde_json::from_str::<T>(&body).map_err(|e| format!("Failed to parse response: {}", e))
}

/// HEAD a resource and return the value of one response header
pub async fn head_header(url: &str, header: &str) -> Result<String, String> {
    log::debug!("HEAD {} [{}]", url, header);

    let response: Response = with_auth(RequestBuilder::new(url).method(Method::HEAD))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .headers()
        .get(header)
        .ok_or_else(|| format!("Response is missing the {} header", header))
}
