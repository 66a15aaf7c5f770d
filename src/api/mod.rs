//! Habits REST Client
//!
//! Frontend bindings to the habits backend, organized by resource.
//! Requests go through the browser `fetch`; every call returns `ApiError` on
//! failure instead of leaving a rejected promise behind.

mod day;
mod habits;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::ApiError;

// Re-export all public items
pub use day::*;
pub use habits::*;

/// Issue `method url` and fail on anything but a 2xx answer
async fn send(method: &str, url: &str) -> Result<Response, ApiError> {
    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::from_js)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(ApiError::from_js)?;

    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::from_js)?;
    let response: Response = value.dyn_into().map_err(ApiError::from_js)?;

    tracing::debug!(method, url, status = response.status(), "response received");
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }
    Ok(response)
}

async fn read_text(response: Response) -> Result<String, ApiError> {
    let promise = response.text().map_err(ApiError::from_js)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::from_js)?;
    value
        .as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))
}
