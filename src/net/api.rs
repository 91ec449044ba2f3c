//! REST API helpers for communicating with the course API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed fetch degrades
//! into an error message on the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Course;
use crate::config::ApiConfig;

#[cfg(any(test, feature = "hydrate"))]
fn courses_endpoint(config: &ApiConfig) -> String {
    config.url("/api/courses")
}

#[cfg(any(test, feature = "hydrate"))]
fn courses_request_failed_message(status: u16) -> String {
    format!("course list request failed: {status}")
}

/// Fetch every course from `GET /api/courses`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body matches neither response shape.
pub async fn fetch_courses(config: &ApiConfig) -> Result<Vec<Course>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = courses_endpoint(config);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(courses_request_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        super::types::parse_course_list(&body).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err("not available on server".to_owned())
    }
}
