//! HTTP caching middleware

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

/// Marks successful responses as cacheable for `max_age_sec` seconds. The
/// dashboard only changes on restart, so error responses are left alone.
pub async fn http_cache(
    State(max_age_sec): State<usize>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    if !response.status().is_success() {
        return response;
    }

    if let Ok(value) = HeaderValue::from_str(&format!("max-age={}", max_age_sec)) {
        response.headers_mut().insert(header::CACHE_CONTROL, value);
    }
    response
}
