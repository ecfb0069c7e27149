use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

/// Middlware to trace request and response headers.
///
/// `Authorization` and `Cookie` values are never logged.
pub async fn trace_headers(req: Request, next: Next) -> Response {
    let incoming_headers = redacted(req.headers());
    tracing::trace!(method = %req.method(), uri = %req.uri(), ?incoming_headers, "Request headers");

    let response = next.run(req).await;

    let outgoing_headers = redacted(response.headers());
    tracing::trace!(status = %response.status(), ?outgoing_headers, "Response headers");

    response
}

fn redacted(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if name == header::AUTHORIZATION || name == header::COOKIE {
                "...".to_string()
            } else {
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            };

            (name.to_string(), value)
        })
        .collect()
}
