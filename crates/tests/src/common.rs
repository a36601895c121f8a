use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use shared_types::ContactInfo;
use tower::ServiceExt;

/// Build the intake router with the given contact settings.
pub fn test_app(info: ContactInfo) -> Router {
    server::intake::intake_router(info)
}

/// Outcome of one request: status, `Location` header, and the JSON body
/// (`Value::Null` when the body is empty or not JSON).
pub struct Sent {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

/// POST a url-encoded form body to a route.
pub async fn post_form(app: &Router, uri: &str, body: &str) -> Sent {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// POST a body with an arbitrary content type.
pub async fn post_with_type(app: &Router, uri: &str, content_type: &str, body: &str) -> Sent {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> Sent {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// Send a request through the router and collect the response.
async fn send(app: &Router, req: Request<Body>) -> Sent {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    Sent {
        status,
        location,
        body,
    }
}
