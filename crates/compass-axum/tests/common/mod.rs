//! Shared helpers for the router integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use compass_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use compass_axum::routes::create_router;

/// Router backed by a fresh session registry.
pub fn test_app() -> Router {
    test_app_with_cors(&CorsConfig::AllowAll)
}

pub fn test_app_with_cors(cors: &CorsConfig) -> Router {
    let ctx = bootstrap(&ServerConfig::with_defaults().with_max_sessions(16)).unwrap();
    create_router(ctx, cors)
}

/// Send a request, returning the response with its body collected.
pub async fn send(app: &Router, request: Request<Body>) -> (Response<()>, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    (
        Response::from_parts(parts, ()),
        String::from_utf8(bytes.to_vec()).unwrap(),
    )
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> (Response<()>, String) {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn post_form(
    app: &Router,
    uri: &str,
    body: &str,
    cookie: Option<&str>,
) -> (Response<()>, String) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
    cookie: Option<&str>,
) -> (Response<()>, String) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// The `name=value` pair of the session cookie set by a response.
pub fn session_cookie<T>(response: &Response<T>) -> String {
    let raw = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response sets a session cookie")
        .to_str()
        .unwrap();
    raw.split(';').next().unwrap().to_string()
}
