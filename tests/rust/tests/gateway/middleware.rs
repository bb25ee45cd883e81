//! request_logging_middleware on a custom router

use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    middleware,
    response::Response,
    routing::{get, post},
    Router,
};
use futures::stream::{self, StreamExt};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use std::convert::Infallible;
use std::io;
use std::sync::Arc;
use tower::ServiceExt;

use reqlog_core::LoggingInterceptor;
use reqlog_gateway::request_logging_middleware;
use tests::fixtures::{error, info, scenario_interceptor};
use tests::async_helpers::{with_timeout, DEFAULT_TIMEOUT};
use tests::http::body_string;

/// Event stream that sends one event and then stays open
fn open_event_stream() -> Response {
    let events = stream::once(async { Ok::<_, Infallible>("data: hello\n\n") })
        .chain(stream::pending());
    Response::builder()
        .header(CONTENT_TYPE, "text/event-stream")
        .body(Body::from_stream(events))
        .unwrap()
}

/// JSON body that fails after its first chunk
fn broken_json() -> Response {
    let chunks = stream::iter(vec![
        Ok(Bytes::from_static(b"{\"partial\":")),
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "upstream reset")),
    ]);
    Response::builder()
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from_stream(chunks))
        .unwrap()
}

fn router(interceptor: Arc<LoggingInterceptor>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/items",
            post(|body: String| async move {
                ([(CONTENT_TYPE, "application/json")], body)
            }),
        )
        .route(
            "/api/teapot",
            get(|| async {
                (
                    StatusCode::IM_A_TEAPOT,
                    [(CONTENT_TYPE, "application/json")],
                    "{\n  \"short\": true\n}",
                )
            }),
        )
        .route("/events", get(|| async { open_event_stream() }))
        .route("/api/broken", get(|| async { broken_json() }))
        .route(
            "/api/upload",
            post(|body: Body| async move {
                match body.collect().await {
                    Ok(collected) => format!("complete {}", collected.to_bytes().len()),
                    Err(_) => "body error seen".to_string(),
                }
            }),
        )
        .layer(middleware::from_fn_with_state(
            interceptor,
            request_logging_middleware,
        ))
}

#[tokio::test]
async fn test_request_body_reaches_handler_unchanged() {
    let (interceptor, sink) = scenario_interceptor();
    let body = r#"{"name":"widget","qty":3}"#;

    let response = router(interceptor)
        .oneshot(
            Request::post("/api/items")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, body);
    assert_eq!(
        sink.lines(),
        vec![
            info(&format!("POST {}", body)),
            info(body),
            info("POST /api/items - 200"),
            info(body),
        ]
    );
}

#[tokio::test]
async fn test_multiline_error_body_logged_per_line() {
    let (interceptor, sink) = scenario_interceptor();

    let response = router(interceptor)
        .oneshot(Request::get("/api/teapot").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    assert_eq!(body_string(response).await, "{\n  \"short\": true\n}");
    assert_eq!(
        sink.lines(),
        vec![
            info("GET "),
            error("GET /api/teapot - 418"),
            error("{"),
            error("  \"short\": true"),
            error("}"),
        ]
    );
}

#[tokio::test]
async fn test_exempt_route_is_untouched() {
    let (interceptor, sink) = scenario_interceptor();

    let response = router(interceptor)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_unrouted_path_logged_as_error() {
    let (interceptor, sink) = scenario_interceptor();

    let response = router(interceptor)
        .oneshot(Request::get("/nowhere?x=1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(sink.lines(), vec![info("GET "), error("GET /nowhere?x=1 - 404")]);
}

#[tokio::test]
async fn test_event_stream_is_not_buffered() {
    let (interceptor, sink) = scenario_interceptor();

    let response = with_timeout(
        DEFAULT_TIMEOUT,
        router(interceptor).oneshot(Request::get("/events").body(Body::empty()).unwrap()),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "text/event-stream"
    );

    // First event arrives while the stream is still open
    let mut body = response.into_body();
    let frame = with_timeout(DEFAULT_TIMEOUT, body.frame())
        .await
        .expect("stream ended early")
        .expect("stream errored");
    assert_eq!(frame.into_data().unwrap(), "data: hello\n\n");

    assert_eq!(sink.lines(), vec![info("GET "), info("GET /events - 200")]);
}

#[tokio::test]
async fn test_failing_json_body_reaches_client_as_failure() {
    let (interceptor, sink) = scenario_interceptor();

    let response = router(interceptor)
        .oneshot(Request::get("/api/broken").body(Body::empty()).unwrap())
        .await
        .unwrap();

    // The handler's status survives; the body fails for the client as it would have
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.into_body().collect().await.is_err());
    assert_eq!(sink.lines(), vec![info("GET "), info("GET /api/broken - 200")]);
}

#[tokio::test]
async fn test_failing_request_body_reaches_handler_as_failure() {
    let (interceptor, sink) = scenario_interceptor();
    let chunks = stream::iter(vec![
        Ok(Bytes::from_static(b"abc")),
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "client went away")),
    ]);

    let response = router(interceptor)
        .oneshot(
            Request::post("/api/upload")
                .body(Body::from_stream(chunks))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "body error seen");
    assert_eq!(
        sink.lines(),
        vec![
            info("POST abc"),
            info("abc"),
            info("POST /api/upload - 200"),
        ]
    );
}
