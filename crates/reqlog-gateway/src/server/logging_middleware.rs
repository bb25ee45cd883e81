//! HTTP Request/Response Logging Middleware
//!
//! Drives [`LoggingInterceptor`] around an axum router. Request bodies and
//! JSON response bodies are buffered, observed and forwarded unchanged.
//! Other responses and exempt paths keep their original body stream.

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{header::CONTENT_TYPE, HeaderMap, Uri},
    middleware::Next,
    response::Response,
};
use futures::stream;
use http_body_util::BodyExt;
use reqlog_core::{is_json_content_type, InboundRequest, LoggingInterceptor, OutboundResponse};
use std::sync::Arc;
use tracing::{warn, Instrument};

use crate::logging::{RequestSpan, TraceContext};

/// Borrowed view of a buffered request
struct BufferedRequest<'a> {
    method: &'a str,
    full_path: &'a str,
    body: &'a [u8],
}

impl InboundRequest for BufferedRequest<'_> {
    fn method(&self) -> &str {
        self.method
    }

    fn full_path(&self) -> &str {
        self.full_path
    }

    fn body(&self) -> &[u8] {
        self.body
    }
}

/// Borrowed view of a buffered response
struct BufferedResponse<'a> {
    status_code: u16,
    content_type: Option<&'a str>,
    body: &'a [u8],
}

impl OutboundResponse for BufferedResponse<'_> {
    fn status_code(&self) -> u16 {
        self.status_code
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type
    }

    fn body(&self) -> &[u8] {
        self.body
    }
}

/// Path plus query string, e.g. `/api/users?page=2`
pub fn full_path(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

/// `Content-Type` header value, if present and valid ASCII
fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
}

/// A body read to the end, or up to the frame that failed
enum BufferedBody {
    Complete(Bytes),
    Failed { partial: Bytes, error: axum::Error },
}

impl BufferedBody {
    fn observed(&self) -> &Bytes {
        match self {
            BufferedBody::Complete(bytes) => bytes,
            BufferedBody::Failed { partial, .. } => partial,
        }
    }

    /// Body handed downstream: the same bytes, then the same failure if there was one
    fn into_body(self) -> Body {
        match self {
            BufferedBody::Complete(bytes) => Body::from(bytes),
            BufferedBody::Failed { partial, error } => {
                Body::from_stream(stream::iter([Ok(partial), Err(error)]))
            }
        }
    }
}

/// Read data frames until the body ends or errors; trailers are dropped
async fn buffer_body(mut body: Body) -> BufferedBody {
    let mut data = Vec::new();
    while let Some(frame) = body.frame().await {
        match frame {
            Ok(frame) => {
                if let Ok(chunk) = frame.into_data() {
                    data.extend_from_slice(&chunk);
                }
            }
            Err(error) => {
                return BufferedBody::Failed {
                    partial: Bytes::from(data),
                    error,
                }
            }
        }
    }
    BufferedBody::Complete(Bytes::from(data))
}

/// Logging middleware for requests and responses
///
/// Use with `axum::middleware::from_fn_with_state(interceptor, request_logging_middleware)`.
///
/// Only JSON response bodies are buffered; every other response keeps its
/// original body stream. Body read failures are passed on to the next reader
/// instead of turning into a different response.
pub async fn request_logging_middleware(
    State(interceptor): State<Arc<LoggingInterceptor>>,
    request: Request,
    next: Next,
) -> Response {
    let full_path = full_path(request.uri());

    if interceptor.is_exempt(&full_path) {
        return next.run(request).await;
    }

    let method = request.method().to_string();
    let ctx = TraceContext::new(&method, &full_path);
    let span = RequestSpan::enter(&ctx);

    async move {
        let (parts, body) = request.into_parts();
        let request_body = buffer_body(body).await;
        if let BufferedBody::Failed { error, .. } = &request_body {
            warn!(trace_id = %ctx.trace_id, "Failed to read request body: {}", error);
        }

        let observed_body = request_body.observed().clone();
        let observed = BufferedRequest {
            method: &method,
            full_path: &full_path,
            body: &observed_body,
        };
        interceptor.on_request_enter(&observed);

        let request = Request::from_parts(parts, request_body.into_body());
        let response = next.run(request).await;

        let (parts, body) = response.into_parts();
        let status = parts.status.as_u16();
        let declared_type = content_type(&parts.headers);

        if !is_json_content_type(declared_type) {
            interceptor.on_response_exit(
                &observed,
                BufferedResponse {
                    status_code: status,
                    content_type: declared_type,
                    body: &[],
                },
            );
            RequestSpan::log_exit(&ctx, status);
            return Response::from_parts(parts, body);
        }

        let response_body = buffer_body(body).await;
        match &response_body {
            BufferedBody::Complete(bytes) => {
                interceptor.on_response_exit(
                    &observed,
                    BufferedResponse {
                        status_code: status,
                        content_type: declared_type,
                        body: bytes,
                    },
                );
            }
            BufferedBody::Failed { error, .. } => {
                warn!(trace_id = %ctx.trace_id, "Failed to read response body: {}", error);
                // Status line only; a cut-off JSON body is not logged
                interceptor.on_response_exit(
                    &observed,
                    BufferedResponse {
                        status_code: status,
                        content_type: None,
                        body: &[],
                    },
                );
            }
        }

        RequestSpan::log_exit(&ctx, status);

        Response::from_parts(parts, response_body.into_body())
    }
    .instrument(span)
    .await
}
