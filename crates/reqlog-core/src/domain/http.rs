//! The request/response surface consumed by the interceptor

/// What the interceptor reads from an inbound request
pub trait InboundRequest {
    /// HTTP method (GET, POST, etc.)
    fn method(&self) -> &str;

    /// Path including the query string (e.g. `/api/users?page=2`)
    fn full_path(&self) -> &str;

    /// Raw request body
    fn body(&self) -> &[u8];
}

/// What the interceptor reads from an outgoing response
pub trait OutboundResponse {
    fn status_code(&self) -> u16;

    /// Declared `Content-Type`, if any
    fn content_type(&self) -> Option<&str>;

    fn body(&self) -> &[u8];
}

/// Owned request capture, for hosts that buffer the request up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    pub method: String,
    pub full_path: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn new(method: impl Into<String>, full_path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            full_path: full_path.into(),
            body: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }
}

impl InboundRequest for CapturedRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn full_path(&self) -> &str {
        &self.full_path
    }

    fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Owned response capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedResponse {
    pub status_code: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl CapturedResponse {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            content_type: None,
            body: Vec::new(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// JSON response with `application/json` content type
    pub fn json(status_code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status_code)
            .with_content_type("application/json")
            .with_body(body)
    }
}

impl OutboundResponse for CapturedResponse {
    fn status_code(&self) -> u16 {
        self.status_code
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    fn body(&self) -> &[u8] {
        &self.body
    }
}
