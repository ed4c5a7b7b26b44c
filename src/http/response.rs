use crate::http::request::{HTTP_1_1, Headers};

/// Statuses the connection itself produces. Handlers pick anything else
/// through [`ResponseBuilder::with_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    /// Every parse or handler failure is reported with this one
    InternalServerError,
}

impl StatusCode {
    /// # Example
    ///
    /// ```
    /// # use h1core::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::InternalServerError => 500,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// The single reply written on a connection.
///
/// There is no content-length field: the writer always derives
/// `Content-Length` from `body`, and ignores any such entry in `headers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status_code: u16,
    pub status_message: String,
    pub version: String,
    /// Extra headers added by a handler
    pub headers: Headers,
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use h1core::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "application/json")
///     .body("{}")
///     .build();
/// assert_eq!(response.status_code, 200);
/// ```
pub struct ResponseBuilder {
    status_code: u16,
    status_message: String,
    headers: Headers,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self::with_status(status.as_u16(), status.reason_phrase())
    }

    /// Starts from an arbitrary code and message, for statuses without a
    /// `StatusCode` variant.
    pub fn with_status(code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code: code,
            status_message: message.into(),
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// Appends a header value. Repeating a name adds another line on the wire.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(key, value);
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Response {
        Response {
            status_code: self.status_code,
            status_message: self.status_message,
            version: HTTP_1_1.to_string(),
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a simple 200 OK response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok).body(body).build()
    }

    /// What a connection sends when no handler is registered.
    pub fn default_ok() -> Self {
        Self::ok("OK")
    }

    /// Creates a 500 response carrying `description` as its body.
    pub fn internal_error(description: impl Into<String>) -> Self {
        let description: String = description.into();
        ResponseBuilder::new(StatusCode::InternalServerError)
            .body(description)
            .build()
    }

    /// Value the writer will emit for `Content-Length`.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
