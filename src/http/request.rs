/// The only protocol version the server accepts and speaks.
pub const HTTP_1_1: &str = "HTTP/1.1";

/// Header fields keyed by their exact name as received.
///
/// Each name maps to every value seen for it, in arrival order. Iteration
/// over names follows the order in which each name first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, Vec<String>)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the sequence stored under `name`, creating the
    /// sequence on first use. Names are compared exactly.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((name, vec![value])),
        }
    }

    /// First value stored for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// Every value stored for `name`, in arrival order.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Iterates over distinct names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three fields of a request line, as sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub target: String,
    pub version: String,
}

/// A request line plus its header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHead {
    pub line: RequestLine,
    pub headers: Headers,
    /// Value of the last `Content-Length` header, or 0 when absent.
    pub content_length: i64,
}

/// Represents a parsed HTTP request from a client.
///
/// Only ever built for `HTTP/1.1` requests. When `content_length` is
/// positive the body holds that many bytes, or fewer if the peer closed
/// early and the lenient body policy let it through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request method token, not checked against any list
    pub method: String,
    /// The request target exactly as sent (not decoded)
    pub target: String,
    /// Always "HTTP/1.1"
    pub version: String,
    pub headers: Headers,
    pub content_length: i64,
    pub body: Vec<u8>,
}

impl RequestLine {
    /// Attaches a header block to this line.
    pub fn with_headers(self, headers: Headers, content_length: i64) -> RequestHead {
        RequestHead {
            line: self,
            headers,
            content_length,
        }
    }
}

impl RequestHead {
    /// Completes the request with its body.
    pub fn with_body(self, body: Vec<u8>) -> Request {
        Request {
            method: self.line.method,
            target: self.line.target,
            version: self.line.version,
            headers: self.headers,
            content_length: self.content_length,
            body,
        }
    }
}

impl Request {
    /// First value of the named header, matched by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn header_values(&self, name: &str) -> &[String] {
        self.headers.get_all(name)
    }
}

/// Builder for constructing Request objects, mostly for handlers under test.
///
/// `Content-Length` is derived from the body so the built request upholds
/// the same invariant as a parsed one.
pub struct RequestBuilder {
    method: Option<String>,
    target: Option<String>,
    headers: Headers,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(key, value);
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        let method = self.method.ok_or("method missing")?;
        let target = self.target.ok_or("target missing")?;
        if method.is_empty() || target.is_empty() {
            return Err("method and target must not be empty");
        }

        let line = RequestLine {
            method,
            target,
            version: HTTP_1_1.to_string(),
        };
        let content_length = self.body.len() as i64;
        Ok(line
            .with_headers(self.headers, content_length)
            .with_body(self.body))
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
