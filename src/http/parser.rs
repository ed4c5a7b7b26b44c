use tokio::io::AsyncRead;
use tracing::warn;

use crate::http::error::{ParseError, Stage};
use crate::http::line_reader::LineReader;
use crate::http::request::{HTTP_1_1, Headers, Request, RequestLine};

const CONTENT_LENGTH: &str = "Content-Length";

/// What to do when the peer closes before sending the whole body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyPolicy {
    /// Keep whatever arrived; the body may be shorter than declared.
    #[default]
    Lenient,
    /// Fail with `EndOfStream` at the body stage.
    Strict,
}

/// Parses one request off `reader`: request line, headers, then body.
///
/// Stops at the first failure and returns it unchanged. Nothing already
/// consumed is re-read.
pub async fn parse_request<R>(
    reader: &mut LineReader<R>,
    policy: BodyPolicy,
) -> Result<Request, ParseError>
where
    R: AsyncRead + Unpin,
{
    let line = reader.read_line(Stage::RequestLine).await?;
    let request_line = parse_request_line(&line)?;

    if request_line.version != HTTP_1_1 {
        return Err(ParseError::UnsupportedVersion(request_line.version));
    }

    let (headers, content_length) = parse_headers(reader).await?;
    let head = request_line.with_headers(headers, content_length);

    let body = read_body(reader, head.content_length, policy).await?;
    Ok(head.with_body(body))
}

/// Splits `METHOD TARGET VERSION` on single spaces.
///
/// Exactly three non-empty fields are required. The version is not checked
/// here.
pub fn parse_request_line(line: &str) -> Result<RequestLine, ParseError> {
    let fields: Vec<&str> = line.split(' ').collect();

    match fields.as_slice() {
        [method, target, version] if fields.iter().all(|f| !f.is_empty()) => Ok(RequestLine {
            method: method.to_string(),
            target: target.to_string(),
            version: version.to_string(),
        }),
        _ => Err(ParseError::Malformed(format!("invalid request line: {line}"))),
    }
}

/// Splits a `Name: Value` line on its first colon and trims both sides.
pub fn parse_field_line(line: &str) -> Result<(&str, &str), ParseError> {
    let (name, value) = line.split_once(':').ok_or_else(|| {
        ParseError::Malformed(format!("field line should have separator ':' || {line}"))
    })?;

    Ok((name.trim(), value.trim()))
}

/// Reads field lines up to and including the blank line that ends them.
///
/// Returns the headers and the value of the last `Content-Length` seen (0
/// when there was none). `Content-Length` is stored with the other headers
/// as well.
pub async fn parse_headers<R>(reader: &mut LineReader<R>) -> Result<(Headers, i64), ParseError>
where
    R: AsyncRead + Unpin,
{
    let mut headers = Headers::new();
    let mut content_length = 0;

    loop {
        let line = reader.read_line(Stage::Headers).await?;
        if line.is_empty() {
            break;
        }

        let (name, value) = parse_field_line(&line)?;
        if name == CONTENT_LENGTH {
            content_length = value
                .parse::<i64>()
                .map_err(|e| ParseError::InvalidContentLength(format!("{value:?}: {e}")))?;
        }
        headers.append(name, value);
    }

    Ok((headers, content_length))
}

/// Reads `content_length` body bytes. Non-positive lengths read nothing.
///
/// Memory grows with the bytes actually received, never with the declared
/// length, so a lying `Content-Length` costs nothing up front.
pub async fn read_body<R>(
    reader: &mut LineReader<R>,
    content_length: i64,
    policy: BodyPolicy,
) -> Result<Vec<u8>, ParseError>
where
    R: AsyncRead + Unpin,
{
    if content_length <= 0 {
        return Ok(Vec::new());
    }

    let expected = usize::try_from(content_length)
        .map_err(|e| ParseError::InvalidContentLength(format!("{content_length}: {e}")))?;
    let body = reader.read_up_to(expected, Stage::Body).await?;

    if body.len() < expected {
        match policy {
            BodyPolicy::Strict => return Err(ParseError::EndOfStream { stage: Stage::Body }),
            BodyPolicy::Lenient => {
                warn!(
                    expected,
                    received = body.len(),
                    "Peer closed before sending the full body"
                );
            }
        }
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_request_line() {
        let line = parse_request_line("GET /index.html HTTP/1.1").unwrap();

        assert_eq!(line.method, "GET");
        assert_eq!(line.target, "/index.html");
        assert_eq!(line.version, "HTTP/1.1");
    }

    #[test]
    fn request_line_keeps_target_opaque() {
        let line = parse_request_line("BREW /pot%201?milk=yes HTTP/1.1").unwrap();

        assert_eq!(line.method, "BREW");
        assert_eq!(line.target, "/pot%201?milk=yes");
    }

    #[test]
    fn request_line_rejects_empty_fields() {
        assert!(matches!(
            parse_request_line("GET  HTTP/1.1"),
            Err(ParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_request_line(" / HTTP/1.1"),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn field_line_splits_on_first_colon() {
        let (name, value) = parse_field_line("Host:  localhost:8888 ").unwrap();

        assert_eq!(name, "Host");
        assert_eq!(value, "localhost:8888");
    }

    #[test]
    fn field_line_without_colon_names_the_line() {
        let err = parse_field_line("BadHeader").unwrap_err();

        assert_eq!(err.to_string(), "field line should have separator ':' || BadHeader");
    }
}
