use std::fmt;
use thiserror::Error;

/// The part of the request that was being read when a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    RequestLine,
    Headers,
    Body,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::RequestLine => "request line",
            Stage::Headers => "header line",
            Stage::Body => "body",
        };
        f.write_str(name)
    }
}

/// Errors produced while parsing a request off a connection.
///
/// The `Display` text of each variant is what the client sees in the body of
/// the 500 response, so it is kept short and plain.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Peer closed the stream before the required data arrived.
    #[error("connection closed while reading {stage}")]
    EndOfStream { stage: Stage },

    /// Request line without three fields, field line without ':', or bytes
    /// that are not valid UTF-8.
    #[error("{0}")]
    Malformed(String),

    /// Anything other than the literal `HTTP/1.1`.
    #[error("unsupported protocol version: {0}")]
    UnsupportedVersion(String),

    #[error("invalid content length: {0}")]
    InvalidContentLength(String),

    #[error("failed to read {stage}: {source}")]
    Io {
        stage: Stage,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// True when the peer went away before sending a request line.
    ///
    /// This is the only failure for which no response is written.
    pub fn is_peer_gone(&self) -> bool {
        matches!(
            self,
            ParseError::EndOfStream {
                stage: Stage::RequestLine
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_request_line_eof_is_silent() {
        assert!(ParseError::EndOfStream { stage: Stage::RequestLine }.is_peer_gone());
        assert!(!ParseError::EndOfStream { stage: Stage::Headers }.is_peer_gone());
        assert!(!ParseError::EndOfStream { stage: Stage::Body }.is_peer_gone());
        assert!(!ParseError::Malformed("x".into()).is_peer_gone());
    }

    #[test]
    fn display_names_the_stage() {
        let err = ParseError::EndOfStream { stage: Stage::Headers };
        assert_eq!(err.to_string(), "connection closed while reading header line");

        let err = ParseError::UnsupportedVersion("HTTP/1.0".into());
        assert_eq!(err.to_string(), "unsupported protocol version: HTTP/1.0");
    }
}
