use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::http::error::{ParseError, Stage};

const READ_CHUNK: usize = 4096;

/// Buffered reader that hands out one line at a time.
///
/// Bytes read past a line terminator stay in the buffer for the next call,
/// and the same buffer feeds [`LineReader::read_up_to`] once the header
/// block is done.
pub struct LineReader<R> {
    inner: R,
    buffer: BytesMut,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: BytesMut::with_capacity(READ_CHUNK),
        }
    }

    /// Reads up to and including the next `\n`.
    ///
    /// The terminator and any trailing whitespace (so a `\r` too) are
    /// stripped. Fails with `EndOfStream` when the peer closes before a
    /// terminator shows up, even if part of a line was received.
    pub async fn read_line(&mut self, stage: Stage) -> Result<String, ParseError> {
        let mut scanned = 0;
        loop {
            if let Some(pos) = self.buffer[scanned..].iter().position(|&b| b == b'\n') {
                let raw = self.buffer.split_to(scanned + pos + 1);
                let line = std::str::from_utf8(&raw).map_err(|_| {
                    ParseError::Malformed(format!("{stage} is not valid UTF-8"))
                })?;
                return Ok(line.trim_end().to_string());
            }

            scanned = self.buffer.len();
            if self.fill(stage).await? == 0 {
                return Err(ParseError::EndOfStream { stage });
            }
        }
    }

    /// Reads until `n` bytes are available or the stream ends, whichever
    /// comes first. The caller decides what a short result means.
    pub async fn read_up_to(&mut self, n: usize, stage: Stage) -> Result<Vec<u8>, ParseError> {
        while self.buffer.len() < n {
            if self.fill(stage).await? == 0 {
                break;
            }
        }

        let take = n.min(self.buffer.len());
        Ok(self.buffer.split_to(take).to_vec())
    }

    /// Bytes received but not yet handed out.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    async fn fill(&mut self, stage: Stage) -> Result<usize, ParseError> {
        self.buffer.reserve(READ_CHUNK);
        self.inner
            .read_buf(&mut self.buffer)
            .await
            .map_err(|source| ParseError::Io { stage, source })
    }
}
