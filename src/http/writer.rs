use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const CONTENT_LENGTH: &str = "Content-Length";

/// Renders the status line, headers, blank line and body.
///
/// `Content-Length` always comes first and is computed from the body.
/// Handler-supplied headers follow in insertion order; any
/// `Content-Length` among them is dropped.
pub fn serialize_response(resp: &Response) -> Bytes {
    let mut buf = BytesMut::with_capacity(64 + resp.body.len());

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        resp.version, resp.status_code, resp.status_message
    );
    buf.put_slice(status_line.as_bytes());

    buf.put_slice(format!("{CONTENT_LENGTH}: {}\r\n", resp.content_length()).as_bytes());

    for (name, values) in resp.headers.iter() {
        if name == CONTENT_LENGTH {
            continue;
        }
        for value in values {
            buf.put_slice(name.as_bytes());
            buf.put_slice(b": ");
            buf.put_slice(value.as_bytes());
            buf.put_slice(b"\r\n");
        }
    }

    // Header/body separator
    buf.put_slice(b"\r\n");

    buf.put_slice(&resp.body);

    buf.freeze()
}

/// Writes one serialized response, resuming after partial writes.
///
/// A writer is single-use: it remembers how much it has sent, so calling
/// `write_to_stream` again after it finished writes nothing. Build a new
/// writer to send the same response again.
pub struct ResponseWriter {
    buffer: Bytes,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
