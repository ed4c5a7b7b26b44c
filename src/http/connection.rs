use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, warn};

use crate::http::handler::Handler;
use crate::http::line_reader::LineReader;
use crate::http::parser::{BodyPolicy, parse_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Shared, read-only settings for every connection the acceptor hands over.
#[derive(Clone, Default)]
pub struct Service {
    handler: Option<Arc<dyn Handler>>,
    body_policy: BodyPolicy,
}

impl Service {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler(mut self, handler: impl Handler) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    pub fn body_policy(mut self, policy: BodyPolicy) -> Self {
        self.body_policy = policy;
        self
    }

    /// Serves exactly one request on `stream` and closes it.
    ///
    /// Never fails: errors are logged, and the stream is shut down and
    /// dropped on every path before this returns.
    pub async fn handle_connection<S>(&self, stream: S)
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut conn = Connection::new(stream, self.clone());
        if let Err(e) = conn.run().await {
            error!(error = %e, "Connection error");
        }
    }
}

pub struct Connection<S> {
    reader: LineReader<S>,
    service: Service,
    state: ConnectionState,
}

pub enum ConnectionState {
    Accepted,
    Parsing,
    Processing(Request),
    Responding(ResponseWriter),
    /// A parse failure is being reported with a 500
    ErrorResponding(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, service: Service) -> Self {
        Self {
            reader: LineReader::new(stream),
            service,
            state: ConnectionState::Accepted,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Drives the connection to `Closed`, then shuts the stream down.
    ///
    /// The shutdown is attempted even when an earlier step failed; its own
    /// failure is only logged.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.drive().await;
        self.state = ConnectionState::Closed;

        if let Err(e) = self.reader.get_mut().shutdown().await {
            debug!(error = %e, "Shutdown after response failed");
        }

        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Accepted => {
                    self.state = ConnectionState::Parsing;
                }

                ConnectionState::Parsing => {
                    let parsed = parse_request(&mut self.reader, self.service.body_policy).await;
                    self.state = match parsed {
                        Ok(req) => ConnectionState::Processing(req),
                        Err(e) if e.is_peer_gone() => {
                            debug!("Peer closed before sending a request line");
                            ConnectionState::Closed
                        }
                        Err(e) => {
                            warn!(error = %e, "Rejecting request");
                            let response = Response::internal_error(e.to_string());
                            ConnectionState::ErrorResponding(ResponseWriter::new(&response))
                        }
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.process(&req);
                    debug!(
                        method = %req.method,
                        target = %req.target,
                        status = response.status_code,
                        "Request processed"
                    );
                    self.state = ConnectionState::Responding(ResponseWriter::new(&response));
                }

                ConnectionState::Responding(mut writer)
                | ConnectionState::ErrorResponding(mut writer) => {
                    writer.write_to_stream(self.reader.get_mut()).await?;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    fn process(&self, req: &Request) -> Response {
        let Some(handler) = &self.service.handler else {
            return Response::default_ok();
        };

        match handler.handle(req) {
            Ok(response) => response,
            Err(e) => {
                error!(
                    method = %req.method,
                    target = %req.target,
                    error = %e,
                    "Handler failed"
                );
                Response::internal_error(e.to_string())
            }
        }
    }
}
