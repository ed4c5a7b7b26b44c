//! HTTP/1.1 request parsing and the per-connection lifecycle.
//!
//! # Architecture
//!
//! - **`line_reader`**: Buffered line reader over the client stream
//! - **`parser`**: Request line, header block and body parsing, plus the
//!   `parse_request` facade that runs them in order
//! - **`request`**: Request representation and the header map
//! - **`response`**: Response representation with builder pattern
//! - **`writer`**: Serializes and writes responses to the client
//! - **`handler`**: The application hook that turns a request into a response
//! - **`connection`**: The state machine that drives one connection
//! - **`error`**: Parse error taxonomy
//!
//! # Connection State Machine
//!
//! Every connection serves exactly one request:
//!
//! ```text
//!        ┌─────────────┐
//!        │  Accepted   │
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐  peer closed before request line
//!        │   Parsing   │ ─────────────────────────────────┐
//!        └──────┬──────┘                                  │
//!      ok       │       parse error                       │
//!     ┌─────────┴──────────┐                              │
//!     ▼                    ▼                              │
//! ┌────────────┐   ┌─────────────────┐                    │
//! │ Processing │   │ ErrorResponding │ ← 500 with reason  │
//! └─────┬──────┘   └────────┬────────┘                    │
//!       ▼                   │                             │
//! ┌────────────┐            │                             │
//! │ Responding │            │                             │
//! └─────┬──────┘            │                             │
//!       └─────────┬─────────┘                             │
//!                 ▼                                       │
//!          ┌────────────┐                                 │
//!          │   Closed   │ ◄───────────────────────────────┘
//!          └────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use h1core::http::connection::Service;
//! use h1core::http::request::Request;
//! use h1core::http::response::Response;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8888").await?;
//!     let service = Service::new().handler(|req: &Request| -> anyhow::Result<Response> {
//!         Ok(Response::ok(format!("you asked for {}", req.target)))
//!     });
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let service = service.clone();
//!         tokio::spawn(async move {
//!             service.handle_connection(socket).await;
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod error;
pub mod handler;
pub mod line_reader;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
