//! h1core - single-shot HTTP/1.1 server core
//!
//! Reads one request per TCP connection, hands it to a [`http::handler::Handler`],
//! writes one response and closes the connection.

pub mod config;
pub mod http;
pub mod server;
