//! TCP acceptor: binds the listening socket and spawns one task per client.

pub mod listener;
