use crate::http::request::Request;
use crate::http::response::Response;

/// Application hook called once for every successfully parsed request.
///
/// An `Err` is treated as a generic processing failure: the connection
/// answers `500 Internal Server Error` with the error text as the body.
///
/// Closures with the matching signature implement this trait:
///
/// ```
/// # use h1core::http::handler::Handler;
/// # use h1core::http::request::Request;
/// # use h1core::http::response::Response;
/// let echo = |req: &Request| -> anyhow::Result<Response> {
///     Ok(Response::ok(req.target.clone()))
/// };
/// # fn takes(_: impl Handler) {}
/// takes(echo);
/// ```
pub trait Handler: Send + Sync + 'static {
    fn handle(&self, request: &Request) -> anyhow::Result<Response>;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> anyhow::Result<Response> + Send + Sync + 'static,
{
    fn handle(&self, request: &Request) -> anyhow::Result<Response> {
        (self)(request)
    }
}
