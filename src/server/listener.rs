use tokio::net::TcpListener;
use tracing::{Instrument, error, info, info_span};

use crate::config::Config;
use crate::http::connection::Service;

/// Binds the configured address and serves until the accept loop stops.
pub async fn run(cfg: &Config, service: Service) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, service).await
}

/// Accept loop over an already bound listener.
///
/// Each connection gets its own task; there is no cap on how many run at
/// once and no read or write deadline. A failed accept is logged and the
/// loop keeps going.
pub async fn serve(listener: TcpListener, service: Service) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let service = service.clone();
        tokio::spawn(
            async move {
                service.handle_connection(socket).await;
            }
            .instrument(info_span!("conn", %peer)),
        );
    }
}
