use h1core::config::Config;
use h1core::http::connection::Service;
use h1core::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.log_level()?)
        .init();

    let service = Service::new().body_policy(cfg.body_policy());

    tokio::select! {
        res = server::listener::run(&cfg, service) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
