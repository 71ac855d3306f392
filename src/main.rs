use tracing_subscriber::{EnvFilter, fmt};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    fmt().with_env_filter(filter).init();

    // Startup banner at info level so something always prints at default verbosity
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "<unset>".to_string());
    let cfg = dashauth::config::Config::from_env();
    info!(
        target: "dashauth",
        "dashauth starting: RUST_LOG='{}', data_dir='{}', login_delay_ms={}",
        rust_log,
        cfg.data_dir.display(),
        cfg.login_delay.as_millis()
    );

    dashauth::cli::run(cfg).await
}
