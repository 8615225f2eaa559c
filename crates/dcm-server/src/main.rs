//! Точка входа сервера инвентаря устройств.

use clap::Parser;
use dcm_server::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dcm-server",
    about = "Инвентарь устройств: REST API и HTML-представление"
)]
struct Cli {
    /// Адрес для прослушивания (host:port)
    #[arg(long, default_value = "0.0.0.0:8080", env = "LISTEN_ADDR")]
    listen: String,

    /// URL базы данных
    #[arg(
        long,
        default_value = "sqlite:./devices.db?mode=rwc",
        env = "DATABASE_URL"
    )]
    db_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логгера (RUST_LOG, по умолчанию info)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ServerConfig {
        listen: cli.listen,
        db_url: cli.db_url,
    };

    dcm_server::run(config).await
}
