//! Точка входа API облачных ресурсов.

use clap::Parser;
use cloud_server::config::ServerConfig;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cloud-server", about = "API управления виртуальными машинами и серверами")]
struct Cli {
    /// Адрес для прослушивания (host:port)
    #[arg(long, default_value = "0.0.0.0:8000", env = "CLOUD_LISTEN")]
    listen: String,

    /// URL базы данных
    #[arg(
        long,
        default_value = "sqlite:./cloud.db?mode=rwc",
        env = "DATABASE_URL"
    )]
    db_url: String,

    /// Максимум соединений в пуле БД
    #[arg(long, default_value_t = 10)]
    db_max_connections: u32,

    /// Таймаут операций с пулом БД, секунды
    #[arg(long, default_value_t = 8)]
    db_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логгера
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.db_max_connections == 0 {
        anyhow::bail!("--db-max-connections должен быть больше нуля");
    }

    let config = ServerConfig {
        listen: cli.listen,
        db_url: cli.db_url,
        db_max_connections: cli.db_max_connections,
        db_timeout: Duration::from_secs(cli.db_timeout_secs),
    };

    cloud_server::run(config).await
}
