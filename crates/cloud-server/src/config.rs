//! Конфигурация сервера облачных ресурсов.

use sea_orm::ConnectOptions;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Адрес для прослушивания (например "0.0.0.0:8000")
    pub listen: String,

    /// URL подключения к БД (sqlite или postgres)
    pub db_url: String,

    /// Максимум соединений в пуле
    pub db_max_connections: u32,

    /// Таймаут установки соединения и ожидания свободного соединения из пула
    pub db_timeout: Duration,
}

impl ServerConfig {
    /// Параметры пула соединений sea-orm.
    pub fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.db_url.clone());
        options
            .max_connections(self.db_max_connections)
            .connect_timeout(self.db_timeout)
            .acquire_timeout(self.db_timeout)
            .sqlx_logging(false);
        options
    }
}
