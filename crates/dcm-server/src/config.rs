//! Конфигурация сервера инвентаря.

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Адрес для прослушивания (например "0.0.0.0:8080")
    pub listen: String,

    /// URL подключения к БД (sqlite или postgres)
    pub db_url: String,
}

