use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub catalog: CatalogConfig,
    pub features: FeatureFlags,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Настройки загрузки афиши
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

// Feature flags для включения/выключения функциональности
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    pub run_demo_flow: bool,
}

impl Config {
    // Всё с дефолтами: демо должно стартовать без единой переменной окружения.
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinema_demo=debug,tower_http=debug".to_string()),
            },
            catalog: CatalogConfig {
                base_url: env::var("CATALOG_BASE_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
                request_timeout_secs: env::var("CATALOG_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("CATALOG_TIMEOUT_SECONDS must be a valid number"),
            },
            features: FeatureFlags {
                run_demo_flow: env::var("RUN_DEMO_FLOW")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .expect("RUN_DEMO_FLOW must be true or false"),
            },
        }
    }
}
