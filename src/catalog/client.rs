use std::time::Duration;

use tracing::warn;

use crate::config::CatalogConfig;
use crate::models::Movie;

/// Подпись-заглушка на время загрузки афиши.
pub const LOADING_CAPTION: &str = "Загружаем афишу...";

/// Результат загрузки афиши. Ошибка наружу не выходит: любой сбой
/// сворачивается в одно из статичных представлений.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    Loaded(Vec<Movie>),
    /// Ответ корректный, но показывать нечего (пустой массив или не массив).
    Empty,
    /// Сеть, не-2xx или тело, которое не разбирается.
    Unavailable,
}

impl CatalogView {
    pub fn movies(&self) -> &[Movie] {
        match self {
            CatalogView::Loaded(movies) => movies,
            _ => &[],
        }
    }

    /// Статичное сообщение вместо списка фильмов, если показывать нечего.
    pub fn fallback_caption(&self) -> Option<&'static str> {
        match self {
            CatalogView::Loaded(_) => None,
            CatalogView::Empty => Some("Фильмы пока не добавлены."),
            CatalogView::Unavailable => Some("Не удалось загрузить фильмы."),
        }
    }
}

/// Клиент афиши: единственный сетевой вызов демо.
#[derive(Clone)]
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Создаёт и конфигурирует клиент на основе настроек приложения.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /api/movies. Без повторов: один запрос, один warn при сбое.
    pub async fn fetch_movies(&self) -> CatalogView {
        let url = format!("{}/api/movies", self.base_url);

        let response = match self.http_client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("failed to fetch movie catalog: {:?}", e);
                return CatalogView::Unavailable;
            }
        };

        if !response.status().is_success() {
            warn!("movie catalog returned HTTP {}", response.status());
            return CatalogView::Unavailable;
        }

        let payload: serde_json::Value = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("movie catalog body is not valid JSON: {:?}", e);
                return CatalogView::Unavailable;
            }
        };

        // Не массив или пустой массив — афиша просто пуста.
        match payload.as_array() {
            None => return CatalogView::Empty,
            Some(items) if items.is_empty() => return CatalogView::Empty,
            Some(_) => {}
        }

        match serde_json::from_value::<Vec<Movie>>(payload) {
            Ok(movies) => CatalogView::Loaded(movies),
            Err(e) => {
                warn!("movie catalog payload is malformed: {:?}", e);
                CatalogView::Unavailable
            }
        }
    }
}
