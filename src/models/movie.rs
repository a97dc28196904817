use serde::{Deserialize, Serialize};

// Фильм приходит извне (GET /api/movies) и дальше не изменяется.
// На проводе все поля в нижнем регистре, кроме posterUrl.
// Необязательные поля могут отсутствовать в ответе.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>, // minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, rename = "posterUrl", skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

impl Movie {
    // Заголовок карточки: пустой title показываем как заглушку.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "(Без названия)"
        } else {
            &self.title
        }
    }

    // Строка метаданных под заголовком: "Жанр · 136 мин".
    pub fn meta_line(&self) -> String {
        let genre = self.genre.as_deref().unwrap_or("Жанр не указан");
        let duration = match self.duration {
            Some(min) => format!("{} мин", min),
            None => "длительность неизвестна".to_string(),
        };
        format!("{} · {}", genre, duration)
    }
}
