use std::sync::Arc;

use crate::models::Movie;

/// Афиша в памяти. Базы у демо нет: набор фильмов фиксируется при старте
/// и дальше только читается.
#[derive(Clone)]
pub struct MovieStore {
    movies: Arc<Vec<Movie>>,
}

impl MovieStore {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(movies),
        }
    }

    /// Стартовая афиша демо.
    pub fn seeded() -> Self {
        Self::new(seed_movies())
    }

    pub fn all(&self) -> Vec<Movie> {
        self.movies.as_ref().clone()
    }

    pub fn get(&self, id: i64) -> Option<Movie> {
        self.movies.iter().find(|m| m.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

fn seed_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "Квантовый рассвет".to_string(),
            description: Some(
                "Экипаж орбитальной станции «Заря» перехватывает сигнал, который не должен был дойти до Земли.".to_string(),
            ),
            duration: Some(142),
            genre: Some("Фантастика".to_string()),
            rating: Some(8.1),
            poster_url: Some("/posters/kvantovyi-rassvet.jpg".to_string()),
        },
        Movie {
            id: 2,
            title: "Последний сеанс".to_string(),
            description: Some(
                "Старый киномеханик готовит прощальный показ в кинотеатре, который завтра снесут.".to_string(),
            ),
            duration: Some(118),
            genre: Some("Драма".to_string()),
            rating: Some(7.6),
            poster_url: None,
        },
        Movie {
            id: 3,
            title: "Кот в большом городе".to_string(),
            description: Some(
                "Домашний кот Барсик случайно уезжает в столицу в фургоне с посылками.".to_string(),
            ),
            duration: Some(95),
            genre: Some("Мультфильм".to_string()),
            rating: Some(7.9),
            poster_url: Some("/posters/kot-v-bolshom-gorode.jpg".to_string()),
        },
        Movie {
            id: 4,
            title: "Ночной экспресс".to_string(),
            description: Some(
                "Пассажиры ночного поезда Алматы — Астана понимают, что среди них нет случайных людей.".to_string(),
            ),
            duration: Some(127),
            genre: Some("Триллер".to_string()),
            rating: Some(7.2),
            poster_url: None,
        },
        Movie {
            id: 5,
            title: "Свадьба по расписанию".to_string(),
            description: None,
            duration: Some(104),
            genre: Some("Комедия".to_string()),
            rating: Some(6.8),
            poster_url: None,
        },
        Movie {
            id: 6,
            title: "Степной ветер".to_string(),
            description: Some(
                "Подросток из маленького посёлка мечтает о большом конном марафоне.".to_string(),
            ),
            duration: Some(133),
            genre: Some("Приключения".to_string()),
            rating: Some(7.4),
            poster_url: None,
        },
    ]
}
