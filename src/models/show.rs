use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Сеанс: зал + время начала. На проводе время — строка "HH:MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Show {
    pub hall: u8,
    #[serde(with = "time_hm")]
    pub time: NaiveTime,
}

impl Show {
    /// Подпись кнопки сеанса: "11:00 · Зал 1".
    pub fn chip_label(&self) -> String {
        format!("{} · Зал {}", self.time.format("%H:%M"), self.hall)
    }

    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Зал {}, {}", self.hall, self.time.format("%H:%M"))
    }
}

// serde-помощник для формата "HH:MM".
mod time_hm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
