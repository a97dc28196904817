use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{SeatKey, Show, TicketType};

/// Строка сводки по одному выбранному месту.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketLine {
    pub seat: SeatKey,
    pub ticket_type: TicketType,
    pub price: u32,
}

impl TicketLine {
    /// "Ряд B, место 7 — Студент — 1 900 ₸"
    pub fn display_line(&self) -> String {
        format!(
            "Ряд {}, место {} — {} — {}",
            self.seat.row(),
            self.seat.number(),
            self.ticket_type.label(),
            format_tenge(self.price)
        )
    }
}

/// Сводка текущего выбора: производная от состояния, без собственной жизни.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub show: Option<Show>,
    pub tickets: Vec<TicketLine>,
    pub total_price: u32,
}

impl Summary {
    pub fn count(&self) -> usize {
        self.tickets.len()
    }

    /// Кнопка "Забронировать" активна только при выбранном сеансе и местах.
    pub fn booking_enabled(&self) -> bool {
        self.show.is_some() && !self.tickets.is_empty()
    }

    pub fn caption(&self) -> String {
        match self.show {
            Some(show) if !self.tickets.is_empty() => {
                format!("{} · {} мест(а)", show, self.tickets.len())
            }
            _ => "Выберите один или несколько мест на схеме.".to_string(),
        }
    }

    pub fn total_label(&self) -> String {
        format_tenge(self.total_price)
    }
}

/// Запись подтверждения брони. Только для показа: бэкенда у демо нет,
/// ничего никуда не сохраняется.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub id: Uuid,
    pub movie_title: String,
    pub show: Show,
    pub tickets: Vec<TicketLine>,
    pub total_price: u32,
    pub created_at: DateTime<Utc>,
}

impl Confirmation {
    /// Текст диалога подтверждения, как в веб-версии демо.
    pub fn display_text(&self) -> String {
        format!(
            "Демо: бронь создана.\n\n\
             Фильм: {}\n\
             Зал: {}\n\
             Время: {}\n\
             Мест: {}\n\
             Сумма: {}\n\n\
             (В учебной версии данные не сохраняются в базе.)",
            self.movie_title,
            self.show.hall,
            self.show.time_label(),
            self.tickets.len(),
            format_tenge(self.total_price)
        )
    }
}

/// Форматирование суммы в тенге с разбиением на тысячи: 2500 -> "2 500 ₸".
pub fn format_tenge(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out.push_str(" ₸");
    out
}
