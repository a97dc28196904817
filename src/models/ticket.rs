use serde::{Deserialize, Serialize};

/// Категория билета. Цены фиксированные, в тенге.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    #[default]
    Adult,
    Student,
    Child,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Student, TicketType::Child];

    pub const fn price(self) -> u32 {
        match self {
            TicketType::Adult => 2500,
            TicketType::Student => 1900,
            TicketType::Child => 1600,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TicketType::Adult => "Взрослый",
            TicketType::Student => "Студент",
            TicketType::Child => "Детский",
        }
    }
}
