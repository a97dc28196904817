use super::state::{BookingError, BookingState, SeatToggle};
use super::summary::Confirmation;
use crate::models::{SeatKey, TicketType};

/// Команды экрана бронирования — по одной на каждое действие пользователя.
/// Фильм и сеанс адресуются позицией в афише / расписании.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectMovie { index: usize },
    SelectShow { index: usize },
    ToggleSeat { seat: SeatKey },
    SetTicketType { seat: SeatKey, ticket_type: TicketType },
    Clear,
    Confirm,
}

/// Результат применения команды.
#[derive(Debug, PartialEq)]
pub enum Applied {
    Updated,
    /// Команда допустима, но в текущем состоянии ничего не меняет
    /// (щелчок по месту без выбранного сеанса).
    Ignored,
    Confirmed(Confirmation),
}

impl BookingState {
    /// Единственная точка обновления состояния: каждое действие пользователя
    /// проходит через эту функцию.
    pub fn apply(&mut self, command: Command) -> Result<Applied, BookingError> {
        match command {
            Command::SelectMovie { index } => {
                self.select_movie(index)?;
                Ok(Applied::Updated)
            }
            Command::SelectShow { index } => {
                self.select_show(index)?;
                Ok(Applied::Updated)
            }
            Command::ToggleSeat { seat } => Ok(match self.toggle_seat(seat) {
                SeatToggle::Ignored => Applied::Ignored,
                SeatToggle::Selected | SeatToggle::Released => Applied::Updated,
            }),
            Command::SetTicketType { seat, ticket_type } => {
                self.set_ticket_type(seat, ticket_type)?;
                Ok(Applied::Updated)
            }
            Command::Clear => {
                self.clear_selection();
                Ok(Applied::Updated)
            }
            Command::Confirm => Ok(Applied::Confirmed(self.confirm()?)),
        }
    }
}
