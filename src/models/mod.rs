pub mod movie;
pub mod seat;
pub mod show;
pub mod ticket;

pub use movie::Movie;
pub use seat::{SeatKey, SeatKeyError, SEATS_PER_ROW, SEAT_ROWS};
pub use show::Show;
pub use ticket::TicketType;
