//! booking
//!
//! Состояние экрана бронирования и вся его логика.
//!
//! Ключевые компоненты:
//! 1.  **BookingState**: явно владеемое состояние — афиша, выбранный фильм,
//!     выбранный сеанс и карта выбранных мест с категориями билетов.
//!     Все переходы синхронные, над данными в памяти; ничего не сохраняется.
//! 2.  **Command / apply**: действия пользователя выражены командами,
//!     которые потребляет единственная функция обновления состояния.
//!     Рендеринг от логики полностью отделён.
//! 3.  **Summary / Confirmation**: производные представления — подпись,
//!     список билетов, итоговая сумма и запись подтверждения для показа.

mod command;
mod state;
mod summary;

pub use command::{Applied, Command};
pub use state::{BookingError, BookingState, SeatToggle};
pub use summary::{format_tenge, Confirmation, Summary, TicketLine};
