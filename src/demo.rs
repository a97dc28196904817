//! Сценарий демонстрации: тот же путь, который пользователь проходит в
//! веб-версии — афиша, фильм, сеанс, места, категории билетов,
//! подтверждение. Тонкая обёртка над командами, вся логика в `booking`.

use tracing::info;

use crate::booking::{Applied, BookingError, BookingState, Command};
use crate::catalog::{CatalogClient, CatalogView, LOADING_CAPTION};
use crate::models::{SeatKey, TicketType, SEATS_PER_ROW, SEAT_ROWS};

fn demo_seat(key: &str) -> SeatKey {
    key.parse().expect("demo seats are within the hall grid")
}

pub async fn run(client: &CatalogClient) -> Result<(), BookingError> {
    println!("{}", LOADING_CAPTION);
    let view = client.fetch_movies().await;
    let movies = match view {
        CatalogView::Loaded(movies) => movies,
        fallback => {
            // Любой сбой — статичное сообщение вместо афиши, без паники.
            println!("{}", fallback.fallback_caption().unwrap_or_default());
            return Ok(());
        }
    };

    let mut state = BookingState::new();
    state.load_catalog(movies);

    println!("\nАфиша:");
    for (index, movie) in state.movies().iter().enumerate() {
        let rating = movie
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {}. {} — {} · Рейтинг: {}",
            index + 1,
            movie.display_title(),
            movie.meta_line(),
            rating
        );
    }

    state.apply(Command::SelectMovie { index: 0 })?;
    if let Some(movie) = state.selected_movie() {
        println!("\nВыбран фильм: {}", movie.display_title());
    }

    println!("Сеансы:");
    for show in state.schedule() {
        println!("  [{}]", show.chip_label());
    }

    // Веб-версия сама "нажимает" первый сеанс — повторяем.
    state.apply(Command::SelectShow { index: 0 })?;

    // Несколько мест в центре зала.
    for key in ["E5", "E6", "F7", "E7"] {
        state.apply(Command::ToggleSeat { seat: demo_seat(key) })?;
    }
    // Передумали: повторный щелчок снимает выбор.
    state.apply(Command::ToggleSeat { seat: demo_seat("E7") })?;
    // Одно место — детский билет.
    state.apply(Command::SetTicketType {
        seat: demo_seat("F7"),
        ticket_type: TicketType::Child,
    })?;

    print_seat_grid(&state);

    let summary = state.summary();
    println!("\n{}", summary.caption());
    for line in &summary.tickets {
        println!("  {}", line.display_line());
    }
    println!("Итого: {}", summary.total_label());

    if let Applied::Confirmed(confirmation) = state.apply(Command::Confirm)? {
        println!("\n{}", confirmation.display_text());
        info!("demo booking confirmed: {}", confirmation.id);
    }

    Ok(())
}

// Схема зала; выбранные места помечены [x].
fn print_seat_grid(state: &BookingState) {
    println!("\nСхема зала (экран сверху):");
    for r in 0..SEAT_ROWS {
        let row = (b'A' + r) as char;
        let mut line = format!("  {} ", row);
        for number in 1..=SEATS_PER_ROW {
            let seat = SeatKey::new(row, number).expect("grid seat is always valid");
            line.push_str(if state.is_seat_selected(seat) {
                "[x]"
            } else {
                "[ ]"
            });
        }
        println!("{}", line);
    }
}
