use std::collections::BTreeMap;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use super::summary::{Confirmation, Summary, TicketLine};
use crate::models::{Movie, SeatKey, Show, TicketType};
use crate::schedule::derive_schedule;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("фильм с индексом {0} не найден в афише")]
    MovieNotFound(usize),
    #[error("сеанс с индексом {0} недоступен")]
    ShowNotAvailable(usize),
    #[error("сначала выберите фильм")]
    NoMovieSelected,
    #[error("сначала выберите время и зал")]
    NoShowSelected,
    #[error("место {0} не выбрано")]
    SeatNotSelected(SeatKey),
    #[error("не выбрано ни одного места")]
    EmptySelection,
}

/// Что сделал переключатель места.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatToggle {
    Selected,
    Released,
    /// Сеанс ещё не выбран — щелчок по схеме игнорируется.
    Ignored,
}

/// Состояние экрана бронирования.
///
/// Инварианты:
/// - смена фильма или сеанса всегда очищает карту выбранных мест;
/// - ключи мест уникальны (семантика множества по позиции);
/// - без выбранного сеанса карта мест пуста.
#[derive(Debug, Clone, Default)]
pub struct BookingState {
    movies: Vec<Movie>,
    selected_movie: Option<usize>,
    schedule: Vec<Show>,
    selected_show: Option<Show>,
    seats: BTreeMap<SeatKey, TicketType>,
}

impl BookingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Загрузить афишу (результат GET /api/movies). Сбрасывает весь выбор.
    pub fn load_catalog(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.selected_movie = None;
        self.schedule.clear();
        self.selected_show = None;
        self.seats.clear();
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.selected_movie.map(|i| &self.movies[i])
    }

    /// Расписание выбранного фильма: ровно 3 сеанса, пусто без фильма.
    pub fn schedule(&self) -> &[Show] {
        &self.schedule
    }

    pub fn selected_show(&self) -> Option<Show> {
        self.selected_show
    }

    pub fn is_seat_selected(&self, seat: SeatKey) -> bool {
        self.seats.contains_key(&seat)
    }

    pub fn ticket_type(&self, seat: SeatKey) -> Option<TicketType> {
        self.seats.get(&seat).copied()
    }

    /// Выбрать фильм по позиции в афише: сбрасывает сеанс и места,
    /// выводит расписание из индекса.
    pub fn select_movie(&mut self, index: usize) -> Result<(), BookingError> {
        if index >= self.movies.len() {
            return Err(BookingError::MovieNotFound(index));
        }
        self.selected_movie = Some(index);
        self.schedule = derive_schedule(index).to_vec();
        self.selected_show = None;
        self.seats.clear();
        Ok(())
    }

    /// Выбрать сеанс из расписания текущего фильма: сбрасывает места.
    pub fn select_show(&mut self, index: usize) -> Result<(), BookingError> {
        let show = self
            .schedule
            .get(index)
            .copied()
            .ok_or(BookingError::ShowNotAvailable(index))?;
        self.selected_show = Some(show);
        self.seats.clear();
        Ok(())
    }

    /// Переключить место: снять если выбрано, иначе добавить со взрослым
    /// билетом. Без выбранного сеанса — ничего не делает. Двойное
    /// переключение возвращает карту к исходному состоянию.
    pub fn toggle_seat(&mut self, seat: SeatKey) -> SeatToggle {
        if self.selected_show.is_none() {
            return SeatToggle::Ignored;
        }
        if self.seats.remove(&seat).is_some() {
            SeatToggle::Released
        } else {
            self.seats.insert(seat, TicketType::default());
            SeatToggle::Selected
        }
    }

    /// Сменить категорию билета уже выбранного места.
    pub fn set_ticket_type(
        &mut self,
        seat: SeatKey,
        ticket_type: TicketType,
    ) -> Result<(), BookingError> {
        match self.seats.get_mut(&seat) {
            Some(slot) => {
                *slot = ticket_type;
                Ok(())
            }
            None => Err(BookingError::SeatNotSelected(seat)),
        }
    }

    pub fn clear_selection(&mut self) {
        self.seats.clear();
    }

    /// Сводка выбора: число мест, билеты и сумма по таблице цен.
    pub fn summary(&self) -> Summary {
        let tickets: Vec<TicketLine> = self
            .seats
            .iter()
            .map(|(seat, ticket_type)| TicketLine {
                seat: *seat,
                ticket_type: *ticket_type,
                price: ticket_type.price(),
            })
            .collect();
        let total_price = tickets.iter().map(|t| t.price).sum();
        Summary {
            show: self.selected_show,
            tickets,
            total_price,
        }
    }

    /// Подтвердить бронь: нужен фильм, сеанс и хотя бы одно место.
    /// Возвращает запись для показа и очищает выбор мест; фильм и сеанс
    /// остаются выбранными.
    pub fn confirm(&mut self) -> Result<Confirmation, BookingError> {
        let movie_title = self
            .selected_movie()
            .ok_or(BookingError::NoMovieSelected)?
            .display_title()
            .to_string();
        let show = self.selected_show.ok_or(BookingError::NoShowSelected)?;
        if self.seats.is_empty() {
            return Err(BookingError::EmptySelection);
        }

        let summary = self.summary();
        let confirmation = Confirmation {
            id: Uuid::new_v4(),
            movie_title,
            show,
            tickets: summary.tickets,
            total_price: summary.total_price,
            created_at: Utc::now(),
        };
        self.seats.clear();
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(key: &str) -> SeatKey {
        key.parse().unwrap()
    }

    fn catalog() -> Vec<Movie> {
        serde_json::from_str(
            r#"[
                {"id":1,"title":"Первый","genre":"Драма","duration":120},
                {"id":2,"title":"Второй","genre":"Комедия","duration":95},
                {"id":3,"title":"Третий"}
            ]"#,
        )
        .unwrap()
    }

    // Состояние с выбранным фильмом и сеансом — точка старта большинства кейсов.
    fn ready_state() -> BookingState {
        let mut state = BookingState::new();
        state.load_catalog(catalog());
        state.select_movie(0).unwrap();
        state.select_show(0).unwrap();
        state
    }

    #[test]
    fn empty_state_has_nothing_selected() {
        let state = BookingState::new();
        assert!(state.movies().is_empty());
        assert!(state.selected_movie().is_none());
        assert!(state.selected_show().is_none());
        assert_eq!(state.summary().count(), 0);
        assert_eq!(state.summary().total_price, 0);
    }

    #[test]
    fn select_movie_derives_three_shows_and_clears_show() {
        let mut state = BookingState::new();
        state.load_catalog(catalog());
        state.select_movie(1).unwrap();
        assert_eq!(state.selected_movie().unwrap().title, "Второй");
        assert_eq!(state.schedule().len(), 3);
        assert!(state.selected_show().is_none());
    }

    #[test]
    fn select_movie_out_of_range() {
        let mut state = BookingState::new();
        state.load_catalog(catalog());
        assert_eq!(state.select_movie(3), Err(BookingError::MovieNotFound(3)));
    }

    #[test]
    fn toggle_without_show_is_noop() {
        let mut state = BookingState::new();
        state.load_catalog(catalog());
        state.select_movie(0).unwrap();
        assert_eq!(state.toggle_seat(seat("A1")), SeatToggle::Ignored);
        assert_eq!(state.summary().count(), 0);
    }

    #[test]
    fn toggle_inserts_adult_by_default() {
        let mut state = ready_state();
        assert_eq!(state.toggle_seat(seat("C4")), SeatToggle::Selected);
        assert_eq!(state.ticket_type(seat("C4")), Some(TicketType::Adult));
    }

    #[test]
    fn double_toggle_restores_prior_state() {
        let mut state = ready_state();
        state.toggle_seat(seat("A1"));
        state.set_ticket_type(seat("A1"), TicketType::Child).unwrap();
        let before = state.summary();

        assert_eq!(state.toggle_seat(seat("B2")), SeatToggle::Selected);
        assert_eq!(state.toggle_seat(seat("B2")), SeatToggle::Released);

        let after = state.summary();
        assert_eq!(after.tickets, before.tickets);
        assert_eq!(after.total_price, before.total_price);
    }

    #[test]
    fn pricing_example_two_adults_one_child() {
        // Пример из демо: 2 взрослых + 1 детский = 6600.
        let mut state = ready_state();
        state.toggle_seat(seat("E5"));
        state.toggle_seat(seat("E6"));
        state.toggle_seat(seat("F7"));
        state.set_ticket_type(seat("F7"), TicketType::Child).unwrap();

        let summary = state.summary();
        assert_eq!(summary.count(), 3);
        assert_eq!(summary.total_price, 2500 + 2500 + 1600);
    }

    #[test]
    fn retyping_one_seat_keeps_others_intact() {
        let mut state = ready_state();
        state.toggle_seat(seat("A1"));
        state.toggle_seat(seat("A2"));
        state.set_ticket_type(seat("A2"), TicketType::Student).unwrap();

        assert_eq!(state.ticket_type(seat("A1")), Some(TicketType::Adult));
        assert_eq!(state.ticket_type(seat("A2")), Some(TicketType::Student));
        assert_eq!(state.summary().total_price, 2500 + 1900);
    }

    #[test]
    fn set_ticket_type_on_unselected_seat_fails() {
        let mut state = ready_state();
        assert_eq!(
            state.set_ticket_type(seat("H12"), TicketType::Child),
            Err(BookingError::SeatNotSelected(seat("H12")))
        );
    }

    #[test]
    fn selecting_new_movie_empties_selection() {
        let mut state = ready_state();
        for key in ["A1", "B2", "C3", "D4", "E5"] {
            state.toggle_seat(seat(key));
        }
        state.select_movie(2).unwrap();
        assert_eq!(state.summary().count(), 0);
        assert!(state.selected_show().is_none());
    }

    #[test]
    fn selecting_new_show_empties_selection() {
        let mut state = ready_state();
        state.toggle_seat(seat("A1"));
        state.toggle_seat(seat("A2"));
        state.select_show(1).unwrap();
        assert_eq!(state.summary().count(), 0);
        assert!(state.selected_show().is_some());
    }

    #[test]
    fn select_show_requires_movie() {
        let mut state = BookingState::new();
        state.load_catalog(catalog());
        assert_eq!(state.select_show(0), Err(BookingError::ShowNotAvailable(0)));
    }

    #[test]
    fn clear_resets_totals_and_disables_booking() {
        let mut state = ready_state();
        state.toggle_seat(seat("A1"));
        state.toggle_seat(seat("A2"));
        state.clear_selection();

        let summary = state.summary();
        assert_eq!(summary.count(), 0);
        assert_eq!(summary.total_price, 0);
        assert!(!summary.booking_enabled());
        assert_eq!(state.confirm(), Err(BookingError::EmptySelection));
    }

    #[test]
    fn confirm_needs_show_and_seats() {
        let mut state = BookingState::new();
        state.load_catalog(catalog());
        assert_eq!(state.confirm(), Err(BookingError::NoMovieSelected));

        state.select_movie(0).unwrap();
        assert_eq!(state.confirm(), Err(BookingError::NoShowSelected));

        state.select_show(0).unwrap();
        assert_eq!(state.confirm(), Err(BookingError::EmptySelection));
    }

    #[test]
    fn confirm_returns_record_and_clears_seats() {
        let mut state = ready_state();
        state.toggle_seat(seat("E5"));
        state.toggle_seat(seat("F7"));
        state.set_ticket_type(seat("F7"), TicketType::Child).unwrap();

        let confirmation = state.confirm().unwrap();
        assert_eq!(confirmation.movie_title, "Первый");
        assert_eq!(confirmation.show, state.selected_show().unwrap());
        assert_eq!(confirmation.tickets.len(), 2);
        assert_eq!(confirmation.total_price, 2500 + 1600);

        // После подтверждения выбор мест пуст, фильм и сеанс остаются.
        assert_eq!(state.summary().count(), 0);
        assert!(state.selected_movie().is_some());
        assert!(state.selected_show().is_some());
    }

    #[test]
    fn load_catalog_resets_everything() {
        let mut state = ready_state();
        state.toggle_seat(seat("A1"));
        state.load_catalog(catalog());
        assert!(state.selected_movie().is_none());
        assert!(state.selected_show().is_none());
        assert_eq!(state.summary().count(), 0);
    }
}
