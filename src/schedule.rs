use crate::models::Show;
use chrono::NaiveTime;

/// Расписание сеансов для фильма по его позиции в афише.
///
/// Просто детерминированный "рандом": 3 сеанса, залы 1–8. Реального
/// расписания в демо нет, функция зависит только от индекса фильма и
/// не заслуживает обобщения.
pub fn derive_schedule(index: usize) -> [Show; 3] {
    let base_hour = 11 + (index % 3) as u32 * 3;
    let halls = [
        (index % 8) as u8 + 1,
        ((index + 3) % 8) as u8 + 1,
        ((index + 5) % 8) as u8 + 1,
    ];
    [
        Show {
            hall: halls[0],
            time: NaiveTime::from_hms_opt(base_hour, 0, 0).unwrap(),
        },
        Show {
            hall: halls[1],
            time: NaiveTime::from_hms_opt(base_hour + 3, 30, 0).unwrap(),
        },
        Show {
            hall: halls[2],
            time: NaiveTime::from_hms_opt(base_hour + 6, 15, 0).unwrap(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn first_movie_schedule() {
        // Зафиксированный пример: index=0 -> базовый час 11.
        let shows = derive_schedule(0);
        assert_eq!(shows[0], Show { hall: 1, time: hm(11, 0) });
        assert_eq!(shows[1], Show { hall: 4, time: hm(14, 30) });
        assert_eq!(shows[2], Show { hall: 6, time: hm(17, 15) });
    }

    #[test]
    fn second_movie_schedule() {
        let shows = derive_schedule(1);
        assert_eq!(shows[0], Show { hall: 2, time: hm(14, 0) });
        assert_eq!(shows[1], Show { hall: 5, time: hm(17, 30) });
        assert_eq!(shows[2], Show { hall: 7, time: hm(20, 15) });
    }

    #[test]
    fn deterministic() {
        for index in 0..50 {
            assert_eq!(derive_schedule(index), derive_schedule(index));
        }
    }

    #[test]
    fn halls_within_range() {
        for index in 0..100 {
            for show in derive_schedule(index) {
                assert!((1..=8).contains(&show.hall), "index {}: {:?}", index, show);
            }
        }
    }

    #[test]
    fn three_distinct_shows_per_movie() {
        for index in 0..100 {
            let shows = derive_schedule(index);
            assert_ne!(shows[0], shows[1]);
            assert_ne!(shows[1], shows[2]);
            assert_ne!(shows[0], shows[2]);
        }
    }

    #[test]
    fn latest_show_fits_in_a_day() {
        // Максимальный базовый час 17, последний сеанс 23:15.
        for index in 0..100 {
            let last = derive_schedule(index)[2];
            assert!(last.time <= hm(23, 15));
        }
    }
}
