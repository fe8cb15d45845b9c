use chrono::prelude::*;

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
fn get_month_length(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Parses a `YYYY-MM-DD` date string
pub fn parse_date(datestr: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(datestr.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The anniversary of `date` in the given `year`.
///
/// February 29 falls on February 28 in years that are not leap years.
/// Returns `None` only if `year` is outside of the range chrono can represent.
pub fn anniversary_in_year(date: &NaiveDate, year: i32) -> Option<NaiveDate> {
    let day = date.day().min(get_month_length(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day)
}

/// The next anniversary of `birthdate` strictly after `today`.
///
/// The year of `birthdate` is ignored, so on the day of the anniversary
/// itself the next occurrence is the one a year later.
pub fn next_occurrence(birthdate: &NaiveDate, today: &NaiveDate) -> Option<NaiveDate> {
    let current_year = anniversary_in_year(birthdate, today.year())?;
    if current_year > *today {
        Some(current_year)
    } else {
        anniversary_in_year(birthdate, today.year() + 1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("Valid date")
    }

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec!["2018-01-01", "2025-12-31", "2020-01-12", "2020-02-29", " 2020-02-02 "];

        for datestr in &valid_dates {
            assert!(parse_date(datestr).is_some(), "{}", datestr);
        }
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "2018--1-1",
            "2020-01-32",
            "2021-02-29",
            "2020-00-01",
            "2020-01-00",
            "tomorrow",
            "",
        ];

        for datestr in &invalid_dates {
            assert!(parse_date(datestr).is_none(), "{}", datestr);
        }
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2026));
    }

    #[test]
    fn occurrence_later_this_year_stays_in_this_year() {
        let today = date(2026, 10, 18);
        assert_eq!(
            next_occurrence(&date(1995, 10, 19), &today),
            Some(date(2026, 10, 19))
        );
        assert_eq!(
            next_occurrence(&date(1980, 12, 31), &today),
            Some(date(2026, 12, 31))
        );
    }

    #[test]
    fn occurrence_on_or_before_today_moves_to_next_year() {
        let today = date(2026, 10, 18);
        assert_eq!(
            next_occurrence(&date(1995, 10, 17), &today),
            Some(date(2027, 10, 17))
        );
        assert_eq!(
            next_occurrence(&date(1995, 10, 18), &today),
            Some(date(2027, 10, 18))
        );
        assert_eq!(
            next_occurrence(&date(2001, 1, 1), &today),
            Some(date(2027, 1, 1))
        );
    }

    #[test]
    fn occurrence_is_never_in_the_past() {
        let today = date(2026, 3, 1);
        let mut day = date(1990, 1, 1);
        while day.year() == 1990 {
            let next = next_occurrence(&day, &today).unwrap();
            assert!(next > today);
            assert!(next.year() == 2026 || next.year() == 2027);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn leap_day_falls_back_to_february_28() {
        let birthdate = date(2000, 2, 29);
        assert_eq!(
            next_occurrence(&birthdate, &date(2026, 1, 10)),
            Some(date(2026, 2, 28))
        );
        assert_eq!(
            next_occurrence(&birthdate, &date(2026, 2, 28)),
            Some(date(2027, 2, 28))
        );
        assert_eq!(
            next_occurrence(&birthdate, &date(2027, 3, 1)),
            Some(date(2028, 2, 29))
        );
    }

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_date(&date(2026, 2, 3)), "2026-02-03");
    }
}
