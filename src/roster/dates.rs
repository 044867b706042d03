use chrono::{Datelike, NaiveDate};

/// Fast parse of `"DD/MM/YYYY"` → `NaiveDate`.
pub fn parse_br_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    // minimal length + separators check; byte slicing below needs ascii
    if !s.is_ascii() || s.len() != 10 || &s[2..3] != "/" || &s[5..6] != "/" {
        return None;
    }
    let day: u32 = s[0..2].parse().ok()?;
    let month: u32 = s[3..5].parse().ok()?;
    let year: i32 = s[6..10].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Renders a date back into the `DD/MM/YYYY` form used everywhere user-facing.
pub fn format_br_date(d: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", d.day(), d.month(), d.year())
}

/// First and last day of the calendar month containing `today`.
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).expect("day 1 exists in every month");
    let next_month_first = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    }
    .expect("first of month exists");
    let last = next_month_first
        .pred_opt()
        .expect("predecessor of a month start exists");
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_br_dates() {
        assert_eq!(
            parse_br_date("15/09/2024"),
            NaiveDate::from_ymd_opt(2024, 9, 15)
        );
        assert_eq!(
            parse_br_date(" 01/01/2025 "),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(parse_br_date("2024-09-15"), None);
        assert_eq!(parse_br_date("15/9/2024"), None);
        assert_eq!(parse_br_date("31/02/2025"), None);
        assert_eq!(parse_br_date(""), None);
        assert_eq!(parse_br_date("aa/bb/cccc"), None);
        assert_eq!(parse_br_date("çã/01/202"), None);
    }

    #[test]
    fn round_trips_through_format() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(format_br_date(d), "03/01/2025");
        assert_eq!(parse_br_date(&format_br_date(d)), Some(d));
    }

    #[test]
    fn month_bounds_mid_year_and_december() {
        let (first, last) = month_bounds(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
        assert_eq!(first, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());

        let (first, last) = month_bounds(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }
}
