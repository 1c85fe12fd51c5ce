use chrono::{Duration, Local, NaiveDate};

use crate::error::{Error, Result};

/// Date format used by the history and planner style endpoints.
pub const YYYYMMDD: &str = "%Y%m%d";

/// Today's date in the local timezone, evaluated at call time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Yesterday's date in the local timezone, evaluated at call time.
pub fn yesterday() -> NaiveDate {
    today() - Duration::days(1)
}

/// Parse an 8-digit `YYYYMMDD` string into a calendar date.
pub fn parse_yyyymmdd(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, YYYYMMDD)
        .map_err(|_| Error::InvalidArgument(format!("'{s}' is not a date in YYYYMMDD form")))
}

/// Serialize a calendar date as `YYYYMMDD`.
pub fn format_yyyymmdd(date: NaiveDate) -> String {
    date.format(YYYYMMDD).to_string()
}

/// Every calendar day from `start` to `end` inclusive, ascending.
/// Yields nothing when `end` precedes `start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_eight_digit_dates() {
        let date = parse_yyyymmdd("20200101").expect("valid date must parse");
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        for bad in ["2020-01-01", "202001", "notadate", "20200230"] {
            let err = parse_yyyymmdd(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "'{bad}' should be rejected");
        }
    }

    #[test]
    fn range_is_inclusive_and_ascending() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 1, 3).unwrap();

        let days: Vec<String> = days_inclusive(start, end).map(format_yyyymmdd).collect();
        assert_eq!(days, ["20200101", "20200102", "20200103"]);
    }

    #[test]
    fn range_crosses_month_boundaries() {
        // 2020 is a leap year
        let start = NaiveDate::from_ymd_opt(2020, 2, 28).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();

        let days: Vec<String> = days_inclusive(start, end).map(format_yyyymmdd).collect();
        assert_eq!(days, ["20200228", "20200229", "20200301"]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 3).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

        assert_eq!(days_inclusive(start, end).count(), 0);
    }

    #[test]
    fn single_day_range_yields_one_day() {
        let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let days: Vec<NaiveDate> = days_inclusive(day, day).collect();
        assert_eq!(days, [day]);
    }

    #[test]
    fn yesterday_precedes_today() {
        assert!(yesterday() < today());
    }
}
