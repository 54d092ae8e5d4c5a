use chrono::NaiveTime;
use chumsky::{error::Simple, prelude::just, Parser as _};

use super::digits::number;

/// `YYYY-MM-DD`, digits only. The result isn't checked against the calendar.
pub fn date() -> impl chumsky::Parser<char, (i32, u32, u32), Error = Simple<char>> {
    number::<i32>(4)
        .then_ignore(just('-'))
        .then(number::<u32>(2))
        .then_ignore(just('-'))
        .then(number::<u32>(2))
        .map(|((year, month), day)| (year, month, day))
        .labelled("date")
}

/// Name of a daily notimon log file, `YYYY-MM-DD.csv`
pub fn log_file_name() -> impl chumsky::Parser<char, (i32, u32, u32), Error = Simple<char>> {
    date().then_ignore(just(".csv")).labelled("log file name")
}

/// `MM/DD` as written in notification texts, which omit the year
pub fn month_day() -> impl chumsky::Parser<char, (u32, u32), Error = Simple<char>> {
    number::<u32>(2)
        .then_ignore(just('/'))
        .then(number::<u32>(2))
        .labelled("month/day")
}

/// `HH:MM:SS`
pub fn time() -> impl chumsky::Parser<char, NaiveTime, Error = Simple<char>> {
    number::<u32>(2)
        .then_ignore(just(':'))
        .then(number::<u32>(2))
        .then_ignore(just(':'))
        .then(number::<u32>(2))
        .try_map(|((hour, minute), second), span| {
            NaiveTime::from_hms_opt(hour, minute, second)
                .ok_or_else(|| Simple::custom(span, "Invalid time"))
        })
        .labelled("time")
}

#[cfg(test)]
mod tests {
    use crate::parser::utils::{testutils::test_parser, token};

    use super::*;

    #[test]
    fn test_date() {
        test_parser("2024-03-15", date(), (2024, 3, 15), "");
        test_parser("0000-00-00", date(), (0, 0, 0), "");
        test_parser("2024-03-15.csv", date(), (2024, 3, 15), ".csv");
        // Only the shape is checked
        test_parser("2024-13-45", date(), (2024, 13, 45), "");
    }

    #[test]
    fn test_date_invalid() {
        assert_eq!(None, token(date(), "2024-3-15"));
        assert_eq!(None, token(date(), "24-03-15"));
        assert_eq!(None, token(date(), "2024/03/15"));
        assert_eq!(None, token(date(), "2024-03-15 "));
        assert_eq!(None, token(date(), "20240315"));
    }

    #[test]
    fn test_log_file_name() {
        test_parser("2024-03-15.csv", log_file_name(), (2024, 3, 15), "");
        assert_eq!(None, token(log_file_name(), "2024-03-15.csv.bak"));
        assert_eq!(None, token(log_file_name(), "2024-03-15.txt"));
        assert_eq!(None, token(log_file_name(), "2024-03-15"));
        assert_eq!(None, token(log_file_name(), "notes.csv"));
    }

    #[test]
    fn test_month_day() {
        test_parser("03/15", month_day(), (3, 15), "");
        test_parser("12/01 09:30:00", month_day(), (12, 1), " 09:30:00");
        assert_eq!(None, token(month_day(), "3/15"));
        assert_eq!(None, token(month_day(), "03-15"));
        assert_eq!(None, token(month_day(), "03/15/2024"));
    }

    #[test]
    fn test_time() {
        test_parser(
            "09:30:00",
            time(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            "",
        );
        test_parser(
            "23:59:59",
            time(),
            NaiveTime::from_hms_opt(23, 59, 59).unwrap(),
            "",
        );
        assert_eq!(None, token(time(), "24:00:00"));
        assert_eq!(None, token(time(), "09:60:00"));
        assert_eq!(None, token(time(), "09:30"));
        assert_eq!(None, token(time(), "9:30:00"));
    }
}
