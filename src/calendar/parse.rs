use derive_more::Display;
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res},
    sequence::{preceded, tuple},
    IResult,
};

use super::date::CalendarDate;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[display(fmt = "date must be written as YYYY/MM/DD")]
    BadFormat,
    #[display(fmt = "not a valid calendar date")]
    InvalidDate,
}

impl std::error::Error for ParseError {}

impl<E> From<nom::Err<E>> for ParseError {
    fn from(_: nom::Err<E>) -> Self {
        ParseError::BadFormat
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn number<'a>(min: usize, max: usize) -> impl FnMut(&'a str) -> IResult<&'a str, u32> {
    map_res(take_while_m_n(min, max, is_digit), str::parse::<u32>)
}

/// `YYYY/M/D` with one or two digit month and day.
fn date_fields(input: &str) -> IResult<&str, (u32, u32, u32)> {
    all_consuming(tuple((
        number(4, 4),
        preceded(char('/'), number(1, 2)),
        preceded(char('/'), number(1, 2)),
    )))(input)
}

/// Parses user input of the form `YYYY/MM/DD`.
///
/// Malformed text yields [`ParseError::BadFormat`], well-formed text that does
/// not name an existing day (`2024/02/30`, `2024/13/01`) yields
/// [`ParseError::InvalidDate`].
pub fn parse(text: &str) -> Result<CalendarDate, ParseError> {
    let (_, (year, month, day)) = date_fields(text)?;

    CalendarDate::from_ymd(year as i32, month, day).ok_or(ParseError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn valid_dates() {
        assert_eq!(parse("2024/02/29"), Ok(date(2024, 2, 29)));
        assert_eq!(parse("2024/2/5"), Ok(date(2024, 2, 5)));
        assert_eq!(parse("0999/12/31"), Ok(date(999, 12, 31)));
    }

    #[test]
    fn short_fields_are_padded_on_output() {
        assert_eq!(parse("2024/2/5").unwrap().to_string(), "2024/02/05");
        assert_eq!(parse("2024/3/5").unwrap().to_string(), "2024/03/05");
    }

    #[test]
    fn bad_format() {
        for text in &[
            "2024-02-30",
            "24/02/03",
            "20240/02/03",
            "2024/002/03",
            "2024/02/003",
            "2024//02",
            "2024/02",
            " 2024/02/03",
            "2024/02/03 ",
            "2024/02/03/",
            "2024/+2/03",
            "2024/0x/03",
            "",
        ] {
            assert_eq!(parse(text), Err(ParseError::BadFormat), "{:?}", text);
        }
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        assert_eq!(parse("２０２４/02/03"), Err(ParseError::BadFormat));
    }

    #[test]
    fn invalid_dates() {
        for text in &[
            "2024/02/30",
            "2023/02/29",
            "2024/04/31",
            "2024/13/01",
            "2024/00/10",
            "2024/01/00",
            "2024/1/32",
        ] {
            assert_eq!(parse(text), Err(ParseError::InvalidDate), "{:?}", text);
        }
    }

    #[test]
    fn round_trip() {
        let mut day = date(1999, 11, 20);
        for _ in 0..800 {
            assert_eq!(parse(&day.to_string()), Ok(day));
            day = CalendarDate::from(day.naive().succ_opt().unwrap());
        }
    }

    #[test]
    fn from_str() {
        assert_eq!("2025/01/01".parse::<CalendarDate>(), Ok(date(2025, 1, 1)));
        assert_eq!(
            "2025/1/1x".parse::<CalendarDate>(),
            Err(ParseError::BadFormat)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseError::BadFormat.to_string(),
            "date must be written as YYYY/MM/DD"
        );
        assert_eq!(ParseError::InvalidDate.to_string(), "not a valid calendar date");
    }
}
