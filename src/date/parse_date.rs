use chrono::NaiveDate;

use super::Error;

type TryParse = fn(&str, i32) -> Option<NaiveDate>;

/// Tried in order, first match wins.
const FORMATS: [TryParse; 4] = [iso_date, compact_date, month_day, compact_month_day];

/// Parses the loosely formatted dates users type into the menu command:
/// `yyyy-mm-dd`, `yyyymmdd`, `mm-dd` and `mmdd`. The short forms take their
/// year from `reference_year`.
pub fn parse(input: &str, reference_year: i32) -> Result<NaiveDate, Error> {
    let input = input.trim();
    FORMATS
        .iter()
        .find_map(|try_parse| try_parse(input, reference_year))
        .ok_or_else(|| Error::invalid_date_format(input))
}

/// Four digit year, no sign.
fn iso_date(s: &str, _: i32) -> Option<NaiveDate> {
    let mut fields = s.split('-');
    let (year, month, day) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() || year.len() != 4 || !is_ascii_digits(year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, short_number(month)?, day_number(day)?)
}

fn compact_date(s: &str, _: i32) -> Option<NaiveDate> {
    if s.len() != 8 || !is_ascii_digits(s) {
        return None;
    }
    let year = s[..4].parse().ok()?;
    let month = s[4..6].parse().ok()?;
    let day = s[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_day(s: &str, reference_year: i32) -> Option<NaiveDate> {
    if !(3..=5).contains(&s.len()) || s.matches('-').count() != 1 {
        return None;
    }
    let (month, day) = s.split_once('-')?;
    NaiveDate::from_ymd_opt(reference_year, short_number(month)?, day_number(day)?)
}

fn compact_month_day(s: &str, reference_year: i32) -> Option<NaiveDate> {
    if s.len() != 4 || !is_ascii_digits(s) {
        return None;
    }
    let month = s[..2].parse().ok()?;
    let day = s[2..].parse().ok()?;
    NaiveDate::from_ymd_opt(reference_year, month, day)
}

/// one or two digits, nothing else
fn short_number(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !is_ascii_digits(s) {
        return None;
    }
    s.parse().ok()
}

/// Like [`short_number`], but a single digit day may be space padded (`" 8"`).
fn day_number(s: &str) -> Option<u32> {
    match s.strip_prefix(' ') {
        Some(digit) if digit.len() == 1 && digit != "0" => short_number(digit),
        Some(_) => None,
        None => short_number(s),
    }
}

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse("2025-05-28", 1999), Ok(date(2025, 5, 28)));
        assert_eq!(parse("  2024-02-29 ", 1999), Ok(date(2024, 2, 29)));
    }

    #[test]
    fn test_iso_date_needs_four_digit_year() {
        assert!(parse("0025-05-28", 1999).is_ok());
        assert_eq!(
            parse("25-05-28", 2025),
            Err(Error::InvalidDateFormat {
                input: "25-05-28".into()
            })
        );
    }

    #[test]
    fn test_space_padded_day() {
        assert_eq!(parse("5- 8", 2025), Ok(date(2025, 5, 8)));
        assert_eq!(parse("2025-05- 8", 1999), Ok(date(2025, 5, 8)));
        assert!(parse("05- 18", 2025).is_err());
        assert!(parse("5- 0", 2025).is_err());
        assert!(parse("2025- 5-08", 1999).is_err());
    }

    #[test]
    fn test_compact_date() {
        assert_eq!(parse("20250528", 1999), Ok(date(2025, 5, 28)));
        assert_eq!(parse("20240229", 1999), Ok(date(2024, 2, 29)));
        assert!(parse("20230229", 1999).is_err());
    }

    #[test]
    fn test_compact_date_keeps_exact_fields() {
        for (y, m, d) in [(2025, 1, 1), (1999, 12, 31), (2030, 7, 9)] {
            let s = format!("{y:04}{m:02}{d:02}");
            assert_eq!(parse(&s, 2000), Ok(date(y, m, d)));
        }
    }

    #[test]
    fn test_month_day_uses_reference_year() {
        assert_eq!(parse("05-28", 2025), Ok(date(2025, 5, 28)));
        assert_eq!(parse("5-8", 2025), Ok(date(2025, 5, 8)));
        assert_eq!(parse("0528", 2025), Ok(date(2025, 5, 28)));
        assert_eq!(parse("1231", 2026), Ok(date(2026, 12, 31)));
    }

    #[test]
    fn test_leap_day_depends_on_reference_year() {
        assert_eq!(parse("02-29", 2024), Ok(date(2024, 2, 29)));
        assert!(parse("02-29", 2025).is_err());
        assert!(parse("0229", 2025).is_err());
    }

    #[test]
    fn test_out_of_range_fails() {
        assert_eq!(
            parse("13-40", 2025),
            Err(Error::InvalidDateFormat {
                input: "13-40".into()
            })
        );
        assert!(parse("13-01", 2025).is_err());
        assert!(parse("1301", 2025).is_err());
        assert!(parse("2025-13-01", 2025).is_err());
        assert!(parse("20251301", 2025).is_err());
    }

    #[test]
    fn test_unrecognized_input() {
        for input in [
            "",
            "tomorrow",
            "05/28",
            "5-28-1",
            "123",
            "123456789",
            "+5-28",
            "25-05-28",
            "1-1-1",
            "125-05-28",
            "+2025-05-28",
            "02025-05-28",
            "2025-05-28-",
        ] {
            assert!(parse(input, 2025).is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn test_error_message_carries_input() {
        let err = parse(" 내일 ", 2025).unwrap_err();
        assert_eq!(err.to_string(), "'내일'은(는) 인식할 수 없는 날짜 형식입니다.");
    }
}
