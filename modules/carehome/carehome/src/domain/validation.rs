//! Presence and format checks shared by every record route.

use chrono::{NaiveDate, NaiveDateTime};

use super::error::DomainError;

/// Returns the trimmed value, or `MissingParameter` when absent or blank.
pub fn required(name: &'static str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_owned()),
        _ => Err(DomainError::missing(name)),
    }
}

/// Blank strings count as "not supplied".
#[must_use]
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub fn required_number(name: &'static str, value: Option<String>) -> Result<i32, DomainError> {
    let raw = required(name, value)?;
    parse_number(name, &raw)
}

pub fn optional_number(name: &'static str, value: Option<String>) -> Result<Option<i32>, DomainError> {
    optional(value).map(|raw| parse_number(name, &raw)).transpose()
}

fn parse_number(name: &'static str, raw: &str) -> Result<i32, DomainError> {
    raw.parse::<i32>()
        .map_err(|_| DomainError::validation(name, format!("'{raw}' is not a number")))
}

/// Accepts `YYYY-MM-DD` and the compact `YYYYMMDD` form.
pub fn parse_date(name: &'static str, raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y%m%d"))
        .map_err(|_| DomainError::validation(name, format!("'{raw}' is not a date")))
}

pub fn required_date(name: &'static str, value: Option<String>) -> Result<NaiveDate, DomainError> {
    let raw = required(name, value)?;
    parse_date(name, &raw)
}

pub fn optional_date(
    name: &'static str,
    value: Option<String>,
) -> Result<Option<NaiveDate>, DomainError> {
    optional(value).map(|raw| parse_date(name, &raw)).transpose()
}

/// Parses the contract row identifier as echoed back by clients.
pub fn parse_timestamp(name: &'static str, raw: &str) -> Result<NaiveDateTime, DomainError> {
    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| DomainError::validation(name, format!("'{raw}' is not a timestamp")))
}

pub fn required_timestamp(
    name: &'static str,
    value: Option<String>,
) -> Result<NaiveDateTime, DomainError> {
    let raw = required(name, value)?;
    parse_timestamp(name, &raw)
}

pub fn ensure_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<(), DomainError> {
    match (from, to) {
        (Some(from), Some(to)) if from > to => Err(DomainError::validation(
            "from",
            format!("{from} is after {to}"),
        )),
        _ => Ok(()),
    }
}

/// Escapes `LIKE` metacharacters; pair with `ESCAPE '\'`.
#[must_use]
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(matches!(
            required("ancd", Some("   ".to_owned())),
            Err(DomainError::MissingParameter { name: "ancd" })
        ));
        assert!(matches!(
            required("ancd", None),
            Err(DomainError::MissingParameter { name: "ancd" })
        ));
        assert_eq!(required("ancd", Some(" A001 ".to_owned())).unwrap(), "A001");
    }

    #[test]
    fn dates_accept_both_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(parse_date("wdt", "2024-03-09").unwrap(), expected);
        assert_eq!(parse_date("wdt", "20240309").unwrap(), expected);
        assert!(parse_date("wdt", "09/03/2024").is_err());
    }

    #[test]
    fn timestamps_accept_t_and_space() {
        let a = parse_timestamp("indt", "2024-03-09T10:11:12.345").unwrap();
        let b = parse_timestamp("indt", "2024-03-09 10:11:12.345").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("O'Brien"), "O'Brien");
    }

    #[test]
    fn inverted_range_is_rejected() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 2);
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert!(ensure_range(d1, d2).is_err());
        assert!(ensure_range(d2, d1).is_ok());
        assert!(ensure_range(None, d1).is_ok());
    }

    #[test]
    fn numbers_report_the_field() {
        let err = required_number("pnum", Some("abc".to_owned())).unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "pnum", .. }));
        assert_eq!(optional_number("pnum", Some(String::new())).unwrap(), None);
    }
}
