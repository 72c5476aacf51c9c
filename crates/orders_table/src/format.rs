//! Display formatting for row cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const ORDERED_DATE_FORMAT: &str = "%b. %d, %Y";
const SHIPPED_DATE_FORMAT: &str = "%d/%b/%Y";

/// Parses the date spellings the order source is known to emit: RFC 3339
/// timestamps, naive `YYYY-MM-DDTHH:MM:SS` timestamps and plain dates.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn format_date(raw: &str, pattern: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(pattern).to_string(),
        None => raw.to_string(),
    }
}

pub fn ordered_label(raw: &str) -> String {
    format!("Ordered: {}", format_date(raw, ORDERED_DATE_FORMAT))
}

pub fn updated_label(raw: &str) -> String {
    format!("Updated: {}", format_date(raw, SHIPPED_DATE_FORMAT))
}

pub fn value_label(value: f64) -> String {
    format!("${value} USD")
}

pub fn total_label(total: f64) -> String {
    format!("${total:.2} USD")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_plain_dates() {
        let expected = NaiveDate::from_ymd_opt(2021, 3, 4).expect("date");
        assert_eq!(parse_date("2021-03-04T23:10:00+00:00"), Some(expected));
        assert_eq!(parse_date("2021-03-04T10:00:00"), Some(expected));
        assert_eq!(parse_date("2021-03-04"), Some(expected));
        assert_eq!(parse_date("next tuesday"), None);
    }

    #[test]
    fn formats_ordered_and_updated_labels() {
        assert_eq!(ordered_label("2021-03-04"), "Ordered: Mar. 04, 2021");
        assert_eq!(updated_label("2021-03-06T08:00:00Z"), "Updated: 06/Mar/2021");
    }

    #[test]
    fn unparseable_dates_are_shown_verbatim() {
        assert_eq!(ordered_label("soon"), "Ordered: soon");
    }

    #[test]
    fn values_keep_their_natural_precision() {
        assert_eq!(value_label(100.0), "$100 USD");
        assert_eq!(value_label(129.5), "$129.5 USD");
        assert_eq!(total_label(900.0), "$900.00 USD");
    }
}
