//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// UTC timestamp.
pub type Timestamp = DateTime<Utc>;

/// Layouts the backend uses for timestamps without an offset.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

const DISPLAY_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p %Z";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse a backend timestamp. Values without an offset are taken as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Format a backend timestamp for display in `tz`, suffixed with the zone
/// (`UTC`, or an offset such as `+02:00` for local time).
///
/// Missing or blank input yields `"N/A"`; input that cannot be parsed is
/// returned unchanged.
#[must_use]
pub fn format_timestamp<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "N/A".to_string();
    };
    match parse_timestamp(raw) {
        Some(ts) => ts.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        assert!(ts >= before);
    }

    #[test]
    fn should_format_space_separated_timestamp_as_utc() {
        let formatted = format_timestamp(Some("2024-03-05 14:07:09"), &Utc);
        assert_eq!(formatted, "03/05/2024, 02:07:09 PM UTC");
    }

    #[test]
    fn should_format_rfc3339_timestamp_in_target_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let formatted = format_timestamp(Some("2024-03-05T22:30:00+00:00"), &tz);
        assert_eq!(formatted, "03/06/2024, 12:30:00 AM +02:00");
    }

    #[test]
    fn should_parse_naive_iso_timestamp_with_fraction() {
        let ts = parse_timestamp("2024-03-05T08:00:00.250000").unwrap();
        assert_eq!(ts.format("%H:%M:%S").to_string(), "08:00:00");
    }

    #[test]
    fn should_return_na_for_missing_timestamp() {
        assert_eq!(format_timestamp(None, &Utc), "N/A");
        assert_eq!(format_timestamp(Some("  "), &Utc), "N/A");
    }

    #[test]
    fn should_return_input_when_unparseable() {
        assert_eq!(format_timestamp(Some("yesterday"), &Utc), "yesterday");
    }
}
