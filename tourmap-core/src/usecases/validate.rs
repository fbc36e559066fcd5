use time::{
    format_description::FormatItem, macros::format_description, Date, Time,
};

use super::prelude::*;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]");

/// Trimmed, non-empty text. The error names the offending field.
pub fn required_text(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(value.to_string())
}

pub fn parse_position(lat: f64, lng: f64) -> Result<MapPoint> {
    MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)
}

/// Empty input counts as "not provided".
pub fn optional_email(value: Option<&str>) -> Result<Option<String>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(email) => {
            if !fast_chemail::is_valid_email(email) {
                return Err(Error::Email);
            }
            Ok(Some(email.to_string()))
        }
    }
}

pub fn optional_url(value: Option<&str>) -> Result<Option<Url>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(url) => Ok(Some(url.parse().map_err(|_| Error::Url)?)),
    }
}

/// `YYYY-MM-DD`
pub fn parse_event_date(value: &str) -> Result<Date> {
    Date::parse(value.trim(), DATE_FORMAT).map_err(|_| Error::Date)
}

/// `HH:MM` (24h)
pub fn parse_event_time(value: &str) -> Result<Time> {
    Time::parse(value.trim(), TIME_FORMAT).map_err(|_| Error::Time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    #[test]
    fn required_text_rejects_blank_input() {
        assert_eq!(required_text("name", "  Lagoa  ").unwrap(), "Lagoa");
        assert!(matches!(
            required_text("name", "   "),
            Err(Error::MissingField("name"))
        ));
    }

    #[test]
    fn email_validation_is_optional_but_strict() {
        assert_eq!(optional_email(None).unwrap(), None);
        assert_eq!(optional_email(Some("  ")).unwrap(), None);
        assert_eq!(
            optional_email(Some("info@pousada.com")).unwrap().as_deref(),
            Some("info@pousada.com")
        );
        assert!(optional_email(Some("not-an-email")).is_err());
    }

    #[test]
    fn date_and_time_formats() {
        assert_eq!(parse_event_date("2026-09-07").unwrap(), date!(2026 - 09 - 07));
        assert!(parse_event_date("07/09/2026").is_err());
        assert_eq!(parse_event_time("18:30").unwrap(), time!(18:30));
        assert!(parse_event_time("6pm").is_err());
    }

    #[test]
    fn position_must_be_in_range() {
        assert!(parse_position(-20.7836, -51.7156).is_ok());
        assert!(matches!(
            parse_position(91.0, 0.0),
            Err(Error::InvalidPosition)
        ));
    }
}
