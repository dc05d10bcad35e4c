//! Utility module.

pub mod log_trace;

// Shared helpers

/// Display form of an optional ISO date/datetime: `DD.MM.YYYY`, or
/// `"-"` when absent or malformed.
pub fn format_date(value: Option<&str>) -> String {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return "-".to_string();
    };
    let date = date_input_value(value);
    let mut parts = date.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) if !y.is_empty() && !m.is_empty() && !d.is_empty() => {
            format!("{}.{}.{}", d, m, y)
        }
        _ => "-".to_string(),
    }
}

/// Date-only part of an ISO datetime, as `<input type="date">` wants it.
pub fn date_input_value(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

/// Case-insensitive substring match used by the table filters. An
/// empty or whitespace-only needle keeps every row visible.
pub fn matches_filter(needle: &str, haystack: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_handles_datetime_and_date() {
        assert_eq!(format_date(Some("2024-01-05T00:00:00")), "05.01.2024");
        assert_eq!(format_date(Some("2024-12-31")), "31.12.2024");
    }

    #[test]
    fn format_date_falls_back_to_dash() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("")), "-");
        assert_eq!(format_date(Some("not a date")), "-");
    }

    #[test]
    fn date_input_value_splits_at_t() {
        assert_eq!(date_input_value("2024-01-05T12:30:00"), "2024-01-05");
        assert_eq!(date_input_value("2024-01-05"), "2024-01-05");
    }

    #[test]
    fn filter_is_case_insensitive() {
        assert!(matches_filter("redesign", "3 Site Redesign Planned"));
        assert!(matches_filter("SITE", "3 Site Redesign Planned"));
        assert!(!matches_filter("migration", "3 Site Redesign Planned"));
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(matches_filter("", "anything"));
        assert!(matches_filter("   ", "anything"));
    }
}
