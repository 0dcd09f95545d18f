use anyhow::Context;
use chrono::NaiveDate;
use lexis_core::selector::today;

/// Parse `--date YYYY-MM-DD`, defaulting to today.
pub fn resolve_date(date: Option<&str>) -> anyhow::Result<NaiveDate> {
    date.map_or_else(
        || Ok(today()),
        |raw| {
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .with_context(|| format!("invalid --date '{raw}': expected YYYY-MM-DD"))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            resolve_date(Some("2024-01-15")).expect("date"),
            NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
        );
    }

    #[test]
    fn rejects_other_formats() {
        assert!(resolve_date(Some("15/01/2024")).is_err());
        assert!(resolve_date(Some("2024-02-30")).is_err());
    }

    #[test]
    fn missing_date_means_today() {
        assert_eq!(resolve_date(None).expect("date"), today());
    }
}
