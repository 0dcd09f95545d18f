use std::fmt;
use std::path::PathBuf;

/// Where a collection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Path(PathBuf),
    Url(String),
}

impl DataSource {
    /// Interpret a configured location: `http://` and `https://` prefixes
    /// mean a URL, anything else is a filesystem path.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::Path(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://example.org/words.json", true)]
    #[case("HTTP://example.org/words.json", true)]
    #[case("  http://localhost:8000/facts.json ", true)]
    #[case("data/words.json", false)]
    #[case("/srv/site/data/facts.json", false)]
    #[case("httpdocs/words.json", false)]
    fn classifies_locations(#[case] location: &str, #[case] is_url: bool) {
        assert_eq!(matches!(DataSource::parse(location), DataSource::Url(_)), is_url);
    }

    #[test]
    fn display_round_trips_location() {
        assert_eq!(DataSource::parse("data/words.json").to_string(), "data/words.json");
    }
}
