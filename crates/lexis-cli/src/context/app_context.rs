use anyhow::Context;
use lexis_config::LexisConfig;
use lexis_core::DataContext;
use lexis_core::view::DailyOffsets;
use lexis_data::{DataSource, FilePreferenceStore, Loader};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: LexisConfig,
    pub data: DataContext,
}

impl AppContext {
    /// Load both collections. Load failures degrade to empty collections.
    pub async fn init(config: LexisConfig) -> Self {
        let terms = DataSource::parse(&config.data.terms);
        let facts = DataSource::parse(&config.data.facts);
        let data = Loader::new().load(&terms, &facts).await;
        Self { config, data }
    }

    #[must_use]
    pub const fn offsets(&self) -> DailyOffsets {
        DailyOffsets {
            word: self.config.daily.word_offset,
            fact: self.config.daily.fact_offset,
        }
    }

    /// Row cap for search; `None` when unlimited.
    #[must_use]
    pub fn search_limit(&self) -> Option<usize> {
        match self.config.general.default_limit {
            0 => None,
            limit => usize::try_from(limit).ok(),
        }
    }
}

/// Open the preference store named by `config`.
pub fn preference_store(config: &LexisConfig) -> anyhow::Result<FilePreferenceStore> {
    config
        .preferences_path()
        .map(FilePreferenceStore::new)
        .context("no preferences path configured and no user config directory available")
}

#[cfg(test)]
mod tests {
    use lexis_core::theme::{Theme, load_theme, toggle_theme};

    use super::*;

    #[tokio::test]
    async fn init_loads_configured_sources() {
        let dir = tempfile::tempdir().expect("temp dir");
        let words = dir.path().join("words.json");
        std::fs::write(&words, r#"[{"term": "lucid"}, {"term": "terse"}]"#).expect("words");

        let mut config = LexisConfig::default();
        config.data.terms = words.display().to_string();
        config.data.facts = dir.path().join("missing.json").display().to_string();
        config.daily.fact_offset = -1;
        config.general.default_limit = 3;

        let ctx = AppContext::init(config).await;
        assert_eq!(ctx.data.terms().len(), 2);
        assert!(ctx.data.facts().is_empty());
        assert_eq!(ctx.offsets(), DailyOffsets { word: 0, fact: -1 });
        assert_eq!(ctx.search_limit(), Some(3));
    }

    #[test]
    fn zero_limit_means_unlimited() {
        let ctx = AppContext {
            config: LexisConfig::default(),
            data: DataContext::empty(),
        };
        assert_eq!(ctx.search_limit(), None);
    }

    #[test]
    fn configured_preferences_path_is_used() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut config = LexisConfig::default();
        config.general.preferences_path = Some(dir.path().join("prefs.json").display().to_string());

        let store = preference_store(&config).expect("store");
        assert_eq!(load_theme(&store).expect("load"), Theme::Dark);
        assert_eq!(toggle_theme(&store).expect("toggle"), Theme::Light);
        assert!(dir.path().join("prefs.json").exists());
    }
}
