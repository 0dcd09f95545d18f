//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use lexis_config::LexisConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_data_sources_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[data]
terms = "https://example.org/words.json"
facts = "./facts.json"
"#,
        )?;

        let config: LexisConfig = Figment::from(Serialized::defaults(LexisConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.data.terms, "https://example.org/words.json");
        assert_eq!(config.data.facts, "./facts.json");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[daily]
word_offset = -3
",
        )?;

        let config: LexisConfig = Figment::from(Serialized::defaults(LexisConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.daily.word_offset, -3);
        assert_eq!(config.daily.fact_offset, 7);
        assert_eq!(config.data.terms, "data/words.json");
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lexis")?;
        jail.create_file(
            ".lexis/config.toml",
            r#"
[general]
default_limit = 25
preferences_path = "prefs.json"
"#,
        )?;

        let config = LexisConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 25);
        assert_eq!(config.general.preferences_path.as_deref(), Some("prefs.json"));
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[data]
terms = "from-toml.json"
"#,
        )?;
        jail.set_env("LEXIS_DATA__TERMS", "from-env.json");

        let config: LexisConfig = Figment::from(Serialized::defaults(LexisConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LEXIS_").split("__"))
            .extract()?;

        assert_eq!(config.data.terms, "from-env.json");
        Ok(())
    });
}
