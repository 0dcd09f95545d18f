use lexis_config::{ENV_PREFIX, LexisConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &LexisConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LexisConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let defaults = LexisConfig::default();
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let sections = [
        ("DATA", config.data == defaults.data, "LEXIS_DATA__TERMS"),
        ("DAILY", config.daily == defaults.daily, "LEXIS_DAILY__FACT_OFFSET"),
        ("GENERAL", config.general == defaults.general, "LEXIS_GENERAL__DEFAULT_LIMIT"),
    ];

    sections
        .into_iter()
        .filter(|(section, is_default, _)| {
            *is_default && has_single_underscore_key(&env_keys, section)
        })
        .map(|(section, _, example)| {
            format!(
                "{} config appears default while {ENV_PREFIX}{section}_* env vars exist. Use double underscores (example: {example}).",
                section.to_ascii_lowercase()
            )
        })
        .collect()
}

/// `LEXIS_DATA_TERMS` instead of `LEXIS_DATA__TERMS`.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let prefix = format!("{ENV_PREFIX}{section}_");
    let nested = format!("{ENV_PREFIX}{section}__");
    keys.iter()
        .any(|key| key.starts_with(&prefix) && !key.starts_with(&nested))
}
