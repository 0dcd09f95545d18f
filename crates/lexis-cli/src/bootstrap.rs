use lexis_config::LexisConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LexisConfig> {
    let mut config = LexisConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut LexisConfig, flags: &GlobalFlags) {
    if let Some(terms) = &flags.terms {
        config.data.terms.clone_from(terms);
    }
    if let Some(facts) = &flags.facts {
        config.data.facts.clone_from(facts);
    }
    if let Some(limit) = flags.limit {
        config.general.default_limit = limit;
    }
}
