//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default row cap for `lexis search`. 0 means unlimited.
    #[serde(default)]
    pub default_limit: u32,

    /// Preference store location. Defaults to the user config directory.
    #[serde(default)]
    pub preferences_path: Option<String>,
}
