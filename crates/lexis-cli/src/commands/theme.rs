use lexis_core::Theme;
use lexis_core::theme::{load_theme, save_theme, toggle_theme};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ThemeArg, ThemeCommands};
use crate::context::preference_store;
use crate::output::{TextView, output};

/// Response from `lexis theme`.
#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub store: String,
}

impl TextView for ThemeResponse {
    fn to_text(&self, _color: bool) -> String {
        format!("theme: {}", self.theme)
    }
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

/// Handle `lexis theme`.
pub fn handle(
    action: &ThemeCommands,
    config: &lexis_config::LexisConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let store = preference_store(config)?;

    let theme = match action {
        ThemeCommands::Show => load_theme(&store)?,
        ThemeCommands::Toggle => toggle_theme(&store)?,
        ThemeCommands::Set { theme } => {
            let theme = Theme::from(*theme);
            save_theme(&store, theme)?;
            theme
        }
    };

    let response = ThemeResponse {
        theme,
        store: store.path().display().to_string(),
    };
    output(&response, flags.format)
}
