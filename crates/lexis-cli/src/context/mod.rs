mod app_context;
mod config_warnings;

pub use app_context::{AppContext, preference_store};
pub use config_warnings::warn_unconfigured;
