//! Theme preference and the key-value store it lives in.
//!
//! Only one key is ever stored. `"light"` selects the light theme; any other
//! value, or no value at all, means the default dark theme.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Key under which the theme is stored.
pub const THEME_KEY: &str = "theme";

/// Display theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored value.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string key-value store for user preferences.
pub trait PreferenceStore {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Preference`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Preference`] if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// Read the current theme from `store`.
///
/// # Errors
///
/// Propagates store read failures.
pub fn load_theme(store: &dyn PreferenceStore) -> Result<Theme, CoreError> {
    Ok(Theme::from_stored(store.get(THEME_KEY)?.as_deref()))
}

/// Persist `theme` to `store`.
///
/// # Errors
///
/// Propagates store write failures.
pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) -> Result<(), CoreError> {
    store.set(THEME_KEY, theme.as_str())
}

/// Flip the stored theme and return the new one.
///
/// # Errors
///
/// Propagates store read or write failures.
pub fn toggle_theme(store: &dyn PreferenceStore) -> Result<Theme, CoreError> {
    let next = load_theme(store)?.toggle();
    save_theme(store, next)?;
    Ok(next)
}

/// In-process preference store.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
