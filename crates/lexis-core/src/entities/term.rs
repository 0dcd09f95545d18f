use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A vocabulary entry. Identity is the `term` text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<String>")]
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    #[schemars(with = "Option<Vec<String>>")]
    pub tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    #[schemars(with = "Option<Vec<Source>>")]
    pub sources: Vec<Source>,
}

impl Term {
    /// Build a bare term with only its identifying text set.
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    /// Set the short definition.
    #[must_use]
    pub fn with_short_definition(mut self, definition: impl Into<String>) -> Self {
        self.short_definition = Some(definition.into());
        self
    }

    /// Set the long definition.
    #[must_use]
    pub fn with_long_definition(mut self, definition: impl Into<String>) -> Self {
        self.long_definition = Some(definition.into());
        self
    }

    /// Append a citation.
    #[must_use]
    pub fn with_source(mut self, source: Source) -> Self {
        self.sources.push(source);
        self
    }

    /// Short definition, treating an empty string as absent.
    #[must_use]
    pub fn short_definition(&self) -> Option<&str> {
        non_empty(self.short_definition.as_deref())
    }

    /// Long definition, treating an empty string as absent.
    #[must_use]
    pub fn long_definition(&self) -> Option<&str> {
        non_empty(self.long_definition.as_deref())
    }

    /// Best available definition: short first, then long.
    #[must_use]
    pub fn definition(&self) -> Option<&str> {
        self.short_definition().or_else(|| self.long_definition())
    }
}

/// A citation attached to a term.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Source {
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<String>")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Source {
    #[must_use]
    pub fn new(url: impl Into<String>, name: Option<&str>) -> Self {
        Self {
            url: url.into(),
            name: name.map(str::to_string),
        }
    }

    /// Display label: the name when present, otherwise the URL.
    #[must_use]
    pub fn label(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(&self.url)
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
