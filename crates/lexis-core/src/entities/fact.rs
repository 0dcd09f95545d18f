use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A short standalone fact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Fact {
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<String>")]
    pub fact: String,
}

impl Fact {
    #[must_use]
    pub fn new(fact: impl Into<String>) -> Self {
        Self { fact: fact.into() }
    }
}
