//! Daily selection offsets.

use serde::{Deserialize, Serialize};

const fn default_fact_offset() -> i64 {
    7
}

/// Offsets added to the date seed. Distinct offsets keep the word and the
/// fact of the day from moving in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DailyConfig {
    #[serde(default)]
    pub word_offset: i64,

    #[serde(default = "default_fact_offset")]
    pub fact_offset: i64,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            word_offset: 0,
            fact_offset: default_fact_offset(),
        }
    }
}
