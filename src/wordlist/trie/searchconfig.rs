use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::Result;

pub const DEFAULT_THRESHOLD_PERCENT: f64 = 70.0;

#[derive(TypedBuilder, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SuggestConfig {
    /// Minimum similarity, in percent, for a suggestion to count as a best match.
    #[builder(default = DEFAULT_THRESHOLD_PERCENT)]
    pub threshold_percent: f64,
    /// Cap on how many suggestions are returned; `None` returns them all.
    #[builder(default, setter(strip_option))]
    pub max_results: Option<usize>,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig::builder().build()
    }
}

impl SuggestConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SuggestConfig> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}
