//! `[output]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[output]` section in kartsite.toml - where data files are written.
///
/// # Example
/// ```toml
/// [output]
/// data_dir = "src/data"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving the JSON data files (relative to project root).
    #[serde(default = "defaults::output::data_dir")]
    #[educe(Default = defaults::output::data_dir())]
    pub data_dir: PathBuf,
}
