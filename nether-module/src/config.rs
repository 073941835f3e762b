//! Load configuration

use serde::{Deserialize, Serialize};

use crate::pitch::PitchMode;

/// Knobs for [`ModuleStore`](crate::ModuleStore)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Files larger than this are rejected before sniffing
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// Strip trailing spaces and 0x1A from names on install
    #[serde(default = "default_true")]
    pub trim_names: bool,
    /// Pitch mode a fresh staging song starts with
    #[serde(default)]
    pub default_pitch_mode: PitchMode,
}

fn default_true() -> bool { true }
fn default_max_file_size() -> u64 { 64 * 1024 * 1024 }

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            trim_names: true,
            default_pitch_mode: PitchMode::default(),
        }
    }
}
