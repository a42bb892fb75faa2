//! Settings persistence configuration.

use serde::{Deserialize, Serialize};

/// Where the program state file lives and whether it is written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PersistenceConfig {
    pub settings_file: String,
    pub save_on_exit: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            settings_file: "resources/program_state.txt".into(),
            save_on_exit: false,
        }
    }
}
