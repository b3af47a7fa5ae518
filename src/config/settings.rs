use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{DEFAULT_BORDER, DEFAULT_FONT_SIZE, DEFAULT_OUTPUT, DEFAULT_PAGES};

/// YAML settings file. Keys match the CLI option names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pages: i32,
    pub output: PathBuf,
    pub fontsize: i32,
    pub border: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            pages: DEFAULT_PAGES,
            output: PathBuf::from(DEFAULT_OUTPUT),
            fontsize: DEFAULT_FONT_SIZE,
            border: DEFAULT_BORDER,
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> crate::error::Result<Self> {
        serde_yml::from_str(yaml).map_err(|e| {
            crate::error::CbzGenError::config(format!("Failed to parse settings YAML: {e}"))
        })
    }

    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::CbzGenError::config(format!(
                "Failed to read settings file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_yaml(&content)
    }
}
