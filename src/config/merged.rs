use std::path::PathBuf;

use super::settings::Settings;

/// Values given on the command line. `None` means the option was omitted.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub pages: Option<i32>,
    pub output: Option<PathBuf>,
    pub font_size: Option<i32>,
    pub border_width: Option<i32>,
}

/// Fully resolved configuration for one generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub output: PathBuf,
    pub num_pages: i32,
    pub font_size: i32,
    pub border_width: i32,
}

impl GeneratorConfig {
    /// CLIのOption値がSomeならCLIの値を、NoneならSettingsの値を使用する。
    pub fn merge(settings: &Settings, cli: &CliOverrides) -> Self {
        GeneratorConfig {
            output: cli.output.clone().unwrap_or_else(|| settings.output.clone()),
            num_pages: cli.pages.unwrap_or(settings.pages),
            font_size: cli.font_size.unwrap_or(settings.fontsize),
            border_width: cli.border_width.unwrap_or(settings.border),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::merge(&Settings::default(), &CliOverrides::default())
    }
}
