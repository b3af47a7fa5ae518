pub mod layout;
pub mod merged;
pub mod settings;

use settings::Settings;
use std::path::Path;

/// Canvas width in pixels (a quartered A3 page proportion).
pub const CANVAS_WIDTH: u32 = 350;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 496;

pub const DEFAULT_PAGES: i32 = 10;
pub const DEFAULT_OUTPUT: &str = "output.cbz";
pub const DEFAULT_FONT_SIZE: i32 = 72;
pub const DEFAULT_BORDER: i32 = 50;

/// JPEG quality used for every page (1-100).
pub const JPEG_QUALITY: u8 = 75;

/// Vertical distance of each text line from the canvas center, in pixels.
pub const TEXT_OFFSET: f32 = 50.0;

/// 設定ファイルを読み込む。パスが指定されていなければデフォルト設定を返す。
pub fn load_settings(path: Option<&Path>) -> crate::error::Result<Settings> {
    match path {
        Some(p) => Settings::from_file(p),
        None => Ok(Settings::default()),
    }
}
