pub mod canvas;
pub mod jpeg;
pub mod page;
pub mod text;

use image::Rgb;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const FOREGROUND: Rgb<u8> = Rgb([0, 0, 0]);
