// Page renderer: RenderParameters -> canvas -> JPEG bytes

use image::RgbImage;

use super::text::{PageFont, draw_text_anchored};
use super::{BACKGROUND, FOREGROUND, canvas, jpeg};
use crate::config::layout::RenderParameters;
use crate::config::{JPEG_QUALITY, TEXT_OFFSET};

/// Render one page to an in-memory canvas.
///
/// Steps:
/// 1. Fill the canvas with the background color
/// 2. Draw the inset border outline
/// 3. Draw the title and resolution lines centered above and below the middle
pub fn render_raster(params: &RenderParameters, font: &PageFont) -> RgbImage {
    let mut img = canvas::new_canvas(params.canvas_width, params.canvas_height, BACKGROUND);

    canvas::draw_border(&mut img, params.border_width, FOREGROUND);

    let size = params.font_size as f32;
    let cx = params.canvas_width as f32 / 2.0;
    let cy = params.canvas_height as f32 / 2.0;

    draw_text_anchored(
        &mut img,
        font,
        &params.title_text(),
        size,
        cx,
        cy - TEXT_OFFSET,
        0.5,
        0.5,
        FOREGROUND,
    );
    draw_text_anchored(
        &mut img,
        font,
        &params.resolution_text(),
        size,
        cx,
        cy + TEXT_OFFSET,
        0.5,
        0.5,
        FOREGROUND,
    );

    img
}

/// Render one page and encode it as JPEG.
pub fn render_page(params: &RenderParameters, font: &PageFont) -> crate::error::Result<Vec<u8>> {
    let img = render_raster(params, font);
    jpeg::encode_rgb_to_jpeg(&img, JPEG_QUALITY)
}
