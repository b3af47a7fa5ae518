use image::{Rgb, RgbImage};

/// Allocate a canvas filled with a single color.
pub fn new_canvas(width: u32, height: u32, fill: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, fill)
}

/// Draw a one-pixel outline inset `border` pixels from every edge.
///
/// The outline covers `x` in `border..width-border` and `y` in
/// `border..height-border`; only the four edges of that rectangle are
/// painted. An empty or inverted range draws nothing, and coordinates
/// outside the canvas are skipped.
pub fn draw_border(img: &mut RgbImage, border: i32, color: Rgb<u8>) {
    let width = img.width() as i64;
    let height = img.height() as i64;
    let b = border as i64;

    let left = b;
    let top = b;
    let right = width - b - 1;
    let bottom = height - b - 1;
    if left > right || top > bottom {
        return;
    }

    for x in left..=right {
        put_clipped(img, x, top, color);
        put_clipped(img, x, bottom, color);
    }
    for y in top..=bottom {
        put_clipped(img, left, y, color);
        put_clipped(img, right, y, color);
    }
}

fn put_clipped(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    img.put_pixel(x as u32, y as u32, color);
}
