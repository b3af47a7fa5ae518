// Text drawing tests
//
// All drawing goes through the embedded face so results do not depend on
// which fonts the host has installed.

use cbz_gen::render::text::{PageFont, draw_text_anchored};
use cbz_gen::render::{BACKGROUND, FOREGROUND};
use image::RgbImage;

fn blank(w: u32, h: u32) -> RgbImage {
    RgbImage::from_pixel(w, h, BACKGROUND)
}

/// Bounding box of dark pixels as (min_x, min_y, max_x, max_y).
fn ink_bounds(img: &RgbImage) -> Option<(u32, u32, u32, u32)> {
    img.enumerate_pixels()
        .filter(|(_, _, p)| p.0[0] < 128)
        .fold(None, |acc, (x, y, _)| match acc {
            None => Some((x, y, x, y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
        })
}

// ============================================================
// 1. Font loading
// ============================================================

#[test]
fn test_fallback_font_is_available() {
    let font = PageFont::fallback();
    assert_eq!(font.family(), "Tuffy");
}

#[test]
fn test_load_always_returns_a_font() {
    let font = PageFont::load();
    let (width, height) = font.measure("Sample Page 1", 24.0);
    assert!(width > 0 && height > 0);
}

#[test]
fn test_page_font_rejects_invalid_data() {
    assert!(PageFont::from_bytes(b"not a font".to_vec(), 0, "bogus").is_none());
}

// ============================================================
// 2. Measurement
// ============================================================

#[test]
fn test_measure_scales_with_size() {
    let font = PageFont::fallback();
    let (w1, h1) = font.measure("Sample Page 1", 36.0);
    let (w2, h2) = font.measure("Sample Page 1", 72.0);
    assert!(w1 > 0 && h1 > 0);
    // sizes are rounded up to whole pixels
    assert!(w2.abs_diff(2 * w1) <= 2, "width {w2} not double {w1}");
    assert!(h2.abs_diff(2 * h1) <= 2, "height {h2} not double {h1}");
}

#[test]
fn test_measure_longer_text_is_wider() {
    let font = PageFont::fallback();
    let (short, _) = font.measure("Page 1", 24.0);
    let (long, _) = font.measure("Sample Page 1", 24.0);
    assert!(long > short);
}

// ============================================================
// 3. Anchored drawing
// ============================================================

#[test]
fn test_centered_text_ink_around_anchor() {
    let font = PageFont::fallback();
    let mut img = blank(300, 100);
    draw_text_anchored(&mut img, &font, "Sample Page 1", 24.0, 150.0, 50.0, 0.5, 0.5, FOREGROUND);

    let (x0, y0, x1, y1) = ink_bounds(&img).expect("no ink drawn");
    let center_x = (x0 + x1) as f32 / 2.0;
    assert!((center_x - 150.0).abs() <= 6.0, "ink {x0}..={x1} not centered on 150");

    // ink stays within the line box around the anchor
    let (_, height) = font.measure("Sample Page 1", 24.0);
    let half = height as f32 / 2.0 + 1.0;
    assert!(y0 as f32 >= 50.0 - half && y1 as f32 <= 50.0 + half);
    assert!(y0 < 50 && y1 > 40, "ink should straddle the anchor row");
}

#[test]
fn test_top_left_anchor_draws_below_and_right() {
    let font = PageFont::fallback();
    let mut img = blank(300, 100);
    draw_text_anchored(&mut img, &font, "Resolution: 350x496", 20.0, 20.0, 20.0, 0.0, 0.0, FOREGROUND);

    let (x0, y0, _, _) = ink_bounds(&img).expect("no ink drawn");
    assert!(x0 >= 19, "ink starts left of anchor at x={x0}");
    assert!(y0 >= 20, "ink starts above anchor at y={y0}");
}

#[test]
fn test_non_positive_size_or_empty_text_draws_nothing() {
    let font = PageFont::fallback();
    let mut img = blank(100, 100);
    draw_text_anchored(&mut img, &font, "Sample", 0.0, 50.0, 50.0, 0.5, 0.5, FOREGROUND);
    draw_text_anchored(&mut img, &font, "Sample", -10.0, 50.0, 50.0, 0.5, 0.5, FOREGROUND);
    draw_text_anchored(&mut img, &font, "", 24.0, 50.0, 50.0, 0.5, 0.5, FOREGROUND);
    assert!(img.pixels().all(|p| *p == BACKGROUND));
}

#[test]
fn test_oversized_text_is_clipped() {
    let font = PageFont::fallback();
    let mut img = blank(60, 40);
    draw_text_anchored(&mut img, &font, "Sample Page 1", 72.0, 30.0, 20.0, 0.5, 0.5, FOREGROUND);
    assert_eq!(img.dimensions(), (60, 40));
    assert!(ink_bounds(&img).is_some());
}
