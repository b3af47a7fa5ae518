// Text rendering: fontdb face discovery -> ab_glyph font -> imageproc drawing

use ab_glyph::{Font, FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

/// Families tried in order before falling back to any face covering Latin text.
const PREFERRED_FAMILIES: &[&str] = &["Arial", "Liberation Sans", "DejaVu Sans", "Helvetica"];

/// Public-domain face compiled into the binary for hosts without usable fonts.
const FALLBACK_FONT: &[u8] = include_bytes!("../../assets/fonts/Tuffy.ttf");
const FALLBACK_FAMILY: &str = "Tuffy";

/// A font face loaded once per run and shared by every page.
pub struct PageFont {
    font: FontVec,
    family: String,
}

impl PageFont {
    /// Wrap raw font bytes. Returns `None` when the data is not a parsable face.
    pub fn from_bytes(data: Vec<u8>, index: u32, family: impl Into<String>) -> Option<Self> {
        let font = FontVec::try_from_vec_and_index(data, index).ok()?;
        Some(PageFont {
            font,
            family: family.into(),
        })
    }

    /// The embedded fallback face.
    pub fn fallback() -> Self {
        // 同梱フォントは固定データのため、パースは失敗しない。
        Self::from_bytes(FALLBACK_FONT.to_vec(), 0, FALLBACK_FAMILY)
            .expect("embedded fallback font must be a valid TrueType face")
    }

    /// A system sans-serif face if one is installed, otherwise the embedded face.
    pub fn load() -> Self {
        match Self::discover() {
            Some(font) => font,
            None => {
                tracing::warn!(
                    family = FALLBACK_FAMILY,
                    "no usable system font found; using embedded font"
                );
                Self::fallback()
            }
        }
    }

    /// Find a sans-serif face covering Latin text among the installed system fonts.
    pub fn discover() -> Option<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system font database");

        let families: Vec<fontdb::Family<'_>> = PREFERRED_FAMILIES
            .iter()
            .map(|name| fontdb::Family::Name(*name))
            .chain(std::iter::once(fontdb::Family::SansSerif))
            .collect();

        let preferred = families.iter().find_map(|family| {
            let query = fontdb::Query {
                families: std::slice::from_ref(family),
                ..fontdb::Query::default()
            };
            db.query(&query)
        });

        let candidates = preferred
            .into_iter()
            .chain(db.faces().map(|info| info.id));

        for id in candidates {
            // カバレッジ確認後、選ばれたフェースのみコピーする
            let selected = db.with_face_data(id, |data, index| {
                let covers_latin = ttf_parser::Face::parse(data, index)
                    .is_ok_and(|face| face.glyph_index('S').is_some());
                covers_latin.then(|| (data.to_vec(), index))
            });
            let Some(Some((data, index))) = selected else {
                continue;
            };

            let family = db
                .face(id)
                .and_then(|info| info.families.first().map(|(name, _)| name.clone()))
                .unwrap_or_default();

            if let Some(font) = PageFont::from_bytes(data, index, family) {
                tracing::debug!(family = font.family(), index, "selected page font");
                return Some(font);
            }
        }

        None
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Scale at which one em spans `size` pixels.
    fn px_scale(&self, size: f32) -> PxScale {
        let units_per_em = self.font.units_per_em().unwrap_or(1000.0);
        PxScale::from(size * self.font.height_unscaled() / units_per_em)
    }

    /// Size of the line box in pixels: (advance width, ascender to descender).
    pub fn measure(&self, text: &str, size: f32) -> (u32, u32) {
        text_size(self.px_scale(size), &self.font, text)
    }
}

/// Draw `text` so that the point `(ax, ay)` of its box (0..1 on each axis)
/// lands on `(x, y)`.
///
/// A non-positive `size` draws nothing. Glyphs outside the canvas are clipped.
#[allow(clippy::too_many_arguments)]
pub fn draw_text_anchored(
    img: &mut RgbImage,
    font: &PageFont,
    text: &str,
    size: f32,
    x: f32,
    y: f32,
    ax: f32,
    ay: f32,
    color: Rgb<u8>,
) {
    if size <= 0.0 || text.is_empty() {
        return;
    }
    let scale = font.px_scale(size);
    let (width, height) = text_size(scale, &font.font, text);
    let left = (x - ax * width as f32).round() as i32;
    let top = (y - ay * height as f32).round() as i32;

    draw_text_mut(img, color, left, top, scale, &font.font, text);
}
