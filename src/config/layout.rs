use super::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Everything the page renderer needs for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderParameters {
    /// 1-based page number shown on the page.
    pub page_index: i32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub font_size: i32,
    /// Inset of the outline from each canvas edge.
    pub border_width: i32,
}

impl RenderParameters {
    pub fn new(page_index: i32, font_size: i32, border_width: i32) -> Self {
        RenderParameters {
            page_index,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            font_size,
            border_width,
        }
    }

    pub fn title_text(&self) -> String {
        format!("Sample Page {}", self.page_index)
    }

    pub fn resolution_text(&self) -> String {
        format!("Resolution: {}x{}", self.canvas_width, self.canvas_height)
    }
}
