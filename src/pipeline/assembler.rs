// Archive assembler: pages 1..=N -> render -> zip entries

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::config::layout::RenderParameters;
use crate::config::merged::GeneratorConfig;
use crate::render::page::render_page;
use crate::render::text::PageFont;

/// One encoded page waiting to be copied into the archive.
pub struct ArchiveEntry {
    pub name: String,
    pub content: Vec<u8>,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleSummary {
    pub output_path: PathBuf,
    pub pages_written: usize,
}

/// Archive member name for a 1-based page index, e.g. `page_007.jpg`.
pub fn entry_name(page_index: i32) -> String {
    format!("page_{page_index:03}.jpg")
}

/// Generate every page and write them into a CBZ archive at `output_path`.
///
/// Pages are rendered and stored strictly in ascending order. The first
/// error aborts the run; whatever was already written stays on disk.
pub fn assemble(
    output_path: &Path,
    num_pages: i32,
    font_size: i32,
    border_width: i32,
    font: &PageFont,
) -> crate::error::Result<AssembleSummary> {
    let file = File::create(output_path)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    // Pages are already JPEG-compressed
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    let mut pages_written = 0;
    for page_index in 1..=num_pages {
        let entry = ArchiveEntry {
            name: entry_name(page_index),
            content: render_page(
                &RenderParameters::new(page_index, font_size, border_width),
                font,
            )?,
        };

        zip.start_file(entry.name.as_str(), options)?;
        zip.write_all(&entry.content)?;
        tracing::debug!(
            page = page_index,
            entry = %entry.name,
            bytes = entry.content.len(),
            "archived page"
        );
        pages_written += 1;
    }

    let mut writer = zip.finish()?;
    writer.flush()?;

    Ok(AssembleSummary {
        output_path: output_path.to_path_buf(),
        pages_written,
    })
}

/// Load a page font and run [`assemble`] with the resolved configuration.
pub fn create_cbz(config: &GeneratorConfig) -> crate::error::Result<AssembleSummary> {
    let font = PageFont::load();
    tracing::debug!(family = font.family(), "using page font");

    assemble(
        &config.output,
        config.num_pages,
        config.font_size,
        config.border_width,
        &font,
    )
}
