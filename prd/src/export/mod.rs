//! PDF export
//!
//! Renders a generated document to PDF: a fixed heading, then one text line
//! per document line, wrapped at a fixed column count and flowing onto new
//! pages as needed. Layout is intentionally plain; the document text is the
//! product.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use eyre::{Context, Result, eyre};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::{debug, info};

/// Default output file name
pub const DEFAULT_FILENAME: &str = "generated_prd.pdf";

/// Heading printed at the top of the document
const DOCUMENT_TITLE: &str = "Generated PRD Document";

// A4 portrait layout
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 5.0;
const HEADING_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 12.0;

/// Characters per wrapped line at the body font size
const WRAP_COLUMNS: usize = 90;

/// Writes a generated document to a PDF file
pub struct PdfExporter {
    title: String,
}

impl PdfExporter {
    pub fn new() -> Self {
        debug!("PdfExporter::new: called");
        Self {
            title: DOCUMENT_TITLE.to_string(),
        }
    }

    /// Render the document text into a PDF at the given path
    pub fn export(&self, document: &str, output: &Path) -> Result<()> {
        debug!(?output, document_len = document.len(), "PdfExporter::export: called");

        let (doc, page, layer) = PdfDocument::new(
            &self.title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| eyre!("Failed to load builtin font: {e}"))?;

        let mut layer_ref = doc.get_page(page).get_layer(layer);
        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

        layer_ref.use_text(&self.title, HEADING_SIZE, Mm(MARGIN_MM), Mm(y), &font);
        y -= 2.0 * LINE_HEIGHT_MM;

        for line in document.lines() {
            for chunk in wrap_line(line, WRAP_COLUMNS) {
                if y < MARGIN_MM {
                    debug!("PdfExporter::export: page full, adding page");
                    let (next_page, next_layer) =
                        doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
                    layer_ref = doc.get_page(next_page).get_layer(next_layer);
                    y = PAGE_HEIGHT_MM - MARGIN_MM;
                }
                layer_ref.use_text(&chunk, BODY_SIZE, Mm(MARGIN_MM), Mm(y), &font);
                y -= LINE_HEIGHT_MM;
            }
        }

        let file =
            File::create(output).context(format!("Failed to create {}", output.display()))?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| eyre!("Failed to save PDF: {e}"))?;

        info!("Exported PDF to {}", output.display());
        Ok(())
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Break a line into chunks of at most `columns` characters
///
/// Empty lines survive as a single empty chunk so blank lines keep their
/// vertical space.
fn wrap_line(line: &str, columns: usize) -> Vec<String> {
    debug!(line_len = line.len(), %columns, "wrap_line: called");
    if line.is_empty() {
        return vec![String::new()];
    }
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(columns)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_wrap_line_short() {
        assert_eq!(wrap_line("short line", 90), vec!["short line"]);
    }

    #[test]
    fn test_wrap_line_empty() {
        assert_eq!(wrap_line("", 90), vec![String::new()]);
    }

    #[test]
    fn test_wrap_line_exact_boundary() {
        let line = "a".repeat(90);
        assert_eq!(wrap_line(&line, 90), vec![line]);
    }

    #[test]
    fn test_wrap_line_long() {
        let line = format!("{}{}", "a".repeat(90), "b".repeat(10));
        let chunks = wrap_line(&line, 90);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], "a".repeat(90));
        assert_eq!(chunks[1], "b".repeat(10));
    }

    #[test]
    fn test_export_writes_pdf() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("generated_prd.pdf");

        let exporter = PdfExporter::new();
        exporter
            .export("ACME\n\n1. Project Overview\nA widget tracker.", &output)
            .unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_long_document_spans_pages() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("long.pdf");

        // Far more lines than fit on one page.
        let document = "A line of the generated document.\n".repeat(200);
        PdfExporter::new().export(&document, &output).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
