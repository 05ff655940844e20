use super::font_metrics::{Face, text_width_mm};
use super::layout::{PageGeometry, WrappedRow, build_layout, paginate};
use super::traits::{ReportError, ReportRenderer};
use crate::domain::mls_point::entity::MlsPoint;
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rgb};
use tracing::debug;

// A4, with the key/value table centered between one-inch margins.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 25.4;
const LABEL_COLUMN_MM: f32 = 63.5;
const VALUE_COLUMN_MM: f32 = 88.9;
const CELL_PADDING_MM: f32 = 1.5;

const TITLE_FONT_PT: f32 = 14.0;
const BODY_FONT_PT: f32 = 10.0;
const TITLE_BLOCK_MM: f32 = 12.0;
const LINE_HEIGHT_MM: f32 = 4.3;
const PT_TO_MM: f32 = 0.3528;

const LAYER_NAME: &str = "Layer 1";

/// Renders a record as an A4 PDF using the built-in Helvetica faces.
#[derive(Debug, Clone)]
pub struct PdfReportRenderer {
    geometry: PageGeometry,
}

impl Default for PdfReportRenderer {
    fn default() -> Self {
        let body_height = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM;
        Self {
            geometry: PageGeometry {
                label_width: LABEL_COLUMN_MM - 2.0 * CELL_PADDING_MM,
                value_width: VALUE_COLUMN_MM - 2.0 * CELL_PADDING_MM,
                font_size: BODY_FONT_PT,
                line_height: LINE_HEIGHT_MM,
                row_padding: CELL_PADDING_MM,
                first_page_height: body_height - TITLE_BLOCK_MM,
                page_height: body_height,
            },
        }
    }
}

impl PdfReportRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw_rows(
        &self,
        layer: &PdfLayerReference,
        rows: &[WrappedRow],
        top: f32,
        label_font: &IndirectFontRef,
        value_font: &IndirectFontRef,
    ) -> usize {
        let table_left = (PAGE_WIDTH_MM - LABEL_COLUMN_MM - VALUE_COLUMN_MM) / 2.0;
        let label_x = table_left + CELL_PADDING_MM;
        let value_x = table_left + LABEL_COLUMN_MM + CELL_PADDING_MM;
        let ascent = BODY_FONT_PT * PT_TO_MM;

        let mut y = top;
        for row in rows {
            let first_baseline = y - CELL_PADDING_MM - ascent;
            for (i, line) in row.label.iter().enumerate() {
                let baseline = first_baseline - i as f32 * LINE_HEIGHT_MM;
                layer.use_text(line.as_str(), BODY_FONT_PT, Mm(label_x), Mm(baseline), label_font);
            }
            for (i, line) in row.value.iter().enumerate() {
                let baseline = first_baseline - i as f32 * LINE_HEIGHT_MM;
                layer.use_text(line.as_str(), BODY_FONT_PT, Mm(value_x), Mm(baseline), value_font);
            }
            y -= self.geometry.row_height(row);
        }
        rows.len()
    }

    /// Encodes the document and returns it with the number of table rows drawn.
    fn render_document(&self, point: &MlsPoint) -> Result<(Vec<u8>, usize), ReportError> {
        let layout = build_layout(point);
        let pages = paginate(&layout, &self.geometry);

        let (doc, first_page, first_layer) = PdfDocument::new(
            layout.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            LAYER_NAME,
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Font(format!("{:?}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::Font(format!("{:?}", e)))?;

        let top = PAGE_HEIGHT_MM - MARGIN_MM;
        let mut drawn = 0;
        for (index, rows) in pages.iter().enumerate() {
            if index == 0 {
                let layer = doc.get_page(first_page).get_layer(first_layer);
                let title_width = text_width_mm(&layout.title, Face::Bold, TITLE_FONT_PT);
                layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.545, None)));
                layer.use_text(
                    layout.title.as_str(),
                    TITLE_FONT_PT,
                    Mm((PAGE_WIDTH_MM - title_width) / 2.0),
                    Mm(top - TITLE_FONT_PT * PT_TO_MM),
                    &bold,
                );
                layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
                drawn += self.draw_rows(&layer, rows, top - TITLE_BLOCK_MM, &bold, &regular);
            } else {
                let (page, layer_index) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
                let layer = doc.get_page(page).get_layer(layer_index);
                drawn += self.draw_rows(&layer, rows, top, &bold, &regular);
            }
        }

        debug!(
            code = point.code(),
            pages = pages.len(),
            rows = drawn,
            "Rendered MLS point report"
        );

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| ReportError::Encoding(format!("{:?}", e)))?;
        Ok((bytes, drawn))
    }
}

impl ReportRenderer for PdfReportRenderer {
    fn render(&self, point: &MlsPoint) -> Result<Vec<u8>, ReportError> {
        self.render_document(point).map(|(bytes, _)| bytes)
    }
}
