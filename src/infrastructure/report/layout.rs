//! Page-independent layout of the MLS point report.
//!
//! Everything here is pure: the PDF encoder only places the strings this
//! module produces.

use super::font_metrics::{Face, text_width_mm};
use crate::domain::mls_point::entity::MlsPoint;

pub const REPORT_TITLE: &str = "MLS Point Details";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub title: String,
    pub rows: Vec<ReportRow>,
}

/// A row broken into the lines each column needs.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedRow {
    pub label: Vec<String>,
    pub value: Vec<String>,
}

impl WrappedRow {
    pub fn line_count(&self) -> usize {
        self.label.len().max(self.value.len()).max(1)
    }
}

/// Column widths, font size and vertical space, all in millimetres except
/// the font size in points. Labels are set bold, values regular.
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    pub label_width: f32,
    pub value_width: f32,
    pub font_size: f32,
    pub line_height: f32,
    pub row_padding: f32,
    /// Space left for rows on the first page, below the title.
    pub first_page_height: f32,
    pub page_height: f32,
}

impl PageGeometry {
    pub fn row_height(&self, row: &WrappedRow) -> f32 {
        row.line_count() as f32 * self.line_height + 2.0 * self.row_padding
    }

    /// Lines a single row may hold within `height`.
    fn lines_within(&self, height: f32) -> usize {
        (((height - 2.0 * self.row_padding) / self.line_height).floor() as usize).max(1)
    }
}

/// `num_stage2_vehicles` becomes `Num Stage2 Vehicles`.
pub fn field_label(field: &str) -> String {
    field
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Download name: `<code>_<name with spaces as underscores>.pdf`.
pub fn report_filename(point: &MlsPoint) -> String {
    format!("{}_{}.pdf", point.code(), point.name().replace(' ', "_"))
}

pub fn build_layout(point: &MlsPoint) -> ReportLayout {
    ReportLayout {
        title: REPORT_TITLE.to_string(),
        rows: point
            .fields()
            .map(|(field, value)| ReportRow {
                label: field_label(field),
                value: value.to_string(),
            })
            .collect(),
    }
}

/// Greedy word wrap on measured width; words wider than a line are split.
pub fn wrap_text(text: &str, max_width: f32, face: Face, size_pt: f32) -> Vec<String> {
    let fits = |line: &str| text_width_mm(line, face, size_pt) <= max_width;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in split_word(word, &fits) {
            if current.is_empty() {
                current = piece;
                continue;
            }
            let candidate = format!("{} {}", current, piece);
            if fits(&candidate) {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, piece));
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Breaks one word into chunks that each fit; a single glyph always fits.
fn split_word(word: &str, fits: &impl Fn(&str) -> bool) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut chunk = String::new();
    for c in word.chars() {
        chunk.push(c);
        if !fits(&chunk) && chunk.chars().count() > 1 {
            chunk.pop();
            pieces.push(std::mem::take(&mut chunk));
            chunk.push(c);
        }
    }
    if !chunk.is_empty() {
        pieces.push(chunk);
    }
    pieces
}

/// Cuts a row to `max_lines`, ending a shortened value with `...` that
/// still fits the value column.
fn cap_lines(row: &mut WrappedRow, max_lines: usize, geometry: &PageGeometry) {
    if row.value.len() > max_lines {
        row.value.truncate(max_lines);
        if let Some(last) = row.value.last_mut() {
            last.push_str("...");
            while text_width_mm(last, Face::Regular, geometry.font_size) > geometry.value_width
                && last.len() > "...".len()
            {
                let cut = last.len() - "...".len();
                if let Some((i, _)) = last[..cut].char_indices().last() {
                    last.remove(i);
                }
            }
        }
    }
    row.label.truncate(max_lines);
}

/// Splits rows across pages. The first page always exists, even when empty.
pub fn paginate(layout: &ReportLayout, geometry: &PageGeometry) -> Vec<Vec<WrappedRow>> {
    let mut pages = Vec::new();
    let mut current: Vec<WrappedRow> = Vec::new();
    let mut used = 0.0;
    let mut capacity = geometry.first_page_height;

    for row in &layout.rows {
        let mut wrapped = WrappedRow {
            label: wrap_text(&row.label, geometry.label_width, Face::Bold, geometry.font_size),
            value: wrap_text(&row.value, geometry.value_width, Face::Regular, geometry.font_size),
        };

        if used + geometry.row_height(&wrapped) > capacity && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
            used = 0.0;
            capacity = geometry.page_height;
        }
        // A single row never spans pages; it is cut to the room left on its own.
        if geometry.row_height(&wrapped) > capacity - used {
            cap_lines(&mut wrapped, geometry.lines_within(capacity - used), geometry);
        }

        used += geometry.row_height(&wrapped);
        current.push(wrapped);
    }

    pages.push(current);
    pages
}
