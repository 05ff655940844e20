//! Lookups over the loaded table. Every function is pure and never fails; an
//! empty table simply yields empty results.

use std::collections::BTreeSet;

use super::entity::{AreaSummary, MlsPoint};
use super::raw_row::{MlsTable, RawRow};
use super::schema::normalize;

const CODE_COLUMN: &str = "mls_point_code";

/// Identity values that stand for "missing" in exported spreadsheets.
const PLACEHOLDER_CODES: &[&str] = &["nan", "none", "null"];

fn column_text(row: &RawRow, column: &str) -> String {
    row.text(column).unwrap_or_default()
}

/// Distinct `(code, name)` pairs from two columns, sorted by name then code.
fn distinct_areas<'a>(
    rows: impl Iterator<Item = &'a RawRow>,
    code_column: &str,
    name_column: &str,
) -> Vec<AreaSummary> {
    rows.map(|row| {
        (
            column_text(row, name_column),
            column_text(row, code_column),
        )
    })
    .collect::<BTreeSet<_>>()
    .into_iter()
    .map(|(name, code)| AreaSummary { code, name })
    .collect()
}

pub fn list_districts(table: &MlsTable) -> Vec<AreaSummary> {
    distinct_areas(table.rows().iter(), "district_code", "district_name")
}

pub fn list_mandals(table: &MlsTable, district_code: &str) -> Vec<AreaSummary> {
    let rows = table
        .rows()
        .iter()
        .filter(|row| column_text(row, "district_code") == district_code);
    distinct_areas(rows, "mandal_code", "mandal_name")
}

/// Normalized points in one mandal, skipping those without a known location.
pub fn list_points(table: &MlsTable, district_code: &str, mandal_code: &str) -> Vec<MlsPoint> {
    table
        .rows()
        .iter()
        .filter(|row| {
            column_text(row, "district_code") == district_code
                && column_text(row, "mandal_code") == mandal_code
        })
        .map(normalize)
        .filter(|point| !point.has_sentinel_coordinates())
        .collect()
}

/// First row whose code matches after trimming and case folding.
pub fn find_by_code(table: &MlsTable, code: &str) -> Option<MlsPoint> {
    let wanted = code.trim().to_uppercase();
    table
        .rows()
        .iter()
        .find(|row| column_text(row, CODE_COLUMN).trim().to_uppercase() == wanted)
        .map(normalize)
}

pub fn list_codes(table: &MlsTable) -> Vec<String> {
    table
        .rows()
        .iter()
        .map(|row| column_text(row, CODE_COLUMN).trim().to_string())
        .filter(|code| !code.is_empty() && !is_placeholder(code))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn is_placeholder(code: &str) -> bool {
    PLACEHOLDER_CODES
        .iter()
        .any(|p| code.eq_ignore_ascii_case(p))
}
