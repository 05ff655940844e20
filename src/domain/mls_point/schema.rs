//! Mapping from the store's hand-authored column names onto the fixed
//! client-facing record.
//!
//! Every output field names the raw columns it is read from, in priority
//! order, and the kind that decides its default. Adding a field is one entry
//! in [`MLS_POINT_SCHEMA`].

use serde_json::Value;

use super::entity::{FieldValue, MlsPoint};
use super::raw_row::{RawRow, value_to_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text, defaults to `""`.
    Text,
    /// Latitude or longitude, defaults to the `0.0` sentinel.
    Coordinate,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub field: &'static str,
    pub sources: &'static [&'static str],
    pub kind: FieldKind,
}

const fn text(field: &'static str, sources: &'static [&'static str]) -> FieldMapping {
    FieldMapping {
        field,
        sources,
        kind: FieldKind::Text,
    }
}

const fn coordinate(field: &'static str, sources: &'static [&'static str]) -> FieldMapping {
    FieldMapping {
        field,
        sources,
        kind: FieldKind::Coordinate,
    }
}

pub const MLS_POINT_SCHEMA: &[FieldMapping] = &[
    text("mls_point_code", &["mls_point_code"]),
    text("mls_point_name", &["mls_point_name"]),
    text("district_code", &["district_code"]),
    text("district_name", &["district_name"]),
    text("mandal_code", &["mandal_code"]),
    text("mandal_name", &["mandal_name"]),
    text("village_name", &["village_name"]),
    coordinate("latitude", &["mls_point_latitude"]),
    // The source sheet misspells the column; the corrected name is a fallback.
    coordinate("longitude", &["mls_point_logitude", "mls_point_longitude"]),
    text("mls_point_address", &["mls_point_address"]),
    text(
        "mls_point_incharge_cfms",
        &["mls_point_incharge_cfms/_corporation_emp_id"],
    ),
    text("mls_point_incharge_name", &["mls_point_incharge_name"]),
    text("designation", &["designation"]),
    // aadhaar_number / deo_aadhaar_number may be crossed upstream; kept as loaded.
    text("aadhaar_number", &["aadhaar_number"]),
    text("phone_number", &["phone_number"]),
    text("deo_cfms_id", &["deo_cfms_id_/_corporation_emp_id"]),
    text("deo_name", &["deo_name"]),
    text("deo_aadhaar_number", &["aadhaarnumber"]),
    text("deo_phone_number", &["deo_phone_number"]),
    text("godown_area_sqft", &["godown_area_in_sq._ft."]),
    text("storage_capacity_mt", &["storage_capacity_in_mts."]),
    text("mls_point_owned_or_hired", &["mls_point_owned_(or)_hired_?"]),
    text("if_rented", &["if_rented,_(private_/_amc_/_other)"]),
    text(
        "weighbridge_available",
        &["weighbridge_available?_(yes_/_no)"],
    ),
    text("cc_cameras_installed", &["no._of_cc_camers_installed"]),
    text(
        "cameras_working",
        &["whether_all_cameras_are_in_working_condition?_(yes/no)"],
    ),
    text(
        "cameras_maintained_by_vendor",
        &["cc_cameras_are_maintained_by_vendor"],
    ),
    text("num_hamalies_working", &["number_of_hamalies_working"]),
    text(
        "num_stage2_vehicles",
        &["number_of_stage_-_ii_vehicles_registered"],
    ),
    text(
        "all_vehicles_gps",
        &["all_vehicles_having_gps_devices?_(yes/no)"],
    ),
    text(
        "compound_wall_available",
        &["compound_wall_available?_(yes/no)"],
    ),
    text(
        "distance_from_main_road_km",
        &["distance_from_main_road_to_reach_mls?_(in_kms)"],
    ),
    text(
        "internal_roads_available",
        &["internal_roads_available?_(yes/no)"],
    ),
    text(
        "solar_system_available",
        &["solar_system_available?_(yes/no)"],
    ),
    text(
        "can_be_green_godown",
        &["whether_mls_can_be_converted_to_green_godown_with_solar?_(yes/no)"],
    ),
    text(
        "last_minor_repairs",
        &["when_was_last_time_minor_repairs_done?"],
    ),
    text("last_paintings", &["when_was_last_time_paintings_done?"]),
];

/// Maps one raw row onto the fixed record shape.
///
/// Never fails: absent, null, or unparseable inputs fall back to the field's
/// default.
pub fn normalize(row: &RawRow) -> MlsPoint {
    let values = MLS_POINT_SCHEMA
        .iter()
        .map(|mapping| resolve(row, mapping))
        .collect();
    MlsPoint::from_values(values)
}

fn resolve(row: &RawRow, mapping: &FieldMapping) -> FieldValue {
    let raw = mapping.sources.iter().find_map(|source| row.value(source));
    match (mapping.kind, raw) {
        (FieldKind::Text, Some(value)) => FieldValue::Text(value_to_text(value)),
        (FieldKind::Coordinate, Some(value)) => FieldValue::Coordinate(parse_coordinate(value)),
        (kind, None) => FieldValue::default_for(kind),
    }
}

fn parse_coordinate(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}
