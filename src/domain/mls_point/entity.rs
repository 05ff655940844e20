use serde::{Serialize, Serializer, ser::SerializeMap};
use std::fmt;
use ts_rs::TS;

use super::schema::{FieldKind, MLS_POINT_SCHEMA};

/// One value of a normalized record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Coordinate(f64),
}

impl FieldValue {
    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => Self::Text(String::new()),
            FieldKind::Coordinate => Self::Coordinate(0.0),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Coordinate(_) => None,
        }
    }

    pub fn as_coordinate(&self) -> Option<f64> {
        match self {
            Self::Coordinate(v) => Some(*v),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            // Whole numbers keep one decimal so 0.0 does not read as a count.
            Self::Coordinate(v) if v.fract() == 0.0 => write!(f, "{:.1}", v),
            Self::Coordinate(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Coordinate(v) => serializer.serialize_f64(*v),
        }
    }
}

/// A facility record reshaped into the fixed client-facing field set.
///
/// Values are stored in [`MLS_POINT_SCHEMA`] order, so every record carries
/// every field. Construct one with [`super::schema::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct MlsPoint {
    values: Vec<FieldValue>,
}

impl MlsPoint {
    pub(super) fn from_values(values: Vec<FieldValue>) -> Self {
        debug_assert_eq!(values.len(), MLS_POINT_SCHEMA.len());
        Self { values }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        MLS_POINT_SCHEMA
            .iter()
            .position(|m| m.field == field)
            .and_then(|idx| self.values.get(idx))
    }

    /// Field name and value pairs in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        MLS_POINT_SCHEMA.iter().map(|m| m.field).zip(self.values.iter())
    }

    fn text(&self, field: &str) -> &str {
        self.get(field).and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn code(&self) -> &str {
        self.text("mls_point_code")
    }

    pub fn name(&self) -> &str {
        self.text("mls_point_name")
    }

    pub fn district_code(&self) -> &str {
        self.text("district_code")
    }

    pub fn mandal_code(&self) -> &str {
        self.text("mandal_code")
    }

    pub fn latitude(&self) -> f64 {
        self.get("latitude")
            .and_then(FieldValue::as_coordinate)
            .unwrap_or(0.0)
    }

    pub fn longitude(&self) -> f64 {
        self.get("longitude")
            .and_then(FieldValue::as_coordinate)
            .unwrap_or(0.0)
    }

    /// True when either coordinate is the `0.0` "unknown" sentinel.
    pub fn has_sentinel_coordinates(&self) -> bool {
        self.latitude() == 0.0 || self.longitude() == 0.0
    }
}

impl Serialize for MlsPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.fields() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

/// A distinct administrative area (district or mandal).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, TS)]
#[ts(export)]
pub struct AreaSummary {
    pub code: String,
    pub name: String,
}
