use mls_api::domain::mls_point::{
    entity::FieldValue,
    query,
    raw_row::{MlsTable, RawRow},
    schema::{MLS_POINT_SCHEMA, normalize},
};
use serde_json::Value;

fn point_row(code: &str, district: &str, mandal: &str) -> RawRow {
    RawRow::new()
        .with("MLS Point Code", code)
        .with("MLS Point Name", format!("{} Point", code))
        .with("District Code", district)
        .with("District Name", format!("District {}", district))
        .with("Mandal Code", mandal)
        .with("Mandal Name", format!("Mandal {}", mandal))
        .with("MLS Point Latitude", "16.5")
        .with("MLS Point Logitude", "80.6")
}

#[test]
fn normalized_record_always_has_every_field() {
    let point = normalize(&RawRow::new().with("Village Name", "Kothapalem"));

    assert_eq!(point.fields().count(), MLS_POINT_SCHEMA.len());
    assert_eq!(
        point.get("village_name"),
        Some(&FieldValue::Text("Kothapalem".into()))
    );
    assert_eq!(point.latitude(), 0.0);
    assert!(point.has_sentinel_coordinates());
}

#[test]
fn coordinates_parse_from_text_and_survive_garbage() {
    let point = normalize(&point_row("AB12", "D1", "M1"));
    assert_eq!(point.latitude(), 16.5);
    assert_eq!(point.longitude(), 80.6);

    let garbage = normalize(
        &RawRow::new()
            .with("MLS Point Latitude", "north-ish")
            .with("MLS Point Logitude", Value::Null),
    );
    assert_eq!(garbage.latitude(), 0.0);
    assert_eq!(garbage.longitude(), 0.0);
}

#[test]
fn serialized_keys_follow_schema_order() {
    let point = normalize(&point_row("AB12", "D1", "M1"));
    let json = serde_json::to_string(&point).unwrap();

    let mut last = 0;
    for mapping in MLS_POINT_SCHEMA {
        let key = format!("\"{}\":", mapping.field);
        let pos = json.find(&key).unwrap();
        assert!(pos >= last, "{} out of order", mapping.field);
        last = pos;
    }
}

#[test]
fn lookups_over_a_shared_table() {
    let table = MlsTable::new(vec![
        point_row("AB12", "D1", "M1"),
        point_row("AB13", "D1", "M2"),
        point_row("CD01", "D2", "M3"),
    ]);

    let districts = query::list_districts(&table);
    assert_eq!(districts.len(), 2);
    assert_eq!(districts[0].name, "District D1");

    let mandals = query::list_mandals(&table, "D1");
    let mandal_codes: Vec<&str> = mandals.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(mandal_codes, vec!["M1", "M2"]);

    let points = query::list_points(&table, "D1", "M2");
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].code(), "AB13");

    assert_eq!(
        query::find_by_code(&table, " cd01 ").map(|p| p.name().to_string()),
        Some("CD01 Point".to_string())
    );
    assert!(query::find_by_code(&table, "XX00").is_none());

    assert_eq!(query::list_codes(&table), vec!["AB12", "AB13", "CD01"]);
}
