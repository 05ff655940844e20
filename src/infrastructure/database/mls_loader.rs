use crate::domain::mls_point::raw_row::{MlsTable, RawRow};
use serde_json::Value;
use sqlx::PgPool;
use tracing::{error, info, instrument, warn};

/// Reads the whole source table once.
///
/// Any failure is logged and degrades to an empty table so the server can
/// still start and answer with empty results.
#[instrument(skip(pool))]
pub async fn load_mls_table(pool: &PgPool, table: &str) -> MlsTable {
    match fetch_rows(pool, table).await {
        Ok(rows) => {
            info!(records = rows.len(), "Loaded MLS points from database");
            MlsTable::new(rows)
        }
        Err(e) => {
            error!(error = %e, "Failed to load MLS points, serving an empty table");
            MlsTable::empty()
        }
    }
}

async fn fetch_rows(pool: &PgPool, table: &str) -> Result<Vec<RawRow>, sqlx::Error> {
    let sql = format!(
        "SELECT to_jsonb(t) AS record FROM {} t",
        quote_table_name(table)
    );
    let records: Vec<(Value,)> = sqlx::query_as(&sql).fetch_all(pool).await?;

    let mut rows = Vec::with_capacity(records.len());
    for (record,) in records {
        match record {
            Value::Object(object) => rows.push(RawRow::from_json_object(object)),
            other => warn!(kind = ?other, "Skipping non-object row"),
        }
    }
    Ok(rows)
}

/// Quotes each dot-separated part of a possibly schema-qualified name.
pub fn quote_table_name(name: &str) -> String {
    name.split('.')
        .map(|part| format!("\"{}\"", part.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(".")
}
