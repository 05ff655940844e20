use chrono::Utc;

/// Current UTC time as `YYYY-MM-DD HH:MM:SS`, the format clients display.
pub fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
