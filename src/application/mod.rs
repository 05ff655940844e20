pub mod download_report;
