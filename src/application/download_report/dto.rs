use bytes::Bytes;

/// A rendered report ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
}
