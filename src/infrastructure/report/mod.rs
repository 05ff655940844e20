pub mod font_metrics;
pub mod layout;
pub mod pdf_renderer;
pub mod traits;
