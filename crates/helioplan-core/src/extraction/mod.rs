pub mod pdftotext;
pub mod plain;

pub use pdftotext::PdftotextSource;
pub use plain::PlainTextSource;

use crate::error::HelioplanError;

/// Trait for report text acquisition backends.
///
/// The parser works on a single flat text blob; a backend's job is to turn
/// raw document bytes into that blob, with pages joined by newlines.
pub trait ReportSource: Send + Sync {
    /// Extract the full text content from raw document bytes.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, HelioplanError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
