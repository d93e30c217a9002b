use crate::error::HelioplanError;
use crate::extraction::ReportSource;

/// Report text backend for inputs that are already plain text.
///
/// Decoding is strict: bytes that are not valid UTF-8 are rejected rather
/// than replaced, so a binary file passed by mistake fails loudly instead
/// of producing an empty extraction.
pub struct PlainTextSource;

impl PlainTextSource {
    pub fn new() -> Self {
        PlainTextSource
    }
}

impl Default for PlainTextSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSource for PlainTextSource {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, HelioplanError> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_string()),
            Err(e) => Err(HelioplanError::ParseError(format!(
                "input is not valid UTF-8 text: {}",
                e
            ))),
        }
    }

    fn backend_name(&self) -> &str {
        "plain-text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_passes_through() {
        let source = PlainTextSource::new();
        let text = source.extract_text("Project Name Test\n".as_bytes()).unwrap();
        assert_eq!(text, "Project Name Test\n");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let source = PlainTextSource::new();
        let err = source.extract_text(&[0x50, 0x44, 0x46, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, HelioplanError::ParseError(_)));
    }
}
