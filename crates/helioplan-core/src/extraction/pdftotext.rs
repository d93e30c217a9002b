use crate::error::HelioplanError;
use crate::extraction::ReportSource;
use std::io::Write;
use std::process::Command;

/// Report text backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` to preserve whitespace alignment of the
/// report's tables.
pub struct PdftotextSource;

impl PdftotextSource {
    pub fn new() -> Self {
        PdftotextSource
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSource for PdftotextSource {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, HelioplanError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| HelioplanError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(bytes)
            .map_err(|e| HelioplanError::Extraction(e.to_string()))?;

        // Run pdftotext -layout for table-friendly text extraction.
        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    HelioplanError::PdftotextNotFound
                } else {
                    HelioplanError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(HelioplanError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);

        // pdftotext separates pages with form feed \x0c; the parser wants
        // one newline-joined blob.
        let joined = text
            .split('\x0c')
            .map(|page| page.trim_end())
            .filter(|page| !page.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        Ok(joined)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
