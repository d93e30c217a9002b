use crate::model::ComponentClass;

#[derive(Debug, thiserror::Error)]
pub enum HelioplanError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to parse report: {0}")]
    ParseError(String),

    #[error("report contains no usable {0} entry")]
    MissingComponent(ComponentClass),

    #[error("invalid allocation request: {0}")]
    InvalidRequest(String),

    #[error("allocation cannot converge: {0}")]
    DegenerateAllocation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
