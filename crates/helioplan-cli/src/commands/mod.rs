use helioplan_core::extraction::{PdftotextSource, PlainTextSource, ReportSource};
use std::path::Path;

pub mod extract;
pub mod plan;

/// Pick a text backend from the input extension: `.pdf` goes through
/// pdftotext, anything else is read as plain text.
pub(crate) fn source_for(path: &Path) -> Box<dyn ReportSource> {
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if is_pdf {
        Box::new(PdftotextSource::new())
    } else {
        Box::new(PlainTextSource::new())
    }
}
