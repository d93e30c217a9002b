pub mod components;
pub mod losses;
pub mod summary;

pub use components::parse_components;
pub use losses::parse_losses;
pub use summary::parse_summary;

use crate::error::HelioplanError;
use crate::model::ExtractionResult;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a report's flattened text into an ExtractionResult.
///
/// Missing sections are tolerated: a report without project info, losses
/// or some component class yields absent fields or empty lists, never an
/// error. Only a blob with no text content at all is rejected.
pub fn parse_report(text: &str) -> Result<ExtractionResult, HelioplanError> {
    if text.trim().is_empty() {
        return Err(HelioplanError::ParseError(
            "no text content found in report".into(),
        ));
    }

    Ok(ExtractionResult {
        summary: parse_summary(text),
        components: parse_components(text),
        losses: parse_losses(text),
    })
}

/// Collapse whitespace runs (including newlines) to single spaces and trim
/// the ends. Captures from `pdftotext -layout` output carry column padding
/// and line wraps that mean nothing.
pub(crate) fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a numeric capture, tolerating thousands separators ("3,560.9").
///
/// Returns None on anything Decimal cannot represent; callers drop the
/// surrounding match rather than failing the whole extraction.
pub(crate) fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s.replace(',', "").trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_normalize_ws_collapses_newlines() {
        assert_eq!(normalize_ws("TMY, 10km Grid,\n   meteonorm"), "TMY, 10km Grid, meteonorm");
    }

    #[test]
    fn test_parse_decimal_plain() {
        assert_eq!(parse_decimal("150.0"), Some(dec!(150.0)));
    }

    #[test]
    fn test_parse_decimal_thousands_separator() {
        assert_eq!(parse_decimal("3,560.9"), Some(dec!(3560.9)));
    }

    #[test]
    fn test_parse_decimal_garbage() {
        assert_eq!(parse_decimal("1.2.3"), None);
    }

    #[test]
    fn test_parse_report_empty_is_error() {
        assert!(matches!(
            parse_report("   \n  "),
            Err(HelioplanError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_report_assembles_all_sections() {
        let text = "\
Project Name Metco Rooftop
Annual Production 243.5 MWh
Inverters CPS-SCA50KTL-DO/US-480 3 (150.0 kW)
DC Loss 1.5%
";
        let result = parse_report(text).unwrap();
        assert_eq!(result.summary.project_name.as_deref(), Some("Metco Rooftop"));
        assert_eq!(result.components.len(), 1);
        assert_eq!(result.losses.len(), 1);
    }
}
