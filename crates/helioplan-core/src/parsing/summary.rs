use crate::model::ProjectSummary;
use crate::parsing::{normalize_ws, parse_decimal};
use regex::Regex;
use std::sync::LazyLock;

static PROJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Project Name\s+(.*)").expect("project name pattern"));

// Street, city and zip sit on separate report lines, terminated by the
// country line.
static PROJECT_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)Project\s+Address\s+(.*?)\s+USA").expect("address pattern"));

static ANNUAL_PRODUCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Annual\s+Production\s+([\d.,]+)\s+MWh").expect("production pattern"));

static PERFORMANCE_RATIO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Performance\s+Ratio\s+([\d.]+)%").expect("ratio pattern"));

static WEATHER_DATASET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Weather Dataset\s+(.+?)\s+Simulator Version").expect("weather pattern")
});

/// Extract project-level fields from report text.
///
/// Each field is located independently by its own anchored pattern; a field
/// whose pattern finds nothing is left absent.
pub fn parse_summary(text: &str) -> ProjectSummary {
    let mut summary = ProjectSummary::default();

    if let Some(cap) = PROJECT_NAME.captures(text) {
        let name = normalize_ws(&cap[1]);
        if !name.is_empty() {
            summary.project_name = Some(name);
        }
    }

    if let Some(cap) = PROJECT_ADDRESS.captures(text) {
        let address = join_lines(&cap[1], ", ");
        if !address.is_empty() {
            summary.project_address = Some(address);
        }
    }

    if let Some(cap) = ANNUAL_PRODUCTION.captures(text) {
        summary.annual_production_mwh = parse_decimal(&cap[1]);
    }

    if let Some(cap) = PERFORMANCE_RATIO.captures(text) {
        summary.performance_ratio_percent = parse_decimal(&cap[1]);
    }

    if let Some(cap) = WEATHER_DATASET.captures(text) {
        let dataset = join_lines(&cap[1], " ");
        if !dataset.is_empty() {
            summary.weather_dataset = Some(dataset);
        }
    }

    summary
}

/// Join a multi-line capture into one normalized line.
fn join_lines(capture: &str, separator: &str) -> String {
    capture
        .lines()
        .map(normalize_ws)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const HEADER: &str = "\
Project Name       Metco Rooftop 181kW
Project Address    181 Kelsey Ln
                   Tampa, FL 33619
                   USA
Annual Production  243.5 MWh
Performance Ratio  83.1%
Weather Dataset    TMY, 10km Grid,
                   meteonorm
Simulator Version  8b2ea15c94
";

    #[test]
    fn test_full_header() {
        let s = parse_summary(HEADER);
        assert_eq!(s.project_name.as_deref(), Some("Metco Rooftop 181kW"));
        assert_eq!(s.project_address.as_deref(), Some("181 Kelsey Ln, Tampa, FL 33619"));
        assert_eq!(s.annual_production_mwh, Some(dec!(243.5)));
        assert_eq!(s.performance_ratio_percent, Some(dec!(83.1)));
        assert_eq!(s.weather_dataset.as_deref(), Some("TMY, 10km Grid, meteonorm"));
    }

    #[test]
    fn test_missing_weather_dataset_is_absent() {
        let s = parse_summary("Project Name Test Site\nAnnual Production 10.0 MWh\n");
        assert_eq!(s.weather_dataset, None);
    }

    #[test]
    fn test_no_fields_at_all() {
        let s = parse_summary("completely unrelated text");
        assert_eq!(s, ProjectSummary::default());
    }

    #[test]
    fn test_address_lines_joined_with_comma() {
        let s = parse_summary("Project Address 1 Main St\nSpringfield, IL 62704\nUSA\n");
        assert_eq!(s.project_address.as_deref(), Some("1 Main St, Springfield, IL 62704"));
    }

    #[test]
    fn test_production_with_thousands_separator() {
        let s = parse_summary("Annual Production 1,243.5 MWh\n");
        assert_eq!(s.annual_production_mwh, Some(dec!(1243.5)));
    }
}
