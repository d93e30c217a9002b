use crate::model::LossEntry;
use crate::parsing::{normalize_ws, parse_decimal};
use regex::Regex;
use std::sync::LazyLock;

static LOSS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z\s]+)\s+([\d.]+)%").expect("loss pattern"));

// Percentages whose label mentions neither keyword are unrelated figures
// (the performance ratio, for one) and are dropped. Losses filed under
// other vocabulary are knowingly missed.
const LOSS_KEYWORDS: [&str; 2] = ["loss", "degradation"];

/// Collect system-loss entries in document order.
///
/// Duplicate labels are kept as found; the loss table is reported verbatim,
/// not aggregated.
pub fn parse_losses(text: &str) -> Vec<LossEntry> {
    LOSS.captures_iter(text)
        .filter_map(|cap| {
            let label = normalize_ws(&cap[1]);
            let lower = label.to_lowercase();
            if !LOSS_KEYWORDS.iter().any(|k| lower.contains(k)) {
                return None;
            }
            Some(LossEntry {
                loss_type: label,
                loss_percent: parse_decimal(&cap[2])?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loss_rows_collected_in_order() {
        let text = "\
Soiling Loss 2.0%
Wiring Loss 0.4%
Module Degradation 0.5%
";
        let losses = parse_losses(text);
        assert_eq!(losses.len(), 3);
        assert_eq!(losses[0].loss_type, "Soiling Loss");
        assert_eq!(losses[0].loss_percent, dec!(2.0));
        assert_eq!(losses[2].loss_type, "Module Degradation");
    }

    #[test]
    fn test_unrelated_percentages_filtered() {
        let text = "Performance Ratio 83.1%\nSoiling Loss 2.0%\n";
        let losses = parse_losses(text);
        assert_eq!(losses.len(), 1);
        assert_eq!(losses[0].loss_type, "Soiling Loss");
    }

    #[test]
    fn test_duplicate_labels_not_deduplicated() {
        let text = "Wiring Loss 0.4%\nWiring Loss 0.3%\n";
        let losses = parse_losses(text);
        assert_eq!(losses.len(), 2);
        assert_eq!(losses[0].loss_percent, dec!(0.4));
        assert_eq!(losses[1].loss_percent, dec!(0.3));
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let losses = parse_losses("SOILING LOSS 1.5%");
        assert_eq!(losses.len(), 1);
    }

    #[test]
    fn test_no_losses() {
        assert!(parse_losses("Annual Production 243.5 MWh").is_empty());
    }
}
