use crate::model::{ComponentClass, ComponentRecord, Unit};
use crate::parsing::{normalize_ws, parse_decimal};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// One pattern covers the whole component table: a class keyword, a model
// description, a unit count, then a parenthesized rating like "(150.0 kW)"
// or "(3,560.9 ft)". Descriptions may wrap across lines.
static COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(Inverters|Strings[^\n]*?|Module)\s+([A-Za-z0-9\-/,().\s]+?)\s+(\d+)\s+\(([\d.,]+)\s*(kW|ft)\)",
    )
    .expect("component pattern")
});

/// Collect every component row in document order.
///
/// No class is assumed to appear exactly once; callers wanting "the"
/// inverter or module pick the first record of that class.
pub fn parse_components(text: &str) -> Vec<ComponentRecord> {
    COMPONENT
        .captures_iter(text)
        .filter_map(|cap| try_parse_component(&cap))
        .collect()
}

/// Build a record from one pattern match.
///
/// Returns None when the class keyword is unknown or a numeric capture
/// does not parse; only that match is dropped, not the extraction.
fn try_parse_component(cap: &Captures<'_>) -> Option<ComponentRecord> {
    let class = ComponentClass::from_str_loose(&cap[1])?;
    let count: u32 = cap[3].trim().parse().ok()?;
    let value = parse_decimal(&cap[4])?;

    Some(ComponentRecord {
        class,
        description: normalize_ws(&cap[2]),
        count,
        value,
        unit: Unit::from_str_loose(&cap[5]),
    })
}
