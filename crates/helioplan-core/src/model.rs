use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Component classes recognized in the bill-of-materials section of a
/// design report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentClass {
    Inverter,
    String,
    Module,
}

impl fmt::Display for ComponentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentClass::Inverter => write!(f, "inverter"),
            ComponentClass::String => write!(f, "string"),
            ComponentClass::Module => write!(f, "module"),
        }
    }
}

impl ComponentClass {
    /// Match a class label as it appears in report text ("Inverters",
    /// "Strings (10 AWG)", "Module", ...).
    pub fn from_str_loose(s: &str) -> Option<ComponentClass> {
        let lower = s.trim().to_lowercase();
        if lower.contains("inverter") {
            Some(ComponentClass::Inverter)
        } else if lower.contains("string") {
            Some(ComponentClass::String)
        } else if lower.contains("module") {
            Some(ComponentClass::Module)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "kW")]
    #[default]
    Kilowatts,
    #[serde(rename = "ft")]
    Feet,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Kilowatts => write!(f, "kW"),
            Unit::Feet => write!(f, "ft"),
        }
    }
}

impl Unit {
    pub fn from_str_loose(s: &str) -> Unit {
        let lower = s.trim().to_lowercase();
        if lower.contains("ft") {
            Unit::Feet
        } else {
            Unit::Kilowatts
        }
    }
}

/// One row of the report's component table: class keyword, free-text
/// model description, unit count and rated magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub class: ComponentClass,
    pub description: String,
    pub count: u32,
    pub value: Decimal,
    pub unit: Unit,
}

/// One entry of the system-loss table, in document order. The same label
/// may appear more than once; entries are kept as found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossEntry {
    pub loss_type: String,
    pub loss_percent: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project_name: Option<String>,
    pub project_address: Option<String>,
    pub annual_production_mwh: Option<Decimal>,
    pub performance_ratio_percent: Option<Decimal>,
    /// Irradiance dataset named by the simulator (e.g., "TMY, 10km Grid, meteonorm").
    pub weather_dataset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub summary: ProjectSummary,
    pub components: Vec<ComponentRecord>,
    pub losses: Vec<LossEntry>,
}

impl ExtractionResult {
    /// First record of the given class in document order, if any. Reports
    /// are assumed to describe one model per class, so the first match is
    /// the primary one.
    pub fn primary(&self, class: ComponentClass) -> Option<&ComponentRecord> {
        self.components.iter().find(|c| c.class == class)
    }
}
