use crate::allocation::AllocationRequest;
use crate::error::HelioplanError;
use crate::model::{ComponentClass, ComponentRecord, ExtractionResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// The schedule sheet has room for seven string columns per inverter; a
// derived fill count is bounded to that window.
const MAX_SCHEDULE_STRINGS: u32 = 7;

/// Electrical-design parameters derived from a report's primary component
/// records (the first record of each class in document order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignParams {
    pub inverter_count: u32,
    pub inverter_model: String,
    /// Fleet AC capacity: the inverter record's kW rating.
    pub inverter_kw: Decimal,
    pub module_count: u32,
    pub module_model: String,
    /// Array DC capacity: the module record's kW rating.
    pub module_kw: Decimal,
    pub string_count: u32,
    /// string_count / inverter_count, truncating.
    pub strings_per_inverter: u32,
}

impl DesignParams {
    /// Derive parameters from the primary record of each required class.
    ///
    /// A stringing plan needs all three classes; a missing class or a zero
    /// count is an error here, unlike in extraction where absence is fine.
    pub fn from_extraction(extraction: &ExtractionResult) -> Result<DesignParams, HelioplanError> {
        let inverter = usable(extraction, ComponentClass::Inverter)?;
        let module = usable(extraction, ComponentClass::Module)?;
        let string = usable(extraction, ComponentClass::String)?;

        Ok(DesignParams {
            inverter_count: inverter.count,
            inverter_model: inverter.description.clone(),
            inverter_kw: inverter.value,
            module_count: module.count,
            module_model: module.description.clone(),
            module_kw: module.value,
            string_count: string.count,
            strings_per_inverter: string.count / inverter.count,
        })
    }

    /// DC system size in kW (module side).
    pub fn dc_system_kw(&self) -> Decimal {
        self.module_kw
    }

    /// AC system size in kW (inverter side).
    pub fn ac_system_kw(&self) -> Decimal {
        self.inverter_kw
    }

    /// String columns to populate per inverter, bounded to the window the
    /// schedule sheet has room for.
    ///
    /// `strings_used` (strings actually wired, when the as-built differs
    /// from the report) replaces the report's string count if given.
    pub fn suggested_strings_to_fill(&self, strings_used: Option<u32>) -> u32 {
        let per_inverter = match strings_used {
            Some(used) => used / self.inverter_count.max(1),
            None => self.strings_per_inverter,
        };
        per_inverter.clamp(1, MAX_SCHEDULE_STRINGS)
    }

    /// Assemble an allocation request for the given MPPT channel count.
    /// Reports do not state MPPT counts, so the caller supplies one.
    pub fn allocation_request(
        &self,
        mppt_per_inverter: u32,
        strings_used: Option<u32>,
    ) -> AllocationRequest {
        AllocationRequest {
            num_panels: self.module_count,
            num_inverters: self.inverter_count,
            mppt_per_inverter,
            strings_to_fill: self.suggested_strings_to_fill(strings_used),
        }
    }
}

/// Primary record of a class, required to exist with a nonzero count.
fn usable(
    extraction: &ExtractionResult,
    class: ComponentClass,
) -> Result<&ComponentRecord, HelioplanError> {
    match extraction.primary(class) {
        Some(record) if record.count > 0 => Ok(record),
        _ => Err(HelioplanError::MissingComponent(class)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProjectSummary, Unit};
    use rust_decimal_macros::dec;

    fn record(class: ComponentClass, description: &str, count: u32, value: Decimal) -> ComponentRecord {
        ComponentRecord {
            class,
            description: description.to_string(),
            count,
            value,
            unit: Unit::Kilowatts,
        }
    }

    fn extraction(components: Vec<ComponentRecord>) -> ExtractionResult {
        ExtractionResult {
            summary: ProjectSummary::default(),
            components,
            losses: vec![],
        }
    }

    #[test]
    fn test_from_extraction() {
        let e = extraction(vec![
            record(ComponentClass::Inverter, "CPS-SCA50KTL-DO/US-480", 3, dec!(150.0)),
            record(ComponentClass::String, "10 AWG (Copper)", 35, dec!(3560.9)),
            record(ComponentClass::Module, "SPISLE575-144TGG", 315, dec!(181.1)),
        ]);
        let p = DesignParams::from_extraction(&e).unwrap();
        assert_eq!(p.inverter_count, 3);
        assert_eq!(p.module_count, 315);
        assert_eq!(p.string_count, 35);
        assert_eq!(p.strings_per_inverter, 11);
        assert_eq!(p.dc_system_kw(), dec!(181.1));
        assert_eq!(p.ac_system_kw(), dec!(150.0));
    }

    #[test]
    fn test_first_record_of_class_wins() {
        let e = extraction(vec![
            record(ComponentClass::Inverter, "CPS-SCA50KTL-DO/US-480", 3, dec!(150.0)),
            record(ComponentClass::Inverter, "CPS-SCA60KTL-DO/US-480", 1, dec!(60.0)),
            record(ComponentClass::String, "10 AWG", 30, dec!(3000)),
            record(ComponentClass::Module, "SPISLE575", 300, dec!(172.5)),
        ]);
        let p = DesignParams::from_extraction(&e).unwrap();
        assert_eq!(p.inverter_model, "CPS-SCA50KTL-DO/US-480");
        assert_eq!(p.inverter_count, 3);
    }

    #[test]
    fn test_missing_class_is_an_error() {
        let e = extraction(vec![
            record(ComponentClass::Inverter, "CPS", 3, dec!(150.0)),
            record(ComponentClass::Module, "SPISLE575", 300, dec!(172.5)),
        ]);
        let err = DesignParams::from_extraction(&e).unwrap_err();
        assert!(matches!(
            err,
            HelioplanError::MissingComponent(ComponentClass::String)
        ));
    }

    #[test]
    fn test_zero_count_is_an_error() {
        let e = extraction(vec![
            record(ComponentClass::Inverter, "CPS", 0, dec!(150.0)),
            record(ComponentClass::String, "10 AWG", 30, dec!(3000)),
            record(ComponentClass::Module, "SPISLE575", 300, dec!(172.5)),
        ]);
        assert!(matches!(
            DesignParams::from_extraction(&e).unwrap_err(),
            HelioplanError::MissingComponent(ComponentClass::Inverter)
        ));
    }

    #[test]
    fn test_suggested_strings_bounded() {
        let e = extraction(vec![
            record(ComponentClass::Inverter, "CPS", 2, dec!(100.0)),
            record(ComponentClass::String, "10 AWG", 30, dec!(3000)),
            record(ComponentClass::Module, "SPISLE575", 300, dec!(172.5)),
        ]);
        let p = DesignParams::from_extraction(&e).unwrap();
        // 30 strings over 2 inverters = 15, capped at 7
        assert_eq!(p.suggested_strings_to_fill(None), 7);
        // 1 string over 2 inverters truncates to 0, floored at 1
        assert_eq!(p.suggested_strings_to_fill(Some(1)), 1);
        assert_eq!(p.suggested_strings_to_fill(Some(8)), 4);
    }

    #[test]
    fn test_allocation_request_assembly() {
        let e = extraction(vec![
            record(ComponentClass::Inverter, "CPS", 2, dec!(100.0)),
            record(ComponentClass::String, "10 AWG", 4, dec!(400)),
            record(ComponentClass::Module, "SPISLE575", 100, dec!(57.5)),
        ]);
        let p = DesignParams::from_extraction(&e).unwrap();
        let request = p.allocation_request(2, None);
        assert_eq!(request.num_panels, 100);
        assert_eq!(request.num_inverters, 2);
        assert_eq!(request.mppt_per_inverter, 2);
        assert_eq!(request.strings_to_fill, 2);
    }
}
