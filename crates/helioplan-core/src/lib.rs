pub mod allocation;
pub mod design;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;

use allocation::{AllocationMatrix, AllocationRequest};
use design::DesignParams;
use error::HelioplanError;
use extraction::ReportSource;
use model::ExtractionResult;
use serde::{Deserialize, Serialize};

/// Options for the one-call planning pipeline.
#[derive(Debug, Clone, Copy)]
pub struct PlanOptions {
    /// MPPT channels per inverter. Design reports do not state this, so
    /// the caller supplies it.
    pub mppt_per_inverter: u32,
    /// Strings actually wired, when the as-built count differs from the
    /// report's string record.
    pub strings_used: Option<u32>,
    /// Populate exactly this many columns instead of the bound derived
    /// from the string count.
    pub strings_to_fill: Option<u32>,
}

/// Everything produced by one planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPlan {
    pub extraction: ExtractionResult,
    pub params: DesignParams,
    pub request: AllocationRequest,
    pub matrix: AllocationMatrix,
}

/// Main extraction entry point: document bytes to structured records.
pub fn extract_document(
    bytes: &[u8],
    source: &dyn ReportSource,
) -> Result<ExtractionResult, HelioplanError> {
    let text = source.extract_text(bytes)?;
    parsing::parse_report(&text)
}

/// Main planning entry point: extract a report, derive its design
/// parameters and build the stringing table in one call.
pub fn plan_document(
    bytes: &[u8],
    source: &dyn ReportSource,
    options: &PlanOptions,
) -> Result<DocumentPlan, HelioplanError> {
    let extraction = extract_document(bytes, source)?;
    plan_extraction(&extraction, options)
}

/// Build a plan from an already-extracted report (for callers that keep
/// extraction results around and plan against them repeatedly).
pub fn plan_extraction(
    extraction: &ExtractionResult,
    options: &PlanOptions,
) -> Result<DocumentPlan, HelioplanError> {
    let params = DesignParams::from_extraction(extraction)?;
    let mut request = params.allocation_request(options.mppt_per_inverter, options.strings_used);
    if let Some(strings_to_fill) = options.strings_to_fill {
        request.strings_to_fill = strings_to_fill;
    }
    let matrix = allocation::allocate(&request)?;

    Ok(DocumentPlan {
        extraction: extraction.clone(),
        params,
        request,
        matrix,
    })
}
