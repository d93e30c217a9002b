use helioplan_core::allocation::{allocate, AllocationRequest};
use helioplan_core::error::HelioplanError;
use helioplan_core::model::ExtractionResult;
use helioplan_core::PlanOptions;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: Option<PathBuf>,
    options: PlanOptions,
    panels: Option<u32>,
    inverters: Option<u32>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), HelioplanError> {
    match input_file {
        Some(input) => run_from_report(input, options, output_format, output_file),
        None => run_from_counts(options, panels, inverters, output_format, output_file),
    }
}

/// Plan against a report: a PDF or text file is extracted first, a JSON
/// file is a saved extraction being re-planned.
fn run_from_report(
    input_file: PathBuf,
    options: PlanOptions,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), HelioplanError> {
    // Determine input type by extension
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let plan = if is_json {
        let json_bytes = std::fs::read(&input_file)?;
        let extraction: ExtractionResult = serde_json::from_slice(&json_bytes)?;
        helioplan_core::plan_extraction(&extraction, &options)?
    } else {
        let bytes = std::fs::read(&input_file)?;
        let source = super::source_for(&input_file);
        helioplan_core::plan_document(&bytes, source.as_ref(), &options)?
    };

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&plan)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Planned {} panel(s) across {} inverter(s), written to {}",
                plan.request.num_panels,
                plan.request.num_inverters,
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&plan)?,
            _ => println!("{}", output::table::format_plan(&plan)),
        },
    }

    Ok(())
}

/// Plan from flags alone, with no report in the picture.
fn run_from_counts(
    options: PlanOptions,
    panels: Option<u32>,
    inverters: Option<u32>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), HelioplanError> {
    let request = match (panels, inverters, options.strings_to_fill) {
        (Some(num_panels), Some(num_inverters), Some(strings_to_fill)) => AllocationRequest {
            num_panels,
            num_inverters,
            mppt_per_inverter: options.mppt_per_inverter,
            strings_to_fill,
        },
        _ => {
            return Err(HelioplanError::InvalidRequest(
                "planning without an input file requires --panels, --inverters and --strings-to-fill"
                    .into(),
            ))
        }
    };

    let matrix = allocate(&request)?;

    match output_file {
        Some(path) => {
            let json = serde_json::to_string_pretty(&matrix)?;
            std::fs::write(&path, json)?;
            eprintln!("Plan written to {}", path.display());
        }
        None => match output_format {
            "json" => println!("{}", serde_json::to_string_pretty(&matrix)?),
            _ => println!("{}", output::table::format_matrix(&request, &matrix)),
        },
    }

    Ok(())
}
