use helioplan_core::allocation::{AllocationMatrix, AllocationRequest, MAX_STRINGS_PER_MPPT};
use helioplan_core::model::ExtractionResult;
use helioplan_core::DocumentPlan;

// Fits the widest cell header, "String 5".
const CELL_WIDTH: usize = 8;

pub fn format_extraction(extraction: &ExtractionResult) -> String {
    let mut out = String::new();

    let summary = &extraction.summary;
    if let Some(ref name) = summary.project_name {
        out.push_str(&format!("{:<20}{}\n", "Project:", name));
    }
    if let Some(ref address) = summary.project_address {
        out.push_str(&format!("{:<20}{}\n", "Address:", address));
    }
    if let Some(ref production) = summary.annual_production_mwh {
        out.push_str(&format!("{:<20}{} MWh\n", "Annual production:", production));
    }
    if let Some(ref ratio) = summary.performance_ratio_percent {
        out.push_str(&format!("{:<20}{}%\n", "Performance ratio:", ratio));
    }
    if let Some(ref dataset) = summary.weather_dataset {
        out.push_str(&format!("{:<20}{}\n", "Weather dataset:", dataset));
    }
    if !out.is_empty() {
        out.push('\n');
    }

    out.push_str("Components:\n");
    if extraction.components.is_empty() {
        out.push_str("  (none found)\n");
    } else {
        let max_desc = extraction
            .components
            .iter()
            .map(|c| c.description.len())
            .max()
            .unwrap_or(10);

        for c in &extraction.components {
            out.push_str(&format!(
                "  {:<8}  {:<max_desc$}  {:>5}  {} {}\n",
                c.class.to_string(),
                c.description,
                c.count,
                c.value,
                c.unit
            ));
        }
    }

    out.push_str("\nLosses:\n");
    if extraction.losses.is_empty() {
        out.push_str("  (none found)\n");
    } else {
        let max_name = extraction
            .losses
            .iter()
            .map(|l| l.loss_type.len())
            .max()
            .unwrap_or(10);

        for l in &extraction.losses {
            out.push_str(&format!(
                "  {:<max_name$}  {}%\n",
                l.loss_type, l.loss_percent
            ));
        }
    }

    out.trim_end().to_string()
}

pub fn format_plan(plan: &DocumentPlan) -> String {
    let params = &plan.params;
    let mut out = String::new();

    if let Some(ref name) = plan.extraction.summary.project_name {
        out.push_str(&format!("Project: {name}\n\n"));
    }
    out.push_str(&format!(
        "Inverters:  {} x {} ({} kW AC)\n",
        params.inverter_count,
        params.inverter_model,
        params.ac_system_kw()
    ));
    out.push_str(&format!(
        "Modules:    {} x {} ({} kW DC)\n",
        params.module_count,
        params.module_model,
        params.dc_system_kw()
    ));
    out.push_str(&format!(
        "Strings:    {} total, {} per inverter\n\n",
        params.string_count, params.strings_per_inverter
    ));
    out.push_str(&format_matrix(&plan.request, &plan.matrix));

    out
}

/// Render the stringing table: one row per inverter, slot columns grouped
/// five per MPPT channel, "-" for slots the engine left unused.
pub fn format_matrix(request: &AllocationRequest, matrix: &AllocationMatrix) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Allocation for {} panel(s) across {} inverter(s), {} MPPT channel(s) each\n",
        request.num_panels, request.num_inverters, request.mppt_per_inverter
    ));
    out.push_str(&format!(
        "Base {} panel(s) per string, {} column(s) populated\n\n",
        matrix.panels_per_string(),
        matrix.populated_columns()
    ));

    let label_width = format!("INV {}", matrix.inverter_count()).len();
    // Each group block is five cells plus the separators between them.
    let group_span = MAX_STRINGS_PER_MPPT * CELL_WIDTH + (MAX_STRINGS_PER_MPPT - 1) * 2;

    let mut line = " ".repeat(label_width);
    for group in 0..matrix.mppt_per_inverter() as usize {
        line.push_str("  ");
        line.push_str(&format!("{:<group_span$}", format!("MPPT {}", group + 1)));
    }
    out.push_str(line.trim_end());
    out.push('\n');

    let mut line = " ".repeat(label_width);
    for slot in 0..matrix.slot_count() {
        line.push_str("  ");
        line.push_str(&format!(
            "{:>CELL_WIDTH$}",
            format!("String {}", AllocationMatrix::slot_in_group(slot) + 1)
        ));
    }
    out.push_str(&line);
    out.push('\n');

    for (i, row) in matrix.rows().iter().enumerate() {
        let mut line = format!("{:<label_width$}", format!("INV {}", i + 1));
        for state in row {
            line.push_str("  ");
            line.push_str(&format!("{:>CELL_WIDTH$}", state.to_string()));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str(&format!("\nTotal: {} panel(s)", matrix.total_panels()));

    out
}
