use crate::allocation::matrix::AllocationMatrix;
use crate::allocation::{MAX_PANELS_PER_STRING, MAX_STRINGS_PER_MPPT, MIN_PANELS_PER_STRING};
use crate::error::HelioplanError;
use serde::{Deserialize, Serialize};

/// Inputs for one allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Total panels the matrix must account for, exactly.
    pub num_panels: u32,
    /// Inverter rows in the table.
    pub num_inverters: u32,
    /// MPPT channels per inverter; each reserves a group of column slots.
    pub mppt_per_inverter: u32,
    /// String columns to populate per inverter.
    pub strings_to_fill: u32,
}

impl AllocationRequest {
    /// Reject non-positive inputs before any fill work happens.
    pub fn validate(&self) -> Result<(), HelioplanError> {
        if self.num_panels == 0 {
            return Err(HelioplanError::InvalidRequest(
                "panel count must be positive".into(),
            ));
        }
        if self.num_inverters == 0 {
            return Err(HelioplanError::InvalidRequest(
                "inverter count must be positive".into(),
            ));
        }
        if self.mppt_per_inverter == 0 {
            return Err(HelioplanError::InvalidRequest(
                "MPPT count must be positive".into(),
            ));
        }
        if self.strings_to_fill == 0 {
            return Err(HelioplanError::InvalidRequest(
                "strings to fill must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Pick the base panels-per-string for a panel total.
///
/// Searches candidates ascending through the practical range, keeping the
/// first one that leaves the smallest remainder, so an exact divisor low
/// in the range beats an equally exact one higher up.
///
/// Returns the chosen count and its remainder.
pub fn best_panels_per_string(num_panels: u32) -> (u32, u32) {
    let mut best = MIN_PANELS_PER_STRING;
    let mut best_remainder = remainder_for(num_panels, best);

    for k in (MIN_PANELS_PER_STRING + 1)..=MAX_PANELS_PER_STRING {
        let remainder = remainder_for(num_panels, k);
        if remainder < best_remainder {
            best = k;
            best_remainder = remainder;
        }
    }

    (best, best_remainder)
}

/// Panels left over when num_panels is split into whole strings of k.
fn remainder_for(num_panels: u32, k: u32) -> u32 {
    num_panels - k * (num_panels / k)
}

/// Column visitation order: round-robin across MPPT groups.
///
/// Outer loop over the slot positions of a group, inner loop over groups,
/// so the first strings land one per MPPT group before any group takes a
/// second. Column index = slot position + group index * slots per group;
/// indices past the table width are skipped.
pub(crate) fn visitation_order(mppt_per_inverter: u32) -> Vec<usize> {
    let groups = mppt_per_inverter as usize;
    let total_columns = groups * MAX_STRINGS_PER_MPPT;
    let mut order = Vec::with_capacity(total_columns);

    for slot in 0..MAX_STRINGS_PER_MPPT {
        for group in 0..groups {
            let column = slot + group * MAX_STRINGS_PER_MPPT;
            if column < total_columns {
                order.push(column);
            }
        }
    }

    order
}

/// Build a stringing table whose numeric cells sum exactly to the
/// requested panel total.
///
/// 1. Pick the base panels-per-string for the panel total.
/// 2. Fill: walk the visitation order and set the first `strings_to_fill`
///    columns to the base, in every inverter row. Asking for more columns
///    than the table has populates every existing column.
/// 3. Top up: walk the visitation order adding one panel per populated
///    cell, re-checking the total after every increment, and return the
///    instant it hits the target.
///
/// A fill that leaves no populated column, or one that already overshoots
/// the target, cannot converge and is reported as a degenerate allocation.
pub fn allocate(request: &AllocationRequest) -> Result<AllocationMatrix, HelioplanError> {
    request.validate()?;

    let (panels_per_string, remainder) = best_panels_per_string(request.num_panels);
    let mut matrix = AllocationMatrix::new(
        request.num_inverters,
        request.mppt_per_inverter,
        panels_per_string,
        remainder,
    );
    let order = visitation_order(request.mppt_per_inverter);

    for &column in order.iter().take(request.strings_to_fill as usize) {
        matrix.set_column(column, panels_per_string);
    }

    let target = request.num_panels;
    let mut total = matrix.total_panels();

    if matrix.populated_columns() == 0 {
        return Err(HelioplanError::DegenerateAllocation(
            "no string column was populated; nothing to top up".into(),
        ));
    }
    if total > target {
        return Err(HelioplanError::DegenerateAllocation(format!(
            "base fill places {} panels, more than the {} requested",
            total, target
        )));
    }

    while total < target {
        for &column in &order {
            for inverter in 0..matrix.inverter_count() {
                if matrix.bump(inverter, column) {
                    total += 1;
                    if total == target {
                        return Ok(matrix);
                    }
                }
            }
        }
    }

    Ok(matrix)
}
