use crate::allocation::MAX_STRINGS_PER_MPPT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of one string slot in the allocation table.
///
/// `Unused` is distinct from a zero count: it marks a slot that was never
/// targeted for population, rendered as "-" in schedule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    Unused,
    Assigned(u32),
}

impl SlotState {
    /// Returns the panel count for an assigned slot.
    pub fn panels(&self) -> Option<u32> {
        match self {
            SlotState::Unused => None,
            SlotState::Assigned(n) => Some(*n),
        }
    }
}

impl fmt::Display for SlotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotState::Unused => write!(f, "-"),
            SlotState::Assigned(n) => write!(f, "{n}"),
        }
    }
}

/// Per-inverter, per-string panel counts produced by the allocation
/// engine.
///
/// Rows are inverters; columns are string slots, grouped
/// `MAX_STRINGS_PER_MPPT` per MPPT channel. On success the numeric cells
/// sum exactly to the requested panel total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationMatrix {
    mppt_per_inverter: u32,
    panels_per_string: u32,
    remainder: u32,
    rows: Vec<Vec<SlotState>>,
}

impl AllocationMatrix {
    pub(crate) fn new(
        num_inverters: u32,
        mppt_per_inverter: u32,
        panels_per_string: u32,
        remainder: u32,
    ) -> Self {
        let columns = mppt_per_inverter as usize * MAX_STRINGS_PER_MPPT;
        AllocationMatrix {
            mppt_per_inverter,
            panels_per_string,
            remainder,
            rows: vec![vec![SlotState::Unused; columns]; num_inverters as usize],
        }
    }

    /// Number of inverter rows.
    pub fn inverter_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of string-slot columns (MPPT groups times slots per group).
    pub fn slot_count(&self) -> usize {
        self.mppt_per_inverter as usize * MAX_STRINGS_PER_MPPT
    }

    pub fn mppt_per_inverter(&self) -> u32 {
        self.mppt_per_inverter
    }

    /// Base panels-per-string the engine selected (informational).
    pub fn panels_per_string(&self) -> u32 {
        self.panels_per_string
    }

    /// Divisibility remainder for the selected base (informational; never
    /// placed into a cell).
    pub fn remainder(&self) -> u32 {
        self.remainder
    }

    /// Cell state, or None when either index is out of range.
    pub fn slot(&self, inverter: usize, slot: usize) -> Option<SlotState> {
        self.rows.get(inverter)?.get(slot).copied()
    }

    /// All rows, for rendering.
    pub fn rows(&self) -> &[Vec<SlotState>] {
        &self.rows
    }

    /// Sum of all numeric cells.
    pub fn total_panels(&self) -> u32 {
        self.rows.iter().flatten().filter_map(|s| s.panels()).sum()
    }

    /// Number of columns holding numeric cells. Population is uniform per
    /// column, so the first row is representative.
    pub fn populated_columns(&self) -> usize {
        match self.rows.first() {
            Some(row) => row.iter().filter(|s| s.panels().is_some()).count(),
            None => 0,
        }
    }

    /// MPPT group a slot column belongs to (zero-based).
    pub fn mppt_group(slot: usize) -> usize {
        slot / MAX_STRINGS_PER_MPPT
    }

    /// Position of a slot column within its MPPT group (zero-based).
    pub fn slot_in_group(slot: usize) -> usize {
        slot % MAX_STRINGS_PER_MPPT
    }

    /// Set a column to the given panel count in every inverter row.
    pub(crate) fn set_column(&mut self, slot: usize, panels: u32) {
        for row in &mut self.rows {
            row[slot] = SlotState::Assigned(panels);
        }
    }

    /// Add one panel to an assigned cell. Unused cells are left alone;
    /// returns whether a panel was placed.
    pub(crate) fn bump(&mut self, inverter: usize, slot: usize) -> bool {
        match &mut self.rows[inverter][slot] {
            SlotState::Assigned(n) => {
                *n += 1;
                true
            }
            SlotState::Unused => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix_is_all_unused() {
        let m = AllocationMatrix::new(2, 3, 10, 0);
        assert_eq!(m.inverter_count(), 2);
        assert_eq!(m.slot_count(), 15);
        assert_eq!(m.total_panels(), 0);
        assert_eq!(m.populated_columns(), 0);
        assert_eq!(m.slot(1, 14), Some(SlotState::Unused));
        assert_eq!(m.slot(2, 0), None);
    }

    #[test]
    fn test_set_column_and_totals() {
        let mut m = AllocationMatrix::new(2, 1, 10, 0);
        m.set_column(0, 10);
        m.set_column(3, 10);
        assert_eq!(m.total_panels(), 40);
        assert_eq!(m.populated_columns(), 2);
        assert_eq!(m.slot(0, 1), Some(SlotState::Unused));
    }

    #[test]
    fn test_bump_only_touches_assigned_cells() {
        let mut m = AllocationMatrix::new(1, 1, 10, 0);
        m.set_column(0, 10);
        assert!(m.bump(0, 0));
        assert!(!m.bump(0, 1));
        assert_eq!(m.slot(0, 0), Some(SlotState::Assigned(11)));
        assert_eq!(m.total_panels(), 11);
    }

    #[test]
    fn test_group_labels() {
        assert_eq!(AllocationMatrix::mppt_group(0), 0);
        assert_eq!(AllocationMatrix::mppt_group(4), 0);
        assert_eq!(AllocationMatrix::mppt_group(5), 1);
        assert_eq!(AllocationMatrix::slot_in_group(5), 0);
        assert_eq!(AllocationMatrix::slot_in_group(9), 4);
    }

    #[test]
    fn test_slot_state_display() {
        assert_eq!(SlotState::Unused.to_string(), "-");
        assert_eq!(SlotState::Assigned(12).to_string(), "12");
    }
}
