pub mod engine;
pub mod matrix;

pub use engine::{allocate, best_panels_per_string, AllocationRequest};
pub use matrix::{AllocationMatrix, SlotState};

/// Column slots reserved per MPPT group. The inverter families this
/// planner targets accept at most five strings per MPPT channel, and the
/// schedule sheet reserves that many columns per group whether or not all
/// of them end up used.
pub const MAX_STRINGS_PER_MPPT: usize = 5;

/// Practical lower bound for panels wired in series on one string.
pub const MIN_PANELS_PER_STRING: u32 = 5;

/// Practical upper bound for panels wired in series on one string.
pub const MAX_PANELS_PER_STRING: u32 = 17;
