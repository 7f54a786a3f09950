//! Field-level diffs between stored and derived documents.
mod bitmask;
mod patch;

pub use bitmask::HardwareFields;
pub use patch::HardwarePatch;
