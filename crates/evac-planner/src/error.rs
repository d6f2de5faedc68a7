//! Planner-subsystem error type.

use thiserror::Error;

/// Errors produced by `evac-planner`.
///
/// Note that an unreachable goal is *not* an error — per the planner's
/// contract (`spec.md` §4.2) it returns an empty path — so this enum stays
/// small; it exists for malformed-input cases the `Planner` trait's
/// `Vec<NodeId>` return type can't express on its own.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("start node index {0} out of range for a building with {1} nodes")]
    StartOutOfRange(u32, usize),
}
