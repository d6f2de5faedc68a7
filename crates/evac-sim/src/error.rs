//! The tick engine's error type.

use evac_core::NodeId;
use thiserror::Error;

/// Errors the tick engine can raise.
///
/// Per the error handling design, a missing edge length is the only
/// structural invariant violation the engine itself can hit mid-run, and it
/// is unrecoverable: the physics of traversal cannot proceed without a
/// length. Everything else the planner or the rerouting controller can fail
/// at (unreachable goal, out-of-range indices) is handled silently at the
/// point of failure and never surfaces here.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no declared length for directed edge {from} -> {to}")]
    MissingEdgeLength { from: NodeId, to: NodeId },

    #[error("agent index {0} out of range")]
    InvalidAgentIndex(usize),

    #[error("engine configuration error: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
