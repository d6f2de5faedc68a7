//! Shared base error type.
//!
//! Sub-crates define their own error enums for their own failure modes and
//! wrap `CoreError` as one variant where a lower-level failure needs to
//! propagate up; both patterns are acceptable, prefer whichever keeps error
//! sites clean.

use thiserror::Error;

use crate::{AgentId, NodeId};

/// Errors that can occur in code shared across the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for code that only raises `CoreError`.
pub type CoreResult<T> = Result<T, CoreError>;
