use thiserror::Error;

/// Errors raised while assembling or querying a [`crate::Building`].
#[derive(Debug, Error)]
pub enum BuildingError {
    #[error("unknown node external id: {0}")]
    UnknownNodeId(String),

    #[error("edge references unknown node index {0:?}")]
    DanglingEdge(evac_core::NodeId),

    #[error("building has no nodes")]
    Empty,
}
