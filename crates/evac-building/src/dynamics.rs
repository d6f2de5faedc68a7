//! Per-node service rate table.

use evac_core::NodeId;

use crate::building::Building;
use crate::node::NodeType;

/// Base service rate in agents/second/meter-of-width, by known node type.
fn base_rate_per_m(t: &NodeType) -> Option<f64> {
    match t {
        NodeType::Hall => Some(1.5),
        NodeType::Door => Some(1.2),
        NodeType::Exit => Some(2.0),
        NodeType::Stair => Some(0.8),
        NodeType::Room | NodeType::Other(_) => None,
    }
}

/// Cached per-node service-rate entry.
#[derive(Clone, Debug)]
pub struct NodeDynamics {
    /// Agents per second this node can release to outbound edges. `INFINITY`
    /// means "no bottleneck" (node type outside the known set).
    pub service_rate_ps: f64,
    pub node_type: NodeType,
    pub width: f64,
}

/// Per-node service rate, derived once from the building at initialization
/// and mutated only by [`crate::hazard::scale_service_rate`].
pub struct NodeDynamicsTable {
    pub(crate) entries: Vec<NodeDynamics>,
}

impl NodeDynamicsTable {
    /// Derive the table from a building's current node types and widths.
    pub fn from_building(building: &Building) -> Self {
        let entries = building
            .nodes
            .iter()
            .map(|n| {
                let service_rate_ps = match base_rate_per_m(&n.node_type) {
                    Some(rate) => rate * n.width,
                    None => f64::INFINITY,
                };
                NodeDynamics {
                    service_rate_ps,
                    node_type: n.node_type.clone(),
                    width: n.width,
                }
            })
            .collect();
        NodeDynamicsTable { entries }
    }

    pub fn get(&self, id: NodeId) -> &NodeDynamics {
        &self.entries[id.index()]
    }

    pub fn service_rate(&self, id: NodeId) -> f64 {
        self.entries[id.index()].service_rate_ps
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
