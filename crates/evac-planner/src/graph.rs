//! The Graph Builder: projects the current `Building` plus a congestion
//! snapshot into a weighted directed adjacency structure for planning.

use std::collections::HashMap;

use evac_building::Building;
use evac_core::NodeId;

/// Directed edge occupancy, keyed by ordered `(from, to)` node pair —
/// the count of `edge`-phase agents currently traversing that directed edge.
pub type CongestionSnapshot = HashMap<(NodeId, NodeId), u32>;

/// Planner cost weights.
///
/// `cost(a→b) = length_weight · length · weight_factor
///            + congestion_weight · occupancy(a→b)
///            + risk_weight · risk`
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    pub name: String,
    pub length_weight: f64,
    pub congestion_weight: f64,
    pub risk_weight: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            name: "default".to_string(),
            length_weight: 1.0,
            congestion_weight: 0.0,
            risk_weight: 0.0,
        }
    }
}

/// A directed adjacency structure, dense over `NodeId`: `adjacency[n]` is the
/// list of `(neighbor, cost)` pairs reachable from node `n`.
///
/// Closed nodes and closed edges are never represented here — a node with
/// state `Closed`, or any edge with either endpoint closed, is skipped
/// entirely while building, which is what makes a closed node "invisible to
/// the planner."
pub struct ProjectedGraph {
    adjacency: Vec<Vec<(NodeId, f64)>>,
}

impl ProjectedGraph {
    /// Build a fresh projection from the current building state.
    pub fn build(
        building: &Building,
        cfg: &PlannerConfig,
        congestion: Option<&CongestionSnapshot>,
    ) -> Self {
        let mut adjacency = vec![Vec::new(); building.node_count()];

        for edge in &building.edges {
            if !edge.state.is_open() {
                continue;
            }
            if !building.is_node_open(edge.node_a) || !building.is_node_open(edge.node_b) {
                continue;
            }

            let occ_ab = congestion
                .and_then(|c| c.get(&(edge.node_a, edge.node_b)))
                .copied()
                .unwrap_or(0);
            let cost_ab = cfg.length_weight * edge.length * edge.weight_factor
                + cfg.congestion_weight * occ_ab.max(0) as f64
                + cfg.risk_weight * edge.risk;
            adjacency[edge.node_a.index()].push((edge.node_b, cost_ab));

            if edge.directionality == evac_building::Directionality::Bidirectional {
                // Reverse occupancy falls back to the forward value when the
                // reverse key is absent. This over-penalizes counter-flow
                // traffic but matches the source exactly — see `SPEC_FULL.md`
                // §9's open question on this default.
                let occ_ba = congestion
                    .and_then(|c| c.get(&(edge.node_b, edge.node_a)))
                    .copied()
                    .unwrap_or(occ_ab);
                let cost_ba = cfg.length_weight * edge.length * edge.weight_factor
                    + cfg.congestion_weight * occ_ba.max(0) as f64
                    + cfg.risk_weight * edge.risk;
                adjacency[edge.node_b.index()].push((edge.node_a, cost_ba));
            }
        }

        ProjectedGraph { adjacency }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, f64)] {
        &self.adjacency[node.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
