//! Hazard mutator bodies: `close_node`, `set_fire`, `scale_service_rate`.
//!
//! These are the three operations the engine's hazard hook (see
//! `evac-hazard`) is permitted to call. They mutate the `Building` and the
//! `NodeDynamicsTable` directly and are meant to be invoked between ticks,
//! never mid-tick.

use std::collections::{HashMap, VecDeque};

use evac_core::NodeId;

use crate::building::Building;
use crate::dynamics::NodeDynamicsTable;
use crate::node::OpenState;

/// How [`Building::set_fire`] combines a newly computed risk value with the
/// edge's existing risk.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RiskMode {
    /// `risk = max(old, value)`.
    Max,
    /// `risk = old + value`.
    Add,
}

impl Default for RiskMode {
    fn default() -> Self {
        RiskMode::Max
    }
}

/// Default BFS hop radius for [`Building::set_fire`].
pub const DEFAULT_FIRE_HOPS: u32 = 2;

impl Building {
    /// Close `id` and every edge incident to it. A closed node is invisible
    /// to the planner and to all of its incident edges, even ones not
    /// directly touched here — see the Graph Builder's edge-visibility rule.
    pub fn close_node(&mut self, id: NodeId) {
        self.nodes[id.index()].state = OpenState::Closed;
        let incident = self.incident_edges(id).to_vec();
        for eid in incident {
            self.edges[eid.index()].state = OpenState::Closed;
        }
    }

    /// Close only `id` itself, then raise the risk of every edge within
    /// `hops` hops of it over the subgraph of currently open edges.
    ///
    /// Unlike [`close_node`](Self::close_node), `id`'s incident edges are
    /// left open: closing them too would sever the BFS right at its
    /// starting point, so risk could never propagate past `id`. Planner
    /// invisibility for `id` itself is already provided by the endpoint-open
    /// check in the Graph Builder — incident edges don't need to be closed
    /// for that.
    ///
    /// An edge qualifies if at least one endpoint lies within `hops` of
    /// `id`, measured by hop count over open edges only — regardless of
    /// that edge's own open/closed state. `mode` controls whether the new
    /// risk value is combined with the old by `max` or by addition.
    pub fn set_fire(&mut self, id: NodeId, risk_value: f64, hops: u32, mode: RiskMode) {
        self.nodes[id.index()].state = OpenState::Closed;

        let dist = self.bfs_open_hops(id, hops);

        for edge in &mut self.edges {
            let within = dist.get(&edge.node_a).is_some_and(|&d| d <= hops)
                || dist.get(&edge.node_b).is_some_and(|&d| d <= hops);
            if within {
                edge.risk = match mode {
                    RiskMode::Max => edge.risk.max(risk_value),
                    RiskMode::Add => edge.risk + risk_value,
                };
            }
        }
    }

    /// BFS hop distance from `start`, traversing only currently open edges,
    /// stopping expansion once a node's distance exceeds `hops`.
    fn bfs_open_hops(&self, start: NodeId, hops: u32) -> HashMap<NodeId, u32> {
        let mut dist = HashMap::new();
        dist.insert(start, 0u32);
        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            let d = dist[&node];
            if d >= hops {
                continue;
            }
            for &eid in self.incident_edges(node) {
                let edge = &self.edges[eid.index()];
                if edge.state != OpenState::Open {
                    continue;
                }
                let other = edge.other(node);
                if !dist.contains_key(&other) {
                    dist.insert(other, d + 1);
                    queue.push_back(other);
                }
            }
        }

        dist
    }
}

impl NodeDynamicsTable {
    /// Multiply `id`'s service rate by `factor`.
    pub fn scale_service_rate(&mut self, id: NodeId, factor: f64) {
        self.entries[id.index()].service_rate_ps *= factor;
    }
}
