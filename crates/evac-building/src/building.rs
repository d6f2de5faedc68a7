//! The building graph and its builder.
//!
//! # Data layout
//!
//! Nodes and edges are stored densely, indexed by [`NodeId`]/[`EdgeId`].
//! Each node additionally carries a list of incident edge ids so that
//! [`Building::close_node`] can flip every touching edge to `Closed` in one
//! pass without scanning the whole edge list.

use std::collections::HashMap;

use evac_core::{EdgeId, NodeId};

use crate::edge::{Directionality, Edge};
use crate::error::BuildingError;
use crate::node::{Node, NodeType, OpenState};

pub const SUPER_EXIT_ID: &str = "SUPER_EXIT";

/// The in-memory building graph.
///
/// Construct via [`BuildingBuilder`]; do not assemble the fields directly —
/// the builder guarantees the `SUPER_EXIT` invariant and the incident-edge
/// index are consistent with the node/edge arrays.
pub struct Building {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub floors: Vec<String>,
    external_to_id: HashMap<String, NodeId>,
    incident_edges: Vec<Vec<EdgeId>>,
    super_exit: NodeId,
}

impl Building {
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn super_exit(&self) -> NodeId {
        self.super_exit
    }

    /// Resolve an external string id to its dense `NodeId`.
    pub fn node_id(&self, external_id: &str) -> Option<NodeId> {
        self.external_to_id.get(external_id).copied()
    }

    pub fn is_node_open(&self, id: NodeId) -> bool {
        self.nodes[id.index()].state.is_open()
    }

    /// `(x, y, floor_index)` position used by the planner's 3D heuristic.
    /// `floor_index` doubles as the z coordinate, one unit per floor — see
    /// `evac-planner`'s heuristic for why no separate scale factor is
    /// applied.
    pub fn position(&self, id: NodeId) -> (f64, f64, f64) {
        let n = &self.nodes[id.index()];
        (n.x, n.y, n.floor_index as f64)
    }

    /// All edge ids touching `node`, regardless of current open/closed state.
    pub fn incident_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.incident_edges[node.index()]
    }

    /// A directed length lookup built once from the declared edges,
    /// independent of current open/closed state: unidirectional edges
    /// appear only as `(a, b)`; bidirectional edges appear as both
    /// `(a, b)` and `(b, a)`. The tick engine consults this once per
    /// traversal entry and treats a missing entry as a fatal error.
    pub fn directed_edge_lengths(&self) -> HashMap<(NodeId, NodeId), f64> {
        let mut map = HashMap::with_capacity(self.edges.len() * 2);
        for e in &self.edges {
            map.insert((e.node_a, e.node_b), e.length);
            if e.directionality == Directionality::Bidirectional {
                map.insert((e.node_b, e.node_a), e.length);
            }
        }
        map
    }
}

// ── BuildingBuilder ───────────────────────────────────────────────────────────

struct RawNode {
    external_id: String,
    node_type: NodeType,
    width: f64,
    x: f64,
    y: f64,
    floor: String,
    floor_index: i64,
    state: OpenState,
}

struct RawEdge {
    node_a: NodeId,
    node_b: NodeId,
    directionality: Directionality,
    length: f64,
    weight_factor: f64,
    risk: f64,
    state: OpenState,
}

/// Incrementally assemble a [`Building`].
///
/// Nodes and edges may be added in any order. [`build`](Self::build) wires
/// the synthetic `SUPER_EXIT` node automatically if the caller has not
/// already added a node with that external id: every node of type `Exit`
/// gets a zero-length, unidirectional edge into `SUPER_EXIT`.
#[derive(Default)]
pub struct BuildingBuilder {
    nodes: Vec<RawNode>,
    edges: Vec<RawEdge>,
    floors: Vec<String>,
    by_external_id: HashMap<String, NodeId>,
}

impl BuildingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn floors(mut self, floors: Vec<String>) -> Self {
        self.floors = floors;
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_node(
        &mut self,
        external_id: impl Into<String>,
        node_type: NodeType,
        width: f64,
        x: f64,
        y: f64,
        floor: impl Into<String>,
        floor_index: i64,
        state: OpenState,
    ) -> NodeId {
        let external_id = external_id.into();
        let id = NodeId(self.nodes.len() as u32);
        self.by_external_id.insert(external_id.clone(), id);
        self.nodes.push(RawNode {
            external_id,
            node_type,
            width,
            x,
            y,
            floor: floor.into(),
            floor_index,
            state,
        });
        id
    }

    pub fn add_edge(
        &mut self,
        node_a: NodeId,
        node_b: NodeId,
        directionality: Directionality,
        length: f64,
        weight_factor: f64,
        risk: f64,
        state: OpenState,
    ) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(RawEdge {
            node_a,
            node_b,
            directionality,
            length,
            weight_factor,
            risk,
            state,
        });
        id
    }

    pub fn node_id(&self, external_id: &str) -> Option<NodeId> {
        self.by_external_id.get(external_id).copied()
    }

    /// Consume the builder and produce a [`Building`], auto-wiring
    /// `SUPER_EXIT` if it is not already present.
    pub fn build(mut self) -> Result<Building, BuildingError> {
        if self.nodes.is_empty() {
            return Err(BuildingError::Empty);
        }

        let super_exit = match self.by_external_id.get(SUPER_EXIT_ID).copied() {
            Some(id) => id,
            None => {
                let id = self.add_node(
                    SUPER_EXIT_ID,
                    NodeType::Other("super_exit".to_string()),
                    1.0,
                    0.0,
                    0.0,
                    "",
                    0,
                    OpenState::Open,
                );
                let exits: Vec<NodeId> = self
                    .nodes
                    .iter()
                    .enumerate()
                    .filter(|(_, n)| n.node_type.is_exit())
                    .map(|(i, _)| NodeId(i as u32))
                    .collect();
                for exit in exits {
                    self.add_edge(
                        exit,
                        id,
                        Directionality::Unidirectional,
                        0.0,
                        1.0,
                        0.0,
                        OpenState::Open,
                    );
                }
                id
            }
        };

        let node_count = self.nodes.len();
        for e in &self.edges {
            if e.node_a.index() >= node_count {
                return Err(BuildingError::DanglingEdge(e.node_a));
            }
            if e.node_b.index() >= node_count {
                return Err(BuildingError::DanglingEdge(e.node_b));
            }
        }

        let mut incident_edges: Vec<Vec<EdgeId>> = vec![Vec::new(); node_count];
        for (i, e) in self.edges.iter().enumerate() {
            let id = EdgeId(i as u32);
            incident_edges[e.node_a.index()].push(id);
            incident_edges[e.node_b.index()].push(id);
        }

        let nodes = self
            .nodes
            .into_iter()
            .map(|n| Node {
                external_id: n.external_id,
                node_type: n.node_type,
                width: n.width,
                x: n.x,
                y: n.y,
                floor: n.floor,
                floor_index: n.floor_index,
                state: n.state,
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|e| Edge {
                node_a: e.node_a,
                node_b: e.node_b,
                directionality: e.directionality,
                length: e.length,
                weight_factor: e.weight_factor,
                risk: e.risk,
                state: e.state,
            })
            .collect();

        Ok(Building {
            nodes,
            edges,
            floors: self.floors,
            external_to_id: self.by_external_id,
            incident_edges,
            super_exit,
        })
    }
}
