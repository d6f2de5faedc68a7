//! The agent record and its finite-state-machine phase.

use evac_core::NodeId;

/// An agent's current activity.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum AgentPhase {
    /// Occupying a single graph node, waiting for admission.
    #[default]
    Node,
    /// Traversing an outgoing edge toward `path[pos_idx + 1]`.
    Edge,
}

/// One recorded rerouting event: the agent's remaining plan changed.
///
/// Appended to [`Agent::reroute_history`] only when the replanner's result
/// actually differs from the old remaining plan — see
/// `evac-reroute`'s controller for when this fires.
#[derive(Clone, Debug)]
pub struct RerouteEvent {
    pub time: f64,
    pub old_path: Vec<NodeId>,
    pub new_path: Vec<NodeId>,
}

/// A simulated evacuee.
///
/// Construct with [`Agent::new`]; every field has an explicit value from the
/// start, there is no lazy/optional attribute attachment. Plans are owned
/// `Vec<NodeId>`s — if several agents start from a shared template path,
/// clone it per agent before calling `new` so that rerouting one agent can
/// never mutate another's plan.
#[derive(Clone, Debug)]
pub struct Agent {
    pub id: u64,
    pub start_floor: String,
    pub start_room: NodeId,

    pub path: Vec<NodeId>,
    pub pos_idx: usize,
    pub goal_id: NodeId,
    /// The node immediately before `SUPER_EXIT` in the *initial* plan, fixed
    /// at construction. Used only for reporting which physical exit an
    /// agent was originally bound for, per the `SUPER_EXIT` convention.
    pub assigned_exit: NodeId,

    pub speed_mps: f64,
    pub phase: AgentPhase,
    pub edge_time_left: f64,
    pub edge_total_time: f64,

    pub last_move_time: f64,
    pub finish_time: Option<f64>,

    pub reroute_attempts: u32,
    pub reroute_history: Vec<RerouteEvent>,

    pub done: bool,
}

impl Agent {
    /// Construct a new agent at `pos_idx = 0`, `phase = Node`, not done, with
    /// an empty reroute history. `path` should already be a per-agent clone.
    pub fn new(
        id: u64,
        start_floor: impl Into<String>,
        start_room: NodeId,
        path: Vec<NodeId>,
        goal_id: NodeId,
        speed_mps: f64,
    ) -> Self {
        let assigned_exit = match path.len() {
            0 => NodeId::INVALID,
            1 => path[0],
            n => path[n - 2],
        };
        Agent {
            id,
            start_floor: start_floor.into(),
            start_room,
            path,
            pos_idx: 0,
            goal_id,
            assigned_exit,
            speed_mps,
            phase: AgentPhase::Node,
            edge_time_left: 0.0,
            edge_total_time: 0.0,
            last_move_time: 0.0,
            finish_time: None,
            reroute_attempts: 0,
            reroute_history: Vec::new(),
            done: false,
        }
    }

    /// The node this agent currently occupies or last departed from.
    #[inline]
    pub fn current_node(&self) -> Option<NodeId> {
        self.path.get(self.pos_idx).copied()
    }

    /// `true` once `pos_idx` reaches the last index of `path`.
    #[inline]
    pub fn at_final_node(&self) -> bool {
        !self.path.is_empty() && self.pos_idx == self.path.len() - 1
    }

    /// Debug-only invariant check on phase/position consistency.
    ///
    /// Not called automatically by the tick engine: the `SUPER_EXIT`
    /// zero-length edge legitimately produces a one-tick window where an
    /// edge-phase agent has `edge_time_left == 0.0` right before the engine
    /// pulls it back to node phase, which this check would otherwise flag.
    /// Call it directly in tests that want to assert invariants hold at a
    /// particular moment outside that window.
    pub fn debug_assert_invariants(&self) {
        if self.done {
            return;
        }
        debug_assert!(self.pos_idx < self.path.len() || self.path.is_empty());
        match self.phase {
            AgentPhase::Edge => {
                debug_assert!(self.pos_idx + 1 < self.path.len());
                debug_assert!(self.edge_total_time > 0.0);
                debug_assert!(self.edge_time_left > 0.0 && self.edge_time_left <= self.edge_total_time);
            }
            AgentPhase::Node => {
                debug_assert_eq!(self.edge_time_left, 0.0);
            }
        }
    }
}
