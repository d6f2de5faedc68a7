//! The Rerouting Controller: per-tick policy evaluation and replanning.
//!
//! Invoked once per tick, after congestion observations and before service
//! admission (see `evac-sim`'s tick loop). It performs no I/O and owns no
//! state across ticks — everything it needs (the planner, its cost weights,
//! and the trigger thresholds) is passed in or held by reference, the same
//! way `evac-planner`'s `AStarPlanner` is a stateless strategy object.

use std::collections::BTreeMap;

use evac_agent::{Agent, AgentPhase, RerouteEvent};
use evac_building::Building;
use evac_core::{AgentId, NodeId};
use evac_planner::{CongestionSnapshot, Planner, PlannerConfig, ProjectedGraph};

use crate::policy::ReroutePolicy;

/// Per-node, in-order waiter lists: the node a waiting agent currently
/// occupies, mapped to the agent indices waiting there. A `BTreeMap` keeps
/// node iteration order deterministic; within a node, agents are visited in
/// the order the caller inserted them (§4.4 "in the order it appears in the
/// node's waiter list").
pub type WaiterSnapshot = BTreeMap<NodeId, Vec<AgentId>>;

/// Evaluates §4.4's two reroute triggers for every waiting agent and invokes
/// the planner where triggered.
pub struct RerouteController<'p, P: Planner> {
    pub planner: &'p P,
    pub planner_config: PlannerConfig,
    pub policy: ReroutePolicy,
}

impl<'p, P: Planner> RerouteController<'p, P> {
    pub fn new(planner: &'p P, planner_config: PlannerConfig, policy: ReroutePolicy) -> Self {
        RerouteController { planner, planner_config, policy }
    }

    /// Run one rerouting pass over every node's waiter list.
    ///
    /// `t` is simulated seconds at the start of this tick. `waiters` and
    /// `congestion` are this tick's snapshots (§4.5 steps 4 and 6).
    pub fn run(
        &self,
        t: f64,
        building: &Building,
        waiters: &WaiterSnapshot,
        congestion: &CongestionSnapshot,
        agents: &mut [Agent],
    ) {
        for (_node, waiter_ids) in waiters {
            let waiter_count = waiter_ids.len() as u32;
            for &aid in waiter_ids {
                let agent = &mut agents[aid.index()];
                if agent.done || agent.phase != AgentPhase::Node {
                    continue;
                }

                let forced = agent.path[agent.pos_idx + 1..]
                    .iter()
                    .any(|&n| !building.is_node_open(n));
                let stuck = (t - agent.last_move_time) >= self.policy.max_stuck_time;
                let congested = waiter_count >= self.policy.congestion_threshold;

                if forced || stuck || congested {
                    self.replan_agent(t, building, congestion, agent);
                }
            }
        }
    }

    /// §4.4's replanning semantics for a single agent.
    fn replan_agent(
        &self,
        t: f64,
        building: &Building,
        congestion: &CongestionSnapshot,
        agent: &mut Agent,
    ) {
        agent.reroute_attempts += 1;

        let cur = match agent.current_node() {
            Some(n) => n,
            None => return,
        };

        let graph = ProjectedGraph::build(building, &self.planner_config, Some(congestion));
        let mut new_path = self.planner.plan(&graph, building, cur, agent.goal_id);
        if new_path.is_empty() {
            // Planner failure is silent: the agent keeps its existing plan.
            return;
        }
        if new_path.first() != Some(&cur) {
            new_path.insert(0, cur);
        }

        let old_suffix = agent.path[agent.pos_idx..].to_vec();
        if new_path != old_suffix {
            agent.reroute_history.push(RerouteEvent {
                time: t,
                old_path: old_suffix,
                new_path: new_path.clone(),
            });
        }

        agent.path = new_path;
        agent.pos_idx = 0;
        agent.phase = AgentPhase::Node;
        agent.edge_time_left = 0.0;
        agent.edge_total_time = 0.0;
        agent.last_move_time = t;
    }
}
