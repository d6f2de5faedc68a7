//! The `TickEngine` and its tick loop.

use std::collections::HashMap;

use evac_agent::{Agent, AgentPhase};
use evac_building::{Building, NodeDynamicsTable};
use evac_core::{AgentId, EngineRng, NodeId, Tick};
use evac_hazard::HazardHook;
use evac_planner::{CongestionSnapshot, Planner, PlannerConfig};
use evac_reroute::{RerouteController, ReroutePolicy, WaiterSnapshot};

use crate::error::{EngineError, EngineResult};
use crate::observer::SimObserver;
use crate::params::EngineParams;

/// What a completed run produced: a completion-time series in completion
/// order, and a per-node series of waiter counts, one sample per tick the
/// node had waiters.
#[derive(Clone, Debug, Default)]
pub struct EngineOutput {
    pub completion_series: Vec<f64>,
    pub congestion_log: HashMap<NodeId, Vec<u32>>,
}

/// Orchestrates one simulation run over a fixed building and agent
/// population.
///
/// Owns every piece of state a tick touches — the building, the node
/// dynamics table, the agent list, and the single RNG stream — exclusively
/// for the run's duration, matching the ownership model in `SPEC_FULL.md`
/// §5: external collaborators only see this state between ticks (via
/// `SimObserver`), never mid-tick.
///
/// Generic over `P: Planner` and `H: HazardHook` so both can be swapped at
/// compile time with no dynamic dispatch cost, the same way `evac-reroute`'s
/// controller is generic over its planner.
pub struct TickEngine<P: Planner, H: HazardHook> {
    building: Building,
    dynamics: NodeDynamicsTable,
    agents: Vec<Agent>,
    rng: EngineRng,
    params: EngineParams,
    planner: P,
    planner_config: PlannerConfig,
    policy: ReroutePolicy,
    hazard_hook: H,
    edge_lengths: HashMap<(NodeId, NodeId), f64>,
    tick: Tick,
    completion_series: Vec<f64>,
    congestion_log: HashMap<NodeId, Vec<u32>>,
}

impl<P: Planner, H: HazardHook> TickEngine<P, H> {
    pub(crate) fn new(
        building: Building,
        agents: Vec<Agent>,
        rng: EngineRng,
        params: EngineParams,
        planner: P,
        planner_config: PlannerConfig,
        policy: ReroutePolicy,
        hazard_hook: H,
    ) -> Self {
        let dynamics = NodeDynamicsTable::from_building(&building);
        let edge_lengths = building.directed_edge_lengths();
        TickEngine {
            building,
            dynamics,
            agents,
            rng,
            params,
            planner,
            planner_config,
            policy,
            hazard_hook,
            edge_lengths,
            tick: Tick::ZERO,
            completion_series: Vec::new(),
            congestion_log: HashMap::new(),
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, index: usize) -> EngineResult<&Agent> {
        self.agents.get(index).ok_or(EngineError::InvalidAgentIndex(index))
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn all_done(&self) -> bool {
        self.agents.iter().all(|a| a.done)
    }

    /// Run until every agent is done or `max_steps` ticks have elapsed.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> EngineResult<EngineOutput> {
        while self.tick.0 < self.params.max_steps && !self.all_done() {
            observer.on_tick_start(self.tick);
            let before = self.completion_series.len();
            self.process_tick()?;
            let completions_this_tick = self.completion_series.len() - before;
            observer.on_tick_end(self.tick, &self.agents, completions_this_tick);
            self.tick = self.tick.next();
        }
        observer.on_sim_end(self.tick, &self.agents);
        Ok(EngineOutput {
            completion_series: self.completion_series.clone(),
            congestion_log: self.congestion_log.clone(),
        })
    }

    /// Run exactly `n` ticks from the current position, ignoring `max_steps`.
    /// Useful for tests that want to inspect intermediate state.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> EngineResult<()> {
        for _ in 0..n {
            observer.on_tick_start(self.tick);
            let before = self.completion_series.len();
            self.process_tick()?;
            let completions_this_tick = self.completion_series.len() - before;
            observer.on_tick_end(self.tick, &self.agents, completions_this_tick);
            self.tick = self.tick.next();
        }
        Ok(())
    }

    /// Execute the nine ordered steps of one tick (`SPEC_FULL.md` §4.5).
    fn process_tick(&mut self) -> EngineResult<()> {
        let dt = self.params.dt;
        let t = self.tick.as_secs(dt);

        // 1. Hazard hook.
        self.hazard_hook.apply(t, self.tick, &mut self.building, &mut self.dynamics);

        // 2. Advance edge-phase agents.
        for agent in self.agents.iter_mut() {
            if agent.done || agent.phase != AgentPhase::Edge {
                continue;
            }
            agent.edge_time_left -= dt;
            if agent.edge_time_left <= 0.0 {
                agent.phase = AgentPhase::Node;
                agent.pos_idx += 1;
                agent.edge_time_left = 0.0;
                agent.last_move_time = t;
            }
        }

        // 3. Complete arrivals.
        for agent in self.agents.iter_mut() {
            if agent.done || agent.phase != AgentPhase::Node {
                continue;
            }
            if agent.at_final_node() {
                agent.done = true;
                agent.finish_time = Some(t);
                self.completion_series.push(t);
            }
        }

        // 4. Snapshot waiters, clamping pos_idx defensively.
        let mut waiters: WaiterSnapshot = WaiterSnapshot::new();
        for (idx, agent) in self.agents.iter_mut().enumerate() {
            if agent.done || agent.phase != AgentPhase::Node || agent.path.is_empty() {
                continue;
            }
            let max_idx = agent.path.len() - 1;
            if agent.pos_idx > max_idx {
                agent.pos_idx = max_idx;
            }
            let node = agent.path[agent.pos_idx];
            waiters.entry(node).or_default().push(AgentId(idx as u32));
        }

        // 5. Record node congestion.
        for (&node, ids) in &waiters {
            self.congestion_log.entry(node).or_default().push(ids.len() as u32);
        }

        // 6. Snapshot edge occupancy.
        let mut occupancy: CongestionSnapshot = CongestionSnapshot::new();
        for agent in &self.agents {
            if agent.done || agent.phase != AgentPhase::Edge {
                continue;
            }
            let cur = agent.path[agent.pos_idx];
            let nxt = agent.path[agent.pos_idx + 1];
            *occupancy.entry((cur, nxt)).or_insert(0) += 1;
        }

        // 7. Rerouting pass.
        let controller = RerouteController::new(&self.planner, self.planner_config.clone(), self.policy);
        controller.run(t, &self.building, &waiters, &occupancy, &mut self.agents);

        // 8. Service admission.
        let mut movers: Vec<AgentId> = Vec::new();
        for (&node, ids) in &waiters {
            let mut ids = ids.clone();
            let waiter_count = ids.len() as u32;
            let rate = self.dynamics.service_rate(node);
            let max_leavers = if rate.is_infinite() {
                waiter_count
            } else {
                let q = rate * dt;
                let base = q.floor();
                let frac = q - base;
                let extra = if frac > 0.0 && self.rng.gen_bool(frac) { 1 } else { 0 };
                ((base as u32) + extra).min(waiter_count)
            };
            self.rng.shuffle(&mut ids);
            movers.extend(ids.into_iter().take(max_leavers as usize));
        }

        // 9. Edge entry.
        for aid in movers {
            let agent = &mut self.agents[aid.index()];
            if agent.done || agent.phase != AgentPhase::Node {
                continue;
            }
            if agent.pos_idx + 1 >= agent.path.len() {
                continue;
            }
            let cur = agent.path[agent.pos_idx];
            let nxt = agent.path[agent.pos_idx + 1];
            let length = *self
                .edge_lengths
                .get(&(cur, nxt))
                .ok_or(EngineError::MissingEdgeLength { from: cur, to: nxt })?;

            let n_edge = occupancy.get(&(cur, nxt)).copied().unwrap_or(0);
            let w_eff = self.building.node(cur).width.min(self.building.node(nxt).width).max(0.5);
            let rho = n_edge as f64 / w_eff;
            let alpha = self.params.congestion_alpha.max(0.0);
            let f = (1.0 / (1.0 + alpha * (rho - 1.0).max(0.0))).max(self.params.min_speed_factor);
            let v_eff = agent.speed_mps * f;
            let travel_time = length / v_eff.max(1e-6);

            agent.edge_total_time = travel_time;
            agent.edge_time_left = travel_time;
            agent.phase = AgentPhase::Edge;
        }

        Ok(())
    }
}
