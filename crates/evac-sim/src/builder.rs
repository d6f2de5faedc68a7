//! Fluent builder for constructing a [`TickEngine`].

use evac_agent::Agent;
use evac_building::Building;
use evac_core::EngineRng;
use evac_hazard::{HazardHook, NoopHazardHook};
use evac_planner::{Planner, PlannerConfig};
use evac_reroute::ReroutePolicy;

use crate::engine::TickEngine;
use crate::error::{EngineError, EngineResult};
use crate::params::EngineParams;

/// Fluent builder for [`TickEngine<P, H>`].
///
/// # Required inputs
///
/// - a built [`Building`]
/// - the initial [`Agent`] population (constructed externally — see
///   `SPEC_FULL.md` §6's agent construction contract)
/// - `P: Planner` — e.g. [`evac_planner::AStarPlanner`]
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                    |
/// |-------------------|-----------------------------|
/// | `.planner_config` | `PlannerConfig::default()`  |
/// | `.policy`         | `ReroutePolicy::default()`  |
/// | `.params`         | `EngineParams::default()`   |
/// | `.hazard_hook`    | [`NoopHazardHook`]          |
///
/// # Example
///
/// ```rust,ignore
/// let engine = TickEngineBuilder::new(building, agents, AStarPlanner)
///     .params(EngineParams { rng_seed: Some(7), ..Default::default() })
///     .build()?;
/// ```
pub struct TickEngineBuilder<P: Planner, H: HazardHook = NoopHazardHook> {
    building: Building,
    agents: Vec<Agent>,
    planner: P,
    planner_config: Option<PlannerConfig>,
    policy: Option<ReroutePolicy>,
    params: Option<EngineParams>,
    hazard_hook: H,
}

impl<P: Planner> TickEngineBuilder<P, NoopHazardHook> {
    /// Create a builder with no hazard hook (use `.hazard_hook` to supply one).
    pub fn new(building: Building, agents: Vec<Agent>, planner: P) -> Self {
        TickEngineBuilder {
            building,
            agents,
            planner,
            planner_config: None,
            policy: None,
            params: None,
            hazard_hook: NoopHazardHook,
        }
    }
}

impl<P: Planner, H: HazardHook> TickEngineBuilder<P, H> {
    pub fn planner_config(mut self, cfg: PlannerConfig) -> Self {
        self.planner_config = Some(cfg);
        self
    }

    pub fn policy(mut self, policy: ReroutePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn params(mut self, params: EngineParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Replace the hazard hook, changing the builder's `H` type parameter.
    pub fn hazard_hook<H2: HazardHook>(self, hook: H2) -> TickEngineBuilder<P, H2> {
        TickEngineBuilder {
            building: self.building,
            agents: self.agents,
            planner: self.planner,
            planner_config: self.planner_config,
            policy: self.policy,
            params: self.params,
            hazard_hook: hook,
        }
    }

    /// Validate inputs and produce a ready-to-run [`TickEngine`].
    pub fn build(self) -> EngineResult<TickEngine<P, H>> {
        let params = self.params.unwrap_or_default();
        if !(params.dt > 0.0) {
            return Err(EngineError::Config(format!("dt must be > 0, got {}", params.dt)));
        }
        if self.building.node_count() == 0 {
            return Err(EngineError::Config("building has no nodes".to_string()));
        }

        let rng = match params.rng_seed {
            Some(seed) => EngineRng::new(seed),
            None => EngineRng::from_entropy(),
        };

        Ok(TickEngine::new(
            self.building,
            self.agents,
            rng,
            params,
            self.planner,
            self.planner_config.unwrap_or_default(),
            self.policy.unwrap_or_default(),
            self.hazard_hook,
        ))
    }
}
