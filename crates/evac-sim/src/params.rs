//! Engine-wide tunables.

/// Parameters governing one simulation run.
///
/// All fields have defaults; construct with [`EngineParams::default`] and
/// override only what you need via struct-update syntax.
#[derive(Clone, Copy, Debug)]
pub struct EngineParams {
    /// Hard cap on the number of ticks `TickEngine::run` will execute even if
    /// agents never all finish.
    pub max_steps: u64,
    /// Seed for the engine's single RNG stream. `None` seeds from entropy,
    /// which makes the run non-reproducible — only appropriate for callers
    /// that do not need determinism.
    pub rng_seed: Option<u64>,
    /// Default walking speed in meters/second. Sampling a distribution per
    /// agent (e.g. a truncated Gaussian) is an external concern; the engine
    /// never reads this field itself, it only carries it through as part of
    /// the external parameter contract.
    pub default_speed_mps: f64,
    /// Fixed timestep in simulated seconds.
    pub dt: f64,
    /// Congestion sensitivity `alpha` in the edge-traversal speed model.
    pub congestion_alpha: f64,
    /// Floor on the congestion speed factor `f`.
    pub min_speed_factor: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            max_steps: 10_000,
            rng_seed: None,
            default_speed_mps: 1.3,
            dt: 1.0,
            congestion_alpha: 0.5,
            min_speed_factor: 0.2,
        }
    }
}
