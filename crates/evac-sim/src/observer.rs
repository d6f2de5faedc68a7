//! Tick-boundary progress callbacks.

use evac_agent::Agent;
use evac_core::Tick;

/// Callbacks invoked by [`TickEngine::run`][crate::TickEngine::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations; override only what you
/// need. Observers see the agent list read-only — they cannot influence the
/// tick in progress, only react to it.
pub trait SimObserver {
    /// Called at the very start of each tick, before the hazard hook runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, after edge entry.
    ///
    /// `completions_this_tick` is how many agents finished during this tick.
    fn on_tick_end(&mut self, _tick: Tick, _agents: &[Agent], _completions_this_tick: usize) {}

    /// Called once after the run loop exits, whether by full completion or
    /// by hitting `max_steps`.
    fn on_sim_end(&mut self, _final_tick: Tick, _agents: &[Agent]) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
