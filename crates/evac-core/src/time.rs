//! Simulation time model.
//!
//! Time is represented two ways: a monotonically increasing `Tick` step
//! counter (how many ticks have elapsed), and simulated seconds `t`, which is
//! what agent timestamps (`last_move_time`, `finish_time`, reroute history
//! entries) are recorded in. The two are related by the engine's `dt`:
//!
//!   t = tick.0 as f64 * dt
//!
//! Using an integer tick as the loop counter keeps `max_steps` termination
//! exact; using `f64` seconds for agent-facing timestamps matches the
//! fractional-second arithmetic the congestion and service-rate models need.

use std::fmt;

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick one step after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Simulated seconds elapsed at this tick, given a fixed timestep `dt`.
    #[inline]
    pub fn as_secs(self, dt: f64) -> f64 {
        self.0 as f64 * dt
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick {}", self.0)
    }
}
