//! The external reroute policy configuration.

/// Thresholds that trigger a policy reroute (§4.4 rule 2) when a forced
/// reroute (rule 1, a closed node ahead on the plan) does not already apply.
#[derive(Clone, Copy, Debug)]
pub struct ReroutePolicy {
    /// Seconds a waiting agent may go without moving before a reroute is
    /// triggered. Default `+INFINITY` — stuck-time alone never triggers.
    pub max_stuck_time: f64,
    /// Waiter count at the agent's current node at or above which a reroute
    /// is triggered.
    pub congestion_threshold: u32,
}

impl Default for ReroutePolicy {
    fn default() -> Self {
        ReroutePolicy {
            max_stuck_time: f64::INFINITY,
            congestion_threshold: 10,
        }
    }
}
