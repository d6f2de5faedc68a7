//! `evac-sim` — the Tick Engine: orchestrates one simulation step end to end.
//!
//! # The tick, in order
//!
//! ```text
//! 1. Hazard hook        — external mutator runs once (may close nodes, raise
//!                          risk, scale service rates).
//! 2. Edge advance       — edge-phase agents lose dt off edge_time_left;
//!                          arrivals become node-phase.
//! 3. Complete arrivals  — node-phase agents at their final node finish.
//! 4. Snapshot waiters   — node -> [agent index] for remaining node-phase agents.
//! 5. Record congestion  — per-node waiter-count series.
//! 6. Snapshot occupancy — directed-edge -> count of edge-phase agents on it.
//! 7. Reroute pass       — evac-reroute's controller, given the snapshots above.
//! 8. Service admission  — per-node Bernoulli-rounded leaver count, shuffled queue.
//! 9. Edge entry         — movers compute congestion-adjusted travel time and
//!                          transition to edge phase.
//! ```
//!
//! # Quick start
//!
//! ```rust,ignore
//! use evac_planner::AStarPlanner;
//! use evac_sim::{NoopObserver, TickEngineBuilder};
//!
//! let mut engine = TickEngineBuilder::new(building, agents, AStarPlanner).build()?;
//! let output = engine.run(&mut NoopObserver)?;
//! println!("{} agents finished", output.completion_series.len());
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod params;


pub use builder::TickEngineBuilder;
pub use engine::{EngineOutput, TickEngine};
pub use error::{EngineError, EngineResult};
pub use observer::{NoopObserver, SimObserver};
pub use params::EngineParams;
