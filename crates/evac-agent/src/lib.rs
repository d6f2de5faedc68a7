//! `evac-agent` — the per-agent finite-state-machine record.
//!
//! The source this spec is drawn from attaches attributes to agents lazily,
//! as an open map of fields. Per `SPEC_FULL.md` §9 ("dynamic maps as
//! canonical records"), [`Agent`] instead declares its full set of fields up
//! front; optionality is represented by explicit defaults established at
//! construction (`phase` defaults to `Node`, `reroute_history` starts empty).

pub mod agent;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentPhase, RerouteEvent};
