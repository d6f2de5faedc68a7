//! `evac-core` — foundational types shared by every crate in the evacuation
//! simulator workspace.
//!
//! This crate is a dependency of every other crate here. It intentionally has
//! no workspace dependencies and minimal external ones (only `rand` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module    | Contents                                   |
//! |-----------|---------------------------------------------|
//! | [`ids`]   | `NodeId`, `EdgeId`, `AgentId`                |
//! | [`time`]  | `Tick`, simulated-seconds helpers            |
//! | [`rng`]   | `EngineRng` (single engine-owned stream)     |
//! | [`error`] | `CoreError`, `CoreResult`                    |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, EdgeId, NodeId};
pub use rng::EngineRng;
pub use time::Tick;
