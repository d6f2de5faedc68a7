//! `evac-reroute` — the Rerouting Controller.
//!
//! | Module        | Contents                                    |
//! |---------------|------------------------------------------------|
//! | [`controller`]| `RerouteController`, `WaiterSnapshot`           |
//! | [`policy`]    | `ReroutePolicy`                                 |
//!
//! The controller is generic over `evac_planner::Planner` so the tick engine
//! can substitute an alternative search strategy in tests without touching
//! this crate.

pub mod controller;
pub mod policy;


pub use controller::{RerouteController, WaiterSnapshot};
pub use policy::ReroutePolicy;
