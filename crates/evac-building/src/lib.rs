//! `evac-building` — the in-memory building model.
//!
//! | Module      | Contents                                               |
//! |-------------|----------------------------------------------------------|
//! | [`node`]    | `Node`, `NodeType`, `OpenState`                           |
//! | [`edge`]    | `Edge`, `Directionality`                                  |
//! | [`building`]| `Building`, `BuildingBuilder`                             |
//! | [`dynamics`]| `NodeDynamicsTable`, `NodeDynamics`                       |
//! | [`hazard`]  | `close_node`/`set_fire`/`scale_service_rate` mutator bodies, `RiskMode` |
//! | [`error`]   | `BuildingError`                                           |
//!
//! The Building and the Node Dynamics Table are shared, read-mostly state:
//! only hazard mutators touch them, and only between ticks (never mid-tick).

pub mod building;
pub mod dynamics;
pub mod edge;
pub mod error;
pub mod hazard;
pub mod node;

#[cfg(test)]
mod tests;

pub use building::{Building, BuildingBuilder};
pub use dynamics::{NodeDynamics, NodeDynamicsTable};
pub use edge::{Directionality, Edge};
pub use error::BuildingError;
pub use hazard::RiskMode;
pub use node::{Node, NodeType, OpenState};
