//! `HazardHook` — the tick engine's single per-tick mutation point.
//!
//! The engine calls `HazardHook::apply` exactly once per tick, before any
//! other tick processing (see `evac-sim`'s tick loop). Scenario loading,
//! per-scenario event scripts, and fire/block/congestion event helpers all
//! live outside this crate — they are arbitrary external mutators expressed
//! as a `HazardHook` impl that calls `Building::close_node`,
//! `Building::set_fire`, and `NodeDynamicsTable::scale_service_rate`.

use evac_building::{Building, NodeDynamicsTable};
use evac_core::Tick;

/// Called once per tick by the tick engine, before edge-advance.
///
/// Implementations may close nodes, raise edge risk, or scale service rates;
/// they must not do anything else — the engine treats these three mutator
/// bodies (in `evac-building`) as the only legal hazard operations, and they
/// are only ever applied between ticks, never mid-tick.
pub trait HazardHook {
    /// `t` is simulated seconds elapsed (`tick.as_secs(dt)`); `tick` is the
    /// tick about to be processed.
    fn apply(&mut self, t: f64, tick: Tick, building: &mut Building, dynamics: &mut NodeDynamicsTable);
}

/// A hazard hook that never mutates anything. The default for scenarios with
/// no dynamic hooks.
pub struct NoopHazardHook;

impl HazardHook for NoopHazardHook {
    #[inline]
    fn apply(&mut self, _t: f64, _tick: Tick, _building: &mut Building, _dynamics: &mut NodeDynamicsTable) {}
}

/// Applies two hazard hooks in sequence: `first`, then `second`.
///
/// Construct chains with `hook_a.then(hook_b)`.
pub struct ChainedHazardHook<A: HazardHook, B: HazardHook> {
    first: A,
    second: B,
}

impl<A: HazardHook, B: HazardHook> HazardHook for ChainedHazardHook<A, B> {
    fn apply(&mut self, t: f64, tick: Tick, building: &mut Building, dynamics: &mut NodeDynamicsTable) {
        self.first.apply(t, tick, building, dynamics);
        self.second.apply(t, tick, building, dynamics);
    }
}

/// Extension trait that adds `.then(other)` to any `HazardHook`.
pub trait HazardHookExt: HazardHook + Sized {
    fn then<B: HazardHook>(self, other: B) -> ChainedHazardHook<Self, B> {
        ChainedHazardHook { first: self, second: other }
    }
}

impl<H: HazardHook + Sized> HazardHookExt for H {}

/// Wraps a plain closure as a `HazardHook`, for scenarios whose hazard logic
/// is a single function rather than a type worth naming.
pub struct FnHazardHook<F>(pub F)
where
    F: FnMut(f64, Tick, &mut Building, &mut NodeDynamicsTable);

impl<F> HazardHook for FnHazardHook<F>
where
    F: FnMut(f64, Tick, &mut Building, &mut NodeDynamicsTable),
{
    #[inline]
    fn apply(&mut self, t: f64, tick: Tick, building: &mut Building, dynamics: &mut NodeDynamicsTable) {
        (self.0)(t, tick, building, dynamics)
    }
}
