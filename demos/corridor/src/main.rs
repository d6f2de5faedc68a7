//! corridor — smallest possible example for the evacuation simulator.
//!
//! One hallway, one exit, one agent: a corridor ten meters long, a single
//! evacuee starting at one end, walking to the `SUPER_EXIT` at the other.
//! Scale comment: swap in a `BuildingBuilder` populated from a real floor
//! plan and a few hundred agents to see rerouting and congestion kick in.

use anyhow::Result;

use evac_agent::Agent;
use evac_building::{BuildingBuilder, Directionality, NodeType, OpenState};
use evac_planner::{AStarPlanner, Planner, PlannerConfig, ProjectedGraph};
use evac_sim::{EngineParams, NoopObserver, TickEngineBuilder};

// ── Constants ─────────────────────────────────────────────────────────────

const CORRIDOR_LENGTH_M: f64 = 10.0;
const AGENT_SPEED_MPS: f64 = 1.3;
const SEED: u64 = 42;

fn main() -> Result<()> {
    println!("=== corridor — evac-sim demo ===");
    println!("Corridor length: {CORRIDOR_LENGTH_M} m  |  Agent speed: {AGENT_SPEED_MPS} m/s");
    println!();

    // 1. Build the building: a hallway node leading to an exit node.
    let mut builder = BuildingBuilder::new();
    let hallway = builder.add_node("hallway", NodeType::Hall, 2.0, 0.0, 0.0, "1", 0, OpenState::Open);
    let exit = builder.add_node("exit", NodeType::Exit, 2.0, CORRIDOR_LENGTH_M, 0.0, "1", 0, OpenState::Open);
    builder.add_edge(hallway, exit, Directionality::Bidirectional, CORRIDOR_LENGTH_M, 1.0, 0.0, OpenState::Open);
    let building = builder.build()?;
    println!("Building: {} nodes, SUPER_EXIT wired to every exit", building.node_count());

    // 2. Plan the single agent's initial route with A*.
    let planner_config = PlannerConfig::default();
    let graph = ProjectedGraph::build(&building, &planner_config, None);
    let goal = building.super_exit();
    let path = AStarPlanner.plan(&graph, &building, hallway, goal);
    println!("Planned path: {path:?}");

    let agent = Agent::new(0, "1", hallway, path, goal, AGENT_SPEED_MPS);

    // 3. Build and run the engine.
    let params = EngineParams { rng_seed: Some(SEED), ..EngineParams::default() };
    let mut engine = TickEngineBuilder::new(building, vec![agent], AStarPlanner)
        .planner_config(planner_config)
        .params(params)
        .build()?;

    let output = engine.run(&mut NoopObserver)?;

    // 4. Summary.
    println!();
    match output.completion_series.first() {
        Some(finish_time) => println!("Agent reached the exit at t = {finish_time:.1} s"),
        None => println!("Agent did not finish within {} ticks", engine.current_tick().0),
    }

    Ok(())
}
