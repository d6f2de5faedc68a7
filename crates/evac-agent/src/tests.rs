//! Unit tests for the agent record.

use crate::agent::{Agent, AgentPhase};
use evac_core::NodeId;

fn path(ids: &[u32]) -> Vec<NodeId> {
    ids.iter().map(|&i| NodeId(i)).collect()
}

#[test]
fn assigned_exit_is_penultimate_node() {
    let a = Agent::new(1, "1", NodeId(0), path(&[0, 1, 2, 99]), NodeId(99), 1.3);
    assert_eq!(a.assigned_exit, NodeId(2));
}

#[test]
fn assigned_exit_single_node_path() {
    let a = Agent::new(1, "1", NodeId(0), path(&[0]), NodeId(0), 1.3);
    assert_eq!(a.assigned_exit, NodeId(0));
}

#[test]
fn assigned_exit_empty_path_is_invalid() {
    let a = Agent::new(1, "1", NodeId(0), Vec::new(), NodeId(0), 1.3);
    assert_eq!(a.assigned_exit, NodeId::INVALID);
}

#[test]
fn new_agent_defaults() {
    let a = Agent::new(1, "1", NodeId(0), path(&[0, 1]), NodeId(1), 1.3);
    assert_eq!(a.pos_idx, 0);
    assert_eq!(a.phase, AgentPhase::Node);
    assert_eq!(a.edge_time_left, 0.0);
    assert_eq!(a.edge_total_time, 0.0);
    assert_eq!(a.reroute_attempts, 0);
    assert!(a.reroute_history.is_empty());
    assert!(!a.done);
    assert!(a.finish_time.is_none());
}

#[test]
fn cloning_an_agents_path_does_not_alias() {
    let template = path(&[0, 1, 2]);
    let mut a = Agent::new(1, "1", NodeId(0), template.clone(), NodeId(2), 1.3);
    let b = Agent::new(2, "1", NodeId(0), template.clone(), NodeId(2), 1.3);
    a.path.push(NodeId(3));
    assert_eq!(b.path, template, "mutating a's path must not affect b's");
}

#[test]
fn at_final_node() {
    let mut a = Agent::new(1, "1", NodeId(0), path(&[0, 1]), NodeId(1), 1.3);
    assert!(!a.at_final_node());
    a.pos_idx = 1;
    assert!(a.at_final_node());
}

#[test]
fn current_node_tracks_pos_idx() {
    let mut a = Agent::new(1, "1", NodeId(0), path(&[5, 6, 7]), NodeId(7), 1.3);
    assert_eq!(a.current_node(), Some(NodeId(5)));
    a.pos_idx = 2;
    assert_eq!(a.current_node(), Some(NodeId(7)));
}
