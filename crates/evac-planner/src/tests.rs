//! Unit tests for the graph builder and A* planner.
//!
//! All tests use hand-built buildings so they run without any document
//! fixture.

#[cfg(test)]
mod helpers {
    use evac_building::{Building, BuildingBuilder, Directionality, NodeType, OpenState};
    use evac_core::NodeId;

    /// `A − B − C` and `A − D − C`, each leg length 5, `C` is an exit.
    pub fn diamond() -> (Building, [NodeId; 4]) {
        let mut b = BuildingBuilder::new();
        let a = b.add_node("A", NodeType::Room, 2.0, 0.0, 0.0, "1", 0, OpenState::Open);
        let n_b = b.add_node("B", NodeType::Hall, 2.0, 1.0, 0.0, "1", 0, OpenState::Open);
        let c = b.add_node("C", NodeType::Exit, 2.0, 2.0, 0.0, "1", 0, OpenState::Open);
        let d = b.add_node("D", NodeType::Hall, 2.0, 1.0, 1.0, "1", 0, OpenState::Open);
        b.add_edge(a, n_b, Directionality::Bidirectional, 5.0, 1.0, 0.0, OpenState::Open);
        b.add_edge(n_b, c, Directionality::Bidirectional, 5.0, 1.0, 0.0, OpenState::Open);
        b.add_edge(a, d, Directionality::Bidirectional, 5.0, 1.0, 0.0, OpenState::Open);
        b.add_edge(d, c, Directionality::Bidirectional, 5.0, 1.0, 0.0, OpenState::Open);
        (b.build().unwrap(), [a, n_b, c, d])
    }

    /// Single bidirectional edge A-B, length 10.
    pub fn corridor() -> (Building, [NodeId; 2]) {
        let mut b = BuildingBuilder::new();
        let a = b.add_node("A", NodeType::Hall, 2.0, 0.0, 0.0, "1", 0, OpenState::Open);
        let exit = b.add_node("B", NodeType::Exit, 2.0, 10.0, 0.0, "1", 0, OpenState::Open);
        b.add_edge(a, exit, Directionality::Bidirectional, 10.0, 1.0, 0.0, OpenState::Open);
        (b.build().unwrap(), [a, exit])
    }
}

#[cfg(test)]
mod graph_builder {
    use super::helpers::diamond;
    use crate::graph::{CongestionSnapshot, PlannerConfig, ProjectedGraph};

    #[test]
    fn closed_node_removes_incident_edges() {
        let (mut b, [a, n_b, _c, _d]) = diamond();
        b.close_node(n_b);
        let graph = ProjectedGraph::build(&b, &PlannerConfig::default(), None);
        assert!(graph.neighbors(a).iter().all(|&(n, _)| n != n_b));
        assert!(graph.neighbors(n_b).is_empty());
    }

    #[test]
    fn closed_edge_is_invisible_even_with_open_endpoints() {
        let (mut b, [a, n_b, _c, _d]) = diamond();
        let eid = b
            .edges
            .iter()
            .position(|e| e.has_endpoint(a) && e.has_endpoint(n_b))
            .unwrap();
        b.edges[eid].state = evac_building::OpenState::Closed;
        let graph = ProjectedGraph::build(&b, &PlannerConfig::default(), None);
        assert!(graph.neighbors(a).iter().all(|&(n, _)| n != n_b));
    }

    #[test]
    fn reverse_congestion_falls_back_to_forward() {
        let (b, [a, n_b, ..]) = diamond();
        let mut congestion = CongestionSnapshot::new();
        congestion.insert((a, n_b), 4);
        let cfg = PlannerConfig { congestion_weight: 1.0, ..PlannerConfig::default() };
        let graph = ProjectedGraph::build(&b, &cfg, Some(&congestion));

        let forward_cost = graph.neighbors(a).iter().find(|&&(n, _)| n == n_b).unwrap().1;
        let reverse_cost = graph.neighbors(n_b).iter().find(|&&(n, _)| n == a).unwrap().1;
        assert_eq!(forward_cost, reverse_cost);
    }
}

#[cfg(test)]
mod planner {
    use super::helpers::{corridor, diamond};
    use crate::astar::{AStarPlanner, Planner};
    use crate::graph::{PlannerConfig, ProjectedGraph};
    use evac_building::BuildingBuilder;

    #[test]
    fn start_equals_goal() {
        let (b, [a, _exit]) = corridor();
        let graph = ProjectedGraph::build(&b, &PlannerConfig::default(), None);
        let path = AStarPlanner.plan(&graph, &b, a, a);
        assert_eq!(path, vec![a]);
    }

    #[test]
    fn finds_super_exit_via_nearest_exit() {
        let (b, [a, exit]) = corridor();
        let graph = ProjectedGraph::build(&b, &PlannerConfig::default(), None);
        let super_exit = b.super_exit();
        let path = AStarPlanner.plan(&graph, &b, a, super_exit);
        assert_eq!(path, vec![a, exit, super_exit]);
    }

    #[test]
    fn unreachable_goal_returns_empty() {
        let mut bb = BuildingBuilder::new();
        let a = bb.add_node("A", evac_building::NodeType::Room, 2.0, 0.0, 0.0, "1", 0, evac_building::OpenState::Open);
        let c = bb.add_node("C", evac_building::NodeType::Room, 2.0, 5.0, 0.0, "1", 0, evac_building::OpenState::Open);
        let b = bb.build().unwrap();
        let graph = ProjectedGraph::build(&b, &PlannerConfig::default(), None);
        let path = AStarPlanner.plan(&graph, &b, a, c);
        assert!(path.is_empty());
    }

    #[test]
    fn prefers_cheaper_route_around_closed_node() {
        let (mut b, [a, n_b, c, _d]) = diamond();
        b.close_node(n_b);
        let graph = ProjectedGraph::build(&b, &PlannerConfig::default(), None);
        let path = AStarPlanner.plan(&graph, &b, a, c);
        assert_eq!(path.first(), Some(&a));
        assert_eq!(path.last(), Some(&c));
        assert!(!path.contains(&n_b));
    }

    #[test]
    fn risk_weighted_route_avoids_high_risk_edge() {
        let (mut b, [a, n_b, c, d]) = diamond();
        // Raise risk on the A-B-C route so the D route is chosen instead.
        for e in &mut b.edges {
            if e.has_endpoint(a) && e.has_endpoint(n_b) {
                e.risk = 10.0;
            }
        }
        let cfg = PlannerConfig { risk_weight: 1.0, ..PlannerConfig::default() };
        let graph = ProjectedGraph::build(&b, &cfg, None);
        let path = AStarPlanner.plan(&graph, &b, a, c);
        assert_eq!(path, vec![a, d, c]);
    }
}
