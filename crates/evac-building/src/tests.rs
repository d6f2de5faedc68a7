//! Unit tests for the building model.
//!
//! All tests use a hand-built building so they run without any document
//! fixture.

#[cfg(test)]
mod helpers {
    use crate::building::BuildingBuilder;
    use crate::node::{NodeType, OpenState};
    use crate::edge::Directionality;
    use evac_core::NodeId;

    /// A-B-C and A-D-C, each leg length 5, plus an exit at C.
    ///
    /// `A−B−C` and `A−D−C` are the two routes used by the "closed goal
    /// reachable via alternate" scenario.
    pub fn diamond() -> (crate::Building, [NodeId; 4]) {
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
}

#[cfg(test)]
mod builder {
    use crate::building::{BuildingBuilder, SUPER_EXIT_ID};
    use crate::node::{NodeType, OpenState};

    #[test]
    fn empty_builder_is_error() {
        assert!(BuildingBuilder::new().build().is_err());
    }

    #[test]
    fn super_exit_auto_wired_from_exits() {
        let mut b = BuildingBuilder::new();
        let exit = b.add_node("E1", NodeType::Exit, 2.0, 0.0, 0.0, "1", 0, OpenState::Open);
        let _room = b.add_node("R1", NodeType::Room, 2.0, 1.0, 0.0, "1", 0, OpenState::Open);
        let building = b.build().unwrap();

        let super_exit = building.node_id(SUPER_EXIT_ID).unwrap();
        assert_eq!(building.super_exit(), super_exit);

        let has_edge = building
            .edges
            .iter()
            .any(|e| e.node_a == exit && e.node_b == super_exit && e.length == 0.0);
        assert!(has_edge, "expected a zero-length edge from the exit to SUPER_EXIT");
    }

    #[test]
    fn existing_super_exit_is_not_duplicated() {
        let mut b = BuildingBuilder::new();
        b.add_node(SUPER_EXIT_ID, NodeType::Other("super_exit".into()), 1.0, 0.0, 0.0, "", 0, OpenState::Open);
        let building = b.build().unwrap();
        let count = building.nodes.iter().filter(|n| n.external_id == SUPER_EXIT_ID).count();
        assert_eq!(count, 1);
    }
}

#[cfg(test)]
mod close_node {
    use super::helpers::diamond;

    #[test]
    fn closes_incident_edges() {
        let (mut b, [_a, n_b, _c, _d]) = diamond();
        b.close_node(n_b);
        assert!(!b.is_node_open(n_b));
        for e in &b.edges {
            if e.has_endpoint(n_b) {
                assert!(!e.state.is_open());
            }
        }
    }
}

#[cfg(test)]
mod set_fire {
    use super::helpers::diamond;
    use crate::hazard::RiskMode;

    #[test]
    fn closes_the_node_and_raises_nearby_risk() {
        let (mut b, [a, n_b, _c, _d]) = diamond();
        b.set_fire(n_b, 10.0, 2, RiskMode::Max);
        assert!(!b.is_node_open(n_b));

        // The A-B edge has an endpoint (B) at distance 0, so it qualifies.
        let ab_risk = b
            .edges
            .iter()
            .find(|e| e.has_endpoint(a) && e.has_endpoint(n_b))
            .unwrap()
            .risk;
        assert_eq!(ab_risk, 10.0);
    }

    #[test]
    fn add_mode_accumulates() {
        let (mut b, [_a, n_b, _c, _d]) = diamond();
        b.set_fire(n_b, 3.0, 1, RiskMode::Add);
        b.set_fire(n_b, 4.0, 1, RiskMode::Add);
        let risk = b.edges.iter().find(|e| e.has_endpoint(n_b)).unwrap().risk;
        assert_eq!(risk, 7.0);
    }

    #[test]
    fn hops_zero_only_touches_incident_edges() {
        let (mut b, [a, n_b, c, d]) = diamond();
        b.set_fire(n_b, 5.0, 0, RiskMode::Max);
        // D-C does not touch B and is more than 0 hops away.
        let dc_risk = b
            .edges
            .iter()
            .find(|e| e.has_endpoint(d) && e.has_endpoint(c))
            .unwrap()
            .risk;
        assert_eq!(dc_risk, 0.0);
        let _ = a;
    }
}

#[cfg(test)]
mod dynamics {
    use crate::building::BuildingBuilder;
    use crate::dynamics::NodeDynamicsTable;
    use crate::node::{NodeType, OpenState};

    #[test]
    fn known_types_scale_by_width() {
        let mut b = BuildingBuilder::new();
        let door = b.add_node("D1", NodeType::Door, 1.5, 0.0, 0.0, "1", 0, OpenState::Open);
        let room = b.add_node("R1", NodeType::Room, 3.0, 1.0, 0.0, "1", 0, OpenState::Open);
        let building = b.build().unwrap();
        let table = NodeDynamicsTable::from_building(&building);
        assert_eq!(table.service_rate(door), 1.2 * 1.5);
        assert!(table.service_rate(room).is_infinite());
    }

    #[test]
    fn scale_service_rate_multiplies() {
        let mut b = BuildingBuilder::new();
        let door = b.add_node("D1", NodeType::Door, 1.0, 0.0, 0.0, "1", 0, OpenState::Open);
        let building = b.build().unwrap();
        let mut table = NodeDynamicsTable::from_building(&building);
        let before = table.service_rate(door);
        table.scale_service_rate(door, 0.5);
        assert_eq!(table.service_rate(door), before * 0.5);
    }
}

#[cfg(test)]
mod directed_lengths {
    use super::helpers::diamond;

    #[test]
    fn bidirectional_edges_appear_both_ways() {
        let (b, [a, n_b, _c, _d]) = diamond();
        let map = b.directed_edge_lengths();
        assert_eq!(map[&(a, n_b)], 5.0);
        assert_eq!(map[&(n_b, a)], 5.0);
    }
}
