//! Sequential Kruskal oracle for property verification.
//!
//! A deliberately plain reference implementation: index-based parents, no
//! ranks, and a `(weight, input position)` sort that matches the stable
//! ascending order the stepper walks.

use std::collections::HashMap;

use crate::graph::Graph;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct OracleResult {
    /// `true` per input position when the edge joins the forest.
    pub accepted: Vec<bool>,
    /// Input positions in the order Kruskal visits them.
    pub visit_order: Vec<usize>,
    /// Sum of accepted weights.
    pub total_weight: u64,
    /// Number of accepted edges.
    pub edge_count: usize,
    /// Number of connected components of the resulting forest.
    pub component_count: usize,
}

/// Computes a minimum spanning forest of `graph`.
pub(crate) fn sequential_kruskal(graph: &Graph) -> OracleResult {
    let node_index: HashMap<_, _> = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(index, node)| (node.clone(), index))
        .collect();

    let mut visit_order: Vec<usize> = (0..graph.edge_count()).collect();
    visit_order.sort_by_key(|&position| (graph.edges()[position].weight(), position));

    let mut parent: Vec<usize> = (0..graph.node_count()).collect();
    let mut accepted = vec![false; graph.edge_count()];
    let mut total_weight = 0_u64;
    let mut edge_count = 0;

    for &position in &visit_order {
        let edge = &graph.edges()[position];
        let left = find_root(&mut parent, node_index[edge.source()]);
        let right = find_root(&mut parent, node_index[edge.target()]);
        if left != right {
            parent[right] = left;
            accepted[position] = true;
            total_weight += u64::from(edge.weight());
            edge_count += 1;
        }
    }

    OracleResult {
        accepted,
        visit_order,
        total_weight,
        edge_count,
        component_count: graph.node_count() - edge_count,
    }
}

/// Path-halving find used by the oracle and by reachability checks.
pub(crate) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::sequential_kruskal;
    use crate::graph::{EdgeSpec, Graph};
    use crate::test_utils::scenario_graph;

    #[test]
    fn oracle_solves_the_scenario() {
        let result = sequential_kruskal(&scenario_graph());
        assert_eq!(result.total_weight, 19);
        assert_eq!(result.edge_count, 3);
        assert_eq!(result.component_count, 1);
        assert_eq!(result.accepted, [true, false, true, false, true]);
        assert_eq!(result.visit_order, [4, 2, 1, 0, 3]);
    }

    #[rstest]
    #[case::triangle(
        3,
        vec![("n0", "n1", 1), ("n1", "n2", 2), ("n0", "n2", 3)],
        3,
        1
    )]
    #[case::disconnected_pair(5, vec![("n0", "n1", 1), ("n2", "n3", 2)], 3, 3)]
    #[case::single_node(1, vec![], 0, 1)]
    #[case::equal_weights(
        3,
        vec![("n0", "n1", 1), ("n0", "n2", 1), ("n1", "n2", 1)],
        2,
        1
    )]
    fn oracle_handles_small_graphs(
        #[case] nodes: usize,
        #[case] edges: Vec<(&str, &str, u32)>,
        #[case] expected_weight: u64,
        #[case] expected_components: usize,
    ) {
        let graph = Graph::new(
            (0..nodes).map(|index| format!("n{index}")),
            edges
                .into_iter()
                .map(|(source, target, weight)| EdgeSpec::new(source, target, weight)),
        )
        .expect("graph is valid");
        let result = sequential_kruskal(&graph);
        assert_eq!(result.total_weight, expected_weight);
        assert_eq!(result.component_count, expected_components);
    }
}
