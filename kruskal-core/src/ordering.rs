//! Processing order for Kruskal's walk.
//!
//! Edges are visited in ascending weight. The sort is stable, so equal weights
//! keep their input order and repeated sorts of the same graph agree.

use crate::graph::Edge;

/// Immutable ascending-weight order over a slice of edges.
///
/// The order stores input positions rather than copies so that statuses can
/// be reported against the caller's original edge list.
///
/// # Examples
/// ```
/// use kruskal_core::{EdgeOrder, EdgeSpec, Graph};
///
/// let graph = Graph::new(
///     ["A", "B", "C"],
///     [
///         EdgeSpec::new("A", "B", 7),
///         EdgeSpec::new("B", "C", 2),
///         EdgeSpec::new("A", "C", 7),
///     ],
/// )
/// .expect("graph is valid");
/// let order = EdgeOrder::new(graph.edges());
/// assert_eq!(order.positions(), &[1, 0, 2]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgeOrder {
    positions: Vec<usize>,
}

impl EdgeOrder {
    /// Sorts `edges` by ascending weight, keeping input order on ties.
    #[must_use]
    pub fn new(edges: &[Edge]) -> Self {
        let mut positions: Vec<usize> = (0..edges.len()).collect();
        positions.sort_by_key(|&position| edges.get(position).map(Edge::weight));
        Self { positions }
    }

    /// Input positions in processing order.
    #[must_use]
    #[rustfmt::skip]
    pub fn positions(&self) -> &[usize] { &self.positions }

    /// Number of edges in the order.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.positions.len() }

    /// Returns `true` when there is nothing to process.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.positions.is_empty() }

    /// Input position of the edge processed at `step`.
    #[must_use]
    pub fn position_at(&self, step: usize) -> Option<usize> {
        self.positions.get(step).copied()
    }

    /// Iterates `edges` in processing order.
    ///
    /// `edges` must be the slice this order was built from.
    pub fn iter<'a>(&'a self, edges: &'a [Edge]) -> impl Iterator<Item = &'a Edge> + 'a {
        self.positions
            .iter()
            .filter_map(move |&position| edges.get(position))
    }
}

/// Returns a copy of `edges` sorted by ascending weight, ties in input order.
#[must_use]
pub fn sort_edges(edges: &[Edge]) -> Vec<Edge> {
    EdgeOrder::new(edges).iter(edges).cloned().collect()
}
