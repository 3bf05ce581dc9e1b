//! Greedy-rule enforcement for practice mode.
//!
//! [`GreedyValidator`] rebuilds the user's partial forest from the accepted
//! edge ids and judges a candidate against Kruskal's greedy rule: it must not
//! close a cycle, and no strictly cheaper legal edge may remain. Any legal
//! edge that ties the minimum weight is accepted.

use std::collections::HashSet;
use std::fmt;

use tracing::{Span, field, instrument, trace};

use crate::disjoint_set::DisjointSet;
use crate::error::ValidationError;
use crate::graph::{Edge, EdgeId, Graph, NodeId};

/// Outcome of judging a candidate edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verdict {
    /// The candidate is a valid next greedy choice.
    Accept,
    /// Both endpoints already share a tree.
    RejectCycle,
    /// A legal edge of `min_weight` is strictly cheaper than the candidate.
    RejectNotCheapest {
        /// Weight of the cheapest legal edge.
        min_weight: u32,
    },
}

impl Verdict {
    /// Returns `true` for [`Verdict::Accept`].
    #[must_use]
    pub const fn is_accept(self) -> bool {
        matches!(self, Self::Accept)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accept => f.write_str("correct choice"),
            Self::RejectCycle => f.write_str("this edge would close a cycle"),
            Self::RejectNotCheapest { min_weight } => {
                write!(f, "a cheaper legal edge of weight {min_weight} exists")
            }
        }
    }
}

/// A partial forest rebuilt from accepted edge ids.
///
/// The disjoint set is built once; every query afterwards is find-only, so
/// judging several candidates against the same forest is consistent. Queries
/// take `&mut self` because `find` compresses paths.
#[derive(Debug)]
pub struct GreedyValidator<'g> {
    graph: &'g Graph,
    sets: DisjointSet<NodeId>,
    accepted: HashSet<usize>,
}

impl<'g> GreedyValidator<'g> {
    /// Unions every accepted edge into a fresh forest over the graph's nodes.
    ///
    /// Repeated ids are harmless: the second union is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownEdge`] when an accepted id is not an
    /// edge of `graph`.
    pub fn new<'a, I>(graph: &'g Graph, accepted: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = &'a EdgeId>,
    {
        let mut sets = DisjointSet::new(graph.nodes().iter().cloned())?;
        let mut positions = HashSet::new();
        for id in accepted {
            let (position, edge) = lookup(graph, id)?;
            sets.union(edge.source(), edge.target())?;
            positions.insert(position);
        }
        Ok(Self {
            graph,
            sets,
            accepted: positions,
        })
    }

    /// Judges `candidate` against the greedy rule.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownEdge`] when `candidate` is not an
    /// edge of the graph.
    pub fn judge(&mut self, candidate: &EdgeId) -> Result<Verdict, ValidationError> {
        let (_, edge) = lookup(self.graph, candidate)?;
        if self.sets.connected(edge.source(), edge.target())? {
            return Ok(Verdict::RejectCycle);
        }

        let min_weight = self
            .min_legal_weight()?
            .map_or(edge.weight(), |min| min.min(edge.weight()));
        if edge.weight() > min_weight {
            Ok(Verdict::RejectNotCheapest { min_weight })
        } else {
            Ok(Verdict::Accept)
        }
    }

    /// Edges outside the forest whose endpoints lie in different trees.
    ///
    /// # Errors
    ///
    /// Propagates disjoint-set lookups, which cannot fail for a validated
    /// [`Graph`].
    pub fn legal_edges(&mut self) -> Result<Vec<&'g Edge>, ValidationError> {
        let mut legal = Vec::new();
        for (position, edge) in self.graph.edges().iter().enumerate() {
            if self.accepted.contains(&position) {
                continue;
            }
            if !self.sets.connected(edge.source(), edge.target())? {
                legal.push(edge);
            }
        }
        Ok(legal)
    }

    /// Weight of the cheapest legal edge; `None` once the forest spans every
    /// component.
    ///
    /// # Errors
    ///
    /// Propagates disjoint-set lookups, which cannot fail for a validated
    /// [`Graph`].
    pub fn min_legal_weight(&mut self) -> Result<Option<u32>, ValidationError> {
        Ok(self.legal_edges()?.into_iter().map(Edge::weight).min())
    }

    /// Number of distinct accepted edges.
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}

/// Judges `candidate` given the ids the user has already accepted.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownEdge`] when `candidate` or an accepted id
/// is not an edge of `graph`.
///
/// # Examples
/// ```
/// use kruskal_core::{EdgeId, EdgeSpec, Graph, Verdict, validate_choice};
///
/// let graph = Graph::new(
///     ["A", "B", "C", "D"],
///     [
///         EdgeSpec::new("A", "B", 10),
///         EdgeSpec::new("A", "C", 6),
///         EdgeSpec::new("A", "D", 5),
///         EdgeSpec::new("B", "D", 15),
///         EdgeSpec::new("C", "D", 4),
///     ],
/// )
/// .expect("graph is valid");
/// let accepted = [EdgeId::from("e-C-D")];
///
/// let verdict = validate_choice(&graph, &accepted, &EdgeId::from("e-A-C"))
///     .expect("ids are known");
/// assert_eq!(verdict, Verdict::RejectNotCheapest { min_weight: 5 });
/// ```
#[instrument(
    name = "core.validate",
    level = "debug",
    err,
    skip(graph, accepted),
    fields(candidate = %candidate, verdict = field::Empty),
)]
pub fn validate_choice<'a, I>(
    graph: &Graph,
    accepted: I,
    candidate: &EdgeId,
) -> Result<Verdict, ValidationError>
where
    I: IntoIterator<Item = &'a EdgeId>,
{
    let mut validator = GreedyValidator::new(graph, accepted)?;
    let verdict = validator.judge(candidate)?;
    Span::current().record("verdict", field::debug(verdict));
    trace!(accepted = validator.accepted_count(), "candidate judged");
    Ok(verdict)
}

fn lookup<'g>(graph: &'g Graph, id: &EdgeId) -> Result<(usize, &'g Edge), ValidationError> {
    graph
        .position(id)
        .and_then(|position| Some((position, graph.edges().get(position)?)))
        .ok_or_else(|| ValidationError::UnknownEdge { edge: id.clone() })
}
