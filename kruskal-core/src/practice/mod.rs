//! Practice mode: the user builds the MST by picking edges one at a time.
//!
//! Each pick is judged by [`crate::GreedyValidator`] against the forest the
//! user has accepted so far. Accepted picks join the forest; rejected picks
//! leave it untouched. The session is won once `n - 1` edges are accepted.

use tracing::{Span, debug, field, instrument};

use crate::error::PracticeError;
use crate::graph::{Edge, EdgeId, Graph};
use crate::validator::{GreedyValidator, Verdict};

/// Whether the session still accepts picks.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SessionStatus {
    /// Picks are being judged.
    #[default]
    Playing,
    /// The spanning tree is complete.
    Won,
}

/// Why a pick was ignored without being judged.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IgnoreReason {
    /// The session is already won.
    AlreadyWon,
    /// The edge is already part of the user's forest.
    AlreadySelected,
}

/// Result of a single pick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PracticeOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The validator refused the pick; never [`Verdict::Accept`].
    Rejected(Verdict),
    /// The pick joined the forest.
    Accepted {
        /// Accepted weight after the pick.
        total_weight: u64,
        /// `true` when this pick completed the spanning tree.
        won: bool,
    },
}

/// A practice round over one graph.
#[derive(Clone, Debug)]
pub struct PracticeSession {
    graph: Graph,
    selected: Vec<EdgeId>,
    total_weight: u64,
    status: SessionStatus,
}

impl PracticeSession {
    /// Starts a round with an empty forest.
    #[must_use]
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            selected: Vec::new(),
            total_weight: 0,
            status: SessionStatus::Playing,
        }
    }

    /// Judges a pick and applies it when accepted.
    ///
    /// # Errors
    ///
    /// Returns [`PracticeError::UnknownEdge`] when `edge` is not part of the
    /// graph, and [`PracticeError::Validation`] if the validator fails.
    #[instrument(
        name = "core.practice.select",
        level = "debug",
        err,
        skip(self),
        fields(edge = %edge, outcome = field::Empty),
    )]
    pub fn select(&mut self, edge: &EdgeId) -> Result<PracticeOutcome, PracticeError> {
        let weight = self
            .graph
            .edge(edge)
            .map(Edge::weight)
            .ok_or_else(|| PracticeError::UnknownEdge { edge: edge.clone() })?;

        let outcome = if self.status == SessionStatus::Won {
            PracticeOutcome::Ignored(IgnoreReason::AlreadyWon)
        } else if self.selected.contains(edge) {
            PracticeOutcome::Ignored(IgnoreReason::AlreadySelected)
        } else {
            let verdict = GreedyValidator::new(&self.graph, &self.selected)?.judge(edge)?;
            if verdict.is_accept() {
                self.accept(edge.clone(), weight)
            } else {
                PracticeOutcome::Rejected(verdict)
            }
        };

        Span::current().record("outcome", field::debug(outcome));
        Ok(outcome)
    }

    /// Clears the forest and resumes play.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.total_weight = 0;
        self.status = SessionStatus::Playing;
        debug!("practice session reset");
    }

    /// The graph being practised on.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Accepted edge ids in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn selected(&self) -> &[EdgeId] { &self.selected }

    /// Returns `true` when `edge` is part of the user's forest.
    #[must_use]
    pub fn is_selected(&self, edge: &EdgeId) -> bool {
        self.selected.contains(edge)
    }

    /// Sum of accepted weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> u64 { self.total_weight }

    /// Current session status.
    #[must_use]
    #[rustfmt::skip]
    pub fn status(&self) -> SessionStatus { self.status }

    /// `(accepted, required)` edge counts, where `required` is `n - 1`.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.selected.len(), self.graph.spanning_tree_size())
    }

    fn accept(&mut self, edge: EdgeId, weight: u32) -> PracticeOutcome {
        self.selected.push(edge);
        self.total_weight += u64::from(weight);
        let won = self.selected.len() == self.graph.spanning_tree_size();
        if won {
            self.status = SessionStatus::Won;
            debug!(total_weight = self.total_weight, "spanning tree complete");
        }
        PracticeOutcome::Accepted {
            total_weight: self.total_weight,
            won,
        }
    }
}
