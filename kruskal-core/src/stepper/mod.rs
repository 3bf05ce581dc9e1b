//! Step-addressable replay of Kruskal's algorithm.
//!
//! [`MstStepper`] walks the ascending-weight order one edge at a time. The
//! step index is the only authoritative state: every transition, forward or
//! backward, rebuilds statuses and the accepted weight from scratch by
//! replaying the processed prefix against a fresh [`crate::DisjointSet`].
//! Graphs here hold tens of edges, so the O(step) replay is negligible.

mod replay;
mod types;

use tracing::{Span, debug, field, instrument};

use crate::error::StepError;
use crate::graph::{Edge, EdgeId, Graph};
use crate::ordering::EdgeOrder;

use self::replay::Replay;
pub use self::types::{EdgeStatus, LogEntry, LogKind, Snapshot, StepReport};

/// Interactive Kruskal walk over an immutable graph.
///
/// # Examples
/// ```
/// use kruskal_core::{EdgeSpec, EdgeStatus, Graph, MstStepper, StepError};
///
/// let graph = Graph::new(
///     ["A", "B", "C"],
///     [
///         EdgeSpec::new("A", "B", 1),
///         EdgeSpec::new("B", "C", 2),
///         EdgeSpec::new("A", "C", 3),
///     ],
/// )
/// .expect("graph is valid");
/// let mut stepper = MstStepper::new(graph);
///
/// stepper.step_forward().expect("first edge");
/// stepper.step_forward().expect("second edge");
/// let report = stepper.step_forward().expect("third edge");
/// assert_eq!(report.total_weight(), 3);
/// assert_eq!(report.statuses()[2], EdgeStatus::Rejected);
/// assert_eq!(stepper.step_forward(), Err(StepError::AtEnd));
///
/// stepper.step_backward().expect("can retreat");
/// assert_eq!(stepper.statuses()[2], EdgeStatus::Default);
/// ```
#[derive(Clone, Debug)]
pub struct MstStepper {
    graph: Graph,
    order: EdgeOrder,
    processed: usize,
    statuses: Vec<EdgeStatus>,
    total_weight: u64,
    accepted: Vec<usize>,
    log: Vec<LogEntry>,
}

impl MstStepper {
    /// Sorts the graph's edges once and positions the walk before the first
    /// edge.
    #[must_use]
    pub fn new(graph: Graph) -> Self {
        let order = EdgeOrder::new(graph.edges());
        let statuses = vec![EdgeStatus::Default; graph.edge_count()];
        Self {
            graph,
            order,
            processed: 0,
            statuses,
            total_weight: 0,
            accepted: Vec::new(),
            log: Vec::new(),
        }
    }

    /// Processes the next edge in ascending-weight order.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::AtEnd`] once every edge has been processed, and
    /// [`StepError::Replay`] if replaying the walk fails.
    #[instrument(
        name = "core.step_forward",
        level = "debug",
        err,
        skip(self),
        fields(step = field::Empty, edge = field::Empty, verdict = field::Empty),
    )]
    pub fn step_forward(&mut self) -> Result<StepReport, StepError> {
        if self.processed >= self.order.len() {
            return Err(StepError::AtEnd);
        }

        let mut replay = Replay::run(&self.graph, &self.order, self.processed)?;
        let entry = replay.visit_next(&self.graph, &self.order)?;

        let span = Span::current();
        span.record("step", self.processed);
        span.record("edge", field::display(entry.edge()));
        span.record("verdict", field::debug(entry.kind()));

        self.install_derived(replay);
        self.log.push(entry.clone());
        Ok(self.report(entry))
    }

    /// Retracts the most recently processed edge.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::AtStart`] before the first step, and
    /// [`StepError::Replay`] if replaying the walk fails.
    #[instrument(
        name = "core.step_backward",
        level = "debug",
        err,
        skip(self),
        fields(step = field::Empty),
    )]
    pub fn step_backward(&mut self) -> Result<StepReport, StepError> {
        let Some(target) = self.processed.checked_sub(1) else {
            return Err(StepError::AtStart);
        };

        let replay = Replay::run(&self.graph, &self.order, target)?;
        let entry = self.log.pop().ok_or(StepError::AtStart)?;
        self.install_derived(replay);
        Span::current().record("step", field::debug(self.step_index()));
        Ok(self.report(entry))
    }

    /// Returns the walk to its unstarted state without re-sorting.
    pub fn reset(&mut self) {
        self.processed = 0;
        self.statuses.fill(EdgeStatus::Default);
        self.total_weight = 0;
        self.accepted.clear();
        self.log.clear();
        debug!("stepper reset");
    }

    /// Jumps straight to `step_index`, or to the unstarted state for `None`.
    ///
    /// The full state, log included, is rebuilt by replay, so the result is
    /// identical to stepping there one edge at a time.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::OutOfRange`] when `step_index` is past the last
    /// edge, and [`StepError::Replay`] if replaying the walk fails.
    #[instrument(name = "core.seek", level = "debug", err, skip(self))]
    pub fn seek(&mut self, step_index: Option<usize>) -> Result<Snapshot, StepError> {
        let edge_count = self.order.len();
        let processed = match step_index {
            None => 0,
            Some(requested) if requested < edge_count => requested + 1,
            Some(requested) => {
                return Err(StepError::OutOfRange {
                    requested,
                    edge_count,
                });
            }
        };

        let mut replay = Replay::run(&self.graph, &self.order, processed)?;
        self.log = std::mem::take(&mut replay.log);
        self.install_derived(replay);
        Ok(self.snapshot())
    }

    /// Steps forward until [`StepError::AtEnd`], returning the number of
    /// steps taken.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Replay`] if replaying the walk fails.
    pub fn run_to_end(&mut self) -> Result<usize, StepError> {
        let mut steps = 0;
        loop {
            match self.step_forward() {
                Ok(_) => steps += 1,
                Err(StepError::AtEnd) => return Ok(steps),
                Err(err) => return Err(err),
            }
        }
    }

    /// The graph being walked.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// The ascending-weight processing order.
    #[must_use]
    #[rustfmt::skip]
    pub fn order(&self) -> &EdgeOrder { &self.order }

    /// Index of the last processed edge; `None` before the first step.
    #[must_use]
    pub fn step_index(&self) -> Option<usize> {
        self.processed.checked_sub(1)
    }

    /// Sum of accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> u64 { self.total_weight }

    /// Per-edge statuses in graph input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn statuses(&self) -> &[EdgeStatus] { &self.statuses }

    /// Status of a single edge, `None` for ids outside the graph.
    #[must_use]
    pub fn status(&self, id: &EdgeId) -> Option<EdgeStatus> {
        self.graph
            .position(id)
            .and_then(|position| self.statuses.get(position).copied())
    }

    /// Edges in graph input order paired with their current status.
    pub fn edges(&self) -> impl Iterator<Item = (&Edge, EdgeStatus)> + '_ {
        self.graph.edges().iter().zip(self.statuses.iter().copied())
    }

    /// Edges in processing order paired with their current status.
    pub fn sorted_edges(&self) -> impl Iterator<Item = (&Edge, EdgeStatus)> + '_ {
        self.order.positions().iter().filter_map(|&position| {
            let edge = self.graph.edges().get(position)?;
            let status = self.statuses.get(position).copied()?;
            Some((edge, status))
        })
    }

    /// The edge the next [`Self::step_forward`] will process.
    #[must_use]
    pub fn peek_next(&self) -> Option<&Edge> {
        self.order
            .position_at(self.processed)
            .and_then(|position| self.graph.edges().get(position))
    }

    /// Accepted edges in acceptance order.
    pub fn accepted_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.accepted
            .iter()
            .filter_map(|&position| self.graph.edges().get(position))
    }

    /// Number of accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn accepted_count(&self) -> usize { self.accepted.len() }

    /// Returns `true` once `n - 1` edges are accepted.
    ///
    /// The walk carries on past this point, rejecting every remaining edge.
    #[must_use]
    pub fn is_tree_complete(&self) -> bool {
        self.accepted.len() == self.graph.spanning_tree_size()
    }

    /// Returns `true` when every edge has been processed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.processed == self.order.len()
    }

    /// Verdict log, most recent first.
    pub fn log(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.log.iter().rev()
    }

    /// The most recent log entry.
    #[must_use]
    pub fn latest_entry(&self) -> Option<&LogEntry> {
        self.log.last()
    }

    /// Owned copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            step_index: self.step_index(),
            total_weight: self.total_weight,
            statuses: self.statuses.clone(),
            log: self.log().cloned().collect(),
        }
    }

    fn install_derived(&mut self, replay: Replay) {
        self.processed = replay.processed;
        self.statuses = replay.statuses;
        self.total_weight = replay.total_weight;
        self.accepted = replay.accepted;
    }

    fn report(&self, entry: LogEntry) -> StepReport {
        StepReport {
            step_index: self.step_index(),
            total_weight: self.total_weight,
            statuses: self.statuses.clone(),
            entry,
        }
    }
}

#[cfg(test)]
mod property;
