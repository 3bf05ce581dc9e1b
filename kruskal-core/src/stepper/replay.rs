//! Replays a prefix of the sorted walk against a fresh disjoint set.
//!
//! Every stepper transition rebuilds its state here from `(order, processed)`
//! instead of patching the previous state, so statuses and weights cannot
//! drift from the union history.

use tracing::trace;

use crate::disjoint_set::DisjointSet;
use crate::error::StepperError;
use crate::graph::{Graph, NodeId};
use crate::ordering::EdgeOrder;

use super::types::{EdgeStatus, LogEntry};

/// State reached after visiting the first `processed` edges of the order.
pub(super) struct Replay {
    sets: DisjointSet<NodeId>,
    pub(super) processed: usize,
    pub(super) statuses: Vec<EdgeStatus>,
    pub(super) total_weight: u64,
    pub(super) accepted: Vec<usize>,
    pub(super) log: Vec<LogEntry>,
}

impl Replay {
    /// Builds a fresh disjoint set and visits the first `processed` edges.
    pub(super) fn run(
        graph: &Graph,
        order: &EdgeOrder,
        processed: usize,
    ) -> Result<Self, StepperError> {
        let mut replay = Self {
            sets: DisjointSet::new(graph.nodes().iter().cloned())?,
            processed: 0,
            statuses: vec![EdgeStatus::Default; graph.edge_count()],
            total_weight: 0,
            accepted: Vec::with_capacity(graph.spanning_tree_size()),
            log: Vec::with_capacity(processed),
        };
        while replay.processed < processed {
            replay.visit_next(graph, order)?;
        }
        Ok(replay)
    }

    /// Processes the next edge of the order and records its verdict.
    ///
    /// The cycle check is made with `find` before `union` materialises it; the
    /// two must agree.
    pub(super) fn visit_next(
        &mut self,
        graph: &Graph,
        order: &EdgeOrder,
    ) -> Result<LogEntry, StepperError> {
        let step = self.processed;
        let (position, edge) = order
            .position_at(step)
            .and_then(|position| graph.edges().get(position).map(|edge| (position, edge)))
            .ok_or(StepperError::MissingEdge { position: step })?;

        let predicted_cycle = self.sets.find(edge.source())? == self.sets.find(edge.target())?;
        let merged = self.sets.union(edge.source(), edge.target())?;
        // Unreachable while `find` and `union` share one forest.
        if merged == predicted_cycle {
            return Err(StepperError::PredictionMismatch {
                edge: edge.id().clone(),
                predicted_cycle,
            });
        }

        let status = if merged {
            self.total_weight = self.total_weight.saturating_add(u64::from(edge.weight()));
            self.accepted.push(position);
            EdgeStatus::Accepted
        } else {
            EdgeStatus::Rejected
        };
        if let Some(slot) = self.statuses.get_mut(position) {
            *slot = status;
        }
        trace!(step, edge = %edge.id(), %status, total = self.total_weight, "edge visited");

        let entry = LogEntry::for_verdict(edge, merged, self.total_weight);
        self.log.push(entry.clone());
        self.processed += 1;
        Ok(entry)
    }
}
