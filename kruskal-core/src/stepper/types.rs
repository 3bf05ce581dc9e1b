//! Value types reported by the stepper.

use std::fmt;

use crate::graph::{Edge, EdgeId};

/// Processing state of a single edge.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EdgeStatus {
    /// Not yet visited by the walk.
    #[default]
    Default,
    /// Visited and added to the spanning forest.
    Accepted,
    /// Visited and skipped because it would close a cycle.
    Rejected,
}

impl EdgeStatus {
    /// Returns the lowercase label used in logs and renderings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for EdgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a [`LogEntry`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LogKind {
    /// The edge was accepted.
    Success,
    /// The edge was rejected.
    Error,
}

/// Human-readable verdict for one processed edge.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    message: String,
    kind: LogKind,
    edge: EdgeId,
}

impl LogEntry {
    pub(super) fn for_verdict(edge: &Edge, accepted: bool, total_weight: u64) -> Self {
        let (kind, message) = if accepted {
            (
                LogKind::Success,
                format!(
                    "{} accepted (weight {}): no cycle formed, total {total_weight}",
                    edge.label(),
                    edge.weight(),
                ),
            )
        } else {
            (
                LogKind::Error,
                format!(
                    "{} rejected (weight {}): would close a cycle, total {total_weight}",
                    edge.label(),
                    edge.weight(),
                ),
            )
        };
        Self {
            message,
            kind,
            edge: edge.id().clone(),
        }
    }

    /// Returns the rendered message.
    #[must_use]
    #[rustfmt::skip]
    pub fn message(&self) -> &str { &self.message }

    /// Returns whether the entry records an acceptance or a rejection.
    #[must_use]
    #[rustfmt::skip]
    pub fn kind(&self) -> LogKind { self.kind }

    /// Returns the id of the edge the entry describes.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge(&self) -> &EdgeId { &self.edge }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of a single forward or backward transition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StepReport {
    pub(super) step_index: Option<usize>,
    pub(super) total_weight: u64,
    pub(super) statuses: Vec<EdgeStatus>,
    pub(super) entry: LogEntry,
}

impl StepReport {
    /// Step index after the transition; `None` means the walk is unstarted.
    #[must_use]
    #[rustfmt::skip]
    pub fn step_index(&self) -> Option<usize> { self.step_index }

    /// Accepted weight after the transition.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> u64 { self.total_weight }

    /// Per-edge statuses after the transition, in graph input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn statuses(&self) -> &[EdgeStatus] { &self.statuses }

    /// The entry appended by a forward step, or retracted by a backward step.
    #[must_use]
    #[rustfmt::skip]
    pub fn entry(&self) -> &LogEntry { &self.entry }
}

/// Owned copy of the full observable stepper state.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Index of the last processed edge; `None` before the first step.
    pub step_index: Option<usize>,
    /// Sum of accepted weights.
    pub total_weight: u64,
    /// Per-edge statuses in graph input order.
    pub statuses: Vec<EdgeStatus>,
    /// Verdict log, most recent first.
    pub log: Vec<LogEntry>,
}
