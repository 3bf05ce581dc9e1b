//! Kruskal core library.
//!
//! An incremental minimum-spanning-tree engine for teaching Kruskal's
//! algorithm: a rank-and-compression [`DisjointSet`], the stable
//! ascending-weight [`EdgeOrder`], the step-addressable [`MstStepper`] that
//! derives every state by replay, and the [`GreedyValidator`] behind
//! [`PracticeSession`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod ordering;
mod practice;
mod stepper;
#[cfg(test)]
mod test_utils;
mod validator;

pub use crate::{
    disjoint_set::{DisjointSet, Representative},
    error::{
        DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, PracticeError,
        PracticeErrorCode, StepError, StepErrorCode, StepperError, StepperErrorCode,
        ValidationError, ValidationErrorCode,
    },
    graph::{Edge, EdgeId, EdgeSpec, Graph, GraphSpec, NodeId},
    ordering::{EdgeOrder, sort_edges},
    practice::{IgnoreReason, PracticeOutcome, PracticeSession, SessionStatus},
    stepper::{EdgeStatus, LogEntry, LogKind, MstStepper, Snapshot, StepReport},
    validator::{GreedyValidator, Verdict, validate_choice},
};
