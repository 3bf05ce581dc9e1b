//! Error types for the Kruskal stepper core.
//!
//! Each concern gets its own error enum plus a companion code enum carrying a
//! stable machine-readable identifier for logs and UI surfaces.

use std::fmt;

use thiserror::Error;

use crate::graph::{EdgeId, NodeId};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors raised by [`crate::DisjointSet`].
///
/// Both variants indicate a caller bug: a [`crate::Graph`] never hands the
/// structure ids outside its own node list.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The universe passed to the constructor listed an element twice.
    #[error("element `{element}` appears more than once in the universe")]
    DuplicateElement {
        /// Rendered form of the repeated element.
        element: String,
    },
    /// `find` or `union` was called with an element outside the universe.
    #[error("element `{element}` is not part of this disjoint set")]
    UnknownElement {
        /// Rendered form of the unknown element.
        element: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The universe listed an element twice.
        DuplicateElement => DuplicateElement { .. } => "DISJOINT_SET_DUPLICATE_ELEMENT",
        /// An element outside the universe was queried.
        UnknownElement => UnknownElement { .. } => "DISJOINT_SET_UNKNOWN_ELEMENT",
    }
}

/// Errors raised while validating graph input at construction time.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The node list contained the same id twice.
    #[error("node `{node}` is declared more than once")]
    DuplicateNode {
        /// The repeated node id.
        node: NodeId,
    },
    /// An edge referenced a node that is not in the node list.
    #[error("edge `{edge}` references unknown node `{node}`")]
    UnknownEndpoint {
        /// Id the offending edge would have carried.
        edge: EdgeId,
        /// The endpoint missing from the node list.
        node: NodeId,
    },
    /// Two edges shared the same ordered endpoint pair.
    #[error("edge `{edge}` is declared more than once")]
    DuplicateEdge {
        /// The repeated edge id.
        edge: EdgeId,
    },
    /// An edge connected a node to itself.
    #[error("edge `{edge}` is a self-loop on `{node}`")]
    SelfLoop {
        /// Id the offending edge would have carried.
        edge: EdgeId,
        /// The node at both ends.
        node: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The node list contained the same id twice.
        DuplicateNode => DuplicateNode { .. } => "GRAPH_DUPLICATE_NODE",
        /// An edge referenced a node that is not in the node list.
        UnknownEndpoint => UnknownEndpoint { .. } => "GRAPH_UNKNOWN_ENDPOINT",
        /// Two edges shared the same ordered endpoint pair.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// An edge connected a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
    }
}

/// Boundary signals returned when the stepper cannot move.
///
/// These are expected outcomes; a UI typically disables the matching control.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StepError {
    /// Every edge has already been processed.
    #[error("the walk is already at its last edge")]
    AtEnd,
    /// No edge has been processed yet.
    #[error("the walk has not started")]
    AtStart,
    /// `seek` was asked for a step past the last edge.
    #[error("step {requested} is out of range for {edge_count} edges")]
    OutOfRange {
        /// The step index requested by the caller.
        requested: usize,
        /// Number of edges in the walk.
        edge_count: usize,
    },
    /// Replay failed; see [`StepperError`].
    #[error(transparent)]
    Replay {
        /// Underlying replay failure.
        #[from]
        source: StepperError,
    },
}

define_error_codes! {
    /// Stable codes describing [`StepError`] variants.
    enum StepErrorCode for StepError {
        /// Every edge has already been processed.
        AtEnd => AtEnd => "STEP_AT_END",
        /// No edge has been processed yet.
        AtStart => AtStart => "STEP_AT_START",
        /// `seek` target past the last edge.
        OutOfRange => OutOfRange { .. } => "STEP_OUT_OF_RANGE",
        /// Replay failed.
        Replay => Replay { .. } => "STEP_REPLAY_FAILED",
    }
}

/// Internal failures while replaying the sorted walk.
///
/// None of these are reachable through a validated [`crate::Graph`]; they
/// exist so a logic error surfaces as a value instead of a panic.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StepperError {
    /// The disjoint set rejected an endpoint.
    #[error(transparent)]
    DisjointSet {
        /// Underlying disjoint-set failure.
        #[from]
        source: DisjointSetError,
    },
    /// A `union` disagreed with the cycle prediction made by `find`.
    #[error("union of `{edge}` disagreed with the find prediction (predicted cycle: {predicted_cycle})")]
    PredictionMismatch {
        /// Edge being processed.
        edge: EdgeId,
        /// Whether `find` reported both endpoints in the same set.
        predicted_cycle: bool,
    },
    /// A sorted position did not resolve to an edge of the graph.
    #[error("sorted position {position} does not resolve to an edge")]
    MissingEdge {
        /// Offending position in the sorted order.
        position: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`StepperError`] variants.
    enum StepperErrorCode for StepperError {
        /// The disjoint set rejected an endpoint.
        DisjointSet => DisjointSet { .. } => "STEPPER_DISJOINT_SET",
        /// A `union` disagreed with its `find` prediction.
        PredictionMismatch => PredictionMismatch { .. } => "STEPPER_PREDICTION_MISMATCH",
        /// A sorted position did not resolve to an edge.
        MissingEdge => MissingEdge { .. } => "STEPPER_MISSING_EDGE",
    }
}

/// Errors raised by [`crate::validate_choice`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
    /// The candidate or an accepted id is not an edge of the graph.
    #[error("edge `{edge}` is not part of the graph")]
    UnknownEdge {
        /// The unknown edge id.
        edge: EdgeId,
    },
    /// The disjoint set rejected an endpoint.
    #[error(transparent)]
    DisjointSet {
        /// Underlying disjoint-set failure.
        #[from]
        source: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`ValidationError`] variants.
    enum ValidationErrorCode for ValidationError {
        /// The candidate or an accepted id is not an edge of the graph.
        UnknownEdge => UnknownEdge { .. } => "VALIDATION_UNKNOWN_EDGE",
        /// The disjoint set rejected an endpoint.
        DisjointSet => DisjointSet { .. } => "VALIDATION_DISJOINT_SET",
    }
}

/// Errors raised by [`crate::PracticeSession`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PracticeError {
    /// The clicked id is not an edge of the session's graph.
    #[error("edge `{edge}` is not part of the practice graph")]
    UnknownEdge {
        /// The unknown edge id.
        edge: EdgeId,
    },
    /// The validator failed.
    #[error(transparent)]
    Validation {
        /// Underlying validator failure.
        #[from]
        source: ValidationError,
    },
}

define_error_codes! {
    /// Stable codes describing [`PracticeError`] variants.
    enum PracticeErrorCode for PracticeError {
        /// The clicked id is not an edge of the session's graph.
        UnknownEdge => UnknownEdge { .. } => "PRACTICE_UNKNOWN_EDGE",
        /// The validator failed.
        Validation => Validation { .. } => "PRACTICE_VALIDATION_FAILED",
    }
}

impl PracticeError {
    /// Retrieve the inner [`ValidationErrorCode`] when the validator failed.
    #[must_use]
    pub const fn validation_code(&self) -> Option<ValidationErrorCode> {
        match self {
            Self::Validation { source } => Some(source.code()),
            Self::UnknownEdge { .. } => None,
        }
    }
}
