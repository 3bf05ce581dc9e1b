//! Property-based tests for the step-addressable Kruskal walk.
//!
//! Checks the walk against a sequential oracle, and checks that stepping
//! backward, seeking and stepping forward all land on the same state for
//! every step index across graphs with varied weight distributions.

mod equivalence;
mod navigation;
