//! Oracle equivalence for a full walk.
//!
//! For any generated graph, a complete walk must accept exactly the edges a
//! plain sequential Kruskal accepts, visit them in the same order, and never
//! hold more than `n - 1` accepted edges at any step.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::stepper::{EdgeStatus, MstStepper};
use crate::test_utils::fixtures::GraphFixture;
use crate::test_utils::oracle::sequential_kruskal;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let oracle = sequential_kruskal(graph);
    let mut stepper = MstStepper::new(graph.clone());

    if stepper.order().positions() != oracle.visit_order.as_slice() {
        return Err(fail(fixture, "visit order differs from oracle"));
    }

    while !stepper.is_finished() {
        let report = stepper
            .step_forward()
            .map_err(|err| fail(fixture, &format!("step_forward failed: {err}")))?;
        if stepper.accepted_count() > graph.spanning_tree_size() {
            return Err(fail(
                fixture,
                &format!(
                    "accepted {} edges at step {:?}, tree holds {}",
                    stepper.accepted_count(),
                    report.step_index(),
                    graph.spanning_tree_size(),
                ),
            ));
        }
    }

    let expected: Vec<EdgeStatus> = oracle
        .accepted
        .iter()
        .map(|&accepted| {
            if accepted {
                EdgeStatus::Accepted
            } else {
                EdgeStatus::Rejected
            }
        })
        .collect();
    if stepper.statuses() != expected.as_slice() {
        return Err(fail(fixture, "final statuses differ from oracle"));
    }

    if stepper.total_weight() != oracle.total_weight {
        return Err(fail(
            fixture,
            &format!(
                "total weight mismatch: stepper={}, oracle={}",
                stepper.total_weight(),
                oracle.total_weight,
            ),
        ));
    }

    if stepper.accepted_count() != oracle.edge_count {
        return Err(fail(
            fixture,
            &format!(
                "edge count mismatch: stepper={}, oracle={}",
                stepper.accepted_count(),
                oracle.edge_count,
            ),
        ));
    }

    let connected = oracle.component_count == 1;
    if stepper.is_tree_complete() != connected {
        return Err(fail(fixture, "tree completion disagrees with connectivity"));
    }

    Ok(())
}

fn fail(fixture: &GraphFixture, message: &str) -> TestCaseError {
    TestCaseError::fail(format!(
        "{message} (distribution={:?}, nodes={}, edges={})",
        fixture.distribution,
        fixture.graph.node_count(),
        fixture.graph.edge_count(),
    ))
}
