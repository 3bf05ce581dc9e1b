//! Navigation consistency.
//!
//! Records a snapshot after every forward step, then checks that stepping
//! backward retraces them exactly and that seeking to any index reproduces
//! the recorded snapshot.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::stepper::{MstStepper, Snapshot};
use crate::test_utils::fixtures::GraphFixture;

/// Runs the navigation property for the given fixture.
pub(super) fn run_navigation_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut stepper = MstStepper::new(fixture.graph.clone());
    let mut snapshots: Vec<Snapshot> = vec![stepper.snapshot()];
    while !stepper.is_finished() {
        stepper.step_forward().map_err(step_failed)?;
        snapshots.push(stepper.snapshot());
    }

    for expected in snapshots.iter().rev().skip(1) {
        stepper.step_backward().map_err(step_failed)?;
        if &stepper.snapshot() != expected {
            return Err(TestCaseError::fail(format!(
                "backward step to {:?} diverged from the forward walk (distribution={:?})",
                expected.step_index, fixture.distribution,
            )));
        }
    }

    for expected in snapshots.iter().rev() {
        let snapshot = stepper.seek(expected.step_index).map_err(step_failed)?;
        if &snapshot != expected {
            return Err(TestCaseError::fail(format!(
                "seek to {:?} diverged from the forward walk (distribution={:?})",
                expected.step_index, fixture.distribution,
            )));
        }
    }

    Ok(())
}

fn step_failed(err: crate::error::StepError) -> TestCaseError {
    TestCaseError::fail(format!("navigation failed: {err}"))
}
