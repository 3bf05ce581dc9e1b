//! Plain-text rendering of command summaries.

use std::io::{self, Write};

use kruskal_core::{IgnoreReason, MstStepper, PracticeOutcome, SessionStatus};

use super::commands::{ExecutionSummary, PracticeSummary};

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{ExecutionSummary, render_summary, sample_graph};
/// # use kruskal_core::MstStepper;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut stepper = MstStepper::new(sample_graph()?);
/// stepper.step_forward()?;
/// let mut buffer = Vec::new();
/// render_summary(&ExecutionSummary::Walk(stepper), &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("step: 1 of 5\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Walk(stepper) => render_walk(stepper, writer),
        ExecutionSummary::Practice(practice) => render_practice(practice, writer),
    }
}

fn render_walk(stepper: &MstStepper, mut writer: impl Write) -> io::Result<()> {
    let processed = stepper.step_index().map_or(0, |index| index + 1);
    writeln!(writer, "step: {processed} of {}", stepper.order().len())?;
    writeln!(writer, "total weight: {}", stepper.total_weight())?;
    writeln!(
        writer,
        "accepted: {} / {}",
        stepper.accepted_count(),
        stepper.graph().spanning_tree_size()
    )?;
    writeln!(writer, "edges:")?;
    for (edge, status) in stepper.sorted_edges() {
        writeln!(writer, "{}\t{}\t{status}", edge.label(), edge.weight())?;
    }
    writeln!(writer, "log:")?;
    for entry in stepper.log() {
        writeln!(writer, "{entry}")?;
    }
    Ok(())
}

fn render_practice(summary: &PracticeSummary, mut writer: impl Write) -> io::Result<()> {
    for (edge, outcome) in &summary.outcomes {
        let line = match outcome {
            PracticeOutcome::Accepted { total_weight, won } => {
                let suffix = if *won { ", tree complete" } else { "" };
                format!("accepted\ttotal {total_weight}{suffix}")
            }
            PracticeOutcome::Rejected(verdict) => format!("rejected\t{verdict}"),
            PracticeOutcome::Ignored(IgnoreReason::AlreadySelected) => {
                "ignored\talready selected".to_owned()
            }
            PracticeOutcome::Ignored(IgnoreReason::AlreadyWon) => {
                "ignored\tsession already won".to_owned()
            }
        };
        writeln!(writer, "{edge}\t{line}")?;
    }

    let session = &summary.session;
    let status = match session.status() {
        SessionStatus::Playing => "playing",
        SessionStatus::Won => "won",
    };
    let (accepted, required) = session.progress();
    writeln!(writer, "status: {status}")?;
    writeln!(writer, "progress: {accepted} / {required}")?;
    writeln!(writer, "total weight: {}", session.total_weight())?;
    Ok(())
}
