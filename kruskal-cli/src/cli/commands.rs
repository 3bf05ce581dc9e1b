//! Command implementations and argument parsing for the kruskal CLI.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use kruskal_core::{
    EdgeId, EdgeSpec, Graph, GraphError, GraphSpec, MstStepper, PracticeError, PracticeOutcome,
    PracticeSession, StepError,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "kruskal", about = "Step through Kruskal's algorithm or practise it.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Step forward through the sorted edges, optionally stepping back again.
    Walk(WalkCommand),
    /// Jump straight to a step index.
    Seek(SeekCommand),
    /// Judge a sequence of edge picks against the greedy rule.
    Practice(PracticeCommand),
}

/// Graph selection shared by every command.
#[derive(Debug, Args, Clone, Default)]
pub struct GraphArgs {
    /// JSON graph file; the built-in four-node sample is used when omitted.
    #[arg(long)]
    pub graph: Option<PathBuf>,
}

/// Options accepted by the `walk` command.
#[derive(Debug, Args, Clone, Default)]
pub struct WalkCommand {
    /// Graph to walk.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Number of forward steps; the whole order when omitted.
    #[arg(long)]
    pub steps: Option<usize>,

    /// Number of backward steps taken after walking forward.
    #[arg(long, default_value_t = 0)]
    pub back: usize,
}

/// Options accepted by the `seek` command.
#[derive(Debug, Args, Clone)]
pub struct SeekCommand {
    /// Graph to walk.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Zero-based step index to jump to.
    #[arg(long, required_unless_present = "unstarted", conflicts_with = "unstarted")]
    pub step: Option<usize>,

    /// Jump back to the state before the first step.
    #[arg(long)]
    pub unstarted: bool,
}

/// Options accepted by the `practice` command.
#[derive(Debug, Args, Clone)]
pub struct PracticeCommand {
    /// Graph to practise on.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Edge ids to pick, in order (for example `e-C-D`).
    #[arg(long = "pick", required = true, num_args = 1..)]
    pub picks: Vec<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph file is not valid graph JSON.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The graph violates the node-id contract.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// A step could not be taken.
    #[error(transparent)]
    Step(#[from] StepError),
    /// A practice pick could not be judged.
    #[error(transparent)]
    Practice(#[from] PracticeError),
}

impl CliError {
    /// Stable code of the wrapped core error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } | Self::Parse { .. } => None,
            Self::Graph(err) => Some(err.code().as_str()),
            Self::Step(err) => Some(err.code().as_str()),
            Self::Practice(err) => Some(err.code().as_str()),
        }
    }
}

/// Results of a `practice` run.
#[derive(Debug, Clone)]
pub struct PracticeSummary {
    /// Session state after the last pick.
    pub session: PracticeSession,
    /// Each pick with the outcome it produced.
    pub outcomes: Vec<(EdgeId, PracticeOutcome)>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// A `walk` or `seek` finished at the stepper's current index.
    Walk(MstStepper),
    /// A `practice` run finished.
    Practice(PracticeSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or executing the command fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, ExecutionSummary, WalkCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Walk(WalkCommand::default()),
/// };
/// let ExecutionSummary::Walk(stepper) = run_cli(cli)? else {
///     panic!("walk produces a stepper");
/// };
/// assert_eq!(stepper.total_weight(), 19);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Walk(walk) => {
            span.record("command", field::display("walk"));
            run_walk(walk).map(ExecutionSummary::Walk)
        }
        Command::Seek(seek) => {
            span.record("command", field::display("seek"));
            run_seek(seek).map(ExecutionSummary::Walk)
        }
        Command::Practice(practice) => {
            span.record("command", field::display("practice"));
            run_practice(practice).map(ExecutionSummary::Practice)
        }
    }
}

#[instrument(
    name = "cli.walk",
    err,
    skip(command),
    fields(steps = field::Empty, back = command.back),
)]
pub(super) fn run_walk(command: WalkCommand) -> Result<MstStepper, CliError> {
    let mut stepper = MstStepper::new(load_graph(&command.graph)?);

    let taken = match command.steps {
        None => stepper.run_to_end()?,
        Some(limit) => step_forward_up_to(&mut stepper, limit)?,
    };
    Span::current().record("steps", taken);

    for _ in 0..command.back {
        match stepper.step_backward() {
            Ok(_) => {}
            Err(StepError::AtStart) => break,
            Err(err) => return Err(err.into()),
        }
    }

    info!(
        step = ?stepper.step_index(),
        total_weight = stepper.total_weight(),
        accepted = stepper.accepted_count(),
        "walk completed"
    );
    Ok(stepper)
}

fn step_forward_up_to(stepper: &mut MstStepper, limit: usize) -> Result<usize, StepError> {
    let mut taken = 0;
    while taken < limit {
        match stepper.step_forward() {
            Ok(_) => taken += 1,
            Err(StepError::AtEnd) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(taken)
}

#[instrument(name = "cli.seek", err, skip(command), fields(step = ?command.step))]
pub(super) fn run_seek(command: SeekCommand) -> Result<MstStepper, CliError> {
    let mut stepper = MstStepper::new(load_graph(&command.graph)?);
    let snapshot = stepper.seek(command.step)?;
    info!(total_weight = snapshot.total_weight, "seek completed");
    Ok(stepper)
}

#[instrument(
    name = "cli.practice",
    err,
    skip(command),
    fields(picks = command.picks.len(), status = field::Empty),
)]
pub(super) fn run_practice(command: PracticeCommand) -> Result<PracticeSummary, CliError> {
    let mut session = PracticeSession::new(load_graph(&command.graph)?);
    let mut outcomes = Vec::with_capacity(command.picks.len());
    for pick in command.picks {
        let edge = EdgeId::from(pick);
        let outcome = session.select(&edge)?;
        outcomes.push((edge, outcome));
    }

    Span::current().record("status", field::debug(session.status()));
    info!(
        total_weight = session.total_weight(),
        accepted = session.selected().len(),
        "practice completed"
    );
    Ok(PracticeSummary { session, outcomes })
}

/// Loads the graph named by `args`, or the built-in sample.
#[instrument(name = "cli.load_graph", err, skip(args), fields(path = field::Empty))]
pub(super) fn load_graph(args: &GraphArgs) -> Result<Graph, CliError> {
    let Some(path) = args.graph.as_deref() else {
        Span::current().record("path", field::display("<sample>"));
        return Ok(sample_graph()?);
    };
    Span::current().record("path", field::display(path.display()));
    let spec = read_graph_spec(path)?;
    Ok(Graph::try_from(spec)?)
}

fn read_graph_spec(path: &Path) -> Result<GraphSpec, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The four-node worked example: `A-B:10, A-C:6, A-D:5, B-D:15, C-D:4`.
///
/// # Errors
/// Never fails in practice; the graph is validated like any other input.
pub fn sample_graph() -> Result<Graph, GraphError> {
    Graph::new(
        ["A", "B", "C", "D"],
        [
            EdgeSpec::new("A", "B", 10),
            EdgeSpec::new("A", "C", 6),
            EdgeSpec::new("A", "D", 5),
            EdgeSpec::new("B", "D", 15),
            EdgeSpec::new("C", "D", 4),
        ],
    )
}
