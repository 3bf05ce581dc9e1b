//! Shared test utilities for `kruskal-core`.

pub(crate) mod fixtures;
pub(crate) mod oracle;

use kruskal_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{EdgeSpec, Graph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `KRUSKAL_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// The four-node worked example: `A-B:10, A-C:6, A-D:5, B-D:15, C-D:4`.
///
/// Kruskal visits `C-D, A-D, A-C, A-B, B-D`, accepting `C-D`, `A-D` and `A-B`
/// for a total of 19.
#[must_use]
pub(crate) fn scenario_graph() -> Graph {
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
    .expect("scenario graph is valid")
}
