use kruskal_core::{EdgeSpec, Graph};

/// Four nodes, five edges: Kruskal accepts `C-D`, `A-D` and `A-B` for 19.
#[must_use]
pub fn scenario_graph() -> Graph {
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
