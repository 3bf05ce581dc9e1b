//! Graph generators for property-based tests.
//!
//! Produces small weighted graphs with varied weight distributions and
//! topologies, seeded through [`SmallRng`] so failing cases reproduce.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use test_strategy::Arbitrary;

use crate::graph::{EdgeSpec, Graph};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 2;
/// Maximum node count for generated graphs.
const MAX_NODES: usize = 16;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 10;
/// Upper bound (exclusive) for continuous weights.
const MAX_WEIGHT: u32 = 100;

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(crate) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    #[weight(2)]
    Unique,
    /// One to three shared weights, so ties dominate.
    #[weight(3)]
    ManyIdentical,
    /// A random spanning path plus a handful of extra edges.
    #[weight(2)]
    Sparse,
    /// Close to a complete graph.
    #[weight(2)]
    Dense,
    /// Several components with no edges between them.
    #[weight(2)]
    Disconnected,
}

/// A generated graph plus the distribution that produced it.
#[derive(Clone, Debug)]
pub(crate) struct GraphFixture {
    /// The generated graph.
    pub graph: Graph,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

/// Generates fixtures covering every weight distribution.
pub(crate) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific distribution.
pub(crate) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> GraphFixture {
    let mut builder = match distribution {
        WeightDistribution::Unique => {
            probabilistic(rng, MAX_NODES, (0.2, 0.6), |r| r.gen_range(0..MAX_WEIGHT))
        }
        WeightDistribution::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<u32> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
            probabilistic(rng, MAX_NODES, (0.3, 0.7), move |r| {
                pool.get(r.gen_range(0..pool.len())).copied().unwrap_or(1)
            })
        }
        WeightDistribution::Sparse => sparse(rng),
        WeightDistribution::Dense => {
            probabilistic(rng, DENSE_MAX_NODES, (0.7, 0.95), |r| {
                r.gen_range(0..MAX_WEIGHT)
            })
        }
        WeightDistribution::Disconnected => disconnected(rng),
    };
    builder.shuffle(rng);
    GraphFixture {
        graph: builder.build(),
        distribution,
    }
}

/// Accumulates undirected edges over `n0..n{count}` without duplicates.
struct GraphBuilder {
    node_count: usize,
    pairs: HashSet<(usize, usize)>,
    edges: Vec<(usize, usize, u32)>,
}

impl GraphBuilder {
    fn new(node_count: usize) -> Self {
        Self {
            node_count,
            pairs: HashSet::new(),
            edges: Vec::new(),
        }
    }

    /// Adds `left-right` unless the pair (in either direction) exists.
    fn push(&mut self, left: usize, right: usize, weight: u32) {
        if left == right {
            return;
        }
        let key = if left <= right { (left, right) } else { (right, left) };
        if self.pairs.insert(key) {
            self.edges.push((left, right, weight));
        }
    }

    /// Fisher-Yates shuffle of the input order, so ties exercise stability.
    fn shuffle(&mut self, rng: &mut SmallRng) {
        for i in (1..self.edges.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.edges.swap(i, j);
        }
    }

    fn build(self) -> Graph {
        let nodes = (0..self.node_count).map(node_name);
        let edges = self
            .edges
            .into_iter()
            .map(|(left, right, weight)| EdgeSpec::new(node_name(left), node_name(right), weight));
        Graph::new(nodes, edges).expect("generated graph is valid")
    }
}

fn node_name(index: usize) -> String {
    format!("n{index}")
}

/// Adds each unique pair with a sampled probability.
fn probabilistic(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> u32,
) -> GraphBuilder {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut builder = GraphBuilder::new(node_count);
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(probability) {
                let sampled = weight(rng);
                builder.push(i, j, sampled);
            }
        }
    }
    if builder.edges.is_empty() {
        let sampled = weight(rng);
        builder.push(0, 1, sampled);
    }
    builder
}

/// A random spanning path, then roughly `n / 2` extra edges.
fn sparse(rng: &mut SmallRng) -> GraphBuilder {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut builder = GraphBuilder::new(node_count);

    let mut perm: Vec<usize> = (0..node_count).collect();
    for i in (1..perm.len()).rev() {
        let j = rng.gen_range(0..=i);
        perm.swap(i, j);
    }
    for pair in perm.windows(2) {
        if let [left, right] = *pair {
            let weight = rng.gen_range(0..MAX_WEIGHT);
            builder.push(left, right, weight);
        }
    }

    for _ in 0..(node_count / 2) {
        let i = rng.gen_range(0..node_count);
        let j = rng.gen_range(0..node_count);
        let weight = rng.gen_range(0..MAX_WEIGHT);
        builder.push(i, j, weight);
    }
    builder
}

/// Two to four components with random internal edges.
fn disconnected(rng: &mut SmallRng) -> GraphBuilder {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=4))
        .map(|_| rng.gen_range(1..=5))
        .collect();
    let node_count = sizes.iter().sum();
    let mut builder = GraphBuilder::new(node_count);

    let mut offset = 0;
    for size in sizes {
        let probability = rng.gen_range(0.4..=0.9);
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(probability) {
                    let weight = rng.gen_range(1..=12);
                    builder.push(offset + i, offset + j, weight);
                }
            }
        }
        offset += size;
    }
    builder
}
