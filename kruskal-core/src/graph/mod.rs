//! Immutable weighted graph consumed by the stepper and the validator.
//!
//! A [`Graph`] is built once from a node list and a list of [`EdgeSpec`]s and
//! never changes afterwards. Construction enforces the node-id contract, so
//! every endpoint of every edge is guaranteed to be a declared node.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};

use crate::error::GraphError;

/// Opaque node identifier, unique within a graph.
///
/// # Examples
/// ```
/// use kruskal_core::NodeId;
///
/// let node = NodeId::from("A");
/// assert_eq!(node.as_str(), "A");
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Returns the identifier as a string slice.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Edge identifier derived from the ordered endpoint pair.
///
/// Two edges with the same `(source, target)` pair share an id, which is how
/// duplicate parallel edges are detected.
///
/// # Examples
/// ```
/// use kruskal_core::{EdgeId, NodeId};
///
/// let id = EdgeId::for_endpoints(&NodeId::from("A"), &NodeId::from("B"));
/// assert_eq!(id.as_str(), "e-A-B");
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EdgeId(Arc<str>);

impl EdgeId {
    /// Derives the id for an edge running from `source` to `target`.
    #[must_use]
    pub fn for_endpoints(source: &NodeId, target: &NodeId) -> Self {
        Self(Arc::from(format!("e-{source}-{target}")))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for EdgeId {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

impl From<String> for EdgeId {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw edge description handed over by the graph producer.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSpec {
    /// First endpoint.
    pub source: NodeId,
    /// Second endpoint.
    pub target: NodeId,
    /// Non-negative integer weight.
    pub weight: u32,
}

impl EdgeSpec {
    /// Creates an edge description.
    #[must_use]
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: u32) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

/// A validated, immutable weighted edge.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    weight: u32,
}

impl Edge {
    /// Returns the derived edge id.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> &EdgeId { &self.id }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> &NodeId { &self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> &NodeId { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> u32 { self.weight }

    /// Returns the `source-target` label used in verdict messages.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.source, self.target)
    }
}

/// An immutable graph with validated endpoints and unique edge ids.
///
/// Edges keep the order in which they were supplied; that order is the
/// tie-break for equal weights in [`crate::EdgeOrder`].
///
/// # Examples
/// ```
/// use kruskal_core::{EdgeSpec, Graph};
///
/// let graph = Graph::new(
///     ["A", "B", "C"],
///     [EdgeSpec::new("A", "B", 3), EdgeSpec::new("B", "C", 1)],
/// )
/// .expect("graph is valid");
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edges()[1].label(), "B-C");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GraphSpec", into = "GraphSpec")
)]
pub struct Graph {
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
    positions: HashMap<EdgeId, usize>,
}

impl Graph {
    /// Validates the node list and edges and builds the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] when a node is declared twice, an edge is a
    /// self-loop, an endpoint is undeclared, or two edges share an id.
    pub fn new<N, E>(nodes: N, edges: E) -> Result<Self, GraphError>
    where
        N: IntoIterator,
        N::Item: Into<NodeId>,
        E: IntoIterator<Item = EdgeSpec>,
    {
        let nodes: Vec<NodeId> = nodes.into_iter().map(Into::into).collect();
        let mut declared = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !declared.insert(node.clone()) {
                return Err(GraphError::DuplicateNode { node: node.clone() });
            }
        }

        let mut validated = Vec::new();
        let mut positions = HashMap::new();
        for spec in edges {
            let edge = validate_edge(spec, &declared)?;
            if positions.contains_key(&edge.id) {
                return Err(GraphError::DuplicateEdge { edge: edge.id });
            }
            positions.insert(edge.id.clone(), validated.len());
            validated.push(edge);
        }

        Ok(Self {
            nodes,
            edges: validated,
            positions,
        })
    }

    /// Returns the nodes in declaration order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[NodeId] { &self.nodes }

    /// Returns the edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Number of edges a spanning tree of this graph contains (`n - 1`).
    #[must_use]
    pub fn spanning_tree_size(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Looks up an edge by id.
    #[must_use]
    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.position(id).and_then(|position| self.edges.get(position))
    }

    /// Returns the input-order position of an edge.
    #[must_use]
    pub fn position(&self, id: &EdgeId) -> Option<usize> {
        self.positions.get(id).copied()
    }
}

fn validate_edge(
    spec: EdgeSpec,
    declared: &HashSet<NodeId>,
) -> Result<Edge, GraphError> {
    let EdgeSpec {
        source,
        target,
        weight,
    } = spec;
    let id = EdgeId::for_endpoints(&source, &target);

    for endpoint in [&source, &target] {
        if !declared.contains(endpoint) {
            return Err(GraphError::UnknownEndpoint {
                edge: id,
                node: endpoint.clone(),
            });
        }
    }
    if source == target {
        return Err(GraphError::SelfLoop { edge: id, node: source });
    }

    Ok(Edge {
        id,
        source,
        target,
        weight,
    })
}

/// Unvalidated graph description, the serialised form of a [`Graph`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSpec {
    /// Node ids in declaration order.
    pub nodes: Vec<NodeId>,
    /// Edge descriptions in input order.
    pub edges: Vec<EdgeSpec>,
}

impl TryFrom<GraphSpec> for Graph {
    type Error = GraphError;

    fn try_from(spec: GraphSpec) -> Result<Self, Self::Error> {
        Self::new(spec.nodes, spec.edges)
    }
}

impl From<Graph> for GraphSpec {
    fn from(graph: Graph) -> Self {
        let edges = graph
            .edges
            .into_iter()
            .map(|edge| EdgeSpec {
                source: edge.source,
                target: edge.target,
                weight: edge.weight,
            })
            .collect();
        Self {
            nodes: graph.nodes,
            edges,
        }
    }
}
