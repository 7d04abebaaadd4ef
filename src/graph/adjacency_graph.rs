//! Adjacency graph built from a graph file.
//!
//! Edges are stored once in a flat, insertion-ordered record list. Each
//! node's adjacency list holds [`EdgeId`]s pointing into that list, so an
//! edge is referenced by position rather than copied per node.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

use crate::error::{GraphError, GraphResult};
use crate::parser::edge_line::parse_edge_line;
use crate::parser::graph_file::FIRST_EDGE_LINE;
use crate::parser::types::{EdgeSpec, GraphKind};

/// Position of an [`EdgeRecord`] in the graph's flat edge list.
///
/// Ids are assigned in parse order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Creates an id for the given position.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position in the flat edge list.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stored edge: where it points and its optional weight.
///
/// The node the edge leaves from is implied by the adjacency list that
/// holds its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    /// Label of the node this edge points at
    pub target: String,
    /// Weight token exactly as written, if any
    pub weight: Option<String>,
}

impl EdgeRecord {
    /// Creates a new edge record.
    pub fn new(target: impl Into<String>, weight: Option<String>) -> Self {
        Self {
            target: target.into(),
            weight,
        }
    }

    /// Creates an edge record without a weight.
    pub fn unweighted(target: impl Into<String>) -> Self {
        Self::new(target, None)
    }

    /// Creates an edge record with a weight token.
    pub fn weighted(target: impl Into<String>, weight: impl Into<String>) -> Self {
        Self::new(target, Some(weight.into()))
    }

    /// Returns true if this record carries a weight.
    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }
}

impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.weight {
            Some(weight) => write!(f, "({},{})", self.target, weight),
            None => write!(f, "({},)", self.target),
        }
    }
}

/// A graph loaded from a graph file.
///
/// The graph is built in one pass and is read-only afterwards. Every
/// node label from the header is a key of the adjacency mapping, even
/// when no edge touches it.
///
/// # Example
///
/// ```rust
/// use graphsum::graph::{AdjacencyGraph, EdgeId, EdgeRecord};
///
/// let graph = AdjacencyGraph::build_directed(
///     vec!["a".into(), "b".into(), "c".into()],
///     vec!["(a,b,5)".into(), "(b,c)".into()],
/// )
/// .unwrap();
///
/// assert_eq!(graph.adjacency("a"), Some(&[EdgeId::new(0)][..]));
/// assert_eq!(graph.edge(EdgeId::new(0)), Some(&EdgeRecord::weighted("b", "5")));
/// assert_eq!(graph.edge(EdgeId::new(1)), Some(&EdgeRecord::unweighted("c")));
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    /// Directed or undirected, from the header marker
    kind: GraphKind,
    /// Node labels in header order, as written
    nodes: Vec<String>,
    /// Node label -> ids of the edges leaving (or touching) that node
    adjacency: HashMap<String, Vec<EdgeId>>,
    /// Flat edge list indexed by `EdgeId`
    all_edges: Vec<EdgeRecord>,
    /// Edge lines exactly as read
    edge_lines: Vec<String>,
}

/// Working state while edge lines are linked. Only turned into an
/// [`AdjacencyGraph`] once every line has been accepted.
struct GraphBuilder {
    adjacency: HashMap<String, Vec<EdgeId>>,
    all_edges: Vec<EdgeRecord>,
}

impl GraphBuilder {
    fn new(nodes: &[String], edge_capacity: usize) -> Self {
        let mut adjacency = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if adjacency.insert(node.clone(), Vec::new()).is_some() {
                warn!(node = %node, "duplicate node label in header");
            }
        }

        Self {
            adjacency,
            all_edges: Vec::with_capacity(edge_capacity),
        }
    }

    fn require(&self, label: &str, line: usize) -> GraphResult<()> {
        if self.adjacency.contains_key(label) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode {
                label: label.to_string(),
                line,
            })
        }
    }

    fn push_record(&mut self, record: EdgeRecord) -> EdgeId {
        let id = EdgeId(self.all_edges.len());
        self.all_edges.push(record);
        id
    }

    /// Appends `id` to the list of `label`, which `require` has already checked.
    fn link(&mut self, label: &str, id: EdgeId) {
        if let Some(ids) = self.adjacency.get_mut(label) {
            ids.push(id);
        }
    }

    fn finish(
        self,
        kind: GraphKind,
        nodes: Vec<String>,
        edge_lines: Vec<String>,
    ) -> AdjacencyGraph {
        debug!(
            %kind,
            vertices = self.adjacency.len(),
            records = self.all_edges.len(),
            "built graph"
        );

        AdjacencyGraph {
            kind,
            nodes,
            adjacency: self.adjacency,
            all_edges: self.all_edges,
            edge_lines,
        }
    }
}

impl AdjacencyGraph {
    /// Builds a directed graph.
    ///
    /// Each edge line `(source,target[,weight])` adds one record
    /// `(target, weight)` and links its id from `source`.
    ///
    /// # Arguments
    ///
    /// * `nodes` - Node labels from the header line
    /// * `edge_lines` - Raw edge lines, the first of which is line 3 of the file
    ///
    /// # Returns
    ///
    /// The finished graph, or the first `MalformedEdgeLine` / `UnknownNode`
    /// error encountered.
    pub fn build_directed(nodes: Vec<String>, edge_lines: Vec<String>) -> GraphResult<Self> {
        let mut builder = GraphBuilder::new(&nodes, edge_lines.len());

        for (offset, raw) in edge_lines.iter().enumerate() {
            let EdgeSpec {
                source,
                target,
                weight,
                line,
            } = parse_edge_line(raw, FIRST_EDGE_LINE + offset)?;

            builder.require(&source, line)?;
            builder.require(&target, line)?;

            let id = builder.push_record(EdgeRecord::new(target, weight));
            builder.link(&source, id);
        }

        Ok(builder.finish(GraphKind::Directed, nodes, edge_lines))
    }

    /// Builds an undirected graph.
    ///
    /// Each edge line `(a,b[,weight])` adds two records with consecutive
    /// ids: `(b, weight)` linked from `a`, then `(a, weight)` linked from
    /// `b`. A self-loop links both ids from the same node.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphsum::graph::{AdjacencyGraph, EdgeId};
    ///
    /// let graph = AdjacencyGraph::build_undirected(
    ///     vec!["a".into(), "b".into()],
    ///     vec!["(a,b,7)".into()],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(graph.adjacency("a"), Some(&[EdgeId::new(0)][..]));
    /// assert_eq!(graph.adjacency("b"), Some(&[EdgeId::new(1)][..]));
    /// ```
    pub fn build_undirected(nodes: Vec<String>, edge_lines: Vec<String>) -> GraphResult<Self> {
        let mut builder = GraphBuilder::new(&nodes, edge_lines.len() * 2);

        for (offset, raw) in edge_lines.iter().enumerate() {
            let EdgeSpec {
                source,
                target,
                weight,
                line,
            } = parse_edge_line(raw, FIRST_EDGE_LINE + offset)?;

            builder.require(&source, line)?;
            builder.require(&target, line)?;

            let forward =
                builder.push_record(EdgeRecord::new(target.clone(), weight.clone()));
            let backward = builder.push_record(EdgeRecord::new(source.clone(), weight));

            builder.link(&source, forward);
            builder.link(&target, backward);
        }

        Ok(builder.finish(GraphKind::Undirected, nodes, edge_lines))
    }

    /// Returns whether the graph is directed or undirected.
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns the node labels in header order, duplicates included.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Returns the number of distinct nodes (adjacency mapping keys).
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Checks whether a node label exists in the graph.
    pub fn contains(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Gets the edge ids linked from a node, in parse order.
    ///
    /// Returns `None` for labels that are not in the graph and an empty
    /// slice for nodes without edges.
    pub fn adjacency(&self, label: &str) -> Option<&[EdgeId]> {
        self.adjacency.get(label).map(Vec::as_slice)
    }

    /// Gets the edge record stored under an id.
    pub fn edge(&self, id: EdgeId) -> Option<&EdgeRecord> {
        self.all_edges.get(id.0)
    }

    /// Returns the flat edge list; positions are edge ids.
    pub fn all_edges(&self) -> &[EdgeRecord] {
        &self.all_edges
    }

    /// Gets the edge records linked from a node, in parse order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphsum::parser::parse_str;
    ///
    /// let graph = parse_str("D\na,b,c\n(a,b)\n(a,c,2)").unwrap();
    /// let targets: Vec<_> = graph
    ///     .edges_of("a")
    ///     .iter()
    ///     .map(|e| e.target.as_str())
    ///     .collect();
    /// assert_eq!(targets, vec!["b", "c"]);
    /// assert!(graph.edges_of("missing").is_empty());
    /// ```
    pub fn edges_of(&self, label: &str) -> Vec<&EdgeRecord> {
        let Some(ids) = self.adjacency.get(label) else {
            return Vec::new();
        };

        ids.iter().filter_map(|&id| self.edge(id)).collect()
    }

    /// Returns the edge lines exactly as they appeared in the file.
    pub fn edge_lines(&self) -> &[String] {
        &self.edge_lines
    }

    /// Converts the adjacency model into a petgraph `DiGraph`.
    ///
    /// Nodes are added in header order (first occurrence of each label).
    /// Every edge record becomes one arc from the node whose list holds
    /// it to the record's target, weighted with the record's weight token.
    /// An undirected edge therefore appears as two opposite arcs.
    pub fn to_petgraph(&self) -> DiGraph<String, Option<String>> {
        let mut graph = DiGraph::with_capacity(self.adjacency.len(), self.all_edges.len());
        let mut indices: HashMap<&str, NodeIndex> =
            HashMap::with_capacity(self.adjacency.len());
        let mut order: Vec<(&str, NodeIndex)> = Vec::with_capacity(self.adjacency.len());

        for label in &self.nodes {
            if indices.contains_key(label.as_str()) {
                continue;
            }
            let idx = graph.add_node(label.clone());
            indices.insert(label.as_str(), idx);
            order.push((label.as_str(), idx));
        }

        for (label, from) in order {
            let Some(ids) = self.adjacency.get(label) else {
                continue;
            };
            for record in ids.iter().filter_map(|&id| self.edge(id)) {
                if let Some(&to) = indices.get(record.target.as_str()) {
                    graph.add_edge(from, to, record.weight.clone());
                }
            }
        }

        graph
    }
}
