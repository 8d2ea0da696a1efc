use crate::bail_invalid_graph;
use crate::error::Result;
use crate::graph::model::Graph;
use crate::graph::types::EdgeMode;

/// One outgoing adjacency entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub node: usize,
    pub weight: u32,
    pub edge_id: String,
}

/// Per-node outgoing neighbors, built once per engine invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    entries: Vec<Vec<Neighbor>>,
}

impl AdjacencyList {
    /// Build the adjacency list for `graph`.
    ///
    /// Node ids must be exactly `0..V` in order and every edge endpoint must
    /// fall in that range. Entries keep edge declaration order; in undirected
    /// mode the reverse entry is appended right after the forward one.
    pub fn build(graph: &Graph, mode: EdgeMode) -> Result<Self> {
        let node_count = graph.node_count();

        for (index, node) in graph.nodes.iter().enumerate() {
            if node.id != index {
                bail_invalid_graph!(
                    "node ids must be contiguous from 0 (found id {} at position {})",
                    node.id,
                    index
                );
            }
        }

        let mut entries: Vec<Vec<Neighbor>> = vec![Vec::new(); node_count];

        for edge in &graph.edges {
            if edge.from >= node_count || edge.to >= node_count {
                bail_invalid_graph!(
                    "edge {} references node outside [0, {}) ({} -> {})",
                    edge.id,
                    node_count,
                    edge.from,
                    edge.to
                );
            }

            entries[edge.from].push(Neighbor {
                node: edge.to,
                weight: edge.weight,
                edge_id: edge.id.clone(),
            });

            if mode == EdgeMode::Undirected && edge.from != edge.to {
                entries[edge.to].push(Neighbor {
                    node: edge.from,
                    weight: edge.weight,
                    edge_id: edge.id.clone(),
                });
            }
        }

        Ok(AdjacencyList { entries })
    }

    pub fn node_count(&self) -> usize {
        self.entries.len()
    }

    pub fn neighbors(&self, node: usize) -> &[Neighbor] {
        self.entries.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of adjacency entries across all nodes
    pub fn entry_count(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    /// Reject a source or target id outside `[0, V)`
    pub fn check_node(&self, role: &str, node: usize) -> Result<()> {
        if node >= self.node_count() {
            bail_invalid_graph!(
                "{} node {} outside [0, {})",
                role,
                node,
                self.node_count()
            );
        }
        Ok(())
    }
}
