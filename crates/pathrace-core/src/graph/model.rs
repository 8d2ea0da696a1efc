//! Graph input model
//!
//! `GraphRecord` is the serialized shape a caller hands in: raw integer ids
//! and weight labels that may be strings or numbers. `Graph` is the
//! validated, typed form the engines consume.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PathraceError, Result};
use crate::graph::types::EdgeMode;

/// A graph node. Ids are expected to be contiguous in `[0, V)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub id: usize,
}

/// Serialized node; a negative id is rejected in `Graph::from_record`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: i64,
}

/// A weighted edge between two nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: String,
    pub from: usize,
    pub to: usize,
    pub weight: u32,
}

/// Serialized edge. The weight label is usually a string (`"12"`) but any
/// JSON value is accepted here and judged by `parse_weight`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: String,
    pub from: i64,
    pub to: i64,
    pub label: serde_json::Value,
}

/// Serialized graph as produced by an external generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// Validated graph with parsed edge weights
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Parse a weight label into a non-negative integer weight
pub fn parse_weight(edge_id: &str, label: &str) -> Result<u32> {
    label
        .trim()
        .parse::<u32>()
        .map_err(|_| PathraceError::invalid_weight(edge_id, label))
}

/// Label text as written: strings verbatim, anything else as JSON
fn label_text(label: &serde_json::Value) -> String {
    match label {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Convert a raw id to an index; negatives can never fall in `[0, V)`
fn node_index(what: &str, raw: i64) -> Result<usize> {
    usize::try_from(raw)
        .map_err(|_| PathraceError::invalid_graph(format!("{} {} outside [0, V)", what, raw)))
}

impl Graph {
    /// Build a graph from `node_count` nodes and `(from, to, weight)` triples.
    ///
    /// Edge ids follow the generator convention `"{min}-{max}"`.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, u32)]) -> Self {
        Graph {
            nodes: (0..node_count).map(|id| Node { id }).collect(),
            edges: edges
                .iter()
                .map(|&(from, to, weight)| Edge {
                    id: format!("{}-{}", from.min(to), from.max(to)),
                    from,
                    to,
                    weight,
                })
                .collect(),
        }
    }

    /// Convert a serialized record, checking ids and parsing every weight label
    pub fn from_record(record: GraphRecord) -> Result<Self> {
        let nodes = record
            .nodes
            .iter()
            .map(|node| node_index("node id", node.id).map(|id| Node { id }))
            .collect::<Result<Vec<_>>>()?;

        let edges = record
            .edges
            .into_iter()
            .map(|edge| {
                let from = node_index(&format!("edge {} endpoint", edge.id), edge.from)?;
                let to = node_index(&format!("edge {} endpoint", edge.id), edge.to)?;
                let weight = parse_weight(&edge.id, &label_text(&edge.label))?;
                Ok(Edge {
                    id: edge.id,
                    from,
                    to,
                    weight,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Graph { nodes, edges })
    }

    /// Convert back to the serialized form with canonical string labels
    pub fn to_record(&self) -> GraphRecord {
        GraphRecord {
            nodes: self
                .nodes
                .iter()
                .map(|node| NodeRecord {
                    id: node.id as i64,
                })
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|edge| EdgeRecord {
                    id: edge.id.clone(),
                    from: edge.from as i64,
                    to: edge.to as i64,
                    label: serde_json::Value::String(edge.weight.to_string()),
                })
                .collect(),
        }
    }

    /// Parse a graph from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let record: GraphRecord = serde_json::from_str(json)?;
        Self::from_record(record)
    }

    /// Load a graph from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let graph = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph_loaded"
        );
        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|e| u64::from(e.weight)).sum()
    }

    /// Cheapest edge a search could take from `a` to `b` under `mode`
    pub fn edge_between(&self, a: usize, b: usize, mode: EdgeMode) -> Option<&Edge> {
        self.edges
            .iter()
            .filter(|e| {
                (e.from == a && e.to == b)
                    || (mode == EdgeMode::Undirected && e.from == b && e.to == a)
            })
            .min_by_key(|e| e.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_generates_ids() {
        let graph = Graph::from_edges(3, &[(2, 0, 4), (0, 1, 7)]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edges[0].id, "0-2");
        assert_eq!(graph.edges[0].from, 2);
        assert_eq!(graph.edges[1].id, "0-1");
        assert_eq!(graph.total_weight(), 11);
    }

    #[test]
    fn test_from_json_parses_labels() {
        let json = r#"{
            "nodes": [{"id": 0}, {"id": 1}],
            "edges": [{"id": "0-1", "from": 0, "to": 1, "label": "12"}]
        }"#;
        let graph = Graph::from_json(json).unwrap();
        assert_eq!(graph.edges[0].weight, 12);
    }

    #[test]
    fn test_non_numeric_label_rejected() {
        let json = r#"{
            "nodes": [{"id": 0}, {"id": 1}],
            "edges": [{"id": "0-1", "from": 0, "to": 1, "label": "twelve"}]
        }"#;
        let err = Graph::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            PathraceError::InvalidWeight { ref edge_id, ref label }
                if edge_id == "0-1" && label == "twelve"
        ));
    }

    #[test]
    fn test_negative_label_rejected() {
        assert!(parse_weight("0-1", "-3").is_err());
        assert_eq!(parse_weight("0-1", " 5 ").unwrap(), 5);
    }

    #[test]
    fn test_record_round_trip_keeps_labels() {
        let graph = Graph::from_edges(2, &[(0, 1, 9)]);
        let record = graph.to_record();
        assert_eq!(record.edges[0].label, "9");
        assert_eq!(Graph::from_record(record).unwrap(), graph);
    }

    #[test]
    fn test_edge_between_respects_mode() {
        let graph = Graph::from_edges(3, &[(0, 1, 4), (2, 1, 6), (1, 2, 9)]);
        let undirected = EdgeMode::Undirected;
        assert_eq!(graph.edge_between(1, 2, undirected).map(|e| e.weight), Some(6));
        assert_eq!(graph.edge_between(1, 0, undirected).map(|e| e.weight), Some(4));
        assert!(graph.edge_between(0, 2, undirected).is_none());

        assert_eq!(
            graph.edge_between(1, 2, EdgeMode::Directed).map(|e| e.weight),
            Some(9)
        );
        assert!(graph.edge_between(1, 0, EdgeMode::Directed).is_none());
    }

    #[test]
    fn test_numeric_label_accepted() {
        let json = r#"{
            "nodes": [{"id": 0}, {"id": 1}],
            "edges": [{"id": "0-1", "from": 0, "to": 1, "label": 3}]
        }"#;
        let graph = Graph::from_json(json).unwrap();
        assert_eq!(graph.edges[0].weight, 3);
    }

    #[test]
    fn test_non_integer_label_values_are_invalid_weights() {
        for label in ["3.5", "-2", "null", "true", "[1]"] {
            let json = format!(
                r#"{{"nodes": [{{"id": 0}}, {{"id": 1}}],
                    "edges": [{{"id": "0-1", "from": 0, "to": 1, "label": {}}}]}}"#,
                label
            );
            let err = Graph::from_json(&json).unwrap_err();
            assert!(
                matches!(err, PathraceError::InvalidWeight { label: ref text, .. } if !text.is_empty()),
                "label {} gave {:?}",
                label,
                err
            );
        }
    }

    #[test]
    fn test_negative_endpoint_is_invalid_graph() {
        let json = r#"{
            "nodes": [{"id": 0}, {"id": 1}],
            "edges": [{"id": "0-1", "from": 0, "to": -1, "label": "3"}]
        }"#;
        let err = Graph::from_json(json).unwrap_err();
        assert!(matches!(err, PathraceError::InvalidGraph { .. }));
        assert!(err.to_string().contains("edge 0-1 endpoint -1 outside [0, V)"));
        assert_eq!(err.exit_code(), crate::error::ExitCode::Data);
    }

    #[test]
    fn test_negative_node_id_is_invalid_graph() {
        let json = r#"{"nodes": [{"id": -4}], "edges": []}"#;
        let err = Graph::from_json(json).unwrap_err();
        assert!(matches!(err, PathraceError::InvalidGraph { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        let record = Graph::from_edges(2, &[(0, 1, 3)]).to_record();
        fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

        let graph = Graph::load(&path).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].weight, 3);
    }
}
