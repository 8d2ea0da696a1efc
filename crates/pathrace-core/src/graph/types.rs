use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::PathraceError;

/// Tentative distance from the source: a finite sum of weights or infinity.
///
/// Ordering places every finite distance below `Infinite`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    #[default]
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn value(&self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }

    /// Distance after traversing an edge of `weight`
    pub fn add_weight(self, weight: u32) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(u64::from(weight))),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "Infinity"),
        }
    }
}

// JSON has no infinity literal; finite distances serialize as numbers and
// infinity as the string "Infinity".
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_u64(*d),
            Distance::Infinite => serializer.serialize_str("Infinity"),
        }
    }
}

/// How declared edges are entered into the adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// Each edge is traversable in both directions
    #[default]
    Undirected,
    /// Only `from -> to` is traversable
    Directed,
}

impl std::str::FromStr for EdgeMode {
    type Err = PathraceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "undirected" => Ok(EdgeMode::Undirected),
            "directed" => Ok(EdgeMode::Directed),
            other => Err(PathraceError::invalid_value(
                "edge mode",
                format!("{} (expected: undirected, directed)", other),
            )),
        }
    }
}

impl fmt::Display for EdgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeMode::Undirected => write!(f, "undirected"),
            EdgeMode::Directed => write!(f, "directed"),
        }
    }
}

/// Options shared by both engines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub edge_mode: EdgeMode,
}

/// Immutable snapshot emitted after each finalized node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Finalized node ids, ascending
    pub visited: Vec<usize>,
    /// Node finalized in this step; `None` on the final path step
    pub current_node: Option<usize>,
    /// Ids of edges whose relaxation improved a distance in this step
    pub relaxed_edges: Vec<String>,
    pub cumulative_operations: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Distance>,
    pub description: String,
}

/// Result of a run with a target node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetResult {
    pub steps: Vec<Step>,
    /// Source-to-target node sequence, `None` when the target is unreachable
    pub path: Option<Vec<usize>>,
    pub distance: Distance,
    pub operations: u64,
}

/// Result of a run without a target (full shortest-path tree)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeResult {
    pub steps: Vec<Step>,
    pub distances: Vec<Distance>,
    pub previous: Vec<Option<usize>>,
    pub operations: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RunResult {
    Target(TargetResult),
    Tree(TreeResult),
}

impl RunResult {
    pub fn steps(&self) -> &[Step] {
        match self {
            RunResult::Target(r) => &r.steps,
            RunResult::Tree(r) => &r.steps,
        }
    }

    pub fn operations(&self) -> u64 {
        match self {
            RunResult::Target(r) => r.operations,
            RunResult::Tree(r) => r.operations,
        }
    }

    pub fn as_target(&self) -> Option<&TargetResult> {
        match self {
            RunResult::Target(r) => Some(r),
            RunResult::Tree(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&TreeResult> {
        match self {
            RunResult::Tree(r) => Some(r),
            RunResult::Target(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ordering() {
        assert!(Distance::Finite(0) < Distance::Finite(1));
        assert!(Distance::Finite(u64::MAX) < Distance::Infinite);
        assert_eq!(Distance::default(), Distance::Infinite);
    }

    #[test]
    fn test_distance_add_weight() {
        assert_eq!(Distance::ZERO.add_weight(5), Distance::Finite(5));
        assert_eq!(Distance::Infinite.add_weight(5), Distance::Infinite);
        assert_eq!(
            Distance::Finite(u64::MAX).add_weight(1),
            Distance::Finite(u64::MAX)
        );
    }

    #[test]
    fn test_distance_display_and_json() {
        assert_eq!(Distance::Finite(6).to_string(), "6");
        assert_eq!(Distance::Infinite.to_string(), "Infinity");
        assert_eq!(serde_json::to_string(&Distance::Finite(6)).unwrap(), "6");
        assert_eq!(
            serde_json::to_string(&Distance::Infinite).unwrap(),
            "\"Infinity\""
        );
    }

    #[test]
    fn test_edge_mode_parsing() {
        assert_eq!("directed".parse::<EdgeMode>().unwrap(), EdgeMode::Directed);
        assert_eq!(
            "UNDIRECTED".parse::<EdgeMode>().unwrap(),
            EdgeMode::Undirected
        );
        let err = "sideways".parse::<EdgeMode>().unwrap_err();
        assert!(matches!(err, PathraceError::InvalidValue { .. }));
    }

    #[test]
    fn test_step_json_omits_absent_path() {
        let step = Step {
            visited: vec![0],
            current_node: Some(0),
            relaxed_edges: vec!["0-1".to_string()],
            cumulative_operations: 3,
            path: None,
            distance: None,
            description: "Processed node 0, explored edges: 0-1".to_string(),
        };
        let json = serde_json::to_value(&step).unwrap();
        assert!(json.get("path").is_none());
        assert_eq!(json["cumulative_operations"], 3);
        assert_eq!(json["relaxed_edges"][0], "0-1");
    }
}
