//! Network node (topology vertex).

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use super::LinkId;

/// Planar coordinate of a node, in metres.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (f64, f64) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}

/// A vertex of the topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub(crate) label: String,
    pub(crate) position: Position,
    /// Declared neighbors, in input order, without repeats. Route
    /// enumeration follows this order.
    pub(crate) connected_nodes: Vec<String>,
    /// Outgoing link ids, filled in by `Topology::connect`. The links
    /// themselves are owned by the topology.
    #[serde(skip)]
    pub(crate) successive: HashSet<LinkId>,
}

impl NetworkNode {
    pub fn new(
        label: impl Into<String>,
        position: impl Into<Position>,
        connected_nodes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        // Repeated neighbors collapse to their first occurrence.
        let mut neighbors: Vec<String> = Vec::new();
        for neighbor in connected_nodes {
            let neighbor = neighbor.into();
            if !neighbors.contains(&neighbor) {
                neighbors.push(neighbor);
            }
        }

        Self {
            label: label.into(),
            position: position.into(),
            connected_nodes: neighbors,
            successive: HashSet::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn connected_nodes(&self) -> &[String] {
        &self.connected_nodes
    }

    pub fn is_adjacent(&self, label: &str) -> bool {
        self.connected_nodes.iter().any(|n| n == label)
    }

    /// Outgoing link for the hop towards `next`, if wired.
    pub fn outgoing(&self, next: &str) -> Option<&LinkId> {
        self.successive.get(&LinkId::new(self.label.as_str(), next))
    }

    /// Number of wired outgoing links.
    pub fn out_degree(&self) -> usize {
        self.successive.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn test_position_from_json_array() {
        let p: Position = serde_json::from_str("[-350000, 150000]").unwrap();
        assert_eq!(p, Position::new(-350000.0, 150000.0));
        assert_eq!(serde_json::to_string(&p).unwrap(), "[-350000.0,150000.0]");
    }

    #[test]
    fn test_unwired_node_has_no_outgoing() {
        let node = NetworkNode::new("A", (0.0, 0.0), ["B", "C"]);
        assert!(node.is_adjacent("B"));
        assert!(!node.is_adjacent("D"));
        assert!(node.outgoing("B").is_none());
        assert_eq!(node.out_degree(), 0);
    }

    #[test]
    fn test_repeated_neighbors_keep_first_occurrence() {
        let node = NetworkNode::new("A", (0.0, 0.0), ["C", "B", "C", "B", "D"]);
        assert_eq!(node.connected_nodes(), ["C", "B", "D"]);
    }
}
