//! Topology description — the parsed input a `Topology` is built from.
//!
//! The shape matches the `nodes.json` resource format:
//!
//! ```text
//! {
//!   "A": { "position": [0, 0],      "connected_nodes": ["B"] },
//!   "B": { "position": [0, 300000], "connected_nodes": ["A", "C"] },
//!   ...
//! }
//! ```

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::model::Position;
use crate::Result;

/// Description of a single node: where it is and whom it connects to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescription {
    pub position: Position,
    /// Neighbor labels. Order is significant: route enumeration follows it.
    pub connected_nodes: Vec<String>,
}

/// Node label → node description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopologyDescription {
    pub nodes: BTreeMap<String, NodeDescription>,
}

impl TopologyDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the JSON description format.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add (or replace) a node.
    pub fn with_node(
        mut self,
        label: impl Into<String>,
        position: impl Into<Position>,
        connected_nodes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.nodes.insert(
            label.into(),
            NodeDescription {
                position: position.into(),
                connected_nodes: connected_nodes.into_iter().map(Into::into).collect(),
            },
        );
        self
    }
}
