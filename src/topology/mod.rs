//! # Topology
//!
//! Owns every node and link of the network.
//!
//! Building a topology is two explicit passes:
//!
//! 1. [`Topology::new`] creates one node per described node and one directed
//!    link per declared adjacency, sized by the Euclidean distance between
//!    the endpoints.
//! 2. [`Topology::connect`] wires them: each link learns its destination node
//!    and each node registers its outgoing links.
//!
//! After `connect()` the topology is read-only and can be shared across
//! threads; every propagation owns its own [`SignalRecord`](crate::SignalRecord).

mod paths;
mod propagation;

use std::collections::BTreeMap;
use hashbrown::HashMap;
use tracing::debug;

use crate::description::TopologyDescription;
use crate::model::*;
use crate::{Error, Result};

/// The fiber network: nodes, links and the physical parameters they share.
#[derive(Debug, Clone)]
pub struct Topology {
    nodes: BTreeMap<String, NetworkNode>,
    links: HashMap<LinkId, Link>,
    params: FiberParams,
    connected: bool,
}

impl Topology {
    /// Build an unwired topology with the default fiber parameters.
    pub fn new(description: &TopologyDescription) -> Result<Self> {
        Self::with_params(description, FiberParams::default())
    }

    /// Build an unwired topology with custom fiber parameters.
    pub fn with_params(description: &TopologyDescription, params: FiberParams) -> Result<Self> {
        let mut nodes = BTreeMap::new();
        for (label, desc) in &description.nodes {
            if !desc.position.is_finite() {
                return Err(Error::InvalidDescription(format!(
                    "node {label} has a non-finite position"
                )));
            }
            nodes.insert(
                label.clone(),
                NetworkNode::new(label.as_str(), desc.position, desc.connected_nodes.iter().cloned()),
            );
        }

        let mut links = HashMap::new();
        for node in nodes.values() {
            for neighbor in &node.connected_nodes {
                if *neighbor == node.label {
                    return Err(Error::InvalidDescription(format!(
                        "node {neighbor} lists itself as a neighbor"
                    )));
                }
                let other = nodes.get(neighbor).ok_or_else(|| Error::UnknownNode(neighbor.clone()))?;
                let id = LinkId::new(node.label.as_str(), neighbor.as_str());
                links
                    .entry(id)
                    .or_insert_with_key(|id| Link::new(id.clone(), node.position.distance(&other.position)));
            }
        }

        debug!(nodes = nodes.len(), links = links.len(), "topology built");

        Ok(Self { nodes, links, params, connected: false })
    }

    /// Wire nodes and links together.
    ///
    /// Every link gets its destination node; every node registers the links
    /// leaving it. Running it again leaves the wiring unchanged.
    pub fn connect(&mut self) {
        for link in self.links.values_mut() {
            link.successive = Some(link.id.to.clone());
            if let Some(node) = self.nodes.get_mut(&link.id.from) {
                node.successive.insert(link.id.clone());
            }
        }
        self.connected = true;

        debug!(links = self.links.len(), "topology connected");
    }

    /// Whether `connect()` has run.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn params(&self) -> &FiberParams {
        &self.params
    }

    pub fn node(&self, label: &str) -> Option<&NetworkNode> {
        self.nodes.get(label)
    }

    pub fn link(&self, id: &LinkId) -> Option<&Link> {
        self.links.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NetworkNode> {
        self.nodes.values()
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Node labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
