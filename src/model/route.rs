//! Route — an ordered, loop-free sequence of node labels.

use serde::{Deserialize, Serialize};
use super::LinkId;

/// A route through the topology: `A -> B -> C ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(Vec<String>);

impl Route {
    pub fn new(labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(labels.into_iter().map(Into::into).collect())
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn into_labels(self) -> Vec<String> {
        self.0
    }

    /// Number of nodes on the route.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of links crossed.
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Directed links crossed, in order.
    pub fn links(&self) -> impl Iterator<Item = LinkId> + '_ {
        self.0.windows(2).map(|w| LinkId::new(w[0].as_str(), w[1].as_str()))
    }

    /// True if no label appears twice.
    pub fn is_simple(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, label)| !self.0[..i].contains(label))
    }
}

impl From<Vec<String>> for Route {
    fn from(labels: Vec<String>) -> Self {
        Self(labels)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("->"))
    }
}
