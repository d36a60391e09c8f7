//! Directed fiber link between two adjacent nodes.

use serde::{Deserialize, Serialize};
use super::FiberParams;

/// Identifier of a directed link: the ordered pair of endpoint labels.
///
/// `A->B` and `B->A` are distinct links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LinkId {
    pub from: String,
    pub to: String,
}

impl LinkId {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into() }
    }
}

impl std::fmt::Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// A directed link. Its length is fixed at construction; its destination is
/// set once by `Topology::connect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub(crate) id: LinkId,
    pub(crate) length: f64,
    /// Label of the node this link delivers to. `None` until wired.
    pub(crate) successive: Option<String>,
}

impl Link {
    pub fn new(id: LinkId, length: f64) -> Self {
        Self { id, length, successive: None }
    }

    pub fn id(&self) -> &LinkId {
        &self.id
    }

    /// Physical length in metres.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Destination node label, once wired.
    pub fn successive(&self) -> Option<&str> {
        self.successive.as_deref()
    }

    /// Propagation delay across this link, in seconds.
    pub fn latency_generation(&self, params: &FiberParams) -> f64 {
        self.length / params.propagation_speed()
    }

    /// Noise power added for a signal of `signal_power` watts.
    pub fn noise_generation(&self, params: &FiberParams, signal_power: f64) -> f64 {
        params.noise_coefficient * signal_power * self.length
    }
}
