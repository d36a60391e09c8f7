//! The propagation chain.
//!
//! A propagation alternates between two handlers that share one record:
//!
//! ```text
//! AT_NODE(origin) -> CROSSING_LINK -> AT_NODE -> ... -> AT_NODE(destination)
//! ```
//!
//! `NetworkNode::propagate` consumes the head of the remaining route and
//! forwards to the outgoing link for the next hop. `Link::propagate` applies
//! exactly one noise/latency increment and forwards to its destination node.
//! The chain ends at the node holding the last element of the route.

use tracing::trace;

use crate::model::{Link, LinkId, NetworkNode, SignalRecord};
use crate::{Error, Result};
use super::Topology;

impl Topology {
    /// Run `signal` along its remaining route and return it with noise and
    /// latency accumulated and the route consumed.
    ///
    /// Fails with [`Error::EmptyRoute`] if there is nothing to traverse,
    /// [`Error::UnknownNode`] if the route starts at a node this topology
    /// doesn't have, and [`Error::MissingWiring`] if the route takes a hop
    /// with no wired link (an undeclared adjacency, or `connect()` never ran).
    pub fn propagate(&self, mut signal: SignalRecord) -> Result<SignalRecord> {
        let head = signal.current().ok_or(Error::EmptyRoute)?;
        let origin = self
            .nodes
            .get(head)
            .ok_or_else(|| Error::UnknownNode(head.to_string()))?;

        origin.propagate(self, &mut signal)?;
        Ok(signal)
    }
}

impl NetworkNode {
    pub(crate) fn propagate(&self, net: &Topology, signal: &mut SignalRecord) -> Result<()> {
        let Some(id) = signal.next_hop().map(|next| LinkId::new(self.label.as_str(), next)) else {
            return self.deliver(signal);
        };
        signal.update_path();

        let Some(link) = self.successive.get(&id).and_then(|wired| net.links.get(wired)) else {
            return Err(Error::MissingWiring { from: id.from, to: id.to });
        };
        link.propagate(net, signal)
    }

    /// Consume the last element of the route: this node is the destination.
    fn deliver(&self, signal: &mut SignalRecord) -> Result<()> {
        signal.update_path().ok_or(Error::EmptyRoute)?;
        trace!(node = %self.label, "signal delivered");
        Ok(())
    }
}

impl Link {
    pub(crate) fn propagate(&self, net: &Topology, signal: &mut SignalRecord) -> Result<()> {
        let Some(destination) = self.successive.as_deref().and_then(|label| net.nodes.get(label)) else {
            return Err(Error::MissingWiring {
                from: self.id.from.clone(),
                to: self.id.to.clone(),
            });
        };

        let noise = self.noise_generation(&net.params, signal.signal_power());
        let latency = self.latency_generation(&net.params);
        signal.update_noise_power(noise);
        signal.update_latency(latency);

        trace!(link = %self.id, noise, latency, "link crossed");

        destination.propagate(net, signal)
    }
}
