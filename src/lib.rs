//! # optical-network — Fiber Network Signal Propagation
//!
//! Models an optical-fiber network as a directed graph of nodes and links and
//! propagates a signal along a route, accumulating noise and latency hop by hop.
//!
//! ## Design Principles
//!
//! 1. **Two-pass build**: `Topology::new` creates nodes and links, `connect()` wires them
//! 2. **All simple routes**: `find_paths` enumerates every loop-free route, not just the shortest
//! 3. **Owned records**: each propagation takes a `SignalRecord` by value and hands it back
//! 4. **Read-only after wiring**: a connected `Topology` is `Sync` and needs no locks
//!
//! ## Quick Start
//!
//! ```rust
//! use optical_network::{Route, SignalRecord, Topology, TopologyDescription};
//!
//! # fn example() -> optical_network::Result<()> {
//! let description = TopologyDescription::new()
//!     .with_node("A", (0.0, 0.0), ["B"])
//!     .with_node("B", (0.0, 300_000.0), ["A", "C"])
//!     .with_node("C", (300_000.0, 300_000.0), ["B"]);
//!
//! let mut network = Topology::new(&description)?;
//! network.connect();
//!
//! for route in network.find_paths("A", "C") {
//!     let signal = network.propagate(SignalRecord::new(1e-3, route.clone()))?;
//!     println!("{route}: {:.3e} s, {:.1} dB", signal.latency(), signal.snr_db());
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `parallel` | yes | Run `Topology::survey` on the rayon thread pool |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod description;
pub mod topology;
pub mod survey;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    NetworkNode, Position, Link, LinkId, Route, SignalRecord, FiberParams,
    lin2db, db2lin,
};

// ============================================================================
// Re-exports: Topology
// ============================================================================

pub use description::{TopologyDescription, NodeDescription};
pub use topology::Topology;
pub use survey::RouteMetrics;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("No wired link from {from} to {to}")]
    MissingWiring { from: String, to: String },

    #[error("Propagation invoked with an empty route")]
    EmptyRoute,

    #[error("Invalid topology description: {0}")]
    InvalidDescription(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
