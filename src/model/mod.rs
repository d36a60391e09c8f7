//! # Network Model
//!
//! Plain data types for the fiber network: nodes, links, routes and the
//! signal record threaded through a propagation.
//!
//! Design rule: no I/O here. Wiring and propagation live in `topology`.

pub mod node;
pub mod link;
pub mod route;
pub mod signal;
pub mod params;

pub use node::{NetworkNode, Position};
pub use link::{Link, LinkId};
pub use route::Route;
pub use signal::{SignalRecord, lin2db, db2lin};
pub use params::FiberParams;
