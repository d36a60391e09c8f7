//! Route survey — propagate every simple route between every ordered pair
//! of distinct nodes.
//!
//! Pairs are independent: the topology is only read, and each propagation
//! gets its own record. With the `parallel` feature they run on the rayon
//! pool; output order is the same either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::model::{Route, SignalRecord};
use crate::topology::Topology;
use crate::Result;

/// Outcome of propagating one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMetrics {
    pub route: Route,
    pub signal_power: f64,
    pub noise_power: f64,
    pub latency: f64,
    /// `+inf` for a noiseless route.
    pub snr_db: f64,
}

impl RouteMetrics {
    pub fn from_signal(route: Route, signal: &SignalRecord) -> Self {
        Self {
            route,
            signal_power: signal.signal_power(),
            noise_power: signal.noise_power(),
            latency: signal.latency(),
            snr_db: signal.snr_db(),
        }
    }
}

impl Topology {
    /// Metrics for every simple route from `start` to `end`, in enumeration order.
    pub fn route_metrics(&self, start: &str, end: &str, signal_power: f64) -> Result<Vec<RouteMetrics>> {
        self.find_paths(start, end)
            .into_iter()
            .map(|route| {
                let signal = self.propagate(SignalRecord::new(signal_power, route.clone()))?;
                Ok(RouteMetrics::from_signal(route, &signal))
            })
            .collect()
    }

    /// Metrics for every route between every ordered pair of distinct nodes,
    /// ordered by start label, then end label, then enumeration order.
    ///
    /// Pairs come out sorted by label, not in the order nodes appear in the
    /// description.
    pub fn survey(&self, signal_power: f64) -> Result<Vec<RouteMetrics>> {
        let pairs: Vec<(&str, &str)> = self
            .labels()
            .flat_map(move |start| self.labels().map(move |end| (start, end)))
            .filter(|(start, end)| start != end)
            .collect();

        #[cfg(feature = "parallel")]
        let per_pair: Vec<Result<Vec<RouteMetrics>>> = pairs
            .par_iter()
            .map(|(start, end)| self.route_metrics(start, end, signal_power))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let per_pair: Vec<Result<Vec<RouteMetrics>>> = pairs
            .iter()
            .map(|(start, end)| self.route_metrics(start, end, signal_power))
            .collect();

        let mut metrics = Vec::new();
        for routes in per_pair {
            metrics.extend(routes?);
        }

        debug!(pairs = pairs.len(), routes = metrics.len(), "survey complete");
        Ok(metrics)
    }
}
