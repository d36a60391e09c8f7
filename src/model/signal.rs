//! Signal record — the mutable carrier threaded along a route.

use std::collections::VecDeque;
use serde::Serialize;
use super::Route;

/// Linear ratio to decibels.
pub fn lin2db(x: f64) -> f64 {
    10.0 * x.log10()
}

/// Decibels to linear ratio.
pub fn db2lin(x: f64) -> f64 {
    10f64.powf(x / 10.0)
}

/// Signal power, accumulated impairments and the part of the route still to
/// be traversed.
///
/// `signal_power` is never changed by propagation: noise is accumulated
/// against the injected power. `noise_power` and `latency` only grow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalRecord {
    signal_power: f64,
    noise_power: f64,
    latency: f64,
    remaining_route: VecDeque<String>,
}

impl SignalRecord {
    pub fn new(signal_power: f64, route: impl Into<Route>) -> Self {
        let route: Route = route.into();
        Self {
            signal_power,
            noise_power: 0.0,
            latency: 0.0,
            remaining_route: route.into_labels().into(),
        }
    }

    /// Injected signal power, W.
    pub fn signal_power(&self) -> f64 {
        self.signal_power
    }

    /// Accumulated noise power, W.
    pub fn noise_power(&self) -> f64 {
        self.noise_power
    }

    /// Accumulated latency, s.
    pub fn latency(&self) -> f64 {
        self.latency
    }

    pub fn remaining_route(&self) -> &VecDeque<String> {
        &self.remaining_route
    }

    /// Signal-to-noise ratio in dB; `+inf` when no noise was accumulated.
    pub fn snr_db(&self) -> f64 {
        if self.noise_power == 0.0 {
            f64::INFINITY
        } else {
            lin2db(self.signal_power / self.noise_power)
        }
    }

    pub(crate) fn current(&self) -> Option<&str> {
        self.remaining_route.front().map(String::as_str)
    }

    pub(crate) fn next_hop(&self) -> Option<&str> {
        self.remaining_route.get(1).map(String::as_str)
    }

    /// Drop the head of the remaining route.
    pub(crate) fn update_path(&mut self) -> Option<String> {
        self.remaining_route.pop_front()
    }

    pub(crate) fn update_noise_power(&mut self, increment: f64) {
        debug_assert!(increment >= 0.0, "noise increment must be non-negative");
        self.noise_power += increment;
    }

    pub(crate) fn update_latency(&mut self, increment: f64) {
        debug_assert!(increment >= 0.0, "latency increment must be non-negative");
        self.latency += increment;
    }
}
