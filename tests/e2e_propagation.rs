//! End-to-end tests for signal propagation.
//!
//! Each test builds a topology from a description, wires it, and runs
//! records through `Topology::propagate`.

use optical_network::{Error, Route, SignalRecord, Topology, TopologyDescription};

const SIGNAL_POWER: f64 = 1e-3;

// ============================================================================
// Helpers
// ============================================================================

/// A(0,0) — B(0,300km) — C(300km,300km)
fn line() -> Topology {
    let desc = TopologyDescription::new()
        .with_node("A", (0.0, 0.0), ["B"])
        .with_node("B", (0.0, 300_000.0), ["A", "C"])
        .with_node("C", (300_000.0, 300_000.0), ["B"]);
    let mut net = Topology::new(&desc).unwrap();
    net.connect();
    net
}

fn fixture() -> Topology {
    let desc = TopologyDescription::from_json(include_str!("fixtures/nodes.json")).unwrap();
    let mut net = Topology::new(&desc).unwrap();
    net.connect();
    net
}

/// Latency and noise a route should accumulate, summed link by link.
fn expected_totals(net: &Topology, route: &Route, signal_power: f64) -> (f64, f64) {
    let params = net.params();
    route.links().fold((0.0, 0.0), |(latency, noise), id| {
        let link = net.link(&id).unwrap();
        (
            latency + link.length() / params.propagation_speed(),
            noise + params.noise_coefficient * signal_power * link.length(),
        )
    })
}

// ============================================================================
// 1. Reference line scenario
// ============================================================================

#[test]
fn test_line_scenario() {
    let net = line();
    let sig = net
        .propagate(SignalRecord::new(SIGNAL_POWER, Route::new(["A", "B", "C"])))
        .unwrap();

    assert!((sig.latency() - 3e-3).abs() < 1e-15, "latency was {}", sig.latency());
    assert!((sig.noise_power() - 6e-7).abs() < 1e-18, "noise was {}", sig.noise_power());
    assert_eq!(sig.signal_power(), SIGNAL_POWER);
    assert!(sig.remaining_route().is_empty());

    let (latency, noise) = expected_totals(&net, &Route::new(["A", "B", "C"]), SIGNAL_POWER);
    assert_eq!(sig.latency(), latency);
    assert_eq!(sig.noise_power(), noise);
}

#[test]
fn test_reverse_direction_matches() {
    let net = line();
    let forward = net
        .propagate(SignalRecord::new(SIGNAL_POWER, Route::new(["A", "B", "C"])))
        .unwrap();
    let backward = net
        .propagate(SignalRecord::new(SIGNAL_POWER, Route::new(["C", "B", "A"])))
        .unwrap();
    assert_eq!(forward.latency(), backward.latency());
    assert_eq!(forward.noise_power(), backward.noise_power());
}

#[test]
fn test_origin_only_route() {
    let net = line();
    let sig = net.propagate(SignalRecord::new(SIGNAL_POWER, Route::new(["A"]))).unwrap();
    assert_eq!(sig.latency(), 0.0);
    assert_eq!(sig.noise_power(), 0.0);
    assert_eq!(sig.snr_db(), f64::INFINITY);
}

// ============================================================================
// 2. Failures
// ============================================================================

#[test]
fn test_missing_adjacency_is_fatal() {
    let net = fixture();
    // A and E are not adjacent.
    let err = net
        .propagate(SignalRecord::new(SIGNAL_POWER, Route::new(["A", "E"])))
        .unwrap_err();
    assert!(matches!(err, Error::MissingWiring { ref from, ref to } if from == "A" && to == "E"));
}

#[test]
fn test_missing_adjacency_mid_route_is_fatal() {
    let net = fixture();
    let err = net
        .propagate(SignalRecord::new(SIGNAL_POWER, Route::new(["A", "B", "C"])))
        .unwrap_err();
    assert!(matches!(err, Error::MissingWiring { ref from, ref to } if from == "B" && to == "C"));
}

#[test]
fn test_empty_route_is_fatal() {
    let net = fixture();
    let err = net
        .propagate(SignalRecord::new(SIGNAL_POWER, Vec::<String>::new()))
        .unwrap_err();
    assert!(matches!(err, Error::EmptyRoute));
}

#[test]
fn test_unwired_topology_is_fatal() {
    let desc = TopologyDescription::from_json(include_str!("fixtures/nodes.json")).unwrap();
    let net = Topology::new(&desc).unwrap();
    let err = net
        .propagate(SignalRecord::new(SIGNAL_POWER, Route::new(["A", "B"])))
        .unwrap_err();
    assert!(matches!(err, Error::MissingWiring { .. }));
}

// ============================================================================
// 3. Every enumerated route propagates
// ============================================================================

#[test]
fn test_every_fixture_route_accumulates_per_link() {
    let net = fixture();
    let labels: Vec<&str> = net.labels().collect();

    for start in &labels {
        for end in &labels {
            for route in net.find_paths(start, end) {
                let sig = net
                    .propagate(SignalRecord::new(SIGNAL_POWER, route.clone()))
                    .unwrap();
                let (latency, noise) = expected_totals(&net, &route, SIGNAL_POWER);
                assert_eq!(sig.latency(), latency, "latency on {route}");
                assert_eq!(sig.noise_power(), noise, "noise on {route}");
                assert_eq!(sig.signal_power(), SIGNAL_POWER);
                assert!(sig.remaining_route().is_empty());
            }
        }
    }
}

#[test]
fn test_longer_route_is_noisier() {
    let net = fixture();
    let direct = net
        .propagate(SignalRecord::new(SIGNAL_POWER, Route::new(["A", "D"])))
        .unwrap();
    let detour = net
        .propagate(SignalRecord::new(SIGNAL_POWER, Route::new(["A", "B", "D"])))
        .unwrap();
    assert!(detour.noise_power() > direct.noise_power());
    assert!(detour.latency() > direct.latency());
    assert!(detour.snr_db() < direct.snr_db());
}

// ============================================================================
// 4. Concurrent propagation over a shared topology
// ============================================================================

#[test]
fn test_concurrent_propagations_share_topology() {
    let net = fixture();
    let routes = net.find_paths("A", "F");
    assert!(!routes.is_empty());

    let sequential: Vec<SignalRecord> = routes
        .iter()
        .map(|r| net.propagate(SignalRecord::new(SIGNAL_POWER, r.clone())).unwrap())
        .collect();

    let concurrent: Vec<SignalRecord> = std::thread::scope(|s| {
        let handles: Vec<_> = routes
            .iter()
            .map(|r| {
                let net = &net;
                s.spawn(move || net.propagate(SignalRecord::new(SIGNAL_POWER, r.clone())).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
}
