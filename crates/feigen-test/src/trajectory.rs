//! Trajectory helpers shared across the FEIGEN test suites

use feigen_core::{DynamicalSystem, PhasePoint};

/// Record `steps` post-iteration states from a map.
pub fn record<M: DynamicalSystem>(map: &mut M, steps: usize) -> Vec<M::State> {
    (0..steps).map(|_| map.iterate()).collect()
}

/// Largest componentwise distance between two trajectories at matching
/// indices. Empty input yields `-inf`.
pub fn max_divergence<S: PhasePoint>(first: &[S], second: &[S]) -> f64 {
    first
        .iter()
        .zip(second.iter())
        .map(|(a, b)| a.abs_diff(b))
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Assert two scalars agree within `tolerance`.
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} within {tolerance}, got {actual}"
    );
}
