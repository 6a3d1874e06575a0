//! Sensitivity to initial conditions
//!
//! Two runs from different seeds share the one map instance and never
//! interleave: the first trajectory is fully computed, the state is reset,
//! then the second trajectory is computed.

use feigen_core::{DynamicalSystem, PhasePoint, Stateful};

/// Measures trajectory divergence between two initial conditions.
pub struct InitialConditionsSensitivityAnalyzer<M> {
    map: M,
}

impl<M> InitialConditionsSensitivityAnalyzer<M>
where
    M: DynamicalSystem + Stateful,
{
    pub fn new(map: M) -> Self {
        InitialConditionsSensitivityAnalyzer { map }
    }

    /// Run from `x1`, reset to `x2`, run again, and return the maximum
    /// componentwise distance at matching step indices. Zero iterations
    /// yield the maximum over an empty set, `-inf`.
    pub fn analyze(&mut self, x1: M::State, x2: M::State, num_iterations: usize) -> f64 {
        let first = self.run_from(x1, num_iterations);
        let second = self.run_from(x2, num_iterations);

        first
            .iter()
            .zip(second.iter())
            .map(|(a, b)| a.abs_diff(b))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    fn run_from(&mut self, start: M::State, num_iterations: usize) -> Vec<M::State> {
        self.map.set_state(start);

        let mut states = Vec::with_capacity(num_iterations);
        for _ in 0..num_iterations {
            self.map.iterate();
            states.push(self.map.state());
        }
        states
    }

    /// Consume the analyzer and hand back the map.
    pub fn into_map(self) -> M {
        self.map
    }
}
