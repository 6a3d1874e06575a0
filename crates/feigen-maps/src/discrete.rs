//! Discrete sine system
//!
//! `x' = sin x`. Every orbit converges toward zero, which makes this the
//! well-behaved counterpart to the chaotic variants.

use feigen_core::{Differentiable, DynamicalSystem, Randomizable, Stateful};

/// Scalar discrete-time sine map.
#[derive(Clone, Debug)]
pub struct DiscreteSystem {
    x: f64,
}

impl DiscreteSystem {
    /// Create a system with a random initial state in [0, 1).
    pub fn new() -> Self {
        DiscreteSystem { x: rand::random() }
    }

    /// Create a system from a fixed initial state.
    pub fn seeded(x: f64) -> Self {
        DiscreteSystem { x }
    }
}

impl Default for DiscreteSystem {
    fn default() -> Self {
        DiscreteSystem::new()
    }
}

impl DynamicalSystem for DiscreteSystem {
    type State = f64;

    fn iterate(&mut self) -> f64 {
        self.x = self.x.sin();
        self.x
    }
}

impl Stateful for DiscreteSystem {
    fn state(&self) -> f64 {
        self.x
    }

    fn set_state(&mut self, state: f64) {
        self.x = state;
    }
}

impl Randomizable for DiscreteSystem {
    fn randomize_state(&mut self) {
        self.x = rand::random();
    }
}

impl Differentiable for DiscreteSystem {
    fn derivative(&self, at: f64) -> f64 {
        at.cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_iterate_applies_sine() {
        let mut map = DiscreteSystem::seeded(0.5);
        assert_eq!(map.iterate(), 0.5_f64.sin());
        assert_eq!(map.iterate(), 0.5_f64.sin().sin());
    }

    #[test]
    fn test_orbit_contracts_toward_zero() {
        let mut map = DiscreteSystem::seeded(0.9);
        let mut previous = map.state();
        for _ in 0..50 {
            let next = map.iterate();
            assert!(next.abs() <= previous.abs());
            previous = next;
        }
    }

    #[test]
    fn test_derivative_is_cosine() {
        let map = DiscreteSystem::seeded(0.0);
        assert_eq!(map.derivative(0.0), 1.0);
        assert!(map.derivative(FRAC_PI_2).abs() < 1e-15);
    }
}
