//! Continuous sine flow
//!
//! `ẋ = sin x`, advanced by explicit Euler steps of caller-supplied size.
//! [`Flow::step`] returns the rate measured before the update, not the new
//! state.

use feigen_core::Flow;

/// Scalar continuous-time sine flow.
#[derive(Clone, Debug, Default)]
pub struct ContinuousSystem {
    x: f64,
}

impl ContinuousSystem {
    /// Create a flow at rest at the origin.
    pub fn new() -> Self {
        ContinuousSystem { x: 0.0 }
    }

    /// Create a flow from a fixed initial state.
    pub fn with_initial(x: f64) -> Self {
        ContinuousSystem { x }
    }

    /// Current state.
    pub fn state(&self) -> f64 {
        self.x
    }
}

impl Flow for ContinuousSystem {
    fn step(&mut self, dt: f64) -> f64 {
        let rate = self.x.sin();
        self.x += rate * dt;
        rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_a_fixed_point() {
        let mut flow = ContinuousSystem::new();
        assert_eq!(flow.step(0.5), 0.0);
        assert_eq!(flow.state(), 0.0);
    }

    #[test]
    fn test_step_returns_pre_update_rate() {
        let mut flow = ContinuousSystem::with_initial(1.0);
        let rate = flow.step(0.1);
        assert_eq!(rate, 1.0_f64.sin());
        assert!((flow.state() - (1.0 + 1.0_f64.sin() * 0.1)).abs() < 1e-15);
    }

    #[test]
    fn test_flow_approaches_pi() {
        // sin x > 0 on (0, pi), so the orbit drifts toward the attractor at pi.
        let mut flow = ContinuousSystem::with_initial(0.5);
        for _ in 0..2000 {
            flow.step(0.01);
        }
        assert!((flow.state() - std::f64::consts::PI).abs() < 1e-3);
    }
}
