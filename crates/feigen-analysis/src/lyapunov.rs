//! Lyapunov exponent estimation
//!
//! Mean of `ln |f'(x_i)|` along the trajectory the map actually visits. The
//! mean divides by the requested iteration count, never by the number of
//! finite terms: a zero derivative contributes `ln 0 = -inf`, which
//! poisons the result and stays observable.

use feigen_core::{Differentiable, DynamicalSystem, Stateful};

/// Estimates the Lyapunov exponent of a differentiable map.
pub struct LyapunovExponentsCalculator<M> {
    map: M,
}

impl<M> LyapunovExponentsCalculator<M>
where
    M: DynamicalSystem + Stateful + Differentiable,
{
    pub fn new(map: M) -> Self {
        LyapunovExponentsCalculator { map }
    }

    /// Accumulate over `num_iterations` steps starting from whatever state
    /// the map is already in; the derivative is evaluated at each
    /// pre-iteration state. Zero iterations yield `0/0 = NaN`.
    pub fn calculate(&mut self, num_iterations: usize) -> f64 {
        let mut lambda = 0.0;
        let mut state = self.map.state();

        for _ in 0..num_iterations {
            let pre = state;
            state = self.map.iterate();
            lambda += self.map.derivative(pre).abs().ln();
        }

        lambda / num_iterations as f64
    }

    /// Consume the calculator and hand back the map.
    pub fn into_map(self) -> M {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feigen_maps::{DiscreteSystem, LogisticMap};

    #[test]
    fn test_chaotic_logistic_exponent_is_positive() {
        // The fully chaotic logistic map (r = 4) has infinite-time exponent
        // ln 2; the finite-time estimate must come out clearly positive.
        let map = LogisticMap::seeded(0.2, 4.0);
        let mut calculator = LyapunovExponentsCalculator::new(map);
        let lambda = calculator.calculate(10_000);

        assert!(lambda > 0.5, "lambda = {lambda}");
        assert!(lambda.is_finite(), "lambda = {lambda}");
    }

    #[test]
    fn test_stable_orbit_has_negative_exponent() {
        let map = LogisticMap::seeded(0.3, 2.5);
        let mut calculator = LyapunovExponentsCalculator::new(map);
        assert!(calculator.calculate(1_000) < 0.0);
    }

    #[test]
    fn test_zero_derivative_poisons_the_mean() {
        // The first pre-iteration state is exactly the critical point 0.5,
        // where the logistic derivative vanishes.
        let map = LogisticMap::seeded(0.5, 3.8);
        let mut calculator = LyapunovExponentsCalculator::new(map);
        assert_eq!(calculator.calculate(10), f64::NEG_INFINITY);
    }

    #[test]
    fn test_zero_iterations_is_nan() {
        let mut calculator = LyapunovExponentsCalculator::new(LogisticMap::seeded(0.4, 3.8));
        assert!(calculator.calculate(0).is_nan());
    }

    #[test]
    fn test_does_not_reset_map_state() {
        let mut map = DiscreteSystem::seeded(0.8);
        map.iterate();
        let resumed_from = map.state();

        let mut calculator = LyapunovExponentsCalculator::new(map);
        calculator.calculate(3);

        // Three further sine applications from where the map already was.
        let expected = resumed_from.sin().sin().sin();
        assert_eq!(calculator.into_map().state(), expected);
    }
}
