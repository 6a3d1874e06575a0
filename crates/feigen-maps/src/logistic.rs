//! Logistic map variants
//!
//! `x' = r·x·(1-x)`, the canonical one-dimensional chaotic map. The stateful
//! [`LogisticMap`] owns its coordinate; [`ModifiedLogisticMap`] is the bare
//! rule applied to caller-supplied values.

use feigen_core::{Differentiable, DynamicalSystem, Parameterized, Randomizable, Stateful};

/// Default growth rate, inside the chaotic band of the bifurcation diagram.
pub const DEFAULT_GROWTH_RATE: f64 = 3.8;

/// Stateful logistic map.
#[derive(Clone, Debug)]
pub struct LogisticMap {
    x: f64,
    growth_rate: f64,
}

impl LogisticMap {
    /// Create a map with a random initial state and the default growth rate.
    pub fn new() -> Self {
        LogisticMap {
            x: rand::random(),
            growth_rate: DEFAULT_GROWTH_RATE,
        }
    }

    /// Create a map from a fixed initial state and growth rate.
    pub fn seeded(x: f64, growth_rate: f64) -> Self {
        LogisticMap { x, growth_rate }
    }

    /// Current growth rate.
    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }
}

impl Default for LogisticMap {
    fn default() -> Self {
        LogisticMap::new()
    }
}

impl DynamicalSystem for LogisticMap {
    type State = f64;

    fn iterate(&mut self) -> f64 {
        self.x = self.growth_rate * self.x * (1.0 - self.x);
        self.x
    }
}

impl Stateful for LogisticMap {
    fn state(&self) -> f64 {
        self.x
    }

    fn set_state(&mut self, state: f64) {
        self.x = state;
    }
}

impl Parameterized for LogisticMap {
    fn set_parameter(&mut self, value: f64) {
        self.growth_rate = value;
    }
}

impl Randomizable for LogisticMap {
    fn randomize_state(&mut self) {
        self.x = rand::random();
    }
}

impl Differentiable for LogisticMap {
    fn derivative(&self, at: f64) -> f64 {
        self.growth_rate * (1.0 - 2.0 * at)
    }
}

/// Stateless logistic rule: holds only a growth rate and maps
/// caller-supplied values.
#[derive(Clone, Copy, Debug)]
pub struct ModifiedLogisticMap {
    growth_rate: f64,
}

impl ModifiedLogisticMap {
    pub fn new(growth_rate: f64) -> Self {
        ModifiedLogisticMap { growth_rate }
    }

    /// Apply one logistic step to `x`.
    pub fn apply(&self, x: f64) -> f64 {
        self.growth_rate * x * (1.0 - x)
    }
}

impl Default for ModifiedLogisticMap {
    fn default() -> Self {
        ModifiedLogisticMap::new(DEFAULT_GROWTH_RATE)
    }
}
