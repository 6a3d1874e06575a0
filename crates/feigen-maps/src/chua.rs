//! Chua oscillator
//!
//! Euler-style accumulation of the circuit rates with no explicit time
//! step; orbits grow without bound.

use feigen_core::{DynamicalSystem, Point3, Stateful};

const ALPHA: f64 = 15.6;
const BETA: f64 = 28.0;
const GAMMA: f64 = 3.0;

/// Chua circuit model over a spatial state.
#[derive(Clone, Debug)]
pub struct ChuaOscillator {
    state: Point3,
}

impl ChuaOscillator {
    /// Create an oscillator with a random x in [0, 1) and y = z = 0.
    pub fn new() -> Self {
        ChuaOscillator {
            state: Point3::new(rand::random(), 0.0, 0.0),
        }
    }

    /// Create an oscillator from a fixed initial state.
    pub fn seeded(state: Point3) -> Self {
        ChuaOscillator { state }
    }
}

impl Default for ChuaOscillator {
    fn default() -> Self {
        ChuaOscillator::new()
    }
}

impl DynamicalSystem for ChuaOscillator {
    type State = Point3;

    fn iterate(&mut self) -> Point3 {
        let Point3 { x, y, z } = self.state;

        let dx = ALPHA * (y - x - GAMMA * x);
        let dy = x - y + z;
        let dz = -BETA * y;

        self.state.x += dx;
        self.state.y += dy;
        self.state.z += dz;

        self.state
    }
}

impl Stateful for ChuaOscillator {
    fn state(&self) -> Point3 {
        self.state
    }

    fn set_state(&mut self, state: Point3) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_rates() {
        let mut map = ChuaOscillator::seeded(Point3::new(1.0, 0.0, 0.0));
        let next = map.iterate();

        // dx = 15.6 * (0 - 1 - 3), dy = 1, dz = 0.
        assert!((next.x - (1.0 - 62.4)).abs() < 1e-12);
        assert_eq!(next.y, 1.0);
        assert_eq!(next.z, 0.0);
    }

    #[test]
    fn test_accumulation_is_unbounded() {
        let mut map = ChuaOscillator::seeded(Point3::new(0.5, 0.0, 0.0));
        let mut largest = 0.0_f64;
        for _ in 0..50 {
            let state = map.iterate();
            largest = largest.max(state.x.abs());
        }
        assert!(largest > 1e3);
    }
}
