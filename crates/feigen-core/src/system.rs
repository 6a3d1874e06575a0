//! Capability contract for dynamical systems
//!
//! The contract is a set of independent capabilities, not one wide
//! interface: a map implements exactly the subset it supports, and each
//! analyzer states the subset it requires as trait bounds. Driving a map
//! that lacks a required capability is a compile error, never a runtime
//! failure.

use crate::PhasePoint;

/// A deterministic update rule advancing an owned state one step at a time.
pub trait DynamicalSystem {
    /// Coordinate state produced by each step.
    type State: PhasePoint;

    /// Advance the internal state by exactly one step and return it.
    fn iterate(&mut self) -> Self::State;
}

/// Read and overwrite the current state, used to seed comparative runs.
pub trait Stateful: DynamicalSystem {
    /// Current state, without advancing the system.
    fn state(&self) -> Self::State;

    /// Overwrite the coordinate state.
    fn set_state(&mut self, state: Self::State);
}

/// Tunable update-rule coefficient, e.g. a growth rate.
pub trait Parameterized: DynamicalSystem {
    fn set_parameter(&mut self, value: f64);
}

/// Reseed every coordinate uniformly from [0, 1).
pub trait Randomizable: DynamicalSystem {
    fn randomize_state(&mut self);
}

/// Closed-form derivative of the update rule.
pub trait Differentiable: DynamicalSystem {
    /// Derivative of the iteration function evaluated at `at`.
    fn derivative(&self, at: Self::State) -> f64;
}

/// Continuous-time system advanced by an explicit time step.
pub trait Flow {
    /// Advance the state by `dt` and return the rate of change measured
    /// before the update.
    fn step(&mut self, dt: f64) -> f64;
}
