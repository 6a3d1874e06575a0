//! FEIGEN Analysis - Derived reports over any capable map
//!
//! Each analyzer owns the map it drives and declares the capability subset
//! it requires as trait bounds:
//! - [`BifurcationAnalyzer`]: long-run state samples across a parameter sweep
//! - [`LyapunovExponentsCalculator`]: mean log-derivative along a trajectory
//! - [`InitialConditionsSensitivityAnalyzer`]: divergence of re-seeded runs
//! - [`Visualizer`]: plain trajectory recording
//!
//! All analyzers reuse their one map instance sequentially; that ordering is
//! part of the contract, not an implementation detail.

pub mod bifurcation;
pub mod lyapunov;
pub mod sensitivity;
pub mod visualizer;

pub use bifurcation::*;
pub use lyapunov::*;
pub use sensitivity::*;
pub use visualizer::*;
