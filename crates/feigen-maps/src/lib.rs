//! FEIGEN Maps - Chaotic map implementations
//!
//! Each variant implements the capability subset it actually supports:
//! - [`LogisticMap`]: the full contract plus a closed-form derivative
//! - [`ModifiedLogisticMap`]: the bare logistic rule, stateless
//! - [`HenonHeilesMap`]: planar quadratic map
//! - [`DiscreteSystem`]: scalar sine map, differentiable
//! - [`ContinuousSystem`]: sine flow advanced by explicit time steps
//! - [`ExtendedSystem`]: three coupled coordinates, sequentially updated
//! - [`ChuaOscillator`]: unbounded Euler-style circuit model
//!
//! No variant validates numeric domain: divergence to infinity is the
//! system's own behavior and is left observable.

pub mod logistic;
pub mod henon;
pub mod discrete;
pub mod continuous;
pub mod extended;
pub mod chua;

pub use logistic::*;
pub use henon::*;
pub use discrete::*;
pub use continuous::*;
pub use extended::*;
pub use chua::*;
