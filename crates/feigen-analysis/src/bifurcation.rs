//! Bifurcation sweep over a map parameter

use feigen_core::{DynamicalSystem, Parameterized, Randomizable, Stateful};

/// Iterations discarded before sampling so the orbit settles onto its
/// attractor.
pub const TRANSIENT_ITERATIONS: usize = 1000;

/// States sampled per parameter value after the transient.
pub const SAMPLES_PER_PARAMETER: usize = 100;

/// Long-run state samples for one swept parameter value.
#[derive(Clone, Debug, PartialEq)]
pub struct BifurcationBranch<S> {
    pub parameter: f64,
    pub values: Vec<S>,
}

/// Sweeps a map across parameter values and samples its long-run states.
pub struct BifurcationAnalyzer<M> {
    map: M,
}

impl<M> BifurcationAnalyzer<M>
where
    M: DynamicalSystem + Stateful + Parameterized + Randomizable,
{
    pub fn new(map: M) -> Self {
        BifurcationAnalyzer { map }
    }

    /// Sweep the parameter values in input order, reusing the one map
    /// instance: set parameter, reseed, discard the transient, sample.
    pub fn analyze(&mut self, parameter_values: &[f64]) -> Vec<BifurcationBranch<M::State>> {
        let mut branches = Vec::with_capacity(parameter_values.len());

        for &parameter in parameter_values {
            self.map.set_parameter(parameter);
            self.map.randomize_state();

            for _ in 0..TRANSIENT_ITERATIONS {
                self.map.iterate();
            }

            let mut values = Vec::with_capacity(SAMPLES_PER_PARAMETER);
            for _ in 0..SAMPLES_PER_PARAMETER {
                self.map.iterate();
                values.push(self.map.state());
            }

            tracing::trace!("sampled {} states at parameter {}", values.len(), parameter);
            branches.push(BifurcationBranch { parameter, values });
        }

        branches
    }

    /// Consume the analyzer and hand back the map in its post-sweep state.
    pub fn into_map(self) -> M {
        self.map
    }
}
