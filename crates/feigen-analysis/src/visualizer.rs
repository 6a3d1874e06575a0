//! Trajectory recording

use feigen_core::{DynamicalSystem, Stateful};

/// Records the sequence of states a map visits.
pub struct Visualizer<M> {
    map: M,
}

impl<M> Visualizer<M>
where
    M: DynamicalSystem + Stateful,
{
    pub fn new(map: M) -> Self {
        Visualizer { map }
    }

    /// Advance the map `iterations` times, recording each returned state.
    ///
    /// The pre-run state is observed once but never recorded, so the output
    /// starts at the first post-step snapshot. The map is advanced
    /// irreversibly; a second call continues from where this one stopped.
    pub fn visualize(&mut self, iterations: usize) -> Vec<M::State> {
        let _ = self.map.state();

        let mut states = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            states.push(self.map.iterate());
        }
        states
    }

    /// Consume the visualizer and hand back the map.
    pub fn into_map(self) -> M {
        self.map
    }
}
