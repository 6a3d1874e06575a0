//! Extended three-coordinate system
//!
//! Coupled trigonometric update with a sequential dependency: the y and z
//! updates read the x value produced earlier in the same step, and z also
//! reads the just-updated y. Reordering the assignments changes the orbit.

use feigen_core::{DynamicalSystem, Point3, Randomizable, Stateful};

/// Three-coordinate trigonometric system.
#[derive(Clone, Debug)]
pub struct ExtendedSystem {
    state: Point3,
}

impl ExtendedSystem {
    /// Create a system with all three coordinates drawn from [0, 1).
    pub fn new() -> Self {
        ExtendedSystem {
            state: Point3::new(rand::random(), rand::random(), rand::random()),
        }
    }

    /// Create a system from a fixed initial state.
    pub fn seeded(state: Point3) -> Self {
        ExtendedSystem { state }
    }
}

impl Default for ExtendedSystem {
    fn default() -> Self {
        ExtendedSystem::new()
    }
}

impl DynamicalSystem for ExtendedSystem {
    type State = Point3;

    fn iterate(&mut self) -> Point3 {
        let x = self.state.y.sin() + self.state.z;
        let y = x.cos() + self.state.z;
        let z = x.sin() + y.cos();

        self.state = Point3::new(x, y, z);
        self.state
    }
}

impl Stateful for ExtendedSystem {
    fn state(&self) -> Point3 {
        self.state
    }

    fn set_state(&mut self, state: Point3) {
        self.state = state;
    }
}

impl Randomizable for ExtendedSystem {
    fn randomize_state(&mut self) {
        self.state = Point3::new(rand::random(), rand::random(), rand::random());
    }
}
