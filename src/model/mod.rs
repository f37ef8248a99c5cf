//! Models built from height field files, and the render buffers derived from them.

pub use self::ground_grid::{GroundGrid, GroundGridParameters};
pub use self::model::Model;
pub use self::parameters::{BuildParameters, TopologyParameters, DEFAULT_MAX_STRUCTURAL_EDGES};
pub use self::scene::Scene;
pub use self::wireframe::{Wireframe, WireframeParameters, DEFAULT_MAX_RENDER_LINES};

mod ground_grid;
mod model;
mod parameters;
mod scene;
mod wireframe;
