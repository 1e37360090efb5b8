/*!
# Frustum 3D Engine

Camera, view frustum and visibility culling for a 3D scene.

Each frame the camera rebuilds its view matrix, the frustum is extracted
from the projection and view matrices, and the model list is culled
against it. The resulting render view holds the models that survive.

## Architecture

- **Camera**: position and rotation to a left-handed view matrix
- **Frustum**: six clip planes with point, sphere, cube and box tests
- **Position**: input-driven movement feeding the camera
- **ModelList**: bounded models keyed by stable handles
- **ModelCuller**: pluggable culling strategy producing a RenderView
- **Scene**: ties the above into a per-frame pass
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod camera;
pub mod scene;
pub mod timer;

// Main frustum3d namespace module
pub mod frustum3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger singleton
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::GraphicsConfig;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Timing sub-module
    pub mod timer {
        pub use crate::timer::{Timer, FpsCounter};
    }
}

// Re-export math library at crate root
pub use glam;
