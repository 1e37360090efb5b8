//! Scene management module
//!
//! Provides the model list, culling strategies, the per-frame scene
//! driver, and the shader matrix block.

mod model_list;
mod culler;
mod matrix_buffer;
mod scene;

pub use model_list::{ModelList, ModelInfo, ModelKey, BoundingVolume};
pub use culler::{ModelCuller, BruteForceCuller, FrustumCuller};
pub use matrix_buffer::MatrixBuffer;
pub use scene::Scene;
