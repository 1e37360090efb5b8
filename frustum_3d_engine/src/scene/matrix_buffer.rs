/// MatrixBuffer - per-draw world/view/projection block in shader layout.
///
/// Shaders read the matrices row-major, so each one is transposed on
/// construction. The bytes are handed to the device layer's constant
/// buffer upload as-is.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// World, view and projection matrices, transposed for upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MatrixBuffer {
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl MatrixBuffer {
    /// Size in bytes of one block.
    pub const SIZE: usize = std::mem::size_of::<MatrixBuffer>();

    /// Transpose the three matrices into a shader-ready block.
    pub fn new(world: &Mat4, view: &Mat4, projection: &Mat4) -> Self {
        Self {
            world: world.transpose(),
            view: view.transpose(),
            projection: projection.transpose(),
        }
    }

    /// Raw bytes for a constant buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "matrix_buffer_tests.rs"]
mod tests;
