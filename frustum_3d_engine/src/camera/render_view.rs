/// RenderView - result of frustum culling.
///
/// Contains a snapshot of the view matrix used for culling, the keys of
/// the models that survived, and how many models were tested.
///
/// Ephemeral: lives for one frame.

use glam::Mat4;
use crate::scene::ModelKey;

/// Result of culling one frame's model list.
#[derive(Debug, Clone)]
pub struct RenderView {
    view_matrix: Mat4,
    visible_models: Vec<ModelKey>,
    tested_count: usize,
}

impl RenderView {
    /// Create a new RenderView. Built by `ModelCuller` implementations.
    pub fn new(view_matrix: Mat4, visible_models: Vec<ModelKey>, tested_count: usize) -> Self {
        Self {
            view_matrix,
            visible_models,
            tested_count,
        }
    }

    /// View matrix at the time of culling.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Keys of visible models, in list iteration order.
    pub fn visible_models(&self) -> &[ModelKey] {
        &self.visible_models
    }

    /// Number of visible models (the frame's render count).
    pub fn visible_count(&self) -> usize {
        self.visible_models.len()
    }

    /// Number of models considered.
    pub fn tested_count(&self) -> usize {
        self.tested_count
    }

    /// Number of models skipped.
    pub fn culled_count(&self) -> usize {
        self.tested_count - self.visible_models.len()
    }
}

#[cfg(test)]
#[path = "render_view_tests.rs"]
mod tests;
