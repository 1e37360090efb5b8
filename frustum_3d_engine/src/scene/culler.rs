/// Model culling strategies.
///
/// A ModelCuller determines which models of a ModelList are visible
/// from a camera. The camera must already be rendered and the frustum
/// constructed for the current frame.

use crate::camera::{Camera, Frustum, RenderView};
use super::model_list::{ModelKey, ModelList};

/// Strategy for determining visible models.
///
/// Called once per frame before drawing. `&mut self` allows stateful
/// implementations to keep data across frames.
pub trait ModelCuller: Send + Sync {
    /// Cull the model list and return the visible keys.
    fn cull(
        &mut self,
        models: &ModelList,
        camera: &Camera,
        frustum: &Frustum,
    ) -> RenderView;
}

/// Brute-force culler - returns ALL models (no actual culling).
///
/// Baseline for comparison, and for debugging the draw path.
#[derive(Debug, Default)]
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl ModelCuller for BruteForceCuller {
    fn cull(
        &mut self,
        models: &ModelList,
        camera: &Camera,
        _frustum: &Frustum,
    ) -> RenderView {
        let visible: Vec<ModelKey> = models.keys().collect();
        RenderView::new(*camera.view_matrix(), visible, models.len())
    }
}

/// Frustum culler - tests each model's bounding volume against the frustum.
#[derive(Debug, Default)]
pub struct FrustumCuller;

impl FrustumCuller {
    pub fn new() -> Self {
        Self
    }
}

impl ModelCuller for FrustumCuller {
    fn cull(
        &mut self,
        models: &ModelList,
        camera: &Camera,
        frustum: &Frustum,
    ) -> RenderView {
        let visible: Vec<ModelKey> = models.iter()
            .filter_map(|(key, model)| {
                if frustum.check_bounds(model.position, &model.bounds) {
                    Some(key)
                } else {
                    None
                }
            })
            .collect();

        RenderView::new(*camera.view_matrix(), visible, models.len())
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
