/// Scene - camera, frustum and model list driven once per frame.
///
/// `frame()` runs the per-frame sequence: render the camera, construct
/// the frustum from the projection and the fresh view matrix, then let
/// the culler pick the visible models.

use glam::Mat4;
use crate::camera::{Camera, Frustum, RenderView};
use crate::config::GraphicsConfig;
use crate::error::Result;
use crate::engine_debug;
use super::culler::{FrustumCuller, ModelCuller};
use super::model_list::ModelList;

/// A renderable scene: one camera looking at one model list.
pub struct Scene {
    config: GraphicsConfig,
    projection_matrix: Mat4,
    camera: Camera,
    frustum: Frustum,
    models: ModelList,
    culler: Box<dyn ModelCuller>,
    frame_index: u64,
}

impl Scene {
    /// Create an empty scene using frustum culling.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration fails validation.
    pub fn new(config: GraphicsConfig) -> Result<Self> {
        Self::with_culler(config, Box::new(FrustumCuller::new()))
    }

    /// Create an empty scene with a custom culling strategy.
    pub fn with_culler(config: GraphicsConfig, culler: Box<dyn ModelCuller>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            projection_matrix: config.projection_matrix(),
            camera: Camera::new(),
            frustum: Frustum::new(),
            models: ModelList::new(),
            culler,
            frame_index: 0,
        })
    }

    // ===== ACCESSORS =====

    pub fn config(&self) -> &GraphicsConfig {
        &self.config
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Frustum constructed by the last `frame()`.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    pub fn models(&self) -> &ModelList {
        &self.models
    }

    pub fn models_mut(&mut self) -> &mut ModelList {
        &mut self.models
    }

    /// Replace the model list.
    pub fn set_models(&mut self, models: ModelList) {
        self.models = models;
    }

    /// Replace the culling strategy.
    pub fn set_culler(&mut self, culler: Box<dyn ModelCuller>) {
        self.culler = culler;
    }

    /// Number of completed frames.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    // ===== FRAME =====

    /// Run one frame: camera render, frustum construction, culling.
    pub fn frame(&mut self) -> RenderView {
        self.camera.render();

        self.frustum.construct(
            self.config.screen_depth,
            &self.projection_matrix,
            self.camera.view_matrix(),
        );

        let view = self.culler.cull(&self.models, &self.camera, &self.frustum);
        self.frame_index += 1;

        engine_debug!("frustum3d::Scene",
            "Frame {}: rendered {} of {} models",
            self.frame_index, view.visible_count(), view.tested_count());

        view
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
