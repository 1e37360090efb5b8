/// Graphics configuration - screen size, clip distances and field of view.
///
/// These are the application-level constants the device layer uses to
/// build its projection matrix. `screen_depth` is also the far distance
/// handed to `Frustum::construct` every frame.

use glam::Mat4;
use crate::error::Result;
use crate::engine_bail;

/// Screen and projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphicsConfig {
    /// Back buffer width in pixels
    pub screen_width: u32,
    /// Back buffer height in pixels
    pub screen_height: u32,
    /// Near clip distance
    pub screen_near: f32,
    /// Far clip distance (also the frustum's far plane)
    pub screen_depth: f32,
    /// Vertical field of view in radians
    pub field_of_view: f32,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            screen_near: 0.1,
            screen_depth: 1000.0,
            field_of_view: std::f32::consts::FRAC_PI_4,
        }
    }
}

impl GraphicsConfig {
    /// Check that the parameters describe a usable perspective projection.
    pub fn validate(&self) -> Result<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            engine_bail!("frustum3d::Config",
                "screen size must be non-zero (got {}x{})",
                self.screen_width, self.screen_height);
        }
        if !(self.screen_near > 0.0) {
            engine_bail!("frustum3d::Config",
                "screen_near must be positive (got {})", self.screen_near);
        }
        if !(self.screen_depth > self.screen_near) {
            engine_bail!("frustum3d::Config",
                "screen_depth ({}) must be greater than screen_near ({})",
                self.screen_depth, self.screen_near);
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < std::f32::consts::PI) {
            engine_bail!("frustum3d::Config",
                "field_of_view must be in (0, pi) radians (got {})", self.field_of_view);
        }
        Ok(())
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.screen_width as f32 / self.screen_height as f32
    }

    /// Left-handed perspective projection from fov, aspect, near and depth.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_lh(
            self.field_of_view,
            self.aspect_ratio(),
            self.screen_near,
            self.screen_depth,
        )
    }

    /// Left-handed orthographic projection covering the screen, for 2D overlays.
    pub fn ortho_matrix(&self) -> Mat4 {
        let half_w = self.screen_width as f32 / 2.0;
        let half_h = self.screen_height as f32 / 2.0;
        Mat4::orthographic_lh(
            -half_w, half_w,
            -half_h, half_h,
            self.screen_near, self.screen_depth,
        )
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
