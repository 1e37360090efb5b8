/// Camera - derives a left-handed view matrix from position and orientation.
///
/// Setters only store values. The view matrix is recomputed by `render()`
/// and cached; `view_matrix()` returns the cached value without
/// recomputing. Call `render()` once per frame, after the last setter
/// and before reading the view matrix or constructing the frustum.

use glam::{EulerRot, Mat3, Mat4, Vec3};

/// Degrees to radians factor applied to the stored rotation.
pub const DEG_TO_RAD: f32 = 0.0174532925;

/// First-person style camera.
///
/// Rotation is stored in degrees as (pitch, yaw, roll): the x-axis,
/// y-axis and z-axis rotations respectively.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    rotation: Vec3,
    direction: Vec3,
    up: Vec3,
    view_matrix: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera at the origin looking down +Z with +Y up.
    ///
    /// The cached view matrix is identity until the first `render()`.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            direction: Vec3::Z,
            up: Vec3::Y,
            view_matrix: Mat4::IDENTITY,
        }
    }

    // ===== SETTERS (store only) =====

    /// Set the eye position in world space.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set (pitch, yaw, roll) in degrees.
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    /// Set the unrotated look direction (default +Z).
    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction;
    }

    /// Set the unrotated up vector (default +Y).
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// (pitch, yaw, roll) in degrees.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// View matrix computed by the most recent `render()`.
    ///
    /// Stale until `render()` is called after a setter.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    // ===== RENDER =====

    /// Recompute and cache the view matrix.
    ///
    /// The look and up vectors are rotated by roll (z), then pitch (x),
    /// then yaw (y). The look vector is then offset by the position to
    /// get the look-at target. A parallel up/look pair or a zero look
    /// vector yields NaN entries; nothing is guarded.
    pub fn render(&mut self) {
        let pitch = self.rotation.x * DEG_TO_RAD;
        let yaw = self.rotation.y * DEG_TO_RAD;
        let roll = self.rotation.z * DEG_TO_RAD;

        // Ry * Rx * Rz applied to column vectors: roll first, yaw last
        let rotation = Mat3::from_euler(EulerRot::YXZ, yaw, pitch, roll);

        let look = rotation * self.direction;
        let up = rotation * self.up;

        let target = self.position + look;

        self.view_matrix = Mat4::look_at_lh(self.position, target, up);
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
