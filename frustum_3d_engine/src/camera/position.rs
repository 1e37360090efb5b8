/// Position - free-look movement controller.
///
/// Turns per-frame mouse deltas and held movement keys into a camera
/// position, look direction and up vector. Raw device polling stays
/// with the caller: it fills in the frame time, the mouse delta and the
/// key set, then calls `frame()` and copies the result into a `Camera`.

use glam::Vec3;
use super::camera::{Camera, DEG_TO_RAD};

bitflags::bitflags! {
    /// Movement keys held during a frame.
    #[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
    pub struct MoveKeys: u8 {
        /// W
        const FORWARD = 1 << 0;
        /// S
        const BACK = 1 << 1;
        /// A
        const LEFT = 1 << 2;
        /// D
        const RIGHT = 1 << 3;
        /// E
        const UP = 1 << 4;
        /// Q
        const DOWN = 1 << 5;
    }
}

/// Default movement speed in world units per millisecond.
pub const DEFAULT_SPEED: f32 = 0.01;

/// Free-look controller state.
#[derive(Debug, Clone)]
pub struct Position {
    frame_time: f32,
    mouse_delta: (f32, f32),
    keys: MoveKeys,
    angle_h: f32,
    angle_v: f32,
    speed: f32,
    position: Vec3,
    direction: Vec3,
    left: Vec3,
    up: Vec3,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Controller at the origin facing +Z.
    pub fn new() -> Self {
        let mut position = Self {
            frame_time: 0.0,
            mouse_delta: (0.0, 0.0),
            keys: MoveKeys::empty(),
            angle_h: 0.0,
            angle_v: 0.0,
            speed: DEFAULT_SPEED,
            position: Vec3::ZERO,
            direction: Vec3::ZERO,
            left: Vec3::ZERO,
            up: Vec3::ZERO,
        };
        position.calculate();
        position
    }

    // ===== PER-FRAME INPUT =====

    /// Milliseconds since the previous frame.
    pub fn set_frame_time(&mut self, frame_time: f32) {
        self.frame_time = frame_time;
    }

    /// Mouse movement this frame, in degrees (horizontal, vertical).
    pub fn set_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta = (dx, dy);
    }

    /// Movement keys held this frame.
    pub fn set_keys(&mut self, keys: MoveKeys) {
        self.keys = keys;
    }

    /// World units per millisecond.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// (horizontal, vertical) angles in degrees.
    pub fn angles(&self) -> (f32, f32) {
        (self.angle_h, self.angle_v)
    }

    // ===== FRAME =====

    /// Apply this frame's input, then recompute the orientation vectors.
    ///
    /// Movement uses the vectors from the previous frame, so a turn and
    /// a step in the same frame move along the old heading.
    pub fn frame(&mut self) {
        self.update();
        self.calculate();
    }

    /// Copy direction, up and position into a camera.
    pub fn apply_to(&self, camera: &mut Camera) {
        camera.set_direction(self.direction);
        camera.set_up(self.up);
        camera.set_position(self.position);
    }

    fn update(&mut self) {
        self.angle_h = wrap_degrees(self.angle_h + self.mouse_delta.0);
        self.angle_v = wrap_degrees(self.angle_v + self.mouse_delta.1);

        let step = self.speed * self.frame_time;

        if self.keys.contains(MoveKeys::LEFT) {
            self.position += self.left * step;
        }
        if self.keys.contains(MoveKeys::BACK) {
            self.position -= self.direction * step;
        }
        if self.keys.contains(MoveKeys::RIGHT) {
            self.position -= self.left * step;
        }
        if self.keys.contains(MoveKeys::DOWN) {
            self.position -= self.up * step;
        }
        if self.keys.contains(MoveKeys::FORWARD) {
            self.position += self.direction * step;
        }
        if self.keys.contains(MoveKeys::UP) {
            self.position += self.up * step;
        }
    }

    fn calculate(&mut self) {
        let h = self.angle_h * DEG_TO_RAD;
        let v = self.angle_v * DEG_TO_RAD;

        self.direction = Vec3::new(v.cos() * h.sin(), -v.sin(), v.cos() * h.cos());

        let side = h - std::f32::consts::FRAC_PI_2;
        self.left = Vec3::new(side.sin(), 0.0, side.cos());

        self.up = self.left.cross(self.direction);
    }
}

/// Bring an angle back into [0, 360] after a single frame's change.
fn wrap_degrees(angle: f32) -> f32 {
    if angle > 360.0 {
        angle - 360.0
    } else if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod tests;
