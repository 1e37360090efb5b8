/// Frustum - six clipping planes for visibility culling.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed offset
/// - A point P is inside when dot((A, B, C), P) + D >= 0 for all planes
///
/// Matrices are glam (column vectors). In row-vector notation, where
/// `M._ij` is row i / column j, `M._ij` here is `m.col(i - 1)[j - 1]`
/// and the clip matrix `view · projection` is `projection * view`.

use glam::{Mat4, Vec3, Vec4};
use crate::engine_warn;
use crate::scene::BoundingVolume;

/// Frustum plane indices
pub const PLANE_NEAR: usize = 0;
pub const PLANE_FAR: usize = 1;
pub const PLANE_LEFT: usize = 2;
pub const PLANE_RIGHT: usize = 3;
pub const PLANE_TOP: usize = 4;
pub const PLANE_BOTTOM: usize = 5;

const PLANE_NAMES: [&str; 6] = ["near", "far", "left", "right", "top", "bottom"];

/// Six frustum planes: near, far, left, right, top, bottom.
///
/// A default frustum has six zero planes and reports everything as
/// inside. Call `construct` once per frame after the view and
/// projection are final; the `check_*` queries are read-only.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frustum {
    planes: [Vec4; 6],
}

impl Frustum {
    /// Empty frustum (all planes zero).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frustum in one step. See `construct`.
    pub fn from_matrices(screen_depth: f32, projection: &Mat4, view: &Mat4) -> Self {
        let mut frustum = Self::new();
        frustum.construct(screen_depth, projection, view);
        frustum
    }

    /// Recompute all six planes.
    ///
    /// The projection's depth terms (`_33`, `_43`) are rescaled on a local
    /// copy so the far plane sits at `screen_depth`, then the planes are
    /// extracted from `view · projection` with the Gribb & Hartmann method
    /// and normalized. The caller's matrices are not modified.
    pub fn construct(&mut self, screen_depth: f32, projection: &Mat4, view: &Mat4) {
        let mut projection = *projection;

        // _43 is w_axis.z, _33 is z_axis.z
        let z_minimum = -projection.w_axis.z / projection.z_axis.z;
        let r = screen_depth / (screen_depth - z_minimum);
        projection.z_axis.z = r;
        projection.w_axis.z = -r * z_minimum;

        let clip = projection * *view;

        // m[c][r] == _(c+1)(r+1)
        let m = clip.to_cols_array_2d();

        self.planes = [
            // Near:   _x4 + _x3
            Vec4::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2], m[3][3] + m[3][2]),
            // Far:    _x4 - _x3
            Vec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
            // Left:   _x4 + _x1
            Vec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  _x4 - _x1
            Vec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Top:    _x4 - _x2
            Vec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Bottom: _x4 + _x2
            Vec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
        ];

        for (index, plane) in self.planes.iter_mut().enumerate() {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            } else {
                // A collapsed normal zeroes the whole plane so it accepts everything
                if normal_len == 0.0 {
                    *plane = Vec4::ZERO;
                }
                engine_warn!("frustum3d::Frustum",
                    "Degenerate {} plane (normal length {})",
                    PLANE_NAMES[index], normal_len);
            }
        }
    }

    /// All six planes, indexed by the `PLANE_*` constants.
    pub fn planes(&self) -> &[Vec4; 6] {
        &self.planes
    }

    /// One plane by `PLANE_*` index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`.
    pub fn plane(&self, index: usize) -> Vec4 {
        self.planes[index]
    }

    /// Signed distance from `point` to plane `index` (positive = inside).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`.
    pub fn distance_to_plane(&self, index: usize, point: Vec3) -> f32 {
        Self::plane_distance(&self.planes[index], point)
    }

    #[inline]
    fn plane_distance(plane: &Vec4, point: Vec3) -> f32 {
        plane.truncate().dot(point) + plane.w
    }

    /// True if the point is on the inner side of (or on) all six planes.
    pub fn check_point(&self, point: Vec3) -> bool {
        for plane in &self.planes {
            if Self::plane_distance(plane, point) < 0.0 {
                return false;
            }
        }

        true
    }

    /// Cube test: each plane must keep at least one of the 8 corners
    /// `center ± radius`.
    ///
    /// Conservative: a cube near a frustum edge can pass while lying
    /// fully outside. Never rejects a cube that overlaps the frustum.
    pub fn check_cube(&self, center: Vec3, radius: f32) -> bool {
        self.check_rectangle(center, Vec3::splat(radius))
    }

    /// True unless the sphere lies entirely behind some plane.
    pub fn check_sphere(&self, center: Vec3, radius: f32) -> bool {
        for plane in &self.planes {
            if Self::plane_distance(plane, center) < -radius {
                return false;
            }
        }

        true
    }

    /// Box test with per-axis half extents; same rule as `check_cube`.
    pub fn check_rectangle(&self, center: Vec3, half_extents: Vec3) -> bool {
        let min = center - half_extents;
        let max = center + half_extents;
        let corners = [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
        ];

        for plane in &self.planes {
            let any_corner_inside = corners
                .iter()
                .any(|&corner| Self::plane_distance(plane, corner) >= 0.0);

            if !any_corner_inside {
                return false;
            }
        }

        true
    }

    /// Dispatch to the check matching a model's bounding volume.
    pub fn check_bounds(&self, position: Vec3, bounds: &BoundingVolume) -> bool {
        match *bounds {
            BoundingVolume::Point => self.check_point(position),
            BoundingVolume::Sphere { radius } => self.check_sphere(position, radius),
            BoundingVolume::Cube { half_size } => self.check_cube(position, half_size),
            BoundingVolume::Box { half_extents } => self.check_rectangle(position, half_extents),
        }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
