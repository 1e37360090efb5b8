/// ModelList - the set of models considered for drawing each frame.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Each model
/// carries a world position, a tint color and the bounding volume the
/// frustum is tested against.

use glam::{Vec3, Vec4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slotmap::{new_key_type, SlotMap};
use crate::error::Result;
use crate::engine_err;

new_key_type! {
    /// Stable key to a model in a ModelList
    pub struct ModelKey;
}

/// Proxy shape used for frustum tests, centered on the model position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingVolume {
    /// The position alone
    Point,
    /// Sphere of the given radius
    Sphere { radius: f32 },
    /// Axis-aligned cube, `half_size` from center to each face
    Cube { half_size: f32 },
    /// Axis-aligned box with per-axis half extents
    Box { half_extents: Vec3 },
}

/// One entry of the model list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInfo {
    /// World-space center
    pub position: Vec3,
    /// RGBA tint passed to the shader
    pub color: Vec4,
    /// Culling proxy
    pub bounds: BoundingVolume,
}

impl ModelInfo {
    /// Unit sphere at `position` with an opaque white tint.
    pub fn sphere(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            color: Vec4::ONE,
            bounds: BoundingVolume::Sphere { radius },
        }
    }
}

/// Half-width of the random scatter region around the viewer.
const SCATTER_RANGE: f32 = 50.0;
/// Push random models this far in front of the viewer.
const SCATTER_DEPTH_OFFSET: f32 = 5.0;

/// Collection of models with stable keys.
#[derive(Debug, Clone, Default)]
pub struct ModelList {
    models: SlotMap<ModelKey, ModelInfo>,
}

impl ModelList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            models: SlotMap::with_key(),
        }
    }

    /// Fill a list with `count` unit spheres of random color, scattered in
    /// front of the viewer.
    ///
    /// Each coordinate is the difference of two uniform samples scaled by
    /// 50 (triangular over [-50, 50]); z is then shifted by +5. The same
    /// seed always yields the same list.
    pub fn random(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut list = Self::new();

        for _ in 0..count {
            let color = Vec4::new(rng.gen(), rng.gen(), rng.gen(), 1.0);

            let x = (rng.gen::<f32>() - rng.gen::<f32>()) * SCATTER_RANGE;
            let y = (rng.gen::<f32>() - rng.gen::<f32>()) * SCATTER_RANGE;
            let z = (rng.gen::<f32>() - rng.gen::<f32>()) * SCATTER_RANGE + SCATTER_DEPTH_OFFSET;

            list.insert(ModelInfo {
                position: Vec3::new(x, y, z),
                color,
                bounds: BoundingVolume::Sphere { radius: 1.0 },
            });
        }

        list
    }

    /// Add a model, returning its stable key.
    pub fn insert(&mut self, model: ModelInfo) -> ModelKey {
        self.models.insert(model)
    }

    /// Remove a model. Returns the removed entry, or None for a stale key.
    pub fn remove(&mut self, key: ModelKey) -> Option<ModelInfo> {
        self.models.remove(key)
    }

    pub fn get(&self, key: ModelKey) -> Option<&ModelInfo> {
        self.models.get(key)
    }

    pub fn get_mut(&mut self, key: ModelKey) -> Option<&mut ModelInfo> {
        self.models.get_mut(key)
    }

    /// Like `get`, but a stale key is logged and reported as an error.
    pub fn data(&self, key: ModelKey) -> Result<&ModelInfo> {
        self.models.get(key)
            .ok_or_else(|| engine_err!("frustum3d::ModelList", "Model {:?} not found", key))
    }

    pub fn contains(&self, key: ModelKey) -> bool {
        self.models.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn clear(&mut self) {
        self.models.clear();
    }

    /// Iterate over all model keys.
    pub fn keys(&self) -> impl Iterator<Item = ModelKey> + '_ {
        self.models.keys()
    }

    /// Iterate over (key, model) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ModelKey, &ModelInfo)> {
        self.models.iter()
    }
}

#[cfg(test)]
#[path = "model_list_tests.rs"]
mod tests;
