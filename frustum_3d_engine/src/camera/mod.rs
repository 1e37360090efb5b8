//! Camera module - view matrix, frustum, free-look controller, render view.
//!
//! Cameras and frustums are plain values owned and driven by the caller.
//! Per frame: `Camera::render()`, then `Frustum::construct()`, then the
//! `check_*` queries.

mod camera;
mod frustum;
mod position;
mod render_view;

pub use camera::{Camera, DEG_TO_RAD};
pub use frustum::{
    Frustum,
    PLANE_NEAR, PLANE_FAR, PLANE_LEFT, PLANE_RIGHT, PLANE_TOP, PLANE_BOTTOM,
};
pub use position::{Position, MoveKeys, DEFAULT_SPEED};
pub use render_view::RenderView;
