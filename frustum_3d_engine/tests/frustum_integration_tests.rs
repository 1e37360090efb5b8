//! Integration tests for the camera → frustum → culling pipeline
//!
//! Drives the public API the way an application frame loop does.
//! No GPU required.
//!
//! Run with: cargo test --test frustum_integration_tests

use frustum_3d_engine::frustum3d::GraphicsConfig;
use frustum_3d_engine::frustum3d::camera::{Camera, Frustum, MoveKeys, Position, RenderView};
use frustum_3d_engine::frustum3d::scene::{
    BoundingVolume, BruteForceCuller, MatrixBuffer, ModelCuller, ModelInfo, ModelKey, ModelList,
    Scene,
};
use frustum_3d_engine::frustum3d::timer::{FpsCounter, Timer};
use frustum_3d_engine::glam::{Vec3, Vec4};
use serial_test::serial;
use std::time::{Duration, Instant};

fn model(position: Vec3, bounds: BoundingVolume) -> ModelInfo {
    ModelInfo { position, color: Vec4::ONE, bounds }
}

// ============================================================================
// CAMERA + FRUSTUM
// ============================================================================

#[test]
fn test_integration_default_camera_frustum() {
    let config = GraphicsConfig::default();
    let mut camera = Camera::new();
    camera.render();

    let frustum = Frustum::from_matrices(
        config.screen_depth,
        &config.projection_matrix(),
        camera.view_matrix(),
    );

    assert!(frustum.check_point(Vec3::new(0.0, 0.0, 1.0)));
    assert!(frustum.check_point(Vec3::new(0.0, 0.0, 990.0)));
    assert!(!frustum.check_point(Vec3::new(0.0, 0.0, 1010.0)));
    assert!(!frustum.check_point(Vec3::new(0.0, 0.0, -1.0)));

    // Straddling the far plane still counts
    assert!(frustum.check_sphere(Vec3::new(0.0, 0.0, 1002.0), 5.0));
    assert!(frustum.check_cube(Vec3::new(0.0, 0.0, 1002.0), 5.0));
    assert!(frustum.check_rectangle(Vec3::new(0.0, 0.0, 1002.0), Vec3::splat(5.0)));
}

#[test]
fn test_integration_moved_camera_frustum() {
    let config = GraphicsConfig::default();
    let mut camera = Camera::new();
    camera.set_position(Vec3::new(100.0, 0.0, 0.0));
    camera.set_rotation(Vec3::new(0.0, 90.0, 0.0));
    camera.render();

    let frustum = Frustum::from_matrices(
        config.screen_depth,
        &config.projection_matrix(),
        camera.view_matrix(),
    );

    // Yaw 90 looks down +X
    assert!(frustum.check_point(Vec3::new(150.0, 0.0, 0.0)));
    assert!(!frustum.check_point(Vec3::new(50.0, 0.0, 0.0)));
    assert!(!frustum.check_point(Vec3::new(100.0, 0.0, 50.0)));
}

// ============================================================================
// SCENE
// ============================================================================

#[test]
#[serial]
fn test_integration_scene_mixed_bounds() {
    let mut scene = Scene::new(GraphicsConfig::default()).unwrap();
    let models = scene.models_mut();
    let point = models.insert(model(Vec3::new(0.0, 0.0, 10.0), BoundingVolume::Point));
    let _behind = models.insert(model(Vec3::new(0.0, 0.0, -10.0), BoundingVolume::Point));
    let sphere = models.insert(model(Vec3::new(0.0, 0.0, -1.0), BoundingVolume::Sphere { radius: 2.0 }));
    let cube = models.insert(model(Vec3::new(0.0, 30.0, 50.0), BoundingVolume::Cube { half_size: 10.0 }));
    let _far_box = models.insert(model(
        Vec3::new(0.0, 0.0, 1100.0),
        BoundingVolume::Box { half_extents: Vec3::new(10.0, 10.0, 50.0) },
    ));

    let view = scene.frame();

    assert_eq!(view.visible_models(), &[point, sphere, cube]);
    assert_eq!(view.tested_count(), 5);
    assert_eq!(view.culled_count(), 2);
}

#[test]
#[serial]
fn test_integration_frustum_subset_of_brute_force() {
    let mut scene = Scene::new(GraphicsConfig::default()).unwrap();
    scene.set_models(ModelList::random(200, 42));

    let culled = scene.frame();
    scene.set_culler(Box::new(BruteForceCuller::new()));
    let all = scene.frame();

    assert_eq!(all.visible_count(), 200);
    assert!(culled.visible_count() <= 200);
    for key in culled.visible_models() {
        assert!(all.visible_models().contains(key));
    }
}

#[test]
#[serial]
fn test_integration_position_drives_scene() {
    let mut scene = Scene::new(GraphicsConfig::default()).unwrap();
    let ahead = scene.models_mut().insert(ModelInfo::sphere(Vec3::new(0.0, 0.0, 20.0), 1.0));
    let side = scene.models_mut().insert(ModelInfo::sphere(Vec3::new(20.0, 0.0, 0.0), 1.0));

    let mut position = Position::new();
    position.apply_to(scene.camera_mut());
    assert_eq!(scene.frame().visible_models(), &[ahead]);

    // Turn 90 degrees to the right
    position.set_mouse_delta(90.0, 0.0);
    position.frame();
    position.apply_to(scene.camera_mut());
    assert_eq!(scene.frame().visible_models(), &[side]);

    // Walk forward past the sphere; it ends up behind
    position.set_mouse_delta(0.0, 0.0);
    position.set_keys(MoveKeys::FORWARD);
    position.set_frame_time(3000.0);
    position.frame();
    position.apply_to(scene.camera_mut());
    assert!((position.position().x - 30.0).abs() < 1e-3);
    assert_eq!(scene.frame().visible_count(), 0);
}

#[test]
#[serial]
fn test_integration_matrix_buffer_for_visible_models() {
    let mut scene = Scene::new(GraphicsConfig::default()).unwrap();
    scene.set_models(ModelList::random(50, 7));
    let view = scene.frame();

    for key in view.visible_models() {
        let info = scene.models().data(*key).unwrap();
        let world = frustum_3d_engine::glam::Mat4::from_translation(info.position);
        let buffer = MatrixBuffer::new(&world, view.view_matrix(), scene.projection_matrix());
        assert_eq!(buffer.as_bytes().len(), MatrixBuffer::SIZE);
    }
}

// ============================================================================
// CUSTOM CULLER
// ============================================================================

/// Frustum test plus a maximum draw distance from the camera.
struct DistanceCuller {
    max_distance: f32,
}

impl ModelCuller for DistanceCuller {
    fn cull(&mut self, models: &ModelList, camera: &Camera, frustum: &Frustum) -> RenderView {
        let visible: Vec<ModelKey> = models.iter()
            .filter(|(_, model)| model.position.distance(camera.position()) <= self.max_distance)
            .filter(|(_, model)| frustum.check_bounds(model.position, &model.bounds))
            .map(|(key, _)| key)
            .collect();
        RenderView::new(*camera.view_matrix(), visible, models.len())
    }
}

#[test]
#[serial]
fn test_integration_scene_with_external_culler() {
    let culler = DistanceCuller { max_distance: 100.0 };
    let mut scene = Scene::with_culler(GraphicsConfig::default(), Box::new(culler)).unwrap();
    let near = scene.models_mut().insert(ModelInfo::sphere(Vec3::new(0.0, 0.0, 5.0), 1.0));
    let _mid = scene.models_mut().insert(ModelInfo::sphere(Vec3::new(0.0, 0.0, 500.0), 1.0));
    let _behind = scene.models_mut().insert(ModelInfo::sphere(Vec3::new(0.0, 0.0, -50.0), 1.0));

    let view = scene.frame();

    // z = 500 passes the frustum but is beyond the draw distance
    assert_eq!(view.visible_models(), &[near]);
    assert_eq!(view.tested_count(), 3);
    assert_eq!(view.culled_count(), 2);
    assert_eq!(view.view_matrix(), scene.camera().view_matrix());
}

// ============================================================================
// FRAME LOOP
// ============================================================================

#[test]
#[serial]
fn test_integration_timed_frame_loop() {
    let start = Instant::now();
    let mut timer = Timer::new_at(start);
    let mut fps = FpsCounter::new_at(start);
    let mut position = Position::new();
    let mut scene = Scene::new(GraphicsConfig::default()).unwrap();
    scene.set_models(ModelList::random(20, 1));

    // 100 frames at 10ms each, walking forward
    position.set_keys(MoveKeys::FORWARD);
    for i in 1..=100u64 {
        let now = start + Duration::from_millis(i * 10);
        timer.frame_at(now);
        fps.frame_at(now);

        position.set_frame_time(timer.frame_time());
        position.frame();
        position.apply_to(scene.camera_mut());
        scene.frame();
    }

    assert_eq!(scene.frame_index(), 100);
    assert_eq!(fps.fps(), 100);
    // 100 frames * 10ms * 0.01 units/ms
    assert!((position.position().z - 10.0).abs() < 1e-2);
}
