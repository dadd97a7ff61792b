//! Integration tests for the camera descriptor.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use vista_rs::*;

fn vec3_strategy() -> impl Strategy<Value = Vec3> {
    (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

#[test]
fn test_distance_scenario() {
    let mut camera = Camera::new();
    camera.set_position(Vec3::new(1.0, 2.0, 3.0));
    camera.set_focal_point(Vec3::ZERO);
    assert!((camera.distance() - 3.742).abs() < 1e-3);
}

#[test]
fn test_parallel_projection_toggle() {
    let mut camera = Camera::new();
    assert!(!camera.is_parallel_projection());

    camera.enable_parallel_projection();
    assert!(camera.is_parallel_projection());
    assert!(camera.engine().parallel_projection());

    camera.disable_parallel_projection();
    assert!(!camera.is_parallel_projection());
    assert!(!camera.engine().parallel_projection());
}

#[test]
fn test_up_defaults_and_roundtrip() {
    let mut camera = Camera::new();
    assert_eq!(camera.up(), Vec3::Y);

    camera.set_up(Vec3::X);
    assert_eq!(camera.up(), Vec3::X);
}

#[test]
fn test_identity_model_transform_roundtrip() {
    let mut camera = Camera::new();
    camera.set_model_transform_matrix(Mat4::from_scale(Vec3::splat(2.0)));
    camera.set_model_transform_matrix(Mat4::IDENTITY);
    assert_eq!(camera.model_transform_matrix(), Mat4::IDENTITY);

    let rows = [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];
    camera.set_model_transform_rows(&rows);
    assert_eq!(camera.model_transform_rows(), rows);
}

#[test]
fn test_thickness_and_parallel_scale() {
    let mut camera = Camera::new();
    camera.set_clipping_range(2.0, 20.0).unwrap();
    camera.set_thickness(8.0);
    assert_eq!(camera.clipping_range(), (2.0, 10.0));
    assert!((camera.thickness() - 8.0).abs() < 1e-5);

    camera.set_parallel_scale(3.5);
    assert_eq!(camera.parallel_scale(), 3.5);
}

#[test]
fn test_zoom_delegates_to_engine() {
    let mut camera = Camera::new();
    camera.enable_parallel_projection();
    camera.set_parallel_scale(4.0);
    camera.zoom(2.0);
    assert!((camera.parallel_scale() - 2.0).abs() < 1e-5);
}

#[test]
fn test_drop_releases_observers_and_parent() {
    let mut engine = RenderCamera::new();
    let modified = Rc::new(Cell::new(0));
    let released = Rc::new(Cell::new(false));

    {
        let mut camera = Camera::wrap(&mut engine);
        camera.set_parent(ParentId::new("main renderer"));

        let m = Rc::clone(&modified);
        camera.add_observer(CameraEvent::Modified, Box::new(move |_| m.set(m.get() + 1)));
        let r = Rc::clone(&released);
        camera.add_observer(CameraEvent::Released, Box::new(move |_| r.set(true)));

        camera.set_position([0.0, 0.0, 5.0]);
        assert_eq!(modified.get(), 1);
    }

    assert!(released.get());
    assert_eq!(engine.observer_count(), 0);

    // No dangling callbacks after teardown.
    engine.set_position(Vec3::new(0.0, 0.0, 7.0));
    assert_eq!(modified.get(), 1);
}

#[test]
fn test_state_snapshot_restores_camera() {
    let mut camera = Camera::new();
    camera.set_position([3.0, 4.0, 5.0]);
    camera.set_focal_point([1.0, 1.0, 1.0]);
    camera.set_up([0.0, 0.0, 1.0]);
    camera.set_clipping_range(0.5, 50.0).unwrap();
    camera.enable_parallel_projection();
    let saved = camera.state();

    let json = saved.to_json_string().unwrap();
    let restored = CameraState::from_json_str(&json).unwrap();
    assert_eq!(restored, saved);

    let mut other = Camera::new();
    other.apply_state(&restored).unwrap();
    assert_eq!(other.position(), Vec3::new(3.0, 4.0, 5.0));
    assert_eq!(other.focal_point(), Vec3::ONE);
    assert_eq!(other.up(), Vec3::Z);
    assert_eq!(other.clipping_range(), (0.5, 50.0));
    assert!(other.is_parallel_projection());
}

#[test]
fn test_state_json_layout() {
    let mut camera = Camera::new();
    camera.set_position([3.0, 4.0, 5.0]);
    camera.set_clipping_range(0.5, 50.0).unwrap();
    camera.enable_parallel_projection();

    let json = camera.state().to_json_string().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["position"], serde_json::json!([3.0, 4.0, 5.0]));
    assert_eq!(value["clipping_range"], serde_json::json!([0.5, 50.0]));
    assert_eq!(value["parallel_projection"], serde_json::json!(true));
    assert_eq!(value["model_transform"].as_array().map(Vec::len), Some(16));
}

#[test]
fn test_apply_state_rejects_invalid_clipping_range() {
    let mut camera = Camera::new();
    let mut state = camera.state();
    state.position = Vec3::new(9.0, 9.0, 9.0);
    state.clipping_range = (10.0, 1.0);

    let before = camera.position();
    assert!(matches!(
        camera.apply_state(&state),
        Err(VistaError::InvalidClippingRange { .. })
    ));
    assert_eq!(camera.position(), before);
    assert_eq!(camera.engine().position(), before);
}

#[test]
fn test_options_from_json() {
    let options =
        CameraOptions::from_json_str(r#"{ "position": [0.0, 0.0, 10.0], "view_angle": 60.0 }"#)
            .unwrap();
    let camera = Camera::with_options(&options).unwrap();
    assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 10.0));
    assert_eq!(camera.engine().view_angle(), 60.0);
}

#[test]
fn test_init_logging_is_repeatable() {
    init_logging();
    init_logging();
}

proptest! {
    #[test]
    fn position_roundtrips_through_engine(v in vec3_strategy()) {
        let mut camera = Camera::new();
        camera.set_position(v);
        prop_assert_eq!(camera.position(), camera.engine().position());
        if v.distance(Vec3::ZERO) > 1e-3 {
            prop_assert_eq!(camera.position(), v);
        }
    }

    #[test]
    fn focal_point_roundtrips_through_engine(v in vec3_strategy()) {
        let mut camera = Camera::new();
        camera.set_focal_point(v);
        prop_assert_eq!(camera.focal_point(), camera.engine().focal_point());
        if v.distance(camera.position()) > 1e-3 {
            prop_assert_eq!(camera.focal_point(), v);
        }
    }

    #[test]
    fn ordered_clipping_range_roundtrips(near in 0.001f32..100.0, depth in 0.01f32..1000.0) {
        let far = near + depth;
        let mut camera = Camera::new();
        prop_assert!(camera.set_clipping_range(near, far).is_ok());
        prop_assert_eq!(camera.clipping_range(), (near, far));
    }

    #[test]
    fn reversed_clipping_range_is_rejected(far in 0.001f32..100.0, gap in 0.01f32..100.0) {
        let near = far + gap;
        let mut camera = Camera::new();
        let before = camera.clipping_range();
        let result = camera.set_clipping_range(near, far);
        prop_assert!(
            matches!(result, Err(VistaError::InvalidClippingRange { .. })),
            "expected clipping range error"
        );
        prop_assert_eq!(camera.clipping_range(), before);
    }

    #[test]
    fn up_is_normalized(v in vec3_strategy()) {
        prop_assume!(v.length() > 1e-3);
        let mut camera = Camera::new();
        camera.set_up(v);
        prop_assert!((camera.up() - v.normalize()).length() < 1e-5);
    }
}
