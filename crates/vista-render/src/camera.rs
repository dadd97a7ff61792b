//! Camera model owned by the engine.

use glam::{Mat4, Vec3};
use vista_core::{
    CameraEngine, CameraEvent, CameraOptions, ObserverCallback, ObserverRegistry, ObserverTag,
};

/// Smallest allowed distance between position and focal point.
pub const MIN_DISTANCE: f32 = 1e-6;

/// Smallest allowed distance between the near and far clipping planes.
pub const MIN_THICKNESS: f32 = 1e-6;

/// View angle bounds in degrees.
const VIEW_ANGLE_RANGE: (f32, f32) = (0.01, 179.0);

/// Minimum plane separation that is still representable at `near`.
fn min_thickness(near: f32) -> f32 {
    MIN_THICKNESS.max(near.abs() * f32::EPSILON * 2.0)
}

/// Minimum position-to-focal separation that is still representable around
/// `a` and `b`.
fn min_distance(a: Vec3, b: Vec3) -> f32 {
    let magnitude = a.abs().max_element().max(b.abs().max_element());
    MIN_DISTANCE.max(magnitude * f32::EPSILON * 2.0)
}

/// Camera projection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Perspective projection.
    #[default]
    Perspective,
    /// Orthographic (parallel) projection.
    Orthographic,
}

/// A camera as the engine stores it.
///
/// Parameters are private so every mutation goes through a setter that can
/// normalize it and notify observers.
#[derive(Debug)]
pub struct RenderCamera {
    position: Vec3,
    focal_point: Vec3,
    view_up: Vec3,
    /// Vertical view angle in degrees.
    view_angle: f32,
    near: f32,
    far: f32,
    parallel_scale: f32,
    projection_mode: ProjectionMode,
    model_transform: Mat4,
    observers: ObserverRegistry,
}

impl RenderCamera {
    /// Creates a camera with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&CameraOptions::default())
    }

    /// Creates a camera from configuration options.
    ///
    /// Options go through the regular setters, so they are normalized the
    /// same way as later updates.
    #[must_use]
    pub fn with_options(options: &CameraOptions) -> Self {
        let defaults = CameraOptions::default();
        let mut camera = Self {
            position: defaults.position,
            focal_point: defaults.focal_point,
            view_up: defaults.view_up,
            view_angle: defaults.view_angle,
            near: defaults.clipping_range.0,
            far: defaults.clipping_range.1,
            parallel_scale: defaults.parallel_scale,
            projection_mode: ProjectionMode::Perspective,
            model_transform: Mat4::IDENTITY,
            observers: ObserverRegistry::new(),
        };
        camera.set_focal_point(options.focal_point);
        camera.set_position(options.position);
        camera.set_view_up(options.view_up);
        camera.set_view_angle(options.view_angle);
        camera.set_clipping_range(options.clipping_range.0, options.clipping_range.1);
        camera.set_parallel_scale(options.parallel_scale);
        camera.set_parallel_projection(options.parallel_projection);
        camera
    }

    /// Returns the projection mode.
    #[must_use]
    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    /// Returns the unit vector from position towards the focal point.
    #[must_use]
    pub fn direction_of_projection(&self) -> Vec3 {
        let dir = (self.focal_point - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            Vec3::NEG_Z
        } else {
            dir
        }
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        self.projection_matrix(aspect_ratio) * self.view_matrix()
    }

    /// Pushes the focal point out along `dir` if it sits on the position.
    fn separate_focal_point(&mut self, dir: Vec3) {
        let min = min_distance(self.position, self.focal_point);
        if self.position.distance(self.focal_point) < min {
            log::debug!("camera position and focal point coincide, separating them");
            self.focal_point = self.position + dir * min;
        }
    }

    fn modified(&mut self) {
        self.observers.notify(CameraEvent::Modified);
    }
}

impl Default for RenderCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraEngine for RenderCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        let dir = self.direction_of_projection();
        self.position = position;
        self.separate_focal_point(dir);
        self.modified();
    }

    fn focal_point(&self) -> Vec3 {
        self.focal_point
    }

    fn set_focal_point(&mut self, point: Vec3) {
        let dir = self.direction_of_projection();
        self.focal_point = point;
        self.separate_focal_point(dir);
        self.modified();
    }

    fn view_up(&self) -> Vec3 {
        self.view_up
    }

    fn set_view_up(&mut self, up: Vec3) {
        let up = up.normalize_or_zero();
        if up == Vec3::ZERO {
            log::warn!("ignoring zero-length view-up vector");
            return;
        }
        self.view_up = up;
        self.modified();
    }

    fn view_angle(&self) -> f32 {
        self.view_angle
    }

    fn set_view_angle(&mut self, degrees: f32) {
        self.view_angle = degrees.clamp(VIEW_ANGLE_RANGE.0, VIEW_ANGLE_RANGE.1);
        self.modified();
    }

    fn clipping_range(&self) -> (f32, f32) {
        (self.near, self.far)
    }

    fn set_clipping_range(&mut self, near: f32, far: f32) {
        let (near, far) = if near > far { (far, near) } else { (near, far) };
        self.near = near;
        self.far = far.max(near + min_thickness(near));
        self.modified();
    }

    fn thickness(&self) -> f32 {
        self.far - self.near
    }

    fn set_thickness(&mut self, thickness: f32) {
        self.far = self.near + thickness.max(min_thickness(self.near));
        self.modified();
    }

    fn parallel_scale(&self) -> f32 {
        self.parallel_scale
    }

    fn set_parallel_scale(&mut self, scale: f32) {
        self.parallel_scale = scale;
        self.modified();
    }

    fn model_transform_matrix(&self) -> Mat4 {
        self.model_transform
    }

    fn set_model_transform_matrix(&mut self, matrix: Mat4) {
        self.model_transform = matrix;
        self.modified();
    }

    fn parallel_projection(&self) -> bool {
        self.projection_mode == ProjectionMode::Orthographic
    }

    fn set_parallel_projection(&mut self, enabled: bool) {
        self.projection_mode = if enabled {
            ProjectionMode::Orthographic
        } else {
            ProjectionMode::Perspective
        };
        self.modified();
    }

    fn distance(&self) -> f32 {
        self.position.distance(self.focal_point)
    }

    fn zoom(&mut self, factor: f32) {
        if !(factor.is_finite() && factor > 0.0) {
            log::warn!("ignoring zoom factor {factor}");
            return;
        }
        match self.projection_mode {
            ProjectionMode::Perspective => self.set_view_angle(self.view_angle / factor),
            ProjectionMode::Orthographic => self.set_parallel_scale(self.parallel_scale / factor),
        }
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.focal_point, self.view_up) * self.model_transform
    }

    fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        match self.projection_mode {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                self.view_angle.to_radians(),
                aspect_ratio,
                self.near,
                self.far,
            ),
            ProjectionMode::Orthographic => {
                let half_height = self.parallel_scale;
                let half_width = half_height * aspect_ratio;
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        }
    }

    fn add_observer(&mut self, event: CameraEvent, callback: ObserverCallback) -> ObserverTag {
        self.observers.add(event, callback)
    }

    fn remove_observer(&mut self, tag: ObserverTag) -> bool {
        self.observers.remove(tag)
    }

    fn remove_all_observers(&mut self) {
        self.observers.notify(CameraEvent::Released);
        self.observers.clear();
    }

    fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
