//! The capability interface a camera descriptor drives.

use glam::{Mat4, Vec3};

use crate::observer::{CameraEvent, ObserverCallback, ObserverTag};

/// A camera implementation owned by the underlying graphics engine.
///
/// Every call is infallible. Implementations may normalize the values they
/// are given (clamping, re-normalizing), so callers that cache engine state
/// must re-read it after each write.
pub trait CameraEngine {
    /// Camera position in world coordinates.
    fn position(&self) -> Vec3;
    /// Moves the camera.
    fn set_position(&mut self, position: Vec3);

    /// Point the camera looks at, in world coordinates.
    fn focal_point(&self) -> Vec3;
    /// Sets the point the camera looks at.
    fn set_focal_point(&mut self, point: Vec3);

    /// View-up vector.
    fn view_up(&self) -> Vec3;
    /// Sets the view-up vector.
    fn set_view_up(&mut self, up: Vec3);

    /// Vertical view angle in degrees, used for perspective projection.
    fn view_angle(&self) -> f32;
    /// Sets the vertical view angle in degrees.
    fn set_view_angle(&mut self, degrees: f32);

    /// Near and far clipping distances along the direction of projection.
    fn clipping_range(&self) -> (f32, f32);
    /// Sets the clipping distances.
    fn set_clipping_range(&mut self, near: f32, far: f32);

    /// Distance between the near and far clipping planes.
    fn thickness(&self) -> f32;
    /// Moves the far plane so the clipping planes are `thickness` apart.
    fn set_thickness(&mut self, thickness: f32);

    /// Half-height of the viewport in world units under parallel projection.
    fn parallel_scale(&self) -> f32;
    /// Sets the parallel projection scale.
    fn set_parallel_scale(&mut self, scale: f32);

    /// Model transformation applied before the view transform.
    fn model_transform_matrix(&self) -> Mat4;
    /// Replaces the model transformation.
    fn set_model_transform_matrix(&mut self, matrix: Mat4);

    /// Whether parallel (orthographic) projection is active.
    fn parallel_projection(&self) -> bool;
    /// Switches between parallel and perspective projection.
    fn set_parallel_projection(&mut self, enabled: bool);

    /// Distance from the position to the focal point.
    fn distance(&self) -> f32;

    /// Zooms by `factor`; values above one zoom in.
    fn zoom(&mut self, factor: f32);

    /// World-to-view matrix.
    fn view_matrix(&self) -> Mat4;
    /// View-to-clip matrix for the given viewport aspect ratio.
    fn projection_matrix(&self, aspect_ratio: f32) -> Mat4;

    /// Registers a callback for `event`.
    fn add_observer(&mut self, event: CameraEvent, callback: ObserverCallback) -> ObserverTag;
    /// Removes one registration. Returns true if it existed.
    fn remove_observer(&mut self, tag: ObserverTag) -> bool;
    /// Removes every registration.
    fn remove_all_observers(&mut self);
    /// Number of live registrations.
    fn observer_count(&self) -> usize;
}

impl<E: CameraEngine + ?Sized> CameraEngine for &mut E {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn set_position(&mut self, position: Vec3) {
        (**self).set_position(position);
    }

    fn focal_point(&self) -> Vec3 {
        (**self).focal_point()
    }

    fn set_focal_point(&mut self, point: Vec3) {
        (**self).set_focal_point(point);
    }

    fn view_up(&self) -> Vec3 {
        (**self).view_up()
    }

    fn set_view_up(&mut self, up: Vec3) {
        (**self).set_view_up(up);
    }

    fn view_angle(&self) -> f32 {
        (**self).view_angle()
    }

    fn set_view_angle(&mut self, degrees: f32) {
        (**self).set_view_angle(degrees);
    }

    fn clipping_range(&self) -> (f32, f32) {
        (**self).clipping_range()
    }

    fn set_clipping_range(&mut self, near: f32, far: f32) {
        (**self).set_clipping_range(near, far);
    }

    fn thickness(&self) -> f32 {
        (**self).thickness()
    }

    fn set_thickness(&mut self, thickness: f32) {
        (**self).set_thickness(thickness);
    }

    fn parallel_scale(&self) -> f32 {
        (**self).parallel_scale()
    }

    fn set_parallel_scale(&mut self, scale: f32) {
        (**self).set_parallel_scale(scale);
    }

    fn model_transform_matrix(&self) -> Mat4 {
        (**self).model_transform_matrix()
    }

    fn set_model_transform_matrix(&mut self, matrix: Mat4) {
        (**self).set_model_transform_matrix(matrix);
    }

    fn parallel_projection(&self) -> bool {
        (**self).parallel_projection()
    }

    fn set_parallel_projection(&mut self, enabled: bool) {
        (**self).set_parallel_projection(enabled);
    }

    fn distance(&self) -> f32 {
        (**self).distance()
    }

    fn zoom(&mut self, factor: f32) {
        (**self).zoom(factor);
    }

    fn view_matrix(&self) -> Mat4 {
        (**self).view_matrix()
    }

    fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        (**self).projection_matrix(aspect_ratio)
    }

    fn add_observer(&mut self, event: CameraEvent, callback: ObserverCallback) -> ObserverTag {
        (**self).add_observer(event, callback)
    }

    fn remove_observer(&mut self, tag: ObserverTag) -> bool {
        (**self).remove_observer(tag)
    }

    fn remove_all_observers(&mut self) {
        (**self).remove_all_observers();
    }

    fn observer_count(&self) -> usize {
        (**self).observer_count()
    }
}
