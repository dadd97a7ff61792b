//! The camera descriptor.
//!
//! [`Camera`] wraps a [`CameraEngine`] and presents its parameters as typed
//! accessors. Position and focal point are cached; after each write the
//! cache is refreshed from the engine rather than from the input, so any
//! normalization the engine applies is what readers see.

use glam::{Mat4, Vec3};
use vista_core::{
    validate_clipping_range, CameraEngine, CameraEvent, CameraOptions, CameraState,
    ObserverCallback, ObserverTag, Result,
};
use vista_render::RenderCamera;

/// Identifier of the renderer a camera is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParentId(String);

impl ParentId {
    /// Creates a new parent identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A camera descriptor over an engine camera.
///
/// The engine is held by composition: `E` may be an owned engine or a
/// `&mut` borrow of one. Dropping the descriptor releases every observer
/// registered on the engine and clears the parent reference.
pub struct Camera<E: CameraEngine = RenderCamera> {
    engine: E,
    position: Vec3,
    focal_point: Vec3,
    is_parallel_projection: bool,
    parent: Option<ParentId>,
}

impl Camera<RenderCamera> {
    /// Creates a descriptor around a fresh engine camera with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::wrap(RenderCamera::new())
    }

    /// Creates a descriptor around a fresh engine camera built from `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options carry an invalid clipping range.
    pub fn with_options(options: &CameraOptions) -> Result<Self> {
        options.validate()?;
        let mut camera = Self::wrap(RenderCamera::with_options(options));
        camera.set_parallel_projection(options.parallel_projection);
        Ok(camera)
    }
}

impl Default for Camera<RenderCamera> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CameraEngine> Camera<E> {
    /// Wraps an existing engine camera.
    ///
    /// The cached position and focal point are read from the engine. The
    /// projection flag starts out false and the engine is switched to
    /// perspective to match.
    pub fn wrap(mut engine: E) -> Self {
        engine.set_parallel_projection(false);
        let position = engine.position();
        let focal_point = engine.focal_point();
        Self {
            engine,
            position,
            focal_point,
            is_parallel_projection: false,
            parent: None,
        }
    }

    /// Returns the wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns the wrapped engine mutably.
    ///
    /// Changes made here bypass the cache; call [`Camera::refresh`] afterwards.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Position of the camera in world coordinates.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Moves the camera.
    pub fn set_position(&mut self, position: impl Into<Vec3>) {
        let position = position.into();
        log::debug!("camera position -> {position}");
        self.engine.set_position(position);
        self.position = self.engine.position();
        self.focal_point = self.engine.focal_point();
    }

    /// Location of the camera's focus in world coordinates.
    #[must_use]
    pub fn focal_point(&self) -> Vec3 {
        self.focal_point
    }

    /// Sets the camera's focus.
    pub fn set_focal_point(&mut self, point: impl Into<Vec3>) {
        let point = point.into();
        log::debug!("camera focal point -> {point}");
        self.engine.set_focal_point(point);
        self.focal_point = self.engine.focal_point();
        self.position = self.engine.position();
    }

    /// Model transformation matrix.
    #[must_use]
    pub fn model_transform_matrix(&self) -> Mat4 {
        self.engine.model_transform_matrix()
    }

    /// Replaces the model transformation matrix.
    pub fn set_model_transform_matrix(&mut self, matrix: Mat4) {
        self.engine.set_model_transform_matrix(matrix);
    }

    /// Model transformation as row-major nested arrays.
    #[must_use]
    pub fn model_transform_rows(&self) -> [[f32; 4]; 4] {
        self.engine.model_transform_matrix().transpose().to_cols_array_2d()
    }

    /// Replaces the model transformation from row-major nested arrays.
    pub fn set_model_transform_rows(&mut self, rows: &[[f32; 4]; 4]) {
        self.set_model_transform_matrix(Mat4::from_cols_array_2d(rows).transpose());
    }

    /// Whether parallel projection was last enabled through this descriptor.
    ///
    /// This does not query the engine. See [`Camera::refresh`].
    #[must_use]
    pub fn is_parallel_projection(&self) -> bool {
        self.is_parallel_projection
    }

    /// Distance from the camera position to the focal point.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.engine.distance()
    }

    /// Distance between the clipping planes.
    #[must_use]
    pub fn thickness(&self) -> f32 {
        self.engine.thickness()
    }

    /// Sets the distance between the clipping planes.
    pub fn set_thickness(&mut self, length: f32) {
        self.engine.set_thickness(length);
    }

    /// Scaling used for a parallel projection.
    #[must_use]
    pub fn parallel_scale(&self) -> f32 {
        self.engine.parallel_scale()
    }

    /// Sets the parallel projection scale.
    pub fn set_parallel_scale(&mut self, scale: f32) {
        self.engine.set_parallel_scale(scale);
    }

    /// Zooms the camera by `value`.
    pub fn zoom(&mut self, value: f32) {
        self.engine.zoom(value);
    }

    /// Up vector of the camera.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.engine.view_up()
    }

    /// Sets the up vector of the camera.
    pub fn set_up(&mut self, vector: impl Into<Vec3>) {
        self.engine.set_view_up(vector.into());
    }

    /// Enables parallel projection.
    ///
    /// Parallel projection is often useful when viewing images or 2D datasets.
    pub fn enable_parallel_projection(&mut self) {
        self.set_parallel_projection(true);
    }

    /// Resets the camera to perspective projection.
    pub fn disable_parallel_projection(&mut self) {
        self.set_parallel_projection(false);
    }

    /// Enables or disables parallel projection.
    pub fn set_parallel_projection(&mut self, flag: bool) {
        self.is_parallel_projection = flag;
        self.engine.set_parallel_projection(flag);
    }

    /// Near and far clipping distances.
    #[must_use]
    pub fn clipping_range(&self) -> (f32, f32) {
        self.engine.clipping_range()
    }

    /// Sets the clipping distances.
    ///
    /// # Errors
    ///
    /// Returns [`VistaError::InvalidClippingRange`](vista_core::VistaError::InvalidClippingRange)
    /// if `near > far`; the engine is left untouched.
    pub fn set_clipping_range(&mut self, near: f32, far: f32) -> Result<()> {
        if let Err(err) = validate_clipping_range(near, far) {
            log::warn!("{err}");
            return Err(err);
        }
        self.engine.set_clipping_range(near, far);
        Ok(())
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.engine.view_matrix()
    }

    /// View-to-clip matrix for the given viewport aspect ratio.
    #[must_use]
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        self.engine.projection_matrix(aspect_ratio)
    }

    /// Registers an engine observer that lives as long as this descriptor.
    pub fn add_observer(&mut self, event: CameraEvent, callback: ObserverCallback) -> ObserverTag {
        self.engine.add_observer(event, callback)
    }

    /// Removes one engine observer.
    pub fn remove_observer(&mut self, tag: ObserverTag) -> bool {
        self.engine.remove_observer(tag)
    }

    /// Renderer this camera is attached to.
    #[must_use]
    pub fn parent(&self) -> Option<&ParentId> {
        self.parent.as_ref()
    }

    /// Attaches the camera to a renderer.
    pub fn set_parent(&mut self, parent: ParentId) {
        self.parent = Some(parent);
    }

    /// Re-reads every cached value from the engine.
    pub fn refresh(&mut self) {
        self.position = self.engine.position();
        self.focal_point = self.engine.focal_point();
        self.is_parallel_projection = self.engine.parallel_projection();
    }

    /// Snapshot of the full camera configuration.
    #[must_use]
    pub fn state(&self) -> CameraState {
        CameraState::capture(&self.engine)
    }

    /// Restores a snapshot taken with [`Camera::state`].
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot's clipping range is invalid; nothing
    /// is changed in that case.
    pub fn apply_state(&mut self, state: &CameraState) -> Result<()> {
        state.apply(&mut self.engine)?;
        self.refresh();
        Ok(())
    }

    /// Tears the descriptor down now instead of at the end of its scope.
    pub fn close(self) {
        drop(self);
    }

    fn release(&mut self) {
        self.engine.remove_all_observers();
        if let Some(parent) = self.parent.take() {
            log::debug!("camera detached from '{}'", parent.as_str());
        }
    }
}

impl<E: CameraEngine> Drop for Camera<E> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<E: CameraEngine + std::fmt::Debug> std::fmt::Debug for Camera<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Camera")
            .field("position", &self.position)
            .field("focal_point", &self.focal_point)
            .field("is_parallel_projection", &self.is_parallel_projection)
            .field("parent", &self.parent)
            .field("engine", &self.engine)
            .finish()
    }
}
