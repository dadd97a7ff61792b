//! GPU-facing camera data.

use vista_core::CameraEngine;

use crate::camera::RenderCamera;

/// Camera uniforms for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[allow(clippy::pub_underscore_fields)]
pub struct CameraUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    pub inv_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub _padding: f32,
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            view: glam::Mat4::IDENTITY.to_cols_array_2d(),
            proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            inv_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0, 0.0, 1.0],
            _padding: 0.0,
        }
    }
}

impl RenderCamera {
    /// Builds the uniform block for a viewport with the given aspect ratio.
    #[must_use]
    pub fn uniforms(&self, aspect_ratio: f32) -> CameraUniforms {
        let view = self.view_matrix();
        let proj = self.projection_matrix(aspect_ratio);
        let view_proj = proj * view;
        let inv_proj = proj.inverse();

        CameraUniforms {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            view_proj: view_proj.to_cols_array_2d(),
            inv_proj: inv_proj.to_cols_array_2d(),
            camera_pos: self.position().to_array(),
            _padding: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::*;

    #[test]
    fn test_uniforms_layout() {
        // Four mat4x4<f32> plus a padded vec3.
        assert_eq!(std::mem::size_of::<CameraUniforms>(), 4 * 64 + 16);
        let uniforms = CameraUniforms::default();
        let bytes = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 272);
    }

    #[test]
    fn test_uniforms_match_camera() {
        let mut camera = RenderCamera::new();
        camera.set_position(Vec3::new(2.0, 0.0, 4.0));
        let uniforms = camera.uniforms(1.5);

        assert_eq!(uniforms.camera_pos, [2.0, 0.0, 4.0]);
        assert_eq!(Mat4::from_cols_array_2d(&uniforms.view), camera.view_matrix());
        assert_eq!(
            Mat4::from_cols_array_2d(&uniforms.view_proj),
            camera.view_projection_matrix(1.5)
        );
    }
}
