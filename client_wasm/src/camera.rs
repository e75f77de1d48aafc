//! Camera for the Pong field
//!
//! 2D orthographic camera with a top-left origin, matching field pixels

use glam::{Mat4, Vec3};

pub struct Camera {
    pub width: f32,
    pub height: f32,
    /// Horizontal screen-shake offset in field pixels
    pub shake: f32,
}

impl Camera {
    pub fn orthographic(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            shake: 0.0,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn view_proj(&self) -> Mat4 {
        // y grows downward, like the DOM
        let projection = Mat4::orthographic_rh(0.0, self.width, self.height, 0.0, -1.0, 1.0);
        let view = Mat4::from_translation(Vec3::new(self.shake, 0.0, 0.0));
        projection * view
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
