use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// GPU layout of the camera matrix: column-major, suitable for
/// `glUniformMatrix4fv(location, 1, GL_FALSE, ..)` or a 64-byte uniform buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    pub fn as_floats(&self) -> &[f32; 16] {
        bytemuck::cast_ref(&self.view_proj)
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

impl From<Mat4> for CameraUniform {
    fn from(m: Mat4) -> Self {
        Self::new(m)
    }
}
