use crate::projection::Projection;
use glam::{Mat4, Vec3};

/// Anything that can place the eye in the world.
pub trait View {
    fn position(&self) -> Vec3;
    /// Unit-length look direction.
    fn forward(&self) -> Vec3;
    fn up(&self) -> Vec3;

    fn view_matrix(&self) -> Mat4 {
        let eye = self.position();
        Mat4::look_at_rh(eye, eye + self.forward(), self.up())
    }
}

/// `projection * view`, the matrix a vertex shader multiplies positions by.
pub fn view_projection(view: &impl View, projection: &Projection) -> Mat4 {
    projection.matrix() * view.view_matrix()
}
