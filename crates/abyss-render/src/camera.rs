//! Perspective camera producing reverse-Z view/projection matrices.

use glam::{Mat4, Quat, Vec3};

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    /// Rotation as a unit quaternion.
    pub rotation: Quat,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance (always positive).
    pub near: f32,
    /// Far clip plane distance (always positive, > near).
    pub far: f32,
}

impl Camera {
    /// Orient the camera at `position` toward `target`, then roll about the
    /// view axis by `roll` radians.
    ///
    /// # Panics
    ///
    /// Panics if `target` coincides with `position`.
    pub fn look_at(&mut self, position: Vec3, target: Vec3, roll: f32) {
        let forward = target - position;
        assert!(
            forward.length_squared() > 1e-12,
            "camera target must differ from its position"
        );
        let view = Mat4::look_at_rh(position, target, Vec3::Y);
        let base = Quat::from_mat4(&view.inverse());
        self.position = position;
        self.rotation = (base * Quat::from_rotation_z(roll)).normalize();
    }

    /// Compute the view matrix (inverse of camera transform).
    pub fn view_matrix(&self) -> Mat4 {
        (Mat4::from_translation(self.position) * Mat4::from_quat(self.rotation)).inverse()
    }

    /// Projection with reverse-Z: near maps to depth 1, far to 0.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.far, self.near)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// The forward direction vector (-Z in camera space).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// The up direction vector (+Y in camera space).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        self.aspect_ratio = width / height;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 18.0),
            rotation: Quat::IDENTITY,
            fov_y: 55f32.to_radians(),
            aspect_ratio: 16.0 / 9.0,
            near: 0.1,
            far: 120.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_camera_looks_down_neg_z() {
        let camera = Camera::default();
        let forward = camera.forward();
        assert!((forward - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_look_at_faces_target() {
        let mut camera = Camera::default();
        camera.look_at(Vec3::new(0.0, 2.0, 18.0), Vec3::ZERO, 0.0);
        let expected = (Vec3::ZERO - Vec3::new(0.0, 2.0, 18.0)).normalize();
        assert!((camera.forward() - expected).length() < 1e-5);
        assert!(camera.up().y > 0.9);
    }

    #[test]
    fn test_roll_tilts_up_vector() {
        let mut camera = Camera::default();
        camera.look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 0.1);
        let up = camera.up();
        assert!(up.x.abs() > 0.05);
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    #[should_panic(expected = "must differ")]
    fn test_degenerate_look_at_panics() {
        let mut camera = Camera::default();
        camera.look_at(Vec3::ONE, Vec3::ONE, 0.0);
    }

    #[test]
    fn test_reverse_z_depth() {
        let camera = Camera::default();
        let proj = camera.projection_matrix();
        let near = proj * glam::Vec4::new(0.0, 0.0, -camera.near, 1.0);
        let far = proj * glam::Vec4::new(0.0, 0.0, -camera.far, 1.0);
        assert!((near.z / near.w - 1.0).abs() < 1e-4);
        assert!((far.z / far.w).abs() < 1e-4);
    }

    #[test]
    fn test_view_matrix_inverse_is_camera_transform() {
        let mut camera = Camera::default();
        camera.look_at(Vec3::new(10.0, 20.0, 30.0), Vec3::ZERO, 0.0);
        let inv_view = camera.view_matrix().inverse();
        assert!((inv_view.col(3).truncate() - camera.position).length() < 1e-3);
    }
}
