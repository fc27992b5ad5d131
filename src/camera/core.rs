use glam::{Mat3, Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Pitch saturates at ±89° so the view never flips past vertical.
pub const PITCH_LIMIT_DEG: f32 = 89.0;

/// Narrowest allowed vertical field of view in degrees (fully zoomed
/// in).
pub const FOVY_MIN_DEG: f32 = 1.0;

/// Widest allowed vertical field of view in degrees (fully zoomed
/// out).
pub const FOVY_MAX_DEG: f32 = 45.0;

/// Movement direction for keyboard-driven translation.
///
/// Serde serializes as `snake_case` strings so TOML keybinding presets
/// stay readable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Along the viewing direction.
    Forward,
    /// Against the viewing direction.
    Backward,
    /// Along the negative right vector (strafe).
    Left,
    /// Along the right vector (strafe).
    Right,
}

/// Free-fly perspective camera.
///
/// Orientation is stored as yaw/pitch Euler angles in degrees; the
/// `front`/`right`/`up` basis is recomputed from them on every
/// orientation change and stays orthonormal. Yaw is deliberately
/// unclamped (it is periodic); pitch saturates at
/// [`PITCH_LIMIT_DEG`].
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,

    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    fovy: f32,
}

impl Default for Camera {
    /// Camera at `(0, 0, 3)` facing `-Z`, 45° field of view, 4:3
    /// aspect.
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), -90.0, 0.0, 800.0 / 600.0)
    }
}

impl Camera {
    /// Create a camera at `position` with the given yaw/pitch (degrees)
    /// and aspect ratio. A yaw of -90° faces `-Z`.
    #[must_use]
    pub fn new(position: Vec3, yaw: f32, pitch: f32, aspect: f32) -> Self {
        let mut camera = Self {
            position,
            aspect,
            znear: 0.1,
            zfar: 100.0,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG),
            fovy: FOVY_MAX_DEG,
        };
        camera.refresh_axes();
        camera
    }

    /// Unit viewing direction.
    #[must_use]
    pub const fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit up vector of the camera basis.
    #[must_use]
    pub const fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit right vector of the camera basis.
    #[must_use]
    pub const fn right(&self) -> Vec3 {
        self.right
    }

    /// Yaw angle in degrees (unbounded).
    #[must_use]
    pub const fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch angle in degrees, within ±[`PITCH_LIMIT_DEG`].
    #[must_use]
    pub const fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees, between [`FOVY_MIN_DEG`]
    /// and [`FOVY_MAX_DEG`].
    #[must_use]
    pub const fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Rotate the view by a look offset in degrees.
    ///
    /// `offset.x` adds to yaw (positive turns right), `offset.y` adds
    /// to pitch (positive looks up). Pitch saturates at
    /// ±[`PITCH_LIMIT_DEG`]; yaw accumulates without wrapping.
    pub fn look(&mut self, offset: Vec2) {
        self.yaw += offset.x;
        self.pitch =
            (self.pitch + offset.y).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        self.refresh_axes();
    }

    /// Translate `distance` world units in the given direction.
    ///
    /// Forward/backward follow the full viewing direction (including
    /// its vertical component), so the camera flies rather than walks.
    pub fn advance(&mut self, direction: MoveDirection, distance: f32) {
        match direction {
            MoveDirection::Forward => self.position += self.front * distance,
            MoveDirection::Backward => self.position -= self.front * distance,
            MoveDirection::Left => self.position -= self.right * distance,
            MoveDirection::Right => self.position += self.right * distance,
        }
    }

    /// Narrow or widen the field of view (positive `delta` = zoom in).
    ///
    /// Saturates at both [`FOVY_MIN_DEG`] and [`FOVY_MAX_DEG`].
    pub fn zoom(&mut self, delta: f32) {
        self.fovy = (self.fovy - delta).clamp(FOVY_MIN_DEG, FOVY_MAX_DEG);
    }

    /// Jump to a new pose and field of view in one step.
    pub fn set_pose(
        &mut self,
        position: Vec3,
        yaw: f32,
        pitch: f32,
        fovy: f32,
    ) {
        self.position = position;
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        self.fovy = fovy.clamp(FOVY_MIN_DEG, FOVY_MAX_DEG);
        self.refresh_axes();
    }

    /// Build the world-to-eye view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Build the perspective projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        // perspective_rh uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// View matrix with the translation stripped.
    ///
    /// Used for distant backdrops (cubemap skyboxes) that must rotate
    /// with the view but never move relative to the eye.
    #[must_use]
    pub fn backdrop_view_matrix(&self) -> Mat4 {
        Mat4::from_mat3(Mat3::from_mat4(self.view_matrix()))
    }

    /// Recompute the orthonormal basis from yaw/pitch.
    fn refresh_axes(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(
            yaw_cos * pitch_cos,
            pitch_sin,
            yaw_sin * pitch_cos,
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[repr(C)]
#[derive(
    Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable,
)]
/// GPU uniform buffer holding the view-projection matrix and camera
/// metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 800.0 / 600.0,
            forward: [0.0, 0.0, -1.0],
            fovy: FOVY_MAX_DEG,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.view_projection().to_cols_array_2d();
        self.position = camera.position.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.front().to_array();
        self.fovy = camera.fovy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-5;

    fn assert_orthonormal(camera: &Camera) {
        assert!((camera.front().length() - 1.0).abs() < TOL);
        assert!((camera.right().length() - 1.0).abs() < TOL);
        assert!((camera.up().length() - 1.0).abs() < TOL);
        assert!(camera.front().dot(camera.right()).abs() < TOL);
        assert!(camera.front().dot(camera.up()).abs() < TOL);
        assert!(camera.right().dot(camera.up()).abs() < TOL);
    }

    #[test]
    fn default_faces_negative_z() {
        let camera = Camera::default();
        assert!((camera.front() - Vec3::NEG_Z).length() < TOL);
        assert_orthonormal(&camera);
    }

    #[test]
    fn basis_stays_orthonormal_under_look_sequences() {
        let mut camera = Camera::default();
        let offsets = [
            Vec2::new(13.7, 4.2),
            Vec2::new(-200.0, 91.5),
            Vec2::new(0.3, -0.3),
            Vec2::new(721.0, -450.0),
            Vec2::new(-0.001, 88.9),
        ];
        for offset in offsets {
            camera.look(offset);
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn pitch_saturates_at_limit() {
        let mut camera = Camera::default();
        for _ in 0..100 {
            camera.look(Vec2::new(0.0, 30.0));
            assert!(camera.pitch() <= PITCH_LIMIT_DEG);
        }
        assert_eq!(camera.pitch(), PITCH_LIMIT_DEG);
        for _ in 0..100 {
            camera.look(Vec2::new(0.0, -30.0));
            assert!(camera.pitch() >= -PITCH_LIMIT_DEG);
        }
        assert_eq!(camera.pitch(), -PITCH_LIMIT_DEG);
    }

    #[test]
    fn yaw_accumulates_without_wrapping() {
        let mut camera = Camera::default();
        for _ in 0..10 {
            camera.look(Vec2::new(90.0, 0.0));
        }
        assert_eq!(camera.yaw(), -90.0 + 900.0);
        assert_orthonormal(&camera);
    }

    #[test]
    fn zero_look_offset_is_a_noop() {
        let mut camera = Camera::new(Vec3::ZERO, -90.0, 0.0, 1.0);
        let front_before = camera.front();
        camera.look(Vec2::ZERO);
        assert!((camera.front() - front_before).length() < TOL);
    }

    #[test]
    fn forward_advance_moves_along_front() {
        let mut camera = Camera::default();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 3.0));
        // movement_speed 2.5 for dt 1.0
        camera.advance(MoveDirection::Forward, 2.5);
        assert!((camera.position - Vec3::new(0.0, 0.0, 0.5)).length() < TOL);
    }

    #[test]
    fn strafe_moves_along_right() {
        let mut camera = Camera::default();
        camera.advance(MoveDirection::Right, 2.0);
        assert!((camera.position - Vec3::new(2.0, 0.0, 3.0)).length() < TOL);
        camera.advance(MoveDirection::Left, 2.0);
        assert!((camera.position - Vec3::new(0.0, 0.0, 3.0)).length() < TOL);
    }

    #[test]
    fn zoom_in_narrows_fovy() {
        let mut camera = Camera::default();
        assert_eq!(camera.fovy(), 45.0);
        camera.zoom(10.0);
        assert_eq!(camera.fovy(), 35.0);
    }

    #[test]
    fn zoom_saturates_at_both_ends() {
        let mut camera = Camera::default();
        // Zooming out from the widest setting cannot exceed it.
        camera.zoom(-10.0);
        assert_eq!(camera.fovy(), 45.0);
        // Zooming far in pins at the narrow end.
        camera.zoom(100.0);
        assert_eq!(camera.fovy(), 1.0);
        camera.zoom(10.0);
        assert_eq!(camera.fovy(), 1.0);
    }

    #[test]
    fn view_matrix_is_deterministic() {
        let mut camera = Camera::default();
        camera.look(Vec2::new(31.0, -12.0));
        assert_eq!(camera.view_matrix(), camera.view_matrix());
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), -40.0, 20.0, 1.5);
        camera.look(Vec2::new(5.0, -3.0));
        let eye_in_view =
            camera.view_matrix().transform_point3(camera.position);
        assert!(eye_in_view.length() < TOL);
    }

    #[test]
    fn backdrop_view_has_no_translation() {
        let camera =
            Camera::new(Vec3::new(10.0, -4.0, 7.5), -120.0, 15.0, 1.5);
        let backdrop = camera.backdrop_view_matrix();
        assert!(backdrop.w_axis.truncate().length() < TOL);
        // Rotation part matches the full view matrix.
        let view = camera.view_matrix();
        assert!(
            (Mat3::from_mat4(backdrop).mul_vec3(Vec3::X)
                - Mat3::from_mat4(view).mul_vec3(Vec3::X))
            .length()
                < TOL
        );
    }

    #[test]
    fn uniform_tracks_camera_state() {
        let mut camera = Camera::default();
        camera.look(Vec2::new(45.0, 10.0));
        camera.zoom(5.0);

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        assert_eq!(
            uniform.view_proj,
            camera.view_projection().to_cols_array_2d()
        );
        assert_eq!(uniform.position, camera.position.to_array());
        assert_eq!(uniform.forward, camera.front().to_array());
        assert_eq!(uniform.fovy, 40.0);
    }
}
