use glam::{Vec2, Vec3};

use crate::camera::core::{Camera, CameraUniform, MoveDirection};
use crate::command::FlycamCommand;
use crate::options::CameraOptions;

/// Saved pose for [`FlycamCommand::ResetView`].
struct HomePose {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    fovy: f32,
}

/// Interaction layer on top of [`Camera`].
///
/// Owns the camera, the tuning scalars from [`CameraOptions`], and the
/// per-frame uniform block. Raw input quantities (cursor pixels,
/// wheel lines, frame seconds) are scaled here; the camera itself only
/// sees world-space degrees and distances.
pub struct CameraController {
    camera: Camera,
    uniform: CameraUniform,
    home: HomePose,

    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom_speed: f32,
}

impl CameraController {
    /// Create a controller from options and the initial viewport size
    /// in pixels.
    #[must_use]
    pub fn new(options: &CameraOptions, width: u32, height: u32) -> Self {
        let position = Vec3::from_array(options.position);
        let mut camera = Camera::new(
            position,
            options.yaw,
            options.pitch,
            width as f32 / height as f32,
        );
        camera.znear = options.znear;
        camera.zfar = options.zfar;
        camera.set_pose(position, options.yaw, options.pitch, options.fovy);

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        Self {
            home: HomePose {
                position,
                yaw: camera.yaw(),
                pitch: camera.pitch(),
                fovy: camera.fovy(),
            },
            camera,
            uniform,
            movement_speed: options.movement_speed,
            mouse_sensitivity: options.mouse_sensitivity,
            zoom_speed: options.zoom_speed,
        }
    }

    /// The underlying camera.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access for hosts that reposition the camera directly.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The most recently refreshed uniform block.
    #[must_use]
    pub const fn uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// Execute a discrete command.
    ///
    /// [`FlycamCommand::Quit`] is ignored here — window lifecycle is
    /// the shell's concern.
    pub fn apply(&mut self, command: FlycamCommand) {
        match command {
            FlycamCommand::Look { delta } => self.look(delta),
            FlycamCommand::Zoom { delta } => self.zoom(delta),
            FlycamCommand::ResetView => self.reset(),
            FlycamCommand::Quit => {}
        }
    }

    /// Translate in `direction` for a frame lasting `dt` seconds.
    ///
    /// The distance is `movement_speed * dt`; out-of-range `dt` is
    /// simply scaled, sane frame timing is the caller's
    /// responsibility.
    pub fn move_along(&mut self, direction: MoveDirection, dt: f32) {
        self.camera.advance(direction, self.movement_speed * dt);
    }

    /// Rotate the view by a cursor offset in pixels.
    pub fn look(&mut self, delta: Vec2) {
        self.camera.look(delta * self.mouse_sensitivity);
    }

    /// Zoom by a scroll amount in wheel lines (positive = zoom in).
    pub fn zoom(&mut self, delta: f32) {
        self.camera.zoom(delta * self.zoom_speed);
    }

    /// Update the projection aspect after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height as f32;
    }

    /// Restore the initial pose and field of view.
    pub fn reset(&mut self) {
        self.camera.set_pose(
            self.home.position,
            self.home.yaw,
            self.home.pitch,
            self.home.fovy,
        );
    }

    /// Recompute the uniform block from the camera's current state.
    ///
    /// Call once per frame after all input has been applied.
    pub fn refresh_uniform(&mut self) {
        self.uniform.update_view_proj(&self.camera);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-5;

    fn controller() -> CameraController {
        CameraController::new(&CameraOptions::default(), 800, 600)
    }

    #[test]
    fn forward_for_one_second_at_default_speed() {
        let mut c = controller();
        c.move_along(MoveDirection::Forward, 1.0);
        assert!(
            (c.camera().position - Vec3::new(0.0, 0.0, 0.5)).length() < TOL
        );
    }

    #[test]
    fn look_scales_by_sensitivity() {
        let mut c = controller();
        c.apply(FlycamCommand::Look {
            delta: Vec2::new(100.0, 0.0),
        });
        // 100 px * 0.1 sensitivity = 10 degrees of yaw
        assert!((c.camera().yaw() - (-80.0)).abs() < TOL);
    }

    #[test]
    fn reset_restores_initial_pose() {
        let mut c = controller();
        c.apply(FlycamCommand::Look {
            delta: Vec2::new(250.0, -130.0),
        });
        c.apply(FlycamCommand::Zoom { delta: 20.0 });
        c.move_along(MoveDirection::Backward, 3.0);

        c.apply(FlycamCommand::ResetView);
        assert!(
            (c.camera().position - Vec3::new(0.0, 0.0, 3.0)).length() < TOL
        );
        assert_eq!(c.camera().yaw(), -90.0);
        assert_eq!(c.camera().pitch(), 0.0);
        assert_eq!(c.camera().fovy(), 45.0);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut c = controller();
        c.resize(1920, 1080);
        assert!((c.camera().aspect - 1920.0 / 1080.0).abs() < TOL);
    }

    #[test]
    fn quit_leaves_camera_untouched() {
        let mut c = controller();
        let view_before = c.camera().view_matrix();
        c.apply(FlycamCommand::Quit);
        assert_eq!(c.camera().view_matrix(), view_before);
    }

    #[test]
    fn refresh_uniform_matches_camera() {
        let mut c = controller();
        c.apply(FlycamCommand::Look {
            delta: Vec2::new(40.0, 25.0),
        });
        c.refresh_uniform();
        assert_eq!(
            c.uniform().view_proj,
            c.camera().view_projection().to_cols_array_2d()
        );
        assert_eq!(c.uniform().position, c.camera().position.to_array());
    }
}
