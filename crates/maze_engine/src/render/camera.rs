//! # Fixed Overhead Camera
//!
//! The maze is viewed from one fixed camera hovering above the grid centre,
//! pulled back along the row axis so the floor is seen at an angle. Draw
//! space has columns on X, rows on Y and height on Z.
//!
//! Matrices follow the right-handed OpenGL conventions of `nalgebra`'s
//! `look_at_rh` and `new_perspective`.

use crate::core::config::CameraConfig;
use crate::foundation::math::{utils, Mat4, Vector3};
use crate::scene::LevelGrid;
use nalgebra::Point3;

/// Perspective camera with a look-at target
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in draw space
    pub position: Vector3,

    /// Point the camera is looking at
    pub target: Vector3,

    /// Up direction used to orient the view
    pub up: Vector3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Camera looking down at the centre of `grid`.
    ///
    /// Screen-up points toward row 0, so the map reads the same way as its
    /// text file.
    pub fn overhead(grid: &LevelGrid, aspect: f32, config: &CameraConfig) -> Self {
        let centre = Vector3::new(
            grid.width().saturating_sub(1) as f32 * 0.5,
            grid.height().saturating_sub(1) as f32 * 0.5,
            0.0,
        );

        Self {
            position: centre + Vector3::new(0.0, config.tilt, config.height),
            target: centre,
            up: Vector3::new(0.0, -1.0, 0.0),
            fov: utils::deg_to_rad(config.fov_degrees),
            aspect,
            near: config.near,
            far: config.far,
        }
    }

    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            &Point3::from(nalgebra::Vector3::<f32>::from(self.position)),
            &Point3::from(nalgebra::Vector3::<f32>::from(self.target)),
            &nalgebra::Vector3::<f32>::from(self.up),
        )
    }

    /// View-to-clip matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Combined world-to-clip matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Direction from the camera to its target
    pub fn forward(&self) -> Vector3 {
        (self.target - self.position).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ndc(camera: &Camera, p: Vector3) -> Point3<f32> {
        camera
            .view_projection()
            .transform_point(&Point3::new(p.x, p.y, p.z))
    }

    #[test]
    fn test_overhead_position() {
        let grid = LevelGrid::new(5, 5);
        let camera = Camera::overhead(&grid, 4.0 / 3.0, &CameraConfig::default());

        assert_eq!(camera.target, Vector3::new(2.0, 2.0, 0.0));
        assert_eq!(camera.position, Vector3::new(2.0, 8.0, 12.0));
        assert!(camera.forward().z < 0.0);
    }

    #[test]
    fn test_target_projects_to_centre() {
        let grid = LevelGrid::new(7, 4);
        let camera = Camera::overhead(&grid, 800.0 / 600.0, &CameraConfig::default());
        let centre = ndc(&camera, camera.target);

        assert_abs_diff_eq!(centre.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(centre.y, 0.0, epsilon = 1e-5);
        assert!(centre.z > -1.0 && centre.z < 1.0);
    }

    #[test]
    fn test_first_row_is_above_last_row() {
        let grid = LevelGrid::new(5, 5);
        let camera = Camera::overhead(&grid, 1.0, &CameraConfig::default());

        let first = ndc(&camera, Vector3::new(2.0, 0.0, 0.0));
        let last = ndc(&camera, Vector3::new(2.0, 4.0, 0.0));

        assert!(first.y > last.y);
    }

    #[test]
    fn test_view_moves_eye_to_origin() {
        let camera = Camera::overhead(&LevelGrid::new(3, 3), 1.0, &CameraConfig::default());
        let eye = camera
            .view_matrix()
            .transform_point(&Point3::new(camera.position.x, camera.position.y, camera.position.z));

        assert_abs_diff_eq!(eye.coords.norm(), 0.0, epsilon = 1e-5);
    }
}
