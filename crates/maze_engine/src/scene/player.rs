//! Player avatar state

use crate::foundation::math::{Quaternion, Vector3};

/// Player state written by the input layer and read by the renderer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Player {
    /// World position
    pub origin: Vector3,
    /// Current velocity
    pub velocity: Vector3,
    /// Movement direction requested by input this frame
    pub move_direction: Vector3,
    /// Rotation about +Y in radians
    pub yaw: f32,
    /// Rotation about the local +X in radians
    pub pitch: f32,
}

impl Player {
    /// Base forward direction before any yaw or pitch is applied
    pub const FORWARD: Vector3 = Vector3::new(0.0, 0.0, -1.0);

    /// Place the player at `origin` and clear any motion
    pub fn spawn_at(&mut self, origin: Vector3) {
        self.origin = origin;
        self.velocity = Vector3::ZERO;
        self.move_direction = Vector3::ZERO;
    }

    /// Look rotation built from yaw and pitch
    pub fn orientation(&self) -> Quaternion {
        Quaternion::from_yaw_pitch(self.yaw, self.pitch)
    }

    /// Unit vector the player is looking along
    pub fn facing(&self) -> Vector3 {
        self.orientation().rotate_vector(Self::FORWARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_faces_forward() {
        let player = Player::default();
        assert_abs_diff_eq!(player.facing(), Player::FORWARD, epsilon = 1e-6);
    }

    #[test]
    fn test_yaw_quarter_turn() {
        let player = Player {
            yaw: HALF_PI,
            ..Default::default()
        };

        // Turning left about +Y takes -Z to -X
        assert_abs_diff_eq!(player.facing(), Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_pitch_looks_up() {
        let player = Player {
            pitch: HALF_PI,
            ..Default::default()
        };

        assert_abs_diff_eq!(player.facing(), Vector3::UNIT_Y, epsilon = 1e-6);
    }

    #[test]
    fn test_spawn_resets_motion() {
        let mut player = Player {
            velocity: Vector3::new(1.0, 0.0, 0.0),
            move_direction: Vector3::new(0.0, 0.0, 1.0),
            yaw: 0.5,
            ..Default::default()
        };
        player.spawn_at(Vector3::new(2.0, 0.0, 4.0));

        assert_eq!(player.origin, Vector3::new(2.0, 0.0, 4.0));
        assert_eq!(player.velocity, Vector3::ZERO);
        assert_eq!(player.move_direction, Vector3::ZERO);
        assert_eq!(player.yaw, 0.5);
    }
}
