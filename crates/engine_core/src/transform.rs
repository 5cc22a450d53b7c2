//! Camera pose: position plus orientation, with local basis accessors.

use glam::{Mat4, Quat, Vec3};

/// A rigid pose in world space. The flight camera is one of these; the
/// integrator composes rotations onto `rotation` and advances `position`
/// along the forward basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a pose at the given position with identity rotation.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a pose with position and rotation.
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// View matrix for this pose (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    /// Forward direction (negative Z in right-handed coordinates).
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Right direction (positive X).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Up direction (positive Y).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Translate the pose by a delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_basis_is_axis_aligned() {
        let t = Transform::default();
        assert_eq!(t.forward(), -Vec3::Z);
        assert_eq!(t.right(), Vec3::X);
        assert_eq!(t.up(), Vec3::Y);
    }

    #[test]
    fn yaw_half_turn_reverses_forward() {
        let t = Transform::from_position_rotation(
            Vec3::ZERO,
            Quat::from_rotation_y(std::f32::consts::PI),
        );
        assert!((t.forward() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn translate_moves_position() {
        let mut t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        t.translate(Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(t.position, Vec3::new(1.0, 2.0, -1.0));
    }
}
