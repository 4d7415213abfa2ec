//! Plain value types for actor placement commands.

/// A rigid transform in the host scene's coordinate convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation in meters.
    pub translation: [f32; 3],
    /// Rotation quaternion `[x, y, z, w]`.
    pub rotation: [f32; 4],
    /// Per-axis scale.
    pub scale: [f32; 3],
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Transform = Transform {
        translation: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0, 1.0],
        scale: [1.0, 1.0, 1.0],
    };

    /// A transform that only translates, keeping identity rotation and scale.
    #[must_use]
    pub fn from_translation(translation: [f32; 3]) -> Self {
        Transform {
            translation,
            ..Transform::IDENTITY
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

/// Timing function for a timed move command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Accelerate from rest.
    EaseIn,
    /// Decelerate to rest.
    EaseOut,
    /// Accelerate, then decelerate.
    EaseInOut,
}
