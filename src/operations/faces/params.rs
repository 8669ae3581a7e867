use crate::math::Transform2;

/// Rotation of the default containment frame, in radians.
///
/// Slightly off a quarter turn so extreme rays rarely run parallel to
/// axis-aligned input.
pub const DEFAULT_RAY_ROTATION: f64 = 1.572_965_7;

/// Parameters controlling face assembly.
#[derive(Debug, Clone, Copy)]
pub struct FaceParams {
    /// Frame in which extreme points are measured. Containment rays point
    /// along its negative y axis.
    pub transform: Transform2,
}

impl Default for FaceParams {
    fn default() -> Self {
        Self {
            transform: Transform2::rotation(DEFAULT_RAY_ROTATION),
        }
    }
}

impl FaceParams {
    /// Uses `transform` as the containment frame.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform2) -> Self {
        self.transform = transform;
        self
    }
}
