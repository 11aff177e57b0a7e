use crate::constants::{INITIAL_ROTATION, ROTATION_SMOOTHING};
use glam::{Vec2, Vec3};

/// Ring orientation: `x` is the angle around the X axis, `y` around the Y
/// axis. `current` chases `target` with a first-order low-pass each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationState {
    pub current: Vec2,
    pub target: Vec2,
}

impl Default for RotationState {
    fn default() -> Self {
        let initial = Vec2::from_array(INITIAL_ROTATION);
        Self::new(initial)
    }
}

impl RotationState {
    pub fn new(initial: Vec2) -> Self {
        Self {
            current: initial,
            target: initial,
        }
    }

    /// Move `current` a fixed fraction of the way to `target`.
    ///
    /// Frame-count based: there is no delta time, so the settle speed follows
    /// the display refresh rate.
    #[inline]
    pub fn step(&mut self) {
        self.current += (self.target - self.current) * ROTATION_SMOOTHING;
    }

    #[inline]
    pub fn distance_to_target(&self) -> f32 {
        (self.target - self.current).length()
    }
}

/// Rotate around X (on y/z) and then around Y (on the new x/z).
///
/// The order matters: swapping it changes how the ring tumbles.
#[inline]
pub fn rotate_point(p: Vec3, angle_x: f32, angle_y: f32) -> Vec3 {
    let (sin_x, cos_x) = angle_x.sin_cos();
    let y = p.y * cos_x - p.z * sin_x;
    let z = p.y * sin_x + p.z * cos_x;
    let (sin_y, cos_y) = angle_y.sin_cos();
    let x = p.x * cos_y + z * sin_y;
    let z = -p.x * sin_y + z * cos_y;
    Vec3::new(x, y, z)
}
