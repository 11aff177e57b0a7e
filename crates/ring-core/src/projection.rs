//! Drawing-surface geometry and the perspective-divide projection.

use crate::constants::{
    ALPHA_BASE, ALPHA_MAX, ALPHA_SCALE_OFFSET, DOT_RADIUS_MIN, DOT_RADIUS_SCALE, FOV_FACTOR,
    RING_RADIUS_FRACTION,
};
use glam::{Vec2, Vec3};

/// Logical (CSS pixel) size of the drawing surface plus the device pixel
/// ratio used for its backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

impl Viewport {
    /// Negative or non-finite sizes collapse to zero; the pixel ratio never
    /// drops below 1.
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let dpr = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.max(1.0)
        } else {
            1.0
        };
        Self {
            width: sane(width),
            height: sane(height),
            device_pixel_ratio: dpr,
        }
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.device_pixel_ratio).floor() as u32,
            (self.height * self.device_pixel_ratio).floor() as u32,
        )
    }

    #[inline]
    pub fn ring_radius(&self) -> f32 {
        self.width.min(self.height) * RING_RADIUS_FRACTION
    }

    #[inline]
    pub fn fov(&self) -> f32 {
        self.width.max(self.height) * FOV_FACTOR
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// One dot ready to paint, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedDot {
    pub position: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub scale: f32,
}

/// Project an already rotated point. Returns `None` when the perspective
/// divide degenerates (e.g. a zero-area viewport).
pub fn project(rotated: Vec3, viewport: &Viewport, dot_size: f32) -> Option<ProjectedDot> {
    let fov = viewport.fov();
    let scale = fov / (fov + rotated.z);
    if !scale.is_finite() {
        return None;
    }
    let position = Vec2::new(rotated.x, rotated.y) * scale + viewport.center();
    if !position.is_finite() {
        return None;
    }
    Some(ProjectedDot {
        position,
        radius: dot_radius(dot_size, scale),
        alpha: dot_alpha(scale),
        scale,
    })
}

#[inline]
pub fn dot_radius(dot_size: f32, scale: f32) -> f32 {
    (dot_size * scale * DOT_RADIUS_SCALE).max(DOT_RADIUS_MIN)
}

#[inline]
pub fn dot_alpha(scale: f32) -> f32 {
    (ALPHA_BASE + (scale - ALPHA_SCALE_OFFSET)).clamp(0.0, ALPHA_MAX)
}
