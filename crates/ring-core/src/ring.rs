//! Torus-shaped point cloud generation and back-to-front ordering.
//!
//! Particles are plain `Vec3` positions in ring space, centered on the
//! origin with the ring lying in the XZ plane. A set is never edited in
//! place; any change of count or radius produces a fresh set.

use crate::constants::{DEFAULT_GENERATOR_RADIUS, DEFAULT_GENERATOR_THICKNESS, JITTER_FRACTION};
use crate::rotation::rotate_point;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

pub type Particle = Vec3;

/// How particles are ordered before painting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DepthOrder {
    /// Sort by un-rotated z. Cheap, slightly wrong once the ring tilts.
    #[default]
    RawZ,
    /// Sort by z after the current rotation is applied.
    RotatedZ,
}

/// Generate `n` particles around a ring of major radius `radius`.
///
/// Points are spaced evenly around the ring with a small angular jitter,
/// and scattered inside a tube whose offset from the centerline is at most
/// `0.5 * thickness * radius`.
pub fn generate_ring<R: Rng + ?Sized>(
    n: usize,
    radius: f32,
    thickness: f32,
    rng: &mut R,
) -> Vec<Particle> {
    let step = TAU / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let theta = i as f32 * step;
            let jitter = (rng.gen::<f32>() - 0.5) * step * JITTER_FRACTION;
            let phi = rng.gen::<f32>() * TAU;
            let r = (rng.gen::<f32>() - 0.5) * thickness * radius;
            let spoke = radius + r * phi.cos();
            let angle = theta + jitter;
            Vec3::new(spoke * angle.cos(), r * phi.sin(), spoke * angle.sin())
        })
        .collect()
}

/// [`generate_ring`] with the stock shape: radius 180, thickness 0.06.
pub fn generate_default_ring<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Particle> {
    generate_ring(n, DEFAULT_GENERATOR_RADIUS, DEFAULT_GENERATOR_THICKNESS, rng)
}

/// Distance of `p` from the ring centerline of major radius `radius`.
#[inline]
pub fn tube_distance(p: Particle, radius: f32) -> f32 {
    let planar = (p.x * p.x + p.z * p.z).sqrt() - radius;
    (planar * planar + p.y * p.y).sqrt()
}

/// Copy of `particles` ordered farthest first (descending raw z).
pub fn depth_sorted(particles: &[Particle]) -> Vec<Particle> {
    let mut sorted = particles.to_vec();
    sorted.sort_by(|a, b| b.z.total_cmp(&a.z));
    sorted
}

/// Particles rotated by `angles` (`x` around X, `y` around Y) and ordered
/// farthest first by their rotated z.
pub fn rotated_depth_sorted(particles: &[Particle], angles: glam::Vec2) -> Vec<Particle> {
    let mut rotated: Vec<Particle> = particles
        .iter()
        .map(|p| rotate_point(*p, angles.x, angles.y))
        .collect();
    rotated.sort_by(|a, b| b.z.total_cmp(&a.z));
    rotated
}
