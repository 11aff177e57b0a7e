//! The ring renderer: owned particle set, rotation, settings and viewport,
//! drawn through the [`Surface`] trait so it can run without a display.

use crate::color::{ColorError, Rgb, Rgba};
use crate::input::{ContainerRect, PointerTracker};
use crate::projection::{project, Viewport};
use crate::ring::{depth_sorted, generate_ring, rotated_depth_sorted, DepthOrder, Particle};
use crate::rotation::{rotate_point, RotationState};
use crate::settings::{clamp_particle_count, Readout, RenderConfig, SettingsChange};
use glam::Vec2;
use rand::Rng;

/// Anything the renderer can paint dots onto.
pub trait Surface {
    /// Clear the logical `width` x `height` area.
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

pub struct RingRenderer<R: Rng> {
    particles: Vec<Particle>,
    pub rotation: RotationState,
    pub pointer: PointerTracker,
    config: RenderConfig,
    viewport: Viewport,
    rng: R,
}

impl<R: Rng> RingRenderer<R> {
    /// Create a renderer and generate its first particle set.
    pub fn new(mut config: RenderConfig, viewport: Viewport, rng: R) -> Self {
        config.particle_count = clamp_particle_count(config.particle_count as f64);
        let mut renderer = Self {
            particles: Vec::new(),
            rotation: RotationState::default(),
            pointer: PointerTracker::default(),
            config,
            viewport,
            rng,
        };
        renderer.regenerate();
        renderer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn particle_count(&self) -> usize {
        self.config.particle_count
    }

    /// Adopt a new viewport and rebuild the ring at its radius.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!(
            "[ring] resize {}x{} @ {:.2}x",
            viewport.width,
            viewport.height,
            viewport.device_pixel_ratio
        );
        self.viewport = viewport;
        self.regenerate();
    }

    /// Clamp `n` to the allowed range, rebuild the ring and return the
    /// count that was applied.
    pub fn set_particle_count(&mut self, n: f64) -> usize {
        self.config.particle_count = clamp_particle_count(n);
        self.regenerate();
        self.config.particle_count
    }

    /// Non-finite sizes are ignored; returns whether the size was taken.
    pub fn set_dot_size(&mut self, size: f32) -> bool {
        if !size.is_finite() {
            return false;
        }
        self.config.dot_size = size;
        true
    }

    /// Keeps the previous color when `hex` does not parse.
    pub fn set_dot_color(&mut self, hex: &str) -> Result<Rgb, ColorError> {
        let color = Rgb::from_hex(hex)?;
        self.config.dot_color = color;
        Ok(color)
    }

    pub fn set_depth_order(&mut self, order: DepthOrder) {
        self.config.depth_order = order;
    }

    /// Apply one control change, returning what its readout should show.
    pub fn apply_setting(&mut self, change: SettingsChange) -> Result<Option<Readout>, ColorError> {
        match change {
            SettingsChange::ParticleCount(n) => {
                Ok(Some(Readout::ParticleCount(self.set_particle_count(n))))
            }
            SettingsChange::DotSize(size) => Ok(self
                .set_dot_size(size)
                .then_some(Readout::DotSize(self.config.dot_size))),
            SettingsChange::DotColor(hex) => self.set_dot_color(&hex).map(|_| None),
        }
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.pointer.pointer_down(pos);
    }

    pub fn pointer_move(&mut self, pos: Vec2, rect: &ContainerRect) {
        self.pointer.pointer_move(pos, rect, &mut self.rotation);
    }

    pub fn pointer_release(&mut self) -> bool {
        self.pointer.pointer_release()
    }

    /// Draw one frame: clear, ease the rotation, order back to front and
    /// paint every dot. Returns how many dots were painted.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let vp = self.viewport;
        surface.clear(vp.width, vp.height);
        self.rotation.step();

        let angles = self.rotation.current;
        let ordered = match self.config.depth_order {
            DepthOrder::RawZ => depth_sorted(&self.particles)
                .into_iter()
                .map(|p| rotate_point(p, angles.x, angles.y))
                .collect::<Vec<_>>(),
            DepthOrder::RotatedZ => rotated_depth_sorted(&self.particles, angles),
        };

        let mut painted = 0;
        for rotated in ordered {
            if let Some(dot) = project(rotated, &vp, self.config.dot_size) {
                let color = self.config.dot_color.with_alpha(dot.alpha);
                surface.fill_circle(dot.position, dot.radius, color);
                painted += 1;
            }
        }
        painted
    }

    fn regenerate(&mut self) {
        let radius = self.viewport.ring_radius();
        self.particles = generate_ring(
            self.config.particle_count,
            radius,
            self.config.thickness,
            &mut self.rng,
        );
        log::debug!(
            "[ring] regenerated {} particles, radius {:.1}",
            self.particles.len(),
            radius
        );
    }
}
