//! User-facing render settings and the UI-agnostic change interface.
//!
//! Front ends translate their own control events into [`SettingsChange`]
//! values and mirror the returned [`Readout`] wherever they display values.

use crate::color::Rgb;
use crate::constants::{
    DEFAULT_DOT_COLOR, DEFAULT_DOT_SIZE, DEFAULT_PARTICLES, MAX_PARTICLES, MIN_PARTICLES,
    RING_THICKNESS,
};
use crate::ring::DepthOrder;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub particle_count: usize,
    pub dot_size: f32,
    pub dot_color: Rgb,
    pub thickness: f32,
    pub depth_order: DepthOrder,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLES,
            dot_size: DEFAULT_DOT_SIZE,
            dot_color: default_dot_color(),
            thickness: RING_THICKNESS,
            depth_order: DepthOrder::RawZ,
        }
    }
}

impl RenderConfig {
    /// Build the starting config from the raw values of the page controls.
    ///
    /// Missing, unparseable or zero numbers and missing or malformed colors
    /// fall back to the defaults.
    pub fn from_controls(count: Option<&str>, size: Option<&str>, color: Option<&str>) -> Self {
        let defaults = Self::default();
        let particle_count = count
            .and_then(parse_nonzero)
            .map(clamp_particle_count)
            .unwrap_or(defaults.particle_count);
        let dot_size = size
            .and_then(parse_nonzero)
            .map(|v| v as f32)
            .unwrap_or(defaults.dot_size);
        let dot_color = color
            .and_then(|c| Rgb::from_hex(c).ok())
            .unwrap_or(defaults.dot_color);
        Self {
            particle_count,
            dot_size,
            dot_color,
            ..defaults
        }
    }
}

/// Numeric value of a control's text the way a browser's `Number()` reads
/// it: blank text is 0 and anything unparseable is NaN.
pub fn parse_control_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_nonzero(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v != 0.0)
}

pub fn default_dot_color() -> Rgb {
    Rgb::from_hex(DEFAULT_DOT_COLOR).unwrap_or(Rgb::new(0xff, 0x66, 0xa3))
}

/// Floor and clamp a requested count into `[MIN_PARTICLES, MAX_PARTICLES]`.
/// NaN maps to the minimum.
pub fn clamp_particle_count(n: f64) -> usize {
    if n.is_nan() {
        return MIN_PARTICLES;
    }
    n.floor().clamp(MIN_PARTICLES as f64, MAX_PARTICLES as f64) as usize
}

/// A change requested through one of the widget's controls.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingsChange {
    ParticleCount(f64),
    DotSize(f32),
    DotColor(String),
}

/// Value to mirror back into a readout after a change was applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Readout {
    ParticleCount(usize),
    DotSize(f32),
}

impl Readout {
    pub fn text(&self) -> String {
        match self {
            Readout::ParticleCount(n) => n.to_string(),
            Readout::DotSize(size) => format_dot_size(*size),
        }
    }
}

/// Dot size as shown next to its control (one decimal place).
#[inline]
pub fn format_dot_size(size: f32) -> String {
    format!("{size:.1}")
}
