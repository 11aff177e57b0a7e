// DOM hooks used by the web frontend. Every element except the container
// is optional; a missing one just disables its feature.

pub const CONTAINER_ID: &str = "sphere-container";

pub const PARTICLE_COUNT_ID: &str = "particle-count";
pub const PARTICLE_COUNT_READOUT_ID: &str = "particle-count-value";

pub const DOT_SIZE_ID: &str = "dot-size";
pub const DOT_SIZE_READOUT_ID: &str = "dot-size-value";

pub const DOT_COLOR_ID: &str = "dot-color";

// Accessibility for the generated canvas
pub const CANVAS_ROLE: &str = "img";
pub const CANVAS_ARIA_LABEL: &str = "Animated 3D ring";

// Pointer events that end a drag
pub const POINTER_RELEASE_EVENTS: [&str; 3] = ["pointerup", "pointercancel", "pointerleave"];
