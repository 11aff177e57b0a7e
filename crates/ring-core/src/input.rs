use crate::constants::DRAG_SENSITIVITY;
use crate::rotation::RotationState;
use glam::Vec2;

/// Container bounds in client (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    /// Pointer position as a fraction of the container, or `None` for a
    /// zero-area rect.
    #[inline]
    pub fn normalized(&self, pos: Vec2) -> Option<Vec2> {
        if self.width > 0.0 && self.height > 0.0 {
            Some(Vec2::new(
                (pos.x - self.left) / self.width,
                (pos.y - self.top) / self.height,
            ))
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerMode {
    #[default]
    Idle,
    Dragging {
        last: Vec2,
    },
}

/// Drag/hover state machine feeding the rotation target.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    pub mode: PointerMode,
}

impl PointerTracker {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, PointerMode::Dragging { .. })
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.mode = PointerMode::Dragging { last: pos };
    }

    /// Dragging accumulates pointer deltas into the target; hovering points
    /// the ring toward the cursor.
    pub fn pointer_move(&mut self, pos: Vec2, rect: &ContainerRect, rotation: &mut RotationState) {
        match &mut self.mode {
            PointerMode::Dragging { last } => {
                let delta = pos - *last;
                rotation.target.y += delta.x * DRAG_SENSITIVITY;
                rotation.target.x += delta.y * DRAG_SENSITIVITY;
                *last = pos;
            }
            PointerMode::Idle => {
                if let Some(uv) = rect.normalized(pos) {
                    rotation.target.y = (uv.x - 0.5) * 2.0;
                    rotation.target.x = -(uv.y - 0.5) * 2.0;
                }
            }
        }
    }

    /// Pointer up, cancel or leave. Returns whether a drag was in progress.
    pub fn pointer_release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.mode = PointerMode::Idle;
        was_dragging
    }
}
