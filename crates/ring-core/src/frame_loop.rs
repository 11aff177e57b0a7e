use crate::renderer::{RingRenderer, Surface};
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Start/stop control around the per-frame render call.
///
/// The host scheduler calls [`FrameLoop::tick`] once per animation frame
/// and only requests another frame while it returns `true`. Tests drive it
/// the same way, one frame per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin running. A stopped loop stays stopped.
    pub fn start(&mut self) {
        if self.state == LoopState::Idle {
            self.state = LoopState::Running;
        }
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames rendered so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Render one frame if running; returns whether to schedule the next.
    pub fn tick<R: Rng, S: Surface + ?Sized>(
        &mut self,
        renderer: &mut RingRenderer<R>,
        surface: &mut S,
    ) -> bool {
        if !self.is_running() {
            return false;
        }
        renderer.render_frame(surface);
        self.frames += 1;
        self.is_running()
    }
}
