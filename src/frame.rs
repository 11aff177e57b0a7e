use crate::render::CanvasSurface;
use rand::rngs::StdRng;
use ring_core::{FrameLoop, RingRenderer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedRenderer = Rc<RefCell<RingRenderer<StdRng>>>;

pub struct FrameContext {
    pub renderer: SharedRenderer,
    pub surface: Rc<RefCell<CanvasSurface>>,
    pub frame_loop: Rc<RefCell<FrameLoop>>,
}

impl FrameContext {
    /// Draw one frame; returns whether another should be requested.
    pub fn frame(&mut self) -> bool {
        let mut renderer = self.renderer.borrow_mut();
        let mut surface = self.surface.borrow_mut();
        let mut frame_loop = self.frame_loop.borrow_mut();
        frame_loop.tick(&mut *renderer, &mut *surface)
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    frame_ctx.borrow().frame_loop.borrow_mut().start();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx_tick.borrow_mut().frame() {
            request_frame(&tick_clone);
        } else {
            log::info!("[loop] stopped");
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
