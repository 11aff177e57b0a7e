use crate::constants::POINTER_RELEASE_EVENTS;
use crate::dom;
use crate::frame::SharedRenderer;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub container: web::HtmlElement,
    pub renderer: SharedRenderer,
}

/// Drag and hover rotation on the container. Default touch gestures are
/// switched off because drags are handled here.
pub fn wire_pointer_handlers(w: PointerWiring) {
    _ = w.container.style().set_property("touch-action", "none");
    wire_pointerdown(&w);
    wire_pointermove(&w);
    for event in POINTER_RELEASE_EVENTS {
        wire_pointer_release(&w, event);
    }
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let container_for_listener = w.container.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.renderer.borrow_mut().pointer_down(client_pos(&ev));
        _ = w.container.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = container_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let container_for_listener = w.container.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = dom::container_rect(&w.container);
        w.renderer.borrow_mut().pointer_move(client_pos(&ev), &rect);
    }) as Box<dyn FnMut(_)>);
    _ = container_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointer_release(w: &PointerWiring, event: &str) {
    let w = w.clone();
    let container_for_listener = w.container.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.renderer.borrow_mut().pointer_release();
        // Capture may already be gone (e.g. after pointercancel).
        _ = w.container.release_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = container_for_listener
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
