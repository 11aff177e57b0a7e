use ring_core::{ContainerRect, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn input_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

#[inline]
pub fn input_value(document: &web::Document, element_id: &str) -> Option<String> {
    input_by_id(document, element_id).map(|input| input.value())
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Call `handler` with the control's value on every `input` event. Does
/// nothing when the control is absent.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    let Some(input) = input_by_id(document, element_id) else {
        log::debug!("[controls] #{} not present", element_id);
        return;
    };
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move || handler(source.value())) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn device_pixel_ratio() -> f32 {
    web::window()
        .map(|w| w.device_pixel_ratio() as f32)
        .unwrap_or(1.0)
        .max(1.0)
}

/// Logical content-box size of the container plus the current pixel ratio.
pub fn container_viewport(container: &web::HtmlElement) -> Viewport {
    Viewport::new(
        container.client_width() as f32,
        container.client_height() as f32,
        device_pixel_ratio(),
    )
}

#[inline]
pub fn container_rect(container: &web::HtmlElement) -> ContainerRect {
    let rect = container.get_bounding_client_rect();
    ContainerRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}
