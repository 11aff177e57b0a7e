#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use ring_core::{FrameLoop, Readout, RingRenderer};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;

use constants::CONTAINER_ID;
use render::CanvasSurface;

thread_local! {
    static FRAME_LOOP: RefCell<Option<Rc<RefCell<FrameLoop>>>> = const { RefCell::new(None) };
}

fn wire_container_resize(
    container: &web::HtmlElement,
    surface: &Rc<RefCell<CanvasSurface>>,
    renderer: &frame::SharedRenderer,
) {
    let container_resize = container.clone();
    let surface_resize = surface.clone();
    let renderer_resize = renderer.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let viewport = dom::container_viewport(&container_resize);
        surface_resize.borrow().resize(&viewport);
        renderer_resize.borrow_mut().resize(viewport);
    }) as Box<dyn FnMut()>);

    // Track the container itself so layout-only size changes are seen too;
    // fall back to window resizes where ResizeObserver is missing.
    match web::ResizeObserver::new(resize_closure.as_ref().unchecked_ref()) {
        Ok(observer) => observer.observe(container),
        Err(e) => {
            log::warn!("ResizeObserver unavailable ({:?}); using window resize", e);
            if let Some(window) = web::window() {
                _ = window.add_event_listener_with_callback(
                    "resize",
                    resize_closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ring-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the animation loop. The last drawn frame stays on the canvas.
#[wasm_bindgen]
pub fn stop_ring() {
    FRAME_LOOP.with(|slot| {
        if let Some(frame_loop) = slot.borrow().as_ref() {
            frame_loop.borrow_mut().stop();
        }
    });
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("ring already started; ignoring");
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The widget is optional on a page: no container, no work.
    let Some(container_el) = document.get_element_by_id(CONTAINER_ID) else {
        log::info!("#{} not found; ring disabled", CONTAINER_ID);
        return Ok(());
    };
    let container: web::HtmlElement = container_el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let surface = Rc::new(RefCell::new(CanvasSurface::attach(&document, &container)?));
    let viewport = dom::container_viewport(&container);
    surface.borrow().resize(&viewport);

    let config = events::read_initial_config(&document);
    let dot_size = config.dot_size;
    let renderer = Rc::new(RefCell::new(RingRenderer::new(
        config,
        viewport,
        StdRng::from_entropy(),
    )));
    {
        let r = renderer.borrow();
        log::info!(
            "[ring] particles={} size={:.1} color={} viewport={}x{}",
            r.particle_count(),
            dot_size,
            r.config().dot_color.to_hex(),
            viewport.width,
            viewport.height
        );
        events::show_readout(&document, Readout::ParticleCount(r.particle_count()));
        events::show_readout(&document, Readout::DotSize(dot_size));
    }

    wire_container_resize(&container, &surface, &renderer);
    events::wire_pointer_handlers(events::PointerWiring {
        container: container.clone(),
        renderer: renderer.clone(),
    });
    events::wire_controls(&document, &renderer);

    let frame_loop = Rc::new(RefCell::new(FrameLoop::new()));
    FRAME_LOOP.with(|slot| *slot.borrow_mut() = Some(frame_loop.clone()));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        renderer,
        surface,
        frame_loop,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
