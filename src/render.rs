use crate::constants::{CANVAS_ARIA_LABEL, CANVAS_ROLE};
use glam::Vec2;
use ring_core::{Rgba, Surface, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

// ===================== Canvas 2D surface =====================

/// The ring's drawing surface: a canvas appended to the container and its
/// 2D context, addressed in logical (CSS) pixels.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Create the canvas, label it for assistive tech and append it to
    /// `container`.
    pub fn attach(document: &web::Document, container: &web::HtmlElement) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        _ = canvas.set_attribute("role", CANVAS_ROLE);
        _ = canvas.set_attribute("aria-label", CANVAS_ARIA_LABEL);
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }

    /// Native-resolution backing store, CSS-sized element, and a transform
    /// so one drawing unit is one CSS pixel.
    pub fn resize(&self, viewport: &Viewport) {
        let (w_px, h_px) = viewport.backing_size();
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", viewport.width));
        _ = style.set_property("height", &format!("{}px", viewport.height));
        let dpr = viewport.device_pixel_ratio as f64;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_css());
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }
}
