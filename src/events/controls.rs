use crate::constants::{
    DOT_COLOR_ID, DOT_SIZE_ID, DOT_SIZE_READOUT_ID, PARTICLE_COUNT_ID, PARTICLE_COUNT_READOUT_ID,
};
use crate::dom;
use crate::frame::SharedRenderer;
use ring_core::{parse_control_number, Readout, RenderConfig, SettingsChange};
use web_sys as web;

#[inline]
pub fn readout_id(readout: &Readout) -> &'static str {
    match readout {
        Readout::ParticleCount(_) => PARTICLE_COUNT_READOUT_ID,
        Readout::DotSize(_) => DOT_SIZE_READOUT_ID,
    }
}

/// Starting settings from whatever values the page's controls hold.
pub fn read_initial_config(document: &web::Document) -> RenderConfig {
    let count = dom::input_value(document, PARTICLE_COUNT_ID);
    let size = dom::input_value(document, DOT_SIZE_ID);
    let color = dom::input_value(document, DOT_COLOR_ID);
    RenderConfig::from_controls(count.as_deref(), size.as_deref(), color.as_deref())
}

pub fn show_readout(document: &web::Document, readout: Readout) {
    dom::set_text(document, readout_id(&readout), &readout.text());
}

fn apply(document: &web::Document, renderer: &SharedRenderer, change: SettingsChange) {
    let result = renderer.borrow_mut().apply_setting(change);
    match result {
        Ok(Some(readout)) => show_readout(document, readout),
        Ok(None) => {}
        Err(e) => log::warn!("[controls] ignoring dot color: {}", e),
    }
}

fn wire_numeric(
    document: &web::Document,
    renderer: &SharedRenderer,
    element_id: &'static str,
    to_change: fn(f64) -> SettingsChange,
) {
    let doc = document.clone();
    let renderer = renderer.clone();
    dom::add_input_listener(document, element_id, move |value| {
        let v = parse_control_number(&value);
        if v.is_nan() {
            log::warn!("[controls] #{}: not a number: {:?}", element_id, value);
        }
        apply(&doc, &renderer, to_change(v));
    });
}

/// Hook up count, size and color controls. Absent controls are skipped.
pub fn wire_controls(document: &web::Document, renderer: &SharedRenderer) {
    wire_numeric(document, renderer, PARTICLE_COUNT_ID, SettingsChange::ParticleCount);
    wire_numeric(document, renderer, DOT_SIZE_ID, |v| {
        SettingsChange::DotSize(v as f32)
    });

    let doc = document.clone();
    let renderer = renderer.clone();
    dom::add_input_listener(document, DOT_COLOR_ID, move |value| {
        apply(&doc, &renderer, SettingsChange::DotColor(value));
    });
}
