use crate::core::{ParamField, ParamStore};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Route slider `input` events into the parameter store. Values are written
/// to `target` as-is; range checking belongs to the markup (`min`/`max`
/// attributes), not the core.
pub fn wire_param_sliders(document: &web::Document, params: Rc<RefCell<ParamStore>>) {
    for field in ParamField::ALL {
        let Some(input) = dom::input_element(document, field.id()) else {
            log::warn!("missing slider #{}", field.id());
            continue;
        };
        let params = params.clone();
        let input_for_read = input.clone();
        let closure = Closure::wrap(Box::new(move || {
            let value = input_for_read.value_as_number() as f32;
            params.borrow_mut().set_target(field, value);
        }) as Box<dyn FnMut()>);
        _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Keep the canvas backing store in sync with its CSS size.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
