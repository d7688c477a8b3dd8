use crate::constants::CONTROLS_FADE_MS;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_IDS: [&str; 3] = ["controls", "menu", "playlist"];

pub fn set_panel_opacity(document: &web::Document, opacity: &str) {
    for id in PANEL_IDS {
        if let Some(el) = document.get_element_by_id(id) {
            if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                _ = html.style().set_property("opacity", opacity);
            }
        }
    }
}

/// Fade the control panels in on pointer movement and back out after a few
/// seconds of inactivity. A pending fade-out is rescheduled on every move.
pub fn wire_controls_fade(document: &web::Document) {
    let pending: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

    let doc_hide = document.clone();
    let hide: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::wrap(Box::new(move || {
        set_panel_opacity(&doc_hide, "0");
    }) as Box<dyn FnMut()>));

    let doc_move = document.clone();
    let pending_move = pending.clone();
    let hide_move = hide.clone();
    let on_move = Closure::wrap(Box::new(move || {
        set_panel_opacity(&doc_move, "1");
        if let Some(w) = web::window() {
            if let Some(id) = pending_move.borrow_mut().take() {
                w.clear_timeout_with_handle(id);
            }
            if let Ok(id) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                hide_move.as_ref().as_ref().unchecked_ref(),
                CONTROLS_FADE_MS,
            ) {
                *pending_move.borrow_mut() = Some(id);
            }
        }
    }) as Box<dyn FnMut()>);
    _ = document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();
}

/// Show a transient top-center message that removes itself after
/// `duration_ms`.
pub fn show_message(document: &web::Document, text: &str, duration_ms: i32) {
    let Some(body) = document.body() else { return };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_text_content(Some(text));
    _ = el.set_attribute(
        "style",
        "position:fixed;top:20px;left:50%;transform:translateX(-50%);\
         background:rgba(0,0,0,0.7);color:#fff;padding:10px 20px;\
         border-radius:5px;z-index:2000;",
    );
    _ = body.append_child(&el);

    let body_rm = body.clone();
    let el_rm = el.clone();
    let remove = Closure::wrap(Box::new(move || {
        _ = body_rm.remove_child(&el_rm);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.as_ref().unchecked_ref(),
            duration_ms,
        );
    }
    remove.forget();
}
