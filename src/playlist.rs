use crate::audio::{self, SpectrumSampler};
use crate::constants::MESSAGE_DURATION_MS;
use crate::dom;
use crate::overlay;
use rand::seq::SliceRandom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Everything the playback collaborators need, cloned into each closure.
/// The analyser chain is created lazily on first play and shared with the
/// frame loop through `sampler`.
#[derive(Clone)]
pub struct PlayerWiring {
    pub document: web::Document,
    pub audio: web::HtmlAudioElement,
    pub stations: web::HtmlSelectElement,
    pub audio_ctx: Rc<RefCell<Option<web::AudioContext>>>,
    pub sampler: Rc<RefCell<SpectrumSampler>>,
}

impl PlayerWiring {
    pub fn new(
        document: &web::Document,
        sampler: Rc<RefCell<SpectrumSampler>>,
    ) -> anyhow::Result<Self> {
        let audio = web::HtmlAudioElement::new()
            .map_err(|e| anyhow::anyhow!("audio element: {:?}", e))?;
        audio.set_cross_origin(Some("anonymous"));
        let stations = document
            .get_element_by_id("station")
            .ok_or_else(|| anyhow::anyhow!("missing #station"))?
            .dyn_into::<web::HtmlSelectElement>()
            .map_err(|e| anyhow::anyhow!("#station is not a select: {:?}", e))?;
        Ok(Self {
            document: document.clone(),
            audio,
            stations,
            audio_ctx: Rc::new(RefCell::new(None)),
            sampler,
        })
    }

    /// Point the audio element at the currently selected station.
    pub fn load_selected(&self) {
        self.audio.set_src(&self.stations.value());
    }
}

pub fn wire_player(w: &PlayerWiring) {
    wire_play_pause(w);
    wire_volume(w);
    wire_station_change(w);
    wire_track_ended(w);
    wire_file_input(w);
    wire_drag_and_drop(w);
}

/// Start playback, logging async rejections (autoplay policy etc). The
/// visualizer keeps rendering regardless of playback succeeding.
pub(crate) fn play_and_log(audio: &web::HtmlMediaElement) {
    match audio.play() {
        Ok(promise) => {
            let on_err = Closure::wrap(Box::new(move |e: JsValue| {
                log::error!("audio playback error: {:?}", e);
            }) as Box<dyn FnMut(JsValue)>);
            _ = promise.catch(&on_err);
            on_err.forget();
        }
        Err(e) => log::error!("audio play() failed: {:?}", e),
    }
}

/// Attach the analyser chain once, on first playback. Setup failure leaves
/// the sampler unattached: spectrum stays zero, rendering continues.
pub(crate) fn ensure_analyser(w: &PlayerWiring) {
    if w.sampler.borrow().is_attached() {
        return;
    }
    match audio::build_analyser_chain(&w.audio) {
        Ok((ctx, analyser)) => {
            w.sampler.borrow_mut().attach(analyser);
            *w.audio_ctx.borrow_mut() = Some(ctx);
        }
        Err(e) => log::error!("audio graph setup failed: {e:?}"),
    }
}

fn set_play_button_label(document: &web::Document, label: &str) {
    if let Some(el) = document.get_element_by_id("playPause") {
        el.set_text_content(Some(label));
    }
}

fn start_playback(w: &PlayerWiring) {
    play_and_log(&w.audio);
    ensure_analyser(w);
    set_play_button_label(&w.document, "Pause");
}

fn wire_play_pause(w: &PlayerWiring) {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, "playPause", move || {
        if let Some(ctx) = w2.audio_ctx.borrow().as_ref() {
            if ctx.state() == web::AudioContextState::Suspended {
                _ = ctx.resume();
            }
        }
        if w2.audio.paused() {
            start_playback(&w2);
        } else {
            _ = w2.audio.pause();
            set_play_button_label(&w2.document, "Play");
        }
    });
}

fn wire_volume(w: &PlayerWiring) {
    let Some(input) = dom::input_element(&w.document, "volume") else {
        return;
    };
    let audio = w.audio.clone();
    let input_for_read = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        audio.set_volume(input_for_read.value_as_number());
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_station_change(w: &PlayerWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        w2.load_selected();
        start_playback(&w2);
        update_playlist_ui(&w2);
    }) as Box<dyn FnMut()>);
    _ = w
        .stations
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_track_ended(w: &PlayerWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        advance_station(&w2);
    }) as Box<dyn FnMut()>);
    _ = w
        .audio
        .add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Move to the next station (wrapping) and keep playing.
pub fn advance_station(w: &PlayerWiring) {
    let len = w.stations.options().length() as i32;
    if len == 0 {
        return;
    }
    let next = (w.stations.selected_index() + 1).rem_euclid(len);
    w.stations.set_selected_index(next);
    w.load_selected();
    start_playback(w);
    update_playlist_ui(w);
}

/// Randomize the station order once at startup.
pub fn shuffle_stations(stations: &web::HtmlSelectElement) {
    let opts = stations.options();
    let mut elements: Vec<web::Element> = (0..opts.length()).filter_map(|i| opts.item(i)).collect();
    elements.shuffle(&mut rand::thread_rng());
    for el in &elements {
        // append_child moves an already-parented node
        _ = stations.append_child(el);
    }
}

/// Rebuild the visible playlist from the station options. Clicking an entry
/// selects and plays it.
pub fn update_playlist_ui(w: &PlayerWiring) {
    let Some(list) = w.document.get_element_by_id("playlist-items") else {
        return;
    };
    list.set_inner_html("");
    let opts = w.stations.options();
    for i in 0..opts.length() {
        let Some(opt) = opts.item(i) else { continue };
        let label = opt.text_content().unwrap_or_default();
        let Ok(li) = w.document.create_element("li") else {
            continue;
        };
        li.set_text_content(Some(&label));
        let w2 = w.clone();
        let index = i as i32;
        let click = Closure::wrap(Box::new(move || {
            w2.stations.set_selected_index(index);
            w2.load_selected();
            start_playback(&w2);
        }) as Box<dyn FnMut()>);
        _ = li.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();
        _ = list.append_child(&li);
    }
}

fn wire_file_input(w: &PlayerWiring) {
    let Some(input) = dom::input_element(&w.document, "fileInput") else {
        return;
    };
    let w2 = w.clone();
    let input_for_read = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(files) = input_for_read.files() else {
            return;
        };
        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                add_uploaded_file(&w2, &file);
            }
        }
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn set_drop_zone_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id("drop-zone") {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            let display = if visible { "flex" } else { "none" };
            _ = html.style().set_property("display", display);
        }
    }
}

/// Accept audio files dragged onto the page: the drop zone lights up while a
/// drag hovers and dropped files go through the same upload path as the file
/// input.
fn wire_drag_and_drop(w: &PlayerWiring) {
    let Some(body) = w.document.body() else {
        return;
    };
    for (event, visible) in [("dragenter", true), ("dragover", true), ("dragleave", false)] {
        let doc = w.document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            set_drop_zone_visible(&doc, visible);
        }) as Box<dyn FnMut(_)>);
        _ = body.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drop_zone_visible(&w2.document, false);
        let Some(dt) = ev.data_transfer() else { return };
        let Some(files) = dt.files() else { return };
        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                add_uploaded_file(&w2, &file);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = body.add_event_listener_with_callback("drop", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Append an uploaded audio file to the stations as an object URL. If it is
/// the only track and nothing is playing, start it immediately.
fn add_uploaded_file(w: &PlayerWiring, file: &web::File) {
    if !file.type_().starts_with("audio/") {
        overlay::show_message(&w.document, "Please select only audio files", MESSAGE_DURATION_MS);
        return;
    }
    let Ok(url) = web::Url::create_object_url_with_blob(file) else {
        log::error!("object URL creation failed for {}", file.name());
        return;
    };
    let Ok(option) = w.document.create_element("option") else {
        return;
    };
    _ = option.set_attribute("value", &url);
    option.set_text_content(Some(&file.name()));
    _ = w.stations.append_child(&option);
    update_playlist_ui(w);

    if w.audio.paused() && w.stations.options().length() == 1 {
        w.stations.set_selected_index(0);
        w.load_selected();
        start_playback(w);
    }
}
