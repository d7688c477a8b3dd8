#![cfg(target_arch = "wasm32")]
//! Audio-reactive kaleidoscopic Julia-set visualizer.
//!
//! The systems core is the per-frame pipeline: slider input and autonomous
//! drift write `target` parameters, an exponential-smoothing step pulls
//! `current` toward them, the spectrum sampler reads one frame of frequency
//! data, and the render engine binds everything as uniforms for a single
//! fullscreen fractal pass. All of it runs cooperatively on the browser
//! event loop, driven by requestAnimationFrame.

use crate::audio::SpectrumSampler;
use crate::core::ParamStore;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod playlist;
mod render;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("kaleido-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("visualizer")
        .ok_or_else(|| anyhow::anyhow!("missing #visualizer"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    // Parameter store and spectrum sampler are shared between the event
    // collaborators and the frame loop
    let params = Rc::new(RefCell::new(ParamStore::new()));
    let sampler = Rc::new(RefCell::new(SpectrumSampler::new()));

    events::wire_param_sliders(&document, params.clone());

    let player = playlist::PlayerWiring::new(&document, sampler.clone())?;
    playlist::wire_player(&player);
    playlist::shuffle_stations(&player.stations);
    player.load_selected();
    playlist::update_playlist_ui(&player);

    overlay::wire_controls_fade(&document);
    overlay::set_panel_opacity(&document, "0");
    overlay::show_message(
        &document,
        "Pick a station or add audio files to begin",
        constants::INITIAL_MESSAGE_DURATION_MS,
    );

    // WebGPU init is fatal on failure: no fallback renderer exists
    let gpu = frame::init_gpu(&canvas).await?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        params,
        sampler,
        gpu,
        canvas,
        document,
        started: Instant::now(),
        last_drift_ms: 0.0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
