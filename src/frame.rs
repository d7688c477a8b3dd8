use crate::audio::SpectrumSampler;
use crate::core::{apply_drift, drift_due, ParamStore};
use crate::render;
use crate::ui;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state for the render loop. One instance, alive for the page
/// lifetime; there is no pause or stop state (pausing audio does not pause
/// rendering).
pub struct FrameContext<'a> {
    pub params: Rc<RefCell<ParamStore>>,
    pub sampler: Rc<RefCell<SpectrumSampler>>,
    pub gpu: render::GpuState<'a>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub started: Instant,
    pub last_drift_ms: f64,
}

impl FrameContext<'_> {
    /// One tick. Ordering within a tick: drift (if due) happens-before
    /// relaxation happens-before render, so the uniforms of a render are
    /// exactly `current` as of this tick's relaxation.
    pub fn frame(&mut self) {
        let now_ms = js_sys::Date::now();
        if drift_due(self.last_drift_ms, now_ms) {
            let mut params = self.params.borrow_mut();
            apply_drift(&mut params.target, now_ms);
            ui::sync_sliders(&self.document, &params.target);
            drop(params);
            self.last_drift_ms = now_ms;
        }

        self.params.borrow_mut().relax();

        // At most one analyser read per frame
        let spectrum = self.sampler.borrow_mut().sample();

        let current = self.params.borrow().current;
        let time_sec = self.started.elapsed().as_secs_f32() * current.speed;

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(&current, spectrum, time_sec) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Initialize WebGPU for the canvas. Failure here is fatal to startup; the
/// fractal program is the entire visual output, so there is no fallback.
pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas).await
}

/// Drive `frame()` from requestAnimationFrame for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
