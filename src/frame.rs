use crate::dom;
use crate::image::HiddenImage;
use crate::render;
use crate::surface::{self, RenderSurface};
use crate::ui::ReactiveElements;
use instant::Instant;
use reveal_core::{PointerInput, RevealEngine, ResizeDebounce};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds since mount.
#[derive(Clone, Copy)]
pub struct Clock(Instant);

impl Clock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.0.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub engine: RevealEngine,
    pub input: Rc<RefCell<PointerInput>>,
    pub resize: Rc<RefCell<ResizeDebounce>>,
    pub container: web::HtmlElement,
    pub reveal: RenderSurface,
    pub grid: RenderSurface,
    pub image: Option<HiddenImage>,
    pub elements: Rc<ReactiveElements>,
    pub clock: Clock,
}

impl FrameContext {
    /// Size both canvases to the container, immediately.
    pub fn reconcile_surfaces(&mut self) {
        let metrics = surface::measure(
            &self.container,
            self.engine.config().surface.max_device_pixel_ratio,
        );
        self.reveal.reconcile(metrics);
        self.grid.reconcile(metrics);
        self.engine.set_surface(metrics);
        let (w, h) = metrics.backing_size();
        log::debug!(
            "[surface] {:.0}x{:.0} css @{}x -> {}x{} px",
            metrics.logical.x,
            metrics.logical.y,
            metrics.dpr,
            w,
            h
        );
    }

    pub fn frame(&mut self) {
        let now_ms = self.clock.now_ms();

        let report = {
            let input = self.input.borrow();
            self.engine.tick(&input, now_ms)
        };
        if !report.cleared.is_empty() {
            self.elements.clear_inversion();
        }

        if self.resize.borrow_mut().take_due(now_ms) {
            self.reconcile_surfaces();
        }

        let ready = self.image.as_ref().map_or(false, |img| img.is_ready());
        let plan = self.engine.mask_plan(ready);
        render::draw_reveal(&self.reveal, plan.as_ref(), self.image.as_ref());
        render::draw_grid(&self.grid, &self.engine.grid());

        if let Some(offset) = self.engine.parallax() {
            self.elements.apply_parallax(offset);
        }
        if self.engine.is_active() && !self.elements.is_empty() {
            let centers = self.elements.centers(dom::rect_origin(&self.container));
            let changes = self.engine.update_inversion(&centers);
            self.elements.apply_inversion(&changes);
        }
    }
}

/// Handle on a running `requestAnimationFrame` loop.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and drop the callback. Safe to call twice.
    pub fn stop(&self) {
        self.stopped.set(true);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, raf_id: &Rc<Cell<Option<i32>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            raf_id.set(Some(id));
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let stopped = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    let stopped_clone = stopped.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        if stopped_clone.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        schedule(&tick_clone, &raf_clone);
    }) as Box<dyn FnMut()>));
    schedule(&tick, &raf_id);

    FrameLoop {
        raf_id,
        stopped,
        tick,
    }
}
