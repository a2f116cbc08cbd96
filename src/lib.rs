#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use anyhow::anyhow;
use reveal_core::{InputDevice, RevealConfig, RevealEngine, ResizeDebounce};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod image;
mod render;
mod surface;
mod ui;

/// Everything one mounted instance owns.
struct Mounted {
    frame_loop: frame::FrameLoop,
    listeners: events::ListenerSet,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    reveal_layer: web::HtmlElement,
}

impl Mounted {
    /// Stop scheduling first so no queued frame sees half-removed state,
    /// then detach listeners, then undo every DOM change.
    fn teardown(mut self) {
        self.frame_loop.stop();
        self.listeners.detach_all();

        let mut ctx = self.frame_ctx.borrow_mut();
        ctx.reveal.detach();
        ctx.grid.detach();
        _ = self.reveal_layer.style().remove_property("visibility");
        dom::set_class(&ctx.container, ACTIVE_CLASS, false);
        ctx.engine.reset();
        ctx.elements.reset();
    }
}

/// Lifecycle handle for one reveal instance.
#[wasm_bindgen]
pub struct RevealHandle {
    mounted: Rc<RefCell<Option<Mounted>>>,
    config: RevealConfig,
}

#[wasm_bindgen]
impl RevealHandle {
    /// Mount on the element with `container_id`. `config` may be
    /// `undefined` or a partial object overriding the defaults.
    pub fn mount(container_id: &str, config: JsValue) -> Result<RevealHandle, JsValue> {
        let config = parse_config(config).map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
        mount_in(container_id, config).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }

    /// Idempotent teardown.
    pub fn destroy(&self) {
        if let Some(mounted) = self.mounted.borrow_mut().take() {
            mounted.teardown();
            log::info!("[hero] destroyed");
        }
    }

    /// Live configuration, read-only.
    #[wasm_bindgen(getter)]
    pub fn config(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.config).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.mounted
            .borrow()
            .as_ref()
            .map(|m| m.frame_ctx.borrow().input.borrow().is_active())
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.borrow().is_some()
    }
}

fn parse_config(value: JsValue) -> anyhow::Result<RevealConfig> {
    let config = if value.is_undefined() || value.is_null() {
        RevealConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<RevealConfig>(value)
            .map_err(|e| anyhow!("invalid config: {}", e))?
    };
    config.validate()?;
    Ok(config)
}

fn mount_in(container_id: &str, config: RevealConfig) -> anyhow::Result<RevealHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let host = dom::find_host(&document, container_id)?;

    let touch = config.touch.enabled && dom::is_touch_capable();
    let device = if touch {
        InputDevice::Touch
    } else {
        InputDevice::Mouse
    };

    let grid = surface::RenderSurface::create(
        &document,
        GRID_CANVAS_CLASS,
        GRID_Z_INDEX,
        config.grid.opacity,
    )?;
    let reveal =
        surface::RenderSurface::create(&document, REVEAL_CANVAS_CLASS, REVEAL_Z_INDEX, 1.0)?;
    grid.attach(&host.container, &host.reveal_layer);
    reveal.attach(&host.container, &host.reveal_layer);

    let image = dom::reveal_source(&host.reveal_layer).and_then(|src| image::HiddenImage::load(&src));
    if image.is_none() {
        log::warn!("[hero] no source for {}", REVEAL_LAYER_SELECTOR);
    }
    _ = host.reveal_layer.style().set_property("visibility", "hidden");

    let engine = RevealEngine::new(config.clone(), device, host.ui_elements.len());
    let input = Rc::new(RefCell::new(engine.pointer_input()));
    let resize = Rc::new(RefCell::new(ResizeDebounce::new(
        config.surface.resize_debounce_ms,
    )));
    let elements = Rc::new(ui::ReactiveElements::new(
        host.ui_elements,
        config.inversion.transition_ms,
    ));
    let clock = frame::Clock::start();

    let mut listeners = events::ListenerSet::default();
    events::wire_input_handlers(
        &events::InputWiring {
            container: host.container.clone(),
            input: input.clone(),
            resize: resize.clone(),
            elements: elements.clone(),
            clock,
            touch,
        },
        &mut listeners,
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        input,
        resize,
        container: host.container,
        reveal,
        grid,
        image,
        elements: elements.clone(),
        clock,
    }));
    frame_ctx.borrow_mut().reconcile_surfaces();
    let frame_loop = frame::start_loop(frame_ctx.clone());

    log::info!(
        "[hero] mounted on #{} ({:?}, {} reactive elements, {} listeners)",
        container_id,
        device,
        elements.len(),
        listeners.len()
    );
    Ok(RevealHandle {
        mounted: Rc::new(RefCell::new(Some(Mounted {
            frame_loop,
            listeners,
            frame_ctx,
            reveal_layer: host.reveal_layer,
        }))),
        config,
    })
}

fn auto_mount() {
    match mount_in(CONTAINER_ID, RevealConfig::default()) {
        Ok(handle) => {
            if let Some(window) = web::window() {
                _ = js_sys::Reflect::set(&window, &DEBUG_GLOBAL.into(), &JsValue::from(handle));
            }
        }
        // Progressive enhancement: a page without the hero is not an error.
        Err(e) => log::debug!("[hero] not mounted: {:#}", e),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-reveal starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    let loading = js_sys::Reflect::get(&document, &"readyState".into())
        .ok()
        .and_then(|v| v.as_string())
        .map(|s| s == "loading")
        .unwrap_or(false);
    if loading {
        let closure = Closure::wrap(Box::new(auto_mount) as Box<dyn FnMut()>);
        _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        auto_mount();
    }
    Ok(())
}
