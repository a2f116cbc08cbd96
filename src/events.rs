use crate::constants::ACTIVE_CLASS;
use crate::dom;
use crate::frame::Clock;
use crate::ui::ReactiveElements;
use glam::Vec2;
use reveal_core::{to_local, PointerInput, ResizeDebounce};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

/// Listeners registered by one mounted instance, kept so they can be
/// removed on teardown.
#[derive(Default)]
pub struct ListenerSet {
    entries: Vec<(web::EventTarget, &'static str, Handler)>,
}

impl ListenerSet {
    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => self.entries.push((target.clone(), event, closure)),
            Err(e) => log::warn!("[events] cannot listen for {}: {:?}", event, e),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn detach_all(&mut self) {
        for (target, event, closure) in self.entries.drain(..) {
            _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

/// Everything an input handler may touch. Handlers overwrite the raw
/// pointer target and toggle presentation classes; they never draw.
#[derive(Clone)]
pub struct InputWiring {
    pub container: web::HtmlElement,
    pub input: Rc<RefCell<PointerInput>>,
    pub resize: Rc<RefCell<ResizeDebounce>>,
    pub elements: Rc<ReactiveElements>,
    pub clock: Clock,
    pub touch: bool,
}

impl InputWiring {
    fn local(&self, client_x: i32, client_y: i32) -> Vec2 {
        to_local(
            Vec2::new(client_x as f32, client_y as f32),
            dom::rect_origin(&self.container),
        )
    }

    fn mirror_active(&self) {
        let active = self.input.borrow().is_active();
        dom::set_class(&self.container, ACTIVE_CLASS, active);
        if !active {
            self.elements.clear_inversion();
        }
    }
}

fn first_touch(ev: &web::Event) -> Option<web::Touch> {
    ev.dyn_ref::<web::TouchEvent>()
        .and_then(|t| t.touches().get(0))
}

pub fn wire_input_handlers(w: &InputWiring, listeners: &mut ListenerSet) {
    wire_mouse(w, listeners);
    if w.touch {
        wire_touch(w, listeners);
    }
    wire_resize(w, listeners);
}

fn wire_mouse(w: &InputWiring, listeners: &mut ListenerSet) {
    let target: &web::EventTarget = &w.container;

    let wire = w.clone();
    listeners.listen(target, "mouseenter", move |ev| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            let local = wire.local(me.client_x(), me.client_y());
            wire.input.borrow_mut().mouse_enter(local, wire.clock.now_ms());
            wire.mirror_active();
        }
    });

    let wire = w.clone();
    listeners.listen(target, "mousemove", move |ev| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            let local = wire.local(me.client_x(), me.client_y());
            let activated = wire
                .input
                .borrow_mut()
                .mouse_move(local, wire.clock.now_ms());
            if activated {
                wire.mirror_active();
            }
        }
    });

    let wire = w.clone();
    listeners.listen(target, "mouseleave", move |_ev| {
        wire.input.borrow_mut().mouse_leave();
        wire.mirror_active();
    });
}

fn wire_touch(w: &InputWiring, listeners: &mut ListenerSet) {
    let target: &web::EventTarget = &w.container;

    let wire = w.clone();
    listeners.listen(target, "touchstart", move |ev| {
        if let Some(t) = first_touch(&ev) {
            let local = wire.local(t.client_x(), t.client_y());
            wire.input.borrow_mut().touch_start(local);
            wire.mirror_active();
        }
    });

    let wire = w.clone();
    listeners.listen(target, "touchmove", move |ev| {
        if let Some(t) = first_touch(&ev) {
            let local = wire.local(t.client_x(), t.client_y());
            wire.input.borrow_mut().touch_move(local);
        }
    });

    for event in ["touchend", "touchcancel"] {
        let wire = w.clone();
        listeners.listen(target, event, move |_ev| {
            wire.input.borrow_mut().touch_end(wire.clock.now_ms());
            wire.mirror_active();
        });
    }
}

fn wire_resize(w: &InputWiring, listeners: &mut ListenerSet) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = &window;
    let wire = w.clone();
    listeners.listen(target, "resize", move |_ev| {
        wire.resize.borrow_mut().note(wire.clock.now_ms());
    });
}
