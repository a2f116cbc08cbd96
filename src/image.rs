use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The hidden layer, decoded off the frame loop.
///
/// Until decoding finishes `is_ready` stays false and the reveal draws
/// nothing. A failed load simply never flips it.
#[derive(Clone)]
pub struct HiddenImage {
    pub element: web::HtmlImageElement,
    ready: Rc<Cell<bool>>,
}

impl HiddenImage {
    pub fn load(src: &str) -> Option<Self> {
        let element = match web::HtmlImageElement::new() {
            Ok(el) => el,
            Err(e) => {
                log::warn!("[image] cannot create image element: {:?}", e);
                return None;
            }
        };
        element.set_src(src);
        let ready = Rc::new(Cell::new(false));

        let pending = element.decode();
        let ready_flag = ready.clone();
        let src_for_log = src.to_string();
        spawn_local(async move {
            match JsFuture::from(pending).await {
                Ok(_) => {
                    ready_flag.set(true);
                    log::info!("[image] reveal layer ready: {}", src_for_log);
                }
                Err(e) => log::warn!("[image] reveal layer failed {}: {:?}", src_for_log, e),
            }
        });
        Some(Self { element, ready })
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn natural_size(&self) -> Vec2 {
        Vec2::new(
            self.element.natural_width() as f32,
            self.element.natural_height() as f32,
        )
    }
}
