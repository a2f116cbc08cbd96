use crate::constants::*;
use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `'ontouchstart' in window`
pub fn is_touch_capable() -> bool {
    web::window()
        .and_then(|w| js_sys::Reflect::has(&w, &"ontouchstart".into()).ok())
        .unwrap_or(false)
}

#[inline]
pub fn rect_origin(el: &web::Element) -> Vec2 {
    let r = el.get_bounding_client_rect();
    Vec2::new(r.left() as f32, r.top() as f32)
}

#[inline]
pub fn rect_size(el: &web::Element) -> Vec2 {
    let r = el.get_bounding_client_rect();
    Vec2::new(r.width() as f32, r.height() as f32)
}

/// Element center relative to `origin`, or `None` once it left the document.
pub fn center_relative_to(el: &web::Element, origin: Vec2) -> Option<Vec2> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    Some(Vec2::new(
        (r.left() + r.width() * 0.5) as f32,
        (r.top() + r.height() * 0.5) as f32,
    ) - origin)
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// The nodes the reveal attaches to. Missing pieces abort the mount.
pub struct HostLayers {
    pub container: web::HtmlElement,
    pub reveal_layer: web::HtmlElement,
    pub ui_elements: Vec<web::HtmlElement>,
}

pub fn find_host(document: &web::Document, container_id: &str) -> anyhow::Result<HostLayers> {
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow!("missing #{}", container_id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("#{} is not an HTML element", container_id))?;
    container
        .query_selector(BASE_LAYER_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| anyhow!("missing {}", BASE_LAYER_SELECTOR))?;
    let reveal_layer = container
        .query_selector(REVEAL_LAYER_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| anyhow!("missing {}", REVEAL_LAYER_SELECTOR))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("{} is not an HTML element", REVEAL_LAYER_SELECTOR))?;

    let mut ui_elements = Vec::new();
    if let Ok(list) = container.query_selector_all(UI_ELEMENT_SELECTOR) {
        for i in 0..list.length() {
            if let Some(el) = list
                .get(i)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
            {
                ui_elements.push(el);
            }
        }
    }
    Ok(HostLayers {
        container,
        reveal_layer,
        ui_elements,
    })
}

/// URL of the hidden image: the layer's own `src`, its data attribute, or
/// the first `<img>` inside it.
pub fn reveal_source(layer: &web::HtmlElement) -> Option<String> {
    if let Some(img) = layer.dyn_ref::<web::HtmlImageElement>() {
        let mut src = img.current_src();
        if src.is_empty() {
            src = img.src();
        }
        if !src.is_empty() {
            return Some(src);
        }
    }
    if let Some(src) = layer.get_attribute(REVEAL_SRC_ATTR) {
        if !src.is_empty() {
            return Some(src);
        }
    }
    layer
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        .map(|img| img.src())
        .filter(|src| !src.is_empty())
}
