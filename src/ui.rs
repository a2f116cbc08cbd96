use crate::constants::{inversion_transition, INVERTED_CLASS, INVERTED_FILTER};
use crate::dom;
use glam::Vec2;
use reveal_core::{translate_css, InversionChange};
use web_sys as web;

/// Externally owned nodes that follow the spotlight. Only the inverted
/// class and the filter, transition and transform styles are touched.
pub struct ReactiveElements {
    elements: Vec<web::HtmlElement>,
    transition_ms: u32,
}

impl ReactiveElements {
    pub fn new(elements: Vec<web::HtmlElement>, transition_ms: u32) -> Self {
        Self {
            elements,
            transition_ms,
        }
    }

    fn set_inverted(&self, el: &web::HtmlElement, inverted: bool, fade: bool) {
        let style = el.style();
        _ = style.set_property("transition", &inversion_transition(self.transition_ms, fade));
        dom::set_class(el, INVERTED_CLASS, inverted);
        _ = if inverted {
            style.set_property("filter", INVERTED_FILTER)
        } else {
            style.remove_property("filter").map(|_| ())
        };
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn centers(&self, origin: Vec2) -> Vec<Option<Vec2>> {
        self.elements
            .iter()
            .map(|el| dom::center_relative_to(el, origin))
            .collect()
    }

    pub fn apply_inversion(&self, changes: &[InversionChange]) {
        for change in changes {
            let Some(el) = self.elements.get(change.index) else {
                continue;
            };
            if el.is_connected() {
                self.set_inverted(el, change.inverted, true);
            }
        }
    }

    /// Drop inversion from every element at once, no fade.
    pub fn clear_inversion(&self) {
        for el in &self.elements {
            self.set_inverted(el, false, false);
        }
    }

    pub fn apply_parallax(&self, offset: Vec2) {
        let transform = translate_css(offset);
        for el in self.elements.iter().filter(|el| el.is_connected()) {
            _ = el.style().set_property("transform", &transform);
        }
    }

    /// Remove everything this controller ever wrote.
    pub fn reset(&self) {
        for el in &self.elements {
            dom::set_class(el, INVERTED_CLASS, false);
            let style = el.style();
            for prop in ["filter", "transform", "transition"] {
                _ = style.remove_property(prop);
            }
        }
    }
}
