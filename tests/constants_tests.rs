// Host-side tests for the DOM contract constants and style helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_sits_below_reveal() {
    assert!(GRID_Z_INDEX < REVEAL_Z_INDEX);
    assert!(GRID_LINE_WIDTH > 0.0);
}

#[test]
fn selectors_are_distinct() {
    assert_ne!(BASE_LAYER_SELECTOR, REVEAL_LAYER_SELECTOR);
    assert_ne!(REVEAL_CANVAS_CLASS, GRID_CANVAS_CLASS);
    assert_ne!(ACTIVE_CLASS, INVERTED_CLASS);
    assert!(UI_ELEMENT_SELECTOR.starts_with('[') && UI_ELEMENT_SELECTOR.ends_with(']'));
}

#[test]
fn canvas_css_fills_container_without_catching_pointer() {
    let css = canvas_css(GRID_Z_INDEX, 0.04);
    assert!(css.contains("position:absolute"));
    assert!(css.contains("width:100%;height:100%"));
    assert!(css.contains("pointer-events:none"));
    assert!(css.contains("z-index:1;"));
    assert!(css.contains("opacity:0.04;"));
}

#[test]
fn mask_stop_color_clamps_alpha() {
    assert_eq!(mask_stop_color(0.5), "rgba(0,0,0,0.5000)");
    assert_eq!(mask_stop_color(1.7), "rgba(0,0,0,1.0000)");
    assert_eq!(mask_stop_color(-0.2), "rgba(0,0,0,0.0000)");
}

#[test]
fn inversion_fades_in_but_clears_at_once() {
    assert_eq!(inversion_transition(300, true), "filter 300ms ease");
    assert_eq!(inversion_transition(300, false), "none");
    assert_eq!(inversion_transition(0, true), "none");
}
