// DOM contract and drawing constants for the hero frontend.
// Kept free of web-sys types so host tests can include! this file.

// Host container and its layers
pub const CONTAINER_ID: &str = "prntd-hero";
pub const BASE_LAYER_SELECTOR: &str = ".hero-layer-1";
pub const REVEAL_LAYER_SELECTOR: &str = ".hero-layer-2";
pub const REVEAL_SRC_ATTR: &str = "data-reveal-src";
pub const UI_ELEMENT_SELECTOR: &str = "[data-hero-ui]";

// Presentation classes
pub const ACTIVE_CLASS: &str = "hero-active";
pub const INVERTED_CLASS: &str = "hero-inverted";
pub const REVEAL_CANVAS_CLASS: &str = "hero-reveal-canvas";
pub const GRID_CANVAS_CLASS: &str = "hero-grid-canvas";

// Stacking: grid under the reveal, both above the base layer
pub const GRID_Z_INDEX: u32 = 1;
pub const REVEAL_Z_INDEX: u32 = 3;

// Grid stroke
pub const GRID_STROKE: &str = "rgba(255,255,255,0.5)";
pub const GRID_LINE_WIDTH: f64 = 0.5;

// Mask paint colour; only its alpha matters under source-in
pub const MASK_RGB: &str = "0,0,0";

pub const INVERTED_FILTER: &str = "invert(1)";

// Window property holding the auto-mounted handle
pub const DEBUG_GLOBAL: &str = "__prntdHero";

/// Inline style for an overlay canvas filling the container.
pub fn canvas_css(z_index: u32, opacity: f32) -> String {
    format!(
        "position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;z-index:{};opacity:{};",
        z_index, opacity
    )
}

/// Inline `transition` for inverted elements. Without `fade` the filter
/// change is immediate.
pub fn inversion_transition(transition_ms: u32, fade: bool) -> String {
    if fade && transition_ms > 0 {
        format!("filter {}ms ease", transition_ms)
    } else {
        "none".to_string()
    }
}

/// `rgba()` colour for one mask gradient stop.
pub fn mask_stop_color(alpha: f32) -> String {
    format!("rgba({},{:.4})", MASK_RGB, alpha.clamp(0.0, 1.0))
}
