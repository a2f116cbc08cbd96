//! Canvas 2D drawing for the two overlay surfaces.
//!
//! Both surfaces are redrawn from scratch every frame; nothing is cached
//! between frames except the canvases themselves.

mod grid;
mod reveal;

pub use grid::draw_grid;
pub use reveal::draw_reveal;
