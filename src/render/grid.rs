use crate::constants::{GRID_LINE_WIDTH, GRID_STROKE};
use crate::surface::RenderSurface;
use reveal_core::GridLines;

pub fn draw_grid(surface: &RenderSurface, lines: &GridLines) {
    surface.clear();
    if surface.metrics.is_degenerate() {
        return;
    }
    let ctx = &surface.ctx;
    let (w, h) = (lines.size.x as f64, lines.size.y as f64);
    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_line_width(GRID_LINE_WIDTH);
    ctx.begin_path();
    for x in lines.columns() {
        ctx.move_to(x as f64, 0.0);
        ctx.line_to(x as f64, h);
    }
    for y in lines.rows() {
        ctx.move_to(0.0, y as f64);
        ctx.line_to(w, y as f64);
    }
    ctx.stroke();
}
