use crate::constants::mask_stop_color;
use crate::image::HiddenImage;
use crate::surface::RenderSurface;
use reveal_core::{cover_rect, MaskDisc, MaskPlan};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

fn paint_disc(ctx: &web::CanvasRenderingContext2d, disc: &MaskDisc) -> Result<(), JsValue> {
    if disc.radius <= 0.0 {
        return Ok(());
    }
    let (cx, cy, r) = (
        disc.center.x as f64,
        disc.center.y as f64,
        disc.radius as f64,
    );
    let gradient = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, r)?;
    for stop in &disc.stops {
        gradient.add_color_stop(stop.offset, &mask_stop_color(stop.alpha))?;
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.arc(cx, cy, r, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

/// Clear, paint the mask, then keep the hidden image only where the mask
/// has alpha. The image is always drawn with the same covering projection.
pub fn draw_reveal(surface: &RenderSurface, plan: Option<&MaskPlan>, image: Option<&HiddenImage>) {
    surface.clear();
    let (Some(plan), Some(image)) = (plan, image) else {
        return;
    };
    let Some(dest) = cover_rect(image.natural_size(), surface.metrics.logical) else {
        return;
    };
    let ctx = &surface.ctx;
    for disc in &plan.discs {
        if let Err(e) = paint_disc(ctx, disc) {
            log::debug!("[reveal] mask disc skipped: {:?}", e);
        }
    }
    _ = ctx.set_global_composite_operation("source-in");
    if let Err(e) = ctx.draw_image_with_html_image_element_and_dw_and_dh(
        &image.element,
        dest.x as f64,
        dest.y as f64,
        dest.width as f64,
        dest.height as f64,
    ) {
        log::debug!("[reveal] hidden image draw skipped: {:?}", e);
    }
    _ = ctx.set_global_composite_operation("source-over");
}
