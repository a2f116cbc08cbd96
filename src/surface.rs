use crate::constants::canvas_css;
use anyhow::anyhow;
use reveal_core::{effective_dpr, SurfaceMetrics};
use wasm_bindgen::JsCast;
use web_sys as web;

/// One overlay canvas and its 2D context, drawn in CSS pixels.
pub struct RenderSurface {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub metrics: SurfaceMetrics,
}

impl RenderSurface {
    pub fn create(
        document: &web::Document,
        class: &str,
        z_index: u32,
        opacity: f32,
    ) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow!("{:?}", e))?;
        canvas.set_class_name(class);
        canvas.style().set_css_text(&canvas_css(z_index, opacity));
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            metrics: SurfaceMetrics::default(),
        })
    }

    /// Insert before `anchor` when it is a child of `parent`, else append.
    pub fn attach(&self, parent: &web::Element, anchor: &web::Element) {
        let parent_node: &web::Node = parent;
        let anchor_node: &web::Node = anchor;
        let anchor_is_child = anchor
            .parent_node()
            .map(|p| p.is_same_node(Some(parent_node)))
            .unwrap_or(false);
        _ = if anchor_is_child {
            parent.insert_before(&self.canvas, Some(anchor_node))
        } else {
            parent.append_child(&self.canvas)
        };
    }

    pub fn detach(&self) {
        self.canvas.remove();
    }

    /// Rebuild the backing store for `metrics`. Setting the canvas size
    /// resets the context, so the scale transform is installed afterwards.
    pub fn reconcile(&mut self, metrics: SurfaceMetrics) {
        let (w, h) = metrics.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        let [a, b, c, d, e, f] = metrics.transform();
        _ = self.ctx.set_transform(a, b, c, d, e, f);
        self.metrics = metrics;
    }

    pub fn clear(&self) {
        let size = self.metrics.logical;
        self.ctx
            .clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }
}

/// Measure `container` and derive metrics with the configured DPR cap.
pub fn measure(container: &web::Element, dpr_cap: f32) -> SurfaceMetrics {
    let reported = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0);
    SurfaceMetrics::new(
        crate::dom::rect_size(container),
        effective_dpr(reported, dpr_cap),
    )
}
