//! Backing-store sizing and resize coalescing for the render surfaces.

use glam::Vec2;

/// Clamp a reported device pixel ratio to `[1, cap]`, treating junk as 1.
#[inline]
pub fn effective_dpr(reported: f64, cap: f32) -> f32 {
    let dpr = reported as f32;
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(cap.max(1.0))
    } else {
        1.0
    }
}

/// Logical (CSS) size of a surface and the scale to its pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    pub logical: Vec2,
    pub dpr: f32,
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self {
            logical: Vec2::ZERO,
            dpr: 1.0,
        }
    }
}

impl SurfaceMetrics {
    pub fn new(logical: Vec2, dpr: f32) -> Self {
        Self {
            logical: logical.max(Vec2::ZERO),
            dpr: if dpr > 0.0 { dpr } else { 1.0 },
        }
    }

    /// Zero-area surfaces show up during layout thrash; nothing is drawn.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.logical.x >= 1.0 && self.logical.y >= 1.0)
    }

    /// Pixel buffer dimensions.
    pub fn backing_size(&self) -> (u32, u32) {
        let px = (self.logical * self.dpr).floor();
        (px.x as u32, px.y as u32)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.logical * 0.5
    }

    /// Scale transform installed on the drawing context.
    #[inline]
    pub fn transform(&self) -> [f64; 6] {
        let s = self.dpr as f64;
        [s, 0.0, 0.0, s, 0.0, 0.0]
    }

    #[inline]
    pub fn to_physical(&self, logical: Vec2) -> Vec2 {
        logical * self.dpr
    }

    #[inline]
    pub fn to_logical(&self, physical: Vec2) -> Vec2 {
        physical / self.dpr
    }
}

/// Coalesces bursts of resize events into one reconciliation after a quiet
/// period. The event side only records timestamps; the frame loop polls.
#[derive(Clone, Debug, Default)]
pub struct ResizeDebounce {
    quiet_ms: f64,
    last_event_ms: Option<f64>,
}

impl ResizeDebounce {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms: quiet_ms.max(0.0),
            last_event_ms: None,
        }
    }

    pub fn note(&mut self, now_ms: f64) {
        self.last_event_ms = Some(now_ms);
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.last_event_ms.is_some()
    }

    /// `true` once, when the latest event is at least `quiet_ms` old.
    pub fn take_due(&mut self, now_ms: f64) -> bool {
        match self.last_event_ms {
            Some(t) if now_ms - t >= self.quiet_ms => {
                self.last_event_ms = None;
                true
            }
            _ => false,
        }
    }
}
