//! Opacity mask planning for the reveal surface.
//!
//! A [`MaskPlan`] is the ordered list of radial-gradient discs the frontend
//! paints before switching to source-in compositing and drawing the hidden
//! image. The same plan can be evaluated on the host with
//! [`MaskPlan::alpha_at`], which mirrors source-over accumulation.

use crate::config::MASK_PLATEAU;
use glam::Vec2;
use smallvec::SmallVec;

/// Number of stops sampled along the soft edge, plateau stop included.
const FALLOFF_SAMPLES: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the radius, 0 at the center and 1 at the rim.
    pub offset: f32,
    pub alpha: f32,
}

pub type Stops = SmallVec<[GradientStop; 8]>;

#[inline]
fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Plateau at full `scale` out to [`MASK_PLATEAU`], then an eased falloff to
/// zero at the rim. Every alpha is multiplied by `scale`.
pub fn disc_stops(scale: f32) -> Stops {
    let scale = scale.clamp(0.0, 1.0);
    let mut stops = Stops::new();
    stops.push(GradientStop {
        offset: 0.0,
        alpha: scale,
    });
    let span = 1.0 - MASK_PLATEAU;
    for i in 0..FALLOFF_SAMPLES {
        let u = i as f32 / (FALLOFF_SAMPLES - 1) as f32;
        stops.push(GradientStop {
            offset: MASK_PLATEAU + span * u,
            alpha: scale * (1.0 - smoothstep(u)),
        });
    }
    stops
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaskDisc {
    pub center: Vec2,
    /// Outer radius; alpha is zero from here on.
    pub radius: f32,
    pub stops: Stops,
}

impl MaskDisc {
    pub fn new(center: Vec2, radius: f32, scale: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            stops: disc_stops(scale),
        }
    }

    /// Linear interpolation between stops, as a canvas radial gradient does.
    pub fn alpha_at(&self, p: Vec2) -> f32 {
        if self.radius <= 0.0 {
            return 0.0;
        }
        let t = p.distance(self.center) / self.radius;
        if t >= 1.0 {
            return 0.0;
        }
        let mut prev = match self.stops.first() {
            Some(s) => *s,
            None => return 0.0,
        };
        if t <= prev.offset {
            return prev.alpha;
        }
        for stop in self.stops.iter().skip(1) {
            if t <= stop.offset {
                let w = stop.offset - prev.offset;
                if w <= f32::EPSILON {
                    return stop.alpha;
                }
                let k = (t - prev.offset) / w;
                return prev.alpha + (stop.alpha - prev.alpha) * k;
            }
            prev = *stop;
        }
        prev.alpha
    }

    /// Whether any part of the disc overlaps `[0, size]`.
    pub fn touches(&self, size: Vec2) -> bool {
        let nearest = self.center.clamp(Vec2::ZERO, size);
        nearest.distance_squared(self.center) < self.radius * self.radius
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaskPlan {
    /// Paint order: echoes oldest first, spotlight last.
    pub discs: SmallVec<[MaskDisc; 9]>,
}

impl MaskPlan {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// Accumulated mask alpha at `p` under source-over painting.
    pub fn alpha_at(&self, p: Vec2) -> f32 {
        self.discs.iter().fold(0.0, |acc, disc| {
            let a = disc.alpha_at(p);
            a + acc * (1.0 - a)
        })
    }
}

/// Destination rectangle for drawing an image so it covers the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Uniform scale by the larger of the two axis ratios, centered, so the
/// image fills `target` and overflow is cropped evenly on both sides.
pub fn cover_rect(image: Vec2, target: Vec2) -> Option<CoverRect> {
    if image.x <= 0.0 || image.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return None;
    }
    let scale = (target.x / image.x).max(target.y / image.y);
    let width = image.x * scale;
    let height = image.y * scale;
    Some(CoverRect {
        x: (target.x - width) * 0.5,
        y: (target.y - height) * 0.5,
        width,
        height,
    })
}
