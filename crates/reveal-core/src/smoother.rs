use glam::Vec2;

/// Smoothed pointer position and its per-frame velocity.
///
/// `display` approaches the target geometrically: each update closes a fixed
/// fraction of the remaining gap, so it never overshoots for `smoothing` in
/// (0, 1]. Velocity is measured in pixels per frame, not per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub raw: Vec2,
    pub display: Vec2,
    pub prev: Vec2,
    pub velocity: f32,
}

impl PointerState {
    pub fn new(at: Vec2) -> Self {
        Self {
            raw: at,
            display: at,
            prev: at,
            velocity: 0.0,
        }
    }

    /// Jump straight to `at` with zero velocity.
    pub fn snap(&mut self, at: Vec2) {
        self.raw = at;
        self.display = at;
        self.prev = at;
        self.velocity = 0.0;
    }

    pub fn update(&mut self, target: Vec2, smoothing: f32) {
        let alpha = smoothing.clamp(f32::EPSILON, 1.0);
        self.raw = target;
        self.display += (target - self.display) * alpha;
        self.velocity = self.display.distance(self.prev);
        self.prev = self.display;
    }
}
