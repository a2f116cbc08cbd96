//! Raw pointer target shared between event handlers and the frame loop.
//!
//! Handlers only ever overwrite the latest observed position and the active
//! flag. Everything derived from it (display position, velocity, echoes) is
//! owned by [`crate::RevealEngine`] and mutated once per frame.

use glam::Vec2;

/// How long after a touch ends mouse events are treated as the browser's
/// compatibility events for that touch and dropped.
pub const TOUCH_MOUSE_GUARD_MS: f64 = 800.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputDevice {
    #[default]
    Mouse,
    Touch,
}

#[derive(Clone, Debug)]
pub struct PointerInput {
    raw: Vec2,
    active: bool,
    touching: bool,
    park: Vec2,
    /// Bumped on every activation; the engine snaps when it sees a new value.
    activation: u32,
    /// Mouse events before this time belong to the last touch.
    mouse_blocked_until: Option<f64>,
}

/// Convert a viewport-space point into surface-local coordinates.
#[inline]
pub fn to_local(client: Vec2, surface_origin: Vec2) -> Vec2 {
    client - surface_origin
}

impl PointerInput {
    pub fn new(park: Vec2) -> Self {
        Self {
            raw: park,
            active: false,
            touching: false,
            park,
            activation: 0,
            mouse_blocked_until: None,
        }
    }

    #[inline]
    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_touching(&self) -> bool {
        self.touching
    }

    #[inline]
    pub fn activation(&self) -> u32 {
        self.activation
    }

    #[inline]
    pub fn park_point(&self) -> Vec2 {
        self.park
    }

    fn activate(&mut self, local: Vec2) {
        self.raw = local;
        self.active = true;
        self.activation = self.activation.wrapping_add(1);
    }

    /// Whether a mouse event at `now_ms` was synthesized from a touch.
    #[inline]
    pub fn mouse_suppressed(&self, now_ms: f64) -> bool {
        self.touching || self.mouse_blocked_until.is_some_and(|until| now_ms < until)
    }

    pub fn mouse_enter(&mut self, local: Vec2, now_ms: f64) {
        if self.mouse_suppressed(now_ms) {
            return;
        }
        self.activate(local);
    }

    /// Returns `true` when this move activated the pointer (no prior enter).
    pub fn mouse_move(&mut self, local: Vec2, now_ms: f64) -> bool {
        if self.mouse_suppressed(now_ms) {
            return false;
        }
        if !self.active {
            self.activate(local);
            return true;
        }
        self.raw = local;
        false
    }

    pub fn mouse_leave(&mut self) {
        if self.touching {
            return;
        }
        self.active = false;
        self.raw = self.park;
    }

    pub fn touch_start(&mut self, local: Vec2) {
        self.touching = true;
        self.activate(local);
    }

    pub fn touch_move(&mut self, local: Vec2) {
        if self.touching {
            self.raw = local;
        }
    }

    /// Sends the target off-surface so the spotlight animates out of frame.
    /// Mouse events inside [`TOUCH_MOUSE_GUARD_MS`] are ignored afterwards.
    pub fn touch_end(&mut self, now_ms: f64) {
        self.touching = false;
        self.mouse_blocked_until = Some(now_ms + TOUCH_MOUSE_GUARD_MS);
        self.active = false;
        self.raw = self.park;
    }
}
