//! Per-frame sequencing of the reveal state.
//!
//! The engine is the single writer of everything derived from pointer input.
//! Event handlers mutate a [`PointerInput`]; once per display refresh the
//! frontend calls [`RevealEngine::tick`] with a shared borrow of it and then
//! asks the engine what to draw.

use crate::config::{RevealConfig, ECHO_INITIAL_OPACITY};
use crate::echo::{Echo, EchoRing};
use crate::grid::GridLines;
use crate::input::{InputDevice, PointerInput};
use crate::mask::{MaskDisc, MaskPlan};
use crate::reactivity::{parallax_offset, InversionChanges, UiReactivity};
use crate::smoother::PointerState;
use crate::surface::SurfaceMetrics;
use glam::Vec2;

/// What happened during one tick.
#[derive(Clone, Debug, Default)]
pub struct FrameReport {
    pub active: bool,
    pub spawned: bool,
    pub retired: usize,
    /// Elements whose inversion was dropped on deactivation or a new activation.
    pub cleared: InversionChanges,
}

pub struct RevealEngine {
    config: RevealConfig,
    device: InputDevice,
    pointer: PointerState,
    echoes: EchoRing,
    ui: UiReactivity,
    surface: SurfaceMetrics,
    active: bool,
    seen_activation: u32,
    last_spawn_ms: Option<f64>,
}

impl RevealEngine {
    pub fn new(config: RevealConfig, device: InputDevice, ui_count: usize) -> Self {
        let park = Vec2::from(config.spotlight.park_point);
        let echoes = EchoRing::with_capacity(config.echoes.max_count);
        Self {
            config,
            device,
            pointer: PointerState::new(park),
            echoes,
            ui: UiReactivity::new(ui_count),
            surface: SurfaceMetrics::default(),
            active: false,
            seen_activation: 0,
            last_spawn_ms: None,
        }
    }

    /// A fresh input tracker parked where this engine expects it.
    pub fn pointer_input(&self) -> PointerInput {
        PointerInput::new(Vec2::from(self.config.spotlight.park_point))
    }

    #[inline]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    #[inline]
    pub fn device(&self) -> InputDevice {
        self.device
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn echoes(&self) -> &EchoRing {
        &self.echoes
    }

    #[inline]
    pub fn ui(&self) -> &UiReactivity {
        &self.ui
    }

    #[inline]
    pub fn surface(&self) -> SurfaceMetrics {
        self.surface
    }

    pub fn set_surface(&mut self, metrics: SurfaceMetrics) {
        self.surface = metrics;
    }

    /// Whether the last tick ran with an active pointer.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn active_radius(&self) -> f32 {
        self.config.active_radius(self.device == InputDevice::Touch)
    }

    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.config.outer_radius(self.device == InputDevice::Touch)
    }

    pub fn tick(&mut self, input: &PointerInput, now_ms: f64) -> FrameReport {
        let active = input.is_active();
        let mut report = FrameReport {
            active,
            ..FrameReport::default()
        };

        // Leave handlers strip inversion from the page even when the
        // re-enter lands before this tick; start every activation unflagged.
        if input.activation() != self.seen_activation {
            self.seen_activation = input.activation();
            report.cleared = self.ui.clear();
            if active {
                self.pointer.snap(input.raw());
            }
        }
        if self.active && !active {
            report.cleared.extend(self.ui.clear());
        }
        self.active = active;

        let target = if active {
            input.raw()
        } else {
            input.park_point()
        };
        self.pointer
            .update(target, self.config.spotlight.smoothing);

        report.retired = self.echoes.fade(self.config.echoes.fade_speed);

        if active && self.pointer.velocity > self.config.echoes.min_velocity {
            let interval = self.config.echoes.spawn_interval_ms;
            let due = self
                .last_spawn_ms
                .map_or(true, |last| now_ms - last > interval);
            if due {
                let radius = self.active_radius() * self.config.echoes.radius_scale;
                if let Some(evicted) = self.echoes.push(Echo {
                    center: self.pointer.display,
                    opacity: ECHO_INITIAL_OPACITY,
                    radius,
                }) {
                    log::trace!("echo ring full, evicted opacity {:.2}", evicted.opacity);
                }
                self.last_spawn_ms = Some(now_ms);
                report.spawned = true;
            }
        }
        report
    }

    /// Discs to paint into the reveal mask, or `None` when the reveal
    /// surface should stay fully transparent this frame.
    pub fn mask_plan(&self, image_ready: bool) -> Option<MaskPlan> {
        if !image_ready || self.surface.is_degenerate() {
            return None;
        }
        let mut plan = MaskPlan::default();
        for echo in self.echoes.iter() {
            plan.discs
                .push(MaskDisc::new(echo.center, echo.radius, echo.opacity));
        }
        let spotlight = MaskDisc::new(self.pointer.display, self.outer_radius(), 1.0);
        if self.active || spotlight.touches(self.surface.logical) {
            plan.discs.push(spotlight);
        }
        (!plan.is_empty()).then_some(plan)
    }

    /// Grid layout, anchored at the surface center while inactive.
    pub fn grid(&self) -> GridLines {
        let reference = if self.active {
            self.pointer.display
        } else {
            self.surface.center()
        };
        GridLines::new(
            self.surface.logical,
            reference,
            self.config.grid.size,
            self.config.grid.reactivity,
        )
    }

    pub fn parallax(&self) -> Option<Vec2> {
        self.active.then(|| {
            parallax_offset(
                self.pointer.display,
                self.surface.logical,
                self.config.parallax.amount,
            )
        })
    }

    /// Re-evaluate inversion for elements measured relative to the surface
    /// origin. Does nothing while inactive.
    pub fn update_inversion(&mut self, centers: &[Option<Vec2>]) -> InversionChanges {
        if !self.active {
            return InversionChanges::new();
        }
        let radius = self.active_radius();
        self.ui.update(
            centers,
            self.pointer.display,
            radius,
            self.config.inversion.threshold,
        )
    }

    /// Drop all transient state, used on teardown.
    pub fn reset(&mut self) -> InversionChanges {
        self.echoes.clear();
        self.active = false;
        self.last_spawn_ms = None;
        self.pointer
            .snap(Vec2::from(self.config.spotlight.park_point));
        self.ui.clear()
    }
}
