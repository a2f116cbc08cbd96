//! Tunables for the hero reveal.
//!
//! Every section implements `Default` with the tuned values and is marked
//! `#[serde(default)]`, so a partial object coming from JS only overrides the
//! fields it names. The configuration is frozen once an instance is mounted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opacity every echo starts at.
pub const ECHO_INITIAL_OPACITY: f32 = 0.5;

/// Fraction of a disc's outer radius that is painted at full opacity.
pub const MASK_PLATEAU: f32 = 0.35;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpotlightConfig {
    /// Core radius in CSS pixels.
    pub radius: f32,
    /// Feather added outside the core radius.
    pub edge_softness: f32,
    /// Lerp factor in (0, 1]; lower lags more.
    pub smoothing: f32,
    /// Target the display position drifts to while inactive.
    pub park_point: [f32; 2],
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            radius: 80.0,
            edge_softness: 40.0,
            smoothing: 0.12,
            park_point: [-1000.0, -1000.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EchoConfig {
    pub max_count: usize,
    /// Opacity lost per frame.
    pub fade_speed: f32,
    /// Minimum display velocity (px/frame) before an echo spawns.
    pub min_velocity: f32,
    pub spawn_interval_ms: f64,
    /// Echo outer radius as a fraction of the active spotlight radius.
    pub radius_scale: f32,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            max_count: 8,
            fade_speed: 0.03,
            min_velocity: 8.0,
            spawn_interval_ms: 60.0,
            radius_scale: 0.8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub size: f32,
    pub opacity: f32,
    /// How far the grid shifts with the pointer, 0..1.
    pub reactivity: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 60.0,
            opacity: 0.04,
            reactivity: 0.3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParallaxConfig {
    /// Maximum shift in CSS pixels.
    pub amount: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { amount: 8.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InversionConfig {
    /// Elements closer than `radius * (1 + threshold)` are inverted.
    pub threshold: f32,
    pub transition_ms: u32,
}

impl Default for InversionConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            transition_ms: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TouchConfig {
    pub enabled: bool,
    pub spotlight_radius: f32,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            spotlight_radius: 60.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SurfaceConfig {
    pub max_device_pixel_ratio: f32,
    pub resize_debounce_ms: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            max_device_pixel_ratio: 2.0,
            resize_debounce_ms: 150.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub spotlight: SpotlightConfig,
    pub echoes: EchoConfig,
    pub grid: GridConfig,
    pub parallax: ParallaxConfig,
    pub inversion: InversionConfig,
    pub touch: TouchConfig,
    pub surface: SurfaceConfig,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("spotlight smoothing must be in (0, 1], got {0}")]
    Smoothing(f32),
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("grid opacity must be in [0, 1], got {0}")]
    GridOpacity(f32),
    #[error("device pixel ratio cap must be at least 1, got {0}")]
    PixelRatioCap(f32),
    #[error("park point ({x}, {y}) leaves the spotlight touching the surface")]
    ParkPointVisible { x: f32, y: f32 },
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

impl RevealConfig {
    /// Core radius of the spotlight for the given input device.
    #[inline]
    pub fn active_radius(&self, touch: bool) -> f32 {
        if touch {
            self.touch.spotlight_radius
        } else {
            self.spotlight.radius
        }
    }

    /// Radius at which the spotlight gradient reaches zero.
    #[inline]
    pub fn outer_radius(&self, touch: bool) -> f32 {
        self.active_radius(touch) + self.spotlight.edge_softness
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.spotlight;
        if !(s.smoothing > 0.0 && s.smoothing <= 1.0) {
            return Err(ConfigError::Smoothing(s.smoothing));
        }
        positive("spotlight radius", s.radius)?;
        positive("touch spotlight radius", self.touch.spotlight_radius)?;
        non_negative("edge softness", s.edge_softness)?;
        positive("echo fade speed", self.echoes.fade_speed)?;
        non_negative("echo min velocity", self.echoes.min_velocity)?;
        non_negative("echo spawn interval", self.echoes.spawn_interval_ms as f32)?;
        positive("echo radius scale", self.echoes.radius_scale)?;
        positive("grid size", self.grid.size)?;
        if !(0.0..=1.0).contains(&self.grid.opacity) {
            return Err(ConfigError::GridOpacity(self.grid.opacity));
        }
        non_negative("grid reactivity", self.grid.reactivity)?;
        non_negative("parallax amount", self.parallax.amount)?;
        non_negative("inversion threshold", self.inversion.threshold)?;
        non_negative("resize debounce", self.surface.resize_debounce_ms as f32)?;
        if !(self.surface.max_device_pixel_ratio >= 1.0) {
            return Err(ConfigError::PixelRatioCap(self.surface.max_device_pixel_ratio));
        }
        let reach = self.outer_radius(false).max(self.outer_radius(true));
        let [x, y] = s.park_point;
        if x + reach >= 0.0 && y + reach >= 0.0 {
            return Err(ConfigError::ParkPointVisible { x, y });
        }
        Ok(())
    }
}
