//! Scroll-stack layout engine
//!
//! Computes, for an ordered sequence of stackable panels, the sticky offset and
//! the visual transform (scale, blur, paint order) each panel should have at the
//! current scroll position.
//!
//! The computation is split in two halves:
//! - [`layout`] is a pure function from configuration and measured geometry to
//!   a list of [`PanelFrame`]s
//! - [`PanelSurface`] is the imperative output channel the frames are applied
//!   through (a DOM element in the browser, a recording stub in tests)
//!
//! [`ScrollStackEngine`] ties both together with a [`FrameCoalescer`] so that
//! scroll and resize signals produce at most one recompute per animation frame.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::frame_scheduler::FrameCoalescer;

/// Default scroll distance between consecutive panels (px)
pub const DEFAULT_SPACING: f64 = 300.0;

/// Default stagger between stacked panels' stick points (px)
pub const DEFAULT_STACK_OFFSET_STEP: f64 = 30.0;

/// Default scale reduction of a fully covered panel
pub const DEFAULT_SCALE_SHRINK: f64 = 0.05;

/// Default stick anchor, as a percentage of the viewport height
pub const DEFAULT_STICK_PERCENT: f64 = 15.0;

/// Interaction zone size as a fraction of the viewport height
pub const INTERACTION_ZONE_RATIO: f64 = 0.8;

/// Paint order of the first panel
pub const Z_ORDER_BASE: i32 = 10;

/// Blur radii at or below this are rendered as `filter: none`
pub const BLUR_RENDER_THRESHOLD: f64 = 0.1;

/// Vertical anchor of the first panel's stick point
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StickPosition {
    /// Absolute distance from the top of the viewport
    Pixels(f64),
    /// Percentage of the viewport height (`15.0` means 15%)
    Percent(f64),
}

impl StickPosition {
    /// Resolve to pixels against the given viewport height
    pub fn resolve(&self, viewport_height: f64) -> f64 {
        match *self {
            StickPosition::Pixels(px) => px,
            StickPosition::Percent(pct) => pct / 100.0 * viewport_height,
        }
    }
}

impl Default for StickPosition {
    fn default() -> Self {
        StickPosition::Percent(DEFAULT_STICK_PERCENT)
    }
}

impl fmt::Display for StickPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StickPosition::Pixels(px) => write!(f, "{}px", px),
            StickPosition::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

/// Error returned when a stick position string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stick position: {0:?}")]
pub struct StickPositionError(pub String);

impl FromStr for StickPosition {
    type Err = StickPositionError;

    /// Accepts `"15%"`, `"96px"` or a bare number of pixels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || StickPositionError(s.to_string());

        let parsed = if let Some(pct) = trimmed.strip_suffix('%') {
            StickPosition::Percent(pct.trim().parse().map_err(|_| invalid())?)
        } else {
            let px = trimmed.strip_suffix("px").unwrap_or(trimmed);
            StickPosition::Pixels(px.trim().parse().map_err(|_| invalid())?)
        };

        let value = match parsed {
            StickPosition::Pixels(v) | StickPosition::Percent(v) => v,
        };
        if value.is_finite() {
            Ok(parsed)
        } else {
            Err(invalid())
        }
    }
}

/// Per-mount engine configuration
///
/// Immutable once handed to a [`ScrollStackEngine`]. Setters clamp their input
/// into the valid range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scroll distance reserved between consecutive panels (margin-bottom)
    pub spacing: f64,
    /// Added per index to stagger stick points
    pub stack_offset_step: f64,
    /// Maximum scale reduction of a fully covered panel (0.05 = 95%)
    pub scale_shrink: f64,
    /// Stick point of the first panel
    pub stick_position: StickPosition,
    /// Maximum blur radius of a fully covered panel; 0 disables blur
    pub blur_max: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            stack_offset_step: DEFAULT_STACK_OFFSET_STEP,
            scale_shrink: DEFAULT_SCALE_SHRINK,
            stick_position: StickPosition::default(),
            blur_max: 0.0,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = non_negative(spacing);
        self
    }

    pub fn with_stack_offset_step(mut self, step: f64) -> Self {
        self.stack_offset_step = non_negative(step);
        self
    }

    pub fn with_scale_shrink(mut self, shrink: f64) -> Self {
        self.scale_shrink = if shrink.is_finite() {
            shrink.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    pub fn with_stick_position(mut self, position: StickPosition) -> Self {
        self.stick_position = position;
        self
    }

    pub fn with_blur_max(mut self, blur: f64) -> Self {
        self.blur_max = non_negative(blur);
        self
    }

    /// Copy with every numeric field forced into the range the setters allow
    ///
    /// Fields are public, so a struct literal or deserialized value may hold
    /// anything.
    pub fn sanitized(&self) -> Self {
        self.clone()
            .with_spacing(self.spacing)
            .with_stack_offset_step(self.stack_offset_step)
            .with_scale_shrink(self.scale_shrink)
            .with_blur_max(self.blur_max)
    }

    /// Whether blur is applied at all
    pub fn blur_enabled(&self) -> bool {
        self.blur_max > 0.0
    }

    /// Sticky offset of the panel at `index` for an already resolved anchor
    pub fn sticky_offset(&self, resolved_stick: f64, index: usize) -> f64 {
        resolved_stick + index as f64 * self.stack_offset_step
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Computed visual state of one panel
#[derive(Clone, Debug, PartialEq)]
pub struct PanelFrame {
    pub index: usize,
    /// Distance from the viewport top at which the panel is pinned (px)
    pub sticky_offset: f64,
    /// Margin below the panel; zero for the last one
    pub spacing: f64,
    /// How far the successor has advanced into covering this panel
    pub progress: f64,
    pub scale: f64,
    pub blur_radius: f64,
    pub blur_enabled: bool,
    pub z_order: i32,
}

impl PanelFrame {
    pub fn top_css(&self) -> String {
        format!("{}px", self.sticky_offset)
    }

    pub fn margin_bottom_css(&self) -> String {
        format!("{}px", self.spacing)
    }

    pub fn transform_css(&self) -> String {
        format!("scale({})", self.scale)
    }

    /// `filter` value, or `None` when blur is disabled and the property
    /// should be left untouched
    pub fn filter_css(&self) -> Option<String> {
        if !self.blur_enabled {
            return None;
        }
        if self.blur_radius > BLUR_RENDER_THRESHOLD {
            Some(format!("blur({}px)", self.blur_radius))
        } else {
            Some("none".to_string())
        }
    }

    pub fn z_index_css(&self) -> String {
        self.z_order.to_string()
    }
}

/// A panel as seen by the engine
///
/// Implementors expose where the panel currently sits and accept the computed
/// frame. In the browser this writes inline styles on the panel element.
pub trait PanelSurface {
    /// Current top edge of the panel, in viewport pixels
    fn viewport_top(&self) -> f64;

    /// Apply a computed frame to the panel's visual representation
    fn apply(&self, frame: &PanelFrame);
}

/// Normalized progress of a successor panel towards its stick point
///
/// 0 while the successor is `zone` pixels or further away, rising linearly to 1
/// as it arrives, and staying at 1 once it has passed.
pub fn progress(distance_to_stick: f64, interaction_zone: f64) -> f64 {
    if !distance_to_stick.is_finite() {
        return if distance_to_stick < 0.0 { 1.0 } else { 0.0 };
    }
    if interaction_zone <= 0.0 || !interaction_zone.is_finite() {
        return if distance_to_stick <= 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - distance_to_stick / interaction_zone).clamp(0.0, 1.0)
}

/// Compute frames for all panels from their measured viewport tops
///
/// `panel_tops[i]` is the current top of panel `i`. Only the successor's top is
/// used to derive a panel's progress; the last panel never shrinks or blurs.
pub fn layout(config: &EngineConfig, viewport_height: f64, panel_tops: &[f64]) -> Vec<PanelFrame> {
    let config = &config.sanitized();
    let count = panel_tops.len();
    let resolved_stick = config.stick_position.resolve(viewport_height);
    let interaction_zone = viewport_height * INTERACTION_ZONE_RATIO;

    (0..count)
        .map(|index| {
            let is_last = index + 1 == count;

            let progress = if is_last {
                0.0
            } else {
                let next_stick_point = config.sticky_offset(resolved_stick, index + 1);
                progress(panel_tops[index + 1] - next_stick_point, interaction_zone)
            };

            PanelFrame {
                index,
                sticky_offset: config.sticky_offset(resolved_stick, index),
                spacing: if is_last { 0.0 } else { config.spacing },
                progress,
                scale: 1.0 - progress * config.scale_shrink,
                blur_radius: progress * config.blur_max,
                blur_enabled: config.blur_enabled(),
                z_order: Z_ORDER_BASE + index as i32,
            }
        })
        .collect()
}

/// A mounted scroll-stack instance
///
/// Owns the immutable configuration and the frame coalescing state. The host
/// forwards scroll/resize signals to [`on_signal`](Self::on_signal) and runs
/// [`run_frame`](Self::run_frame) from its animation-frame callback.
#[derive(Debug)]
pub struct ScrollStackEngine {
    config: EngineConfig,
    frames: FrameCoalescer,
}

impl ScrollStackEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            frames: FrameCoalescer::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether the engine is still mounted
    pub fn is_attached(&self) -> bool {
        self.frames.is_attached()
    }

    /// Measure, compute and apply frames for `panels`
    ///
    /// Does nothing for an empty panel list or after [`detach`](Self::detach).
    pub fn recompute<P: PanelSurface>(&self, viewport_height: f64, panels: &[P]) -> Vec<PanelFrame> {
        if panels.is_empty() || !self.frames.is_attached() {
            return Vec::new();
        }

        // Measure everything first so writes in this pass cannot skew reads
        let tops: Vec<f64> = panels.iter().map(PanelSurface::viewport_top).collect();
        let frames = layout(&self.config, viewport_height, &tops);

        for (panel, frame) in panels.iter().zip(&frames) {
            panel.apply(frame);
        }

        frames
    }

    /// Register a scroll or resize signal
    ///
    /// Returns `true` when the caller must schedule an animation frame; `false`
    /// when one is already pending or the engine has been detached.
    pub fn on_signal(&mut self) -> bool {
        self.frames.request()
    }

    /// Run the pending recompute, if any
    ///
    /// Returns `None` when no frame was pending (or after teardown).
    pub fn run_frame<P: PanelSurface>(
        &mut self,
        viewport_height: f64,
        panels: &[P],
    ) -> Option<Vec<PanelFrame>> {
        if !self.frames.begin_frame() {
            return None;
        }
        Some(self.recompute(viewport_height, panels))
    }

    /// Whether a coalesced recompute is waiting for the next frame
    pub fn has_pending_frame(&self) -> bool {
        self.frames.is_pending()
    }

    /// Tear the engine down; no recompute runs afterwards
    pub fn detach(&mut self) {
        self.frames.detach();
    }
}
