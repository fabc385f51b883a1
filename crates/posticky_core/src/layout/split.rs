//! Bounded editor/preview split controller.
//!
//! # Responsibility
//! - Own the editor pane's fraction of the content width.
//! - Translate divider drag gestures into a new fraction.
//! - Derive pixel widths that respect a per-pane minimum.
//!
//! # Invariants
//! - The ratio always lies in `[MIN_SPLIT_RATIO, MAX_SPLIT_RATIO]`; it is
//!   clamped before assignment, so no other value is representable.
//! - For a total width below `2 * MIN_PANE_WIDTH` the editor keeps its
//!   minimum and the preview absorbs the shortfall (possibly zero or
//!   negative).

use serde::{Deserialize, Serialize};

pub const MIN_SPLIT_RATIO: f64 = 0.25;
pub const MAX_SPLIT_RATIO: f64 = 0.75;
pub const DEFAULT_SPLIT_RATIO: f64 = 0.5;
/// Minimum width of either pane, in layout units.
pub const MIN_PANE_WIDTH: f64 = 200.0;

/// Editor fraction of the content width, always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SplitRatio(f64);

impl SplitRatio {
    /// Clamps `value` into bounds. Returns `None` for NaN.
    pub fn clamped(value: f64) -> Option<Self> {
        if value.is_nan() {
            return None;
        }
        Some(Self(value.clamp(MIN_SPLIT_RATIO, MAX_SPLIT_RATIO)))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self(DEFAULT_SPLIT_RATIO)
    }
}

impl TryFrom<f64> for SplitRatio {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::clamped(value).ok_or_else(|| "split ratio must not be NaN".to_string())
    }
}

impl From<SplitRatio> for f64 {
    fn from(value: SplitRatio) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitRatioController {
    ratio: SplitRatio,
    dragging: bool,
    // Ratio captured when the current drag began.
    drag_anchor: Option<SplitRatio>,
}

impl SplitRatioController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ratio(ratio: SplitRatio) -> Self {
        Self {
            ratio,
            ..Self::default()
        }
    }

    pub fn ratio(&self) -> SplitRatio {
        self.ratio
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Sets the ratio directly, clamped. NaN is ignored.
    pub fn set_ratio(&mut self, value: f64) -> SplitRatio {
        if let Some(ratio) = SplitRatio::clamped(value) {
            self.ratio = ratio;
        }
        self.ratio
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.drag_anchor = Some(self.ratio);
    }

    /// Applies a drag translation measured from the drag start.
    ///
    /// The start width is re-derived from the anchor ratio against the
    /// current `total_width`, so repeated calls with the same inputs give the
    /// same ratio even while the window is resized. Calling this without
    /// `begin_drag` starts the drag implicitly. Non-finite proposals and
    /// non-positive widths leave the ratio unchanged.
    pub fn update_drag(&mut self, delta_from_drag_start: f64, total_width: f64) -> SplitRatio {
        if !self.dragging {
            self.begin_drag();
        }
        if !(total_width.is_finite() && total_width > 0.0) {
            return self.ratio;
        }

        let anchor = self.drag_anchor.unwrap_or(self.ratio);
        let start_width = editor_width_for(anchor, total_width);
        let proposed = (start_width + delta_from_drag_start) / total_width;
        if let Some(ratio) = SplitRatio::clamped(proposed) {
            self.ratio = ratio;
        }
        self.ratio
    }

    /// Ends the drag; the ratio is kept.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.drag_anchor = None;
    }

    /// Editor pane width: `max(200, min(total - 200, total * ratio))`.
    ///
    /// Below a total of 400 this is exactly 200.
    pub fn effective_editor_width(&self, total_width: f64) -> f64 {
        editor_width_for(self.ratio, total_width)
    }

    /// Whatever the editor leaves over. May drop below the pane minimum,
    /// to zero or negative, when `total_width < 400`.
    pub fn effective_preview_width(&self, total_width: f64) -> f64 {
        total_width - self.effective_editor_width(total_width)
    }
}

fn editor_width_for(ratio: SplitRatio, total_width: f64) -> f64 {
    (total_width * ratio.get())
        .min(total_width - MIN_PANE_WIDTH)
        .max(MIN_PANE_WIDTH)
}
