#![forbid(unsafe_code)]

//! Three-panel workspace geometry.
//!
//! The workspace row is split into a left column, a center column, and a
//! collapsible right column. Left and center are percentage-sized and share
//! the row's 100% budget with the right column's nominal share. When
//! expanded, the right column is drawn at an absolute pixel width, so pointer
//! drags on its edge never compete with the left/center percentage budget.
//!
//! The left column is further split vertically into a preview region (top)
//! and a list region (bottom).

use quire_core::geometry::AnchorRect;
use quire_core::percent::{PERCENT_MAX, clamp, clamp_percent};
use serde::{Deserialize, Serialize};

use crate::config::PanelLayoutConfig;

/// Which resize handle a drag session or keyboard nudge acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelResizeAxis {
    /// Edge between the left and center columns.
    HorizontalLeft,
    /// Edge between the center and right columns.
    HorizontalRight,
    /// Edge between the preview and list regions of the left column.
    Vertical,
}

impl PanelResizeAxis {
    /// Whether the handle moves along the x axis.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::HorizontalLeft | Self::HorizontalRight)
    }
}

/// Transient state between pointer-down on a handle and its release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelDragSession {
    pub axis: PanelResizeAxis,
    /// Container bounds the pointer position is measured against.
    pub anchor: AnchorRect,
}

/// Geometry of the three-panel workspace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelLayoutState {
    /// Left column width, percent of the row.
    pub left: f64,
    /// Center column width, percent of the row.
    pub center: f64,
    /// Right column share, percent of the row.
    pub right: f64,
    /// Height of the preview region, percent of the left column.
    pub vertical_split: f64,
    /// Right column width in pixels while expanded.
    pub right_panel_width_px: f64,
    pub right_panel_collapsed: bool,
    pub drag_session: Option<PanelDragSession>,
}

impl Default for PanelLayoutState {
    fn default() -> Self {
        Self::from_config(&PanelLayoutConfig::default())
    }
}

impl PanelLayoutState {
    /// Initial state described by a config's defaults.
    #[must_use]
    pub fn from_config(config: &PanelLayoutConfig) -> Self {
        Self {
            left: config.default_left,
            center: config.default_center,
            right: config.default_right,
            vertical_split: config.default_vertical_split,
            right_panel_width_px: config.default_right_width_px,
            right_panel_collapsed: config.default_right_collapsed,
            drag_session: None,
        }
    }

    /// Right column width actually drawn: zero while collapsed.
    #[must_use]
    pub fn effective_right_width_px(&self) -> f64 {
        if self.right_panel_collapsed {
            0.0
        } else {
            self.right_panel_width_px
        }
    }

    /// Whether a drag session is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag_session.is_some()
    }

    /// Resolve the percentages into pixel rectangles inside `area`.
    ///
    /// The left column takes `left`% of the width and the right column takes
    /// its effective pixel width, limited to whatever the left column leaves.
    /// The center column fills the remainder. A degenerate `area` resolves to
    /// empty rectangles at its origin.
    #[must_use]
    pub fn solve(&self, area: AnchorRect) -> PanelRects {
        if !area.has_usable_width() || !area.has_usable_height() {
            let origin = AnchorRect::new(area.left, area.top, 0.0, 0.0);
            return PanelRects {
                left_preview: origin,
                left_list: origin,
                center: origin,
                right: (!self.right_panel_collapsed).then_some(origin),
            };
        }

        let left_width = area.width * clamp_percent(self.left) / PERCENT_MAX;
        let remaining = (area.width - left_width).max(0.0);
        let right_width = self.effective_right_width_px().min(remaining).max(0.0);
        let center_width = (remaining - right_width).max(0.0);
        let preview_height = area.height * clamp_percent(self.vertical_split) / PERCENT_MAX;

        let left_preview = AnchorRect::new(area.left, area.top, left_width, preview_height);
        let left_list = AnchorRect::new(
            area.left,
            area.top + preview_height,
            left_width,
            area.height - preview_height,
        );
        let center = AnchorRect::new(area.left + left_width, area.top, center_width, area.height);
        let right = (!self.right_panel_collapsed).then(|| {
            AnchorRect::new(center.right(), area.top, right_width, area.height)
        });

        PanelRects {
            left_preview,
            left_list,
            center,
            right,
        }
    }
}

/// Pixel rectangles of the workspace regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelRects {
    pub left_preview: AnchorRect,
    pub left_list: AnchorRect,
    pub center: AnchorRect,
    /// `None` while the right column is collapsed.
    pub right: Option<AnchorRect>,
}

/// Left/center widths produced by an accepted left-edge resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeftEdgeResize {
    pub left: f64,
    pub center: f64,
}

/// A left-edge resize that would squeeze the center column below its minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterBelowMinimum {
    pub requested_left: f64,
    pub center: f64,
    pub center_min: f64,
}

/// Compute the left/center widths for a requested left width.
///
/// The requested width is clamped to the left bounds; the center absorbs the
/// difference. The right share is never reduced: if the center would fall
/// below its minimum the whole resize is rejected.
pub fn resize_left_edge(
    state: &PanelLayoutState,
    config: &PanelLayoutConfig,
    requested_left: f64,
) -> Result<LeftEdgeResize, CenterBelowMinimum> {
    let left = clamp(requested_left, config.left_min, config.left_max);
    let center = PERCENT_MAX - left - state.right;
    if center < config.center_min {
        return Err(CenterBelowMinimum {
            requested_left: left,
            center,
            center_min: config.center_min,
        });
    }
    Ok(LeftEdgeResize { left, center })
}

/// Clamp a requested right column width to the pixel bounds.
#[must_use]
pub fn resize_right_edge(config: &PanelLayoutConfig, requested_px: f64) -> f64 {
    clamp(
        requested_px,
        config.right_width_min_px,
        config.right_width_max_px,
    )
}

/// Clamp a requested preview/list split to the vertical bounds.
#[must_use]
pub fn resize_vertical_split(config: &PanelLayoutConfig, requested: f64) -> f64 {
    clamp(
        requested,
        config.vertical_split_min,
        config.vertical_split_max,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_right(right: f64) -> PanelLayoutState {
        PanelLayoutState {
            left: 25.0,
            center: PERCENT_MAX - 25.0 - right,
            right,
            ..PanelLayoutState::default()
        }
    }

    #[test]
    fn default_state_matches_workspace_defaults() {
        let state = PanelLayoutState::default();
        assert_eq!(state.left, 25.0);
        assert_eq!(state.center, 50.0);
        assert_eq!(state.right, 25.0);
        assert_eq!(state.vertical_split, 40.0);
        assert_eq!(state.right_panel_width_px, 250.0);
        assert!(state.right_panel_collapsed);
        assert_eq!(state.drag_session, None);
    }

    #[test]
    fn collapsed_right_panel_has_zero_effective_width() {
        let mut state = PanelLayoutState::default();
        assert_eq!(state.effective_right_width_px(), 0.0);
        state.right_panel_collapsed = false;
        assert_eq!(state.effective_right_width_px(), 250.0);
    }

    #[test]
    fn left_edge_resize_clamps_and_keeps_right_share() {
        let config = PanelLayoutConfig::default();
        let state = state_with_right(25.0);
        let resize = resize_left_edge(&state, &config, 45.0).expect("center stays at 35");
        assert_eq!(resize, LeftEdgeResize { left: 40.0, center: 35.0 });

        let resize = resize_left_edge(&state, &config, 3.0).expect("center grows");
        assert_eq!(resize, LeftEdgeResize { left: 15.0, center: 60.0 });
    }

    #[test]
    fn left_edge_resize_rejects_squeezed_center() {
        let config = PanelLayoutConfig::default();
        let state = state_with_right(45.0);
        let rejected = resize_left_edge(&state, &config, 38.0).expect_err("center would be 17");
        assert_eq!(rejected.requested_left, 38.0);
        assert_eq!(rejected.center, 17.0);
        assert_eq!(rejected.center_min, 30.0);
    }

    #[test]
    fn right_edge_and_vertical_split_clamp() {
        let config = PanelLayoutConfig::default();
        assert_eq!(resize_right_edge(&config, 120.0), 200.0);
        assert_eq!(resize_right_edge(&config, 320.0), 320.0);
        assert_eq!(resize_right_edge(&config, 900.0), 500.0);
        assert_eq!(resize_vertical_split(&config, 5.0), 20.0);
        assert_eq!(resize_vertical_split(&config, 95.0), 80.0);
    }

    #[test]
    fn solve_with_collapsed_right_gives_center_the_remainder() {
        let state = PanelLayoutState::default();
        let rects = state.solve(AnchorRect::from_size(1000.0, 500.0));
        assert_eq!(rects.left_preview, AnchorRect::new(0.0, 0.0, 250.0, 200.0));
        assert_eq!(rects.left_list, AnchorRect::new(0.0, 200.0, 250.0, 300.0));
        assert_eq!(rects.center, AnchorRect::new(250.0, 0.0, 750.0, 500.0));
        assert_eq!(rects.right, None);
    }

    #[test]
    fn solve_with_expanded_right_uses_pixel_width() {
        let state = PanelLayoutState {
            right_panel_collapsed: false,
            right_panel_width_px: 300.0,
            ..PanelLayoutState::default()
        };
        let rects = state.solve(AnchorRect::new(10.0, 20.0, 1000.0, 500.0));
        assert_eq!(rects.center, AnchorRect::new(260.0, 20.0, 450.0, 500.0));
        assert_eq!(rects.right, Some(AnchorRect::new(710.0, 20.0, 300.0, 500.0)));
    }

    #[test]
    fn solve_limits_right_width_to_remaining_space() {
        let state = PanelLayoutState {
            right_panel_collapsed: false,
            right_panel_width_px: 500.0,
            ..PanelLayoutState::default()
        };
        let rects = state.solve(AnchorRect::from_size(400.0, 100.0));
        assert_eq!(rects.center.width, 0.0);
        assert_eq!(rects.right.map(|right| right.width), Some(300.0));
    }

    #[test]
    fn solve_degenerate_area_is_empty() {
        let state = PanelLayoutState::default();
        let rects = state.solve(AnchorRect::new(5.0, 5.0, 0.0, 100.0));
        assert_eq!(rects.center, AnchorRect::new(5.0, 5.0, 0.0, 0.0));
        assert_eq!(rects.right, None);
    }

    #[test]
    fn axis_orientation() {
        assert!(PanelResizeAxis::HorizontalLeft.is_horizontal());
        assert!(PanelResizeAxis::HorizontalRight.is_horizontal());
        assert!(!PanelResizeAxis::Vertical.is_horizontal());
    }
}
