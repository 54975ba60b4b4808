#![forbid(unsafe_code)]

//! Bounds and defaults for the three-panel workspace.

use std::fmt;

use quire_core::percent::{PERCENT_MAX, is_percent};
use serde::{Deserialize, Serialize};

/// Default left panel width, percent.
pub const PANEL_DEFAULT_LEFT: f64 = 25.0;
/// Default center panel width, percent.
pub const PANEL_DEFAULT_CENTER: f64 = 50.0;
/// Default right panel share, percent.
pub const PANEL_DEFAULT_RIGHT: f64 = 25.0;
/// Default preview/list split inside the left column, percent.
pub const PANEL_DEFAULT_VERTICAL_SPLIT: f64 = 40.0;
/// Default expanded right panel width, pixels.
pub const PANEL_DEFAULT_RIGHT_WIDTH_PX: f64 = 250.0;

pub const PANEL_LEFT_MIN: f64 = 15.0;
pub const PANEL_LEFT_MAX: f64 = 40.0;
pub const PANEL_CENTER_MIN: f64 = 30.0;
pub const PANEL_RIGHT_WIDTH_MIN_PX: f64 = 200.0;
pub const PANEL_RIGHT_WIDTH_MAX_PX: f64 = 500.0;
pub const PANEL_VERTICAL_SPLIT_MIN: f64 = 20.0;
pub const PANEL_VERTICAL_SPLIT_MAX: f64 = 80.0;

/// Percent moved per keyboard nudge step on percentage handles.
pub const PANEL_KEYBOARD_STEP_PERCENT: f64 = 1.0;
/// Pixels moved per keyboard nudge step on the right handle.
pub const PANEL_KEYBOARD_STEP_PX: f64 = 10.0;

/// Tolerance used when checking that the default widths fill the row.
const ROW_TOTAL_EPSILON: f64 = 1e-9;

/// Size bounds, initial geometry, and keyboard tuning for a panel layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelLayoutConfig {
    pub left_min: f64,
    pub left_max: f64,
    pub center_min: f64,
    pub right_width_min_px: f64,
    pub right_width_max_px: f64,
    pub vertical_split_min: f64,
    pub vertical_split_max: f64,
    pub default_left: f64,
    pub default_center: f64,
    pub default_right: f64,
    pub default_vertical_split: f64,
    pub default_right_width_px: f64,
    pub default_right_collapsed: bool,
    /// Percent moved per keyboard step on the left and vertical handles.
    pub keyboard_step_percent: f64,
    /// Pixels moved per keyboard step on the right handle.
    pub keyboard_step_px: f64,
}

impl Default for PanelLayoutConfig {
    fn default() -> Self {
        Self {
            left_min: PANEL_LEFT_MIN,
            left_max: PANEL_LEFT_MAX,
            center_min: PANEL_CENTER_MIN,
            right_width_min_px: PANEL_RIGHT_WIDTH_MIN_PX,
            right_width_max_px: PANEL_RIGHT_WIDTH_MAX_PX,
            vertical_split_min: PANEL_VERTICAL_SPLIT_MIN,
            vertical_split_max: PANEL_VERTICAL_SPLIT_MAX,
            default_left: PANEL_DEFAULT_LEFT,
            default_center: PANEL_DEFAULT_CENTER,
            default_right: PANEL_DEFAULT_RIGHT,
            default_vertical_split: PANEL_DEFAULT_VERTICAL_SPLIT,
            default_right_width_px: PANEL_DEFAULT_RIGHT_WIDTH_PX,
            default_right_collapsed: true,
            keyboard_step_percent: PANEL_KEYBOARD_STEP_PERCENT,
            keyboard_step_px: PANEL_KEYBOARD_STEP_PX,
        }
    }
}

impl PanelLayoutConfig {
    /// Validate bounds and defaults.
    pub fn validate(&self) -> Result<(), PanelLayoutConfigError> {
        for (field, value) in [
            ("left_min", self.left_min),
            ("left_max", self.left_max),
            ("center_min", self.center_min),
            ("vertical_split_min", self.vertical_split_min),
            ("vertical_split_max", self.vertical_split_max),
            ("default_left", self.default_left),
            ("default_center", self.default_center),
            ("default_right", self.default_right),
            ("default_vertical_split", self.default_vertical_split),
        ] {
            if !is_percent(value) {
                return Err(PanelLayoutConfigError::PercentOutOfRange { field, value });
            }
        }
        for (field, value) in [
            ("right_width_min_px", self.right_width_min_px),
            ("right_width_max_px", self.right_width_max_px),
            ("default_right_width_px", self.default_right_width_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PanelLayoutConfigError::InvalidPixelWidth { field, value });
            }
        }
        for (field, value) in [
            ("keyboard_step_percent", self.keyboard_step_percent),
            ("keyboard_step_px", self.keyboard_step_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PanelLayoutConfigError::InvalidKeyboardStep { field, value });
            }
        }

        check_range("left", self.left_min, self.left_max)?;
        check_range(
            "right_width_px",
            self.right_width_min_px,
            self.right_width_max_px,
        )?;
        check_range(
            "vertical_split",
            self.vertical_split_min,
            self.vertical_split_max,
        )?;
        if self.left_max + self.center_min > PERCENT_MAX {
            return Err(PanelLayoutConfigError::LeftMaxSqueezesCenter {
                left_max: self.left_max,
                center_min: self.center_min,
            });
        }

        check_default("default_left", self.default_left, self.left_min, self.left_max)?;
        check_default(
            "default_right_width_px",
            self.default_right_width_px,
            self.right_width_min_px,
            self.right_width_max_px,
        )?;
        check_default(
            "default_vertical_split",
            self.default_vertical_split,
            self.vertical_split_min,
            self.vertical_split_max,
        )?;
        if self.default_center < self.center_min {
            return Err(PanelLayoutConfigError::DefaultOutOfBounds {
                field: "default_center",
                value: self.default_center,
                min: self.center_min,
                max: PERCENT_MAX,
            });
        }

        let total = self.default_left + self.default_center + self.default_right;
        if (total - PERCENT_MAX).abs() > ROW_TOTAL_EPSILON {
            return Err(PanelLayoutConfigError::DefaultsDoNotFillRow { total });
        }
        Ok(())
    }
}

fn check_range(axis: &'static str, min: f64, max: f64) -> Result<(), PanelLayoutConfigError> {
    if max < min {
        return Err(PanelLayoutConfigError::InvertedBounds { axis, min, max });
    }
    Ok(())
}

fn check_default(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), PanelLayoutConfigError> {
    if value < min || value > max {
        return Err(PanelLayoutConfigError::DefaultOutOfBounds {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Panel layout configuration errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelLayoutConfigError {
    PercentOutOfRange {
        field: &'static str,
        value: f64,
    },
    InvalidPixelWidth {
        field: &'static str,
        value: f64,
    },
    InvalidKeyboardStep {
        field: &'static str,
        value: f64,
    },
    InvertedBounds {
        axis: &'static str,
        min: f64,
        max: f64,
    },
    DefaultOutOfBounds {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    DefaultsDoNotFillRow {
        total: f64,
    },
    LeftMaxSqueezesCenter {
        left_max: f64,
        center_min: f64,
    },
}

impl fmt::Display for PanelLayoutConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PercentOutOfRange { field, value } => {
                write!(f, "{field} must be a percentage in [0, 100] (got {value})")
            }
            Self::InvalidPixelWidth { field, value } => {
                write!(f, "{field} must be a finite, non-negative width (got {value})")
            }
            Self::InvalidKeyboardStep { field, value } => {
                write!(f, "{field} must be finite and > 0 (got {value})")
            }
            Self::InvertedBounds { axis, min, max } => {
                write!(f, "{axis} bounds are inverted (min={min}, max={max})")
            }
            Self::DefaultOutOfBounds {
                field,
                value,
                min,
                max,
            } => write!(f, "{field}={value} lies outside [{min}, {max}]"),
            Self::DefaultsDoNotFillRow { total } => {
                write!(f, "default left + center + right must equal 100 (got {total})")
            }
            Self::LeftMaxSqueezesCenter {
                left_max,
                center_min,
            } => write!(
                f,
                "left_max + center_min must not exceed 100 (got {left_max} + {center_min})"
            ),
        }
    }
}

impl std::error::Error for PanelLayoutConfigError {}
