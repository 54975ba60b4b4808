#![forbid(unsafe_code)]

//! Drag/resize lifecycle for the three-panel workspace.
//!
//! ```text
//! Idle -> (begin_drag) -> Dragging(axis) -> (update_drag)* -> (end_drag) -> Idle
//! ```
//!
//! Collapse/expand of the right column is independent of the drag machine
//! and valid in any state. Every operation is total: stray or malformed input
//! produces a [`PanelLayoutEffect::Noop`] with a reason instead of an error.

use quire_core::geometry::{AnchorRect, PointerPosition};
use quire_core::percent::clamp_percent;
use quire_core::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::{PanelLayoutConfig, PanelLayoutConfigError};
use crate::panel::{
    PanelDragSession, PanelLayoutState, PanelResizeAxis, resize_left_edge, resize_right_edge,
    resize_vertical_split,
};

/// Explicit no-op diagnostics for events that are safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelLayoutNoopReason {
    IdleWithoutActiveDrag,
    ActiveDragAlreadyInProgress,
    ActiveStateDisallowsDiscreteInput,
    CenterBelowMinimum,
    DegenerateAnchor,
    NonFinitePointer,
    RightPanelUnchanged,
}

/// Why a drag session ended without a pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelCancelReason {
    PointerCancel,
    LostCapture,
    FocusLost,
    Blur,
    Teardown,
    Programmatic,
}

/// Size change applied by one accepted resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "edge", rename_all = "snake_case")]
pub enum PanelResize {
    Left { left: f64, center: f64 },
    RightWidth { width_px: f64 },
    VerticalSplit { split: f64 },
}

/// Effect emitted by one controller step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum PanelLayoutEffect {
    DragBegan {
        axis: PanelResizeAxis,
        anchor: AnchorRect,
    },
    Resized {
        axis: PanelResizeAxis,
        resize: PanelResize,
    },
    KeyboardApplied {
        axis: PanelResizeAxis,
        steps: i32,
        resize: PanelResize,
    },
    DragEnded {
        axis: PanelResizeAxis,
    },
    Canceled {
        axis: PanelResizeAxis,
        reason: PanelCancelReason,
    },
    RightPanelToggled {
        collapsed: bool,
    },
    Noop {
        reason: PanelLayoutNoopReason,
    },
}

/// One controller transition with before/after snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelLayoutTransition {
    pub transition_id: u64,
    pub from: PanelLayoutState,
    pub to: PanelLayoutState,
    pub effect: PanelLayoutEffect,
}

impl PanelLayoutTransition {
    /// Whether the transition changed any geometry or session state.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// Whether the step was ignored.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self.effect, PanelLayoutEffect::Noop { .. })
    }
}

/// Runtime controller for the three-panel workspace.
///
/// Owns a [`PanelLayoutState`] and mutates it only through pointer-drag
/// updates, keyboard nudges, and the collapse toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayoutController {
    config: PanelLayoutConfig,
    state: PanelLayoutState,
    transition_counter: u64,
}

impl Default for PanelLayoutController {
    fn default() -> Self {
        let config = PanelLayoutConfig::default();
        Self {
            state: PanelLayoutState::from_config(&config),
            config,
            transition_counter: 0,
        }
    }
}

impl PanelLayoutController {
    /// Construct a controller from a validated config.
    pub fn new(config: PanelLayoutConfig) -> Result<Self, PanelLayoutConfigError> {
        config.validate()?;
        Ok(Self {
            state: PanelLayoutState::from_config(&config),
            config,
            transition_counter: 0,
        })
    }

    /// Current geometry and session.
    #[must_use]
    pub const fn state(&self) -> PanelLayoutState {
        self.state
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PanelLayoutConfig {
        &self.config
    }

    /// Whether a drag session is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Axis of the active drag session, if any.
    #[must_use]
    pub fn drag_axis(&self) -> Option<PanelResizeAxis> {
        self.state.drag_session.map(|session| session.axis)
    }

    /// Right column width actually drawn.
    #[must_use]
    pub fn effective_right_width_px(&self) -> f64 {
        self.state.effective_right_width_px()
    }

    /// Start a drag session on `axis`, measured against `anchor`.
    ///
    /// Rejected while another session is active; the first session keeps its
    /// axis and anchor.
    pub fn begin_drag(&mut self, axis: PanelResizeAxis, anchor: AnchorRect) -> PanelLayoutTransition {
        let from = self.state;
        let effect = if self.state.is_dragging() {
            debug!(
                requested = ?axis,
                active = ?self.drag_axis(),
                "panel drag rejected: session already active"
            );
            PanelLayoutEffect::Noop {
                reason: PanelLayoutNoopReason::ActiveDragAlreadyInProgress,
            }
        } else {
            self.state.drag_session = Some(PanelDragSession { axis, anchor });
            debug!(axis = ?axis, "panel drag began");
            PanelLayoutEffect::DragBegan { axis, anchor }
        };
        self.record(from, effect)
    }

    /// Apply a pointer position to the active drag session.
    ///
    /// Coordinates outside the anchor are clamped. Without an active session
    /// this is a no-op so stray moves after release are harmless.
    pub fn update_drag(&mut self, pointer: PointerPosition) -> PanelLayoutTransition {
        let from = self.state;
        let Some(session) = self.state.drag_session else {
            return self.record(
                from,
                PanelLayoutEffect::Noop {
                    reason: PanelLayoutNoopReason::IdleWithoutActiveDrag,
                },
            );
        };
        let effect = match self.resize_from_pointer(session, pointer) {
            Ok(resize) => {
                self.apply_resize(resize);
                trace!(axis = ?session.axis, resize = ?resize, "panel resized");
                PanelLayoutEffect::Resized {
                    axis: session.axis,
                    resize,
                }
            }
            Err(reason) => {
                debug!(axis = ?session.axis, reason = ?reason, "panel resize ignored");
                PanelLayoutEffect::Noop { reason }
            }
        };
        self.record(from, effect)
    }

    /// End the active drag session. Idempotent.
    pub fn end_drag(&mut self) -> PanelLayoutTransition {
        let from = self.state;
        let effect = match self.state.drag_session.take() {
            Some(session) => {
                debug!(axis = ?session.axis, "panel drag ended");
                PanelLayoutEffect::DragEnded { axis: session.axis }
            }
            None => PanelLayoutEffect::Noop {
                reason: PanelLayoutNoopReason::IdleWithoutActiveDrag,
            },
        };
        self.record(from, effect)
    }

    /// End the active drag session because of an interruption.
    ///
    /// Returns `None` when no session was active.
    pub fn cancel_drag(&mut self, reason: PanelCancelReason) -> Option<PanelLayoutTransition> {
        let from = self.state;
        let session = self.state.drag_session.take()?;
        debug!(axis = ?session.axis, reason = ?reason, "panel drag canceled");
        Some(self.record(
            from,
            PanelLayoutEffect::Canceled {
                axis: session.axis,
                reason,
            },
        ))
    }

    /// Unconditionally return to Idle, for teardown paths.
    ///
    /// Returns `None` if the controller was already Idle.
    pub fn force_cancel(&mut self) -> Option<PanelLayoutTransition> {
        self.cancel_drag(PanelCancelReason::Programmatic)
    }

    /// Flip the right column between collapsed and expanded.
    ///
    /// The pixel width is kept, so re-expanding restores the previous width.
    pub fn toggle_right_panel_collapsed(&mut self) -> PanelLayoutTransition {
        let from = self.state;
        self.state.right_panel_collapsed = !self.state.right_panel_collapsed;
        let collapsed = self.state.right_panel_collapsed;
        debug!(collapsed, "right panel toggled");
        self.record(from, PanelLayoutEffect::RightPanelToggled { collapsed })
    }

    /// Collapse or expand the right column explicitly.
    pub fn set_right_panel_collapsed(&mut self, collapsed: bool) -> PanelLayoutTransition {
        if self.state.right_panel_collapsed == collapsed {
            let from = self.state;
            return self.record(
                from,
                PanelLayoutEffect::Noop {
                    reason: PanelLayoutNoopReason::RightPanelUnchanged,
                },
            );
        }
        self.toggle_right_panel_collapsed()
    }

    /// Keyboard fallback: move a handle by `steps` increments.
    ///
    /// Positive steps move the handle right (or down). Each step is
    /// `keyboard_step_percent` on percentage handles and `keyboard_step_px`
    /// on the right handle. The same bounds and center rule as pointer drags
    /// apply. Ignored while a pointer drag is active.
    pub fn nudge(&mut self, axis: PanelResizeAxis, steps: i32) -> PanelLayoutTransition {
        let from = self.state;
        if self.state.is_dragging() {
            return self.record(
                from,
                PanelLayoutEffect::Noop {
                    reason: PanelLayoutNoopReason::ActiveStateDisallowsDiscreteInput,
                },
            );
        }
        let delta = f64::from(steps);
        let outcome = match axis {
            PanelResizeAxis::HorizontalLeft => {
                let requested = self.state.left + delta * self.config.keyboard_step_percent;
                resize_left_edge(&self.state, &self.config, requested)
                    .map(|resize| PanelResize::Left {
                        left: resize.left,
                        center: resize.center,
                    })
                    .map_err(|_| PanelLayoutNoopReason::CenterBelowMinimum)
            }
            PanelResizeAxis::HorizontalRight => {
                // Moving the handle right shrinks the right column.
                let requested =
                    self.state.right_panel_width_px - delta * self.config.keyboard_step_px;
                Ok(PanelResize::RightWidth {
                    width_px: resize_right_edge(&self.config, requested),
                })
            }
            PanelResizeAxis::Vertical => {
                let requested =
                    self.state.vertical_split + delta * self.config.keyboard_step_percent;
                Ok(PanelResize::VerticalSplit {
                    split: resize_vertical_split(&self.config, requested),
                })
            }
        };
        let effect = match outcome {
            Ok(resize) => {
                self.apply_resize(resize);
                debug!(axis = ?axis, steps, "panel nudged");
                PanelLayoutEffect::KeyboardApplied {
                    axis,
                    steps,
                    resize,
                }
            }
            Err(reason) => PanelLayoutEffect::Noop { reason },
        };
        self.record(from, effect)
    }

    fn resize_from_pointer(
        &self,
        session: PanelDragSession,
        pointer: PointerPosition,
    ) -> Result<PanelResize, PanelLayoutNoopReason> {
        let anchor = session.anchor;
        match session.axis {
            PanelResizeAxis::HorizontalLeft => {
                if !pointer.x.is_finite() {
                    return Err(PanelLayoutNoopReason::NonFinitePointer);
                }
                let mouse_pct = anchor
                    .horizontal_percent(pointer.x)
                    .ok_or(PanelLayoutNoopReason::DegenerateAnchor)?;
                let resize = resize_left_edge(&self.state, &self.config, clamp_percent(mouse_pct))
                    .map_err(|_| PanelLayoutNoopReason::CenterBelowMinimum)?;
                Ok(PanelResize::Left {
                    left: resize.left,
                    center: resize.center,
                })
            }
            PanelResizeAxis::HorizontalRight => {
                if !pointer.x.is_finite() {
                    return Err(PanelLayoutNoopReason::NonFinitePointer);
                }
                let distance = anchor
                    .distance_from_right(pointer.x)
                    .ok_or(PanelLayoutNoopReason::DegenerateAnchor)?;
                Ok(PanelResize::RightWidth {
                    width_px: resize_right_edge(&self.config, distance),
                })
            }
            PanelResizeAxis::Vertical => {
                if !pointer.y.is_finite() {
                    return Err(PanelLayoutNoopReason::NonFinitePointer);
                }
                let mouse_pct = anchor
                    .vertical_percent(pointer.y)
                    .ok_or(PanelLayoutNoopReason::DegenerateAnchor)?;
                Ok(PanelResize::VerticalSplit {
                    split: resize_vertical_split(&self.config, clamp_percent(mouse_pct)),
                })
            }
        }
    }

    fn apply_resize(&mut self, resize: PanelResize) {
        match resize {
            PanelResize::Left { left, center } => {
                self.state.left = left;
                self.state.center = center;
            }
            PanelResize::RightWidth { width_px } => self.state.right_panel_width_px = width_px,
            PanelResize::VerticalSplit { split } => self.state.vertical_split = split,
        }
    }

    fn record(&mut self, from: PanelLayoutState, effect: PanelLayoutEffect) -> PanelLayoutTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        PanelLayoutTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state,
            effect,
        }
    }
}
