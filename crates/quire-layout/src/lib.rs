#![forbid(unsafe_code)]

//! Three-panel workspace layout controller.
//!
//! # Role in Quire
//! `quire-layout` owns the geometry of the writing workspace: a left column
//! (split into preview and list regions), a center column, and a collapsible
//! right column. It converts pointer drags on the resize handles into valid
//! state transitions and never renders anything itself.
//!
//! # Invariants
//! With the default [`PanelLayoutConfig`]:
//! - `15 <= left <= 40`
//! - `center >= 30` (violating resizes are rejected, not clamped)
//! - `200 <= right_panel_width_px <= 500`
//! - `20 <= vertical_split <= 80`
//! - `left + center + right == 100`
//! - at most one drag session at a time

pub mod config;
pub mod controller;
pub mod panel;

pub use config::{PanelLayoutConfig, PanelLayoutConfigError};
pub use controller::{
    PanelCancelReason, PanelLayoutController, PanelLayoutEffect, PanelLayoutNoopReason,
    PanelLayoutTransition, PanelResize,
};
pub use panel::{PanelDragSession, PanelLayoutState, PanelRects, PanelResizeAxis};
pub use quire_core::geometry::{AnchorRect, PointerPosition};
