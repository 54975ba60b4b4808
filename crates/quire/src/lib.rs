#![forbid(unsafe_code)]

//! Quire public facade crate.
//!
//! Re-exports the layout and reorder controllers, plus the host adapters
//! when the `web` feature is on, and offers a small prelude.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use quire_core::geometry::{AnchorRect, PointerPosition};
#[cfg(feature = "tracing-json")]
pub use quire_core::logging::init_json_subscriber;

// --- Layout re-exports -----------------------------------------------------

pub use quire_layout::{
    PanelCancelReason, PanelLayoutConfig, PanelLayoutConfigError, PanelLayoutController,
    PanelLayoutEffect, PanelLayoutNoopReason, PanelLayoutState, PanelLayoutTransition,
    PanelRects, PanelResize, PanelResizeAxis,
};

// --- Reorder re-exports ----------------------------------------------------

pub use quire_reorder::{
    MoveDirection, ReorderIgnoredReason, ReorderOutcome, ReorderableList, is_permutation_of,
};

// --- Web re-exports --------------------------------------------------------

#[cfg(feature = "web")]
pub use quire_web::{
    CursorHint, ListPointerAdapter, ListPointerDispatch, ListenerCommand, ListenerGuard,
    ListenerHost, PanelPointerAdapter, PanelPointerDispatch, PointerAdapterConfig, PointerButton,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Quire.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Panel layout configuration failed validation.
    LayoutConfig(PanelLayoutConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LayoutConfig(err) => write!(f, "invalid panel layout config: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LayoutConfig(err) => Some(err),
        }
    }
}

impl From<PanelLayoutConfigError> for Error {
    fn from(err: PanelLayoutConfigError) -> Self {
        Self::LayoutConfig(err)
    }
}

/// Standard result type for Quire APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Build a layout controller from a config, validating it first.
pub fn panel_controller(config: PanelLayoutConfig) -> Result<PanelLayoutController> {
    Ok(PanelLayoutController::new(config)?)
}

/// Build a pointer adapter around a freshly validated layout controller.
#[cfg(feature = "web")]
pub fn panel_adapter(
    layout: PanelLayoutConfig,
    pointer: PointerAdapterConfig,
) -> Result<PanelPointerAdapter> {
    Ok(PanelPointerAdapter::new(pointer, panel_controller(layout)?))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AnchorRect, Error, MoveDirection, PanelLayoutConfig, PanelLayoutController,
        PanelResizeAxis, PointerPosition, ReorderOutcome, ReorderableList, Result,
    };

    #[cfg(feature = "web")]
    pub use crate::{
        ListPointerAdapter, ListenerCommand, ListenerGuard, ListenerHost, PanelPointerAdapter,
        PointerButton,
    };

    pub use crate::{core, layout, reorder};
    #[cfg(feature = "web")]
    pub use crate::web;
}

pub use quire_core as core;
pub use quire_layout as layout;
pub use quire_reorder as reorder;
#[cfg(feature = "web")]
pub use quire_web as web;
