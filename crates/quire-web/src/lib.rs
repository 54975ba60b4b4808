#![forbid(unsafe_code)]

//! Host adapters for the Quire layout and reorder controllers.
//!
//! # Role in Quire
//! The controllers in `quire-layout` and `quire-reorder` are pure state
//! machines. This crate sits between them and a browser-style host: it
//! filters raw pointer events, forwards the survivors, and tells the host
//! when to attach or detach document-level drag listeners and which cursor
//! to show.
//!
//! # Listener contract
//! For every adapter, each [`ListenerCommand::Attach`] is followed by exactly
//! one [`ListenerCommand::Detach`] before the next `Attach`. Release, drop,
//! cancel, blur, visibility loss, and [`PanelPointerAdapter::teardown`] all
//! detach. Wrap the host in a [`ListenerGuard`] so dropping the view detaches
//! too.

pub mod dispatch;
pub mod list_pointer;
pub mod listener;
pub mod panel_pointer;

pub use dispatch::{
    PointerAdapterConfig, PointerButton, PointerIgnoredReason, PointerLifecyclePhase,
    PointerLogEntry, PointerLogOutcome,
};
pub use list_pointer::{ListPointerAdapter, ListPointerDispatch};
pub use listener::{CursorHint, ListenerCommand, ListenerGuard, ListenerHost};
pub use panel_pointer::{PanelPointerAdapter, PanelPointerDispatch, cursor_for_axis};
