#![forbid(unsafe_code)]

//! Pointer adapter for the three-panel layout.
//!
//! Host pointer events are filtered here (button, pointer id) before they
//! reach [`PanelLayoutController`]. Each call returns one
//! [`PanelPointerDispatch`] carrying the controller transition, the listener
//! command the host must apply, and a log record.

use quire_core::debug;
use quire_core::geometry::{AnchorRect, PointerPosition};
use quire_layout::{
    PanelCancelReason, PanelLayoutController, PanelLayoutState, PanelLayoutTransition,
    PanelResizeAxis,
};

use crate::dispatch::{
    PointerAdapterConfig, PointerButton, PointerIgnoredReason, PointerLifecyclePhase,
    PointerLogEntry, SequenceCounter,
};
use crate::listener::{CursorHint, ListenerCommand, ListenerState};

/// Result of feeding one host event into [`PanelPointerAdapter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPointerDispatch {
    pub transition: Option<PanelLayoutTransition>,
    pub listener_command: Option<ListenerCommand>,
    /// Present whenever `listener_command` is.
    pub cursor: Option<CursorHint>,
    pub log: PointerLogEntry,
}

impl PanelPointerDispatch {
    const fn ignored(
        phase: PointerLifecyclePhase,
        reason: PointerIgnoredReason,
        pointer_id: Option<u32>,
    ) -> Self {
        Self {
            transition: None,
            listener_command: None,
            cursor: None,
            log: PointerLogEntry::ignored(phase, reason, pointer_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActivePointer {
    pointer_id: u32,
    button: PointerButton,
}

/// Cursor shown while dragging a handle on `axis`.
#[must_use]
pub const fn cursor_for_axis(axis: PanelResizeAxis) -> CursorHint {
    match axis {
        PanelResizeAxis::HorizontalLeft | PanelResizeAxis::HorizontalRight => {
            CursorHint::ColResize
        }
        PanelResizeAxis::Vertical => CursorHint::RowResize,
    }
}

/// Deterministic pointer lifecycle adapter for [`PanelLayoutController`].
#[derive(Debug, Clone)]
pub struct PanelPointerAdapter {
    config: PointerAdapterConfig,
    controller: PanelLayoutController,
    active: Option<ActivePointer>,
    listeners: ListenerState,
    sequence: SequenceCounter,
}

impl PanelPointerAdapter {
    #[must_use]
    pub const fn new(config: PointerAdapterConfig, controller: PanelLayoutController) -> Self {
        Self {
            config,
            controller,
            active: None,
            listeners: ListenerState::new(),
            sequence: SequenceCounter::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> PointerAdapterConfig {
        self.config
    }

    #[must_use]
    pub const fn controller(&self) -> &PanelLayoutController {
        &self.controller
    }

    #[must_use]
    pub const fn state(&self) -> PanelLayoutState {
        self.controller.state()
    }

    /// Pointer id that owns the active drag, if any.
    #[must_use]
    pub fn active_pointer_id(&self) -> Option<u32> {
        self.active.map(|active| active.pointer_id)
    }

    /// Whether the host currently has document listeners attached.
    #[must_use]
    pub const fn listeners_attached(&self) -> bool {
        self.listeners.is_attached()
    }

    /// Press on a resize handle.
    pub fn pointer_down(
        &mut self,
        pointer_id: u32,
        button: PointerButton,
        axis: PanelResizeAxis,
        anchor: AnchorRect,
    ) -> PanelPointerDispatch {
        let phase = PointerLifecyclePhase::PointerDown;
        if button != self.config.activation_button {
            return PanelPointerDispatch::ignored(
                phase,
                PointerIgnoredReason::ButtonNotAllowed,
                Some(pointer_id),
            );
        }
        let transition = self.controller.begin_drag(axis, anchor);
        if !transition.is_noop() {
            self.active = Some(ActivePointer { pointer_id, button });
        }
        self.finish(phase, Some(pointer_id), Some(transition))
    }

    /// Document-level pointer move.
    pub fn pointer_move(
        &mut self,
        pointer_id: u32,
        position: PointerPosition,
    ) -> PanelPointerDispatch {
        let phase = PointerLifecyclePhase::PointerMove;
        if let Err(reason) = self.check_pointer(Some(pointer_id)) {
            return PanelPointerDispatch::ignored(phase, reason, Some(pointer_id));
        }
        let transition = self.controller.update_drag(position);
        self.finish(phase, Some(pointer_id), Some(transition))
    }

    /// Document-level pointer release.
    pub fn pointer_up(&mut self, pointer_id: u32, button: PointerButton) -> PanelPointerDispatch {
        let phase = PointerLifecyclePhase::PointerUp;
        if let Err(reason) = self.check_pointer(Some(pointer_id)) {
            return PanelPointerDispatch::ignored(phase, reason, Some(pointer_id));
        }
        if self.active.is_some_and(|active| active.button != button) {
            return PanelPointerDispatch::ignored(
                phase,
                PointerIgnoredReason::ButtonMismatch,
                Some(pointer_id),
            );
        }
        let transition = self.controller.end_drag();
        self.finish(phase, Some(pointer_id), Some(transition))
    }

    /// Host `pointercancel`. `None` matches any active pointer.
    pub fn pointer_cancel(&mut self, pointer_id: Option<u32>) -> PanelPointerDispatch {
        self.cancel_active(
            PointerLifecyclePhase::PointerCancel,
            pointer_id,
            PanelCancelReason::PointerCancel,
        )
    }

    /// Host `lostpointercapture`.
    pub fn lost_pointer_capture(&mut self, pointer_id: u32) -> PanelPointerDispatch {
        self.cancel_active(
            PointerLifecyclePhase::LostPointerCapture,
            Some(pointer_id),
            PanelCancelReason::LostCapture,
        )
    }

    /// Window lost focus.
    pub fn blur(&mut self) -> PanelPointerDispatch {
        let phase = PointerLifecyclePhase::Blur;
        if !self.config.cancel_on_blur {
            return PanelPointerDispatch::ignored(
                phase,
                PointerIgnoredReason::DisabledByConfig,
                None,
            );
        }
        self.cancel_active(phase, None, PanelCancelReason::Blur)
    }

    /// Document became hidden.
    pub fn visibility_hidden(&mut self) -> PanelPointerDispatch {
        let phase = PointerLifecyclePhase::VisibilityHidden;
        if !self.config.cancel_on_hidden {
            return PanelPointerDispatch::ignored(
                phase,
                PointerIgnoredReason::DisabledByConfig,
                None,
            );
        }
        self.cancel_active(phase, None, PanelCancelReason::FocusLost)
    }

    /// Keyboard resize of a handle, e.g. arrow keys on a focused separator.
    pub fn keyboard_nudge(&mut self, axis: PanelResizeAxis, steps: i32) -> PanelPointerDispatch {
        let transition = self.controller.nudge(axis, steps);
        self.finish(PointerLifecyclePhase::KeyboardNudge, None, Some(transition))
    }

    /// Collapse/expand button on the right column.
    pub fn toggle_right_panel(&mut self) -> PanelPointerDispatch {
        let transition = self.controller.toggle_right_panel_collapsed();
        self.finish(PointerLifecyclePhase::ToggleCollapse, None, Some(transition))
    }

    /// The view is unmounting. Cancels any drag and releases listeners.
    pub fn teardown(&mut self) -> PanelPointerDispatch {
        self.cancel_active(
            PointerLifecyclePhase::Teardown,
            None,
            PanelCancelReason::Teardown,
        )
    }

    fn check_pointer(&self, pointer_id: Option<u32>) -> Result<(), PointerIgnoredReason> {
        let Some(active) = self.active else {
            return Err(PointerIgnoredReason::NoActiveSession);
        };
        match pointer_id {
            Some(id) if id != active.pointer_id => Err(PointerIgnoredReason::PointerMismatch),
            _ => Ok(()),
        }
    }

    fn cancel_active(
        &mut self,
        phase: PointerLifecyclePhase,
        pointer_id: Option<u32>,
        reason: PanelCancelReason,
    ) -> PanelPointerDispatch {
        if let Err(ignored) = self.check_pointer(pointer_id) {
            return PanelPointerDispatch::ignored(phase, ignored, pointer_id);
        }
        let transition = self.controller.cancel_drag(reason);
        self.finish(phase, pointer_id, transition)
    }

    fn finish(
        &mut self,
        phase: PointerLifecyclePhase,
        pointer_id: Option<u32>,
        transition: Option<PanelLayoutTransition>,
    ) -> PanelPointerDispatch {
        let drag_axis = self.controller.drag_axis();
        if drag_axis.is_none() {
            self.active = None;
        }
        let listener_command = self.listeners.sync(drag_axis.is_some());
        let cursor = listener_command.map(|command| match (command, drag_axis) {
            (ListenerCommand::Attach, Some(axis)) => cursor_for_axis(axis),
            _ => CursorHint::Default,
        });
        let sequence = self.sequence.next();
        debug!(
            phase = ?phase,
            sequence,
            effect = ?transition.map(|transition| transition.effect),
            listener_command = ?listener_command,
            "panel pointer dispatch"
        );
        PanelPointerDispatch {
            transition,
            listener_command,
            cursor,
            log: PointerLogEntry::forwarded(phase, sequence, pointer_id, listener_command),
        }
    }
}

impl Default for PanelPointerAdapter {
    fn default() -> Self {
        Self::new(PointerAdapterConfig::default(), PanelLayoutController::default())
    }
}
