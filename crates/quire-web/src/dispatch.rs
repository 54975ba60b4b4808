#![forbid(unsafe_code)]

//! Shared adapter vocabulary: buttons, lifecycle phases, and log records.

use serde::{Deserialize, Serialize};

use crate::listener::ListenerCommand;

/// Pointer button reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Adapter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerAdapterConfig {
    /// Button required to begin a drag.
    pub activation_button: PointerButton,
    /// Cancel an active drag when the window loses focus.
    pub cancel_on_blur: bool,
    /// Cancel an active drag when the document becomes hidden.
    pub cancel_on_hidden: bool,
}

impl Default for PointerAdapterConfig {
    fn default() -> Self {
        Self {
            activation_button: PointerButton::Primary,
            cancel_on_blur: true,
            cancel_on_hidden: true,
        }
    }
}

/// Host event that produced one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerLifecyclePhase {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    LostPointerCapture,
    Blur,
    VisibilityHidden,
    KeyboardNudge,
    ToggleCollapse,
    DragStart,
    DragEnter,
    DragLeave,
    Drop,
    DragEnd,
    KeyboardMove,
    ItemsReplaced,
    Teardown,
}

/// Why an incoming host event was not forwarded to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerIgnoredReason {
    ButtonNotAllowed,
    ButtonMismatch,
    PointerMismatch,
    NoActiveSession,
    DisabledByConfig,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum PointerLogOutcome {
    /// The controller saw the event (it may still have reported a no-op).
    Forwarded,
    Ignored(PointerIgnoredReason),
}

/// Structured record of one adapter dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerLogEntry {
    pub phase: PointerLifecyclePhase,
    /// Assigned only to forwarded events.
    pub sequence: Option<u64>,
    pub pointer_id: Option<u32>,
    pub listener_command: Option<ListenerCommand>,
    pub outcome: PointerLogOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SequenceCounter {
    next: u64,
}

impl PointerLogEntry {
    pub(crate) const fn ignored(
        phase: PointerLifecyclePhase,
        reason: PointerIgnoredReason,
        pointer_id: Option<u32>,
    ) -> Self {
        Self {
            phase,
            sequence: None,
            pointer_id,
            listener_command: None,
            outcome: PointerLogOutcome::Ignored(reason),
        }
    }

    pub(crate) const fn forwarded(
        phase: PointerLifecyclePhase,
        sequence: u64,
        pointer_id: Option<u32>,
        listener_command: Option<ListenerCommand>,
    ) -> Self {
        Self {
            phase,
            sequence: Some(sequence),
            pointer_id,
            listener_command,
            outcome: PointerLogOutcome::Forwarded,
        }
    }
}

impl SequenceCounter {
    pub(crate) const fn new() -> Self {
        Self { next: 1 }
    }

    pub(crate) fn next(&mut self) -> u64 {
        let sequence = self.next;
        self.next = self.next.saturating_add(1);
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_counter_starts_at_one() {
        let mut counter = SequenceCounter::new();
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
    }

    #[test]
    fn log_outcome_serializes_adjacently_tagged() {
        let value = serde_json::to_value(PointerLogOutcome::Ignored(
            PointerIgnoredReason::ButtonNotAllowed,
        ))
        .expect("outcome serializes");
        assert_eq!(
            value,
            serde_json::json!({ "outcome": "ignored", "reason": "button_not_allowed" })
        );
    }
}
