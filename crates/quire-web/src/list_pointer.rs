#![forbid(unsafe_code)]

//! Drag-and-drop adapter for reorderable lists.

use quire_core::debug;
use quire_reorder::{MoveDirection, ReorderOutcome, ReorderableList};

use crate::dispatch::{
    PointerAdapterConfig, PointerButton, PointerIgnoredReason, PointerLifecyclePhase,
    PointerLogEntry, SequenceCounter,
};
use crate::listener::{CursorHint, ListenerCommand, ListenerState};

/// Result of feeding one host event into [`ListPointerAdapter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPointerDispatch {
    pub outcome: Option<ReorderOutcome>,
    pub listener_command: Option<ListenerCommand>,
    pub cursor: Option<CursorHint>,
    pub log: PointerLogEntry,
}

impl ListPointerDispatch {
    const fn ignored(phase: PointerLifecyclePhase, reason: PointerIgnoredReason) -> Self {
        Self {
            outcome: None,
            listener_command: None,
            cursor: None,
            log: PointerLogEntry::ignored(phase, reason, None),
        }
    }

    /// Whether the host should persist the new order.
    #[must_use]
    pub const fn should_persist(&self) -> bool {
        matches!(self.outcome, Some(ReorderOutcome::Moved { .. }))
    }
}

/// Host adapter around a [`ReorderableList`].
#[derive(Debug, Clone)]
pub struct ListPointerAdapter<T> {
    config: PointerAdapterConfig,
    list: ReorderableList<T>,
    listeners: ListenerState,
    sequence: SequenceCounter,
}

impl<T> ListPointerAdapter<T> {
    #[must_use]
    pub const fn new(config: PointerAdapterConfig, list: ReorderableList<T>) -> Self {
        Self {
            config,
            list,
            listeners: ListenerState::new(),
            sequence: SequenceCounter::new(),
        }
    }

    #[must_use]
    pub const fn list(&self) -> &ReorderableList<T> {
        &self.list
    }

    pub fn items(&self) -> &[T] {
        self.list.items()
    }

    #[must_use]
    pub const fn listeners_attached(&self) -> bool {
        self.listeners.is_attached()
    }

    /// Swap in a fresh item list from the host. Cancels any drag first so
    /// stale indices never reach the new items.
    pub fn replace_items(&mut self, items: Vec<T>) -> (Vec<T>, Option<ListPointerDispatch>) {
        let dispatch = self
            .list
            .is_dragging()
            .then(|| self.end_session(PointerLifecyclePhase::ItemsReplaced));
        (self.list.replace_items(items), dispatch)
    }

    pub fn drag_start(&mut self, index: usize, button: PointerButton) -> ListPointerDispatch {
        let phase = PointerLifecyclePhase::DragStart;
        if button != self.config.activation_button {
            return ListPointerDispatch::ignored(phase, PointerIgnoredReason::ButtonNotAllowed);
        }
        let outcome = self.list.drag_start(index);
        self.finish(phase, outcome)
    }

    pub fn drag_enter(&mut self, index: usize) -> ListPointerDispatch {
        let outcome = self.list.drag_enter(index);
        self.finish(PointerLifecyclePhase::DragEnter, outcome)
    }

    pub fn drag_leave(&mut self) -> ListPointerDispatch {
        let outcome = self.list.drag_leave();
        self.finish(PointerLifecyclePhase::DragLeave, outcome)
    }

    pub fn drop(&mut self, target_index: usize) -> ListPointerDispatch {
        let outcome = self.list.drop(target_index);
        self.finish(PointerLifecyclePhase::Drop, outcome)
    }

    pub fn drag_end(&mut self) -> ListPointerDispatch {
        let outcome = self.list.drag_end();
        self.finish(PointerLifecyclePhase::DragEnd, outcome)
    }

    /// Move-up/move-down buttons and keyboard shortcuts.
    pub fn move_item(&mut self, index: usize, direction: MoveDirection) -> ListPointerDispatch {
        let outcome = self.list.move_item(index, direction);
        self.finish(PointerLifecyclePhase::KeyboardMove, outcome)
    }

    pub fn blur(&mut self) -> ListPointerDispatch {
        let phase = PointerLifecyclePhase::Blur;
        if !self.config.cancel_on_blur {
            return ListPointerDispatch::ignored(phase, PointerIgnoredReason::DisabledByConfig);
        }
        self.end_session(phase)
    }

    pub fn visibility_hidden(&mut self) -> ListPointerDispatch {
        let phase = PointerLifecyclePhase::VisibilityHidden;
        if !self.config.cancel_on_hidden {
            return ListPointerDispatch::ignored(phase, PointerIgnoredReason::DisabledByConfig);
        }
        self.end_session(phase)
    }

    /// The view is unmounting.
    pub fn teardown(&mut self) -> ListPointerDispatch {
        self.end_session(PointerLifecyclePhase::Teardown)
    }

    fn end_session(&mut self, phase: PointerLifecyclePhase) -> ListPointerDispatch {
        if !self.list.is_dragging() {
            return ListPointerDispatch::ignored(phase, PointerIgnoredReason::NoActiveSession);
        }
        let outcome = self.list.drag_end();
        self.finish(phase, outcome)
    }

    fn finish(
        &mut self,
        phase: PointerLifecyclePhase,
        outcome: ReorderOutcome,
    ) -> ListPointerDispatch {
        let listener_command = self.listeners.sync(self.list.is_dragging());
        let cursor = listener_command.map(|command| match command {
            ListenerCommand::Attach => CursorHint::Grabbing,
            ListenerCommand::Detach => CursorHint::Default,
        });
        let sequence = self.sequence.next();
        debug!(
            phase = ?phase,
            sequence,
            outcome = ?outcome,
            listener_command = ?listener_command,
            "list pointer dispatch"
        );
        ListPointerDispatch {
            outcome: Some(outcome),
            listener_command,
            cursor,
            log: PointerLogEntry::forwarded(phase, sequence, None, listener_command),
        }
    }
}

impl<T> Default for ListPointerAdapter<T> {
    fn default() -> Self {
        Self::new(PointerAdapterConfig::default(), ReorderableList::default())
    }
}
