#![forbid(unsafe_code)]

//! Scoped document-level listener lifecycle.
//!
//! During a drag the host listens for pointer moves and releases on the whole
//! document, not just on the grabbed handle. Those listeners must exist only
//! while a session is active. Adapters report when to attach and detach via
//! [`ListenerCommand`]; [`ListenerGuard`] applies the commands to a host and
//! detaches on drop, so an unmounted view never leaks listeners.

use serde::{Deserialize, Serialize};

/// Instruction to the host about its drag listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerCommand {
    Attach,
    Detach,
}

/// Cursor the host should show for the current drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorHint {
    Default,
    ColResize,
    RowResize,
    Grabbing,
}

impl CursorHint {
    /// CSS `cursor` keyword.
    #[must_use]
    pub const fn css_keyword(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::ColResize => "col-resize",
            Self::RowResize => "row-resize",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Host side of the listener lifecycle.
pub trait ListenerHost {
    /// Install document-level move/release listeners.
    fn attach(&mut self);
    /// Remove the listeners installed by [`ListenerHost::attach`].
    fn detach(&mut self);
}

impl<H: ListenerHost + ?Sized> ListenerHost for &mut H {
    fn attach(&mut self) {
        (**self).attach();
    }

    fn detach(&mut self) {
        (**self).detach();
    }
}

/// Tracks whether listeners are attached and decides the next command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ListenerState {
    attached: bool,
}

impl ListenerState {
    pub(crate) const fn new() -> Self {
        Self { attached: false }
    }

    pub(crate) const fn is_attached(self) -> bool {
        self.attached
    }

    /// Command needed to match listeners to the session state.
    pub(crate) fn sync(&mut self, dragging: bool) -> Option<ListenerCommand> {
        match (dragging, self.attached) {
            (true, false) => {
                self.attached = true;
                Some(ListenerCommand::Attach)
            }
            (false, true) => {
                self.attached = false;
                Some(ListenerCommand::Detach)
            }
            _ => None,
        }
    }
}

/// RAII owner of a host's drag listeners.
///
/// Apply every dispatch's command through [`ListenerGuard::apply`]. If the
/// guard is dropped while listeners are attached it detaches them.
#[derive(Debug)]
pub struct ListenerGuard<H: ListenerHost> {
    host: H,
    attached: bool,
}

impl<H: ListenerHost> ListenerGuard<H> {
    #[must_use]
    pub const fn new(host: H) -> Self {
        Self {
            host,
            attached: false,
        }
    }

    /// Forward a command to the host. Duplicate commands are dropped.
    pub fn apply(&mut self, command: Option<ListenerCommand>) {
        match command {
            Some(ListenerCommand::Attach) if !self.attached => {
                self.host.attach();
                self.attached = true;
            }
            Some(ListenerCommand::Detach) if self.attached => {
                self.host.detach();
                self.attached = false;
            }
            _ => {}
        }
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: ListenerHost> Drop for ListenerGuard<H> {
    fn drop(&mut self) {
        if self.attached {
            self.host.detach();
            self.attached = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct CountingHost {
        attached: u32,
        detached: u32,
    }

    impl ListenerHost for CountingHost {
        fn attach(&mut self) {
            self.attached += 1;
        }

        fn detach(&mut self) {
            self.detached += 1;
        }
    }

    #[test]
    fn listener_state_emits_one_command_per_edge() {
        let mut state = ListenerState::default();
        assert_eq!(state.sync(false), None);
        assert_eq!(state.sync(true), Some(ListenerCommand::Attach));
        assert_eq!(state.sync(true), None);
        assert!(state.is_attached());
        assert_eq!(state.sync(false), Some(ListenerCommand::Detach));
        assert_eq!(state.sync(false), None);
    }

    #[test]
    fn guard_ignores_duplicate_commands() {
        let mut host = CountingHost::default();
        {
            let mut guard = ListenerGuard::new(&mut host);
            guard.apply(Some(ListenerCommand::Attach));
            guard.apply(Some(ListenerCommand::Attach));
            guard.apply(None);
            guard.apply(Some(ListenerCommand::Detach));
            guard.apply(Some(ListenerCommand::Detach));
            assert!(!guard.is_attached());
        }
        assert_eq!((host.attached, host.detached), (1, 1));
    }

    #[test]
    fn dropping_attached_guard_detaches() {
        let mut host = CountingHost::default();
        {
            let mut guard = ListenerGuard::new(&mut host);
            guard.apply(Some(ListenerCommand::Attach));
        }
        assert_eq!((host.attached, host.detached), (1, 1));
    }

    #[test]
    fn guard_detaches_during_unwind() {
        let mut host = CountingHost::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut guard = ListenerGuard::new(&mut host);
            guard.apply(Some(ListenerCommand::Attach));
            panic!("view torn down mid-drag");
        }));
        assert!(result.is_err());
        assert_eq!((host.attached, host.detached), (1, 1));
    }

    #[test]
    fn cursor_keywords() {
        assert_eq!(CursorHint::ColResize.css_keyword(), "col-resize");
        assert_eq!(CursorHint::RowResize.css_keyword(), "row-resize");
        assert_eq!(CursorHint::Grabbing.css_keyword(), "grabbing");
        assert_eq!(CursorHint::Default.css_keyword(), "default");
    }
}
