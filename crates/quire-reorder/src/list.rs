#![forbid(unsafe_code)]

//! Drag-and-drop and keyboard reordering of an owned item list.
//!
//! ```text
//! Idle -> (drag_start) -> Dragging { source, hover, nesting }
//!   Dragging -> (drag_enter | drag_leave)* -> Dragging
//!   Dragging -> (drop | drag_end) -> Idle
//! ```
//!
//! `move_item` is the discrete fallback for keyboard and button input. It is
//! independent of the drag machine.
//!
//! Every operation is total. Indices that no longer match the list (the host
//! may have removed items while a drag was in flight) produce
//! [`ReorderOutcome::Ignored`] rather than a panic.

use quire_core::{debug, trace};
use serde::{Deserialize, Serialize};

/// Direction of a discrete move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Toward index 0.
    Up,
    /// Toward the end of the list.
    Down,
}

impl MoveDirection {
    /// Signed index offset: `-1` for up, `+1` for down.
    #[must_use]
    pub const fn offset(self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
        }
    }

    /// Neighbour of `index` in this direction, if it exists in a list of `len`.
    #[must_use]
    pub fn neighbour(self, index: usize, len: usize) -> Option<usize> {
        let neighbour = match self {
            Self::Up => index.checked_sub(1)?,
            Self::Down => index.checked_add(1)?,
        };
        (index < len && neighbour < len).then_some(neighbour)
    }
}

/// Transient pointer drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderDragSession {
    /// Index of the item being dragged.
    pub source_index: usize,
    /// Item currently under the pointer, for hover styling only.
    pub hover_index: Option<usize>,
    /// Depth of enter events without a matching leave.
    pub nesting_counter: u32,
}

impl ReorderDragSession {
    const fn new(source_index: usize) -> Self {
        Self {
            source_index,
            hover_index: Some(source_index),
            nesting_counter: 0,
        }
    }
}

/// Why an operation left the list and session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderIgnoredReason {
    NoActiveSession,
    SessionAlreadyActive,
    IndexOutOfRange,
    AtBoundary,
}

/// Result of one reorder operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReorderOutcome {
    SessionStarted {
        source_index: usize,
    },
    SessionUpdated {
        hover_index: Option<usize>,
        nesting_counter: u32,
    },
    /// The item at `from` now lives at `to`. The host should persist the order.
    Moved {
        from: usize,
        to: usize,
    },
    /// A drop that resolved to the item's own position.
    Unchanged,
    SessionEnded,
    Ignored {
        reason: ReorderIgnoredReason,
    },
}

impl ReorderOutcome {
    /// Whether the item order changed.
    #[must_use]
    pub const fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    const fn ignored(reason: ReorderIgnoredReason) -> Self {
        Self::Ignored { reason }
    }
}

/// Index at which a dragged item is reinserted after being removed.
///
/// Removing the source shifts every later index down by one, so the target
/// is adjusted only when the source precedes it.
#[must_use]
pub const fn drop_insert_index(source_index: usize, target_index: usize) -> usize {
    if source_index < target_index {
        target_index - 1
    } else {
        target_index
    }
}

/// Ordered list that can be reordered by drag-and-drop or discrete moves.
///
/// Items are moved, never cloned, so element identity survives every
/// reorder and `T` needs no `Clone` bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderableList<T> {
    items: Vec<T>,
    session: Option<ReorderDragSession>,
}

impl<T> Default for ReorderableList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for ReorderableList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for ReorderableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> ReorderableList<T> {
    /// Wrap the list the host currently displays.
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self {
            items,
            session: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Project the current order into keys, e.g. ids for a "save order" call.
    pub fn order_by_key<K>(&self, key: impl FnMut(&T) -> K) -> Vec<K> {
        self.items.iter().map(key).collect()
    }

    /// Consume the list, returning the items in their current order.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Replace the items after a host-side change (insert, delete, refetch).
    ///
    /// An active session is kept; if its indices no longer fit, later drag
    /// events resolve to `IndexOutOfRange` no-ops.
    pub fn replace_items(&mut self, items: Vec<T>) -> Vec<T> {
        std::mem::replace(&mut self.items, items)
    }

    /// Active drag session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<ReorderDragSession> {
        self.session
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Item currently under the pointer during a drag.
    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.session.and_then(|session| session.hover_index)
    }

    /// Start dragging the item at `index`.
    ///
    /// Rejected while another session is active so an in-flight gesture is
    /// never overwritten.
    pub fn drag_start(&mut self, index: usize) -> ReorderOutcome {
        if self.session.is_some() {
            debug!(index, "reorder drag rejected: session already active");
            return ReorderOutcome::ignored(ReorderIgnoredReason::SessionAlreadyActive);
        }
        if index >= self.items.len() {
            return ReorderOutcome::ignored(ReorderIgnoredReason::IndexOutOfRange);
        }
        self.session = Some(ReorderDragSession::new(index));
        debug!(source_index = index, "reorder drag started");
        ReorderOutcome::SessionStarted {
            source_index: index,
        }
    }

    /// Pointer entered the element for `index` (or one of its children).
    pub fn drag_enter(&mut self, index: usize) -> ReorderOutcome {
        let len = self.items.len();
        let Some(session) = self.session.as_mut() else {
            return ReorderOutcome::ignored(ReorderIgnoredReason::NoActiveSession);
        };
        if index != session.source_index && index < len {
            session.hover_index = Some(index);
        }
        session.nesting_counter = session.nesting_counter.saturating_add(1);
        trace!(
            index,
            nesting = session.nesting_counter,
            "reorder drag enter"
        );
        ReorderOutcome::SessionUpdated {
            hover_index: session.hover_index,
            nesting_counter: session.nesting_counter,
        }
    }

    /// Pointer left an element. Clears the hover cue once every nested
    /// enter has been matched.
    pub fn drag_leave(&mut self) -> ReorderOutcome {
        let Some(session) = self.session.as_mut() else {
            return ReorderOutcome::ignored(ReorderIgnoredReason::NoActiveSession);
        };
        session.nesting_counter = session.nesting_counter.saturating_sub(1);
        if session.nesting_counter == 0 {
            session.hover_index = None;
        }
        trace!(nesting = session.nesting_counter, "reorder drag leave");
        ReorderOutcome::SessionUpdated {
            hover_index: session.hover_index,
            nesting_counter: session.nesting_counter,
        }
    }

    /// Drop the dragged item onto `target_index`.
    ///
    /// The session ends whether or not the indices are still valid.
    pub fn drop(&mut self, target_index: usize) -> ReorderOutcome {
        let Some(session) = self.session.take() else {
            return ReorderOutcome::ignored(ReorderIgnoredReason::NoActiveSession);
        };
        let source_index = session.source_index;
        let len = self.items.len();
        if source_index >= len || target_index >= len {
            debug!(source_index, target_index, len, "reorder drop out of range");
            return ReorderOutcome::ignored(ReorderIgnoredReason::IndexOutOfRange);
        }

        let insert_index = drop_insert_index(source_index, target_index);
        if insert_index == source_index {
            debug!(source_index, target_index, "reorder drop left order unchanged");
            return ReorderOutcome::Unchanged;
        }
        let item = self.items.remove(source_index);
        self.items.insert(insert_index, item);
        debug!(
            from = source_index,
            to = insert_index,
            "reorder drop moved item"
        );
        ReorderOutcome::Moved {
            from: source_index,
            to: insert_index,
        }
    }

    /// Cancel the drag, e.g. released outside any drop zone.
    pub fn drag_end(&mut self) -> ReorderOutcome {
        match self.session.take() {
            Some(_) => {
                debug!("reorder drag ended");
                ReorderOutcome::SessionEnded
            }
            None => ReorderOutcome::ignored(ReorderIgnoredReason::NoActiveSession),
        }
    }

    /// Swap the item at `index` with its neighbour in `direction`.
    ///
    /// Moving the first item up or the last item down is a no-op.
    pub fn move_item(&mut self, index: usize, direction: MoveDirection) -> ReorderOutcome {
        let len = self.items.len();
        if index >= len {
            return ReorderOutcome::ignored(ReorderIgnoredReason::IndexOutOfRange);
        }
        let Some(neighbour) = direction.neighbour(index, len) else {
            return ReorderOutcome::ignored(ReorderIgnoredReason::AtBoundary);
        };
        self.items.swap(index, neighbour);
        debug!(from = index, to = neighbour, "reorder move");
        ReorderOutcome::Moved {
            from: index,
            to: neighbour,
        }
    }
}

impl<'a, T> IntoIterator for &'a ReorderableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> ReorderableList<char> {
        ReorderableList::from(vec!['A', 'B', 'C', 'D'])
    }

    #[test]
    fn drop_after_removal_shifts_target() {
        let mut list = abcd();
        assert_eq!(list.drag_start(0), ReorderOutcome::SessionStarted { source_index: 0 });
        assert_eq!(list.drop(3), ReorderOutcome::Moved { from: 0, to: 2 });
        assert_eq!(list.items(), &['B', 'C', 'A', 'D']);
        assert!(!list.is_dragging());
    }

    #[test]
    fn drop_toward_front_uses_target_directly() {
        let mut list = abcd();
        list.drag_start(3);
        assert_eq!(list.drop(1), ReorderOutcome::Moved { from: 3, to: 1 });
        assert_eq!(list.items(), &['A', 'D', 'B', 'C']);
    }

    #[test]
    fn drop_on_self_is_identity() {
        let mut list = abcd();
        list.drag_start(2);
        assert_eq!(list.drop(2), ReorderOutcome::Unchanged);
        assert_eq!(list.items(), &['A', 'B', 'C', 'D']);
        assert!(!list.is_dragging());
    }

    #[test]
    fn drop_on_next_item_resolves_to_same_slot() {
        let mut list = abcd();
        list.drag_start(1);
        assert_eq!(list.drop(2), ReorderOutcome::Unchanged);
        assert_eq!(list.items(), &['A', 'B', 'C', 'D']);
    }

    #[test]
    fn drop_without_session_is_ignored() {
        let mut list = abcd();
        assert_eq!(
            list.drop(1),
            ReorderOutcome::Ignored {
                reason: ReorderIgnoredReason::NoActiveSession
            }
        );
    }

    #[test]
    fn drop_out_of_range_ends_session_without_moving() {
        let mut list = abcd();
        list.drag_start(0);
        assert_eq!(
            list.drop(9),
            ReorderOutcome::Ignored {
                reason: ReorderIgnoredReason::IndexOutOfRange
            }
        );
        assert_eq!(list.items(), &['A', 'B', 'C', 'D']);
        assert!(!list.is_dragging());
    }

    #[test]
    fn second_drag_start_is_rejected() {
        let mut list = abcd();
        list.drag_start(1);
        assert_eq!(
            list.drag_start(3),
            ReorderOutcome::Ignored {
                reason: ReorderIgnoredReason::SessionAlreadyActive
            }
        );
        assert_eq!(list.session().map(|s| s.source_index), Some(1));
    }

    #[test]
    fn drag_start_out_of_range_is_ignored() {
        let mut list = abcd();
        assert_eq!(
            list.drag_start(4),
            ReorderOutcome::Ignored {
                reason: ReorderIgnoredReason::IndexOutOfRange
            }
        );
        assert!(!list.is_dragging());
    }

    #[test]
    fn nested_enter_leave_keeps_hover_until_balanced() {
        let mut list = abcd();
        list.drag_start(0);
        assert_eq!(list.hover_index(), Some(0));

        list.drag_enter(2);
        list.drag_enter(2);
        assert_eq!(list.hover_index(), Some(2));
        assert_eq!(list.session().map(|s| s.nesting_counter), Some(2));

        list.drag_leave();
        assert_eq!(list.hover_index(), Some(2));
        list.drag_leave();
        assert_eq!(list.hover_index(), None);
        assert_eq!(list.session().map(|s| s.nesting_counter), Some(0));

        list.drag_leave();
        assert_eq!(list.session().map(|s| s.nesting_counter), Some(0));
    }

    #[test]
    fn enter_on_source_counts_but_keeps_hover() {
        let mut list = abcd();
        list.drag_start(1);
        list.drag_enter(3);
        let outcome = list.drag_enter(1);
        assert_eq!(
            outcome,
            ReorderOutcome::SessionUpdated {
                hover_index: Some(3),
                nesting_counter: 2
            }
        );
    }

    #[test]
    fn hover_does_not_affect_drop_target() {
        let mut list = abcd();
        list.drag_start(3);
        list.drag_enter(1);
        list.drag_leave();
        assert_eq!(list.drop(0), ReorderOutcome::Moved { from: 3, to: 0 });
        assert_eq!(list.items(), &['D', 'A', 'B', 'C']);
    }

    #[test]
    fn enter_and_leave_without_session_are_ignored() {
        let mut list = abcd();
        assert!(matches!(list.drag_enter(1), ReorderOutcome::Ignored { .. }));
        assert!(matches!(list.drag_leave(), ReorderOutcome::Ignored { .. }));
    }

    #[test]
    fn drag_end_clears_session() {
        let mut list = abcd();
        list.drag_start(2);
        assert_eq!(list.drag_end(), ReorderOutcome::SessionEnded);
        assert!(!list.is_dragging());
        assert_eq!(
            list.drag_end(),
            ReorderOutcome::Ignored {
                reason: ReorderIgnoredReason::NoActiveSession
            }
        );
    }

    #[test]
    fn move_item_swaps_neighbours() {
        let mut list = abcd();
        assert_eq!(
            list.move_item(1, MoveDirection::Down),
            ReorderOutcome::Moved { from: 1, to: 2 }
        );
        assert_eq!(list.items(), &['A', 'C', 'B', 'D']);
        list.move_item(1, MoveDirection::Up);
        assert_eq!(list.items(), &['C', 'A', 'B', 'D']);
    }

    #[test]
    fn move_item_at_boundaries_is_noop() {
        let mut list = abcd();
        assert_eq!(
            list.move_item(0, MoveDirection::Up),
            ReorderOutcome::Ignored {
                reason: ReorderIgnoredReason::AtBoundary
            }
        );
        assert_eq!(
            list.move_item(3, MoveDirection::Down),
            ReorderOutcome::Ignored {
                reason: ReorderIgnoredReason::AtBoundary
            }
        );
        assert_eq!(
            list.move_item(7, MoveDirection::Up),
            ReorderOutcome::Ignored {
                reason: ReorderIgnoredReason::IndexOutOfRange
            }
        );
        assert_eq!(list.items(), &['A', 'B', 'C', 'D']);
    }

    #[test]
    fn stale_session_after_host_shrinks_list() {
        let mut list = abcd();
        list.drag_start(3);
        let previous = list.replace_items(vec!['A', 'B']);
        assert_eq!(previous, vec!['A', 'B', 'C', 'D']);
        assert!(list.is_dragging());
        assert_eq!(
            list.drop(0),
            ReorderOutcome::Ignored {
                reason: ReorderIgnoredReason::IndexOutOfRange
            }
        );
        assert_eq!(list.items(), &['A', 'B']);
    }

    #[test]
    fn items_without_clone_survive_reorder() {
        #[derive(Debug, PartialEq)]
        struct Role(&'static str);

        let mut list: ReorderableList<Role> =
            [Role("owner"), Role("editor"), Role("viewer")].into_iter().collect();
        list.drag_start(2);
        list.drop(0);
        assert_eq!(list.order_by_key(|role| role.0), vec!["viewer", "owner", "editor"]);
    }

    #[test]
    fn direction_neighbours() {
        assert_eq!(MoveDirection::Up.neighbour(0, 3), None);
        assert_eq!(MoveDirection::Up.neighbour(2, 3), Some(1));
        assert_eq!(MoveDirection::Down.neighbour(2, 3), None);
        assert_eq!(MoveDirection::Down.neighbour(0, 0), None);
        assert_eq!(MoveDirection::Up.offset(), -1);
        assert_eq!(MoveDirection::Down.offset(), 1);
    }

    #[test]
    fn insert_index_rule() {
        assert_eq!(drop_insert_index(0, 3), 2);
        assert_eq!(drop_insert_index(3, 0), 0);
        assert_eq!(drop_insert_index(2, 2), 2);
    }
}
