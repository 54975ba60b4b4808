#![forbid(unsafe_code)]

//! Reorderable list controller.
//!
//! # Role in Quire
//! `quire-reorder` turns a pointer drag-and-drop sequence or a discrete
//! move-up/move-down command into a new ordering of an owned list. It is
//! used for every orderable list in the client: document-type priority,
//! subfolder order, team-role lists.
//!
//! The controller holds no durable state. Each [`ReorderOutcome::Moved`] is
//! the host's cue to persist the new order.

pub mod list;
pub mod permutation;

pub use list::{
    MoveDirection, ReorderDragSession, ReorderIgnoredReason, ReorderOutcome, ReorderableList,
    drop_insert_index,
};
pub use permutation::is_permutation_of;
