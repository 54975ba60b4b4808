#![forbid(unsafe_code)]

//! Core: geometry primitives, percentage math, and logging glue.
//!
//! # Role in Quire
//! `quire-core` is the shared vocabulary of the engine. Both controllers
//! (`quire-layout` and `quire-reorder`) and the host adapters in `quire-web`
//! speak in terms of the types defined here.
//!
//! # Primary responsibilities
//! - **AnchorRect / PointerPosition**: host-space geometry used to convert
//!   pointer coordinates into percentages and pixel widths.
//! - **Percent helpers**: clamping that never panics on hostile input.
//! - **Logging**: `tracing` macros when the `tracing` feature is on, no-op
//!   stand-ins of the same name when it is off.

pub mod geometry;
pub mod logging;
pub mod percent;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};

pub use geometry::{AnchorRect, PointerPosition};
