#![forbid(unsafe_code)]

//! Logging glue.
//!
//! With the `tracing` feature enabled the usual `tracing` event macros are
//! re-exported from the crate root. Without it, macros of the same names are
//! exported that expand to nothing, so call sites never need `cfg` guards.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, info, trace, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {};
}

/// Install a JSON `tracing` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset or unparsable. Returns an
/// error if a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_structured_fields() {
        let axis = "vertical";
        crate::debug!(axis, pct = 42.0, "drag update");
        crate::trace!("plain message");
        crate::warn!(reason = ?Some(3), "rejected");
        assert_eq!(axis, "vertical");
    }
}
