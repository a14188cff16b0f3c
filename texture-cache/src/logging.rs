//! Logging utilities for texture-cache
//!
//! A subscriber setup helper for applications plus the conditional logging
//! macros used throughout the crate. Everything compiles to nothing when the
//! `tracing` feature is disabled.

/// Install a `fmt` subscriber for texture-cache logs
///
/// Honors `RUST_LOG`, falling back to info for this crate and its backends.
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing")]
pub fn init_tracing() -> bool {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "texture_cache=info,texture_cache_glow=info,warn".into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing() -> bool {
    eprintln!("Warning: tracing feature not enabled, logging disabled");
    false
}

macro_rules! tex_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

macro_rules! tex_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! tex_info {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::info!($($arg)*);
    };
}

macro_rules! tex_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)*);
    };
}

macro_rules! tex_error {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::error!($($arg)*);
    };
}
