//! Logging setup.
//!
//! Console-only structured logging, configurable via the `RUST_LOG`
//! environment variable. Library code logs through `tracing` macros and
//! stays silent until the embedding application installs a subscriber,
//! either its own or through [`init`].

use tracing_subscriber::EnvFilter;

/// Installs a console subscriber filtered by `RUST_LOG` (defaults to INFO).
///
/// Safe to call more than once: when a global subscriber is already set,
/// later calls leave it in place.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tracing uses a global subscriber that can only be set once per
    // process, so actual output is not asserted here.
    #[test]
    fn test_init_is_repeatable() {
        init();
        init();
    }
}
