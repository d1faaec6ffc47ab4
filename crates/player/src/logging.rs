//! Tracing setup for hosts embedding the sheet manager.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when the host does not pass one
pub const DEFAULT_FILTER: &str = "pokerole_player=info";

/// Install the global tracing subscriber.
///
/// `filter` uses `EnvFilter` directive syntax (e.g. `"pokerole_player=debug"`);
/// an unparsable filter falls back to [`DEFAULT_FILTER`]. Calling this more
/// than once is harmless: later calls leave the first subscriber in place.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing(filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if result.is_ok() {
        tracing::debug!(filter, "Tracing initialized");
    }
}

/// Install the browser console subscriber. The filter is not used on wasm.
#[cfg(target_arch = "wasm32")]
pub fn init_tracing(_filter: &str) {
    let _ = tracing_wasm::try_set_as_global_default();
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing("pokerole_player=debug");
        init_tracing("not a [valid filter");
        tracing::info!("still logging");
    }
}
