use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initializes the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `chime=info`.  Calling this twice is harmless,
/// the second subscriber is refused and we keep the first.
pub fn trace_init() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chime=info"));
    if tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
    {
        tracing::trace!("Loading Chime...");
    }
}

/// A path in the system temp dir that no other test process will reach for.
#[cfg(test)]
pub(crate) fn scratch(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("chime-{}-{name}", std::process::id()))
}
