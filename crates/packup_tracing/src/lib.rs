use std::sync::atomic::AtomicBool;

static IS_INIT: AtomicBool = AtomicBool::new(false);

/// Installs the fmt subscriber once per process, filtered by `RUST_LOG`.
/// Safe to call from every bundler construction.
pub fn enable_tracing_on_demand() {
  use tracing_subscriber::{fmt, prelude::*, EnvFilter};
  if !IS_INIT.swap(true, std::sync::atomic::Ordering::SeqCst) {
    tracing_subscriber::registry()
      .with(fmt::layer())
      .with(EnvFilter::from_default_env())
      .init();
  }
}
