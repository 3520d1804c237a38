use std::sync::atomic::AtomicBool;

use tracing::Level;

static IS_INIT: AtomicBool = AtomicBool::new(false);

/// Install the subscriber on first call. Later calls are no-ops, so every
/// entry point may call this without coordination.
pub fn enable_tracing_on_demand() {
  use tracing_subscriber::{fmt, prelude::*, EnvFilter};
  if !IS_INIT.swap(true, std::sync::atomic::Ordering::SeqCst) {
    tracing_subscriber::registry()
      .with(fmt::layer())
      .with(EnvFilter::from_default_env())
      .with(
        tracing_subscriber::filter::Targets::new().with_targets(vec![("packlet", Level::TRACE)]),
      )
      .init();
  }
}
