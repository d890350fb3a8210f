//! `tracing` output for the browser.
//!
//! wasm32 has no stderr and no wall clock, so the fmt layer runs without
//! timestamps and writes through `tracing-web`, which routes each event to
//! the `console.*` method matching its level.

use tracing::Level;
use tracing_web::MakeWebConsoleWriter;

/// Install the global subscriber. Safe to call more than once.
pub fn init(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_writer(MakeWebConsoleWriter::new())
        .without_time()
        .with_target(false)
        .with_max_level(level)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
