//! Browser console logging.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Send `tracing` events to the browser console, errors to `console.error`.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init() {
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    if let Err(e) = tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(console)
        .try_init()
    {
        web_sys::console::warn_1(&format!("Logging already initialised: {}", e).into());
    }
}
