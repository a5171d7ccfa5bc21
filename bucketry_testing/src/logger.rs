//! Logging setup for tests.
use env_logger::Builder;
use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a test-friendly logger once per process.
///
/// Defaults to warnings only; `RUST_LOG` overrides it, e.g. `RUST_LOG=bucketry=debug` shows
/// every rehash.
pub fn init_test_logger() {
    // Recover if an earlier initialization attempt panicked.
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .is_test(true)
            .filter_level(LevelFilter::Warn)
            .format_timestamp_millis()
            .parse_default_env();

        // Another test harness may have installed a logger already.
        let _ = builder.try_init();
    });
}
