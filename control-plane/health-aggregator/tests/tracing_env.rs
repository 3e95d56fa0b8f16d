// Installs the global subscriber, so this binary holds a single test.
use health_aggregator::init_tracing;
use tracing::Level;

#[test]
fn rust_log_overrides_default_directive() {
    // SAFETY: the only test in this binary; no other thread reads the env
    unsafe {
        std::env::set_var("RUST_LOG", "debug");
    }
    init_tracing("info");
    assert!(tracing::enabled!(Level::DEBUG));
    assert!(!tracing::enabled!(Level::TRACE));
}
