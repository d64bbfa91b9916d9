//! Shared test helpers.

#![allow(dead_code)]

use formopts::Choice;

/// Build a choice with distinct value and label.
pub fn choice(value: &str, label: &str) -> Choice {
    Choice::new(value, label)
}

/// Build a choice whose value doubles as its label.
pub fn bare(text: &str) -> Choice {
    Choice::bare(text)
}

/// Install a test subscriber so `RUST_LOG=debug cargo test` shows the
/// settings-layer events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
