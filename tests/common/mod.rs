//! Shared helpers for the integration tests

use kodegen_tools_typograf::{OutputMode, ProcessorOptions, Typograf};

/// Route library `tracing` output to the test harness; `RUST_LOG` filters it
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Processor over the built-in catalog for `language`
#[allow(dead_code)]
pub fn typograf(language: &str) -> Typograf {
    init_tracing();
    let options = ProcessorOptions::builder()
        .language(language)
        .build()
        .expect("valid options");
    Typograf::with_defaults(options).expect("valid processor")
}

/// Same as [`typograf`] with an explicit output mode
#[allow(dead_code)]
pub fn typograf_with_mode(language: &str, mode: OutputMode) -> Typograf {
    let mut typograf = typograf(language);
    typograf.set_mode(mode);
    typograf
}
