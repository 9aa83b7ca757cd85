//! Log setup for the `keyseq` binary.
//!
//! Logs go to stderr so that stdout stays usable for `--json` output.

use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Calling this twice is
/// harmless; the second install is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "debug");
    }
}
