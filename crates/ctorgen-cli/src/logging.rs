//! Log output for the command-line tool
//!
//! Logs go to stderr so generated output and command results on stdout stay
//! clean. `RUST_LOG` takes precedence over the verbosity flag.

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Initialize the logging system
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn default_directive___verbose___debug() {
        assert_eq!(default_directive(true), "debug");
    }

    #[test]
    fn default_directive___quiet___warn() {
        assert_eq!(default_directive(false), "warn");
    }

    #[test]
    fn init_logging___called_twice___does_not_panic() {
        init_logging(false);
        init_logging(true);
    }
}
