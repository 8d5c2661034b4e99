use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup logging.
/// By default, it will only show logs from our crate at the info level.
///
/// The log level can be overridden by setting the `PSCALE_LOG` environment variable,
/// `debug` forces the debug level regardless.
/// If the `PSCALE_LOG_ALL` environment variable is set, it will show logs from all crates at the specified level.
///
/// Logs are written to stderr so that stdout only carries command output.
pub fn setup_logging(debug: bool) {
    let log_level = if debug {
        "debug".to_string()
    } else {
        std::env::var("PSCALE_LOG").unwrap_or_else(|_| "info".to_string())
    };

    let show_all_logs = std::env::var("PSCALE_LOG_ALL").is_ok();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::new(log_filter(&log_level, show_all_logs)))
        .init();
}

// Either "level" or "pscale=level".
fn log_filter(log_level: &str, show_all_logs: bool) -> String {
    if show_all_logs {
        log_level.to_string()
    } else {
        format!("pscale={log_level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_only_our_crate() {
        assert_eq!(log_filter("info", false), "pscale=info");
    }

    #[test]
    fn test_log_filter_all_crates() {
        assert_eq!(log_filter("trace", true), "trace");
    }
}
