use std::sync::Once;

/// Quiz crates log at `info`; the webview stack is noisy below `warn`.
const DEFAULT_FILTER: &str = "warn,app=info,ui=info,services=info,quiz_core=info";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug" or
/// "services=debug,tao=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// `--log` wins over `RUST_LOG`; blank values fall through to the default.
fn resolve_filter(explicit: Option<String>, rust_log: Option<String>) -> String {
    explicit
        .into_iter()
        .chain(rust_log)
        .find(|filter| !filter.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok());

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .init();

        log::debug!("logging initialized with filter {filter:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_env_and_default() {
        assert_eq!(
            resolve_filter(Some("services=debug".into()), Some("trace".into())),
            "services=debug"
        );
        assert_eq!(resolve_filter(None, Some("trace".into())), "trace");
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
    }

    #[test]
    fn blank_values_fall_back() {
        assert_eq!(resolve_filter(Some("  ".into()), Some("debug".into())), "debug");
        assert_eq!(resolve_filter(None, Some(String::new())), DEFAULT_FILTER);
    }

    #[test]
    fn default_quiets_the_webview_stack() {
        assert!(DEFAULT_FILTER.starts_with("warn,"));
        for krate in ["app", "ui", "services", "quiz_core"] {
            assert!(DEFAULT_FILTER.contains(&format!("{krate}=info")));
        }
    }
}
