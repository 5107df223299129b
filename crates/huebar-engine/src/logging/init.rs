/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "huebar_ui=trace,huebar_engine=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Route output through the test harness capture instead of stderr.
    pub is_test: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            is_test: false,
        }
    }
}

impl LoggingConfig {
    /// Configuration for `#[test]` functions: captured output, `RUST_LOG` honored.
    pub fn for_tests() -> Self {
        Self { is_test: true, ..Self::default() }
    }
}

/// Installs the global logger.
///
/// Returns `false` when a logger was already installed (by an earlier call or
/// by the host), in which case the existing one stays in place.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter {
        builder.parse_filters(&filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }

    builder.write_style(config.write_style).is_test(config.is_test);

    let installed = builder.try_init().is_ok();
    if installed {
        log::debug!("logging initialized");
    }
    installed
}
