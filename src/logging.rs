use std::sync::Once;

/// Logger settings; `filter` uses `env_logger` directive syntax such as
/// `"info"` or `"goldframe::texture=debug"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Install the global logger on stderr. Later calls do nothing.
///
/// An explicit `filter` wins over `RUST_LOG`; with neither, `info` is used.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        builder
            .write_style(config.write_style)
            .target(env_logger::Target::Stderr)
            .format_timestamp(None);
        if builder.try_init().is_err() {
            return;
        }
        log::debug!("logging initialized");
    });
}
