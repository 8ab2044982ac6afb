use tracing_subscriber::filter::LevelFilter;

/// Verbosity of the stderr log output, set with `--log-level`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

/// Route `tracing` events to stderr so they never mix with the diagnostics
/// printed on stdout.
pub fn init_logging(log_level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(log_level.level_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
