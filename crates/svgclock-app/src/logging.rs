use flexi_logger::{
    Age, Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, LogSpecBuilder,
    LogSpecification, Logger, LoggerHandle, Naming,
};
use log::warn;

const LOG_DIRECTORY: &str = "/tmp/svgclock";

/// Start the file logger. Standard output carries the SVG frames, so console
/// duplication goes to stderr.
pub fn start() -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::with(
        LogSpecBuilder::new()
            .default(log::LevelFilter::Info)
            .build(),
    )
    .log_to_file(FileSpec::default().directory(LOG_DIRECTORY))
    .rotate(
        Criterion::Age(Age::Day),
        Naming::Timestamps,
        Cleanup::KeepLogFiles(7),
    );
    let logger = if cfg!(debug_assertions) {
        logger.duplicate_to_stderr(Duplicate::All)
    } else {
        logger.duplicate_to_stderr(Duplicate::Warn)
    };

    logger.start()
}

/// Build the log specification from `RUST_LOG`, or from the configured level
/// when the variable is unset. An invalid specification falls back to `info`.
pub fn get_log_spec(log_level: &str) -> LogSpecification {
    LogSpecification::env_or_parse(log_level).unwrap_or_else(|err| {
        warn!("Failed to parse log level '{log_level}': {err}");
        LogSpecification::info()
    })
}
