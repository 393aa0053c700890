use std::io;
use std::str::FromStr;

use techstore_error::error::LoggingError;
use tracing::Level;
use tracing_subscriber::fmt::time::UtcTime;

const DEFAULT_TIME_PATTERN: &str =
    "[year]-[month]-[day]T[hour repr:24]:[minute]:[second]::[subsecond digits:4]";

/// Parse a textual log level (`debug`, `INFO`, ...) into a tracing level
pub fn parse_log_level(log_level: &str) -> Result<Level, LoggingError> {
    Level::from_str(log_level.trim()).map_err(|e| {
        LoggingError::Error(format!("Invalid log level: {} with error: {}", log_level, e))
    })
}

pub async fn setup_logging(log_level: &str) -> Result<(), LoggingError> {
    let level = parse_log_level(log_level)?;

    let time_format = time::format_description::parse(DEFAULT_TIME_PATTERN).map_err(|e| {
        LoggingError::Error(format!(
            "Failed to parse time format: {} with error: {}",
            DEFAULT_TIME_PATTERN, e
        ))
    })?;

    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_target(false)
        .flatten_event(true)
        .with_thread_ids(true)
        .with_timer(UtcTime::new(time_format))
        .with_writer(io::stdout)
        .try_init()
        .map_err(|e| LoggingError::Error(format!("Failed to setup logging with error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level(" warn ").unwrap(), Level::WARN);
        assert!(parse_log_level("loud").is_err());
    }

    #[tokio::test]
    async fn test_setup_logging() {
        setup_logging("info").await.unwrap();

        // a global subscriber can only be installed once
        assert!(setup_logging("info").await.is_err());
    }
}
