// Integration test for logger initialization
// Installs the global subscriber, so this file holds a single test

use sender_options::infrastructure::logging::{
    info, instrument, LogConfig, LogFormat, LoggerImpl, RotationPolicy, LOG_FILE_NAME,
};
use sender_options::{KeyPolicy, SenderService, StaticEnvironment};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_logging_to_file() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        level: "debug".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        rotation: RotationPolicy::Never,
    };

    let logger = temp_env::with_var_unset("RUST_LOG", || LoggerImpl::init(&config)).unwrap();
    assert!(logger.has_file_output());

    info!("Test message 1");
    info!(key = "value", "Test message with fields");
    assert_eq!(instrumented_add(5, 7), 12);

    // Resolution with a missing key logs a warning naming the variable
    SenderService::new(StaticEnvironment::new(), KeyPolicy::Optional)
        .resolve()
        .unwrap();

    // A second install fails instead of replacing the subscriber
    assert!(LoggerImpl::init(&LogConfig::default()).is_err());

    // Dropping the logger flushes the non-blocking writer
    drop(logger);

    let contents = fs::read_to_string(temp_dir.path().join(LOG_FILE_NAME))
        .expect("Log file should be created");

    assert!(contents.contains("Test message 1"));
    assert!(contents.contains("Test message with fields"));
    assert!(contents.contains("entering instrumented function"));
    assert!(contents.contains("SENDGRID_API_KEY"));
}

#[instrument]
fn instrumented_add(a: i32, b: i32) -> i32 {
    info!("entering instrumented function");
    a + b
}
