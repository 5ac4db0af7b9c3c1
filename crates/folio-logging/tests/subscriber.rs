//! Installs the global subscriber once and checks the JSONL file output.
//!
//! Kept to a single test: a process can only hold one global subscriber.

use folio_logging::{
    log_file_path, FileConfig, FolioSubscriberBuilder, LoggingError, RotationStrategy,
};
use tempfile::TempDir;

#[test]
fn test_file_output_and_double_init() {
    let dir = TempDir::new().unwrap();
    let file_config = FileConfig {
        directory: dir.path().join("logs"),
        prefix: "folio-test".to_string(),
        rotation: RotationStrategy::Never,
    };

    let guard = FolioSubscriberBuilder::new()
        .with_console(false)
        .with_level("info")
        .with_file_output(file_config.clone())
        .try_init()
        .expect("first install succeeds");
    assert!(guard.is_some(), "file output returns a worker guard");

    tracing::info!(theme = "dark", "theme applied");

    // Dropping the guard flushes the non-blocking writer.
    drop(guard);

    let contents = std::fs::read_to_string(log_file_path(&file_config)).unwrap();
    let line = contents
        .lines()
        .find(|l| l.contains("theme applied"))
        .expect("event written to file");
    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(value["theme"], "dark");
    assert_eq!(value["level"], "INFO");

    let second = FolioSubscriberBuilder::new().with_console(false).try_init();
    assert!(matches!(second, Err(LoggingError::AlreadyInitialized)));
}
