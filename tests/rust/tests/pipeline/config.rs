//! Configuration loaded from file into a working interceptor

use std::io::Write;
use std::sync::Arc;

use reqlog_core::{ConfigError, LoggingInterceptor, RequestLoggerConfig};
use tests::fixtures::{info, recording_interceptor, scenario_config};
use tests::{CapturedRequest, CapturedResponse, RecordingSink};

#[test]
fn test_config_file_drives_exemptions() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string_pretty(&scenario_config()).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let config = RequestLoggerConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config, scenario_config());

    let (interceptor, sink) = recording_interceptor(config);
    interceptor.on_request_enter(&CapturedRequest::new("GET", "/health"));
    interceptor.on_response_exit(
        &CapturedRequest::new("GET", "/api/users"),
        CapturedResponse::new(200),
    );

    assert_eq!(sink.lines(), vec![info("GET /api/users - 200")]);
}

#[test]
fn test_invalid_config_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"max_body_length": 0}"#).unwrap();

    let err = RequestLoggerConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBodyLimit));

    let config = RequestLoggerConfig {
        max_body_length: 0,
        ..scenario_config()
    };
    let result = LoggingInterceptor::new(config, Arc::new(RecordingSink::new()));
    assert!(result.is_err());
}
