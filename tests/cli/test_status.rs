//! Tests for the index-status CLI command

use crate::cli::test_helpers::{create_cli_test_services, create_degraded_services};
use ishtar::cli::commands::status::{execute, StatusArgs};
use ishtar::cli::OutputFormat;

#[tokio::test]
async fn test_status_complete_index() {
    let services = create_cli_test_services();

    let result = execute(StatusArgs { strict: true }, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Complete index passes strict check");
}

#[tokio::test]
async fn test_status_json() {
    let services = create_cli_test_services();

    let result = execute(StatusArgs { strict: false }, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_status_degraded_reports_without_strict() {
    let services = create_degraded_services();

    let result = execute(StatusArgs { strict: false }, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
    assert_eq!(services.search.warm().failed().len(), 1);
}

#[tokio::test]
async fn test_status_degraded_fails_with_strict() {
    let services = create_degraded_services();

    let result = execute(StatusArgs { strict: true }, &services, OutputFormat::Json).await;
    let err = result.expect_err("Strict mode should fail on a missing source");
    assert!(err.to_string().contains("1 of 6"));
}
