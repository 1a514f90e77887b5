//! Tests for CLI output formatting helpers
//!
//! Tests the output formatting utilities:
//! - Duration formatting (ms, s, m)
//! - Relative time formatting (just now, minutes ago, hours ago, days ago)
//! - Snippet mark rendering

use chrono::{Duration, Utc};
use ishtar::cli::output::{format_duration, format_relative_time, render_marks};

// =============================================================================
// format_duration tests
// =============================================================================

#[test]
fn test_format_duration_various() {
    assert_eq!(format_duration(0.0), "0ms");
    assert_eq!(format_duration(0.012), "12ms");
    assert_eq!(format_duration(2.0), "2.00s");
    assert_eq!(format_duration(120.0), "2m 0.0s");
}

// =============================================================================
// format_relative_time tests
// =============================================================================

#[test]
fn test_format_relative_time_ranges() {
    let now = Utc::now();
    assert_eq!(format_relative_time(&(now - Duration::minutes(5))), "5m ago");
    assert_eq!(format_relative_time(&(now - Duration::days(2))), "2d ago");
    assert_eq!(
        format_relative_time(&(now + Duration::hours(1))),
        "in the future"
    );
}

// =============================================================================
// render_marks tests
// =============================================================================

#[test]
fn test_render_marks_without_color() {
    colored::control::set_override(false);
    assert_eq!(render_marks("no marks here"), "no marks here");
    assert_eq!(
        render_marks("...<mark>LLM</mark>Ops for <mark>llm</mark> apps..."),
        "...LLMOps for llm apps..."
    );
    colored::control::unset_override();
}
