// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use teller::application::{SessionConfig, TellerService};
use teller::cli::{run_session, SessionSummary};
use teller::io::TextPresenter;

/// Helper to create a service with the default `$` / standard wording
pub fn test_service() -> TellerService {
    TellerService::new(SessionConfig::default())
}

/// Fixed timestamp on a reference day, for deterministic history entries
pub fn at(hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, min, sec).unwrap()
}

/// Run a non-interactive script and return the summary plus everything printed.
pub fn run_script(service: &mut TellerService, script: &str) -> Result<(SessionSummary, String)> {
    let mut presenter = TextPresenter::new(Vec::new());
    let summary = run_session(service, Cursor::new(script), &mut presenter, false)?;
    let output = String::from_utf8(presenter.into_inner())?;
    Ok((summary, output))
}
