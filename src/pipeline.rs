//! End-to-end clearance check.
//!
//! Runs load → extract → measure → evaluate and returns everything the
//! binary needs to print its result and choose an exit status. Nothing is
//! printed here.

use std::path::Path;

use tracing::info;

use crate::clearance::{evaluate, min_distance, ClearanceResult, Verdict};
use crate::config::Settings;
use crate::eagle::{extract_test_points, BoardDocument, BoardResult};

/// Result of a completed clearance check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Number of test points found on the board.
    pub test_points: usize,
    /// Minimum distance between test points.
    pub result: ClearanceResult,
    /// Outcome against the configured limit.
    pub verdict: Verdict,
}

/// Checks a board file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not XML, is not a board,
/// or has a test point with unusable position data.
pub fn run(path: &Path, settings: &Settings) -> BoardResult<Report> {
    let document = BoardDocument::load(path)?;
    check(&document, settings)
}

/// Checks a board given as raw file contents.
///
/// # Errors
///
/// Same as [`run`], except for file access errors.
pub fn run_bytes(bytes: &[u8], settings: &Settings) -> BoardResult<Report> {
    let document = BoardDocument::from_bytes(bytes)?;
    check(&document, settings)
}

/// Checks an already loaded board.
///
/// # Errors
///
/// Returns an error if a test point has unusable position data.
pub fn check(document: &BoardDocument, settings: &Settings) -> BoardResult<Report> {
    let points = extract_test_points(document)?;
    let result = min_distance(&points);
    info!(test_points = points.len(), min_distance = ?result.distance(), "Computed clearance");

    let verdict = evaluate(&result, settings);

    Ok(Report {
        test_points: points.len(),
        result,
        verdict,
    })
}
