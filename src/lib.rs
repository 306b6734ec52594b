//! eagle-tp-clearance: test point clearance checks for Eagle board files
//!
//! This library reads an Eagle XML board (`.brd`), collects the positions of
//! all test point pads and reports the smallest centre-to-centre distance
//! between any two of them.
//!
//! # Pipeline
//!
//! The check is a straight sequence of stages, each feeding the next:
//!
//! 1. **Load** — [`eagle::BoardDocument`] parses the file and confirms it is a board
//! 2. **Extract** — [`eagle::extract_test_points()`] collects test point coordinates
//! 3. **Measure** — [`clearance::min_distance()`] finds the closest pair
//! 4. **Evaluate** — [`clearance::evaluate()`] compares against the configured limit
//!
//! [`pipeline::run()`] wires the stages together for a file on disk.
//!
//! # Modules
//!
//! - [`config`] — Settings file loading and validation
//! - [`error`] — Configuration error types
//! - [`eagle`] — Eagle XML board loading and test point extraction
//! - [`clearance`] — Distance calculation and limit evaluation
//! - [`pipeline`] — End-to-end check of a board file

pub mod clearance;
pub mod config;
pub mod eagle;
pub mod error;
pub mod pipeline;
