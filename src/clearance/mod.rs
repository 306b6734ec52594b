//! Test point clearance measurement and evaluation.
//!
//! Clearance is the smallest centre-to-centre distance between any two test
//! points on a board. Distances are in board units; no unit conversion is done.
//!
//! # Example
//!
//! ```
//! use eagle_tp_clearance::clearance::{
//!     evaluate, format_result, min_distance, Comparison, Coordinate, Verdict,
//! };
//! use eagle_tp_clearance::config::Settings;
//!
//! let points = [Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 0.0)];
//! let result = min_distance(&points);
//! assert_eq!(format_result(&result), "10.0");
//!
//! let settings = Settings::new(5.0, Comparison::AtLeast).unwrap();
//! assert_eq!(evaluate(&result, &settings), Verdict::Pass);
//! ```

pub mod evaluate;
pub mod geometry;

pub use evaluate::{evaluate, format_result, Comparison, Verdict};
pub use geometry::{min_distance, ClearanceResult, Coordinate};
