//! Clearance limit evaluation and result formatting.

use std::fmt;

use serde::Deserialize;
use tracing::{debug, warn};

use super::geometry::ClearanceResult;
use crate::config::Settings;

/// Text printed when no distance could be computed.
pub const UNDEFINED_MARKER: &str = "none";

/// Direction of the clearance comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Comparison {
    /// Passes when the distance is at least the limit (minimum spacing).
    #[default]
    AtLeast,
    /// Passes when the distance is at most the limit.
    AtMost,
}

impl Comparison {
    /// Returns `true` if `distance` satisfies this comparison against `limit`.
    #[must_use]
    pub fn holds(self, distance: f64, limit: f64) -> bool {
        match self {
            Self::AtLeast => distance >= limit,
            Self::AtMost => distance <= limit,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast => write!(f, "at-least"),
            Self::AtMost => write!(f, "at-most"),
        }
    }
}

/// Pass/fail outcome of a clearance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The board meets the configured clearance, or no limit is set.
    Pass,
    /// The computed distance violates the configured limit.
    Fail,
}

impl Verdict {
    /// Returns `true` for [`Verdict::Pass`].
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Decides whether a clearance result satisfies the configured limit.
///
/// - No limit: always passes.
/// - Limit set but fewer than two test points: passes, since no pair can
///   violate the limit. A warning is logged.
/// - Otherwise the configured [`Comparison`] decides.
#[must_use]
pub fn evaluate(result: &ClearanceResult, settings: &Settings) -> Verdict {
    let Some(limit) = settings.limit else {
        debug!("No limit set, check passes");
        return Verdict::Pass;
    };

    let Some(distance) = result.distance() else {
        warn!(limit, "Fewer than two test points, limit not applied");
        return Verdict::Pass;
    };

    let verdict = if settings.comparison.holds(distance, limit) {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    debug!(
        distance,
        limit,
        comparison = %settings.comparison,
        ?verdict,
        "Evaluated clearance"
    );
    verdict
}

/// Formats a clearance result as the single line of program output.
///
/// Distances always carry a fractional part (`10.0`, `0.0`, `2.54`).
#[must_use]
pub fn format_result(result: &ClearanceResult) -> String {
    match result {
        ClearanceResult::Undefined => UNDEFINED_MARKER.to_string(),
        ClearanceResult::Distance(d) => format!("{d:?}"),
    }
}
