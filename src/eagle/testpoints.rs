//! Test point extraction.

use tracing::{debug, info};

use super::board::BoardDocument;
use super::error::{BoardError, BoardResult};
use super::xml::{find_attribute, XmlNode};
use crate::clearance::Coordinate;

/// Name of the element attribute that marks a part as a test point.
///
/// Only the presence of the attribute matters, not its value.
pub const TEST_POINT_MARKER: &str = "TP_SIGNAL_NAME";

/// Returns `true` if the element carries the test point marker attribute.
#[must_use]
pub fn is_test_point(element: &XmlNode) -> bool {
    element
        .children_named("attribute")
        .any(|attribute| find_attribute(attribute, "name") == Some(TEST_POINT_MARKER))
}

/// Collects the positions of all test points on a board, in document order.
///
/// Duplicate positions are kept.
///
/// # Errors
///
/// Returns an error if a test point has a missing, non-numeric or
/// non-finite `x` or `y` attribute. Such an element is never skipped.
pub fn extract_test_points(document: &BoardDocument) -> BoardResult<Vec<Coordinate>> {
    let mut points = Vec::new();

    for element in document.elements().filter(|e| is_test_point(e)) {
        let point = Coordinate::new(position(element, "x")?, position(element, "y")?);
        debug!(element = element_name(element), position = %point, "Found test point");
        points.push(point);
    }

    info!(count = points.len(), "Extracted test points");
    Ok(points)
}

fn element_name(element: &XmlNode) -> &str {
    find_attribute(element, "name").unwrap_or("<unnamed>")
}

/// Parses one position attribute of an element.
fn position(element: &XmlNode, axis: &'static str) -> BoardResult<f64> {
    let raw = find_attribute(element, axis).ok_or_else(|| BoardError::MissingPosition {
        element: element_name(element).to_string(),
        axis,
    })?;

    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|source| BoardError::InvalidCoordinate {
            element: element_name(element).to_string(),
            axis,
            value: raw.to_string(),
            source,
        })?;

    if !value.is_finite() {
        return Err(BoardError::NonFiniteCoordinate {
            element: element_name(element).to_string(),
            axis,
            value: raw.to_string(),
        });
    }

    Ok(value)
}
