//! Eagle XML board file handling.
//!
//! Eagle stores designs as XML. Boards and schematics share the same outer
//! structure and differ in the section below `drawing`:
//!
//! ```text
//! eagle/
//! └── drawing/
//!     ├── settings, grid, layers ...
//!     └── board/                 # absent in schematics and libraries
//!         └── elements/
//!             └── element name="TP1" x="10.16" y="5.08" ...
//!                 └── attribute name="TP_SIGNAL_NAME" value="GND"
//! ```
//!
//! An element is a test point when one of its `attribute` children is named
//! [`TEST_POINT_MARKER`]. Its position comes from the element's own `x` and
//! `y` attributes.

pub mod board;
pub mod error;
pub mod testpoints;
pub mod xml;

pub use board::BoardDocument;
pub use error::{BoardError, BoardErrorKind, BoardResult};
pub use testpoints::{extract_test_points, is_test_point, TEST_POINT_MARKER};
pub use xml::{find_attribute, XmlNode};
