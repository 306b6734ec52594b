//! Board loader.

use std::path::Path;

use tracing::{debug, warn};

use super::error::{BoardError, BoardResult};
use super::xml::{self, XmlNode};

/// Expected root element of an Eagle design file.
const ROOT_ELEMENT: &str = "eagle";

/// A parsed Eagle document confirmed to describe a board.
///
/// Only the `drawing/board` section is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDocument {
    board: XmlNode,
}

impl BoardDocument {
    /// Reads and parses a board file.
    ///
    /// The file is read into memory in full before parsing starts.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::FileRead`] if the file cannot be read, otherwise
    /// the same errors as [`Self::from_bytes`].
    pub fn load(path: impl AsRef<Path>) -> BoardResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| BoardError::file_read(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "Read board file");

        Self::from_bytes(&bytes)
    }

    /// Parses a board document from raw file contents.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Xml`] or [`BoardError::Malformed`] if the input is
    /// not well-formed XML, and [`BoardError::NotABoard`] if it is XML without
    /// a `drawing/board` section.
    pub fn from_bytes(bytes: &[u8]) -> BoardResult<Self> {
        let mut root = xml::parse_document(bytes)?;

        if root.name != ROOT_ELEMENT {
            warn!(root = %root.name, "Unexpected root element, expected <eagle>");
        }

        let board = root
            .take_child("drawing")
            .and_then(|mut drawing| drawing.take_child("board"))
            .ok_or(BoardError::NotABoard)?;

        Ok(Self { board })
    }

    /// Returns the `board` element.
    #[must_use]
    pub const fn board(&self) -> &XmlNode {
        &self.board
    }

    /// Iterates over the `element` nodes of the board's part list.
    ///
    /// A board without an `elements` section yields nothing.
    pub fn elements(&self) -> impl Iterator<Item = &XmlNode> {
        self.board
            .child("elements")
            .into_iter()
            .flat_map(|elements| elements.children_named("element"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<eagle version="7.7.0">
  <drawing>
    <layers><layer number="1" name="Top"/></layers>
    <board>
      <plain/>
      <elements>
        <element name="R1" library="rcl" package="R0603" x="1" y="2"/>
        <element name="TP1" library="testpad" package="TP10R" x="3" y="4">
          <attribute name="TP_SIGNAL_NAME" value="GND"/>
        </element>
      </elements>
    </board>
  </drawing>
</eagle>"#;

    #[test]
    fn loads_board_and_lists_elements() {
        let doc = BoardDocument::from_bytes(BOARD.as_bytes()).unwrap();
        let names: Vec<_> = doc
            .elements()
            .filter_map(|e| e.attributes.get("name").map(String::as_str))
            .collect();
        assert_eq!(names, ["R1", "TP1"]);
    }

    #[test]
    fn schematic_is_not_a_board() {
        let xml = br#"<eagle><drawing><schematic><parts/></schematic></drawing></eagle>"#;
        let err = BoardDocument::from_bytes(xml).unwrap_err();
        assert!(matches!(err, BoardError::NotABoard));
    }

    #[test]
    fn missing_drawing_is_not_a_board() {
        let err = BoardDocument::from_bytes(b"<eagle/>").unwrap_err();
        assert!(matches!(err, BoardError::NotABoard));
    }

    #[test]
    fn board_outside_drawing_is_not_a_board() {
        let err = BoardDocument::from_bytes(b"<eagle><board/></eagle>").unwrap_err();
        assert!(matches!(err, BoardError::NotABoard));
    }

    #[test]
    fn board_without_elements_yields_nothing() {
        let doc = BoardDocument::from_bytes(b"<eagle><drawing><board/></drawing></eagle>").unwrap();
        assert_eq!(doc.elements().count(), 0);
        assert_eq!(doc.board().name, "board");
    }

    #[test]
    fn malformed_input_is_not_reported_as_not_a_board() {
        let err = BoardDocument::from_bytes(b"<eagle><drawing>").unwrap_err();
        assert!(!matches!(err, BoardError::NotABoard));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = BoardDocument::load("/nonexistent/board.brd").unwrap_err();
        assert!(matches!(err, BoardError::FileRead { .. }));
        assert!(err.to_string().contains("board.brd"));
    }
}
