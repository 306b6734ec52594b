//! Minimal in-memory XML tree.
//!
//! The whole document is read into [`XmlNode`]s so the board loader can
//! navigate it by element name. Text content is not kept; Eagle stores the
//! data we need in attributes.

use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::error::{BoardError, BoardResult};

/// A parsed XML element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// Element tag name.
    pub name: String,
    /// Attributes in document order.
    pub attributes: IndexMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Creates an empty element with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the first child element with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Iterates over all child elements with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Removes and returns the first child element with the given name.
    pub fn take_child(&mut self, name: &str) -> Option<Self> {
        let index = self.children.iter().position(|c| c.name == name)?;
        Some(self.children.remove(index))
    }

    fn from_start(start: &BytesStart<'_>) -> BoardResult<Self> {
        let mut node = Self::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            node.attributes.insert(key, value);
        }
        Ok(node)
    }
}

/// Looks up an attribute value on an element by name.
#[must_use]
pub fn find_attribute<'a>(element: &'a XmlNode, name: &str) -> Option<&'a str> {
    element.attributes.get(name).map(String::as_str)
}

/// Parses a complete XML document and returns its root element.
///
/// Only comments, processing instructions and whitespace may follow the root
/// element.
///
/// # Errors
///
/// Returns [`BoardError::Xml`] for syntax errors reported by the reader and
/// [`BoardError::Malformed`] for structural faults such as an empty document,
/// a file that ends before the root element is closed, or content after the
/// root element.
pub fn parse_document(bytes: &[u8]) -> BoardResult<XmlNode> {
    let mut reader = Reader::from_reader(bytes);
    reader.trim_text(true);

    // Open elements, innermost last
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut buf = Vec::new();

    loop {
        let finished = match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                stack.push(XmlNode::from_start(&start)?);
                None
            }
            Event::Empty(start) => attach(&mut stack, XmlNode::from_start(&start)?),
            Event::End(end) => {
                let node = stack.pop().ok_or_else(|| {
                    BoardError::malformed(format!(
                        "unexpected closing tag '</{}>'",
                        String::from_utf8_lossy(end.name().as_ref())
                    ))
                })?;
                if end.name().as_ref() != node.name.as_bytes() {
                    return Err(BoardError::malformed(format!(
                        "unexpected closing tag '</{}>' while parsing '<{}>'",
                        String::from_utf8_lossy(end.name().as_ref()),
                        node.name
                    )));
                }
                attach(&mut stack, node)
            }
            Event::Eof => {
                return Err(match stack.last() {
                    Some(open) => BoardError::malformed(format!(
                        "unexpected end of file while parsing element '{}'",
                        open.name
                    )),
                    None => BoardError::malformed("XML document is empty"),
                });
            }
            _ => None,
        };

        if let Some(root) = finished {
            buf.clear();
            expect_end_of_document(&mut reader, &mut buf)?;
            return Ok(root);
        }
        buf.clear();
    }
}

/// Reads the rest of the input after the root element and rejects anything
/// other than comments, processing instructions and whitespace.
fn expect_end_of_document(reader: &mut Reader<&[u8]>, buf: &mut Vec<u8>) -> BoardResult<()> {
    loop {
        match reader.read_event_into(buf)? {
            Event::Eof => return Ok(()),
            Event::Comment(_) | Event::PI(_) => {}
            Event::Text(text) if text.iter().all(u8::is_ascii_whitespace) => {}
            _ => return Err(BoardError::malformed("content after root element")),
        }
        buf.clear();
    }
}

/// Appends a completed node to its parent, or hands it back if it is the root.
fn attach(stack: &mut [XmlNode], node: XmlNode) -> Option<XmlNode> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(node);
            None
        }
        None => Some(node),
    }
}
