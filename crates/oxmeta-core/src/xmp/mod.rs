//! XMP packets
//!
//! The packet bytes are the only state. Trailing NUL padding (common in JPEG APP1
//! and TIFF storage) is trimmed on construction, but never below two bytes.

mod document;

pub use document::XmlElement;

use quick_xml::Reader;

use crate::container::Decoded;
use crate::error::Result;

/// Profile name used by image engines
pub const XMP_PROFILE_NAME: &str = "xmp";

/// Trim trailing NUL bytes, keeping at least two bytes
pub fn trim_padding(data: &[u8]) -> &[u8] {
    let mut len = data.len();
    while len > 2 && data[len - 1] == 0 {
        len -= 1;
    }
    &data[..len]
}

/// An XMP packet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmpProfile {
    data: Vec<u8>,
}

impl XmpProfile {
    /// Wrap packet bytes, trimming trailing padding
    pub fn new(mut data: Vec<u8>) -> Self {
        let len = trim_padding(&data).len();
        data.truncate(len);
        Self { data }
    }

    /// XMP never reports truncation; the XML is validated lazily
    pub fn parse(data: &[u8]) -> Decoded<Self> {
        Decoded::complete(Self::new(trim_padding(data).to_vec()))
    }

    /// Serialize an element tree into a packet
    pub fn from_document(document: &XmlElement) -> Result<Self> {
        Ok(Self::new(document.to_bytes()?))
    }

    /// Packet bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Streaming reader over the packet
    pub fn reader(&self) -> Reader<&[u8]> {
        let mut reader = Reader::from_reader(self.data.as_slice());
        reader.trim_text(true);
        reader
    }

    /// Owned element tree of the packet's root element
    pub fn to_document(&self) -> Result<XmlElement> {
        XmlElement::parse(&self.data)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.clone()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::Event;

    const PACKET: &[u8] = br#"<x:xmpmeta xmlns:x="adobe:ns:meta/"><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"/></x:xmpmeta>"#;

    #[test]
    fn test_trim_padding() {
        let mut padded = PACKET.to_vec();
        padded.extend_from_slice(&[0, 0, 0, 0]);

        let profile = XmpProfile::new(padded);
        assert_eq!(profile.data(), PACKET);
    }

    #[test]
    fn test_trim_keeps_two_bytes() {
        assert_eq!(trim_padding(&[0, 0, 0, 0]), &[0, 0]);
        assert_eq!(trim_padding(&[b'a', 0, 0]), &[b'a', 0]);
        assert_eq!(trim_padding(&[0]), &[0]);
        assert_eq!(trim_padding(&[]), &[] as &[u8]);
    }

    #[test]
    fn test_trim_idempotent() {
        let data = [b'<', b'a', b'/', b'>', 0, 0, 0];
        let once = trim_padding(&data);
        assert_eq!(trim_padding(once), once);
    }

    #[test]
    fn test_reader_view() {
        let profile = XmpProfile::new(PACKET.to_vec());
        let mut reader = profile.reader();
        let mut buf = Vec::new();

        let mut names = Vec::new();
        loop {
            match reader.read_event_into(&mut buf).expect("well-formed") {
                Event::Start(e) | Event::Empty(e) => {
                    names.push(String::from_utf8_lossy(e.name().as_ref()).into_owned())
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        assert_eq!(names, vec!["x:xmpmeta", "rdf:RDF"]);
    }

    #[test]
    fn test_document_round_trip() {
        let profile = XmpProfile::new(PACKET.to_vec());
        let document = profile.to_document().expect("well-formed");
        assert_eq!(document.children[0].name, "rdf:RDF");

        let rebuilt = XmpProfile::from_document(&document).expect("writes to memory");
        assert_eq!(rebuilt.to_document().expect("well-formed"), document);
    }
}
