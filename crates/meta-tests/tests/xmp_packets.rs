//! XMP packet tests
//!
//! Padding normalization, the streaming and tree views, and packets stored in
//! other profiles.

use oxmeta_core::eightbim::{EightBimProfile, EightBimValue, ResourceId};
use oxmeta_core::xmp::{XmlElement, XmpProfile, trim_padding};
use oxmeta_core::{CodecOptions, ImageProfile};
use proptest::prelude::*;
use quick_xml::events::Event;

const PACKET: &str = r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about="" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:xmp="http://ns.adobe.com/xap/1.0/" xmp:Rating="4">
      <dc:title>
        <rdf:Alt>
          <rdf:li xml:lang="x-default">Harbor &amp; lighthouse</rdf:li>
        </rdf:Alt>
      </dc:title>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#;

#[test]
fn test_tree_view() {
    let profile = XmpProfile::new(PACKET.as_bytes().to_vec());
    let document = profile.to_document().unwrap();

    assert_eq!(document.name, "x:xmpmeta");
    let description = document.find("Description").unwrap();
    assert_eq!(description.attribute("xmp:Rating"), Some("4"));
    assert_eq!(description.attribute("Rating"), Some("4"));
    assert_eq!(document.find("li").map(|li| li.text.as_str()), Some("Harbor & lighthouse"));
}

#[test]
fn test_streaming_view() {
    let profile = XmpProfile::new(PACKET.as_bytes().to_vec());
    let mut reader = profile.reader();
    let mut buf = Vec::new();
    let mut elements = 0;

    loop {
        match reader.read_event_into(&mut buf).unwrap() {
            Event::Start(_) | Event::Empty(_) => elements += 1,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    assert_eq!(elements, 6);
}

#[test]
fn test_views_regenerate_from_bytes() {
    let profile = XmpProfile::new(PACKET.as_bytes().to_vec());
    let first = profile.to_document().unwrap();
    let second = profile.to_document().unwrap();
    assert_eq!(first, second);
    assert_eq!(profile.data(), PACKET.as_bytes());
}

#[test]
fn test_document_serialization() {
    let document = XmlElement::new("x:xmpmeta")
        .with_attribute("xmlns:x", "adobe:ns:meta/")
        .with_child(XmlElement::new("dc:creator").with_text("A & B <co>"));

    let profile = XmpProfile::from_document(&document).unwrap();
    assert_eq!(profile.to_document().unwrap(), document);
}

#[test]
fn test_malformed_xml_is_error_not_panic() {
    let profile = XmpProfile::new(b"<x:xmpmeta><rdf:RDF>".to_vec());
    assert!(profile.to_document().is_err());
    assert!(XmpProfile::new(b"   ".to_vec()).to_document().is_err());
}

#[test]
fn test_padded_packet_through_facade() {
    let mut padded = PACKET.as_bytes().to_vec();
    padded.resize(padded.len() + 2048, 0);

    let profile = ImageProfile::decode("xmp", &padded, &CodecOptions::default());
    assert_eq!(profile.to_bytes().unwrap(), PACKET.as_bytes());
}

#[test]
fn test_packet_inside_8bim() {
    let mut profile = EightBimProfile::new();
    profile.set_value(EightBimValue::new(ResourceId::XMP, PACKET.as_bytes().to_vec()));

    let xmp = profile.xmp_profile().unwrap();
    assert!(xmp.to_document().unwrap().find("RDF").is_some());
}

proptest! {
    #[test]
    fn test_trim_idempotent(
        body in prop::collection::vec(any::<u8>(), 0..64),
        padding in 0usize..16,
    ) {
        let mut data = body;
        data.resize(data.len() + padding, 0);

        let once = trim_padding(&data);
        prop_assert_eq!(trim_padding(once), once);
        prop_assert!(once.len() >= data.len().min(2));
        prop_assert!(once.len() <= 2 || once.last() != Some(&0));
    }
}
