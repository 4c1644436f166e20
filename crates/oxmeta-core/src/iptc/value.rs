//! A single IPTC dataset

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{FixedOffset, NaiveDate, NaiveTime};

use super::tag::IptcTag;
use crate::container::ProfileValue;
use crate::encoding::TextEncoding;

/// Format of date datasets
pub(crate) const DATE_FORMAT: &str = "%Y%m%d";
/// Format of time datasets
pub(crate) const TIME_FORMAT: &str = "%H%M%S%z";

/// IPTC value: tag, raw payload and the encoding used to project it to text
///
/// Equality and hashing only look at the tag and the raw bytes.
#[derive(Debug, Clone)]
pub struct IptcValue {
    tag: IptcTag,
    data: Vec<u8>,
    encoding: TextEncoding,
}

impl IptcValue {
    /// Wrap a raw payload, interpreted as UTF-8
    pub fn new(tag: IptcTag, data: Vec<u8>) -> Self {
        Self {
            tag,
            data,
            encoding: TextEncoding::Utf8,
        }
    }

    /// Wrap a raw payload interpreted with `encoding`
    pub fn with_encoding(tag: IptcTag, data: Vec<u8>, encoding: TextEncoding) -> Self {
        Self {
            tag,
            data,
            encoding,
        }
    }

    /// Encode `text` with `encoding`
    pub fn with_text(tag: IptcTag, encoding: TextEncoding, text: &str) -> Self {
        Self {
            tag,
            data: encoding.encode(text),
            encoding,
        }
    }

    pub fn tag(&self) -> IptcTag {
        self.tag
    }

    /// Raw payload
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Replace the raw payload
    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Change the encoding, re-encoding the current text
    pub fn set_encoding(&mut self, encoding: TextEncoding) {
        if encoding == self.encoding {
            return;
        }

        let text = self.value();
        self.encoding = encoding;
        self.data = encoding.encode(&text);
    }

    /// Payload decoded with the value's encoding
    pub fn value(&self) -> String {
        self.encoding.decode(&self.data)
    }

    /// Replace the payload with `text` in the value's encoding
    pub fn set_value(&mut self, text: &str) {
        self.data = self.encoding.encode(text);
    }

    /// Parse a `CCYYMMDD` payload
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.value(), DATE_FORMAT).ok()
    }

    /// Parse a `HHMMSS±HHMM` payload
    pub fn time(&self) -> Option<(NaiveTime, FixedOffset)> {
        let text = self.value();
        if text.len() != 11 || !text.is_char_boundary(6) {
            return None;
        }

        let (time, zone) = text.split_at(6);
        let time = NaiveTime::parse_from_str(time, "%H%M%S").ok()?;

        let sign = match zone.as_bytes().first() {
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => return None,
        };
        let hours: i32 = zone.get(1..3)?.parse().ok()?;
        let minutes: i32 = zone.get(3..5)?.parse().ok()?;
        let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?;

        Some((time, offset))
    }

    /// Binary big-endian number (RecordVersion)
    pub fn as_u16(&self) -> Option<u16> {
        match self.data.as_slice() {
            [hi, lo] => Some(u16::from_be_bytes([*hi, *lo])),
            _ => None,
        }
    }
}

impl PartialEq for IptcValue {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.data == other.data
    }
}

impl Eq for IptcValue {}

impl Hash for IptcValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
        self.data.hash(state);
    }
}

impl fmt::Display for IptcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

impl ProfileValue for IptcValue {
    type Tag = IptcTag;

    fn tag(&self) -> IptcTag {
        self.tag
    }

    fn is_repeatable(tag: IptcTag) -> bool {
        tag.is_repeatable()
    }
}
