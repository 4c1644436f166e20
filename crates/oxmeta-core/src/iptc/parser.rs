//! IPTC dataset stream reader and writer
//!
//! # Layout
//!
//! Each dataset is framed as:
//! 1. Tag marker `0x1C`
//! 2. Record number (1 byte)
//! 3. Dataset number (1 byte)
//! 4. Length (2 bytes, big-endian)
//! 5. Payload
//!
//! When the high bit of the length word is set, its low 15 bits give the number of
//! following big-endian length octets (extended dataset).

use tracing::{debug, trace};

use super::tag::IptcTag;
use super::value::IptcValue;
use crate::container::Decoded;
use crate::encoding::TextEncoding;

/// Dataset marker byte
pub const TAG_MARKER: u8 = 0x1C;

/// Size of the standard dataset header
pub const HEADER_SIZE: usize = 5;

/// Largest payload expressible in a standard length word
pub const MAX_STANDARD_LENGTH: usize = 0x7FFF;

const EXTENDED_FLAG: u16 = 0x8000;

/// Read every dataset in stream order, interpreting text as UTF-8
///
/// Duplicates are kept; cardinality is applied by the profile.
pub fn read_datasets(data: &[u8]) -> Decoded<Vec<IptcValue>> {
    read_datasets_with(data, TextEncoding::Utf8)
}

/// Read every dataset, interpreting text with `encoding`
pub fn read_datasets_with(data: &[u8], encoding: TextEncoding) -> Decoded<Vec<IptcValue>> {
    let mut values = Vec::new();
    let mut truncated = false;
    let mut i = 0;

    while i < data.len() {
        if data[i] != TAG_MARKER {
            trace!(offset = i, byte = data[i], "Skipping non-marker byte in IPTC stream");
            truncated = true;
            i += 1;
            continue;
        }

        if data.len() - i < HEADER_SIZE {
            debug!(offset = i, remaining = data.len() - i, "IPTC dataset header cut short");
            return Decoded::truncated(values);
        }

        let tag = IptcTag::new(data[i + 1], data[i + 2]);
        let length_word = u16::from_be_bytes([data[i + 3], data[i + 4]]);
        i += HEADER_SIZE;

        let length = if length_word & EXTENDED_FLAG != 0 {
            let octets = usize::from(length_word & !EXTENDED_FLAG);
            match read_extended_length(&data[i..], octets) {
                Some(length) => {
                    i += octets;
                    length
                }
                None => {
                    debug!(%tag, octets, "Invalid extended IPTC length");
                    return Decoded::truncated(values);
                }
            }
        } else {
            usize::from(length_word)
        };

        if length > data.len() - i {
            debug!(%tag, length, remaining = data.len() - i, "IPTC dataset overruns buffer");
            return Decoded::truncated(values);
        }

        values.push(IptcValue::with_encoding(tag, data[i..i + length].to_vec(), encoding));
        i += length;
    }

    Decoded {
        value: values,
        truncated,
    }
}

fn read_extended_length(data: &[u8], octets: usize) -> Option<usize> {
    if octets == 0 || octets > 4 || octets > data.len() {
        return None;
    }

    let length = data[..octets]
        .iter()
        .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
    usize::try_from(length).ok()
}

/// Append one dataset to `out`
pub fn write_dataset(out: &mut Vec<u8>, value: &IptcValue) {
    let tag = value.tag();
    out.push(TAG_MARKER);
    out.push(tag.record());
    out.push(tag.dataset());

    let length = value.len();
    if length <= MAX_STANDARD_LENGTH {
        out.extend_from_slice(&(length as u16).to_be_bytes());
    } else {
        out.extend_from_slice(&(EXTENDED_FLAG | 4).to_be_bytes());
        out.extend_from_slice(&(length as u32).to_be_bytes());
    }

    out.extend_from_slice(value.data());
}

/// Serialize datasets in order
pub fn write_datasets<'a>(values: impl IntoIterator<Item = &'a IptcValue>) -> Vec<u8> {
    let mut out = Vec::new();
    for value in values {
        write_dataset(&mut out, value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(record: u8, dataset: u8, payload: &[u8]) -> Vec<u8> {
        let mut out = vec![TAG_MARKER, record, dataset];
        out.extend_from_slice(&(payload.len() as u16).to_be_bytes());
        out.extend_from_slice(payload);
        out
    }

    #[test]
    fn test_read_two_datasets() {
        let mut data = dataset(2, 5, b"Title");
        data.extend(dataset(2, 25, b"one"));

        let decoded = read_datasets(&data);
        assert!(!decoded.truncated);
        assert_eq!(decoded.value.len(), 2);
        assert_eq!(decoded.value[0].tag(), IptcTag::TITLE);
        assert_eq!(decoded.value[1].data(), b"one");
    }

    #[test]
    fn test_overrun_stops() {
        let mut data = dataset(2, 5, b"Title");
        data.extend_from_slice(&[TAG_MARKER, 2, 25, 0x00, 0x10, b'a']);

        let decoded = read_datasets(&data);
        assert!(decoded.truncated);
        assert_eq!(decoded.value.len(), 1);
    }

    #[test]
    fn test_short_header_stops() {
        let mut data = dataset(2, 5, b"Title");
        data.extend_from_slice(&[TAG_MARKER, 2, 25]);

        let decoded = read_datasets(&data);
        assert!(decoded.truncated);
        assert_eq!(decoded.value.len(), 1);
    }

    #[test]
    fn test_resync_over_junk() {
        let mut data = vec![0x00, 0xFF];
        data.extend(dataset(2, 120, b"caption"));

        let decoded = read_datasets(&data);
        assert!(decoded.truncated);
        assert_eq!(decoded.value.len(), 1);
        assert_eq!(decoded.value[0].tag(), IptcTag::CAPTION);
    }

    #[test]
    fn test_zero_length_dataset() {
        let decoded = read_datasets(&dataset(2, 5, b""));
        assert!(!decoded.truncated);
        assert!(decoded.value[0].is_empty());
    }

    #[test]
    fn test_extended_length() {
        let payload = vec![b'x'; MAX_STANDARD_LENGTH + 10];
        let value = IptcValue::new(IptcTag::CAPTION, payload.clone());
        let bytes = write_datasets([&value]);

        assert_eq!(&bytes[3..5], &[0x80, 0x04]);
        assert_eq!(bytes.len(), HEADER_SIZE + 4 + payload.len());

        let decoded = read_datasets(&bytes);
        assert!(!decoded.truncated);
        assert_eq!(decoded.value, vec![value]);
    }

    #[test]
    fn test_extended_length_octet_count_invalid() {
        let data = [TAG_MARKER, 2, 120, 0x80, 0x05, 0, 0, 0, 0, 1, b'a'];
        let decoded = read_datasets(&data);
        assert!(decoded.truncated);
        assert!(decoded.value.is_empty());
    }

    #[test]
    fn test_write_matches_layout() {
        let value = IptcValue::new(IptcTag::TITLE, b"test".to_vec());
        assert_eq!(write_datasets([&value]), dataset(2, 5, b"test"));
    }
}
