//! TIFF/EXIF IFD reader
//!
//! # Layout
//!
//! ```text
//! [Exif\0\0]                optional APP1 prefix
//! II|MM  u16 42  u32 ifd0   TIFF header, offsets relative to the header
//! u16 count                 per IFD
//! count * { u16 tag, u16 type, u32 components, u32 value-or-offset }
//! u32 next                  IFD1 after IFD0
//! ```
//!
//! Values of four bytes or less sit in the entry itself, left aligned.

use std::collections::HashSet;
use std::marker::PhantomData;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use tracing::{debug, trace, warn};

use super::ExifByteOrder;
use super::data_type::ExifDataType;
use super::tag::ExifTag;
use super::value::{ExifValue, ExifValueData};
use crate::container::Decoded;

/// APP1 prefix in front of the TIFF header
pub const EXIF_HEADER: &[u8; 6] = b"Exif\0\0";

const TIFF_MAGIC: u16 = 42;
const ENTRY_SIZE: usize = 12;
/// Interoperability IFD offset; the sub-IFD is not followed
const INTEROP_IFD_POINTER: ExifTag = ExifTag(0xA005);

/// Everything recovered from an EXIF block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExifData {
    pub values: Vec<ExifValue>,
    /// Entries whose data lies outside the block
    pub invalid_tags: Vec<ExifTag>,
    pub thumbnail: Option<Vec<u8>>,
    pub byte_order: ExifByteOrder,
}

/// Decode an EXIF block, with or without the `Exif\0\0` prefix
pub fn read_exif(data: &[u8]) -> Decoded<ExifData> {
    let tiff = data.strip_prefix(EXIF_HEADER.as_slice()).unwrap_or(data);

    match tiff.get(..2) {
        Some(b"II") => IfdReader::<LittleEndian>::new(tiff).read(ExifByteOrder::LittleEndian),
        Some(b"MM") => IfdReader::<BigEndian>::new(tiff).read(ExifByteOrder::BigEndian),
        _ => {
            debug!(len = data.len(), "missing TIFF byte order mark");
            Decoded::truncated(ExifData::default())
        }
    }
}

/// Which IFD the reader is in; IFD1 only yields the thumbnail location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directory {
    Primary,
    Exif,
    Gps,
    Thumbnail,
}

struct IfdReader<'a, B> {
    data: &'a [u8],
    result: ExifData,
    visited: HashSet<usize>,
    truncated: bool,
    exif_offset: Option<u32>,
    gps_offset: Option<u32>,
    thumbnail_offset: Option<u32>,
    thumbnail_length: Option<u32>,
    _order: PhantomData<B>,
}

impl<'a, B: ByteOrder> IfdReader<'a, B> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            result: ExifData::default(),
            visited: HashSet::new(),
            truncated: false,
            exif_offset: None,
            gps_offset: None,
            thumbnail_offset: None,
            thumbnail_length: None,
            _order: PhantomData,
        }
    }

    fn read(mut self, byte_order: ExifByteOrder) -> Decoded<ExifData> {
        self.result.byte_order = byte_order;

        let Some(header) = self.data.get(..8) else {
            debug!(len = self.data.len(), "TIFF header too short");
            return Decoded::truncated(self.result);
        };
        if B::read_u16(&header[2..4]) != TIFF_MAGIC {
            debug!(magic = B::read_u16(&header[2..4]), "bad TIFF magic");
            return Decoded::truncated(self.result);
        }

        let ifd0 = B::read_u32(&header[4..8]);
        let next = self.read_ifd(ifd0, Directory::Primary);

        if let Some(ifd1) = next.filter(|&offset| offset != 0) {
            self.read_ifd(ifd1, Directory::Thumbnail);
        }
        if let Some(offset) = self.exif_offset.take() {
            self.read_ifd(offset, Directory::Exif);
        }
        if let Some(offset) = self.gps_offset.take() {
            self.read_ifd(offset, Directory::Gps);
        }
        self.read_thumbnail();

        let truncated = self.truncated;
        Decoded {
            value: self.result,
            truncated,
        }
    }

    /// Read one IFD, returning the offset of the next one
    fn read_ifd(&mut self, offset: u32, directory: Directory) -> Option<u32> {
        let data = self.data;
        let start = offset as usize;
        if !self.visited.insert(start) {
            warn!(offset, ?directory, "cyclic IFD offset");
            self.truncated = true;
            return None;
        }

        let Some(count) = data.get(start..start + 2).map(B::read_u16) else {
            debug!(offset, ?directory, "IFD offset out of range");
            self.truncated = true;
            return None;
        };

        let entries_start = start + 2;
        for index in 0..usize::from(count) {
            let entry_start = entries_start + index * ENTRY_SIZE;
            let Some(entry) = data.get(entry_start..entry_start + ENTRY_SIZE) else {
                debug!(offset, index, count, "IFD entries run past the block");
                self.truncated = true;
                return None;
            };
            self.read_entry(entry, directory);
        }

        let next_start = entries_start + usize::from(count) * ENTRY_SIZE;
        data.get(next_start..next_start + 4).map(B::read_u32)
    }

    fn read_entry(&mut self, entry: &'a [u8], directory: Directory) {
        let tag = ExifTag(B::read_u16(&entry[..2]));
        let type_code = B::read_u16(&entry[2..4]);
        let Some(data_type) = ExifDataType::from_u16(type_code) else {
            trace!(%tag, type_code, "skipping entry of unknown type");
            return;
        };

        let mut count = B::read_u32(&entry[4..8]) as usize;
        if count == 0 {
            if data_type != ExifDataType::Undefined {
                trace!(%tag, "skipping empty entry");
                return;
            }
            count = 4;
        }

        let Some(bytes) = self.value_bytes(entry, data_type, count) else {
            debug!(%tag, count, "entry data out of range");
            self.result.invalid_tags.push(tag);
            return;
        };
        let Some(data) = ExifValueData::decode::<B>(data_type, bytes, count) else {
            self.result.invalid_tags.push(tag);
            return;
        };

        match tag {
            ExifTag::EXIF_IFD_POINTER => self.exif_offset = data.as_u32(),
            ExifTag::GPS_IFD_POINTER => self.gps_offset = data.as_u32(),
            INTEROP_IFD_POINTER => {}
            _ if directory == Directory::Thumbnail => match tag {
                ExifTag::JPEG_INTERCHANGE_FORMAT => self.thumbnail_offset = data.as_u32(),
                ExifTag::JPEG_INTERCHANGE_FORMAT_LENGTH => self.thumbnail_length = data.as_u32(),
                _ => {}
            },
            _ if self.result.values.iter().any(|v| v.tag() == tag) => {
                debug!(%tag, "dropping duplicate entry");
            }
            _ => self.push_value(tag, data),
        }
    }

    /// Registry tags take their declared type; others keep the stored one
    fn push_value(&mut self, tag: ExifTag, data: ExifValueData) {
        let Some(info) = tag.info() else {
            self.result.values.push(ExifValue::from_data(tag, data));
            return;
        };

        let stored = data.data_type();
        match data.convert(info.data_type, info.is_array) {
            Some(data) => self.result.values.push(ExifValue::from_data(tag, data)),
            None => {
                debug!(%tag, %stored, expected = %info.data_type, "entry type does not fit the tag");
                self.result.invalid_tags.push(tag);
            }
        }
    }

    fn value_bytes(&self, entry: &'a [u8], data_type: ExifDataType, count: usize) -> Option<&'a [u8]> {
        let size = count.checked_mul(data_type.size())?;
        if size <= 4 {
            return Some(&entry[8..8 + size]);
        }

        let data: &'a [u8] = self.data;
        let offset = B::read_u32(&entry[8..12]) as usize;
        data.get(offset..offset.checked_add(size)?)
    }

    fn read_thumbnail(&mut self) {
        let (Some(offset), Some(length)) = (self.thumbnail_offset, self.thumbnail_length) else {
            return;
        };
        let (offset, length) = (offset as usize, length as usize);

        match offset
            .checked_add(length)
            .and_then(|end| self.data.get(offset..end))
        {
            Some(thumbnail) if length > 0 => self.result.thumbnail = Some(thumbnail.to_vec()),
            _ => debug!(offset, length, "thumbnail out of range"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif::rational::Rational;

    /// Little endian block with Make, XResolution and an Exif IFD holding ExposureTime
    fn sample_block() -> Vec<u8> {
        let mut data = b"II".to_vec();
        data.extend_from_slice(&42u16.to_le_bytes());
        data.extend_from_slice(&8u32.to_le_bytes());

        // IFD0 at 8: three entries, ends at 8 + 2 + 36 + 4 = 50
        data.extend_from_slice(&3u16.to_le_bytes());
        // Make "Acme\0" -> 5 bytes at offset 50
        entry(&mut data, 0x010F, 2, 5, 50);
        // XResolution rational at 56
        entry(&mut data, 0x011A, 5, 1, 56);
        // Exif IFD at 64
        entry(&mut data, 0x8769, 4, 1, 64);
        data.extend_from_slice(&0u32.to_le_bytes());

        data.extend_from_slice(b"Acme\0\0");
        data.extend_from_slice(&300u32.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());

        // Exif IFD at 64: ExposureTime rational at 64 + 2 + 12 + 4 = 82
        data.extend_from_slice(&1u16.to_le_bytes());
        entry(&mut data, 0x829A, 5, 1, 82);
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&250u32.to_le_bytes());
        data
    }

    fn entry(data: &mut Vec<u8>, tag: u16, data_type: u16, count: u32, value: u32) {
        data.extend_from_slice(&tag.to_le_bytes());
        data.extend_from_slice(&data_type.to_le_bytes());
        data.extend_from_slice(&count.to_le_bytes());
        data.extend_from_slice(&value.to_le_bytes());
    }

    #[test]
    fn test_read_with_sub_ifd() {
        let decoded = read_exif(&sample_block());
        assert!(!decoded.truncated);

        let exif = decoded.value;
        assert_eq!(exif.byte_order, ExifByteOrder::LittleEndian);
        let tags: Vec<_> = exif.values.iter().map(|v| v.tag()).collect();
        assert_eq!(
            tags,
            vec![ExifTag::MAKE, ExifTag::X_RESOLUTION, ExifTag::EXPOSURE_TIME]
        );
        assert_eq!(exif.values[0].data(), &ExifValueData::Ascii("Acme".to_string()));
        assert_eq!(
            exif.values[2].data(),
            &ExifValueData::Rational(Rational::new(1, 250))
        );
    }

    #[test]
    fn test_app1_prefix() {
        let mut data = EXIF_HEADER.to_vec();
        data.extend_from_slice(&sample_block());
        let decoded = read_exif(&data);
        assert!(!decoded.truncated);
        assert_eq!(decoded.value.values.len(), 3);
    }

    #[test]
    fn test_out_of_range_value() {
        let mut data = sample_block();
        // point XResolution past the end
        data[30..34].copy_from_slice(&1000u32.to_le_bytes());

        let exif = read_exif(&data).value;
        assert_eq!(exif.invalid_tags, vec![ExifTag::X_RESOLUTION]);
        assert!(exif.values.iter().all(|v| v.tag() != ExifTag::X_RESOLUTION));
    }

    #[test]
    fn test_cyclic_ifd() {
        let mut data = sample_block();
        // Exif IFD pointer back to IFD0
        data[42..46].copy_from_slice(&8u32.to_le_bytes());

        let decoded = read_exif(&data);
        assert!(decoded.truncated);
        assert_eq!(decoded.value.values.len(), 2);
    }

    #[test]
    fn test_bad_header() {
        assert!(read_exif(b"XX\x2a\x00").truncated);
        assert!(read_exif(b"II\x2b\x00\x08\x00\x00\x00").truncated);
        assert!(read_exif(&[]).truncated);
    }

    #[test]
    fn test_truncated_entries() {
        let data = sample_block();
        let decoded = read_exif(&data[..30]);
        assert!(decoded.truncated);
        assert_eq!(decoded.value.values.len(), 0);
    }

    /// Big endian IFD0 holding a single entry
    fn single_entry_block(entry: [u8; 12]) -> Vec<u8> {
        let mut data = b"MM\x00\x2a\x00\x00\x00\x08".to_vec();
        data.extend_from_slice(&1u16.to_be_bytes());
        data.extend_from_slice(&entry);
        data.extend_from_slice(&0u32.to_be_bytes());
        data
    }

    #[test]
    fn test_stored_type_converted_to_registry() {
        // Orientation as LONG 1
        let exif = read_exif(&single_entry_block([
            0x01, 0x12, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
        ]))
        .value;

        assert!(exif.invalid_tags.is_empty());
        let mut orientation = exif.values[0].clone();
        assert_eq!(orientation.data(), &ExifValueData::Short(1));
        assert_eq!(orientation.data_type(), ExifDataType::Short);
        assert!(orientation.set_value(ExifValueData::Short(6)));
    }

    #[test]
    fn test_incompatible_type_is_invalid() {
        // Orientation as ASCII "6"
        let exif = read_exif(&single_entry_block([
            0x01, 0x12, 0x00, 0x02, 0x00, 0x00, 0x00, 0x02, b'6', 0x00, 0x00, 0x00,
        ]))
        .value;
        assert!(exif.values.is_empty());
        assert_eq!(exif.invalid_tags, vec![ExifTag::ORIENTATION]);

        // LONG too large for the SHORT the tag declares
        let exif = read_exif(&single_entry_block([
            0x01, 0x12, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00,
        ]))
        .value;
        assert_eq!(exif.invalid_tags, vec![ExifTag::ORIENTATION]);
    }

    #[test]
    fn test_unregistered_tag_keeps_stored_type() {
        let exif = read_exif(&single_entry_block([
            0xBE, 0xEF, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x09,
        ]))
        .value;
        assert_eq!(exif.values[0].tag(), ExifTag(0xBEEF));
        assert_eq!(exif.values[0].data(), &ExifValueData::Long(9));
    }

    #[test]
    fn test_single_component_array() {
        let mut data = b"MM\x00\x2a\x00\x00\x00\x08".to_vec();
        data.extend_from_slice(&1u16.to_be_bytes());
        // GPSVersionID as one BYTE in IFD0 (registry says array)
        data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 7, 0, 0, 0]);
        data.extend_from_slice(&0u32.to_be_bytes());

        let exif = read_exif(&data).value;
        assert_eq!(exif.values[0].data(), &ExifValueData::ByteArray(vec![7]));
        assert!(exif.values[0].is_array());
    }
}
