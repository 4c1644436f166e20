//! TIFF/EXIF IFD writer
//!
//! Output is `Exif\0\0`, the TIFF header, IFD0 with its sub-IFD pointers, then
//! the Exif and GPS IFDs. Each IFD is followed by its out-of-line data, every
//! item padded to an even length. IFD1 is never written.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::ExifByteOrder;
use super::reader::EXIF_HEADER;
use super::tag::{ExifIfd, ExifParts, ExifTag};
use super::value::{ExifValue, ExifValueData};

const TIFF_MAGIC: u16 = 42;
const FIRST_IFD_OFFSET: u32 = 8;

/// Encode `values`, keeping only the IFDs selected by `parts`
///
/// Returns an empty buffer when nothing is left to write.
pub fn write_exif(values: &[ExifValue], parts: ExifParts, byte_order: ExifByteOrder) -> Vec<u8> {
    match byte_order {
        ExifByteOrder::LittleEndian => write_ordered::<LittleEndian>(values, parts, b"II"),
        ExifByteOrder::BigEndian => write_ordered::<BigEndian>(values, parts, b"MM"),
    }
}

type Entry<'v> = (ExifTag, &'v ExifValueData);

fn write_ordered<B: ByteOrder>(values: &[ExifValue], parts: ExifParts, mark: &[u8; 2]) -> Vec<u8> {
    let mut primary: Vec<Entry<'_>> = Vec::new();
    let mut exif: Vec<Entry<'_>> = Vec::new();
    let mut gps: Vec<Entry<'_>> = Vec::new();

    for value in values {
        let tag = value.tag();
        // unknown tags go to IFD0
        let ifd = tag.ifd().unwrap_or(ExifIfd::Primary);
        if !parts.allows(ifd) || value.data().is_empty() {
            continue;
        }
        match ifd {
            ExifIfd::Primary => primary.push((tag, value.data())),
            ExifIfd::Exif => exif.push((tag, value.data())),
            ExifIfd::Gps => gps.push((tag, value.data())),
            ExifIfd::Thumbnail | ExifIfd::Pointer => {}
        }
    }

    if primary.is_empty() && exif.is_empty() && gps.is_empty() {
        return Vec::new();
    }

    // pointer entries hold placeholders until the sub-IFD offsets are known
    let pointer_count = usize::from(!exif.is_empty()) + usize::from(!gps.is_empty());
    let primary_size = ifd_size(&primary) + pointer_count * 12;
    let exif_offset = FIRST_IFD_OFFSET as usize + primary_size;
    let gps_offset = exif_offset + if exif.is_empty() { 0 } else { ifd_size(&exif) };

    let exif_pointer = ExifValueData::Long(exif_offset as u32);
    let gps_pointer = ExifValueData::Long(gps_offset as u32);
    if !exif.is_empty() {
        primary.push((ExifTag::EXIF_IFD_POINTER, &exif_pointer));
    }
    if !gps.is_empty() {
        primary.push((ExifTag::GPS_IFD_POINTER, &gps_pointer));
    }

    let mut tiff = Vec::with_capacity(gps_offset + ifd_size(&gps));
    tiff.extend_from_slice(mark);
    push_u16::<B>(&mut tiff, TIFF_MAGIC);
    push_u32::<B>(&mut tiff, FIRST_IFD_OFFSET);

    for mut entries in [primary, exif, gps] {
        if entries.is_empty() {
            continue;
        }
        entries.sort_by_key(|(tag, _)| tag.0);
        write_ifd::<B>(&mut tiff, &entries);
    }

    let mut out = Vec::with_capacity(EXIF_HEADER.len() + tiff.len());
    out.extend_from_slice(EXIF_HEADER);
    out.extend_from_slice(&tiff);
    out
}

fn padded(len: usize) -> usize {
    len + len % 2
}

/// Bytes taken by an IFD and its out-of-line data
fn ifd_size(entries: &[Entry<'_>]) -> usize {
    let data: usize = entries
        .iter()
        .map(|(_, data)| data.byte_len())
        .filter(|&len| len > 4)
        .map(padded)
        .sum();
    2 + entries.len() * 12 + 4 + data
}

fn write_ifd<B: ByteOrder>(out: &mut Vec<u8>, entries: &[Entry<'_>]) {
    let data_start = out.len() + 2 + entries.len() * 12 + 4;
    let mut data_area = Vec::new();

    push_u16::<B>(out, entries.len() as u16);
    for (tag, data) in entries {
        push_u16::<B>(out, tag.0);
        push_u16::<B>(out, data.data_type().code());
        push_u32::<B>(out, data.component_count() as u32);

        let mut bytes = Vec::with_capacity(data.byte_len());
        data.write::<B>(&mut bytes);
        if bytes.len() <= 4 {
            bytes.resize(4, 0);
            out.extend_from_slice(&bytes);
        } else {
            push_u32::<B>(out, (data_start + data_area.len()) as u32);
            data_area.extend_from_slice(&bytes);
            data_area.resize(padded(data_area.len()), 0);
        }
    }
    push_u32::<B>(out, 0);
    out.extend_from_slice(&data_area);
}

fn push_u16<B: ByteOrder>(out: &mut Vec<u8>, value: u16) {
    let mut buf = [0; 2];
    B::write_u16(&mut buf, value);
    out.extend_from_slice(&buf);
}

fn push_u32<B: ByteOrder>(out: &mut Vec<u8>, value: u32) {
    let mut buf = [0; 4];
    B::write_u32(&mut buf, value);
    out.extend_from_slice(&buf);
}
