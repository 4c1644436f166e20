//! Image resource block stream reader and writer
//!
//! # Layout
//!
//! 1. Signature `8BIM`
//! 2. Resource ID (2 bytes, big-endian)
//! 3. Pascal name, padded so that length byte + name is even
//! 4. Data size (4 bytes, big-endian)
//! 5. Data, padded to an even size

use tracing::debug;

use super::resource::ResourceId;
use super::value::EightBimValue;
use crate::container::Decoded;

/// Block signature
pub const SIGNATURE: &[u8; 4] = b"8BIM";

/// Read every resource block in order
pub fn read_resources(data: &[u8]) -> Decoded<Vec<EightBimValue>> {
    let mut values = Vec::new();
    let mut i = 0;

    while i < data.len() {
        match read_block(data, i) {
            Some((value, next)) => {
                values.push(value);
                i = next;
            }
            None => {
                debug!(offset = i, remaining = data.len() - i, "8BIM stream stopped early");
                return Decoded::truncated(values);
            }
        }
    }

    Decoded::complete(values)
}

/// Read one block at `start`, returning it and the offset of the next block
fn read_block(data: &[u8], start: usize) -> Option<(EightBimValue, usize)> {
    let mut i = start;

    if data.get(i..i + 4)? != SIGNATURE {
        return None;
    }
    i += 4;

    let id = ResourceId(u16::from_be_bytes(data.get(i..i + 2)?.try_into().ok()?));
    i += 2;

    let name_length = usize::from(*data.get(i)?);
    let name = data.get(i + 1..i + 1 + name_length)?.to_vec();
    i += 1 + name_length;
    if (1 + name_length) % 2 != 0 {
        i += 1;
    }

    let size = u32::from_be_bytes(data.get(i..i + 4)?.try_into().ok()?) as usize;
    i += 4;

    let payload = data.get(i..i.checked_add(size)?)?.to_vec();
    i += size;
    if size % 2 != 0 {
        // A missing final pad byte is tolerated
        i = (i + 1).min(data.len());
    }

    Some((EightBimValue::with_name(id, name, payload).ok()?, i))
}

/// Append one block to `out`
pub fn write_resource(out: &mut Vec<u8>, value: &EightBimValue) {
    out.extend_from_slice(SIGNATURE);
    out.extend_from_slice(&value.id().0.to_be_bytes());

    let name = value.name();
    out.push(name.len() as u8);
    out.extend_from_slice(name);
    if (1 + name.len()) % 2 != 0 {
        out.push(0);
    }

    let data = value.data();
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(data);
    if data.len() % 2 != 0 {
        out.push(0);
    }
}

/// Serialize blocks in order
pub fn write_resources<'a>(values: impl IntoIterator<Item = &'a EightBimValue>) -> Vec<u8> {
    let mut out = Vec::new();
    for value in values {
        write_resource(&mut out, value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_layout() {
        let value = EightBimValue::with_name(ResourceId::CAPTION, b"ab".to_vec(), vec![1, 2, 3])
            .expect("short name");
        let bytes = write_resources([&value]);

        assert_eq!(
            bytes,
            vec![
                b'8', b'B', b'I', b'M', 0x03, 0xF0, // signature, id
                2, b'a', b'b', 0, // name + pad
                0, 0, 0, 3, // size
                1, 2, 3, 0, // data + pad
            ]
        );
    }

    #[test]
    fn test_empty_name_is_two_bytes() {
        let bytes = write_resources([&EightBimValue::new(ResourceId::URL, vec![9, 9])]);
        assert_eq!(&bytes[6..8], &[0, 0]);
        assert_eq!(bytes.len(), 4 + 2 + 2 + 4 + 2);
    }

    #[test]
    fn test_read_preserves_duplicates_and_names() {
        let a = EightBimValue::with_name(ResourceId::CAPTION, b"x".to_vec(), vec![1])
            .expect("short name");
        let b = EightBimValue::new(ResourceId::CAPTION, vec![2, 3]);
        let decoded = read_resources(&write_resources([&a, &b]));

        assert!(!decoded.truncated);
        assert_eq!(decoded.value, vec![a, b]);
        assert_eq!(decoded.value[0].name(), b"x");
    }

    #[test]
    fn test_bad_signature_stops() {
        let mut bytes = write_resources([&EightBimValue::new(ResourceId::URL, vec![1, 2])]);
        bytes.extend_from_slice(b"MeSa\x04\x04\x00\x00\x00\x00\x00\x00");

        let decoded = read_resources(&bytes);
        assert!(decoded.truncated);
        assert_eq!(decoded.value.len(), 1);
    }

    #[test]
    fn test_size_overrun_stops() {
        let mut bytes = write_resources([&EightBimValue::new(ResourceId::URL, vec![1, 2, 3, 4])]);
        bytes.truncate(bytes.len() - 2);

        let decoded = read_resources(&bytes);
        assert!(decoded.truncated);
        assert!(decoded.value.is_empty());
    }

    #[test]
    fn test_missing_final_pad() {
        let mut bytes = write_resources([&EightBimValue::new(ResourceId::URL, vec![7])]);
        bytes.pop();

        let decoded = read_resources(&bytes);
        assert!(!decoded.truncated);
        assert_eq!(decoded.value[0].data(), &[7]);
    }
}
