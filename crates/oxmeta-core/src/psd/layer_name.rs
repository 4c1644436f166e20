//! Unicode layer name (`luni`) records

use tracing::debug;

use super::block::{BlockKey, PsdInfoBlock, blocks};
use crate::encoding::{UnitOrder, code_unit_bytes, code_units};

/// Layer name carried by the first `luni` block of `data`
///
/// Returns `None` when no such block exists or the blob is malformed before it.
pub fn unicode_layer_name(data: &[u8]) -> Option<String> {
    let block = blocks(data).find(|block| block.key == BlockKey::UNICODE_LAYER_NAME)?;
    decode_unicode_string(block.data)
}

/// Decode a `count` + UTF-16BE code unit record
pub fn decode_unicode_string(record: &[u8]) -> Option<String> {
    let count = u32::from_be_bytes(record.get(..4)?.try_into().ok()?) as usize;
    let end = count.checked_mul(2)?.checked_add(4)?;
    if end > record.len() {
        debug!(count, size = record.len(), "luni record shorter than its count");
        return None;
    }

    let units = code_units(&record[4..end], UnitOrder::Big);
    Some(String::from_utf16_lossy(&units))
}

/// Encode `name` as a `count` + UTF-16BE code unit record
pub fn encode_unicode_string(name: &str) -> Vec<u8> {
    let units: Vec<u16> = name.encode_utf16().collect();
    let mut record = Vec::with_capacity(4 + units.len() * 2);
    record.extend_from_slice(&(units.len() as u32).to_be_bytes());
    record.extend(code_unit_bytes(&units, UnitOrder::Big));
    record
}

/// A complete `luni` block
pub fn unicode_layer_name_block(name: &str) -> Vec<u8> {
    let record = encode_unicode_string(name);
    let mut out = Vec::new();
    PsdInfoBlock::new(BlockKey::UNICODE_LAYER_NAME, &record).write_to(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luni_test_blob() -> Vec<u8> {
        let mut data = b"8BIMluni".to_vec();
        data.extend_from_slice(&12u32.to_be_bytes());
        data.extend_from_slice(&4u32.to_be_bytes());
        data.extend_from_slice(&[0, b't', 0, b'e', 0, b's', 0, b't']);
        data
    }

    #[test]
    fn test_luni_test() {
        assert_eq!(unicode_layer_name(&luni_test_blob()), Some("test".to_string()));
    }

    #[test]
    fn test_truncated_blob_not_found() {
        let mut data = luni_test_blob();
        data.truncate(data.len() - 1);
        assert_eq!(unicode_layer_name(&data), None);
    }

    #[test]
    fn test_count_exceeds_size() {
        let mut data = b"8BIMluni".to_vec();
        data.extend_from_slice(&8u32.to_be_bytes());
        data.extend_from_slice(&4u32.to_be_bytes());
        data.extend_from_slice(&[0, b't', 0, b'e']);
        assert_eq!(unicode_layer_name(&data), None);
    }

    #[test]
    fn test_skips_other_blocks() {
        let mut data = Vec::new();
        PsdInfoBlock::new(BlockKey::LAYER_ID, &[0, 0, 0, 1]).write_to(&mut data);
        data.extend(unicode_layer_name_block("Layer ü"));
        assert_eq!(unicode_layer_name(&data), Some("Layer ü".to_string()));
    }

    #[test]
    fn test_no_luni() {
        let mut data = Vec::new();
        PsdInfoBlock::new(BlockKey::LAYER_ID, &[0, 0, 0, 1]).write_to(&mut data);
        assert_eq!(unicode_layer_name(&data), None);
        assert_eq!(unicode_layer_name(&[]), None);
    }

    #[test]
    fn test_surrogate_pairs() {
        let record = encode_unicode_string("𝄞");
        assert_eq!(&record[..4], &[0, 0, 0, 2]);
        assert_eq!(decode_unicode_string(&record), Some("𝄞".to_string()));
    }
}
