//! PSD additional layer information (`psd:additional-info`)
//!
//! The blob is kept verbatim; readers borrow blocks from it and the write side
//! filters it through a [`PsdInfoPolicy`].

mod block;
mod layer_name;
mod policy;

pub use block::{BLOCK_HEADER_SIZE, BlockKey, PsdInfoBlock, PsdInfoBlocks, SIGNATURE, blocks};
pub use layer_name::{
    decode_unicode_string, encode_unicode_string, unicode_layer_name, unicode_layer_name_block,
};
pub use policy::{PsdInfoPolicy, SELECTIVE_KEYS};

use crate::container::Decoded;

/// Profile name used by image engines
pub const PSD_INFO_PROFILE_NAME: &str = "psd:additional-info";

/// Additional layer information blob
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PsdAdditionalInfo {
    data: Vec<u8>,
    policy: PsdInfoPolicy,
}

impl PsdAdditionalInfo {
    pub fn new(data: Vec<u8>, policy: PsdInfoPolicy) -> Self {
        Self { data, policy }
    }

    /// Wrap a blob, reporting whether its block structure is intact
    pub fn parse(data: &[u8], policy: PsdInfoPolicy) -> Decoded<Self> {
        let mut iter = blocks(data);
        iter.by_ref().for_each(drop);
        let truncated = iter.is_truncated() || !iter.remaining().is_empty();

        Decoded {
            value: Self::new(data.to_vec(), policy),
            truncated,
        }
    }

    /// Raw blob
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn policy(&self) -> PsdInfoPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: PsdInfoPolicy) {
        self.policy = policy;
    }

    /// Blocks of the blob
    pub fn blocks(&self) -> PsdInfoBlocks<'_> {
        blocks(&self.data)
    }

    /// Layer name from the `luni` block
    pub fn layer_name(&self) -> Option<String> {
        unicode_layer_name(&self.data)
    }

    /// Blob filtered by the policy; empty means drop
    pub fn to_bytes(&self) -> Vec<u8> {
        self.policy.apply(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_name_and_policy() {
        let mut data = unicode_layer_name_block("Background");
        PsdInfoBlock::new(BlockKey::SECTION_DIVIDER, &[0, 0, 0, 0]).write_to(&mut data);

        let decoded = PsdAdditionalInfo::parse(&data, PsdInfoPolicy::Selective);
        assert!(!decoded.truncated);

        let info = decoded.value;
        assert_eq!(info.layer_name(), Some("Background".to_string()));
        assert_eq!(info.blocks().count(), 2);
        assert_eq!(info.to_bytes(), unicode_layer_name_block("Background"));
    }

    #[test]
    fn test_parse_flags_trailing_bytes() {
        let mut data = unicode_layer_name_block("a");
        data.push(0);
        assert!(PsdAdditionalInfo::parse(&data, PsdInfoPolicy::All).truncated);
    }
}
