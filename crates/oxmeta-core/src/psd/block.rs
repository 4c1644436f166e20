//! Additional layer information blocks
//!
//! # Layout
//!
//! 1. Signature (4 bytes, usually `8BIM` or `8B64`)
//! 2. Key (4 ASCII bytes)
//! 3. Payload size (4 bytes, big-endian)
//! 4. Payload

use std::fmt;

use tracing::debug;

/// Size of a block header
pub const BLOCK_HEADER_SIZE: usize = 12;

/// Default block signature
pub const SIGNATURE: [u8; 4] = *b"8BIM";

/// Four-character block key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockKey(pub [u8; 4]);

impl BlockKey {
    pub const UNICODE_LAYER_NAME: Self = Self(*b"luni");
    pub const LAYER_ID: Self = Self(*b"lyid");
    pub const SECTION_DIVIDER: Self = Self(*b"lsct");

    pub const fn new(key: &[u8; 4]) -> Self {
        Self(*key)
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// One block borrowed from a blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PsdInfoBlock<'a> {
    pub signature: [u8; 4],
    pub key: BlockKey,
    pub data: &'a [u8],
}

impl<'a> PsdInfoBlock<'a> {
    pub fn new(key: BlockKey, data: &'a [u8]) -> Self {
        Self {
            signature: SIGNATURE,
            key,
            data,
        }
    }

    /// Header plus payload
    pub fn encoded_len(&self) -> usize {
        BLOCK_HEADER_SIZE + self.data.len()
    }

    /// Append the encoded block to `out`
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.key.0);
        out.extend_from_slice(&(self.data.len() as u32).to_be_bytes());
        out.extend_from_slice(self.data);
    }
}

/// Iterator over the blocks of a blob
///
/// Iteration ends when fewer than [`BLOCK_HEADER_SIZE`] bytes remain or a declared
/// size overruns the buffer; the latter sets [`PsdInfoBlocks::is_truncated`].
#[derive(Debug, Clone)]
pub struct PsdInfoBlocks<'a> {
    data: &'a [u8],
    offset: usize,
    truncated: bool,
}

impl<'a> PsdInfoBlocks<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            truncated: false,
        }
    }

    /// True once iteration stopped on a size overrun
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.offset.min(self.data.len())..]
    }
}

impl<'a> Iterator for PsdInfoBlocks<'a> {
    type Item = PsdInfoBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.remaining();
        if rest.len() < BLOCK_HEADER_SIZE {
            return None;
        }

        let signature = [rest[0], rest[1], rest[2], rest[3]];
        let key = BlockKey([rest[4], rest[5], rest[6], rest[7]]);
        let size = u32::from_be_bytes([rest[8], rest[9], rest[10], rest[11]]) as usize;

        let body = &rest[BLOCK_HEADER_SIZE..];
        if size > body.len() {
            debug!(%key, size, remaining = body.len(), "PSD info block overruns buffer");
            self.truncated = true;
            self.offset = self.data.len();
            return None;
        }

        self.offset += BLOCK_HEADER_SIZE + size;
        Some(PsdInfoBlock {
            signature,
            key,
            data: &body[..size],
        })
    }
}

/// Iterate the blocks of `data`
pub fn blocks(data: &[u8]) -> PsdInfoBlocks<'_> {
    PsdInfoBlocks::new(data)
}
