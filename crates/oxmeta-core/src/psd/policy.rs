//! Which additional layer information survives re-encoding

use tracing::debug;

use super::block::{BlockKey, blocks};

/// Selection policy for PSD additional-info blocks on write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PsdInfoPolicy {
    /// Keep the blob as-is
    #[default]
    All,
    /// Keep only blocks that stay valid after geometry changes
    Selective,
    /// Drop the blob
    None,
}

/// Keys kept by [`PsdInfoPolicy::Selective`]
pub const SELECTIVE_KEYS: [&[u8; 4]; 36] = [
    b"blnc", b"blwh", b"brit", b"brst", b"clbl", b"clrL", b"curv", b"expA", b"FMsk", b"GdFl",
    b"grdm", b"hue ", b"hue2", b"infx", b"knko", b"lclr", b"levl", b"lnsr", b"lfx2", b"luni",
    b"lrFX", b"lspf", b"lyid", b"lyvr", b"mixr", b"nvrt", b"phfl", b"post", b"PtFl", b"selc",
    b"shpa", b"sn2P", b"SoCo", b"thrs", b"tsly", b"vibA",
];

impl PsdInfoPolicy {
    /// Whether a block with `key` is kept by the selective policy
    pub fn is_selective_key(key: BlockKey) -> bool {
        SELECTIVE_KEYS.iter().any(|k| **k == key.0)
    }

    /// Apply the policy to a blob
    pub fn apply(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::All => data.to_vec(),
            Self::None => Vec::new(),
            Self::Selective => select(data),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Selective => "selective",
            Self::None => "none",
        }
    }

    /// Parse the engine option value (`all`, `selective`, anything else drops)
    pub fn from_option(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Self::All
        } else if value.eq_ignore_ascii_case("selective") {
            Self::Selective
        } else {
            Self::None
        }
    }
}

fn select(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut iter = blocks(data);

    for block in iter.by_ref() {
        if PsdInfoPolicy::is_selective_key(block.key) {
            block.write_to(&mut out);
        } else {
            debug!(key = %block.key, size = block.data.len(), "Dropping PSD info block");
        }
    }

    if iter.is_truncated() {
        return Vec::new();
    }
    out
}
