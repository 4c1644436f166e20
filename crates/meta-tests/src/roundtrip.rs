//! Round-trip checking
//!
//! Encodes a profile, decodes the bytes under the same name and compares.

use std::fmt;

use anyhow::{Context, bail};
use oxmeta_core::{CodecOptions, ImageProfile};

/// Outcome of one round trip
#[derive(Debug)]
pub struct RoundTripResult {
    /// Profile name
    pub name: String,
    /// Encoded size of the original
    pub encoded_len: usize,
    /// Whether re-encoding the decoded profile reproduced the same bytes
    pub byte_exact: bool,
}

impl fmt::Display for RoundTripResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} bytes{}",
            self.name,
            self.encoded_len,
            if self.byte_exact { ", byte exact" } else { "" }
        )
    }
}

/// Encode `profile`, decode it again and require an equal profile
pub fn check_round_trip(profile: &ImageProfile, options: &CodecOptions) -> anyhow::Result<RoundTripResult> {
    let encoded = profile
        .to_bytes()
        .with_context(|| format!("encoding {}", profile.name()))?;

    let decoded = ImageProfile::decode_with_status(profile.name(), &encoded, options);
    if decoded.truncated {
        bail!("{} re-decoded as truncated ({} bytes)", profile.name(), encoded.len());
    }
    if &decoded.value != profile {
        bail!("{} changed across a round trip", profile.name());
    }

    let reencoded = decoded.value.to_bytes()?;
    Ok(RoundTripResult {
        name: profile.name().to_string(),
        encoded_len: encoded.len(),
        byte_exact: reencoded == encoded,
    })
}

/// Hex dump with a space between bytes, for assertion messages
pub fn hex_dump(data: &[u8]) -> String {
    data.chunks(1).map(hex::encode).collect::<Vec<_>>().join(" ")
}
