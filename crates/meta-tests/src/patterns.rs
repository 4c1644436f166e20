//! Seeded profile generators
//!
//! Every generator takes a seed and is deterministic, so a failing case can be
//! replayed from the seed alone.

use oxmeta_core::eightbim::{EightBimProfile, EightBimValue, ResourceId};
use oxmeta_core::exif::{
    EXIF_TAGS, ExifDataType, ExifIfd, ExifProfile, ExifTagInfo, ExifValueData, Rational,
    SignedRational,
};
use oxmeta_core::iptc::{IptcDataType, IptcProfile, known_tags};
use oxmeta_core::psd::SELECTIVE_KEYS;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for `seed`
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'k', 'o', 'r', 'z', 'A', 'Q', '0', '7', ' ', '-', '.', 'é', 'ß', 'ø', '€', '中',
];

/// Text drawn from a small mixed ASCII/non-ASCII alphabet
pub fn random_text(rng: &mut impl Rng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| *ALPHABET.choose(rng).unwrap_or(&'a'))
        .collect()
}

/// Profile with `count` string values on registry tags
pub fn random_iptc_profile(seed: u64, count: usize) -> IptcProfile {
    let mut rng = rng(seed);
    let tags: Vec<_> = known_tags()
        .filter(|tag| tag.info().is_some_and(|info| info.data_type == IptcDataType::String))
        .collect();

    let mut profile = IptcProfile::new();
    for _ in 0..count {
        if let Some(tag) = tags.choose(&mut rng) {
            profile.set_value(*tag, &random_text(&mut rng, 40));
        }
    }
    profile
}

/// Profile with `count` resources, some named, some in the clip path range
pub fn random_eightbim_profile(seed: u64, count: usize) -> EightBimProfile {
    let mut rng = rng(seed);
    let ids = [
        ResourceId::IPTC,
        ResourceId::XMP,
        ResourceId(0x03ED),
        ResourceId(0x0425),
        ResourceId(2000),
        ResourceId(2001),
    ];

    let mut profile = EightBimProfile::new();
    for _ in 0..count {
        let id = *ids.choose(&mut rng).unwrap_or(&ResourceId::IPTC);
        let data: Vec<u8> = (0..rng.gen_range(0..64)).map(|_| rng.r#gen()).collect();
        let name: Vec<u8> = (0..rng.gen_range(0..12))
            .map(|_| rng.gen_range(b'a'..=b'z'))
            .collect();
        if let Ok(value) = EightBimValue::with_name(id, name, data) {
            profile.set_value(value);
        }
    }
    profile
}

/// Payload matching a registry entry's declared type
pub fn random_exif_data(rng: &mut impl Rng, info: &ExifTagInfo) -> ExifValueData {
    let len = if info.is_array { rng.gen_range(1..=4) } else { 1 };

    macro_rules! values {
        ($scalar:ident, $array:ident, $gen:expr) => {{
            let mut items: Vec<_> = (0..len).map(|_| $gen).collect();
            if info.is_array {
                ExifValueData::$array(items)
            } else {
                ExifValueData::$scalar(items.remove(0))
            }
        }};
    }

    match info.data_type {
        ExifDataType::Ascii => {
            let text: String = (0..rng.gen_range(1..16))
                .map(|_| rng.gen_range(b' '..=b'~') as char)
                .collect();
            ExifValueData::Ascii(text)
        }
        ExifDataType::Byte => values!(Byte, ByteArray, rng.r#gen::<u8>()),
        ExifDataType::Undefined => values!(Undefined, UndefinedArray, rng.r#gen::<u8>()),
        ExifDataType::SignedByte => values!(SignedByte, SignedByteArray, rng.r#gen::<i8>()),
        ExifDataType::Short => values!(Short, ShortArray, rng.r#gen::<u16>()),
        ExifDataType::SignedShort => values!(SignedShort, SignedShortArray, rng.r#gen::<i16>()),
        ExifDataType::Long => values!(Long, LongArray, rng.r#gen::<u32>()),
        ExifDataType::SignedLong => values!(SignedLong, SignedLongArray, rng.r#gen::<i32>()),
        ExifDataType::Rational => values!(
            Rational,
            RationalArray,
            Rational::new(rng.r#gen(), rng.gen_range(1..=10_000))
        ),
        ExifDataType::SignedRational => values!(
            SignedRational,
            SignedRationalArray,
            SignedRational::new(rng.r#gen(), rng.gen_range(1..=10_000))
        ),
        ExifDataType::Float => values!(Float, FloatArray, rng.gen_range(-1e6f32..1e6)),
        ExifDataType::Double => values!(Double, DoubleArray, rng.gen_range(-1e12f64..1e12)),
    }
}

/// Profile with roughly a third of the writable registry tags set
pub fn random_exif_profile(seed: u64) -> ExifProfile {
    let mut rng = rng(seed);
    let mut profile = ExifProfile::new();

    for info in EXIF_TAGS {
        if !matches!(info.ifd, ExifIfd::Primary | ExifIfd::Exif | ExifIfd::Gps) {
            continue;
        }
        if !rng.gen_bool(0.33) {
            continue;
        }
        let data = random_exif_data(&mut rng, info);
        // registry payloads always match the declared type
        let _ = profile.set_value(info.tag, data);
    }
    profile
}

/// Additional-info blob of `count` well-formed blocks with even lengths
///
/// Half the keys come from the selective allowlist.
pub fn random_psd_blob(seed: u64, count: usize) -> Vec<u8> {
    let mut rng = rng(seed);
    let mut data = Vec::new();

    for _ in 0..count {
        let key: [u8; 4] = if rng.gen_bool(0.5) {
            **SELECTIVE_KEYS.choose(&mut rng).unwrap_or(&b"lyid")
        } else {
            *[b"zzzz", b"Patt", b"FMsk", b"Anno"]
                .choose(&mut rng)
                .copied()
                .unwrap_or(b"zzzz")
        };
        let len = rng.gen_range(0..32usize) * 2;

        data.extend_from_slice(b"8BIM");
        data.extend_from_slice(&key);
        data.extend_from_slice(&(len as u32).to_be_bytes());
        data.extend((0..len).map(|_| rng.r#gen::<u8>()));
    }
    data
}

/// Copy of `data` with `flips` random bytes overwritten
pub fn corrupt(seed: u64, data: &[u8], flips: usize) -> Vec<u8> {
    let mut rng = rng(seed);
    let mut out = data.to_vec();
    if out.is_empty() {
        return out;
    }
    for _ in 0..flips {
        let index = rng.gen_range(0..out.len());
        out[index] = rng.r#gen();
    }
    out
}

/// Uniformly random bytes
pub fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = rng(seed);
    (0..len).map(|_| rng.r#gen()).collect()
}
