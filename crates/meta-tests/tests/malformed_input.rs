//! Malformed input tests
//!
//! Random, corrupted and cut-short buffers must decode to partial results
//! without panicking.

use meta_tests::patterns;
use oxmeta_core::eightbim::{EightBimProfile, EightBimValue, ResourceId};
use oxmeta_core::exif::{ExifProfile, ExifTag, ExifValueData};
use oxmeta_core::iptc::{IptcProfile, IptcTag};
use oxmeta_core::psd::{PsdAdditionalInfo, PsdInfoPolicy, unicode_layer_name};
use oxmeta_core::{CodecOptions, ImageProfile, KNOWN_PROFILE_NAMES, XmpProfile};
use proptest::prelude::*;

/// Decode `data` as every known profile and exercise the lazy views
fn decode_everything(data: &[u8]) {
    let options = CodecOptions::with_image_size(640, 480);

    for name in KNOWN_PROFILE_NAMES {
        let decoded = ImageProfile::decode_with_status(name, data, &options);
        let _ = decoded.value.to_bytes();

        if let ImageProfile::EightBim(profile) = &decoded.value {
            let _ = profile.clip_paths();
            let _ = profile.iptc_profile();
            let _ = profile.xmp_profile().map(|xmp| xmp.to_document());
        }
    }

    let _ = XmpProfile::new(data.to_vec()).to_document();
    let _ = unicode_layer_name(data);
    for policy in [PsdInfoPolicy::All, PsdInfoPolicy::Selective, PsdInfoPolicy::None] {
        let _ = PsdAdditionalInfo::parse(data, policy).value.to_bytes();
    }
}

fn sample_iptc() -> Vec<u8> {
    let mut profile = IptcProfile::new();
    profile.set_value(IptcTag::BYLINE, "Lighthouse");
    profile.set_value(IptcTag::CAPTION, "Harbor at dawn");
    profile.to_bytes()
}

fn sample_eightbim() -> Vec<u8> {
    let mut profile = EightBimProfile::new();
    profile.set_value(EightBimValue::new(ResourceId::IPTC, sample_iptc()));
    profile.set_value(EightBimValue::new(ResourceId(0x0425), vec![1, 2, 3, 4]));
    profile.to_bytes()
}

fn sample_exif() -> Vec<u8> {
    let mut profile = ExifProfile::new();
    profile.set_value(ExifTag::MAKE, ExifValueData::Ascii("Lighthouse".into())).unwrap();
    profile.set_value(ExifTag::ORIENTATION, ExifValueData::Short(1)).unwrap();
    profile
        .set_value(ExifTag::GPS_VERSION_ID, ExifValueData::ByteArray(vec![2, 3, 0, 0]))
        .unwrap();
    profile.to_bytes()
}

#[test]
fn test_random_bytes_never_panic() {
    for seed in 0..64 {
        let len = (seed as usize * 37) % 512;
        decode_everything(&patterns::random_bytes(seed, len));
    }
}

#[test]
fn test_corrupted_profiles_never_panic() {
    let samples = [
        sample_iptc(),
        sample_eightbim(),
        sample_exif(),
        patterns::random_psd_blob(1, 8),
    ];
    for (i, sample) in samples.iter().enumerate() {
        for seed in 0..64 {
            decode_everything(&patterns::corrupt(seed * 4 + i as u64, sample, 1 + seed as usize % 6));
        }
    }
}

#[test]
fn test_cut_iptc_is_truncated() {
    let bytes = sample_iptc();
    let decoded = IptcProfile::parse(&bytes[..bytes.len() - 1]);

    assert!(decoded.truncated);
    assert_eq!(decoded.value.len(), 1);
    assert_eq!(
        decoded.value.get_value(IptcTag::BYLINE).map(|v| v.value()).as_deref(),
        Some("Lighthouse")
    );
}

#[test]
fn test_cut_eightbim_is_truncated() {
    let bytes = sample_eightbim();
    let decoded = EightBimProfile::parse(&bytes[..bytes.len() - 2], None);

    assert!(decoded.truncated);
    assert_eq!(decoded.value.len(), 1);
    assert!(decoded.value.iptc_profile().is_some());
}

#[test]
fn test_cut_exif_is_truncated() {
    let bytes = sample_exif();
    for len in [0, 4, 8, 12, bytes.len() / 2] {
        let decoded = ExifProfile::parse(&bytes[..len]);
        assert!(decoded.truncated, "cut at {len}");
    }
    assert!(!ExifProfile::parse(&bytes).truncated);
}

#[test]
fn test_garbage_between_datasets() {
    let mut bytes = sample_iptc();
    bytes.insert(0, 0x00);

    let decoded = IptcProfile::parse(&bytes);
    assert!(decoded.truncated);
    assert_eq!(decoded.value.len(), 2);
}

proptest! {
    #[test]
    fn test_arbitrary_bytes(data in prop::collection::vec(any::<u8>(), 0..256)) {
        decode_everything(&data);
    }

    #[test]
    fn test_arbitrary_prefixes(cut in any::<prop::sample::Index>()) {
        for sample in [sample_iptc(), sample_eightbim(), sample_exif()] {
            let len = cut.index(sample.len() + 1);
            decode_everything(&sample[..len]);
        }
    }
}
