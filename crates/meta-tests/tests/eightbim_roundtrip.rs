//! 8BIM resource block tests
//!
//! Byte-exact round trips, nested IPTC/XMP payloads and clip path rendering.

use meta_tests::{check_round_trip, patterns};
use oxmeta_core::eightbim::{EightBimProfile, EightBimValue, ResourceId};
use oxmeta_core::iptc::{IptcProfile, IptcTag};
use oxmeta_core::{CodecOptions, ImageProfile, ImageSize};
use proptest::prelude::*;

/// Closed subpath of line knots at the given fractions of the image
fn closed_path(corners: &[(f64, f64)]) -> Vec<u8> {
    let mut data = Vec::new();

    // closed subpath length record
    data.extend_from_slice(&0u16.to_be_bytes());
    data.extend_from_slice(&(corners.len() as u16).to_be_bytes());
    data.extend_from_slice(&[0; 22]);

    for &(x, y) in corners {
        let x = (x * 16_777_216.0) as i32;
        let y = (y * 16_777_216.0) as i32;
        data.extend_from_slice(&1u16.to_be_bytes());
        for _ in 0..3 {
            data.extend_from_slice(&y.to_be_bytes());
            data.extend_from_slice(&x.to_be_bytes());
        }
    }
    data
}

#[test]
fn test_named_resources_byte_exact() {
    let mut profile = EightBimProfile::new();
    let resources = [
        (0x03ED, b"res".to_vec(), vec![1, 2, 3]),
        (0x0425, Vec::new(), vec![9; 16]),
        (0x0425, b"ab".to_vec(), vec![7]),
    ];
    for (id, name, data) in resources {
        profile.set_value(EightBimValue::with_name(ResourceId(id), name, data).unwrap());
    }

    let bytes = profile.to_bytes();
    let decoded = EightBimProfile::parse(&bytes, None);
    assert!(!decoded.truncated);
    assert_eq!(decoded.value.len(), 3);
    assert_eq!(decoded.value.values()[0].name(), b"res");
    assert_eq!(decoded.value.values()[2].name(), b"ab");
    assert_eq!(decoded.value.to_bytes(), bytes);
}

#[test]
fn test_duplicate_resources_survive() {
    let mut profile = EightBimProfile::new();
    profile.set_value(EightBimValue::new(ResourceId(0x0425), vec![1]));
    profile.set_value(EightBimValue::new(ResourceId(0x0425), vec![2]));

    let decoded = EightBimProfile::from_bytes(&profile.to_bytes(), None);
    assert_eq!(decoded.get_all_values(ResourceId(0x0425)).len(), 2);
}

#[test]
fn test_nested_iptc() {
    let mut iptc = IptcProfile::new();
    iptc.set_value(IptcTag::KEYWORD, "harbor");
    iptc.set_value(IptcTag::KEYWORD, "dawn");

    let mut profile = EightBimProfile::new();
    profile.set_value(EightBimValue::new(ResourceId::IPTC, iptc.to_bytes()));

    let decoded = EightBimProfile::from_bytes(&profile.to_bytes(), None);
    assert_eq!(decoded.iptc_profile(), Some(iptc));
}

#[test]
fn test_nested_xmp() {
    let packet = br#"<x:xmpmeta xmlns:x="adobe:ns:meta/"/>"#;
    let mut data = packet.to_vec();
    data.extend_from_slice(&[0, 0, 0]);

    let mut profile = EightBimProfile::new();
    profile.set_value(EightBimValue::new(ResourceId::XMP, data));

    let xmp = EightBimProfile::from_bytes(&profile.to_bytes(), None)
        .xmp_profile()
        .unwrap();
    assert_eq!(xmp.data(), packet);
}

#[test]
fn test_clip_path_rendering() {
    let square = closed_path(&[(0.25, 0.25), (0.75, 0.25), (0.75, 0.75), (0.25, 0.75)]);
    let mut profile = EightBimProfile::new();
    let path = EightBimValue::with_name(ResourceId(2000), b"Path 1".to_vec(), square).unwrap();
    profile.set_value(path);

    let options = CodecOptions::with_image_size(100, 200);
    let ImageProfile::EightBim(decoded) = ImageProfile::decode("8bim", &profile.to_bytes(), &options)
    else {
        panic!("8bim decodes to an 8BIM profile");
    };

    let clip = decoded.clip_path("Path 1").unwrap();
    assert!(clip.path.starts_with(r#"<svg width="100" height="200">"#));
    assert!(
        clip.path
            .contains("d=\"M 25 50\nL 75 50\nL 75 150\nL 25 150\nL 25 50 Z\n\""),
        "{}",
        clip.path
    );
}

#[test]
fn test_clip_paths_need_image_size() {
    let square = closed_path(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    let mut profile = EightBimProfile::new();
    profile.set_value(EightBimValue::new(ResourceId(2001), square));

    assert!(profile.clip_paths().is_empty());
    profile.set_image_size(Some(ImageSize::new(10, 10)));
    assert_eq!(profile.clip_paths().len(), 1);
}

#[test]
fn test_generated_profiles_round_trip() -> anyhow::Result<()> {
    for seed in 0..32 {
        let profile = patterns::random_eightbim_profile(seed, 12);
        let result = check_round_trip(&ImageProfile::EightBim(profile), &CodecOptions::default())?;
        assert!(result.byte_exact, "seed {seed}: {result}");
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_equality_ignores_name(
        data in prop::collection::vec(any::<u8>(), 0..32),
        name in prop::collection::vec(b'a'..=b'z', 0..8),
        flip in any::<prop::sample::Index>(),
    ) {
        let named = EightBimValue::with_name(ResourceId(0x0425), name, data.clone()).unwrap();
        let plain = EightBimValue::new(ResourceId(0x0425), data.clone());
        prop_assert_eq!(&named, &plain);
        prop_assert_ne!(&plain, &EightBimValue::new(ResourceId(0x0426), data.clone()));

        if !data.is_empty() {
            let mut changed = data.clone();
            let i = flip.index(changed.len());
            changed[i] ^= 0xFF;
            prop_assert_ne!(&plain, &EightBimValue::new(ResourceId(0x0425), changed));
        }
    }
}
