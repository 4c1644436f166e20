//! EXIF round-trip tests
//!
//! Encode/decode in both byte orders, IFD filtering, thumbnails and the
//! type-checked setters.

use meta_tests::patterns;
use oxmeta_core::exif::{
    ExifByteOrder, ExifParts, ExifProfile, ExifTag, ExifValue, ExifValueData, Rational,
    SignedRational,
};
use oxmeta_core::{CodecOptions, Error, ImageProfile};
use proptest::prelude::*;

/// Every value of `expected` is present, unchanged, in `actual`
fn assert_same_values(actual: &ExifProfile, expected: &ExifProfile) {
    assert_eq!(actual.len(), expected.len());
    for value in expected.values() {
        assert_eq!(actual.get_value(value.tag()), Some(value), "tag {}", value.tag());
    }
}

/// Little endian block: IFD0 with Orientation, IFD1 pointing at a 4-byte thumbnail
fn entry(data: &mut Vec<u8>, tag: u16, data_type: u16, count: u32, value: u32) {
    data.extend_from_slice(&tag.to_le_bytes());
    data.extend_from_slice(&data_type.to_le_bytes());
    data.extend_from_slice(&count.to_le_bytes());
    data.extend_from_slice(&value.to_le_bytes());
}

/// Little endian IFD0 with Orientation as LONG and a vendor LONG tag
fn block_with_loose_types() -> Vec<u8> {
    let mut data = b"II\x2a\x00\x08\x00\x00\x00".to_vec();
    data.extend_from_slice(&2u16.to_le_bytes());
    entry(&mut data, 0x0112, 4, 1, 1);
    entry(&mut data, 0xC4A5, 4, 1, 77);
    data.extend_from_slice(&0u32.to_le_bytes());
    data
}

fn block_with_thumbnail() -> Vec<u8> {
    let mut data = b"II\x2a\x00\x08\x00\x00\x00".to_vec();
    // IFD0 at 8, next IFD at 26
    data.extend_from_slice(&1u16.to_le_bytes());
    entry(&mut data, 0x0112, 3, 1, 6);
    data.extend_from_slice(&26u32.to_le_bytes());
    // IFD1 at 26, thumbnail at 56
    data.extend_from_slice(&2u16.to_le_bytes());
    entry(&mut data, 0x0201, 4, 1, 56);
    entry(&mut data, 0x0202, 4, 1, 4);
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xD9]);
    data
}

#[test]
fn test_generated_profiles_both_orders() {
    for seed in 0..24 {
        let mut profile = patterns::random_exif_profile(seed);
        for order in [ExifByteOrder::LittleEndian, ExifByteOrder::BigEndian] {
            profile.set_byte_order(order);
            let bytes = profile.to_bytes();

            let decoded = ExifProfile::parse(&bytes);
            assert!(!decoded.truncated, "seed {seed} {order:?}");
            assert_eq!(decoded.value.byte_order(), order);
            assert!(decoded.value.invalid_tags().is_empty());
            assert_same_values(&decoded.value, &profile);
            assert_eq!(decoded.value.to_bytes(), bytes, "seed {seed} {order:?}");
        }
    }
}

#[test]
fn test_thumbnail_located_not_rewritten() {
    let mut profile = ExifProfile::from_bytes(&block_with_thumbnail());
    assert_eq!(profile.thumbnail_data(), Some(&[0xFF, 0xD8, 0xFF, 0xD9][..]));
    assert_eq!(profile.len(), 1);
    assert_eq!(
        profile.get_value(ExifTag::ORIENTATION).map(|v| v.data().clone()),
        Some(ExifValueData::Short(6))
    );

    let reencoded = ExifProfile::from_bytes(&profile.to_bytes());
    assert_eq!(reencoded.thumbnail_data(), None);
    assert_eq!(reencoded.len(), 1);

    profile.remove_thumbnail();
    assert_eq!(profile.thumbnail_data(), None);
}

#[test]
fn test_parts_from_options() {
    let mut profile = ExifProfile::new();
    profile.set_value(ExifTag::MAKE, ExifValueData::Ascii("Acme".into())).unwrap();
    profile
        .set_value(ExifTag::EXPOSURE_TIME, ExifValueData::Rational(Rational::new(1, 125)))
        .unwrap();
    profile
        .set_value(ExifTag::GPS_VERSION_ID, ExifValueData::ByteArray(vec![2, 3, 0, 0]))
        .unwrap();
    let bytes = profile.to_bytes();

    let options = CodecOptions {
        exif_parts: ExifParts::IFD_TAGS | ExifParts::GPS_TAGS,
        exif_byte_order: ExifByteOrder::BigEndian,
        ..CodecOptions::default()
    };
    let decoded = ImageProfile::decode("exif", &bytes, &options);
    let filtered = ExifProfile::from_bytes(&decoded.to_bytes().unwrap());

    assert_eq!(filtered.byte_order(), ExifByteOrder::BigEndian);
    assert!(filtered.get_value(ExifTag::MAKE).is_some());
    assert!(filtered.get_value(ExifTag::EXPOSURE_TIME).is_none());
    assert!(filtered.get_value(ExifTag::GPS_VERSION_ID).is_some());
}

#[test]
fn test_stored_long_orientation_takes_short() {
    let mut profile = ExifProfile::from_bytes(&block_with_loose_types());
    assert!(profile.invalid_tags().is_empty());

    let orientation = profile.get_value(ExifTag::ORIENTATION).unwrap();
    assert_eq!(orientation.data(), &ExifValueData::Short(1));
    let mut copy = orientation.clone();
    assert!(copy.set_value(ExifValueData::Short(6)));

    profile.set_value(ExifTag::ORIENTATION, ExifValueData::Short(6)).unwrap();
    let decoded = ExifProfile::from_bytes(&profile.to_bytes());
    assert_eq!(
        decoded.get_value(ExifTag::ORIENTATION).map(|v| v.data().clone()),
        Some(ExifValueData::Short(6))
    );
}

#[test]
fn test_vendor_tag_survives_round_trip() {
    let profile = ExifProfile::from_bytes(&block_with_loose_types());
    let vendor = ExifTag(0xC4A5);
    assert_eq!(
        profile.get_value(vendor).map(|v| v.data().clone()),
        Some(ExifValueData::Long(77))
    );

    let decoded = ExifProfile::from_bytes(&profile.to_bytes());
    assert_eq!(decoded, profile);

    let mut stripped = profile.clone();
    stripped.set_parts(ExifParts::EXIF_TAGS);
    assert!(stripped.to_bytes().is_empty());
}

#[test]
fn test_rational_rejects_signed() {
    let mut value = ExifValue::new(
        ExifTag::X_RESOLUTION,
        ExifValueData::Rational(Rational::new(300, 1)),
    )
    .unwrap();
    assert!(!value.set_value(ExifValueData::SignedRational(SignedRational::new(300, 1))));
    assert_eq!(value.data(), &ExifValueData::Rational(Rational::new(300, 1)));

    let mut profile = ExifProfile::new();
    profile.set_value(ExifTag::X_RESOLUTION, value.data().clone()).unwrap();
    let err = profile
        .set_value(ExifTag::X_RESOLUTION, ExifValueData::Short(300))
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { tag: 0x011A, .. }));
}

#[test]
fn test_descriptions() {
    let mut profile = ExifProfile::new();
    profile.set_value(ExifTag::RESOLUTION_UNIT, ExifValueData::Short(2)).unwrap();
    profile.set_value(ExifTag::ORIENTATION, ExifValueData::Short(1)).unwrap();

    let decoded = ExifProfile::from_bytes(&profile.to_bytes());
    let unit = decoded.get_value(ExifTag::RESOLUTION_UNIT).unwrap();
    assert_eq!(unit.to_string(), "Inches");
}

proptest! {
    #[test]
    fn test_latitude_round_trip(
        parts in prop::collection::vec((any::<u32>(), 1u32..), 1..5),
        big_endian in any::<bool>(),
    ) {
        let latitude: Vec<Rational> = parts.iter().map(|&(n, d)| Rational::new(n, d)).collect();
        let mut profile = ExifProfile::new();
        profile
            .set_value(ExifTag::GPS_LATITUDE, ExifValueData::RationalArray(latitude.clone()))
            .unwrap();
        if big_endian {
            profile.set_byte_order(ExifByteOrder::BigEndian);
        }

        let decoded = ExifProfile::from_bytes(&profile.to_bytes());
        prop_assert_eq!(
            decoded.get_value(ExifTag::GPS_LATITUDE).map(|v| v.data().clone()),
            Some(ExifValueData::RationalArray(latitude))
        );
    }

    #[test]
    fn test_ascii_round_trip(text in "[ -~]{1,40}") {
        let mut profile = ExifProfile::new();
        profile.set_value(ExifTag::SOFTWARE, ExifValueData::Ascii(text.clone())).unwrap();

        let decoded = ExifProfile::from_bytes(&profile.to_bytes());
        prop_assert_eq!(
            decoded.get_value(ExifTag::SOFTWARE).map(|v| v.to_string()),
            Some(text)
        );
    }
}
