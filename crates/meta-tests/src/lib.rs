//! # meta-tests
//!
//! Cross-format testing framework for oxmeta.
//!
//! This crate provides:
//! - A JSON corpus of IPTC cardinality and encoding cases
//! - Seeded generators for every profile format
//! - Round-trip checks through the `ImageProfile` facade
//!
//! ## Test Categories
//!
//! 1. **Round trips**: IPTC, 8BIM, EXIF, PSD additional info, XMP
//! 2. **Dispatch**: profile names and codec options
//! 3. **Edge Cases**: truncated, corrupted and random input

pub mod corpus;
pub mod patterns;
pub mod roundtrip;

pub use corpus::{CorpusError, IptcCase, IptcCorpus, testdata_dir};
pub use roundtrip::{RoundTripResult, check_round_trip, hex_dump};
