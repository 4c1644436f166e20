//! IPTC test corpus
//!
//! Cases live in `testdata/iptc_cases.json`. Each case is a sequence of
//! `set_value` calls and the values expected afterwards, per tag, in order.

use std::path::{Path, PathBuf};

use oxmeta_core::{IptcProfile, IptcTag, TextEncoding};
use serde::Deserialize;
use thiserror::Error;

/// Errors loading the corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed corpus: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown text encoding '{0}'")]
    UnknownEncoding(String),

    #[error("Invalid hex in case '{case}': {source}")]
    Hex {
        case: String,
        #[source]
        source: hex::FromHexError,
    },
}

/// One `set_value` call
#[derive(Debug, Clone, Deserialize)]
pub struct SetOperation {
    pub record: u8,
    pub dataset: u8,
    pub text: String,
    /// Encoding name as returned by `TextEncoding::name`; UTF-8 when absent
    #[serde(default)]
    pub encoding: Option<String>,
}

/// Values expected for one tag after all operations ran
#[derive(Debug, Clone, Deserialize)]
pub struct Expectation {
    pub record: u8,
    pub dataset: u8,
    pub values: Vec<String>,
}

/// A corpus case
#[derive(Debug, Clone, Deserialize)]
pub struct IptcCase {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub operations: Vec<SetOperation>,
    pub expected: Vec<Expectation>,
    /// Hex dump of the expected encoding, when the case pins the bytes
    #[serde(default)]
    pub encoded_hex: Option<String>,
}

impl IptcCase {
    /// Apply the operations to a fresh profile
    pub fn build(&self) -> Result<IptcProfile, CorpusError> {
        let mut profile = IptcProfile::new();
        for op in &self.operations {
            let encoding = match &op.encoding {
                Some(name) => parse_encoding(name)?,
                None => TextEncoding::Utf8,
            };
            profile.set_value_with_encoding(IptcTag::new(op.record, op.dataset), encoding, &op.text);
        }
        Ok(profile)
    }

    /// Expected bytes, decoded from `encoded_hex`
    pub fn encoded(&self) -> Result<Option<Vec<u8>>, CorpusError> {
        self.encoded_hex
            .as_deref()
            .map(|text| {
                decode_hex(text).map_err(|source| CorpusError::Hex {
                    case: self.name.clone(),
                    source,
                })
            })
            .transpose()
    }
}

fn parse_encoding(name: &str) -> Result<TextEncoding, CorpusError> {
    [
        TextEncoding::Utf8,
        TextEncoding::Ascii,
        TextEncoding::Latin1,
        TextEncoding::Utf16Be,
        TextEncoding::Utf16Le,
    ]
    .into_iter()
    .find(|encoding| encoding.name().eq_ignore_ascii_case(name))
    .ok_or_else(|| CorpusError::UnknownEncoding(name.to_string()))
}

/// Hex digits with any whitespace between them
fn decode_hex(text: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let digits: String = text.split_whitespace().collect();
    hex::decode(digits)
}

/// Corpus of IPTC cases
pub struct IptcCorpus {
    cases: Vec<IptcCase>,
}

impl IptcCorpus {
    /// Load the bundled corpus
    pub fn bundled() -> Result<Self, CorpusError> {
        Self::load(testdata_dir().join("iptc_cases.json"))
    }

    /// Load a corpus file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        Ok(Self {
            cases: serde_json::from_str(json)?,
        })
    }

    pub fn cases(&self) -> &[IptcCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// `testdata/` of this crate
pub fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata")
}
