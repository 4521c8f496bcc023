//! Opcode metadata for the SM83 decode-table compiler.
//!
//! The metadata is a map with two keys, `unprefixed` and `prefixed` (also
//! accepted as `cbprefixed`), each mapping an opcode key such as `"0x3a"` to
//! an [`InstructionRecord`]. JSON and YAML are both accepted; the complete
//! SM83 table ships with the crate and is available through
//! [`OpcodeMetadata::bundled`].

pub mod error;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use sm83_isa::{InstructionRecord, InstructionSource, OpcodeSpace};

pub use error::{MetadataError, Result};

const BUNDLED_JSON: &str = include_str!("../data/opcodes.json");

/// Serialization format of a metadata file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Format::Yaml)
            }
            _ => Err(MetadataError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Opcode key as written in the file. YAML turns unquoted `0x3a` into an
/// integer, JSON always has strings.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(untagged)]
enum RawKey {
    Number(u64),
    Text(String),
}

impl fmt::Display for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawKey::Number(n) => write!(f, "{n}"),
            RawKey::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Deserialize)]
struct RawMetadata {
    unprefixed: BTreeMap<RawKey, InstructionRecord>,
    #[serde(alias = "cbprefixed")]
    prefixed: BTreeMap<RawKey, InstructionRecord>,
}

/// Parse `0x3a` / `0X3A` (one or two hex digits).
pub fn parse_opcode_key(key: &str) -> Option<u8> {
    let digits = key.strip_prefix("0x").or_else(|| key.strip_prefix("0X"))?;
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

fn opcode_byte(space: OpcodeSpace, key: &RawKey) -> Result<u8> {
    let byte = match key {
        RawKey::Number(n) => u8::try_from(*n).ok(),
        RawKey::Text(s) => parse_opcode_key(s),
    };
    byte.ok_or_else(|| MetadataError::InvalidKey {
        space,
        key: key.to_string(),
    })
}

fn index_records(
    space: OpcodeSpace,
    raw: BTreeMap<RawKey, InstructionRecord>,
) -> Result<BTreeMap<u8, InstructionRecord>> {
    let mut records = BTreeMap::new();
    for (key, record) in raw {
        let byte = opcode_byte(space, &key)?;
        if records.insert(byte, record).is_some() {
            return Err(MetadataError::DuplicateKey { space, byte });
        }
    }
    Ok(records)
}

/// Instruction metadata for both opcode spaces, keyed by opcode byte.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpcodeMetadata {
    unprefixed: BTreeMap<u8, InstructionRecord>,
    prefixed: BTreeMap<u8, InstructionRecord>,
}

impl OpcodeMetadata {
    fn from_raw(raw: RawMetadata) -> Result<Self> {
        let metadata = Self {
            unprefixed: index_records(OpcodeSpace::Unprefixed, raw.unprefixed)?,
            prefixed: index_records(OpcodeSpace::Prefixed, raw.prefixed)?,
        };
        log::debug!(
            "loaded {} unprefixed and {} prefixed opcode records",
            metadata.unprefixed.len(),
            metadata.prefixed.len()
        );
        Ok(metadata)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_raw(serde_json::from_str(text)?)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Self::from_raw(serde_yaml::from_str(text)?)
    }

    pub fn parse(text: &str, format: Format) -> Result<Self> {
        match format {
            Format::Json => Self::from_json_str(text),
            Format::Yaml => Self::from_yaml_str(text),
        }
    }

    /// Load a metadata file, choosing the format by extension.
    pub fn open(path: &Path) -> Result<Self> {
        let format = Format::from_path(path)?;
        let text = std::fs::read_to_string(path)
            .map_err(|e| MetadataError::Io(format!("{}: {e}", path.display())))?;
        Self::parse(&text, format)
    }

    /// The complete SM83 opcode table shipped with this crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_JSON)
    }

    /// Source text of the bundled table.
    pub fn bundled_source() -> &'static str {
        BUNDLED_JSON
    }

    fn space(&self, space: OpcodeSpace) -> &BTreeMap<u8, InstructionRecord> {
        match space {
            OpcodeSpace::Unprefixed => &self.unprefixed,
            OpcodeSpace::Prefixed => &self.prefixed,
        }
    }

    /// Number of records present in one space.
    pub fn len(&self, space: OpcodeSpace) -> usize {
        self.space(space).len()
    }

    pub fn is_empty(&self) -> bool {
        self.unprefixed.is_empty() && self.prefixed.is_empty()
    }

    /// Records of one space in opcode order.
    pub fn records(&self, space: OpcodeSpace) -> impl Iterator<Item = (u8, &InstructionRecord)> {
        self.space(space).iter().map(|(&byte, record)| (byte, record))
    }

    pub fn insert(&mut self, space: OpcodeSpace, byte: u8, record: InstructionRecord) {
        match space {
            OpcodeSpace::Unprefixed => self.unprefixed.insert(byte, record),
            OpcodeSpace::Prefixed => self.prefixed.insert(byte, record),
        };
    }

    pub fn remove(&mut self, space: OpcodeSpace, byte: u8) -> Option<InstructionRecord> {
        match space {
            OpcodeSpace::Unprefixed => self.unprefixed.remove(&byte),
            OpcodeSpace::Prefixed => self.prefixed.remove(&byte),
        }
    }
}

impl InstructionSource for OpcodeMetadata {
    fn record(&self, space: OpcodeSpace, byte: u8) -> Option<&InstructionRecord> {
        self.space(space).get(&byte)
    }
}
