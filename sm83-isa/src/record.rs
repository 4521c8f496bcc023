use std::fmt;

use serde::Deserialize;

/// Metadata for one opcode slot, as read from the opcode table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct InstructionRecord {
    pub mnemonic: String,
    /// Group tag, e.g. `x8/alu`. Resolved by [`Group::from_tag`](crate::Group::from_tag).
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub operand1: Option<String>,
    #[serde(default)]
    pub operand2: Option<String>,
    /// Total encoded length in bytes, when the metadata records it.
    #[serde(default)]
    pub length: Option<u8>,
}

impl InstructionRecord {
    pub fn new(mnemonic: &str, group: &str, operand1: Option<&str>, operand2: Option<&str>) -> Self {
        Self {
            mnemonic: mnemonic.to_string(),
            group: group.to_string(),
            operand1: operand1.map(str::to_string),
            operand2: operand2.map(str::to_string),
            length: None,
        }
    }

    pub fn operand1(&self) -> Option<&str> {
        self.operand1.as_deref()
    }

    pub fn operand2(&self) -> Option<&str> {
        self.operand2.as_deref()
    }
}

/// One of the two 256-entry opcode spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OpcodeSpace {
    Unprefixed,
    Prefixed,
}

impl OpcodeSpace {
    pub const ALL: [OpcodeSpace; 2] = [OpcodeSpace::Unprefixed, OpcodeSpace::Prefixed];
}

impl fmt::Display for OpcodeSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpcodeSpace::Unprefixed => f.write_str("unprefixed"),
            OpcodeSpace::Prefixed => f.write_str("prefixed"),
        }
    }
}

/// An opcode slot: a byte value within one space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub space: OpcodeSpace,
    pub byte: u8,
}

impl Slot {
    pub const fn new(space: OpcodeSpace, byte: u8) -> Self {
        Self { space, byte }
    }

    /// Position of this slot in the flat 512-entry table.
    pub const fn index(&self) -> usize {
        match self.space {
            OpcodeSpace::Unprefixed => self.byte as usize,
            OpcodeSpace::Prefixed => 0x100 + self.byte as usize,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.space {
            OpcodeSpace::Unprefixed => write!(f, "{:#04x}", self.byte),
            OpcodeSpace::Prefixed => write!(f, "cb {:#04x}", self.byte),
        }
    }
}

/// Read access to opcode metadata, keyed by slot.
pub trait InstructionSource {
    fn record(&self, space: OpcodeSpace, byte: u8) -> Option<&InstructionRecord>;
}
