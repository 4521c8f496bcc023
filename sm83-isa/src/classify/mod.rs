//! Operand classification: per-group rules that turn raw operand tokens into
//! a [`DecodeEntry`], and the dispatcher that selects a rule by group tag.

mod control;
mod prefixed;
mod x16;
mod x8;

use std::fmt;

use crate::entry::DecodeEntry;
use crate::error::{OperandError, Result, TableError};
use crate::mode::{Operand8, Operand16};
use crate::record::{InstructionRecord, OpcodeSpace, Slot};
use crate::register::{Reg8, Reg16};

pub use control::{branch, misc};
pub use prefixed::prefixed;
pub use x8::{alu8, lsm8, rsb8};
pub use x16::{alu16, lsm16};

/// A classification rule: `(mnemonic, operand1, operand2)` to a decode entry.
pub type Classifier =
    fn(&str, Option<&str>, Option<&str>) -> std::result::Result<DecodeEntry, OperandError>;

/// Instruction groups of the unprefixed opcode space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    ControlBranch,
    ControlMisc,
    Alu16,
    LoadStoreMove16,
    Alu8,
    LoadStoreMove8,
    RotateShiftBit,
}

impl Group {
    pub const ALL: [Group; 7] = [
        Group::ControlBranch,
        Group::ControlMisc,
        Group::Alu16,
        Group::LoadStoreMove16,
        Group::Alu8,
        Group::LoadStoreMove8,
        Group::RotateShiftBit,
    ];

    /// Tag used for this group in opcode metadata.
    pub const fn tag(self) -> &'static str {
        match self {
            Group::ControlBranch => "control/br",
            Group::ControlMisc => "control/misc",
            Group::Alu16 => "x16/alu",
            Group::LoadStoreMove16 => "x16/lsm",
            Group::Alu8 => "x8/alu",
            Group::LoadStoreMove8 => "x8/lsm",
            Group::RotateShiftBit => "x8/rsb",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.tag() == tag)
    }

    /// The rule bound to this group.
    pub fn classifier(self) -> Classifier {
        match self {
            Group::ControlBranch => branch,
            Group::ControlMisc => misc,
            Group::Alu16 => alu16,
            Group::LoadStoreMove16 => lsm16,
            Group::Alu8 => alu8,
            Group::LoadStoreMove8 => lsm8,
            Group::RotateShiftBit => rsb8,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Look up the classifier for a group tag.
pub fn dispatch(tag: &str) -> Option<Classifier> {
    Group::from_tag(tag).map(Group::classifier)
}

/// Classify the record found at `slot`.
///
/// Unprefixed records go through the classifier of their group; prefixed
/// records all share the [`prefixed`] rule regardless of their group tag.
pub fn classify_record(slot: Slot, record: &InstructionRecord) -> Result<DecodeEntry> {
    let classifier: Classifier = match slot.space {
        OpcodeSpace::Unprefixed => {
            dispatch(&record.group).ok_or_else(|| TableError::UnknownGroup {
                slot,
                group: record.group.clone(),
            })?
        }
        OpcodeSpace::Prefixed => prefixed,
    };

    classifier(&record.mnemonic, record.operand1(), record.operand2()).map_err(|e| {
        TableError::UnrecognizedOperand {
            slot,
            group: record.group.clone(),
            token: e.token,
        }
    })
}

fn reg8(token: &str) -> std::result::Result<Reg8, OperandError> {
    token.parse().map_err(|_| OperandError::token(Some(token)))
}

fn reg16(token: Option<&str>) -> std::result::Result<Reg16, OperandError> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| OperandError::token(token))
}

/// `(HL)` or a bare 8-bit register.
fn register_or_indirect(token: &str) -> std::result::Result<Operand8, OperandError> {
    if token == "(HL)" {
        Ok(Operand8::Indirect(Reg16::HL))
    } else {
        reg8(token).map(Operand8::Register)
    }
}

fn register16(token: Option<&str>) -> std::result::Result<Operand16, OperandError> {
    reg16(token).map(Operand16::Register)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;

    #[test]
    fn every_group_tag_dispatches() {
        for group in Group::ALL {
            assert_eq!(Group::from_tag(group.tag()), Some(group));
            assert!(dispatch(group.tag()).is_some());
        }
    }

    #[test]
    fn unknown_tag_has_no_classifier() {
        assert!(dispatch("x8/bit").is_none());
        assert!(dispatch("").is_none());
        assert!(dispatch("X8/ALU").is_none());
    }

    #[test]
    fn unknown_group_names_slot_and_tag() {
        let slot = Slot::new(OpcodeSpace::Unprefixed, 0x10);
        let record = InstructionRecord::new("FOO", "x32/alu", None, None);
        let err = classify_record(slot, &record).unwrap_err();
        assert_eq!(
            err,
            TableError::UnknownGroup {
                slot,
                group: "x32/alu".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "0x10: no classifier for instruction group `x32/alu`"
        );
    }

    #[test]
    fn unrecognized_operand_names_slot_group_and_token() {
        let slot = Slot::new(OpcodeSpace::Unprefixed, 0x80);
        let record = InstructionRecord::new("ADD", "x8/alu", Some("A"), Some("IXH"));
        let err = classify_record(slot, &record).unwrap_err();
        assert_eq!(
            err,
            TableError::UnrecognizedOperand {
                slot,
                group: "x8/alu".to_string(),
                token: "IXH".to_string()
            }
        );
    }

    #[test]
    fn prefixed_slots_ignore_group_tag() {
        let slot = Slot::new(OpcodeSpace::Prefixed, 0x37);
        let record = InstructionRecord::new("SWAP", "x8/rsb", Some("A"), None);
        let entry = classify_record(slot, &record).unwrap();
        assert_eq!(entry.mode(), Mode::Op8bit);
        assert_eq!(entry.opcode(), "SWAP");
    }
}
