use crate::mode::{AddressingMode, Mode, Operand8, Operand16};
use crate::record::OpcodeSpace;

/// Opcode name carried by [`Mode::Invalid`] entries.
pub const INVALID_OPCODE: &str = "INVALID";

/// One classified opcode slot.
///
/// Entries are only built through the shape constructors below, which take
/// typed 8-bit or 16-bit operands. The operand count therefore always matches
/// [`Mode::arity`] and every operand has the mode's width.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecodeEntry {
    mode: Mode,
    opcode: String,
    operands: Vec<AddressingMode>,
}

impl DecodeEntry {
    fn with(mode: Mode, opcode: impl Into<String>, operands: Vec<AddressingMode>) -> Self {
        Self {
            mode,
            opcode: opcode.into(),
            operands,
        }
    }

    pub fn implied(opcode: impl Into<String>) -> Self {
        Self::with(Mode::Implied, opcode, Vec::new())
    }

    pub fn op8(opcode: impl Into<String>, op: Operand8) -> Self {
        Self::with(Mode::Op8bit, opcode, vec![op.into()])
    }

    pub fn op8x2(opcode: impl Into<String>, first: Operand8, second: Operand8) -> Self {
        Self::with(Mode::Op8bit8bit, opcode, vec![first.into(), second.into()])
    }

    pub fn op16(opcode: impl Into<String>, op: Operand16) -> Self {
        Self::with(Mode::Op16bit, opcode, vec![op.into()])
    }

    pub fn op16x2(opcode: impl Into<String>, first: Operand16, second: Operand16) -> Self {
        Self::with(Mode::Op16bit16bit, opcode, vec![first.into(), second.into()])
    }

    /// The prefix escape. Its opcode name is empty.
    pub fn prefix_extended() -> Self {
        Self::with(Mode::PrefixExtended, "", Vec::new())
    }

    pub fn invalid() -> Self {
        Self::with(Mode::Invalid, INVALID_OPCODE, Vec::new())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn opcode(&self) -> &str {
        &self.opcode
    }

    pub fn operands(&self) -> &[AddressingMode] {
        &self.operands
    }

    /// Handler name as it appears in rendered output.
    pub fn handler_name(&self) -> String {
        self.opcode.to_ascii_lowercase()
    }

    /// Bytes following the opcode that a dispatcher must fetch.
    pub fn operand_bytes(&self) -> usize {
        self.operands.iter().map(AddressingMode::stream_bytes).sum()
    }

    /// Total encoded length including the opcode byte (and the prefix byte
    /// for the prefixed space). `None` for invalid slots.
    pub fn encoded_len(&self, space: OpcodeSpace) -> Option<usize> {
        if self.mode == Mode::Invalid {
            return None;
        }
        let opcode_bytes = match space {
            OpcodeSpace::Unprefixed => 1,
            OpcodeSpace::Prefixed => 2,
        };
        Some(opcode_bytes + self.operand_bytes())
    }

    pub fn is_invalid(&self) -> bool {
        self.mode == Mode::Invalid
    }
}
