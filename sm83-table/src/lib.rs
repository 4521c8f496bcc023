//! The SM83 decode table, generated at build time from the bundled opcode
//! metadata.
//!
//! ```
//! use sm83_table::{Instruction, Mode16, decode, ops};
//!
//! assert_eq!(
//!     *decode(false, 0xC3),
//!     Instruction::Op16bit(ops::jp, Mode16::Immediate)
//! );
//! ```

pub use sm83_isa::{Reg8, Reg16};

/// Name of the handler that executes an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Op(pub &'static str);

impl Op {
    pub fn name(self) -> &'static str {
        self.0
    }
}

/// Handler constants, one per distinct name in [`INSTRUCTIONS`].
#[allow(non_upper_case_globals)]
pub mod ops {
    use super::Op;

    include!(concat!(env!("OUT_DIR"), "/ops.rs"));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode8 {
    Register(Reg8),
    /// Memory at the address held in a register pair.
    Indirect(Reg16),
    /// `0xFF00 + C`.
    IndexedC,
    /// `0xFF00 + n8`.
    IndexedImm,
    Immediate,
    /// Memory at a 16-bit immediate address.
    Address,
    Fixed(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode16 {
    Register(Reg16),
    StackPointer,
    Immediate,
    Address,
    Fixed(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Implied(Op),
    Op8bit(Op, Mode8),
    Op8bit8bit(Op, Mode8, Mode8),
    Op16bit(Op, Mode16),
    Op16bit16bit(Op, Mode16, Mode16),
    /// The `CB` escape; the next byte indexes the prefixed half.
    PrefixExtended,
    Invalid,
}

impl Instruction {
    pub fn op(&self) -> Option<Op> {
        match *self {
            Instruction::Implied(op)
            | Instruction::Op8bit(op, _)
            | Instruction::Op8bit8bit(op, _, _)
            | Instruction::Op16bit(op, _)
            | Instruction::Op16bit16bit(op, _, _) => Some(op),
            Instruction::PrefixExtended | Instruction::Invalid => None,
        }
    }
}

mod generated {
    use super::Instruction::*;
    use super::ops::*;
    use super::{Instruction, Mode8, Mode16, Reg8, Reg16};

    pub const INSTRUCTIONS: [Instruction; 512] =
        include!(concat!(env!("OUT_DIR"), "/instructions.rs"));
}

/// Unprefixed opcodes at `0x000..0x100`, `CB`-prefixed at `0x100..0x200`.
pub use generated::INSTRUCTIONS;

/// Look up one opcode byte.
pub fn decode(prefixed: bool, byte: u8) -> &'static Instruction {
    let base = if prefixed { 0x100 } else { 0 };
    &INSTRUCTIONS[base + byte as usize]
}
