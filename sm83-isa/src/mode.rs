use std::fmt;

use crate::register::{Reg8, Reg16};

/// Operand width of an addressing mode or of an entry's operand list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    Byte,
    Word,
}

impl Width {
    pub const fn bits(self) -> u8 {
        match self {
            Width::Byte => 8,
            Width::Word => 16,
        }
    }
}

/// Post-access adjustment of the pointer register in `(HL+)` / `(HL-)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Increment,
    Decrement,
}

/// How an 8-bit operand is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand8 {
    /// Plain 8-bit register.
    Register(Reg8),
    /// Memory byte addressed by a register pair, e.g. `(BC)`.
    Indirect(Reg16),
    /// `(HL+)` / `(HL-)`: indirect through a pair that is stepped afterwards.
    IndirectStep(Reg16, Step),
    /// `(C)`: high page offset by the C register.
    IndexedC,
    /// `(a8)`: high page offset by an immediate byte.
    IndexedImmediate,
    /// `d8` / `r8`: the next byte of the instruction stream.
    Immediate,
    /// `(a16)`: memory byte at an absolute 16-bit address.
    Address,
    /// Literal encoded in the opcode itself (bit index).
    Fixed(u8),
}

/// How a 16-bit operand is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand16 {
    /// Register pair or stack pointer.
    Register(Reg16),
    /// `d16` / `a16`: the next two bytes of the instruction stream.
    Immediate,
    /// Absolute 16-bit address used as a store target.
    Address,
    /// Literal encoded in the opcode itself (restart vector).
    Fixed(u16),
}

/// A width-tagged addressing mode, as stored in a [`DecodeEntry`](crate::DecodeEntry).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Byte(Operand8),
    Word(Operand16),
}

impl AddressingMode {
    pub const fn width(&self) -> Width {
        match self {
            AddressingMode::Byte(_) => Width::Byte,
            AddressingMode::Word(_) => Width::Word,
        }
    }

    /// Bytes a dispatcher fetches from the instruction stream for this operand.
    pub const fn stream_bytes(&self) -> usize {
        match self {
            AddressingMode::Byte(Operand8::Immediate | Operand8::IndexedImmediate) => 1,
            AddressingMode::Byte(Operand8::Address) => 2,
            AddressingMode::Word(Operand16::Immediate | Operand16::Address) => 2,
            _ => 0,
        }
    }
}

impl From<Operand8> for AddressingMode {
    fn from(op: Operand8) -> Self {
        AddressingMode::Byte(op)
    }
}

impl From<Operand16> for AddressingMode {
    fn from(op: Operand16) -> Self {
        AddressingMode::Word(op)
    }
}

/// Arity/width shape of an entry's operand list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mode {
    Implied,
    Op8bit,
    Op8bit8bit,
    Op16bit,
    Op16bit16bit,
    PrefixExtended,
    Invalid,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Implied,
        Mode::Op8bit,
        Mode::Op8bit8bit,
        Mode::Op16bit,
        Mode::Op16bit16bit,
        Mode::PrefixExtended,
        Mode::Invalid,
    ];

    /// Number of operands an entry of this mode carries.
    pub const fn arity(self) -> usize {
        match self {
            Mode::Implied | Mode::PrefixExtended | Mode::Invalid => 0,
            Mode::Op8bit | Mode::Op16bit => 1,
            Mode::Op8bit8bit | Mode::Op16bit16bit => 2,
        }
    }

    /// Width every operand of this mode must have, if it has operands.
    pub const fn width(self) -> Option<Width> {
        match self {
            Mode::Op8bit | Mode::Op8bit8bit => Some(Width::Byte),
            Mode::Op16bit | Mode::Op16bit16bit => Some(Width::Word),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Mode::Implied => "Implied",
            Mode::Op8bit => "Op8bit",
            Mode::Op8bit8bit => "Op8bit8bit",
            Mode::Op16bit => "Op16bit",
            Mode::Op16bit16bit => "Op16bit16bit",
            Mode::PrefixExtended => "PrefixExtended",
            Mode::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
