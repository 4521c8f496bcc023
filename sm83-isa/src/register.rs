use std::fmt;
use std::str::FromStr;

/// 8-bit register named by an operand token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reg8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// 16-bit register pair (or the stack pointer) named by an operand token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reg16 {
    AF,
    BC,
    DE,
    HL,
    SP,
}

impl Reg8 {
    pub const fn name(self) -> &'static str {
        match self {
            Reg8::A => "A",
            Reg8::B => "B",
            Reg8::C => "C",
            Reg8::D => "D",
            Reg8::E => "E",
            Reg8::H => "H",
            Reg8::L => "L",
        }
    }
}

impl Reg16 {
    pub const fn name(self) -> &'static str {
        match self {
            Reg16::AF => "AF",
            Reg16::BC => "BC",
            Reg16::DE => "DE",
            Reg16::HL => "HL",
            Reg16::SP => "SP",
        }
    }
}

impl FromStr for Reg8 {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "A" => Reg8::A,
            "B" => Reg8::B,
            "C" => Reg8::C,
            "D" => Reg8::D,
            "E" => Reg8::E,
            "H" => Reg8::H,
            "L" => Reg8::L,
            _ => return Err(()),
        })
    }
}

impl FromStr for Reg16 {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "AF" => Reg16::AF,
            "BC" => Reg16::BC,
            "DE" => Reg16::DE,
            "HL" => Reg16::HL,
            "SP" => Reg16::SP,
            _ => return Err(()),
        })
    }
}

impl fmt::Display for Reg8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Reg16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
