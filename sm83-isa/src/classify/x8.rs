use super::{reg8, reg16, register_or_indirect};
use crate::entry::DecodeEntry;
use crate::error::OperandError;
use crate::mode::{Operand8, Step};
use crate::register::{Reg8, Reg16};

/// Every 8-bit load is named after the plain move, whatever its mnemonic.
const MOVE_MNEMONIC: &str = "LD";

/// `ADD A,B` and friends name the accumulator explicitly; the operand that
/// matters is the second one.
fn accumulator_implicit<'a>(
    op1: Option<&'a str>,
    op2: Option<&'a str>,
) -> Result<Option<&'a str>, OperandError> {
    match (op1, op2) {
        (Some("A"), Some(_)) => Ok(op2),
        (_, None) => Ok(op1),
        (_, Some(_)) => Err(OperandError::token(op1)),
    }
}

/// `x8/alu`: arithmetic and logic on the accumulator, INC/DEC, and the
/// operand-less DAA/CPL/SCF/CCF.
pub fn alu8(
    mnemonic: &str,
    op1: Option<&str>,
    op2: Option<&str>,
) -> Result<DecodeEntry, OperandError> {
    Ok(match accumulator_implicit(op1, op2)? {
        None => DecodeEntry::implied(mnemonic),
        Some("d8") => DecodeEntry::op8(mnemonic, Operand8::Immediate),
        Some(operand) => DecodeEntry::op8(mnemonic, register_or_indirect(operand)?),
    })
}

fn load_operand(token: Option<&str>, suffix: &mut Option<char>) -> Result<Operand8, OperandError> {
    let Some(token) = token else {
        return Err(OperandError::token(None));
    };
    Ok(match token {
        "(HL+)" => {
            suffix.get_or_insert('I');
            Operand8::IndirectStep(Reg16::HL, Step::Increment)
        }
        "(HL-)" => {
            suffix.get_or_insert('D');
            Operand8::IndirectStep(Reg16::HL, Step::Decrement)
        }
        "d8" => Operand8::Immediate,
        "(a8)" => Operand8::IndexedImmediate,
        "(a16)" => Operand8::Address,
        "(C)" => Operand8::IndexedC,
        _ => match token.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
            Some(pair) => Operand8::Indirect(reg16(Some(pair)).map_err(|_| OperandError::token(Some(token)))?),
            None => Operand8::Register(reg8(token)?),
        },
    })
}

/// `x8/lsm`: 8-bit loads. Always two operands.
pub fn lsm8(
    _mnemonic: &str,
    op1: Option<&str>,
    op2: Option<&str>,
) -> Result<DecodeEntry, OperandError> {
    let mut suffix = None;
    let dst = load_operand(op1, &mut suffix)?;
    let src = load_operand(op2, &mut suffix)?;

    let mut name = MOVE_MNEMONIC.to_string();
    name.extend(suffix);
    Ok(DecodeEntry::op8x2(name, dst, src))
}

/// `x8/rsb`: unprefixed accumulator rotates. `RLCA` is `RLC` applied to A.
pub fn rsb8(
    mnemonic: &str,
    op1: Option<&str>,
    op2: Option<&str>,
) -> Result<DecodeEntry, OperandError> {
    if op1.is_some() {
        return Err(OperandError::token(op1));
    }
    if op2.is_some() {
        return Err(OperandError::token(op2));
    }
    let name = mnemonic
        .strip_suffix('A')
        .filter(|name| !name.is_empty())
        .ok_or_else(|| OperandError::token(Some(mnemonic)))?;
    Ok(DecodeEntry::op8(name, Operand8::Register(Reg8::A)))
}
