use crate::entry::DecodeEntry;
use crate::error::OperandError;
use crate::mode::{Operand8, Operand16};
use crate::register::Reg16;

const CONDITIONS: [&str; 4] = ["Z", "NZ", "C", "NC"];

/// Folds a leading condition code into the opcode name and returns the
/// branch target that follows it.
fn fold_condition<'a>(
    mnemonic: &str,
    op1: Option<&'a str>,
    op2: Option<&'a str>,
) -> (String, Option<&'a str>) {
    match op1 {
        Some(cc) if CONDITIONS.contains(&cc) => (format!("{mnemonic}{cc}"), op2),
        _ => (mnemonic.to_string(), op1),
    }
}

/// `00H`..`38H`: the vector always lives in page zero.
fn restart_vector(token: &str) -> Result<u16, OperandError> {
    token
        .strip_suffix('H')
        .filter(|digits| digits.len() == 2 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
        .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        .map(u16::from)
        .ok_or_else(|| OperandError::token(Some(token)))
}

/// `control/br`: jumps, calls, returns and restarts.
pub fn branch(
    mnemonic: &str,
    op1: Option<&str>,
    op2: Option<&str>,
) -> Result<DecodeEntry, OperandError> {
    let (name, target) = fold_condition(mnemonic, op1, op2);
    Ok(match target {
        None => DecodeEntry::implied(name),
        Some("r8") => DecodeEntry::op8(name, Operand8::Immediate),
        Some("a16") => DecodeEntry::op16(name, Operand16::Immediate),
        Some("(HL)") => DecodeEntry::op16(name, Operand16::Register(Reg16::HL)),
        Some(vector) => DecodeEntry::op16(name, Operand16::Fixed(restart_vector(vector)?)),
    })
}

/// `control/misc`: NOP, STOP, HALT, DI, EI and the prefix escape.
pub fn misc(
    mnemonic: &str,
    op1: Option<&str>,
    op2: Option<&str>,
) -> Result<DecodeEntry, OperandError> {
    if op2.is_some() {
        return Err(OperandError::token(op2));
    }
    match op1 {
        None => Ok(DecodeEntry::implied(mnemonic)),
        Some("0") => Ok(DecodeEntry::op8(mnemonic, Operand8::Immediate)),
        Some("CB") => Ok(DecodeEntry::prefix_extended()),
        Some(other) => Err(OperandError::token(Some(other))),
    }
}
