use super::register16;
use crate::entry::DecodeEntry;
use crate::error::OperandError;
use crate::mode::{Operand8, Operand16};
use crate::register::Reg16;

/// `x16/alu`: INC/DEC on a pair, ADD HL,rr and ADD SP,r8.
pub fn alu16(
    mnemonic: &str,
    op1: Option<&str>,
    op2: Option<&str>,
) -> Result<DecodeEntry, OperandError> {
    match (op1, op2) {
        (Some(_), None) => Ok(DecodeEntry::op16(format!("{mnemonic}16"), register16(op1)?)),
        (Some("HL"), Some(_)) => Ok(DecodeEntry::op16(format!("{mnemonic}hl"), register16(op2)?)),
        // signed displacement added to SP
        (Some("SP"), Some("r8")) => Ok(DecodeEntry::op8(format!("{mnemonic}sp"), Operand8::Immediate)),
        (Some("SP"), _) => Err(OperandError::token(op2)),
        _ => Err(OperandError::token(op1)),
    }
}

/// `x16/lsm`: 16-bit loads, PUSH and POP.
pub fn lsm16(
    mnemonic: &str,
    op1: Option<&str>,
    op2: Option<&str>,
) -> Result<DecodeEntry, OperandError> {
    match op2 {
        None => Ok(DecodeEntry::op16(mnemonic, register16(op1)?)),
        Some("d16") => Ok(DecodeEntry::op16x2(
            format!("{mnemonic}16"),
            register16(op1)?,
            Operand16::Immediate,
        )),
        Some("HL") => Ok(DecodeEntry::op16x2(
            format!("{mnemonic}16"),
            register16(op1)?,
            Operand16::Register(Reg16::HL),
        )),
        Some("SP+r8") if op1 == Some("HL") => {
            Ok(DecodeEntry::op8(format!("{mnemonic}HL"), Operand8::Immediate))
        }
        Some("SP") if op1 == Some("(a16)") => Ok(DecodeEntry::op16x2(
            format!("{mnemonic}16"),
            Operand16::Address,
            Operand16::Register(Reg16::SP),
        )),
        Some("SP+r8" | "SP") => Err(OperandError::token(op1)),
        Some(other) => Err(OperandError::token(Some(other))),
    }
}
