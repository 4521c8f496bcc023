use super::register_or_indirect;
use crate::entry::DecodeEntry;
use crate::error::OperandError;
use crate::mode::Operand8;

fn bit_index(token: &str) -> Result<u8, OperandError> {
    token
        .parse::<u8>()
        .ok()
        .filter(|&bit| bit < 8 && token.len() == 1)
        .ok_or_else(|| OperandError::token(Some(token)))
}

/// The single rule for the `CB`-prefixed space: rotates/shifts/swaps take one
/// register operand, BIT/RES/SET take a bit index and a register.
pub fn prefixed(
    mnemonic: &str,
    op1: Option<&str>,
    op2: Option<&str>,
) -> Result<DecodeEntry, OperandError> {
    match (op1, op2) {
        (Some(literal), Some(target)) => Ok(DecodeEntry::op8x2(
            mnemonic,
            Operand8::Fixed(bit_index(literal)?),
            register_or_indirect(target)?,
        )),
        (Some(target), None) => Ok(DecodeEntry::op8(mnemonic, register_or_indirect(target)?)),
        (None, _) => Err(OperandError::token(None)),
    }
}
