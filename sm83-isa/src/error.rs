use thiserror::Error;

use crate::record::Slot;

/// A classifier met an operand token outside its group's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized operand `{token}`")]
pub struct OperandError {
    pub token: String,
}

impl OperandError {
    pub(crate) fn token(token: Option<&str>) -> Self {
        Self {
            token: token.unwrap_or("<none>").to_string(),
        }
    }
}

/// Reasons a decode table cannot be generated. Each one aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("{slot}: no classifier for instruction group `{group}`")]
    UnknownGroup { slot: Slot, group: String },

    #[error("{slot}: unrecognized operand `{token}` in group `{group}`")]
    UnrecognizedOperand {
        slot: Slot,
        group: String,
        token: String,
    },

    #[error("{slot}: prefixed opcode has no metadata record")]
    IncompleteMetadata { slot: Slot },
}

impl TableError {
    /// The slot whose record caused the failure.
    pub fn slot(&self) -> Slot {
        match self {
            TableError::UnknownGroup { slot, .. }
            | TableError::UnrecognizedOperand { slot, .. }
            | TableError::IncompleteMetadata { slot } => *slot,
        }
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
