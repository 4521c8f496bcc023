//! SM83 (Game Boy CPU) decode-table compiler.
//!
//! Takes per-opcode instruction metadata (mnemonic, group, operand tokens) and
//! classifies every slot of the unprefixed and `CB`-prefixed opcode spaces
//! into a [`DecodeEntry`]: an operand [`Mode`] plus one [`AddressingMode`]
//! per operand. The resulting [`DecodeTable`] always holds exactly 512
//! entries and can be rendered as Rust source with [`render_table`].
//!
//! ```
//! use sm83_isa::{Mode, classify};
//!
//! let entry = classify::branch("JP", Some("Z"), Some("a16")).unwrap();
//! assert_eq!(entry.opcode(), "JPZ");
//! assert_eq!(entry.mode(), Mode::Op16bit);
//! ```

pub mod classify;
pub mod entry;
pub mod error;
pub mod mode;
pub mod record;
pub mod register;
pub mod render;
pub mod table;

pub use classify::{Classifier, Group, classify_record, dispatch};
pub use entry::DecodeEntry;
pub use error::{OperandError, TableError};
pub use mode::{AddressingMode, Mode, Operand8, Operand16, Step, Width};
pub use record::{InstructionRecord, InstructionSource, OpcodeSpace, Slot};
pub use register::{Reg8, Reg16};
pub use render::{RenderStyle, render_entry, render_operand, render_table};
pub use table::{DecodeTable, LengthMismatch, SPACE_SIZE, check_lengths, synthesize};
