use std::collections::{BTreeMap, BTreeSet};

use crate::classify::classify_record;
use crate::entry::DecodeEntry;
use crate::error::{Result, TableError};
use crate::mode::Mode;
use crate::record::{InstructionSource, OpcodeSpace, Slot};

/// Number of slots in one opcode space.
pub const SPACE_SIZE: usize = 256;

/// The complete decode table: 256 unprefixed entries followed by 256
/// prefixed entries, each indexed by its opcode byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeTable {
    entries: Vec<DecodeEntry>,
}

impl DecodeTable {
    pub fn entry(&self, space: OpcodeSpace, byte: u8) -> &DecodeEntry {
        &self.entries[Slot::new(space, byte).index()]
    }

    pub fn unprefixed(&self) -> &[DecodeEntry] {
        &self.entries[..SPACE_SIZE]
    }

    pub fn prefixed(&self) -> &[DecodeEntry] {
        &self.entries[SPACE_SIZE..]
    }

    pub fn space(&self, space: OpcodeSpace) -> &[DecodeEntry] {
        match space {
            OpcodeSpace::Unprefixed => self.unprefixed(),
            OpcodeSpace::Prefixed => self.prefixed(),
        }
    }

    /// All entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &DecodeEntry)> + '_ {
        OpcodeSpace::ALL.into_iter().flat_map(move |space| {
            self.space(space)
                .iter()
                .enumerate()
                .map(move |(byte, entry)| (Slot::new(space, byte as u8), entry))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct lower-cased handler names referenced by the table.
    pub fn opcode_names(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .filter(|e| !matches!(e.mode(), Mode::PrefixExtended | Mode::Invalid))
            .map(DecodeEntry::handler_name)
            .collect()
    }

    /// Entry count per mode within one space.
    pub fn mode_counts(&self, space: OpcodeSpace) -> BTreeMap<Mode, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.space(space) {
            *counts.entry(entry.mode()).or_insert(0) += 1;
        }
        counts
    }
}

/// Build the decode table from opcode metadata.
///
/// Unprefixed slots without a record become [`Mode::Invalid`]. The prefixed
/// space must be complete; a missing record there is
/// [`TableError::IncompleteMetadata`]. The first classification failure
/// aborts the whole run.
pub fn synthesize<S: InstructionSource + ?Sized>(source: &S) -> Result<DecodeTable> {
    let mut entries = Vec::with_capacity(2 * SPACE_SIZE);

    for space in OpcodeSpace::ALL {
        for byte in 0..=u8::MAX {
            let slot = Slot::new(space, byte);
            let entry = match (source.record(space, byte), space) {
                (Some(record), _) => classify_record(slot, record)?,
                (None, OpcodeSpace::Unprefixed) => DecodeEntry::invalid(),
                (None, OpcodeSpace::Prefixed) => {
                    return Err(TableError::IncompleteMetadata { slot });
                }
            };
            log::debug!(
                "{slot}: {} {} {:?}",
                entry.mode(),
                entry.opcode(),
                entry.operands()
            );
            entries.push(entry);
        }
    }

    Ok(DecodeTable { entries })
}

/// A slot whose metadata length disagrees with the classified operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthMismatch {
    pub slot: Slot,
    pub recorded: u8,
    pub derived: usize,
}

/// Compare each record's `length` (when present) against the length implied
/// by its classified entry.
pub fn check_lengths<S: InstructionSource + ?Sized>(
    table: &DecodeTable,
    source: &S,
) -> Vec<LengthMismatch> {
    let mut mismatches = Vec::new();
    for (slot, entry) in table.iter() {
        let Some(recorded) = source.record(slot.space, slot.byte).and_then(|r| r.length) else {
            continue;
        };
        let Some(derived) = entry.encoded_len(slot.space) else {
            continue;
        };
        if derived != recorded as usize {
            log::warn!("{slot}: metadata length {recorded}, classified length {derived}");
            mismatches.push(LengthMismatch {
                slot,
                recorded,
                derived,
            });
        }
    }
    mismatches
}
