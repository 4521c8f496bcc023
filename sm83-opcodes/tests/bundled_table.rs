//! Full-pipeline checks over the bundled SM83 metadata.

use sm83_isa::*;
use sm83_opcodes::OpcodeMetadata;

const INVALID_UNPREFIXED: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

fn bundled_table() -> (OpcodeMetadata, DecodeTable) {
    let metadata = OpcodeMetadata::bundled().unwrap();
    let table = synthesize(&metadata).unwrap();
    (metadata, table)
}

#[test]
fn bundled_metadata_counts() {
    let metadata = OpcodeMetadata::bundled().unwrap();
    assert_eq!(metadata.len(OpcodeSpace::Unprefixed), 245);
    assert_eq!(metadata.len(OpcodeSpace::Prefixed), 256);
}

#[test]
fn every_slot_has_exactly_one_entry() {
    let (_, table) = bundled_table();
    assert_eq!(table.len(), 512);
    assert_eq!(table.unprefixed().len(), 256);
    assert_eq!(table.prefixed().len(), 256);
    for (i, (slot, _)) in table.iter().enumerate() {
        assert_eq!(slot.index(), i);
    }
}

#[test]
fn only_missing_unprefixed_slots_are_invalid() {
    let (metadata, table) = bundled_table();
    for (slot, entry) in table.iter() {
        let has_record = metadata.record(slot.space, slot.byte).is_some();
        assert_eq!(entry.is_invalid(), !has_record, "{slot}");
    }
    let invalid: Vec<u8> = (0..=u8::MAX)
        .filter(|&b| table.entry(OpcodeSpace::Unprefixed, b).is_invalid())
        .collect();
    assert_eq!(invalid, INVALID_UNPREFIXED);
    assert!(!table.prefixed().iter().any(DecodeEntry::is_invalid));
}

#[test]
fn operand_count_matches_mode() {
    let (_, table) = bundled_table();
    for (slot, entry) in table.iter() {
        assert_eq!(
            entry.operands().len(),
            entry.mode().arity(),
            "{slot}: {entry:?}"
        );
    }
}

#[test]
fn operand_width_matches_mode() {
    let (_, table) = bundled_table();
    for (slot, entry) in table.iter() {
        for op in entry.operands() {
            assert_eq!(Some(op.width()), entry.mode().width(), "{slot}: {entry:?}");
        }
    }
}

#[test]
fn opcode_name_empty_only_for_prefix_escape() {
    let (_, table) = bundled_table();
    for (slot, entry) in table.iter() {
        assert_eq!(
            entry.opcode().is_empty(),
            entry.mode() == Mode::PrefixExtended,
            "{slot}"
        );
    }
    assert_eq!(table.entry(OpcodeSpace::Unprefixed, 0xCB).mode(), Mode::PrefixExtended);
}

#[test]
fn encoded_lengths_agree_with_metadata() {
    let (metadata, table) = bundled_table();
    assert_eq!(check_lengths(&table, &metadata), []);
}

#[test]
fn known_entries() {
    let (_, table) = bundled_table();
    let un = |b| table.entry(OpcodeSpace::Unprefixed, b);
    let cb = |b| table.entry(OpcodeSpace::Prefixed, b);

    assert_eq!(*un(0x00), DecodeEntry::implied("NOP"));
    assert_eq!(*un(0x10), DecodeEntry::op8("STOP", Operand8::Immediate));
    assert_eq!(*un(0xCA), DecodeEntry::op16("JPZ", Operand16::Immediate));
    assert_eq!(*un(0xC0), DecodeEntry::implied("RETNZ"));
    assert_eq!(*un(0xDF), DecodeEntry::op16("RST", Operand16::Fixed(0x0018)));
    assert_eq!(
        *un(0x22),
        DecodeEntry::op8x2(
            "LDI",
            Operand8::IndirectStep(Reg16::HL, Step::Increment),
            Operand8::Register(Reg8::A)
        )
    );
    assert_eq!(
        *un(0x3A),
        DecodeEntry::op8x2(
            "LDD",
            Operand8::Register(Reg8::A),
            Operand8::IndirectStep(Reg16::HL, Step::Decrement)
        )
    );
    assert_eq!(*un(0x07), DecodeEntry::op8("RLC", Operand8::Register(Reg8::A)));
    assert_eq!(*un(0xE8), DecodeEntry::op8("ADDsp", Operand8::Immediate));
    assert_eq!(*un(0xF8), DecodeEntry::op8("LDHL", Operand8::Immediate));
    assert_eq!(
        *un(0x08),
        DecodeEntry::op16x2("LD16", Operand16::Address, Operand16::Register(Reg16::SP))
    );
    assert_eq!(
        *un(0xF0),
        DecodeEntry::op8x2("LD", Operand8::Register(Reg8::A), Operand8::IndexedImmediate)
    );
    assert_eq!(*un(0xFE), DecodeEntry::op8("CP", Operand8::Immediate));
    assert_eq!(*un(0x86), DecodeEntry::op8("ADD", Operand8::Indirect(Reg16::HL)));

    assert_eq!(
        *cb(0x58),
        DecodeEntry::op8x2("BIT", Operand8::Fixed(3), Operand8::Register(Reg8::B))
    );
    assert_eq!(*cb(0x36), DecodeEntry::op8("SWAP", Operand8::Indirect(Reg16::HL)));
    assert_eq!(
        *cb(0xFF),
        DecodeEntry::op8x2("SET", Operand8::Fixed(7), Operand8::Register(Reg8::A))
    );
}

#[test]
fn mode_counts_cover_both_spaces() {
    let (_, table) = bundled_table();
    for space in OpcodeSpace::ALL {
        let total: usize = table.mode_counts(space).values().sum();
        assert_eq!(total, 256);
    }
    let cb = table.mode_counts(OpcodeSpace::Prefixed);
    assert_eq!(cb[&Mode::Op8bit], 64);
    assert_eq!(cb[&Mode::Op8bit8bit], 192);
    assert_eq!(table.mode_counts(OpcodeSpace::Unprefixed)[&Mode::Invalid], 11);
}

#[test]
fn handler_names() {
    let (_, table) = bundled_table();
    let names = table.opcode_names();
    for name in ["nop", "ld", "ldi", "ldd", "ld16", "ldhl", "addhl", "addsp", "inc16", "jpz", "retnz", "rst", "bit"] {
        assert!(names.contains(name), "missing handler `{name}`");
    }
    assert!(!names.contains(""));
    assert!(!names.contains("invalid"));
    assert!(!names.contains("ldh"));
}

#[test]
fn rendered_lines() {
    let (_, table) = bundled_table();
    let text = render_table(&table, &RenderStyle::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 512 + 2);
    assert_eq!(lines[0], "pub const INSTRUCTIONS: [Instruction; 512] = [");
    assert_eq!(lines[513], "];");

    let line = |index: usize| lines[index + 1];
    assert_eq!(line(0x00), "    Implied     (    nop),");
    assert_eq!(
        line(0x01),
        "    Op16bit16bit(   ld16,   Mode16::Register(Reg16::BC),             Mode16::Immediate),"
    );
    assert_eq!(
        line(0x08),
        "    Op16bit16bit(   ld16,               Mode16::Address,          Mode16::StackPointer),"
    );
    assert_eq!(
        line(0x22),
        "    Op8bit8bit  (    ldi,    Mode8::Indirect(Reg16::HL),      Mode8::Register(Reg8::A)),"
    );
    assert_eq!(line(0xCB), "    PrefixExtended,");
    assert_eq!(line(0xD3), "    Invalid,");
    assert_eq!(line(0xDF), "    Op16bit     (    rst,         Mode16::Fixed(0x0018)),");
    assert_eq!(
        line(0xE0),
        "    Op8bit8bit  (     ld,             Mode8::IndexedImm,      Mode8::Register(Reg8::A)),"
    );
    assert_eq!(
        line(0x100 + 0x58),
        "    Op8bit8bit  (    bit,               Mode8::Fixed(3),      Mode8::Register(Reg8::B)),"
    );
}

#[test]
fn slot_comments_and_bare_array() {
    let (_, table) = bundled_table();
    let style = RenderStyle {
        align: false,
        table_name: None,
        indent: 2,
        slot_comments: true,
    };
    let text = render_table(&table, &style);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "[");
    assert_eq!(lines[1], "  Implied(nop), // 0x00");
    assert_eq!(lines[0x100 + 0x38 + 1], "  Op8bit(srl, Mode8::Register(Reg8::B)), // cb 0x38");
    assert_eq!(lines[513], "]");
}

#[test]
fn generation_is_deterministic() {
    let (_, first) = bundled_table();
    let (_, second) = bundled_table();
    assert_eq!(first, second);
    let style = RenderStyle::default();
    assert_eq!(render_table(&first, &style), render_table(&second, &style));
}

#[test]
fn missing_prefixed_record_aborts() {
    let mut metadata = OpcodeMetadata::bundled().unwrap();
    metadata.remove(OpcodeSpace::Prefixed, 0x80);
    let err = synthesize(&metadata).unwrap_err();
    assert_eq!(
        err,
        TableError::IncompleteMetadata {
            slot: Slot::new(OpcodeSpace::Prefixed, 0x80)
        }
    );
}

#[test]
fn unknown_group_aborts() {
    let mut metadata = OpcodeMetadata::bundled().unwrap();
    metadata.insert(
        OpcodeSpace::Unprefixed,
        0xD3,
        InstructionRecord::new("OUT", "io/port", Some("(a8)"), Some("A")),
    );
    let err = synthesize(&metadata).unwrap_err();
    assert_eq!(err.to_string(), "0xd3: no classifier for instruction group `io/port`");
}

#[test]
fn unrecognized_operand_aborts() {
    let mut metadata = OpcodeMetadata::bundled().unwrap();
    metadata.insert(
        OpcodeSpace::Unprefixed,
        0xDD,
        InstructionRecord::new("LD", "x8/lsm", Some("(IX+d)"), Some("A")),
    );
    let err = synthesize(&metadata).unwrap_err();
    assert_eq!(
        err,
        TableError::UnrecognizedOperand {
            slot: Slot::new(OpcodeSpace::Unprefixed, 0xDD),
            group: "x8/lsm".to_string(),
            token: "(IX+d)".to_string(),
        }
    );
}
