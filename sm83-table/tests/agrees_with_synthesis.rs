use sm83_isa::{DecodeTable, Mode, OpcodeSpace, synthesize};
use sm83_opcodes::OpcodeMetadata;
use sm83_table::{INSTRUCTIONS, Instruction, decode, ops};

fn runtime_table() -> DecodeTable {
    synthesize(&OpcodeMetadata::bundled().unwrap()).unwrap()
}

fn mode_of(instruction: &Instruction) -> Mode {
    match instruction {
        Instruction::Implied(_) => Mode::Implied,
        Instruction::Op8bit(..) => Mode::Op8bit,
        Instruction::Op8bit8bit(..) => Mode::Op8bit8bit,
        Instruction::Op16bit(..) => Mode::Op16bit,
        Instruction::Op16bit16bit(..) => Mode::Op16bit16bit,
        Instruction::PrefixExtended => Mode::PrefixExtended,
        Instruction::Invalid => Mode::Invalid,
    }
}

#[test]
fn generated_table_matches_runtime_synthesis() {
    let table = runtime_table();
    assert_eq!(INSTRUCTIONS.len(), table.len());
    for (slot, entry) in table.iter() {
        let generated = &INSTRUCTIONS[slot.index()];
        assert_eq!(mode_of(generated), entry.mode(), "{slot}");
        match generated.op() {
            Some(op) => assert_eq!(op.name(), entry.handler_name(), "{slot}"),
            None => assert!(matches!(entry.mode(), Mode::PrefixExtended | Mode::Invalid)),
        }
    }
}

#[test]
fn handler_constants_cover_the_table() {
    let table = runtime_table();
    let names: Vec<&str> = ops::ALL.iter().map(|op| op.name()).collect();
    let expected: Vec<String> = table.opcode_names().into_iter().collect();
    assert_eq!(names, expected);
}

#[test]
fn decode_indexes_each_space() {
    for byte in 0..=u8::MAX {
        assert_eq!(decode(false, byte), &INSTRUCTIONS[byte as usize]);
        assert_eq!(decode(true, byte), &INSTRUCTIONS[0x100 + byte as usize]);
    }
    let table = runtime_table();
    assert_eq!(
        mode_of(decode(true, 0xC6)),
        table.entry(OpcodeSpace::Prefixed, 0xC6).mode()
    );
}
