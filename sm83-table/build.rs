use std::env;
use std::fmt::Write;
use std::fs;

use sm83_isa::{RenderStyle, render_table, synthesize};
use sm83_opcodes::OpcodeMetadata;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    println!("cargo:rerun-if-changed=build.rs");

    let metadata = OpcodeMetadata::bundled()
        .unwrap_or_else(|e| panic!("bundled opcode metadata does not load: {e}"));
    let table = synthesize(&metadata).unwrap_or_else(|e| panic!("decode table generation failed: {e}"));

    // Phase 1: the table itself, as a bare array expression for `include!`
    let style = RenderStyle {
        table_name: None,
        slot_comments: true,
        ..RenderStyle::default()
    };
    fs::write(format!("{out_dir}/instructions.rs"), render_table(&table, &style)).unwrap();

    // Phase 2: one handler constant per distinct name the table references
    let names = table.opcode_names();
    let mut ops = String::new();
    for name in &names {
        writeln!(ops, "pub const {name}: Op = Op(\"{name}\");").unwrap();
    }
    writeln!(ops, "\npub const ALL: [Op; {}] = [", names.len()).unwrap();
    for name in &names {
        writeln!(ops, "    {name},").unwrap();
    }
    ops.push_str("];\n");
    fs::write(format!("{out_dir}/ops.rs"), ops).unwrap();
}
