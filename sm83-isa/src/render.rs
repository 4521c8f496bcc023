//! Renders decode entries as Rust tagged-variant constructions, e.g.
//!
//! ```text
//! Op8bit8bit  (     ld,      Mode8::Register(Reg8::B),              Mode8::Immediate),
//! ```

use std::fmt::Write;

use serde::Deserialize;

use crate::entry::DecodeEntry;
use crate::mode::{AddressingMode, Mode, Operand8, Operand16};
use crate::record::Slot;
use crate::register::Reg16;
use crate::table::DecodeTable;

const MODE_COLUMN: usize = 12;
const OPCODE_COLUMN: usize = 7;
const OPERAND_COLUMN: usize = 30;

/// Layout options for rendered tables.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderStyle {
    /// Pad the mode tag, handler name and operands into columns.
    pub align: bool,
    /// Wrap the array in `pub const <name>: [Instruction; N] = ...;`.
    /// `None` renders a bare array expression, suitable for `include!`.
    pub table_name: Option<String>,
    /// Spaces in front of each entry.
    pub indent: usize,
    /// Append a `// 0x..` comment naming the slot of each entry.
    pub slot_comments: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            align: true,
            table_name: Some("INSTRUCTIONS".to_string()),
            indent: 4,
            slot_comments: false,
        }
    }
}

fn reg16_literal(reg: Reg16) -> String {
    format!("Reg16::{reg}")
}

/// Literal for one addressing mode. The `Mode8::` / `Mode16::` path keeps
/// same-shaped modes of different widths apart.
pub fn render_operand(op: &AddressingMode) -> String {
    match op {
        AddressingMode::Byte(op) => match op {
            Operand8::Register(reg) => format!("Mode8::Register(Reg8::{reg})"),
            // the step is carried by the LDI/LDD handler name
            Operand8::Indirect(pair) | Operand8::IndirectStep(pair, _) => {
                format!("Mode8::Indirect({})", reg16_literal(*pair))
            }
            Operand8::IndexedC => "Mode8::IndexedC".to_string(),
            Operand8::IndexedImmediate => "Mode8::IndexedImm".to_string(),
            Operand8::Immediate => "Mode8::Immediate".to_string(),
            Operand8::Address => "Mode8::Address".to_string(),
            Operand8::Fixed(value) => format!("Mode8::Fixed({value})"),
        },
        AddressingMode::Word(op) => match op {
            Operand16::Register(Reg16::SP) => "Mode16::StackPointer".to_string(),
            Operand16::Register(reg) => format!("Mode16::Register({})", reg16_literal(*reg)),
            Operand16::Immediate => "Mode16::Immediate".to_string(),
            Operand16::Address => "Mode16::Address".to_string(),
            Operand16::Fixed(value) => format!("Mode16::Fixed({value:#06x})"),
        },
    }
}

/// Render one entry without indentation or trailing comma.
pub fn render_entry(entry: &DecodeEntry, style: &RenderStyle) -> String {
    let mode = entry.mode();
    if matches!(mode, Mode::PrefixExtended | Mode::Invalid) {
        return mode.to_string();
    }

    let name = entry.handler_name();
    let operands: Vec<String> = entry.operands().iter().map(render_operand).collect();

    if style.align {
        let mut out = format!("{:<MODE_COLUMN$}({name:>OPCODE_COLUMN$}", mode.name());
        for op in &operands {
            let _ = write!(out, ",{op:>OPERAND_COLUMN$}");
        }
        out.push(')');
        out
    } else {
        let mut out = format!("{mode}({name}");
        for op in &operands {
            let _ = write!(out, ", {op}");
        }
        out.push(')');
        out
    }
}

fn push_line(out: &mut String, slot: Slot, entry: &DecodeEntry, style: &RenderStyle) {
    let _ = write!(
        out,
        "{:indent$}{},",
        "",
        render_entry(entry, style),
        indent = style.indent
    );
    if style.slot_comments {
        let _ = write!(out, " // {slot}");
    }
    out.push('\n');
}

/// Render the whole table, one entry per line in slot order.
pub fn render_table(table: &DecodeTable, style: &RenderStyle) -> String {
    let mut out = String::new();
    match &style.table_name {
        Some(name) => {
            let _ = writeln!(out, "pub const {name}: [Instruction; {}] = [", table.len());
        }
        None => out.push_str("[\n"),
    }
    for (slot, entry) in table.iter() {
        push_line(&mut out, slot, entry, style);
    }
    match style.table_name {
        Some(_) => out.push_str("];\n"),
        None => out.push_str("]\n"),
    }
    out
}
