use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use sm83_isa::{
    DecodeEntry, DecodeTable, InstructionSource, Mode, OpcodeSpace, RenderStyle, Slot,
    check_lengths, classify_record, render_entry, render_operand, render_table, synthesize,
};
use sm83_opcodes::{OpcodeMetadata, parse_opcode_key};

#[derive(Parser)]
#[command(name = "sm83gen", about = "SM83 opcode metadata to decode table compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full 512-entry decode table as Rust source
    Generate {
        /// Opcode metadata (.json, .yaml); defaults to the bundled table
        #[arg(short, long)]
        metadata: Option<PathBuf>,
        /// YAML file with render options
        #[arg(short, long)]
        style: Option<PathBuf>,
        /// One space between fields instead of padded columns
        #[arg(long)]
        no_align: bool,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Count entries per mode in both opcode spaces
    Summary {
        #[arg(short, long)]
        metadata: Option<PathBuf>,
    },
    /// Generate the table and compare derived lengths with the metadata
    Check {
        #[arg(short, long)]
        metadata: Option<PathBuf>,
    },
    /// Show how one opcode is classified
    Show {
        /// Opcode byte, e.g. 0x3a or 3a
        #[arg(value_parser = parse_opcode)]
        opcode: u8,
        /// Look the byte up in the CB-prefixed space
        #[arg(short, long)]
        prefixed: bool,
        #[arg(short, long)]
        metadata: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            metadata,
            style,
            no_align,
            output,
        } => cmd_generate(metadata.as_deref(), style.as_deref(), no_align, output.as_deref()),
        Commands::Summary { metadata } => cmd_summary(metadata.as_deref()),
        Commands::Check { metadata } => cmd_check(metadata.as_deref()),
        Commands::Show {
            opcode,
            prefixed,
            metadata,
        } => cmd_show(opcode, prefixed, metadata.as_deref()),
    }
}

fn parse_opcode(s: &str) -> Result<u8, String> {
    parse_opcode_key(s)
        .or_else(|| u8::from_str_radix(s, 16).ok())
        .ok_or_else(|| format!("`{s}` is not an opcode byte"))
}

fn load_metadata(path: Option<&Path>) -> OpcodeMetadata {
    let loaded = match path {
        Some(path) => OpcodeMetadata::open(path),
        None => OpcodeMetadata::bundled(),
    };
    match loaded {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn build_table(metadata: &OpcodeMetadata) -> DecodeTable {
    match synthesize(metadata) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn load_style(path: Option<&Path>) -> RenderStyle {
    let Some(path) = path else {
        return RenderStyle::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", path.display());
        std::process::exit(1);
    });
    serde_yaml::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error: invalid render style {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn cmd_generate(
    metadata: Option<&Path>,
    style: Option<&Path>,
    no_align: bool,
    output: Option<&Path>,
) {
    let metadata = load_metadata(metadata);
    let table = build_table(&metadata);

    let mut style = load_style(style);
    if no_align {
        style.align = false;
    }
    let source = render_table(&table, &style);

    match output {
        Some(path) => {
            fs::write(path, source).unwrap_or_else(|e| {
                eprintln!("Error writing {}: {e}", path.display());
                std::process::exit(1);
            });
            log::info!("wrote {} entries to {}", table.len(), path.display());
        }
        None => print!("{source}"),
    }
}

fn cmd_summary(metadata: Option<&Path>) {
    let metadata = load_metadata(metadata);
    let table = build_table(&metadata);

    println!("=== Decode Table Summary ===");
    for space in OpcodeSpace::ALL {
        println!(
            "{space} ({} records, {} slots):",
            metadata.len(space),
            table.space(space).len()
        );
        let counts = table.mode_counts(space);
        for mode in Mode::ALL {
            if let Some(count) = counts.get(&mode) {
                println!("  {:<16}{count:>4}", mode.name());
            }
        }
    }
    println!("Handlers:         {}", table.opcode_names().len());
}

fn cmd_check(metadata: Option<&Path>) {
    let metadata = load_metadata(metadata);
    let table = build_table(&metadata);

    let mismatches = check_lengths(&table, &metadata);
    for m in &mismatches {
        println!(
            "{}: metadata says {} bytes, classified as {} bytes",
            m.slot, m.recorded, m.derived
        );
    }
    if !mismatches.is_empty() {
        eprintln!("Error: {} length mismatches", mismatches.len());
        std::process::exit(1);
    }
    println!(
        "ok: {} entries, {} handlers",
        table.len(),
        table.opcode_names().len()
    );
}

fn cmd_show(byte: u8, prefixed: bool, metadata: Option<&Path>) {
    let metadata = load_metadata(metadata);
    let space = if prefixed {
        OpcodeSpace::Prefixed
    } else {
        OpcodeSpace::Unprefixed
    };
    let slot = Slot::new(space, byte);

    let record = metadata.record(space, byte);
    let entry = match record {
        Some(record) => classify_record(slot, record),
        None if space == OpcodeSpace::Unprefixed => Ok(DecodeEntry::invalid()),
        None => Err(sm83_isa::TableError::IncompleteMetadata { slot }),
    };
    let entry = entry.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    println!("Slot:      {slot}");
    match record {
        Some(r) => {
            let operands: Vec<&str> = [r.operand1(), r.operand2()].into_iter().flatten().collect();
            println!("Record:    {} {} [{}]", r.mnemonic, operands.join(","), r.group);
            if let Some(len) = r.length {
                println!("Length:    {len}");
            }
        }
        None => println!("Record:    (none)"),
    }
    println!("Mode:      {}", entry.mode());
    if !entry.opcode().is_empty() {
        println!("Handler:   {}", entry.handler_name());
    }
    for (i, op) in entry.operands().iter().enumerate() {
        println!("Operand {}: {}", i + 1, render_operand(op));
    }
    if let Some(len) = entry.encoded_len(space) {
        println!("Encoded:   {len} bytes ({} operand)", entry.operand_bytes());
    }
    println!(
        "Rendered:  {}",
        render_entry(
            &entry,
            &RenderStyle {
                align: false,
                ..RenderStyle::default()
            }
        )
    );
}
