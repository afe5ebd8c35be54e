//! MIPS III disassembler CLI.
//!
//! This binary loads a raw big-endian image into emulated memory and prints a
//! disassembly listing. It performs:
//! 1. **Start-up checks:** Verifies the decode tables and aborts if they are malformed.
//! 2. **Loading:** Places the image at the configured RAM base.
//! 3. **Breakpoints:** Patches the requested addresses, then lists the real code
//!    through the breakpoint table, marking patched lines.

use std::error::Error;
use std::fs;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mipsim_core::config::Config;
use mipsim_core::debug::BreakpointTable;
use mipsim_core::isa::disasm::{self, Disassembly};
use mipsim_core::isa::tables;
use mipsim_core::sim::loader;
use mipsim_core::soc::Memory;

#[derive(Parser, Debug)]
#[command(
    name = "mipsdis",
    author,
    version,
    about = "MIPS III (VR4300) disassembler",
    long_about = "Load a raw big-endian image and print a disassembly listing.\n\nLines that are branch or jump targets are marked with '>', patched breakpoints with '*'.\n\nExamples:\n  mipsdis -f boot.bin --start 0x80000000 --end 0x80000100\n  mipsdis -f boot.bin --start 0x80000040 --end 0x80000100 --break 0x80000050 --roles"
)]
struct Cli {
    /// Raw big-endian image to disassemble.
    #[arg(short, long)]
    file: String,

    /// Physical address the image is loaded at (overrides the config).
    #[arg(long, value_parser = parse_addr)]
    base: Option<u32>,

    /// First address to list (defaults to the load address).
    #[arg(long, value_parser = parse_addr)]
    start: Option<u32>,

    /// End of the listing, exclusive (defaults to the end of the image).
    #[arg(long, value_parser = parse_addr)]
    end: Option<u32>,

    /// Address to patch with a breakpoint; may be repeated.
    #[arg(long = "break", value_parser = parse_addr)]
    breakpoints: Vec<u32>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<String>,

    /// Append the source and destination registers of each line.
    #[arg(long)]
    roles: bool,
}

/// Parses `0x`-prefixed hexadecimal or plain decimal addresses.
fn parse_addr(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    if let Err(e) = tables::verify_tables() {
        eprintln!("[!] FATAL: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[!] {e}");
            ExitCode::FAILURE
        }
    }
}

/// Reads the JSON config, or falls back to defaults.
fn load_config(path: Option<&str>) -> Result<Config, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let json = fs::read_to_string(path).map_err(|e| format!("could not read '{path}': {e}"))?;
    Ok(Config::from_json(&json)?)
}

/// Installs the log subscriber; `RUST_LOG` takes precedence over the config.
fn init_tracing(config: &Config) {
    let fallback = if config.general.trace { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, mut config: Config) -> Result<(), Box<dyn Error>> {
    if let Some(base) = cli.base {
        config.memory.ram_base = base;
    }

    let mut memory = Memory::from_config(&config);
    let loaded = loader::load_into(&memory, &cli.file, 0)?;

    let start = cli.start.unwrap_or(config.memory.ram_base);
    let end = cli
        .end
        .unwrap_or_else(|| config.memory.ram_base.saturating_add(loaded as u32));

    let mut breakpoints = BreakpointTable::new();
    for &addr in &cli.breakpoints {
        let _ = breakpoints.set(&mut memory, addr)?;
    }

    let lines = disasm::decode_range(start, end, |addr| {
        breakpoints.instruction_at(&memory, addr)
    })?;

    for line in &lines {
        println!("{}", render_line(line, &breakpoints, cli.roles));
    }
    debug!(
        lines = lines.len(),
        breakpoints = breakpoints.len(),
        "listing complete"
    );
    Ok(())
}

/// `>* ADDR: WORD  TEXT`, optionally followed by the register roles.
fn render_line(line: &Disassembly, breakpoints: &BreakpointTable, roles: bool) -> String {
    let inst = &line.instruction;
    let target_mark = if line.is_jump_target { '>' } else { ' ' };
    let break_mark = if breakpoints.contains(inst.address) {
        '*'
    } else {
        ' '
    };

    let mut out = format!(
        "{target_mark}{break_mark} {:08x}: {:08x}  {}",
        inst.address, inst.opcode, line.text
    );
    if roles {
        out.push_str(&format!(
            "    ; src [{}] dst [{}]",
            inst.source_names().join(", "),
            inst.destination_names().join(", ")
        ));
    }
    out
}
