//! MIPS32 analytics simulator CLI.
//!
//! This binary provides the entry point for running a flat program image
//! through the simulator core. It performs:
//! 1. **Configuration:** Built-in defaults, optionally overridden by a JSON
//!    config file and command-line flags.
//! 2. **Loading:** Copies the image into RAM at the start PC.
//! 3. **Execution:** Runs the retirement loop until `syscall`, the
//!    instruction limit, or a fatal fault, then prints the analytics report.

use clap::Parser;
use std::{fs, process};

use mips_core::config::Config;
use mips_core::sim::{loader, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS32 functional simulator with pipeline analytics",
    long_about = "Run a flat big-endian MIPS32 binary and report hazard, branch-prediction,\n\
                  and dual-issue analytics for 5/7/13-stage pipeline models.\n\n\
                  Examples:\n  \
                  mipsim -f program.bin\n  \
                  mipsim -f program.bin --forwarding --trace\n  \
                  mipsim -f program.bin --config sim.json"
)]
struct Cli {
    /// Flat binary image to execute.
    #[arg(short, long)]
    file: String,

    /// JSON configuration file (fields default when absent).
    #[arg(long)]
    config: Option<String>,

    /// Model operand forwarding (overrides the config file).
    #[arg(long)]
    forwarding: bool,

    /// Trace every retired instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Stop after this many retired instructions (0 = unlimited).
    #[arg(long, default_value_t = 0)]
    max_insts: u64,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => load_config(path),
        None => Config::default(),
    };
    if cli.forwarding {
        config.pipeline.forwarding = true;
    }
    if cli.trace {
        config.general.trace_instructions = true;
    }
    if cli.max_insts != 0 {
        config.general.max_instructions = cli.max_insts;
    }

    let image = loader::load_binary(&cli.file);
    let mut sim = Simulator::new(&config);
    sim.bus.load_image(&image, config.general.start_pc);

    println!(
        "[*] Direct execution: {} (forwarding: {}, start pc: {:#x})",
        cli.file, config.pipeline.forwarding, config.general.start_pc
    );

    match sim.run() {
        Ok(code) => {
            sim.cpu.stats.print();
            process::exit(code as i32);
        }
        Err(fault) => {
            eprintln!("\n[!] FATAL TRAP: {}", fault);
            sim.cpu.dump_state();
            sim.cpu.stats.print();
            process::exit(1);
        }
    }
}

/// Reads and deserializes a JSON configuration file.
///
/// Exits the process with an error message on IO or parse failure.
fn load_config(path: &str) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {}", path, e);
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {}: {}", path, e);
        process::exit(1);
    })
}
