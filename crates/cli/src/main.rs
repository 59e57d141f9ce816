//! LS-8 emulator CLI.
//!
//! This binary is the process entry point for the emulator. It performs:
//! 1. **Run:** Load a `.ls8` program, execute it, and print `PRN` output to stdout.
//! 2. **Disassemble:** Print an address-annotated listing of a program without running it.
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default `warn`).

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::isa::disasm;
use ls8_core::sim::loader;
use ls8_core::soc::StdoutConsole;
use ls8_core::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit register machine emulator",
    long_about = "Run or disassemble LS-8 programs.\n\nPrograms are text files with one base-2 byte per line; `#` starts a comment.\n\nExamples:\n  ls8 run demos/print8.ls8\n  ls8 run demos/mult.ls8 --trace --stats\n  ls8 disasm demos/sctest.ls8"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a program and run it until it halts.
    Run {
        /// Program file to execute.
        program: PathBuf,

        /// Print a TRACE line to stderr before every instruction.
        #[arg(long)]
        trace: bool,

        /// Print execution statistics to stderr after the run.
        #[arg(long)]
        stats: bool,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print a disassembly of a program without running it.
    Disasm {
        /// Program file to disassemble.
        program: PathBuf,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            program,
            trace,
            stats,
            config,
        } => cmd_run(&program, trace, stats, config.as_deref()),
        Commands::Disasm { program } => cmd_disasm(&program),
    };

    if let Err(msg) = result {
        eprintln!("[!] {msg}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Reads the config file if one was given, otherwise the defaults.
fn load_config(path: Option<&Path>) -> Result<Config, String> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read config '{}': {e}", path.display()))?;
    Config::from_json(&json).map_err(|e| format!("invalid config '{}': {e}", path.display()))
}

/// Loads the program, then runs it to completion.
///
/// The whole file is parsed before anything executes, so a malformed line
/// aborts with no output.
fn cmd_run(program: &Path, trace: bool, stats: bool, config: Option<&Path>) -> Result<(), String> {
    let mut config = load_config(config)?;
    config.general.trace_instructions |= trace;

    tracing::debug!(?config, program = %program.display(), "starting run");

    let mut sim = Simulator::new(&config, StdoutConsole);
    sim.load_file(program).map_err(|e| e.to_string())?;

    let outcome = sim.run();
    if stats {
        sim.cpu.stats.print();
    }
    if let Err(e) = outcome {
        eprintln!("[!] FATAL: {e}");
        sim.cpu.dump_state();
        process::exit(1);
    }
    Ok(())
}

/// Prints `addr: bytes  text` for every instruction in the program.
fn cmd_disasm(program: &Path) -> Result<(), String> {
    let image = loader::load_program_file(program).map_err(|e| e.to_string())?;
    for line in disasm::disassemble_image(&image) {
        let bytes: Vec<String> = line.bytes.iter().map(|b| format!("{b:02X}")).collect();
        println!("{:02X}: {:<9} {}", line.addr, bytes.join(" "), line.text);
    }
    Ok(())
}
