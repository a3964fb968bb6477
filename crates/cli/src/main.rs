//! LS-8 emulator CLI.
//!
//! This binary loads an LS-8 program image and runs it. It performs:
//! 1. **Configuration:** Built-in defaults, an optional JSON config file, and flag overrides.
//! 2. **Loading:** Parses the program image before any instruction runs.
//! 3. **Execution:** Runs until `HLT`, printing `PRN` output to stdout.
//! 4. **Exit status:** Maps each failure class to a distinct process exit code.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use ls8_core::common::error::{EXIT_SUCCESS, EXIT_USAGE};
use ls8_core::sim::loader;
use ls8_core::{Config, Cpu, SimError};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 emulator",
    long_about = "Run an LS-8 program image: one instruction byte per line in binary, `#` starts a comment.\n\nExit codes: 0 halted, 1 unknown instruction, 2 file not found, 3 bad program or config, 4 runtime fault.\n\nExamples:\n  ls8 programs/mult.ls8\n  ls8 --trace --stats programs/stack.ls8"
)]
struct Cli {
    /// Program image to execute.
    program: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a trace line to stderr before every instruction.
    #[arg(short, long)]
    trace: bool,

    /// Print execution statistics to stderr when the run ends.
    #[arg(short, long)]
    stats: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    setup_tracing(cli.verbose);

    if let Err(e) = cmd_run(&cli) {
        eprintln!("ls8: {e}");
        process::exit(e.exit_code());
    }
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, defaulting to `warn`.
fn setup_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Loads configuration and the program, then runs the CPU to completion.
fn cmd_run(cli: &Cli) -> Result<(), SimError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.trace;
    config.general.print_stats |= cli.stats;

    tracing::debug!(program = %cli.program.display(), "loading");
    let image = loader::load_file(&cli.program)?;

    let mut cpu = Cpu::new(&config);
    cpu.load(&image)?;

    let result = cpu.run();
    if result.is_err() {
        eprintln!("ls8: fault at {:#04x}: {}", cpu.pc, cpu.current_instruction());
        if config.general.trace_instructions {
            cpu.dump_state();
        }
    }
    if config.general.print_stats {
        cpu.stats.print();
    }
    result.map_err(SimError::from)
}
