//! vcpu8 command-line runner.
//!
//! This binary loads text programs into the virtual CPU. It performs:
//! 1. **Run:** Load a program, execute it until `HLT`, print `PRN` output to stdout.
//! 2. **Disassemble:** Print a listing of a program without running it.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vcpu8_core::Config;
use vcpu8_core::core::Cpu;
use vcpu8_core::isa::disasm;
use vcpu8_core::sim::loader;
use vcpu8_core::soc::Console;

#[derive(Parser, Debug)]
#[command(
    name = "vcpu8",
    author,
    version,
    about = "8-bit virtual CPU",
    long_about = "Run or disassemble programs for the 8-bit virtual CPU.\n\nPrograms are text files with one 8-bit binary literal per line; `#` starts a comment.\n\nExamples:\n  vcpu8 run -f programs/mult.ls8\n  vcpu8 run -f programs/call.ls8 --trace --stats\n  vcpu8 disasm -f programs/mult.ls8"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a program and run it until HLT.
    Run {
        /// Program source to execute.
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a TRACE line to stderr before every instruction.
        #[arg(long)]
        trace: bool,

        /// Dump registers when the run ends.
        #[arg(long)]
        dump: bool,

        /// Print run statistics when the run ends.
        #[arg(long)]
        stats: bool,
    },

    /// Print a disassembly listing of a program.
    Disasm {
        /// Program source to list.
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            file,
            config,
            trace,
            dump,
            stats,
        } => cmd_run(&file, config.as_deref(), trace, dump, stats),
        Commands::Disasm { file } => cmd_disasm(&file),
    }
}

/// Runs a program: loads config and source, then executes until `HLT` or error.
///
/// CLI switches can only turn options on; the config file supplies the rest.
fn cmd_run(file: &Path, config: Option<&Path>, trace: bool, dump: bool, stats: bool) -> ExitCode {
    let mut config = match config.map(Config::from_json_file).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("[!] {e}");
            return ExitCode::FAILURE;
        }
    };
    config.general.trace_instructions |= trace;
    config.general.dump_on_exit |= dump;
    config.general.print_stats |= stats;

    let mut cpu = Cpu::with_config(&config, Console);
    if let Err(e) = cpu.load_file(file) {
        eprintln!("[!] LOAD ERROR: {e}");
        return ExitCode::FAILURE;
    }

    let result = cpu.run();
    if let Err(ref e) = result {
        eprintln!("\n[!] FATAL: {e}");
    }
    if config.general.dump_on_exit || result.is_err() {
        cpu.dump_state();
    }
    if config.general.print_stats {
        cpu.stats.print();
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Prints the disassembly listing of a program source.
fn cmd_disasm(file: &Path) -> ExitCode {
    let program = loader::read_program_file(file).and_then(|source| loader::parse_program(&source));
    match program {
        Ok(bytes) => {
            for line in disasm::disassemble_program(&bytes) {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[!] LOAD ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
