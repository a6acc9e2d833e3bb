//! LS-8 command-line runner.
//!
//! Loads an `.ls8` program file and executes it, printing `PRN` output to stdout.
//! Diagnostics go to stderr through `tracing`.
//!
//! Usage: `ls8 <program.ls8> [--strict] [--max-steps N] [--disassemble] [--trace]`

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use ls8::disassembler::{disassemble, format_listing};
use ls8::loader::{self, MalformedLines};
use ls8::{Console, Ram, RunState, CPU};

#[derive(Parser, Debug)]
#[command(name = "ls8")]
#[command(about = "Run an LS-8 program")]
struct Args {
    /// Path to the program file (one binary byte per line)
    program: PathBuf,

    /// Fail on malformed program lines instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Give up after this many instructions
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print a disassembly of the program instead of running it
    #[arg(long)]
    disassemble: bool,

    /// Log every executed instruction
    #[arg(long)]
    trace: bool,
}

/// Logs go to stderr so stdout carries only program output.
///
/// `RUST_LOG` overrides the default filter.
fn init_logging(trace: bool) {
    let default = if trace { "warn,ls8=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.trace);

    let malformed = if args.strict {
        MalformedLines::Reject
    } else {
        MalformedLines::Skip
    };

    let program = match loader::load_file(&args.program, malformed) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    if args.disassemble {
        print!("{}", format_listing(&disassemble(&program)));
        return;
    }

    let mut cpu = CPU::new(Ram::new());
    if let Err(e) = cpu.load_program(&program) {
        error!("{}", e);
        process::exit(1);
    }

    let mut console = Console::stdout();
    let result = match args.max_steps {
        Some(budget) => cpu.run_for_steps(budget, &mut console).map(|_| ()),
        None => cpu.run(&mut console),
    };

    if let Err(e) = result {
        error!("{}", e);
        error!("{}", cpu.trace_line());
        process::exit(1);
    }

    if cpu.state() != RunState::Halted {
        error!("program did not halt within {} instructions", cpu.steps());
        process::exit(1);
    }

    info!(steps = cpu.steps(), "halted");
}
