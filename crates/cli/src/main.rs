//! MIPS cycle-accurate pipeline simulator CLI.
//!
//! This binary is a thin front-end over `mipsim-core`. It performs:
//! 1. **Batch run:** Load a program image, run to completion, print stats.
//! 2. **Step mode:** Advance one cycle per line of input for inspection.
//! 3. **Machine output:** `--json` emits the statistics report as JSON.
//!
//! Exit code 0 on normal termination, 1 on usage or load errors.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use mipsim_core::config::{Config, PredictorKind};
use mipsim_core::sim::{RunOutcome, Simulator};
use mipsim_core::sim::loader;

/// Predictor selection on the command line.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum PredType {
    /// Static not-taken.
    #[default]
    Static,
    /// One-bit bimodal table.
    #[value(name = "1bit")]
    OneBit,
    /// Two-bit bimodal table.
    #[value(name = "2bit")]
    TwoBit,
    /// Global-history gshare.
    Gshare,
    /// Two-level local history.
    Local,
    /// Gshare/local tournament hybrid.
    Tournament,
    /// Backward-taken / forward-not-taken.
    Btfn,
}

impl From<PredType> for PredictorKind {
    fn from(p: PredType) -> Self {
        match p {
            PredType::Static => Self::StaticNotTaken,
            PredType::OneBit => Self::Bimodal1Bit,
            PredType::TwoBit => Self::Bimodal2Bit,
            PredType::Gshare => Self::Gshare,
            PredType::Local => Self::LocalHistory,
            PredType::Tournament => Self::Tournament,
            PredType::Btfn => Self::Btfn,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    version,
    about = "MIPS-I cycle-accurate pipeline simulator",
    long_about = "Run a MIPS-I machine-code image (one hex word per line, `#` comments).\n\n\
        By default the program executes on the single-cycle interpreter; pass\n\
        --pipeline for the five-stage pipeline and --branch-pred to enable\n\
        dynamic branch prediction."
)]
struct Cli {
    /// Program image: one hexadecimal word per line.
    program: PathBuf,

    /// Step interactively: one cycle per line of input (`q` quits).
    #[arg(long)]
    step: bool,

    /// Execute on the five-stage pipeline instead of the single-cycle
    /// interpreter.
    #[arg(long)]
    pipeline: bool,

    /// Enable dynamic branch prediction (selects --pred-type).
    #[arg(long)]
    branch_pred: bool,

    /// Branch predictor variant used when --branch-pred is set.
    #[arg(long, value_enum, default_value = "static")]
    pred_type: PredType,

    /// Emit per-stage trace lines to stderr.
    #[arg(long)]
    trace: bool,

    /// Safety cap on simulated cycles.
    #[arg(long, default_value_t = mipsim_core::config::DEFAULT_MAX_CYCLES)]
    max_cycles: u64,

    /// Print the statistics report as JSON instead of the text breakdown.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::default();
    config.core.pipeline_enabled = cli.pipeline;
    config.core.trace = cli.trace;
    if cli.branch_pred {
        config.predictor.kind = cli.pred_type.into();
    }

    let words = match loader::load_image_file(&cli.program) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("mipsim: {}: {e}", cli.program.display());
            process::exit(1);
        }
    };

    let mut sim = Simulator::new(config);
    if let Err(e) = sim.load_words(&words) {
        eprintln!("mipsim: {}: {e}", cli.program.display());
        process::exit(1);
    }

    if cli.step {
        run_step_mode(&mut sim, cli.max_cycles);
    } else {
        let result = sim.run(cli.max_cycles);
        if result.outcome == RunOutcome::CycleLimit {
            eprintln!(
                "mipsim: cycle cap of {} reached at pc={:#010x}",
                cli.max_cycles, result.pc
            );
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&sim.stats()) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("mipsim: failed to serialize stats: {e}");
                process::exit(1);
            }
        }
    } else {
        sim.print_stats();
    }
}

/// One cycle per line of input; `q` or EOF stops.
fn run_step_mode(sim: &mut Simulator, max_cycles: u64) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let word = sim.get_memory_word(sim.pc());
        print!(
            "[cycle {:>6}] pc={:#010x}  {:<28} (enter: step, q: quit) ",
            sim.stats().cycles,
            sim.pc(),
            mipsim_core::disassemble(word)
        );
        let _ = io::stdout().flush();

        match lines.next() {
            Some(Ok(line)) if line.trim() == "q" => break,
            Some(Ok(_)) => {}
            _ => break,
        }

        let step = sim.step();
        if step.halted {
            println!("halted after {} cycles", step.cycles);
            break;
        }
        if step.cycles >= max_cycles {
            println!("cycle cap of {max_cycles} reached");
            break;
        }
    }
}
