//! Approximates extrema of the demonstration functions with successive
//! parabolic interpolation and prints every iterate as a table.
//!
//! Run:
//! ```bash
//! $ spi -h
//! ```
//! to see which functions and starting points can be selected.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use serde::Deserialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use spi::extremum::config::SpiCfg;
use spi::extremum::report::Table;
use spi::extremum::spi::successive_parabolic;
use spi::samples::SampleFunction;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Function to approximate (e.g. parabola_sine, weierstrass)
    #[arg(short, long)]
    function: Option<SampleFunction>,

    /// Initial abscissas, in any order. Defaults to the function's presets
    #[arg(
        short,
        long,
        num_args = 3,
        value_names = ["A", "B", "C"],
        allow_hyphen_values = true,
        requires = "function"
    )]
    abscissas: Option<Vec<f64>>,

    /// Iteration cap
    #[arg(short, long)]
    max_iter: Option<usize>,

    /// Run every function from every preset
    #[arg(long, conflicts_with_all = ["function", "runs"])]
    all: bool,

    /// TOML file with a list of `[[run]]` tables
    #[arg(short, long, conflicts_with = "function")]
    runs: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// One approximation to perform.
#[derive(Debug, Clone, Copy, Deserialize)]
struct Run {
    function: SampleFunction,
    abscissas: [f64; 3],
    max_iter: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RunFile {
    #[serde(rename = "run", default)]
    runs: Vec<Run>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let runs = collect_runs(&args)?;
    info!("{} run(s) scheduled", runs.len());

    let mut stdout = io::stdout().lock();
    let mut heading = None;
    for run in runs {
        if heading != Some(run.function) {
            writeln!(stdout, "{}", run.function.label())?;
            heading = Some(run.function);
        }
        execute(&mut stdout, run)?;
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("could not install logger")?;
    Ok(())
}

fn collect_runs(args: &Args) -> Result<Vec<Run>> {
    if let Some(path) = &args.runs {
        let mut runs = read_runs(path)?;
        if let Some(max_iter) = args.max_iter {
            for run in &mut runs {
                run.max_iter.get_or_insert(max_iter);
            }
        }
        return Ok(runs);
    }

    let functions: &[SampleFunction] = if args.all {
        &SampleFunction::ALL
    } else {
        match &args.function {
            Some(function) => std::slice::from_ref(function),
            None => &[SampleFunction::ParabolaSine],
        }
    };

    let mut runs = Vec::new();
    for &function in functions {
        match args.abscissas.as_deref() {
            Some(&[a, b, c]) => runs.push(Run {
                function,
                abscissas: [a, b, c],
                max_iter: args.max_iter,
            }),
            Some(other) => anyhow::bail!("expected 3 abscissas, got {}", other.len()),
            None => runs.extend(function.presets().iter().map(|&abscissas| Run {
                function,
                abscissas,
                max_iter: args.max_iter,
            })),
        }
    }
    Ok(runs)
}

fn read_runs(path: &Path) -> Result<Vec<Run>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let file: RunFile = toml::from_str(&text)
        .with_context(|| format!("could not parse {}", path.display()))?;
    Ok(file.runs)
}

fn execute(out: &mut impl Write, run: Run) -> Result<()> {
    let mut cfg = SpiCfg::new();
    if let Some(max_iter) = run.max_iter {
        cfg = cfg.set_max_iter(max_iter)?;
    }

    let [a, b, c] = run.abscissas;
    let function = run.function;
    let mut table = Table::new();
    let report = successive_parabolic(|x| function.eval(x), a, b, c, cfg, &mut table)?;

    write!(out, "{}", table.finish())?;
    writeln!(
        out,
        "stopped on {} after {} iterations, estimate x = {:.9}, f(x) = {:.9}\n",
        report.termination_reason, report.iterations, report.estimate, report.f_estimate
    )?;
    Ok(())
}
