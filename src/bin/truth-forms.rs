//! Truth Forms - Command Line Interface
//!
//! Reads a formula from a file (or interactively), then prints its truth
//! table, fictitious variables, normal forms and dual function.

use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use truth_forms::{
    input, report, AnalysisConfig, BooleanFunction, Formula, Notation, RemovalMode,
    DEFAULT_MAX_VARIABLES, MAX_SUPPORTED_VARIABLES,
};

#[derive(Parser, Debug)]
#[command(name = "truth-forms")]
#[command(about = "Truth tables and canonical normal forms of boolean formulas", long_about = None)]
#[command(version)]
struct Args {
    /// File containing the formula (prompts on stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print normal forms with ASCII operators that can be parsed back
    #[arg(long)]
    ascii: bool,

    /// Repeat fictitious-variable removal until nothing changes
    #[arg(long)]
    fixed_point: bool,

    /// Refuse formulas with more distinct variables than this
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_MAX_VARIABLES,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(0..=MAX_SUPPORTED_VARIABLES as u64)
    )]
    max_variables: usize,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(
        level(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not install logger: {}", e);
    }

    let config = AnalysisConfig {
        removal: if args.fixed_point {
            RemovalMode::FixedPoint
        } else {
            RemovalMode::Batch
        },
        notation: if args.ascii {
            Notation::Ascii
        } else {
            Notation::Unicode
        },
        max_variables: args.max_variables,
    };

    let text = match &args.input {
        Some(path) => {
            info!("reading formula from {}", path.display());
            input::read_formula_file(path)
        }
        None => input::read_formula_console(),
    };
    let text = match text {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut function = match Formula::parse(&text)
        .and_then(|formula| BooleanFunction::with_config(formula, config))
    {
        Ok(function) => function,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!(
        "analysing {} variable(s) with {} removal",
        function.table().num_variables(),
        config.removal
    );

    let result = match &args.output_file {
        Some(path) => File::create(path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            report::write_report(&mut writer, &mut function)?;
            writer.flush()
        }),
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            report::write_report(&mut writer, &mut function).and_then(|_| writer.flush())
        }
    };

    if let Err(e) = result {
        eprintln!("Error writing report: {}", e);
        process::exit(1);
    }
}
