// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use euler_search::digits::{max_window_product, puzzle_digits, read_digits};
use euler_search::triples::{
    brute_force_triple_with_sum, generate_primitive_triples, triple_with_target_sum,
};
use euler_search::{problems, EngineBuilder, Problem, SolveContext, SolverConfig};

#[derive(Parser)]
#[command(
    name = "euler",
    version,
    about = "Project Euler 2, 8, 9 and 12: triple trees, digit windows, divisor counts"
)]
struct Cli {
    /// TOML config file (default: $EULER_CONFIG, then ./euler.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace); RUST_LOG also applies
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve problems (all of them when none are named)
    Solve {
        /// Problem numbers
        problems: Vec<u32>,

        /// Print work counters after the answers
        #[arg(long)]
        stats: bool,
    },

    /// List the available problems
    List,

    /// Print every primitive Pythagorean triple with a + b + c <= MAX_SUM
    Triples {
        #[arg(long)]
        max_sum: u64,

        /// Sort the output (traversal order otherwise)
        #[arg(long)]
        sorted: bool,
    },

    /// Find a Pythagorean triple with the given perimeter
    TripleSum {
        sum: u64,

        /// Use the O(n²) search instead of the primitive tree
        #[arg(long)]
        brute_force: bool,
    },

    /// Largest product of adjacent digits
    Window {
        /// Window size (default: from config)
        #[arg(short, long)]
        size: Option<usize>,

        /// Digit file (default: from config, else the bundled number)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}

fn cmd_solve(config: SolverConfig, numbers: Vec<u32>, stats: bool) -> Result<()> {
    let selected = if numbers.is_empty() {
        problems::catalog()
    } else {
        numbers
            .iter()
            .map(|&n| {
                problems::by_number(n).with_context(|| {
                    format!(
                        "unknown problem {} (available: {:?})",
                        n,
                        problems::PROBLEM_NUMBERS
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?
    };

    let mut ctx = SolveContext::with_config(config);
    let mut engine = EngineBuilder::new().extend(selected).build();
    info!(problems = engine.len(), "solving");
    let reports = engine.run(&mut ctx);

    for report in &reports {
        println!("{}", report);
    }
    if stats {
        for (counter, value) in ctx.statistics.iter() {
            println!("{:>28}: {}", counter.as_ref(), value);
        }
    }

    let failed = reports.iter().filter(|r| r.is_error()).count();
    if failed > 0 {
        bail!("{} problem(s) failed", failed);
    }
    Ok(())
}

fn cmd_list() {
    for problem in problems::catalog() {
        println!("{:>3}  {}", problem.number(), problem.name());
    }
}

fn cmd_triples(max_sum: u64, sorted: bool) {
    let mut triples = generate_primitive_triples(max_sum);
    if sorted {
        let mut all: Vec<_> = triples.by_ref().collect();
        all.sort();
        for triple in all {
            println!("{}", triple);
        }
    } else {
        for triple in triples.by_ref() {
            println!("{}", triple);
        }
    }
    info!(
        produced = triples.produced(),
        pruned = triples.pruned(),
        "traversal done"
    );
}

fn cmd_triple_sum(sum: u64, brute_force: bool) {
    let found = if brute_force {
        brute_force_triple_with_sum(sum)
    } else {
        triple_with_target_sum(sum)
    };
    match found {
        Some(triple) => match triple.product() {
            Some(product) => println!("{} product {}", triple, product),
            None => println!("{}", triple),
        },
        None => println!("no triple with perimeter {}", sum),
    }
}

fn cmd_window(config: SolverConfig, size: Option<usize>, file: Option<PathBuf>) -> Result<()> {
    let size = size.unwrap_or(config.window.size);
    let digits = match file.or(config.window.digits_file) {
        Some(path) => {
            read_digits(&path).with_context(|| format!("loading digits from {}", path.display()))?
        }
        None => puzzle_digits()?,
    };
    let best = max_window_product(digits, size)?;
    println!("{}", best);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SolverConfig::load(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Commands::Solve { problems, stats } => cmd_solve(config, problems, stats),
        Commands::List => {
            cmd_list();
            Ok(())
        }
        Commands::Triples { max_sum, sorted } => {
            cmd_triples(max_sum, sorted);
            Ok(())
        }
        Commands::TripleSum { sum, brute_force } => {
            cmd_triple_sum(sum, brute_force);
            Ok(())
        }
        Commands::Window { size, file } => cmd_window(config, size, file),
    }
}
