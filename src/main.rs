use clap::Parser;
use obstacle_tour::{
    Result,
    fs::{InputFormat, load_points, random_points, read_points},
    grid::{Coord, Point},
    logging::init_tracing,
    search::{SearchConfig, Tour, TourOutcome},
    statistics::Stats,
};
use serde::Serialize;
use std::{path::PathBuf, process::ExitCode};

/// Shortest Manhattan tour around point obstacles
#[derive(Parser, Debug)]
#[command(name = "obstacle-tour")]
#[command(about = "Sums obstacle-avoiding Manhattan paths around a cyclic sequence of grid points", long_about = None)]
struct Args {
    /// Path to the tour description (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Format of the tour description
    #[arg(short, long, value_enum, default_value_t = InputFormat::Text)]
    format: InputFormat,

    /// Path to a JSON search config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stall cutoff per leg (defaults to N squared)
    #[arg(long)]
    cutoff: Option<usize>,

    /// Print a JSON report instead of the bare answer
    #[arg(long)]
    report: bool,

    /// Print search counters to stderr
    #[arg(long)]
    stats: bool,

    /// Compute exact leg lengths on the visibility graph instead of running
    /// the heuristic search
    #[arg(long)]
    exact: bool,

    /// Generate a random tour of this many points instead of reading one
    #[arg(long, conflicts_with = "input")]
    random: Option<usize>,

    /// Seed of the random tour
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Random points have coordinates in -span..=span
    #[arg(long, default_value_t = 50)]
    span: Coord,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    answer: i64,
    exact: bool,
    points: &'a [Point],
    outcome: &'a TourOutcome,
    stats: &'a Stats,
}

fn read_tour(args: &Args, config: &SearchConfig) -> Result<Vec<Point>> {
    if let Some(count) = args.random {
        return Ok(random_points(count, args.span, args.seed));
    }
    match &args.input {
        Some(path) => load_points(path, args.format, config.max_points),
        None => read_points(std::io::stdin().lock(), args.format, config.max_points),
    }
}

fn run(args: Args) -> Result<()> {
    init_tracing(args.verbose)?;

    let mut config = match &args.config {
        Some(path) => SearchConfig::load_json(path)?,
        None => SearchConfig::default(),
    };
    if args.cutoff.is_some() {
        config.stall_cutoff = args.cutoff;
    }

    let points = read_tour(&args, &config)?;
    let tour = Tour::new(points, config)?;

    let mut stats = Stats::new();
    let outcome = if args.exact {
        tour.solve_exact(&mut stats)
    } else {
        tour.solve(&mut stats)
    };

    if args.report {
        let report = Report {
            answer: outcome.answer(),
            exact: args.exact,
            points: tour.points(),
            outcome: &outcome,
            stats: &stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", outcome.answer());
    }

    if args.stats {
        eprintln!("{stats}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
