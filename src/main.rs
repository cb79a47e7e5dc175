//! Builds minimum spanning trees over two orderings of the same points and reports whether
//! they are equivalent.

use anyhow::{bail, Context, Result};
use clap::Parser;
use mst_equivalence::{
    parse_csv_points, parse_whitespace_points, plot_trees, Comparison, DistanceMetric,
    MutualReachabilityMst, SpanningTreeBuilder, TreeHyperParams,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

const BAD_MIN_CLUSTER: &str = "did you pick a bad value for minimum cluster size?";
const PLOT_HINT: &str = "plotting is weird in dimensions higher than 2";

/// Compares two minimum spanning trees over the same points.
///
/// If no .csv file is given, the program will prompt you for data.
/// If no k value is given, the program will use 5 as the minimum cluster size.
#[derive(Parser)]
#[command(name = "mst-equivalence")]
#[command(author, version, about, long_about)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Path to a .csv file to read data from (the first line is a header)
    #[arg(short, long)]
    filename: Option<PathBuf>,

    /// Path to a .csv file with the second ordering; without it the first file is shuffled
    #[arg(short, long, requires = "filename")]
    second_filename: Option<PathBuf>,

    /// Minimum cluster size, used as the neighbourhood size for core distances
    #[arg(short = 'k', long = "set-min-cluster", default_value_t = 5)]
    min_cluster_size: usize,

    /// Distance metric (euclidean, manhattan, chebyshev)
    #[arg(short, long, default_value = "euclidean")]
    metric: DistanceMetric,

    /// Seed for the shuffle that produces the second ordering
    #[arg(long)]
    seed: Option<u64>,

    /// Accept edge weights that differ by at most this much
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Draw both trees side by side into this .svg file (two dimensional data only)
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let (data1, data2) = get_data(&cli, io::stdin().lock(), &mut io::stdout())
        .context("error while trying to get data")?;

    let hp = TreeHyperParams::builder()
        .min_samples(cli.min_cluster_size)
        .dist_metric(cli.metric)
        .build();
    let builder = MutualReachabilityMst::new(hp);
    let build_error = |which: &str| {
        format!("error while building the {which} spanning tree, {BAD_MIN_CLUSTER}")
    };
    let tree1 = builder
        .build(&data1)
        .with_context(|| build_error("first"))?;
    let tree2 = builder
        .build(&data2)
        .with_context(|| build_error("second"))?;
    info!(
        total_weight_1 = tree1.total_weight(),
        total_weight_2 = tree2.total_weight(),
        "built both trees"
    );

    let mut comparison = Comparison::new(&tree1, &tree2);
    if let Some(tolerance) = cli.tolerance {
        comparison = comparison.with_tolerance(tolerance);
    }
    let stdout = io::stdout();
    comparison
        .write_report(&mut stdout.lock(), cli.verbose)
        .context("failed to write report")?;

    if let Some(path) = &cli.plot {
        plot_trees(&tree1, &tree2, path).with_context(|| {
            format!("error while trying to plot to \"{}\", {PLOT_HINT}", path.display())
        })?;
    }
    Ok(())
}

/// The two orderings to compare. Points come from `cli.filename`, or from `input` when no
/// file is given; prompts go to `out`.
fn get_data<R: BufRead, W: Write>(
    cli: &Cli,
    input: R,
    out: &mut W,
) -> Result<(Vec<Vec<f64>>, Vec<Vec<f64>>)> {
    let Some(path) = &cli.filename else {
        let data = read_points_interactively(input, out)?;
        let shuffled = shuffled(&data, cli.seed);
        return Ok((data, shuffled));
    };
    let data1 = read_csv(path)?;
    let data2 = match &cli.second_filename {
        Some(second) => read_csv(second)?,
        None => shuffled(&data1, cli.seed),
    };
    Ok((data1, data2))
}

fn read_csv(path: &Path) -> Result<Vec<Vec<f64>>> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!(
            "trouble getting data from \"{}\"... does the file exist?",
            path.display()
        )
    })?;
    parse_csv_points(&contents, true)
        .with_context(|| format!("\"{}\" is not a valid point file", path.display()))
}

/// Asks for a point count, then reads exactly that many lines of whitespace separated
/// coordinates. Anything after the last point is left unread.
fn read_points_interactively<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
) -> Result<Vec<Vec<f64>>> {
    let mut lines = input.lines();

    write!(out, "Enter the number of points in your data: ")?;
    out.flush()?;
    let Some(line) = lines.next() else {
        bail!("no point count was entered");
    };
    let num_points: usize = line?
        .trim()
        .parse()
        .context("the number of points must be a non-negative integer")?;

    writeln!(
        out,
        "Enter {num_points} whitespace-separated points, one per line: "
    )?;
    out.flush()?;
    let mut text = String::new();
    for n in 0..num_points {
        let Some(line) = lines.next() else {
            bail!("expected {num_points} points, but input ended after {n}");
        };
        let line = line?;
        if line.trim().is_empty() {
            bail!("point {} is blank... did you enter data in a bad shape?", n + 1);
        }
        text.push_str(&line);
        text.push('\n');
    }
    parse_whitespace_points(&text).context("did you enter data in a bad shape?")
}

fn shuffled(data: &[Vec<f64>], seed: Option<u64>) -> Vec<Vec<f64>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut copy = data.to_vec();
    copy.shuffle(&mut rng);
    copy
}
