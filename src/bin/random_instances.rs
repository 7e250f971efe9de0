use std::path::PathBuf;

use log::{LevelFilter, info};
use rand::SeedableRng;
use structopt::StructOpt;
use twinroute::{log::build_logger_for_verbosity, prelude::*};

#[derive(Debug, StructOpt)]
struct Opt {
    /// Number of cities
    #[structopt(short, default_value = "20")]
    n: NumCities,

    /// Probability of each direct route
    #[structopt(short, default_value = "0.2")]
    p: f64,

    #[structopt(short, long, default_value = "1")]
    seed: u64,

    /// Output file; writes stdout if omitted
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opt.verbose);
    anyhow::ensure!((0.0..=1.0).contains(&opt.p), "p must be within [0, 1]");

    let mut rng = rand_pcg::Pcg64::seed_from_u64(opt.seed);
    let graph = CityGraph::random_gnp(&mut rng, opt.n, opt.p);
    info!(
        "Generated {} cities with {} routes",
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    match &opt.output {
        Some(path) => graph.try_write_instance_file(path)?,
        None => graph.try_write_instance(std::io::stdout().lock())?,
    }

    Ok(())
}
