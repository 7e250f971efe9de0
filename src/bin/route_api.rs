use std::{fs::File, io::BufReader, path::PathBuf};

use log::{LevelFilter, info};
use structopt::StructOpt;
use twinroute::{
    api::{InProcessRunner, RouteRequest, SubprocessRunner, process_request},
    log::build_logger_for_verbosity,
    solver::Strategy,
};

/// Answers one JSON request `{"selectedCities": [...], "selectedRoutes": [[a, b], ...]}`
/// with `{"result": [...]}`
#[derive(StructOpt)]
struct Opts {
    /// Request file; reads stdin if omitted
    #[structopt(short, long)]
    input: Option<PathBuf>,

    /// Solver executable to run as a child process; solves in-process if omitted
    #[structopt(long)]
    solver: Option<PathBuf>,

    #[structopt(short, long, default_value = "dp")]
    strategy: Strategy,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let request: RouteRequest = match &opts.input {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => serde_json::from_reader(std::io::stdin().lock())?,
    };
    info!(
        "Request with {} cities and {} routes",
        request.selected_cities.len(),
        request.selected_routes.len()
    );

    let response = match &opts.solver {
        Some(program) => process_request(
            &SubprocessRunner::new(program).arg(opts.strategy.to_string()),
            &request,
        )?,
        None => process_request(&InProcessRunner::new(opts.strategy), &request)?,
    };

    serde_json::to_writer(std::io::stdout().lock(), &response)?;
    println!();
    Ok(())
}
