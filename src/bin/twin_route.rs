use std::{io::Write, path::PathBuf};

use log::{LevelFilter, info};
use structopt::StructOpt;
use twinroute::{log::build_logger_for_verbosity, prelude::*};

#[derive(StructOpt, Clone, Copy, Default)]
pub enum Commands {
    /// Memoized dynamic program over pairs of traveller positions
    #[default]
    Dp,
    /// Node-split maximum-cost flow
    Flow,
}

impl From<Commands> for Strategy {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Dp => Strategy::Dp,
            Commands::Flow => Strategy::Flow,
        }
    }
}

#[derive(Default, StructOpt)]
#[structopt(about = "Computes the maximum-coverage twin route of a city network")]
struct Opts {
    /// Instance file; reads stdin if omitted
    #[structopt(short, long)]
    instance: Option<PathBuf>,

    /// Output file; writes stdout if omitted
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,

    #[structopt(subcommand)]
    cmd: Option<Commands>,
}

fn load_graph(path: &Option<PathBuf>) -> twinroute::errors::Result<CityGraph> {
    if let Some(path) = path {
        CityGraph::try_read_instance_file(path)
    } else {
        CityGraph::try_read_instance(std::io::stdin().lock())
    }
}

fn write_result(result: &RouteResult, path: &Option<PathBuf>) -> anyhow::Result<()> {
    if let Some(path) = path {
        result.try_write_route_file(path)?;
    } else {
        result.try_write_route(std::io::stdout().lock())?;
    }

    Ok(())
}

/// Invalid input is reported in place of the result, as a single human-readable line
fn write_error(error: &RouteError, path: &Option<PathBuf>) -> anyhow::Result<()> {
    if let Some(path) = path {
        std::fs::write(path, format!("{error}\n"))?;
    } else {
        writeln!(std::io::stdout().lock(), "{error}")?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let graph = match load_graph(&opts.instance) {
        Ok(graph) => graph,
        Err(error) => {
            write_error(&error, &opts.output)?;
            return Err(error.into());
        }
    };

    let engine = Engine::new(opts.cmd.unwrap_or_default().into());
    info!("Loaded {} cities", graph.number_of_nodes());

    let result = engine.solve_graph(&graph);
    write_result(&result, &opts.output)?;

    Ok(())
}
