use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{engine::RouteResult, graph::*};

pub const NO_SOLUTION: &str = "No Solution!";

/// Writes the result protocol: the number of distinct cities followed by the names of the
/// closed tour (one per line), or a single `No Solution!` line.
pub trait RouteWriter {
    fn try_write_route<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;

    fn try_write_route_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_route(writer)
    }
}

impl RouteWriter for RouteResult {
    fn try_write_route<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        for line in self.to_lines() {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

/// Writes a [`CityGraph`] in the instance format read by [`super::CityGraphReader`]
pub trait InstanceWriter {
    fn try_write_instance<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;

    fn try_write_instance_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_instance(writer)
    }
}

impl InstanceWriter for CityGraph {
    fn try_write_instance<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(
            writer,
            "{} {}",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;

        for name in self.names() {
            writeln!(writer, "{name}")?;
        }

        for &Edge(u, v) in self.edges() {
            let (Some(from), Some(to)) = (self.name_of(u), self.name_of(v)) else {
                continue;
            };
            writeln!(writer, "{from} {to}")?;
        }

        writer.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{io::CityGraphReader, testing::canada_graph};

    use itertools::Itertools;
    use rand::SeedableRng;
    use regex::Regex;

    fn render(result: &RouteResult) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        result.try_write_route(&mut buffer).expect("Failed to write");
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn write_route() {
        let result = RouteResult::Route(
            ["W", "E", "W"].iter().map(|s| s.to_string()).collect(),
        );
        let output = render(&result);
        assert!(Regex::new(r"^2\nW\nE\nW\n$").unwrap().is_match(&output), "{output}");
    }

    #[test]
    fn write_no_solution() {
        assert_eq!(render(&RouteResult::NoSolution), "No Solution!\n");
    }

    #[test]
    fn write_instance() {
        let mut buffer: Vec<u8> = Vec::new();
        canada_graph().try_write_instance(&mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("8 9\nVancouver\nYellowknife\n"));
        assert!(
            Regex::new(r"(?m)^Yellowknife Edmonton$")
                .unwrap()
                .is_match(&output),
            "{output}"
        );
    }

    #[test]
    fn transcribe() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(1234);
        for n in 0..30 {
            let org = CityGraph::random_gnp(&mut rng, n, 0.3);

            let mut buffer: Vec<u8> = Vec::new();
            org.try_write_instance(&mut buffer).expect("Failed to write");
            let read = CityGraph::try_read_instance(buffer.as_slice()).expect("Failed to read");

            assert_eq!(org.names(), read.names());
            assert_eq!(
                org.edges().iter().sorted().collect_vec(),
                read.edges().iter().sorted().collect_vec()
            );
        }
    }
}
