use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use log::debug;

use crate::{
    errors::{Result, RouteError},
    graph::{CityGraph, GraphEdgeOrder, NumCities, NumRoutes},
};

pub trait CityGraphReader: Sized {
    fn try_read_instance<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_instance_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl CityGraphReader for CityGraph {
    fn try_read_instance<R: BufRead>(reader: R) -> Result<Self> {
        let mut route_reader = RouteReader::try_new(reader)?;
        let mut graph = CityGraph::with_cities(route_reader.take_cities())?;

        for route in &mut route_reader {
            let (from, to) = route?;
            graph.add_route(&from, &to)?;
        }

        debug!(
            "Read {} cities and {} distinct routes ({} declared)",
            route_reader.number_of_cities(),
            graph.number_of_edges(),
            route_reader.number_of_routes()
        );
        Ok(graph)
    }

    fn try_read_instance_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_instance(buf_reader)
    }
}

/// Reads the line-oriented instance format:
///
/// ```text
/// n m
/// <n lines with one city name each, west to east>
/// <m lines with two city names each>
/// ```
///
/// The header and the city names are consumed by [`RouteReader::try_new`]; the routes are
/// produced by the iterator. Lines beyond the declared routes are ignored.
pub struct RouteReader<R> {
    lines: Lines<R>,
    number_of_cities: NumCities,
    number_of_routes: NumRoutes,
    cities: Vec<String>,
    routes_read: NumRoutes,
}

impl<R: BufRead> RouteReader<R> {
    pub fn try_new(reader: R) -> Result<Self> {
        let mut route_reader = Self {
            lines: reader.lines(),
            number_of_cities: 0,
            number_of_routes: 0,
            cities: Vec::new(),
            routes_read: 0,
        };

        (route_reader.number_of_cities, route_reader.number_of_routes) =
            route_reader.parse_header()?;
        route_reader.cities = route_reader.parse_cities()?;
        Ok(route_reader)
    }

    pub fn number_of_cities(&self) -> NumCities {
        self.number_of_cities
    }

    pub fn number_of_routes(&self) -> NumRoutes {
        self.number_of_routes
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Moves the city names out of the reader
    pub fn take_cities(&mut self) -> Vec<String> {
        std::mem::take(&mut self.cities)
    }
}

impl<R: BufRead> Iterator for RouteReader<R> {
    type Item = Result<(String, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.routes_read >= self.number_of_routes {
            return None;
        }

        self.routes_read += 1;
        Some(self.parse_route_line())
    }
}

macro_rules! raise_error_unless {
    ($cond : expr, $info : expr) => {
        if !($cond) {
            return Err(RouteError::MalformedCount($info.into()));
        }
    };
}

macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            format!("Premature end of line when parsing {}.", $name)
        );

        let parsed = next.unwrap_or_default().parse();
        raise_error_unless!(
            parsed.is_ok(),
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap_or_default()
    }};
}

impl<R: BufRead> RouteReader<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            None => Ok(None),
            Some(Err(x)) => Err(x.into()),
            Some(Ok(line)) => Ok(Some(line)),
        }
    }

    fn parse_header(&mut self) -> Result<(NumCities, NumRoutes)> {
        let line = self.next_line()?;

        raise_error_unless!(line.is_some(), "No header found");
        let line = line.unwrap_or_default();

        let mut parts = line.split_whitespace();
        let number_of_cities = parse_next_value!(parts, "Header>Number of cities");
        let number_of_routes = parse_next_value!(parts, "Header>Number of routes");

        raise_error_unless!(
            parts.next().is_none(),
            "Invalid header found; expected end of line"
        );

        Ok((number_of_cities, number_of_routes))
    }

    fn parse_cities(&mut self) -> Result<Vec<String>> {
        let mut cities = Vec::new();
        while cities.len() < self.number_of_cities as usize {
            let line = self.next_line()?;
            raise_error_unless!(
                line.is_some(),
                format!(
                    "Expected {} cities but found only {}.",
                    self.number_of_cities,
                    cities.len()
                )
            );

            let name = line.unwrap_or_default().trim().to_string();
            raise_error_unless!(
                !name.is_empty(),
                format!("Empty name for city {}.", cities.len() + 1)
            );
            cities.push(name);
        }
        Ok(cities)
    }

    fn parse_route_line(&mut self) -> Result<(String, String)> {
        let line = self.next_line()?;
        raise_error_unless!(
            line.is_some(),
            format!(
                "Expected {} routes but found only {}.",
                self.number_of_routes,
                self.routes_read - 1
            )
        );

        let line = line.unwrap_or_default();
        let mut parts = line.split_whitespace();
        let (from, to) = (parts.next(), parts.next());

        raise_error_unless!(
            from.is_some() && to.is_some() && parts.next().is_none(),
            format!("Route {} needs exactly two city names.", self.routes_read)
        );

        Ok((
            from.unwrap_or_default().to_string(),
            to.unwrap_or_default().to_string(),
        ))
    }
}
