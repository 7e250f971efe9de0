use super::graph::*;
use fxhash::FxHashSet;
use itertools::Itertools as _;
use rand::Rng;

pub const CANADA_CITIES: [&str; 8] = [
    "Vancouver",
    "Yellowknife",
    "Edmonton",
    "Calgary",
    "Winnipeg",
    "Toronto",
    "Montreal",
    "Halifax",
];

pub const CANADA_ROUTES: [(&str, &str); 9] = [
    ("Vancouver", "Edmonton"),
    ("Vancouver", "Calgary"),
    ("Calgary", "Winnipeg"),
    ("Winnipeg", "Toronto"),
    ("Toronto", "Halifax"),
    ("Montreal", "Halifax"),
    ("Edmonton", "Montreal"),
    ("Edmonton", "Yellowknife"),
    ("Edmonton", "Calgary"),
];

pub fn canada_graph() -> CityGraph {
    CityGraph::try_new(CANADA_CITIES, CANADA_ROUTES).unwrap()
}

/// Endless stream of random instances with `n` cities; the density cycles so that the
/// stream contains sparse instances without any twin route as well as dense ones.
pub fn generate_random_instance_stream(
    rng: &mut impl Rng,
    n: NumCities,
) -> impl Iterator<Item = CityGraph> + '_ {
    (0..).map(move |i| {
        let p = [0.2, 0.35, 0.5, 0.8][i % 4];
        let p = if n > 12 { p * 6.0 / n as f64 } else { p };
        let mut graph = CityGraph::random_gnp(rng, n, p);

        // make the degenerate instance show up regularly
        if i % 7 == 0 && n >= 2 {
            graph.try_add_edge(Edge(1, n));
        }

        graph
    })
}

/// All west-to-east paths from the westmost to the eastmost city
fn increasing_paths(graph: &CityGraph) -> Vec<Vec<Node>> {
    let n = graph.eastmost();
    let mut paths = Vec::new();
    let mut stack = vec![vec![1]];

    while let Some(path) = stack.pop() {
        let last = *path.last().unwrap();
        if last == n {
            paths.push(path);
            continue;
        }

        for v in (last + 1)..=n {
            if graph.has_edge(last, v) {
                let mut next = path.clone();
                next.push(v);
                stack.push(next);
            }
        }
    }

    paths
}

/// Maximum number of distinct cities covered by two paths with disjoint interiors, by
/// enumerating all pairs of paths. Only feasible for small instances.
pub fn brute_force_coverage(graph: &CityGraph) -> Option<NumCities> {
    let n = graph.number_of_nodes();
    if n < 2 {
        return None;
    }

    let paths = increasing_paths(graph);
    let direct = vec![1, n];

    paths
        .iter()
        .cartesian_product(paths.iter())
        .filter(|&(a, b)| a != b || *a == direct)
        .filter(|&(a, b)| {
            let interior: FxHashSet<_> = a[1..a.len() - 1].iter().collect();
            b[1..b.len() - 1].iter().all(|u| !interior.contains(u))
        })
        .map(|(a, b)| a.iter().chain(b.iter()).unique().count() as NumCities)
        .max()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn brute_force_canada() {
        assert_eq!(brute_force_coverage(&canada_graph()), Some(7));
    }

    #[test]
    fn brute_force_boundaries() {
        let direct = CityGraph::try_new(["W", "E"], [("W", "E")]).unwrap();
        assert_eq!(brute_force_coverage(&direct), Some(2));

        let chain = CityGraph::try_new(["W", "M", "E"], [("W", "M"), ("M", "E")]).unwrap();
        assert_eq!(brute_force_coverage(&chain), None);
    }
}
