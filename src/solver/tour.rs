use itertools::Itertools;

use crate::{errors::TourViolation, graph::*};

/// A closed twin route by city index: out west-to-east on one leg, back on the other.
/// The first and last stop are the westmost city.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    coverage: NumCities,
    stops: Vec<Node>,
}

impl Tour {
    pub fn new(coverage: NumCities, stops: Vec<Node>) -> Self {
        Self { coverage, stops }
    }

    /// Assembles the tour from the cities visited by each traveller: the outbound leg in
    /// increasing order followed by the return leg in decreasing order.
    pub fn from_legs(
        coverage: NumCities,
        start: Node,
        outbound: impl IntoIterator<Item = Node>,
        inbound: impl IntoIterator<Item = Node>,
    ) -> Self {
        let outbound = outbound.into_iter().filter(|&u| u > start).sorted().dedup();
        let inbound = inbound
            .into_iter()
            .filter(|&u| u > start)
            .sorted()
            .rev()
            .dedup();

        let mut stops = vec![start];
        stops.extend(outbound);
        let peak = stops.last().copied();
        stops.extend(inbound.filter(|&u| Some(u) != peak));
        stops.push(start);

        Self::new(coverage, stops)
    }

    /// Number of distinct cities on the tour
    pub fn coverage(&self) -> NumCities {
        self.coverage
    }

    pub fn stops(&self) -> &[Node] {
        &self.stops
    }

    /// Splits the tour at its eastmost stop; both legs contain it
    pub fn legs(&self) -> (&[Node], &[Node]) {
        let peak = self
            .stops
            .iter()
            .position_max()
            .unwrap_or_default();
        (&self.stops[..=peak], &self.stops[peak..])
    }

    pub fn names(&self, graph: &CityGraph) -> Vec<String> {
        self.stops
            .iter()
            .filter_map(|&u| graph.name_of(u))
            .map(str::to_string)
            .collect()
    }

    /// Verifies that the tour is a valid twin route of `graph`
    pub fn check(&self, graph: &CityGraph) -> Result<(), TourViolation> {
        let len = self.stops.len();
        if len < 3 {
            return Err(TourViolation::TooShort(len));
        }

        if self.stops[0] != graph.westmost() || self.stops[len - 1] != graph.westmost() {
            return Err(TourViolation::NotClosed);
        }

        if let Some((&u, &v)) = self
            .stops
            .iter()
            .tuple_windows()
            .find(|&(&u, &v)| !graph.has_edge(u, v))
        {
            return Err(TourViolation::NotAdjacent(u, v));
        }

        if let Some(&u) = self.stops[..len - 1].iter().duplicates().next() {
            return Err(TourViolation::Revisited(u));
        }

        let (outbound, inbound) = self.legs();
        let monotone = outbound.iter().tuple_windows().all(|(u, v)| u < v)
            && inbound.iter().tuple_windows().all(|(u, v)| u > v)
            && outbound.last() == Some(&graph.eastmost());
        if !monotone {
            return Err(TourViolation::NotMonotone);
        }

        if self.coverage as usize != len - 1 {
            return Err(TourViolation::CoverageMismatch {
                stops: len - 1,
                reported: self.coverage as usize,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn diamond() -> CityGraph {
        CityGraph::try_new(
            ["A", "B", "C", "D"],
            [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        )
        .unwrap()
    }

    #[test]
    fn assemble_from_legs() {
        let tour = Tour::from_legs(4, 1, [0, 1, 2, 2, 4], [4, 3, 1, 3]);
        assert_eq!(tour.stops(), &[1, 2, 4, 3, 1]);
        assert_eq!(tour.legs(), (&[1, 2, 4][..], &[4, 3, 1][..]));
        assert!(tour.check(&diamond()).is_ok());
        assert_eq!(tour.names(&diamond()), vec!["A", "B", "D", "C", "A"]);
    }

    #[test]
    fn degenerate_legs() {
        let graph = CityGraph::try_new(["A", "B"], [("A", "B")]).unwrap();
        let tour = Tour::from_legs(2, 1, [2], [2, 1, 0]);
        assert_eq!(tour.stops(), &[1, 2, 1]);
        assert!(tour.check(&graph).is_ok());
    }

    #[test]
    fn violations() {
        let graph = diamond();
        assert_eq!(
            Tour::new(1, vec![1, 1]).check(&graph),
            Err(TourViolation::TooShort(2))
        );
        assert_eq!(
            Tour::new(3, vec![2, 4, 3, 2]).check(&graph),
            Err(TourViolation::NotClosed)
        );
        assert_eq!(
            Tour::new(3, vec![1, 2, 3, 1]).check(&graph),
            Err(TourViolation::NotAdjacent(2, 3))
        );
        assert_eq!(
            Tour::new(4, vec![1, 2, 4, 2, 1]).check(&graph),
            Err(TourViolation::Revisited(2))
        );
        assert_eq!(
            Tour::new(3, vec![1, 2, 4, 3, 1]).check(&graph),
            Err(TourViolation::CoverageMismatch {
                stops: 4,
                reported: 3
            })
        );
    }
}
