use crate::graph::*;
use rand::Rng;
use rand_distr::Geometric;

pub trait GnpGenerator: Sized {
    /// Generates a Gilbert instance with `n` cities named `prefix1 .. prefixn` (west to east);
    /// each of the `n(n-1)/2` direct routes exists independently with probability `p`.
    fn random_gnp_with_prefix<R: Rng>(rng: &mut R, n: NumCities, p: f64, prefix: &str) -> Self;

    fn random_gnp<R: Rng>(rng: &mut R, n: NumCities, p: f64) -> Self {
        Self::random_gnp_with_prefix(rng, n, p, "C")
    }
}

impl GnpGenerator for CityGraph {
    fn random_gnp_with_prefix<R: Rng>(rng: &mut R, n: NumCities, p: f64, prefix: &str) -> Self {
        let names = (1..=n).map(|i| format!("{prefix}{i}"));
        let mut graph =
            CityGraph::with_cities(names).expect("Generated city names must be unique");

        let n = n as i64;
        for x in BernoulliSamplingRange::new(rng, 0, n * n, p) {
            let (u, v) = (x / n, x % n);
            if u < v {
                graph.try_add_edge(Edge(u as Node + 1, v as Node + 1));
            }
        }

        graph
    }
}

/// Provides an iterator similarly to Range, but
/// includes each element i.i.d. with probability of p
pub struct BernoulliSamplingRange<'a, R: Rng> {
    current: i64,
    end: i64,
    distr: Option<Geometric>,
    rng: &'a mut R,
}

impl<'a, R: Rng> BernoulliSamplingRange<'a, R> {
    pub fn new(rng: &'a mut R, begin: i64, end: i64, prob: f64) -> Self {
        debug_assert!(begin <= end);
        debug_assert!((0.0..=1.0).contains(&prob));
        Self {
            rng,
            current: begin - 1,
            end,
            distr: (prob > 0.0).then(|| Geometric::new(prob).ok()).flatten(),
        }
    }

    fn try_advance(&mut self) {
        if self.current >= self.end {
            return;
        }

        let Some(distr) = self.distr.as_ref() else {
            self.current = self.end;
            return;
        };

        let skip = self.rng.sample(distr);
        self.current = i64::try_from(skip)
            .ok()
            .and_then(|skip| (self.current + 1).checked_add(skip))
            .unwrap_or(self.end);
    }
}

impl<R: Rng> Iterator for BernoulliSamplingRange<'_, R> {
    type Item = i64;
    fn next(&mut self) -> Option<Self::Item> {
        self.try_advance();

        if self.current >= self.end {
            None
        } else {
            Some(self.current)
        }
    }
}
