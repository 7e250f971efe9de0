//! Algorithms that improve their solution in discrete steps implement [`IterativeAlgorithm`].
//!
//! The idea is that a host can drive the computation step by step and stop it between steps.
//! The algorithms themselves have no internal checkpoints.

/// [`IterativeAlgorithm`] provides a consistent interface to execute step-wise algorithms.
/// It does not prescribe any constructor which is left to the algorithm designer. The
/// construction phase should, in general, be fast and only involve little computation.
///
/// As an adopter of [`IterativeAlgorithm`], you have to implement the methods
///   [`IterativeAlgorithm::execute_step`],
///   [`IterativeAlgorithm::is_completed`] and [`IterativeAlgorithm::best_known_solution`].
///
/// If your algorithm is known to eventually terminate please also implement the marker trait
/// [`TerminatingIterativeAlgorithm`]. It offers an easy interface to run the algorithm to completion.
///
/// # Example
/// ```
/// use twinroute::algorithm::IterativeAlgorithm;
///
/// struct Countdown {
///    remaining: u32,
/// }
///
/// impl IterativeAlgorithm<u32> for Countdown {
///     fn execute_step(&mut self) {
///         self.remaining -= 1;
///     }
///
///     fn is_completed(&self) -> bool {
///         self.remaining == 0
///     }
///
///     fn best_known_solution(&mut self) -> Option<u32> {
///         Some(self.remaining)
///     }
/// }
///
/// let mut algo = Countdown { remaining: 5 };
/// algo.run_while(|a| a.remaining > 2);
/// assert_eq!(algo.best_known_solution(), Some(2));
/// ```
pub trait IterativeAlgorithm<Result> {
    /// Advances the computation of this algorithm by one step.
    fn execute_step(&mut self);

    /// Returns true iff the algorithm is completed and [`IterativeAlgorithm::execute_step`] may not
    /// be called again.
    fn is_completed(&self) -> bool;

    /// Returns the currently best known solution or None if no solution is known yet.
    fn best_known_solution(&mut self) -> Option<Result>;

    /// Execute the algorithm and keeps calling [`IterativeAlgorithm::execute_step`] until the
    /// `predicate` becomes false or [`IterativeAlgorithm::is_completed`] becomes true. The
    /// function `predicate` is evaluated after each iteration, i.e. a step is carried out even
    /// if the predicate always returns false.
    fn run_while<F: FnMut(&mut Self) -> bool>(&mut self, mut predicate: F) {
        while !self.is_completed() {
            self.execute_step();

            if !predicate(self) {
                break;
            }
        }
    }
}

/// [`TerminatingIterativeAlgorithm`] is a marker trait, i.e. to adopt it, you give an empty `impl`
/// block. Add this trait to algorithms that will eventually terminate.
pub trait TerminatingIterativeAlgorithm<Result>: IterativeAlgorithm<Result> {
    /// Execute the algorithm until it completed and return the solution if it was found.
    fn run_to_completion(&mut self) -> Option<Result> {
        while !self.is_completed() {
            self.execute_step();
        }
        self.best_known_solution()
    }
}
