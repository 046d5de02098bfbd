use rand::Rng;

/// Source of uniformly distributed indices for [`Seq::shuffle_with`](crate::Seq::shuffle_with).
///
/// Every [`rand::Rng`] is a `RandomSource`, so a seeded generator
/// (`rand::rngs::StdRng::seed_from_u64`) gives reproducible shuffles.
pub trait RandomSource {
    /// An index in `0..bound`. Callers never pass a `bound` of zero.
    fn index_below(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn index_below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}
