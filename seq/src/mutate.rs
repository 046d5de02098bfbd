//! In-place rewrites of a sequence's own storage.

use crate::{RandomSource, Seq};

impl<T> Seq<T> {
    /// Drop the first element. Returns `false` if there was nothing to drop.
    pub fn advance(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.remove(0);
        true
    }

    /// Drop the first `n` elements. Skipping past the end empties the sequence.
    pub fn skip(&mut self, n: usize) {
        let n = n.min(self.items.len());
        self.items.drain(..n);
    }

    /// Keep only the first `n` elements. `n >= len` is a no-op.
    pub fn take(&mut self, n: usize) {
        self.items.truncate(n);
    }

    /// Keep only the elements satisfying `predicate`, preserving order.
    pub fn filter_in_place<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(|item| predicate(item));
    }

    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Unbiased in-place permutation (Fisher-Yates) drawing from `rng`.
    pub fn shuffle_with<R>(&mut self, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        tracing::debug!(len = self.items.len(), "Shuffling sequence");
        for upper in (1..self.items.len()).rev() {
            let pick = rng.index_below(upper + 1);
            self.items.swap(upper, pick);
        }
    }

    /// Shuffle with the thread-local generator.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Call `f` once per element with mutable access to it.
    pub fn for_each_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        self.items.iter_mut().for_each(f);
    }
}

impl<T: Clone> Seq<T> {
    /// Append a copy of `other`'s elements.
    pub fn chain(&mut self, other: &Seq<T>) {
        self.items.extend_from_slice(&other.items);
    }

    /// Shuffled copy; the receiver keeps its order.
    #[must_use]
    pub fn shuffled_with<R>(&self, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let mut copy = self.clone();
        copy.shuffle_with(rng);
        copy
    }
}
