//! Non-mutating transformations and aggregations.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use num_traits::{CheckedAdd, Zero};

use crate::{Seq, Summable};

impl<T> Seq<T> {
    /// Apply `f` to every element, producing a sequence of equal length and order.
    #[must_use]
    pub fn map<U, F>(&self, f: F) -> Seq<U>
    where
        F: FnMut(&T) -> U,
    {
        self.items.iter().map(f).collect()
    }

    /// Build a key/value mapping. When two elements produce the same key the
    /// later one wins.
    pub fn to_map<K, V, F>(&self, mut f: F) -> HashMap<K, V>
    where
        K: Eq + Hash,
        F: FnMut(usize, &T) -> (K, V),
    {
        let mut map = HashMap::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            let (key, value) = f(index, item);
            map.insert(key, value);
        }
        map
    }

    /// Left fold starting from `initial`.
    pub fn reduce<U, F>(&self, initial: U, f: F) -> U
    where
        F: FnMut(U, &T) -> U,
    {
        self.items.iter().fold(initial, f)
    }

    /// Sum of a projection of each element. Integer overflow wraps, as in [`Seq::sum`].
    pub fn sum_by<S, F>(&self, f: F) -> S
    where
        S: Summable,
        F: FnMut(&T) -> S,
    {
        self.items
            .iter()
            .map(f)
            .fold(S::zero(), |acc, value| acc.total_add(value))
    }
}

impl<T: Clone> Seq<T> {
    /// Pair each element with its zero-based position.
    #[must_use]
    pub fn enumerate(&self) -> Seq<(usize, T)> {
        self.items.iter().cloned().enumerate().collect()
    }

    /// Pair elements positionally, truncated to the shorter sequence.
    #[must_use]
    pub fn zip<U: Clone>(&self, other: &Seq<U>) -> Seq<(T, U)> {
        self.items
            .iter()
            .cloned()
            .zip(other.items.iter().cloned())
            .collect()
    }

    /// Copy of the elements satisfying `predicate`, in order.
    #[must_use]
    pub fn filtered<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        self.items.iter().rev().cloned().collect()
    }

    /// Copy of this sequence followed by `other`.
    #[must_use]
    pub fn chained(&self, other: &Seq<T>) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + other.items.len());
        items.extend_from_slice(&self.items);
        items.extend_from_slice(&other.items);
        Self { items }
    }
}

impl<T: Clone + Eq + Hash> Seq<T> {
    /// Copy keeping only the first occurrence of each value.
    #[must_use]
    pub fn deduped(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items
            .iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect()
    }
}

impl<T: Summable> Seq<T> {
    /// Sum of the elements; zero for an empty sequence.
    ///
    /// Never panics: integer overflow wraps around. Use [`Seq::checked_sum`]
    /// to detect it.
    #[must_use]
    pub fn sum(&self) -> T {
        self.items
            .iter()
            .fold(T::zero(), |acc, item| acc.total_add(*item))
    }
}

impl<T: Copy + Zero + CheckedAdd> Seq<T> {
    /// Sum of the elements, or `None` if an intermediate total overflows.
    #[must_use]
    pub fn checked_sum(&self) -> Option<T> {
        self.items
            .iter()
            .try_fold(T::zero(), |acc, item| acc.checked_add(item))
    }
}

impl<T: Copy + PartialOrd> Seq<T> {
    /// Largest element, `None` when empty. Ties keep the earliest element.
    #[must_use]
    pub fn max(&self) -> Option<T> {
        self.extreme(|candidate, best| candidate > best)
    }

    /// Smallest element, `None` when empty. Ties keep the earliest element.
    #[must_use]
    pub fn min(&self) -> Option<T> {
        self.extreme(|candidate, best| candidate < best)
    }

    fn extreme<F>(&self, mut replaces: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let (first, rest) = self.items.split_first()?;
        let mut best = *first;
        for item in rest {
            if replaces(item, &best) {
                best = *item;
            }
        }
        Some(best)
    }
}
