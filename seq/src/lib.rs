//! Owned, chainable sequence wrapper.
//!
//! [`Seq`] owns an ordered, finite collection and exposes pipeline-style
//! operations over it. Operations come in two families:
//!
//! - methods taking `&self` never change the receiver; they return a new
//!   `Seq` or a scalar (`map`, `deduped`, `filtered`, `reversed`, ...)
//! - methods taking `&mut self` rewrite the receiver's own storage
//!   (`skip`, `take`, `filter_in_place`, `reverse`, `shuffle`, `chain`, ...)
//!
//! Every transformation materializes its result immediately. All operations
//! are total: out-of-range counts and sizes clamp instead of failing.
//!
//! ```text
//! Seq::new(&[1, 2, 1, 3])
//!     .deduped()          -> [1, 2, 3]     (new Seq)
//!     .map(|x| x * 10)    -> [10, 20, 30]  (new Seq)
//!
//! seq.filter_in_place(|x| *x > 1)          (rewrites seq)
//! ```

mod mutate;
mod pipeline;
mod random;
mod search;
mod sum;
mod window;

pub use random::RandomSource;
pub use search::Group;
pub use sum::Summable;
pub use window::CycleEnd;

use std::slice;
use std::vec;

/// An ordered, owned, resizable sequence of values.
///
/// Construction copies the input; a `Seq` never aliases caller-owned storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Seq<T> {
    items: Vec<T>,
}

impl<T: Clone> Seq<T> {
    /// Copy `items` into a new sequence of the same length and order.
    #[must_use]
    pub fn new(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }

    /// Copy the elements out.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Seq<T> {
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// The element at zero-based position `n`, or `None` when out of range.
    #[must_use]
    pub fn nth(&self, n: usize) -> Option<&T> {
        self.items.get(n)
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone> From<&[T]> for Seq<T> {
    fn from(items: &[T]) -> Self {
        Self::new(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Seq<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: Vec::from(items),
        }
    }
}

impl<T> From<Seq<T>> for Vec<T> {
    fn from(seq: Seq<T>) -> Self {
        seq.items
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Extend<T> for Seq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
