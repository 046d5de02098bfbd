//! Callback-driven windowing, chunking, and cycling.
//!
//! These visit borrowed sub-slices of the sequence; nothing is copied.

use crate::Seq;

/// Why [`Seq::cycle_bounded`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEnd {
    /// The sequence was empty; nothing was visited.
    Empty,
    /// `should_stop` returned true.
    Stopped { visits: usize },
    /// The visit limit was reached before `should_stop` returned true.
    LimitReached { visits: usize },
}

impl CycleEnd {
    #[must_use]
    pub const fn visits(self) -> usize {
        match self {
            CycleEnd::Empty => 0,
            CycleEnd::Stopped { visits } | CycleEnd::LimitReached { visits } => visits,
        }
    }
}

impl<T> Seq<T> {
    /// Visit every contiguous run of exactly `size` elements, sliding by one.
    ///
    /// A `size` of zero or larger than the sequence visits nothing.
    pub fn windows<F>(&self, size: usize, mut visit: F)
    where
        F: FnMut(&[T]),
    {
        if size == 0 || size > self.items.len() {
            return;
        }
        for window in self.items.windows(size) {
            visit(window);
        }
    }

    /// Visit consecutive non-overlapping runs of up to `size` elements.
    ///
    /// The final chunk may be shorter. A `size` of zero visits nothing; a
    /// `size` at least the sequence length visits the whole sequence once,
    /// even when it is empty.
    pub fn chunks<F>(&self, size: usize, mut visit: F)
    where
        F: FnMut(&[T]),
    {
        if size == 0 {
            return;
        }
        if size >= self.items.len() {
            visit(&self.items);
            return;
        }
        for chunk in self.items.chunks(size) {
            visit(chunk);
        }
    }

    /// Visit elements in circular order until `should_stop` returns true.
    ///
    /// `should_stop` is checked before every visit. This loop has no bound of
    /// its own: a `should_stop` that never fires never returns. Use
    /// [`Seq::cycle_bounded`] to cap it. An empty sequence returns at once.
    pub fn cycle<V, S>(&self, mut visit: V, mut should_stop: S)
    where
        V: FnMut(&T),
        S: FnMut() -> bool,
    {
        if self.items.is_empty() {
            return;
        }
        for item in self.items.iter().cycle() {
            if should_stop() {
                break;
            }
            visit(item);
        }
    }

    /// Like [`Seq::cycle`], but also stops after `limit` visits.
    pub fn cycle_bounded<V, S>(&self, limit: usize, mut visit: V, mut should_stop: S) -> CycleEnd
    where
        V: FnMut(&T),
        S: FnMut() -> bool,
    {
        if self.items.is_empty() {
            return CycleEnd::Empty;
        }

        let len = self.items.len();
        let mut index = 0;
        let mut visits = 0;
        loop {
            if should_stop() {
                return CycleEnd::Stopped { visits };
            }
            if visits == limit {
                tracing::warn!(limit, len, "cycle stopped at visit limit");
                return CycleEnd::LimitReached { visits };
            }
            visit(&self.items[index]);
            visits += 1;
            index = (index + 1) % len;
        }
    }
}
