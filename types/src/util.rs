//! Small pure helper functions.

/// `a` when `cond` holds, otherwise `b`. Both arguments are evaluated.
#[inline]
#[must_use]
pub fn ternary<T>(cond: bool, a: T, b: T) -> T {
    if cond { a } else { b }
}

/// Call `f` exactly `count` times.
pub fn times<F>(count: usize, mut f: F)
where
    F: FnMut(),
{
    for _ in 0..count {
        f();
    }
}
