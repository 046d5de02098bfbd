//! Minimal LIFO container.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Containment under a caller-supplied equality.
    pub fn contains_by<F>(&self, target: &T, mut equals: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.items.iter().any(|item| equals(item, target))
    }

    /// Pop every element, most recent first. The stack is empty afterwards.
    pub fn drain(&mut self) -> Vec<T> {
        let mut drained = Vec::with_capacity(self.items.len());
        while let Some(item) = self.items.pop() {
            drained.push(item);
        }
        drained
    }
}

impl<T: PartialEq> Stack<T> {
    #[must_use]
    pub fn contains(&self, target: &T) -> bool {
        self.items.contains(target)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
