use super::translate_index;

/// A set holding exactly one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SingletonSet {
    index: i64,
}

impl SingletonSet {
    #[inline]
    pub fn new(index: i64) -> SingletonSet {
        SingletonSet { index }
    }

    #[inline]
    pub fn index(&self) -> i64 {
        self.index
    }

    #[inline]
    pub fn count(&self) -> usize {
        1
    }

    #[inline]
    pub fn contains(&self, index: i64) -> bool {
        self.index == index
    }

    /// Panics if the translated index does not fit in `i64`.
    #[inline]
    pub fn translate(&self, offset: i64) -> SingletonSet {
        SingletonSet::new(translate_index(self.index, offset))
    }
}
