/// The set with no members.
///
/// Bounds are absent (`None`), `count` is 0 and every positional access fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptySet;

impl EmptySet {
    #[inline]
    pub fn new() -> EmptySet {
        EmptySet
    }

    #[inline]
    pub fn count(&self) -> usize {
        0
    }

    #[inline]
    pub fn contains(&self, _index: i64) -> bool {
        false
    }

    #[inline]
    pub fn translate(&self, _offset: i64) -> EmptySet {
        EmptySet
    }
}
