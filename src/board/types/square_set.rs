//! Set of squares backed by a 64-bit mask.

use std::fmt;

use super::square::Square;

/// A set of board squares. Bit `i` is set when square index `i` is a member.
///
/// Move generators return destinations as a `SquareSet`, so overlapping
/// contributions (the queen's two ray families) collapse naturally and
/// iteration is always in ascending index order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.index());
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.index()) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of squares in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl std::ops::BitOr for SquareSet {
    type Output = SquareSet;

    fn bitor(self, rhs: SquareSet) -> SquareSet {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for SquareSet {
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        self.iter()
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|sq| sq.to_string())).finish()
    }
}

/// Iterator over the squares in a `SquareSet`, lowest index first.
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Square::from_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_insert_contains_remove() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());
        set.insert(sq("e4"));
        set.insert(sq("e4"));
        assert_eq!(set.len(), 1);
        assert!(set.contains(sq("e4")));
        set.remove(sq("e4"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_is_ascending() {
        let set: SquareSet = [sq("h1"), sq("a8"), sq("d5")].into_iter().collect();
        let indices: Vec<usize> = set.iter().map(Square::index).collect();
        assert_eq!(indices, vec![0, 27, 63]);
    }

    #[test]
    fn test_union_deduplicates() {
        let a: SquareSet = [sq("a1"), sq("b2")].into_iter().collect();
        let b: SquareSet = [sq("b2"), sq("c3")].into_iter().collect();
        assert_eq!((a | b).len(), 3);
    }
}
