//! A set of puzzle values, optimized for candidate tracking.

use std::fmt::{self, Debug};
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// A set of values in the range `1..=ValueSet::MAX_VALUE`, represented
/// as a bitmask.
///
/// Bit `i` of the mask represents the value `i + 1`. All set operations
/// are O(1); iteration yields values in ascending order.
///
/// Boards cap their maximum value at [`ValueSet::MAX_VALUE`], so a single
/// mask word covers every supported board.
///
/// # Examples
///
/// ```
/// use gridoku_core::ValueSet;
///
/// let mut candidates = ValueSet::full(9);
/// candidates.remove(5);
/// candidates.remove(7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(5));
/// assert!(candidates.contains(1));
/// ```
///
/// # Set operations
///
/// ```
/// use gridoku_core::ValueSet;
///
/// let a = ValueSet::from_iter([1, 2, 3]);
/// let b = ValueSet::from_iter([2, 3, 4]);
///
/// assert_eq!(a | b, ValueSet::from_iter([1, 2, 3, 4]));
/// assert_eq!(a & b, ValueSet::from_iter([2, 3]));
/// assert_eq!(a.difference(b), ValueSet::from_iter([1]));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ValueSet {
    bits: u128,
}

impl ValueSet {
    /// The largest value a set can hold.
    pub const MAX_VALUE: u8 = 128;

    /// The set containing no values.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Returns the set containing every value in `1..=max_value`.
    ///
    /// # Panics
    ///
    /// Panics if `max_value` is 0 or greater than [`Self::MAX_VALUE`].
    #[must_use]
    pub fn full(max_value: u8) -> Self {
        assert!(
            (1..=Self::MAX_VALUE).contains(&max_value),
            "maximum value must be between 1 and {}, got {max_value}",
            Self::MAX_VALUE
        );
        if max_value == Self::MAX_VALUE {
            Self { bits: u128::MAX }
        } else {
            Self {
                bits: (1u128 << max_value) - 1,
            }
        }
    }

    fn bit(value: u8) -> u128 {
        assert!(
            (1..=Self::MAX_VALUE).contains(&value),
            "value must be between 1 and {}, got {value}",
            Self::MAX_VALUE
        );
        1u128 << (value - 1)
    }

    /// Inserts a value into the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is 0 or greater than [`Self::MAX_VALUE`].
    pub fn insert(&mut self, value: u8) {
        self.bits |= Self::bit(value);
    }

    /// Removes a value from the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is 0 or greater than [`Self::MAX_VALUE`].
    pub fn remove(&mut self, value: u8) {
        self.bits &= !Self::bit(value);
    }

    /// Removes every value of `other` from the set.
    pub fn remove_all(&mut self, other: Self) {
        self.bits &= !other.bits;
    }

    /// Returns whether `value` is in the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is 0 or greater than [`Self::MAX_VALUE`].
    #[must_use]
    pub fn contains(self, value: u8) -> bool {
        self.bits & Self::bit(value) != 0
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the sole value if the set holds exactly one, `None`
    /// otherwise.
    #[must_use]
    pub fn as_single(self) -> Option<u8> {
        if self.bits != 0 && self.bits & (self.bits - 1) == 0 {
            #[expect(clippy::cast_possible_truncation)]
            Some(self.bits.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Returns the values in `self` that are not in `other`.
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns the values in either set.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        self | other
    }

    /// Returns the values in both sets.
    #[must_use]
    pub fn intersection(self, other: Self) -> Self {
        self & other
    }

    /// Iterates over the values in ascending order.
    #[must_use]
    pub fn iter(self) -> Values {
        Values { bits: self.bits }
    }
}

impl Debug for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for ValueSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for ValueSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for ValueSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for ValueSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl FromIterator<u8> for ValueSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for ValueSet {
    type Item = u8;
    type IntoIter = Values;

    fn into_iter(self) -> Values {
        self.iter()
    }
}

/// Iterator over the values of a [`ValueSet`], ascending.
#[derive(Debug, Clone)]
pub struct Values {
    bits: u128,
}

impl Iterator for Values {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Values {
    fn next_back(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = 128 - self.bits.leading_zeros() as u8;
        self.bits &= !(1u128 << (value - 1));
        Some(value)
    }
}

impl ExactSizeIterator for Values {}
impl FusedIterator for Values {}
