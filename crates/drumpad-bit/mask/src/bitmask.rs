use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitOr, BitOrAssign};

use crate::Bitable;

/// A set of enum values packed into a single `u64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitmask<T: Bitable>(pub u64, PhantomData<T>);

impl<T: Bitable> Bitmask<T> {
    /// Create a new bitmask from a slice of values.
    pub fn new(values: &[T]) -> Self {
        let mut bits = 0;
        for value in values {
            bits |= value.bit();
        }
        Self(bits, PhantomData)
    }

    /// Create an empty bitmask.
    pub const fn empty() -> Self {
        Self(0, PhantomData)
    }

    /// Create a new bitmask from a raw value.
    pub const fn from_value(value: u64) -> Self {
        Self(value, PhantomData)
    }

    /// Raw bits of the mask.
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Check if the bitmask contains a specific value.
    #[inline]
    pub fn contains(&self, bit: T) -> bool {
        (self.0 & bit.bit()) != 0
    }

    /// Insert a value to the bitmask.
    #[inline]
    pub fn insert(&mut self, bit: T) {
        self.0 |= bit.bit();
    }

    /// Remove a value from the bitmask.
    #[inline]
    pub fn remove(&mut self, bit: T) {
        self.0 &= !bit.bit();
    }

    /// Insert or remove a value depending on `on`.
    #[inline]
    pub fn set(&mut self, bit: T, on: bool) {
        if on {
            self.insert(bit);
        } else {
            self.remove(bit);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check if every value of this bitmask is also in `other`.
    #[inline]
    pub fn is_subset(&self, other: &Bitmask<T>) -> bool {
        self.0 & other.0 == self.0
    }

    /// Check if every value of `other` is also in this bitmask.
    #[inline]
    pub fn is_superset(&self, other: &Bitmask<T>) -> bool {
        other.is_subset(self)
    }

    #[inline]
    pub fn union(&self, other: &Bitmask<T>) -> Bitmask<T> {
        Self(self.0 | other.0, PhantomData)
    }

    /// Count the number of values in the bitmask.
    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the contained values in bit order.
    ///
    /// Bits that do not correspond to any variant are skipped.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            remaining: self.0,
            _marker: PhantomData,
        }
    }
}

impl<T: Bitable> Default for Bitmask<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Bitable + fmt::Debug> fmt::Debug for Bitmask<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Bitable> BitOr for Bitmask<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl<T: Bitable> BitOrAssign<T> for Bitmask<T> {
    fn bitor_assign(&mut self, rhs: T) {
        self.insert(rhs);
    }
}

impl<T: Bitable> FromIterator<T> for Bitmask<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut mask = Self::empty();
        for value in iter {
            mask.insert(value);
        }
        mask
    }
}

impl<T: Bitable> IntoIterator for Bitmask<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`Bitmask`].
pub struct Iter<T: Bitable> {
    remaining: u64,
    _marker: PhantomData<T>,
}

impl<T: Bitable> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while self.remaining != 0 {
            let index = self.remaining.trailing_zeros();
            self.remaining &= self.remaining - 1;
            if let Some(value) = T::from_index(index) {
                return Some(value);
            }
        }
        None
    }
}
