use crate::{Duration, Unit};
use std::cmp::Ordering;

impl<U: Unit> Duration<U> {
    /// Compares the elapsed time of two durations of any units, exactly.
    ///
    /// Equivalent to expressing the coarser operand in the finer unit and
    /// comparing tick counts. Both sides are scaled to a common denominator
    /// in `i128`, which cannot overflow for counts within the safe range.
    #[must_use]
    pub fn compare<V: Unit>(&self, other: &Duration<V>) -> Ordering {
        let (an, ad) = U::SCALE.parts();
        let (bn, bd) = V::SCALE.parts();

        let lhs = i128::from(self.count()) * i128::from(an) * i128::from(bd);
        let rhs = i128::from(other.count()) * i128::from(bn) * i128::from(ad);

        lhs.cmp(&rhs)
    }

    /// Returns `true` if both durations span the same time.
    #[must_use]
    pub fn is_equal<V: Unit>(&self, other: &Duration<V>) -> bool {
        self.compare(other).is_eq()
    }

    /// Returns `true` if `self` is strictly shorter than `other`.
    ///
    /// A more negative duration is shorter.
    #[must_use]
    pub fn is_shorter<V: Unit>(&self, other: &Duration<V>) -> bool {
        self.compare(other).is_lt()
    }

    /// Returns `true` if `self` is strictly longer than `other`.
    #[must_use]
    pub fn is_longer<V: Unit>(&self, other: &Duration<V>) -> bool {
        self.compare(other).is_gt()
    }

    /// Returns `true` if `self` is shorter than or as long as `other`.
    #[must_use]
    pub fn is_shorter_or_equal<V: Unit>(&self, other: &Duration<V>) -> bool {
        self.compare(other).is_le()
    }

    /// Returns `true` if `self` is longer than or as long as `other`.
    #[must_use]
    pub fn is_longer_or_equal<V: Unit>(&self, other: &Duration<V>) -> bool {
        self.compare(other).is_ge()
    }
}

impl<U: Unit, V: Unit> PartialEq<Duration<V>> for Duration<U> {
    fn eq(&self, other: &Duration<V>) -> bool {
        self.is_equal(other)
    }
}

impl<U: Unit> Eq for Duration<U> {}

impl<U: Unit, V: Unit> PartialOrd<Duration<V>> for Duration<U> {
    fn partial_cmp(&self, other: &Duration<V>) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<U: Unit> Ord for Duration<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count().cmp(&other.count())
    }
}
