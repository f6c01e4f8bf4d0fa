use crate::{Duration, Result, Unit};

/// Rounding rule used when converting to a coarser unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Toward negative infinity
    Floor,

    /// Toward positive infinity
    Ceil,

    /// To the nearest tick; halfway values go toward positive infinity
    Round,
}

impl Rounding {
    /// Divides `numer` by a positive `denom`, rounding the quotient.
    pub(crate) fn divide(self, numer: i128, denom: i128) -> i128 {
        debug_assert!(denom > 0, "denominator must be positive");

        let quotient = numer.div_euclid(denom);
        let remainder = numer.rem_euclid(denom);

        match self {
            Self::Floor => quotient,
            Self::Ceil if remainder == 0 => quotient,
            Self::Ceil => quotient + 1,
            Self::Round if 2 * remainder >= denom => quotient + 1,
            Self::Round => quotient,
        }
    }
}

impl<U: Unit> Duration<U> {
    /// Converts to any unit, applying `rounding` when the target is coarser.
    ///
    /// Converting to an equal or finer unit is exact regardless of `rounding`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUnit`](crate::Error::InvalidUnit) if either unit
    /// has an unusable scale, [`Error::OutOfRange`](crate::Error::OutOfRange)
    /// if the converted count does not fit.
    pub fn convert_to<T: Unit>(self, rounding: Rounding) -> Result<Duration<T>> {
        let source = U::SCALE.validate()?;
        let target = T::SCALE.validate()?;

        let (numer, denom) = source.ratio_to(target);
        let scaled = i128::from(self.count()) * numer;

        if scaled % denom != 0 {
            log::trace!(
                "{:?}: {} in units of {}s drops a remainder",
                rounding,
                self,
                target
            );
        }

        Duration::from_i128(rounding.divide(scaled, denom))
    }

    /// Converts to unit `T`, rounding toward negative infinity.
    ///
    /// # Errors
    ///
    /// See [`Duration::convert_to`].
    pub fn floor_to<T: Unit>(self) -> Result<Duration<T>> {
        self.convert_to(Rounding::Floor)
    }

    /// Converts to unit `T`, rounding toward positive infinity.
    ///
    /// # Errors
    ///
    /// See [`Duration::convert_to`].
    pub fn ceil_to<T: Unit>(self) -> Result<Duration<T>> {
        self.convert_to(Rounding::Ceil)
    }

    /// Converts to unit `T`, rounding to the nearest tick (ties toward positive infinity).
    ///
    /// # Errors
    ///
    /// See [`Duration::convert_to`].
    pub fn round_to<T: Unit>(self) -> Result<Duration<T>> {
        self.convert_to(Rounding::Round)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{
        hours, microseconds, milliseconds, minutes, nanoseconds, seconds, Error, Hour,
        Microsecond, Millisecond, Minute, Nanosecond, Scale, Second, MAX_SAFE_COUNT,
    };
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use test_log::test;

    #[derive(Clone, Copy, Debug, Default)]
    struct Zero;

    impl Unit for Zero {
        const SCALE: Scale = Scale::Whole(0);
    }

    #[test]
    fn rounding_div() {
        assert_eq!(1, Rounding::Floor.divide(7, 4));
        assert_eq!(2, Rounding::Ceil.divide(7, 4));
        assert_eq!(2, Rounding::Round.divide(7, 4));

        assert_eq!(-2, Rounding::Floor.divide(-7, 4));
        assert_eq!(-1, Rounding::Ceil.divide(-7, 4));
        assert_eq!(-2, Rounding::Round.divide(-7, 4));

        assert_eq!(3, Rounding::Floor.divide(12, 4));
        assert_eq!(3, Rounding::Ceil.divide(12, 4));
        assert_eq!(3, Rounding::Round.divide(12, 4));
    }

    #[test]
    fn round_ties_go_up() {
        assert_eq!(3, Rounding::Round.divide(5, 2));
        assert_eq!(-2, Rounding::Round.divide(-5, 2));
        assert_eq!(0, Rounding::Round.divide(-1, 2));
    }

    #[test]
    fn to_finer_is_exact() {
        let dur = hours(7).unwrap();

        for rounding in [Rounding::Floor, Rounding::Ceil, Rounding::Round] {
            assert_eq!(
                25_200_000_000_000,
                dur.convert_to::<Nanosecond>(rounding).unwrap().count()
            );
            assert_eq!(420, dur.convert_to::<Minute>(rounding).unwrap().count());
            assert_eq!(7, dur.convert_to::<Hour>(rounding).unwrap().count());
        }

        assert_eq!(-3_000_000, seconds(-3).unwrap().round_to::<Microsecond>().unwrap().count());
        assert_eq!(-180_000, minutes(-3).unwrap().round_to::<Millisecond>().unwrap().count());
    }

    #[test]
    fn floor_to() {
        assert_eq!(1, nanoseconds(1_999_999).unwrap().floor_to::<Millisecond>().unwrap().count());
        assert_eq!(-1, microseconds(-3).unwrap().floor_to::<Millisecond>().unwrap().count());
        assert_eq!(0, milliseconds(59_999).unwrap().floor_to::<Minute>().unwrap().count());
        assert_eq!(-1, seconds(-1).unwrap().floor_to::<Minute>().unwrap().count());
        assert_eq!(-3, minutes(-151).unwrap().floor_to::<Hour>().unwrap().count());
        assert_eq!(
            9_999_999_999,
            milliseconds(9_999_999_999_999).unwrap().floor_to::<Second>().unwrap().count()
        );
    }

    #[test]
    fn ceil_to() {
        let dur = nanoseconds(1_000_001).unwrap().ceil_to::<Millisecond>().unwrap();
        assert_eq!(Scale::MILLISECOND, dur.unit());
        assert_eq!(2, dur.count());

        assert_eq!(0, microseconds(-3).unwrap().ceil_to::<Millisecond>().unwrap().count());
        assert_eq!(1, milliseconds(1).unwrap().ceil_to::<Minute>().unwrap().count());
        assert_eq!(-2, minutes(-151).unwrap().ceil_to::<Hour>().unwrap().count());
        assert_eq!(2, nanoseconds(120_000_000_000).unwrap().ceil_to::<Minute>().unwrap().count());
    }

    #[test]
    fn round_to() {
        let dur = nanoseconds(3_500_000_000).unwrap().round_to::<Second>().unwrap();
        assert_eq!(Scale::SECOND, dur.unit());
        assert_eq!(4, dur.count());

        assert_eq!(4, nanoseconds(3_500).unwrap().round_to::<Microsecond>().unwrap().count());
        assert_eq!(1, nanoseconds(1_499_999).unwrap().round_to::<Millisecond>().unwrap().count());
        assert_eq!(0, microseconds(-3).unwrap().round_to::<Millisecond>().unwrap().count());
        assert_eq!(
            10_000_000,
            microseconds(9_999_999_999_500).unwrap().round_to::<Second>().unwrap().count()
        );
        assert_eq!(
            9_999_999_999,
            milliseconds(9_999_999_999_499).unwrap().round_to::<Second>().unwrap().count()
        );
        assert_eq!(1, microseconds(30_000_001).unwrap().round_to::<Minute>().unwrap().count());
        assert_eq!(0, milliseconds(29_999).unwrap().round_to::<Minute>().unwrap().count());
        assert_eq!(0, seconds(-30).unwrap().round_to::<Minute>().unwrap().count());
        assert_eq!(2, microseconds(7_199_999_999).unwrap().round_to::<Hour>().unwrap().count());
        assert_eq!(0, seconds(-1_799).unwrap().round_to::<Hour>().unwrap().count());
        assert_eq!(-3, minutes(-151).unwrap().round_to::<Hour>().unwrap().count());
    }

    #[test]
    fn invalid_target_unit() {
        assert_eq!(
            Err(Error::InvalidUnit(0.0)),
            seconds(1).unwrap().floor_to::<Zero>()
        );
    }

    #[test]
    fn out_of_range_result() {
        let dur = hours(MAX_SAFE_COUNT).unwrap();
        assert_eq!(Err(Error::OutOfRange), dur.round_to::<Nanosecond>());
        assert_eq!(MAX_SAFE_COUNT, dur.floor_to::<Hour>().unwrap().count());
    }

    #[test]
    fn floor_round_ceil_are_ordered() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let dur = nanoseconds(rng.gen_range(-MAX_SAFE_COUNT..=MAX_SAFE_COUNT)).unwrap();

            let floor = dur.floor_to::<Second>().unwrap().count();
            let round = dur.round_to::<Second>().unwrap().count();
            let ceil = dur.ceil_to::<Second>().unwrap().count();

            assert!(floor <= round, "{dur}: {floor} <= {round}");
            assert!(round <= ceil, "{dur}: {round} <= {ceil}");
            assert!(ceil - floor <= 1, "{dur}: {floor}..{ceil}");

            let floor = dur.floor_to::<Minute>().unwrap();
            assert!(floor.is_shorter_or_equal(&dur));
            assert!(dur.ceil_to::<Minute>().unwrap().is_longer_or_equal(&dur));
        }
    }
}
