use crate::unit::{AtLeast, Hour, Microsecond, Millisecond, Minute, Nanosecond, Second};
use crate::{Error, Result, Scale, Unit};
use std::marker::PhantomData;

/// Largest tick count a duration can hold (2^53 - 1).
pub const MAX_SAFE_COUNT: i64 = (1 << 53) - 1;

/// Smallest tick count a duration can hold (-(2^53 - 1)).
pub const MIN_SAFE_COUNT: i64 = -MAX_SAFE_COUNT;

/// A span of time: `count` ticks of unit `U`
///
/// ```
/// use ticks::{add, hours, milliseconds, nanoseconds, Hour, Nanoseconds, Second};
///
/// let timeout = milliseconds(1_500)?;
/// let elapsed = nanoseconds(1_200_000_000)?;
///
/// // comparisons are exact across units
/// assert!(elapsed.is_shorter(&timeout));
///
/// // arithmetic promotes to the finer unit
/// let total: Nanoseconds = add(timeout, elapsed)?;
/// assert_eq!(2_700_000_000, total.count());
///
/// // coarse -> fine is lossless
/// let in_nanos = hours(2)?.to::<ticks::Nanosecond>()?;
/// assert_eq!(7_200_000_000_000, in_nanos.count());
///
/// // fine -> coarse needs an explicit rounding rule
/// assert_eq!(2, total.floor_to::<Second>()?.count());
/// assert_eq!(3, total.round_to::<Second>()?.count());
/// assert_eq!(0, total.floor_to::<Hour>()?.count());
///
/// println!("{total}"); // 2700000000ns
///
/// # Ok::<(), ticks::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Duration<U: Unit> {
    count: i64,
    unit: PhantomData<U>,
}

/// Duration in nanoseconds
pub type Nanoseconds = Duration<Nanosecond>;

/// Duration in microseconds
pub type Microseconds = Duration<Microsecond>;

/// Duration in milliseconds
pub type Milliseconds = Duration<Millisecond>;

/// Duration in seconds
pub type Seconds = Duration<Second>;

/// Duration in minutes
pub type Minutes = Duration<Minute>;

/// Duration in hours
pub type Hours = Duration<Hour>;

impl<U: Unit> Duration<U> {
    /// Zero ticks.
    pub const ZERO: Self = Self {
        count: 0,
        unit: PhantomData,
    };

    /// Creates a duration of `count` ticks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `count` is outside
    /// [`MIN_SAFE_COUNT`]..=[`MAX_SAFE_COUNT`], or
    /// [`Error::InvalidUnit`] if the unit's scale is unusable.
    pub fn new(count: i64) -> Result<Self> {
        Self::from_i128(i128::from(count))
    }

    /// Creates a duration from a float tick count, which must be an integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotIntegral`] if `count` has a fractional part
    /// (or is not finite), [`Error::OutOfRange`] if it is outside the
    /// safe integer range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_f64(count: f64) -> Result<Self> {
        if !count.is_finite() || count.fract() != 0.0 {
            return Err(Error::NotIntegral(count));
        }

        // NOTE: 2^53 - 1 is exact as f64
        if count.abs() > MAX_SAFE_COUNT as f64 {
            log::debug!("rejecting tick count {count}: outside safe range");
            return Err(Error::OutOfRange);
        }

        Self::new(count as i64)
    }

    /// Re-expresses a duration of an equal or coarser unit in this unit.
    ///
    /// This is always exact; converting to a coarser unit needs an explicit
    /// rounding rule, see [`Duration::floor_to`], [`Duration::ceil_to`]
    /// and [`Duration::round_to`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the re-expressed count does not fit,
    /// or [`Error::InvalidUnit`] if one tick of `V` is not a whole number of
    /// ticks of `U` (only possible with a hand-written [`AtLeast`] impl).
    pub fn from_duration<V: AtLeast<U>>(other: Duration<V>) -> Result<Self> {
        let source = V::SCALE.validate()?;
        let target = U::SCALE.validate()?;

        let (numer, denom) = source.ratio_to(target);

        if denom != 1 {
            log::debug!("{source}s is not a whole multiple of {target}s");
            return Err(Error::InvalidUnit(source.as_secs_f64()));
        }

        Self::from_i128(i128::from(other.count) * numer)
    }

    /// Re-expresses this duration in an equal or finer unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the re-expressed count does not fit.
    pub fn to<T: Unit>(self) -> Result<Duration<T>>
    where
        U: AtLeast<T>,
    {
        Duration::from_duration(self)
    }

    pub(crate) fn from_i128(count: i128) -> Result<Self> {
        U::SCALE.validate()?;

        let count = i64::try_from(count)
            .ok()
            .filter(|c| (MIN_SAFE_COUNT..=MAX_SAFE_COUNT).contains(c))
            .ok_or_else(|| {
                log::debug!(
                    "rejecting tick count {count} for unit {}: outside safe range",
                    U::SCALE
                );
                Error::OutOfRange
            })?;

        Ok(Self {
            count,
            unit: PhantomData,
        })
    }

    /// Number of ticks.
    #[must_use]
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Size of one tick.
    #[must_use]
    pub fn unit(&self) -> Scale {
        U::SCALE
    }

    /// Same unit, absolute tick count.
    #[must_use]
    pub fn abs(self) -> Self {
        // NOTE: The safe range is symmetric
        Self {
            count: self.count.abs(),
            unit: PhantomData,
        }
    }

    /// Returns `true` if the duration is zero ticks long.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if the duration is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.count < 0
    }

    /// The duration as a real number of seconds.
    ///
    /// Sub-second units divide by the ticks per second instead of
    /// multiplying by a (binary-inexact) fraction.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(&self) -> f64 {
        // NOTE: Exact, the count is within 2^53
        let count = self.count as f64;

        match U::SCALE {
            Scale::Whole(n) => count * f64::from(n),
            Scale::Fraction(d) => count / f64::from(d),
        }
    }

    /// Converts to a [`std::time::Duration`], truncated to whole nanoseconds.
    ///
    /// Returns `None` for negative durations and durations that do not fit.
    #[must_use]
    pub fn to_std(self) -> Option<std::time::Duration> {
        let (numer, denom) = U::SCALE.validate().ok()?.ratio_to(Scale::NANOSECOND);

        let nanos = u128::try_from(i128::from(self.count) * numer / denom).ok()?;
        let secs = u64::try_from(nanos / 1_000_000_000).ok()?;
        let subsec_nanos = u32::try_from(nanos % 1_000_000_000).ok()?;

        Some(std::time::Duration::new(secs, subsec_nanos))
    }

    /// Returns `true` for a nanosecond duration.
    #[must_use]
    pub fn is_nanoseconds(&self) -> bool {
        U::SCALE == Scale::NANOSECOND
    }

    /// Returns `true` for a microsecond duration.
    #[must_use]
    pub fn is_microseconds(&self) -> bool {
        U::SCALE == Scale::MICROSECOND
    }

    /// Returns `true` for a millisecond duration.
    #[must_use]
    pub fn is_milliseconds(&self) -> bool {
        U::SCALE == Scale::MILLISECOND
    }

    /// Returns `true` for a second duration.
    #[must_use]
    pub fn is_seconds(&self) -> bool {
        U::SCALE == Scale::SECOND
    }

    /// Returns `true` for a minute duration.
    #[must_use]
    pub fn is_minutes(&self) -> bool {
        U::SCALE == Scale::MINUTE
    }

    /// Returns `true` for an hour duration.
    #[must_use]
    pub fn is_hours(&self) -> bool {
        U::SCALE == Scale::HOUR
    }
}

impl<U: Unit> Default for Duration<U> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: Unit> std::ops::Neg for Duration<U> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            count: -self.count,
            unit: PhantomData,
        }
    }
}

impl<U: Unit> std::hash::Hash for Duration<U> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.count.hash(state);
    }
}

impl<U: Unit> std::fmt::Debug for Duration<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Duration")
            .field("count", &self.count)
            .field("unit", &U::SCALE)
            .finish()
    }
}

impl<U: Unit> std::fmt::Display for Duration<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match U::SUFFIX.or_else(|| U::SCALE.suffix()) {
            Some(suffix) => write!(f, "{}{suffix}", self.count),
            None => write!(f, "{}(unit:{})", self.count, U::SCALE),
        }
    }
}

impl<U: Unit> TryFrom<i64> for Duration<U> {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl<U: Unit> TryFrom<f64> for Duration<U> {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}

impl TryFrom<std::time::Duration> for Nanoseconds {
    type Error = Error;

    fn try_from(value: std::time::Duration) -> Result<Self> {
        let nanos = i128::try_from(value.as_nanos()).map_err(|_| Error::OutOfRange)?;
        Self::from_i128(nanos)
    }
}

/// Creates a duration of `count` nanoseconds.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `count` is outside the safe integer range.
pub fn nanoseconds(count: i64) -> Result<Nanoseconds> {
    Duration::new(count)
}

/// Creates a duration of `count` microseconds.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `count` is outside the safe integer range.
pub fn microseconds(count: i64) -> Result<Microseconds> {
    Duration::new(count)
}

/// Creates a duration of `count` milliseconds.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `count` is outside the safe integer range.
pub fn milliseconds(count: i64) -> Result<Milliseconds> {
    Duration::new(count)
}

/// Creates a duration of `count` seconds.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `count` is outside the safe integer range.
pub fn seconds(count: i64) -> Result<Seconds> {
    Duration::new(count)
}

/// Creates a duration of `count` minutes.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `count` is outside the safe integer range.
pub fn minutes(count: i64) -> Result<Minutes> {
    Duration::new(count)
}

/// Creates a duration of `count` hours.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `count` is outside the safe integer range.
pub fn hours(count: i64) -> Result<Hours> {
    Duration::new(count)
}
