use crate::convert::Rounding;
use crate::unit::Finer;
use crate::{Duration, Error, Result, Unit};

/// Adds two durations, expressing the sum in the finer of the two units.
///
/// ```
/// use ticks::{add, microseconds, nanoseconds, Nanoseconds};
///
/// let sum: Nanoseconds = add(nanoseconds(7_000)?, microseconds(3)?)?;
/// assert_eq!(10_000, sum.count());
/// # Ok::<(), ticks::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the sum does not fit.
pub fn add<L, R>(lhs: Duration<L>, rhs: Duration<R>) -> Result<Duration<L::Output>>
where
    L: Finer<R>,
    R: Unit,
{
    combine(lhs, rhs, false)
}

/// Subtracts `rhs` from `lhs`, expressing the difference in the finer of the two units.
///
/// ```
/// use ticks::{minutes, seconds, sub, Seconds};
///
/// let diff: Seconds = sub(seconds(0)?, minutes(4)?)?;
/// assert_eq!(-240, diff.count());
/// # Ok::<(), ticks::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the difference does not fit.
pub fn sub<L, R>(lhs: Duration<L>, rhs: Duration<R>) -> Result<Duration<L::Output>>
where
    L: Finer<R>,
    R: Unit,
{
    combine(lhs, rhs, true)
}

fn combine<L, R>(
    lhs: Duration<L>,
    rhs: Duration<R>,
    negate_rhs: bool,
) -> Result<Duration<L::Output>>
where
    L: Finer<R>,
    R: Unit,
{
    let target = <L::Output as Unit>::SCALE.validate()?;
    let (ln, ld) = L::SCALE.validate()?.ratio_to(target);
    let (rn, rd) = R::SCALE.validate()?.ratio_to(target);

    // lhs * ln / ld +- rhs * rn / rd, over a common denominator
    let left = i128::from(lhs.count())
        .checked_mul(ln)
        .and_then(|n| n.checked_mul(rd));

    let right = i128::from(rhs.count())
        .checked_mul(rn)
        .and_then(|n| n.checked_mul(ld));

    let numer = left
        .zip(right)
        .and_then(|(left, right)| {
            if negate_rhs {
                left.checked_sub(right)
            } else {
                left.checked_add(right)
            }
        })
        .ok_or(Error::OutOfRange)?;

    let denom = ld.checked_mul(rd).ok_or(Error::OutOfRange)?;

    if numer % denom != 0 {
        log::trace!("{lhs} and {rhs} do not meet on a whole tick of {target}s, rounding");
    }

    Duration::from_i128(Rounding::Round.divide(numer, denom))
}

impl<U: Unit> Duration<U> {
    /// Method form of [`add`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the sum does not fit.
    pub fn checked_add<R: Unit>(self, rhs: Duration<R>) -> Result<Duration<U::Output>>
    where
        U: Finer<R>,
    {
        add(self, rhs)
    }

    /// Method form of [`sub`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the difference does not fit.
    pub fn checked_sub<R: Unit>(self, rhs: Duration<R>) -> Result<Duration<U::Output>>
    where
        U: Finer<R>,
    {
        sub(self, rhs)
    }
}
