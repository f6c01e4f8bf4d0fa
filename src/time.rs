use crate::{sub, Duration, Error, Milliseconds, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns milliseconds between the UNIX epoch and `instant`.
///
/// Sub-millisecond precision is truncated; instants before the epoch
/// give a negative duration.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the instant is too far from the epoch.
pub fn unix_millis(instant: SystemTime) -> Result<Milliseconds> {
    let millis = match instant.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => i128::try_from(elapsed.as_millis()),
        Err(e) => i128::try_from(e.duration().as_millis()).map(|millis| -millis),
    }
    .map_err(|_| Error::OutOfRange)?;

    Duration::from_i128(millis)
}

/// Returns the current timestamp in milliseconds since the UNIX epoch.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the system clock is absurdly far from the epoch.
pub fn timestamp() -> Result<Milliseconds> {
    unix_millis(SystemTime::now())
}

/// Returns the time elapsed since `past`, in milliseconds.
///
/// Reads the system clock; an instant in the future gives a negative duration.
///
/// ```
/// use std::time::{Duration, SystemTime};
///
/// let start = SystemTime::now() - Duration::from_secs(2);
/// let elapsed = ticks::since(start)?;
///
/// assert!(elapsed.is_longer_or_equal(&ticks::seconds(2)?));
/// # Ok::<(), ticks::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if either instant is too far from the epoch.
pub fn since(past: SystemTime) -> Result<Milliseconds> {
    sub(timestamp()?, unix_millis(past)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{milliseconds, seconds};
    use std::time::Duration as StdDuration;
    use test_log::test;

    #[test]
    fn since_epoch() {
        let since_epoch = since(UNIX_EPOCH).unwrap();
        let now = timestamp().unwrap();

        let drift = sub(now, since_epoch).unwrap();
        assert!(drift.is_shorter(&milliseconds(100).unwrap()), "{drift}");
        assert!(drift.is_longer_or_equal(&milliseconds(0).unwrap()), "{drift}");
    }

    #[test]
    fn since_recent_instant() {
        let past = SystemTime::now() - StdDuration::from_secs(5);
        let elapsed = since(past).unwrap();

        assert!(elapsed.is_longer_or_equal(&seconds(5).unwrap()), "{elapsed}");
        assert!(elapsed.is_shorter(&seconds(60).unwrap()), "{elapsed}");
    }

    #[test]
    fn since_future_is_negative() {
        let future = SystemTime::now() + StdDuration::from_secs(3_600);
        assert!(since(future).unwrap().is_negative());
    }

    #[test]
    fn unix_millis_around_epoch() {
        assert_eq!(0, unix_millis(UNIX_EPOCH).unwrap().count());

        let after = UNIX_EPOCH + StdDuration::from_micros(1_500_999);
        assert_eq!(1_500, unix_millis(after).unwrap().count());

        let before = UNIX_EPOCH - StdDuration::from_millis(2_500);
        assert_eq!(-2_500, unix_millis(before).unwrap().count());
    }
}
