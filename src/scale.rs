use crate::{Error, Result};
use std::cmp::Ordering;

/// The size of one tick, relative to one second.
///
/// Scales of a second or more are stored as whole seconds per tick,
/// sub-second scales as ticks per second, so every canonical unit
/// is described exactly by integers and no ratio between two scales
/// needs floating point.
///
/// Two scales compare (and hash) by the span they describe, so
/// `Scale::Whole(1)` and `Scale::Fraction(1)` are the same scale.
#[derive(Clone, Copy, Debug)]
pub enum Scale {
    /// One tick spans this many seconds.
    Whole(u32),

    /// One tick spans `1 / n` of a second.
    Fraction(u32),
}

impl Scale {
    /// 1e-9 seconds
    pub const NANOSECOND: Self = Self::Fraction(1_000_000_000);

    /// 1e-6 seconds
    pub const MICROSECOND: Self = Self::Fraction(1_000_000);

    /// 1e-3 seconds
    pub const MILLISECOND: Self = Self::Fraction(1_000);

    /// 1 second
    pub const SECOND: Self = Self::Whole(1);

    /// 60 seconds
    pub const MINUTE: Self = Self::Whole(60);

    /// 3600 seconds
    pub const HOUR: Self = Self::Whole(3_600);

    /// Builds a scale from a (real) number of seconds per tick.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUnit`] if `secs` is not positive and finite,
    /// or if it is at least one second but not a whole number of seconds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_secs_f64(secs: f64) -> Result<Self> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(Error::InvalidUnit(secs));
        }

        if secs >= 1.0 {
            if secs.fract() != 0.0 || secs > f64::from(u32::MAX) {
                return Err(Error::InvalidUnit(secs));
            }
            return Ok(Self::Whole(secs as u32));
        }

        let per_second = (1.0 / secs).round();

        if per_second > f64::from(u32::MAX) {
            return Err(Error::InvalidUnit(secs));
        }

        Ok(Self::Fraction(per_second as u32))
    }

    /// Checks that the scale describes a non-empty span.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUnit`] for a zero component.
    pub fn validate(self) -> Result<Self> {
        match self {
            Self::Whole(0) | Self::Fraction(0) => Err(Error::InvalidUnit(0.0)),
            _ => Ok(self),
        }
    }

    /// Returns `true` if one tick is a whole number of seconds.
    #[must_use]
    pub fn is_whole(self) -> bool {
        self.parts().1 == 1
    }

    /// Seconds per tick.
    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        match self {
            Self::Whole(n) => f64::from(n),
            Self::Fraction(d) => 1.0 / f64::from(d),
        }
    }

    /// Display suffix of the canonical units.
    #[must_use]
    pub fn suffix(self) -> Option<&'static str> {
        match self.parts() {
            (1, 1_000_000_000) => Some("ns"),
            (1, 1_000_000) => Some("µs"),
            (1, 1_000) => Some("ms"),
            (1, 1) => Some("s"),
            (60, 1) => Some("m"),
            (3_600, 1) => Some("h"),
            _ => None,
        }
    }

    /// Seconds per tick as `(numerator, denominator)`.
    pub(crate) fn parts(self) -> (u64, u64) {
        match self {
            Self::Whole(n) => (u64::from(n), 1),
            Self::Fraction(d) => (1, u64::from(d)),
        }
    }

    /// Reduced ratio `(numer, denom)` such that a count of `self` ticks
    /// equals `count * numer / denom` ticks of `target`.
    ///
    /// Both scales must be valid.
    pub(crate) fn ratio_to(self, target: Self) -> (i128, i128) {
        let (sn, sd) = self.parts();
        let (tn, td) = target.parts();

        // u32 * u32 always fits u64
        let numer = sn * td;
        let denom = sd * tn;

        let g = gcd(numer, denom).max(1);

        (i128::from(numer / g), i128::from(denom / g))
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scale {}

impl std::hash::Hash for Scale {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.parts().hash(state);
    }
}

impl PartialOrd for Scale {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finer scales order first.
impl Ord for Scale {
    fn cmp(&self, other: &Self) -> Ordering {
        let (an, ad) = self.parts();
        let (bn, bd) = other.parts();
        (an * bd).cmp(&(bn * ad))
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Whole(n) => write!(f, "{n}"),
            Self::Fraction(_) => write!(f, "{}", self.as_secs_f64()),
        }
    }
}
