use crate::Scale;

/// A type-level duration unit.
///
/// Every [`Duration`](crate::Duration) is tagged with a unit, so a count of
/// milliseconds can never be mistaken for a count of seconds.
///
/// The six canonical units are provided; other units can be declared
/// by implementing this trait on a marker type:
///
/// ```
/// use ticks::{Duration, Scale, Unit};
///
/// #[derive(Clone, Copy, Debug, Default)]
/// struct Day;
///
/// impl Unit for Day {
///     const SCALE: Scale = Scale::Whole(86_400);
/// }
///
/// let week = Duration::<Day>::new(7)?;
/// assert_eq!("7(unit:86400)", week.to_string());
/// # Ok::<(), ticks::Error>(())
/// ```
pub trait Unit: Copy + std::fmt::Debug + Default + Send + Sync + 'static {
    /// Size of one tick.
    const SCALE: Scale;

    /// Suffix used when displaying a duration of this unit.
    const SUFFIX: Option<&'static str> = None;
}

/// Marks `Self` as at least as coarse as `U`.
///
/// Re-expressing a duration of `Self` in `U` is a pure multiplication,
/// so it never needs rounding. See [`Duration::from_duration`](crate::Duration::from_duration).
///
/// Implementing this for your own units requires one tick of `Self` to be a
/// whole number of ticks of `U`. Being coarser is not enough: a third of a
/// second is 4/3 quarter seconds, and converting between such units fails
/// with [`Error::InvalidUnit`](crate::Error::InvalidUnit).
pub trait AtLeast<U: Unit>: Unit {}

/// Selects the finer of two units.
///
/// Used as the result unit of [`add`](crate::add) and [`sub`](crate::sub).
/// The output does not depend on argument order.
pub trait Finer<Rhs: Unit>: Unit {
    /// The finer unit
    type Output: Unit;
}

macro_rules! unit {
    ($name:ident, $scale:expr, $suffix:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Unit for $name {
            const SCALE: Scale = $scale;
            const SUFFIX: Option<&'static str> = Some($suffix);
        }
    };
}

unit!(Nanosecond, Scale::NANOSECOND, "ns", "1e-9 seconds");
unit!(Microsecond, Scale::MICROSECOND, "µs", "1e-6 seconds");
unit!(Millisecond, Scale::MILLISECOND, "ms", "1e-3 seconds");
unit!(Second, Scale::SECOND, "s", "1 second");
unit!(Minute, Scale::MINUTE, "m", "60 seconds");
unit!(Hour, Scale::HOUR, "h", "3600 seconds");

// Walks the units from finest to coarsest, relating the head to every unit after it.
macro_rules! relate {
    () => {};
    ($fine:ty $(, $coarse:ty)*) => {
        impl AtLeast<$fine> for $fine {}

        impl Finer<$fine> for $fine {
            type Output = $fine;
        }

        $(
            impl AtLeast<$fine> for $coarse {}

            impl Finer<$coarse> for $fine {
                type Output = $fine;
            }

            impl Finer<$fine> for $coarse {
                type Output = $fine;
            }
        )*

        relate!($($coarse),*);
    };
}

relate!(Nanosecond, Microsecond, Millisecond, Second, Minute, Hour);
