//! Unit-typed durations.
//!
//! A [`Duration`] is an integral tick count tagged with a type-level [`Unit`]
//! (nanoseconds, microseconds, milliseconds, seconds, minutes, hours, or a
//! unit of your own). The unit is part of the type, so durations of different
//! units cannot be mixed up by accident:
//!
//! - converting to an equal or finer unit is exact and always allowed ([`Duration::to`])
//! - converting to a coarser unit requires an explicit rounding rule
//!   ([`Duration::floor_to`], [`Duration::ceil_to`], [`Duration::round_to`])
//! - [`add`] and [`sub`] express their result in the finer of the two units
//! - comparisons between any two units are exact
//!
//! Tick counts are bounded to ±(2^53 - 1), the range in which every count is
//! also exactly representable as an `f64`.
//!
//! ```
//! use ticks::{add, hours, milliseconds, minutes, seconds, Milliseconds, Minute};
//!
//! let budget = minutes(2)?;
//! let spent: Milliseconds = add(seconds(90)?, milliseconds(250)?)?;
//!
//! assert!(spent.is_shorter(&budget));
//! assert_eq!("90250ms", spent.to_string());
//!
//! // fine -> coarse must pick a rounding rule
//! assert_eq!(1, spent.floor_to::<Minute>()?.count());
//! assert_eq!(2, spent.ceil_to::<Minute>()?.count());
//!
//! // coarse -> fine never loses precision
//! assert_eq!(7_200_000, hours(2)?.to::<ticks::Millisecond>()?.count());
//!
//! # Ok::<(), ticks::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod arith;
mod cmp;
mod convert;
mod duration;
mod error;
mod scale;
mod time;
mod unit;

pub use arith::{add, sub};
pub use convert::Rounding;
pub use duration::{
    hours, microseconds, milliseconds, minutes, nanoseconds, seconds, Duration, Hours,
    Microseconds, Milliseconds, Minutes, Nanoseconds, Seconds, MAX_SAFE_COUNT, MIN_SAFE_COUNT,
};
pub use error::{Error, Result};
pub use scale::Scale;
pub use time::{since, timestamp, unix_millis};
pub use unit::{AtLeast, Finer, Hour, Microsecond, Millisecond, Minute, Nanosecond, Second, Unit};
