/// Error type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A tick count was given as a number that is not an integer.
    NotIntegral(f64),

    /// A tick count (or an intermediate product) left the safe integer range.
    OutOfRange,

    /// A unit scale is not usable (zero, negative, or non-integral above one second).
    ///
    /// Carries the scale in seconds per tick.
    InvalidUnit(f64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotIntegral(n) => {
                write!(f, "tick count {n} is not an integer")
            }
            Self::OutOfRange => {
                write!(f, "tick count is outside the safe integer range")
            }
            Self::InvalidUnit(secs) => {
                write!(f, "invalid unit scale: {secs}s per tick")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
