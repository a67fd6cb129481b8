// SPDX-License-Identifier: MIT OR Apache-2.0

use core::{error::Error, fmt};

#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QuaternionError {
    /// A divisor of a vector-part division was zero. `axis` is `None` for a scalar divisor and
    /// the index of the first zero element for a vector divisor.
    DivideByZero { axis: Option<usize> },
    /// A component index outside of `0..=3` was requested.
    ComponentOutOfRange { index: usize },
    /// The quaternion has a zero (or non-finite) norm, so it cannot be normalized or inverted.
    Degenerate,
}

impl fmt::Display for QuaternionError {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::DivideByZero { axis: None } => fmtr.write_str("attempted divide by zero"),
            Self::DivideByZero { axis: Some(axis) } => {
                write!(fmtr, "attempted divide by zero on vector axis {axis}")
            }
            Self::ComponentOutOfRange { index } => {
                write!(fmtr, "component index {index} is out of range 0..=3")
            }
            Self::Degenerate => fmtr.write_str("quaternion has a zero or non-finite norm"),
        }
    }
}

impl Error for QuaternionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            QuaternionError::DivideByZero { axis: None }.to_string(),
            "attempted divide by zero"
        );
        assert_eq!(
            QuaternionError::DivideByZero { axis: Some(1) }.to_string(),
            "attempted divide by zero on vector axis 1"
        );
        assert_eq!(
            QuaternionError::ComponentOutOfRange { index: 4 }.to_string(),
            "component index 4 is out of range 0..=3"
        );
    }

    #[test]
    fn test_error_source() {
        let err: &dyn Error = &QuaternionError::Degenerate;
        assert!(err.source().is_none());
    }
}
