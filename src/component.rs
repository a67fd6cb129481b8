// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::QuaternionError;
use core::fmt;

/// The basis element a quaternion coefficient is attached to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Base {
    Scalar,
    I,
    J,
    K,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::Scalar, Base::I, Base::J, Base::K];

    /// Maps a coefficient position in `(r, x, y, z)` order to its basis element.
    #[inline]
    pub const fn from_index(index: usize) -> Result<Self, QuaternionError> {
        match index {
            0 => Ok(Base::Scalar),
            1 => Ok(Base::I),
            2 => Ok(Base::J),
            3 => Ok(Base::K),
            _ => Err(QuaternionError::ComponentOutOfRange { index }),
        }
    }

    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    #[inline]
    const fn label(self) -> &'static str {
        match self {
            Base::Scalar => "SCALAR",
            Base::I => "I",
            Base::J => "J",
            Base::K => "K",
        }
    }
}

impl fmt::Display for Base {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmtr.write_str(self.label())
    }
}

/// A single quaternion coefficient tagged with its basis element.
///
/// Components only exist transiently, as the result of [`Quaternion::component()`] or as
/// constructor arguments. Constructors read the `value` and ignore the `base`.
///
/// [`Quaternion::component()`]: ../quaternion/struct.Quaternion.html#method.component
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Component<T> {
    pub base: Base,
    pub value: T,
}

impl<T> Component<T> {
    #[must_use]
    #[inline]
    pub const fn new(base: Base, value: T) -> Self {
        Self { base, value }
    }
}

impl<T> From<(Base, T)> for Component<T> {
    #[inline]
    fn from((base, value): (Base, T)) -> Self {
        Self { base, value }
    }
}

impl<T: fmt::Display> fmt::Display for Component<T> {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmtr, "{}::", self.base)?;
        fmt::Display::fmt(&self.value, fmtr)
    }
}
