// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::utils::num::checked::{CheckedDiv, CheckedMul};
use core::ops::{Add, Div, Mul, Neg, Sub};

pub mod checked;

pub trait ClosedSub: Sized + Sub<Output = Self> {}
pub trait ClosedMul: Sized + Mul<Output = Self> {}
pub trait ClosedAdd: Sized + Add<Output = Self> {}
pub trait ClosedDiv: Sized + Div<Output = Self> {}
pub trait ClosedNeg: Sized + Neg<Output = Self> {}

impl<T: Sized + Sub<Output = Self>> ClosedSub for T {}
impl<T: Sized + Mul<Output = Self>> ClosedMul for T {}
impl<T: Sized + Add<Output = Self>> ClosedAdd for T {}
impl<T: Sized + Div<Output = Self>> ClosedDiv for T {}
impl<T: Sized + Neg<Output = Self>> ClosedNeg for T {}

/// The arithmetic a quaternion coefficient needs: closed field operations, negation, and
/// comparison against [`Zero`].
///
/// This is blanket-implemented, so any type providing the individual traits is a `Scalar`. The
/// crate provides them for `f32` and `f64`, with or without `std`.
///
/// [`Zero`]: ./trait.Zero.html
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + ClosedAdd
    + ClosedSub
    + ClosedMul
    + ClosedDiv
    + ClosedNeg
    + Zero
    + One
{
}

impl<T> Scalar for T where
    T: Copy
        + PartialEq
        + PartialOrd
        + ClosedAdd
        + ClosedSub
        + ClosedMul
        + ClosedDiv
        + ClosedNeg
        + Zero
        + One
{
}

/// A [`Scalar`] with a square root and finiteness-checked division and multiplication.
///
/// `Sqrt` is only implemented for `f32` and `f64` when either the `std` or the `libm` feature
/// is enabled.
///
/// [`Scalar`]: ./trait.Scalar.html
pub trait Real: Scalar + Sqrt + CheckedDiv<Output = Self> + CheckedMul<Output = Self> {}

impl<T> Real for T where T: Scalar + Sqrt + CheckedDiv<Output = T> + CheckedMul<Output = T> {}

pub trait Sqrt: Copy {
    #[must_use]
    fn sqrt(self) -> Self;
}

pub trait Abs: Copy {
    #[must_use]
    fn abs(self) -> Self;

    #[must_use]
    fn abs_diff(self, rhs: Self) -> Self;
}

#[doc(alias = "1")]
pub trait One {
    const ONE: Self;
}

#[doc(alias = "0")]
pub trait Zero {
    const ZERO: Self;

    #[must_use]
    #[inline]
    fn is_zero(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::ZERO
    }
}

macro_rules! impl_float_traits {
    ( $($type:ty),* $(,)? ) => {
        $(
            impl Zero for $type {
                const ZERO: Self = 0.0;
            }

            impl One for $type {
                const ONE: Self = 1.0;
            }

            impl Abs for $type {
                #[inline]
                fn abs(self) -> Self {
                    <$type>::abs(self)
                }

                #[inline]
                fn abs_diff(self, rhs: Self) -> Self {
                    (self - rhs).abs()
                }
            }

            #[cfg(feature = "std")]
            impl Sqrt for $type {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    <$type>::sqrt(self)
                }
            }

            #[cfg(all(feature = "libm", not(feature = "std")))]
            impl Sqrt for $type {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    libm::Libm::<$type>::sqrt(self)
                }
            }
        )*
    };
}

impl_float_traits! {
    f32, f64,
}
