// SPDX-License-Identifier: MIT OR Apache-2.0

use core::ops::{Div, Mul};

/// Division that yields `None` instead of a non-finite result.
pub trait CheckedDiv<T = Self>: Div<T> {
    #[must_use]
    fn checked_div(self, rhs: T) -> Option<Self::Output>;
}

/// Multiplication that yields `None` instead of a non-finite result.
pub trait CheckedMul<T = Self>: Mul<T> {
    #[must_use]
    fn checked_mul(self, rhs: T) -> Option<Self::Output>;
}

macro_rules! impl_checked_float_ops {
    (
        $( $( #[ $meta:meta ] )* $float_ty:ty ),* $(,)?
    ) => {
        $(
            $( #[ $meta ] )*
            impl CheckedMul for $float_ty {
                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self::Output> {
                    let result = self * rhs;
                    if result.is_finite() {
                        Some(result)
                    } else {
                        None
                    }
                }
            }

            $( #[ $meta ] )*
            impl CheckedDiv for $float_ty {
                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self::Output> {
                    let result = self / rhs;
                    if result.is_finite() {
                        Some(result)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_checked_float_ops! {
    f32, f64,
}
