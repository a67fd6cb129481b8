// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::utils::num::{ClosedAdd, ClosedMul, ClosedSub, Zero};
use core::{array, ops::Add};

pub mod num;

/// Analogous to the [`Iterator::sum()`] method, but which uses [`Zero`] and [`ClosedAdd`] instead of
/// the [`Sum`] trait.
///
/// Elements are accumulated left to right, starting from zero.
///
/// [`Iterator::sum()`]: https://doc.rust-lang.org/stable/std/iter/trait.Iterator.html#method.sum
/// [`Sum`]: https://doc.rust-lang.org/stable/std/iter/trait.Sum.html
/// [`ClosedAdd`]: ./num/trait.ClosedAdd.html
/// [`Zero`]: ./num/trait.Zero.html
#[must_use]
#[inline(always)]
pub fn sum<I>(iter: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Zero + ClosedAdd,
{
    iter.into_iter().fold(Zero::ZERO, Add::add)
}

/// Zips two arrays together and applies the function `f` to each memberwise element, returning a fixed
/// size array of the results.
///
/// # Examples
///
/// ```
/// # use hamilton::utils::zip_map;
/// let sums = zip_map([1.0, 2.0, 3.0], [10.0, 20.0, 30.0], |x, y| x + y);
/// assert_eq!(sums, [11.0, 22.0, 33.0]);
/// ```
#[must_use]
#[inline]
pub fn zip_map<T, U, Res, F, const N: usize>(lhs: [T; N], rhs: [U; N], mut f: F) -> [Res; N]
where
    T: Copy,
    U: Copy,
    F: FnMut(T, U) -> Res,
{
    array::from_fn(|i| f(lhs[i], rhs[i]))
}

/// The dot product of two 3-vectors, `v0*t0 + v1*t1 + v2*t2`.
///
/// # Examples
///
/// ```
/// # use hamilton::utils::dot;
/// assert_eq!(dot([9.0, 2.0, 7.0], [4.0, 8.0, 10.0]), 122.0);
/// ```
#[must_use]
#[inline]
pub fn dot<T: Copy + ClosedMul + ClosedAdd + Zero>(v: [T; 3], t: [T; 3]) -> T {
    sum(zip_map(v, t, |x, y| x * y))
}

/// The cross product `v × t` of two 3-vectors.
///
/// # Examples
///
/// ```
/// # use hamilton::utils::cross;
/// assert_eq!(cross([2.0, 3.0, 4.0], [5.0, 6.0, 7.0]), [-3.0, 6.0, -3.0]);
/// ```
#[must_use]
#[inline]
pub fn cross<T: Copy + ClosedMul + ClosedSub>(v: [T; 3], t: [T; 3]) -> [T; 3] {
    let [x0, y0, z0] = v;
    let [x1, y1, z1] = t;

    [
        (y0 * z1) - (z0 * y1),
        (z0 * x1) - (x0 * z1),
        (x0 * y1) - (y0 * x1),
    ]
}
