// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{quaternion::Quaternion, utils::zip_map};

impl<T: Copy> Quaternion<T> {
    /// Combines the vector part memberwise with `operand` using `f`, so that
    /// `out[k] = f(vector[k], operand[k])`. The receiver is left untouched.
    #[must_use]
    #[inline]
    pub(super) fn apply<F>(&self, operand: [T; 3], f: F) -> [T; 3]
    where
        F: FnMut(T, T) -> T,
    {
        zip_map(self.vector(), operand, f)
    }

    /// As [`apply()`], with the same scalar `t` on every axis.
    ///
    /// [`apply()`]: #method.apply
    #[must_use]
    #[inline]
    pub(super) fn apply_scalar<F>(&self, t: T, f: F) -> [T; 3]
    where
        F: FnMut(T, T) -> T,
    {
        self.apply([t; 3], f)
    }
}
