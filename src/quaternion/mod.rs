// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    component::{Base, Component},
    error::QuaternionError,
    utils::{
        cross, dot,
        num::{
            Abs, One, Real, Scalar, Zero,
            checked::{CheckedDiv, CheckedMul},
        },
        sum, zip_map,
    },
};
use core::{
    array, fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

mod apply;

/// A quaternion `r + xi + yj + zk`.
///
/// The coefficients are always stored, and returned, in `(r, x, y, z)` order: `r` is the scalar
/// part and `(x, y, z)` is the vector part. They can be read as fields through `Deref`, e.g.
/// `q.r` or `q.y`.
///
/// Every arithmetic method takes the quaternion by value (or by shared reference) and returns a
/// new value. The only operations which modify a quaternion in place are the ones taking
/// `&mut self` ([`conjugate()`], [`normalize()`], [`invert()`]) and the `*Assign` operators.
///
/// [`conjugate()`]: #method.conjugate
/// [`normalize()`]: #method.normalize
/// [`invert()`]: #method.invert
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Quaternion<T = f32> {
    coeffs: [T; 4],
}

impl_coerce_to_fields! {
    Quaternion<T> => Rxyz[4],
}

impl<T> Quaternion<T> {
    /// # Examples
    ///
    /// ```
    /// # use hamilton::Quaternion;
    /// let q = Quaternion::new(2.0f32, 3.0, 4.0, 5.0);
    /// assert_eq!((q.r, q.x, q.y, q.z), (2.0, 3.0, 4.0, 5.0));
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(r: T, x: T, y: T, z: T) -> Self {
        Self {
            coeffs: [r, x, y, z],
        }
    }

    #[must_use]
    #[inline]
    pub const fn from_array(coeffs: [T; 4]) -> Self {
        Self { coeffs }
    }

    /// Builds a quaternion from its scalar part and its vector part.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hamilton::Quaternion;
    /// let q = Quaternion::from_scalar_vector(2.0f32, [3.0, 4.0, 5.0]);
    /// assert_eq!(q, Quaternion::new(2.0, 3.0, 4.0, 5.0));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_scalar_vector(r: T, [x, y, z]: [T; 3]) -> Self {
        Self::new(r, x, y, z)
    }

    /// Builds a quaternion from a scalar part and three tagged components.
    ///
    /// Only the values of the components are used. Their [`Base`] tags are not checked against
    /// their position.
    ///
    /// [`Base`]: ../component/enum.Base.html
    #[must_use]
    #[inline]
    pub fn from_scalar_components(r: T, i: Component<T>, j: Component<T>, k: Component<T>) -> Self {
        Self::new(r, i.value, j.value, k.value)
    }

    /// Builds a quaternion from four tagged components, in `(r, x, y, z)` order.
    ///
    /// As with [`from_scalar_components()`], tags are ignored.
    ///
    /// [`from_scalar_components()`]: #method.from_scalar_components
    #[must_use]
    #[inline]
    pub fn from_components([c0, c1, c2, c3]: [Component<T>; 4]) -> Self {
        Self::new(c0.value, c1.value, c2.value, c3.value)
    }

    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[T; 4] {
        &self.coeffs
    }

    #[must_use]
    #[inline]
    pub fn into_array(self) -> [T; 4] {
        self.coeffs
    }
}

impl<T: Copy> Quaternion<T> {
    #[must_use]
    #[inline]
    pub const fn to_array(&self) -> [T; 4] {
        self.coeffs
    }

    #[must_use]
    #[inline]
    pub const fn scalar(&self) -> T {
        self.coeffs[0]
    }

    #[must_use]
    #[inline]
    pub const fn vector(&self) -> [T; 3] {
        let [_, x, y, z] = self.coeffs;
        [x, y, z]
    }

    /// Returns the coefficient at `index`, tagged with its basis element.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::ComponentOutOfRange`] if `index` is larger than 3.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hamilton::{Base, Quaternion};
    /// let q = Quaternion::new(2.0f32, 3.0, 4.0, 5.0);
    /// let j = q.component(2).unwrap();
    /// assert_eq!((j.base, j.value), (Base::J, 4.0));
    /// assert!(q.component(4).is_err());
    /// ```
    ///
    /// [`QuaternionError::ComponentOutOfRange`]: ../error/enum.QuaternionError.html
    #[inline]
    pub fn component(&self, index: usize) -> Result<Component<T>, QuaternionError> {
        let base = Base::from_index(index)?;
        Ok(Component::new(base, self.coeffs[index]))
    }

    #[must_use]
    #[inline]
    pub fn components(&self) -> [Component<T>; 4] {
        Base::ALL.map(|base| Component::new(base, self.coeffs[base.index()]))
    }
}

impl<T: Zero + One> Quaternion<T> {
    /// The multiplicative identity, `(1, 0, 0, 0)`.
    #[must_use]
    #[inline]
    pub const fn identity() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO)
    }
}

/// Vector part arithmetic.
///
/// These never modify the quaternion: each returns the transformed vector part.
impl<T: Scalar> Quaternion<T> {
    #[must_use]
    #[inline]
    pub fn vector_multiplication(&self, t: T) -> [T; 3] {
        self.apply_scalar(t, Mul::mul)
    }

    #[must_use]
    #[inline]
    pub fn vector_addition(&self, t: T) -> [T; 3] {
        self.apply_scalar(t, Add::add)
    }

    #[must_use]
    #[inline]
    pub fn vector_subtraction(&self, t: T) -> [T; 3] {
        self.apply_scalar(t, Sub::sub)
    }

    /// Divides every axis of the vector part by `t`.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::DivideByZero`] with no axis if `t` is zero.
    ///
    /// [`QuaternionError::DivideByZero`]: ../error/enum.QuaternionError.html
    #[inline]
    pub fn vector_division(&self, t: T) -> Result<[T; 3], QuaternionError> {
        if t.is_zero() {
            return Err(QuaternionError::DivideByZero { axis: None });
        }

        Ok(self.apply_scalar(t, Div::div))
    }

    #[must_use]
    #[inline]
    pub fn vector_multiplication_elementwise(&self, t: [T; 3]) -> [T; 3] {
        self.apply(t, Mul::mul)
    }

    #[must_use]
    #[inline]
    pub fn vector_addition_elementwise(&self, t: [T; 3]) -> [T; 3] {
        self.apply(t, Add::add)
    }

    #[must_use]
    #[inline]
    pub fn vector_subtraction_elementwise(&self, t: [T; 3]) -> [T; 3] {
        self.apply(t, Sub::sub)
    }

    /// Divides each axis of the vector part by the matching element of `t`.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::DivideByZero`] naming the first zero element of `t`.
    ///
    /// [`QuaternionError::DivideByZero`]: ../error/enum.QuaternionError.html
    #[inline]
    pub fn vector_division_elementwise(&self, t: [T; 3]) -> Result<[T; 3], QuaternionError> {
        if let Some(axis) = t.iter().position(|elem| elem.is_zero()) {
            return Err(QuaternionError::DivideByZero { axis: Some(axis) });
        }

        Ok(self.apply(t, Div::div))
    }

    /// The dot product of the vector part with `t`.
    #[must_use]
    #[inline]
    pub fn vector_dot(&self, t: [T; 3]) -> T {
        dot(self.vector(), t)
    }

    /// The cross product `vector × t`.
    #[must_use]
    #[inline]
    pub fn vector_cross(&self, t: [T; 3]) -> [T; 3] {
        cross(self.vector(), t)
    }
}

impl<T: Scalar> Quaternion<T> {
    /// The Hamilton product `self * rhs`.
    ///
    /// With `self = [s_a, a]` and `rhs = [s_b, b]`, this is
    /// `[s_a s_b - a · b, s_a b + s_b a + a × b]`. The product is not commutative.
    #[must_use]
    #[inline]
    pub fn hamilton_product(self, rhs: Self) -> Self {
        let (s_a, a) = (self.scalar(), self.vector());
        let (s_b, b) = (rhs.scalar(), rhs.vector());

        let a_cross_b = cross(a, b);
        let v = array::from_fn(|k| (s_a * b[k]) + (s_b * a[k]) + a_cross_b[k]);

        Self::from_scalar_vector((s_a * s_b) - dot(a, b), v)
    }

    /// The four dimensional dot product of the coefficients.
    #[must_use]
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        sum(zip_map(self.coeffs, rhs.coeffs, Mul::mul))
    }

    #[must_use]
    #[inline]
    pub fn conjugated(self) -> Self {
        Self::from_scalar_vector(self.scalar(), self.vector().map(Neg::neg))
    }

    /// Negates the vector part in place.
    #[inline]
    pub fn conjugate(&mut self) {
        *self = self.conjugated();
    }

    /// The sum of the squares of all four coefficients.
    ///
    /// This is the squared norm of the quaternion, not a matrix determinant.
    #[must_use]
    #[inline]
    pub fn determinant(self) -> T {
        Self::dot(self, self)
    }

    #[must_use]
    #[inline]
    pub fn det(self) -> T {
        self.determinant()
    }

    /// Multiplies all four coefficients by `t`.
    #[must_use]
    #[inline]
    pub fn scaled(self, t: T) -> Self {
        Self::from_array(self.coeffs.map(|elem| elem * t))
    }

    /// Returns the multiplicative inverse, the conjugate divided by the [`determinant()`].
    ///
    /// A zero quaternion produces non-finite coefficients. Use [`try_inversed()`] to detect
    /// that case.
    ///
    /// [`determinant()`]: #method.determinant
    /// [`try_inversed()`]: #method.try_inversed
    #[must_use]
    #[inline]
    pub fn inversed(self) -> Self {
        self.conjugated().scaled(T::ONE / self.determinant())
    }

    /// Replaces the quaternion with its inverse.
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inversed();
    }

    #[must_use]
    #[inline]
    pub fn squared(self) -> Self {
        self * self
    }

    /// Raises the quaternion to the `n`th power by repeated Hamilton products.
    ///
    /// `power(0)` is the [`identity()`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use hamilton::Quaternion;
    /// let q = Quaternion::new(2.0f32, -2.0, 3.0, -4.0);
    /// assert_eq!(q.power(1), q);
    /// assert_eq!(q.power(2), q.squared());
    /// assert_eq!(q.power(0), Quaternion::identity());
    /// ```
    ///
    /// [`identity()`]: #method.identity
    #[must_use]
    #[inline]
    pub fn power(self, n: u32) -> Self {
        if n == 0 {
            return Self::identity();
        }

        (1..n).fold(self, |acc, _| acc * self)
    }
}

impl<T: Scalar + CheckedDiv<Output = T> + CheckedMul<Output = T>> Quaternion<T> {
    #[inline]
    fn checked_scaled(self, t: T) -> Option<Self> {
        let [r, x, y, z] = self.coeffs;
        Some(Self::new(
            r.checked_mul(t)?,
            x.checked_mul(t)?,
            y.checked_mul(t)?,
            z.checked_mul(t)?,
        ))
    }

    /// The determinant, if it is finite and non-zero.
    ///
    /// The sum of squares can overflow to infinity even when every coefficient is finite.
    #[inline]
    fn checked_determinant(self) -> Option<T> {
        self.determinant()
            .checked_mul(T::ONE)
            .filter(|det| !det.is_zero())
    }

    /// # Errors
    ///
    /// Returns [`QuaternionError::Degenerate`] if the determinant is zero or not finite, or if
    /// the result is not finite.
    ///
    /// [`QuaternionError::Degenerate`]: ../error/enum.QuaternionError.html
    #[inline]
    pub fn try_inversed(self) -> Result<Self, QuaternionError> {
        let inv_det = self
            .checked_determinant()
            .and_then(|det| T::ONE.checked_div(det))
            .ok_or(QuaternionError::Degenerate)?;
        self.conjugated()
            .checked_scaled(inv_det)
            .ok_or(QuaternionError::Degenerate)
    }
}

/// Operations needing a square root.
///
/// Without the `std` feature, these require the `libm` feature for `f32` and `f64`.
impl<T: Real> Quaternion<T> {
    #[must_use]
    #[inline]
    pub fn norm(self) -> T {
        self.determinant().sqrt()
    }

    #[must_use]
    #[inline]
    pub fn magnitude(self) -> T {
        self.norm()
    }

    /// Returns the quaternion scaled to unit norm.
    ///
    /// A quaternion with a zero norm produces non-finite coefficients. Use
    /// [`try_normalized()`] to detect that case.
    ///
    /// [`try_normalized()`]: #method.try_normalized
    #[must_use]
    #[inline]
    pub fn normalized(self) -> Self {
        self.scaled(T::ONE / self.norm())
    }

    /// # Errors
    ///
    /// Returns [`QuaternionError::Degenerate`] if the norm is zero or not finite, or if the
    /// result is not finite.
    ///
    /// [`QuaternionError::Degenerate`]: ../error/enum.QuaternionError.html
    #[inline]
    pub fn try_normalized(self) -> Result<Self, QuaternionError> {
        let inv_norm = self
            .checked_determinant()
            .and_then(|det| T::ONE.checked_div(det.sqrt()))
            .ok_or(QuaternionError::Degenerate)?;
        self.checked_scaled(inv_norm)
            .ok_or(QuaternionError::Degenerate)
    }

    /// Scales the quaternion to unit norm in place.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }
}

impl<T: Scalar + Abs> Quaternion<T> {
    /// Whether every coefficient differs from the matching one in `to` by at most `epsilon`.
    #[must_use]
    #[inline]
    pub fn is_nearly_equal(self, to: Self, epsilon: T) -> bool {
        zip_map(self.coeffs, to.coeffs, Abs::abs_diff)
            .into_iter()
            .all(|diff| diff <= epsilon)
    }
}

impl<T: Zero + One> Default for Quaternion<T> {
    /// Returns `(0, 1, 1, 1)`.
    ///
    /// Note that this is neither the additive nor the multiplicative identity. See
    /// [`Quaternion::identity()`] for the latter.
    ///
    /// [`Quaternion::identity()`]: #method.identity
    #[inline]
    fn default() -> Self {
        Self::new(T::ZERO, T::ONE, T::ONE, T::ONE)
    }
}

impl<T: Scalar> Mul<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: Quaternion<T>) -> Self::Output {
        self.hamilton_product(rhs)
    }
}

impl<T: Scalar> MulAssign<Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Quaternion<T>) {
        *self = self.hamilton_product(rhs);
    }
}

impl<T: Copy + Add> Add<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T::Output>;
    #[inline]
    fn add(self, rhs: Quaternion<T>) -> Self::Output {
        Quaternion::from_array(zip_map(self.coeffs, rhs.coeffs, Add::add))
    }
}

impl<T: AddAssign> AddAssign<Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Quaternion<T>) {
        for (lhs, rhs) in self.coeffs.iter_mut().zip(rhs.coeffs) {
            lhs.add_assign(rhs);
        }
    }
}

impl<T: Copy + Sub> Sub<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T::Output>;
    #[inline]
    fn sub(self, rhs: Quaternion<T>) -> Self::Output {
        Quaternion::from_array(zip_map(self.coeffs, rhs.coeffs, Sub::sub))
    }
}

impl<T: SubAssign> SubAssign<Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quaternion<T>) {
        for (lhs, rhs) in self.coeffs.iter_mut().zip(rhs.coeffs) {
            lhs.sub_assign(rhs);
        }
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.scaled(rhs)
    }
}

impl<T: Copy + MulAssign> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for elem in &mut self.coeffs {
            elem.mul_assign(rhs);
        }
    }
}

impl<T: Copy + Div> Div<T> for Quaternion<T> {
    type Output = Quaternion<T::Output>;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Quaternion::from_array(self.coeffs.map(|elem| elem / rhs))
    }
}

impl<T: Copy + DivAssign> DivAssign<T> for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        for elem in &mut self.coeffs {
            elem.div_assign(rhs);
        }
    }
}

impl<T: Neg> Neg for Quaternion<T> {
    type Output = Quaternion<T::Output>;
    #[inline]
    fn neg(self) -> Self::Output {
        Quaternion::from_array(self.coeffs.map(Neg::neg))
    }
}

macro_rules! impl_scalar_lhs_mul {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl Mul<Quaternion<$type>> for $type {
                type Output = Quaternion<$type>;
                #[inline]
                fn mul(self, rhs: Quaternion<$type>) -> Self::Output {
                    rhs.scaled(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul! {
    f32, f64,
}

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    /// Formats as `r + xi + yj + zk`, forwarding any precision or width to every coefficient.
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, x, y, z] = &self.coeffs;
        fmt::Display::fmt(r, fmtr)?;
        fmtr.write_str(" + ")?;
        fmt::Display::fmt(x, fmtr)?;
        fmtr.write_str("i + ")?;
        fmt::Display::fmt(y, fmtr)?;
        fmtr.write_str("j + ")?;
        fmt::Display::fmt(z, fmtr)?;
        fmtr.write_str("k")
    }
}

impl<T> AsRef<[T; 4]> for Quaternion<T> {
    #[inline]
    fn as_ref(&self) -> &[T; 4] {
        &self.coeffs
    }
}

impl<T> From<[T; 4]> for Quaternion<T> {
    #[inline]
    fn from(value: [T; 4]) -> Self {
        Self::from_array(value)
    }
}

impl<T> From<Quaternion<T>> for [T; 4] {
    #[inline]
    fn from(value: Quaternion<T>) -> Self {
        value.coeffs
    }
}

impl<T> From<(T, [T; 3])> for Quaternion<T> {
    #[inline]
    fn from((scalar, vector): (T, [T; 3])) -> Self {
        Self::from_scalar_vector(scalar, vector)
    }
}

impl<T> From<Quaternion<T>> for (T, [T; 3]) {
    #[inline]
    fn from(Quaternion { coeffs: [r, x, y, z] }: Quaternion<T>) -> Self {
        (r, [x, y, z])
    }
}

impl<T> From<[Component<T>; 4]> for Quaternion<T> {
    #[inline]
    fn from(value: [Component<T>; 4]) -> Self {
        Self::from_components(value)
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn from(value: mint::Quaternion<T>) -> Self {
        let mint::Vector3 { x, y, z } = value.v;
        Quaternion::new(value.s, x, y, z)
    }
}

#[cfg(feature = "mint")]
impl<T> From<Quaternion<T>> for mint::Quaternion<T> {
    #[inline]
    fn from(Quaternion { coeffs: [r, x, y, z] }: Quaternion<T>) -> Self {
        mint::Quaternion {
            v: mint::Vector3 { x, y, z },
            s: r,
        }
    }
}

#[cfg(feature = "mint")]
impl<T> mint::IntoMint for Quaternion<T> {
    type MintType = mint::Quaternion<T>;
}

#[cfg(feature = "mint")]
impl<T: PartialEq> PartialEq<mint::Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn eq(&self, other: &mint::Quaternion<T>) -> bool {
        let [r, x, y, z] = &self.coeffs;
        *r == other.s && *x == other.v.x && *y == other.v.y && *z == other.v.z
    }
}

#[cfg(feature = "mint")]
impl<T: PartialEq> PartialEq<Quaternion<T>> for mint::Quaternion<T> {
    #[inline]
    fn eq(&self, other: &Quaternion<T>) -> bool {
        PartialEq::eq(other, self)
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {
    #[inline]
    fn zeroed() -> Self {
        Quaternion {
            coeffs: bytemuck::Zeroable::zeroed(),
        }
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

#[cfg(feature = "serde")]
impl<T: serde_core::Serialize> serde_core::Serialize for Quaternion<T> {
    #[inline]
    fn serialize<S: serde_core::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_core::Serialize::serialize(&self.coeffs, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde_core::Deserialize<'de>> serde_core::Deserialize<'de> for Quaternion<T> {
    #[inline]
    fn deserialize<D: serde_core::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[T; 4] as serde_core::Deserialize<'de>>::deserialize(deserializer)
            .map(Quaternion::from_array)
    }
}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq> approx::AbsDiffEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.coeffs
            .iter()
            .zip(&other.coeffs)
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq> approx::RelativeEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.coeffs
            .iter()
            .zip(&other.coeffs)
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq> approx::UlpsEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.coeffs
            .iter()
            .zip(&other.coeffs)
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}
