#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Quaternion algebra over a generic floating point scalar.
//!
//! The central type is [`Quaternion`], a four coefficient value `r + xi + yj + zk` stored in
//! `(r, x, y, z)` order. It provides the Hamilton product, conjugation, inversion, normalization,
//! integer powers and the sum-of-squares "determinant", along with elementwise helpers that act on
//! the vector part `(x, y, z)`.
//!
//! ```
//! # use hamilton::Quaternion;
//! let q_a = Quaternion::new(2.0, -2.0, 3.0, -4.0);
//! let q_b = Quaternion::new(1.0, -2.0, 5.0, -6.0);
//!
//! assert_eq!(q_a * q_b, Quaternion::new(-41.0, -4.0, 9.0, -20.0));
//! assert_eq!((q_a * q_b).conjugated(), q_b.conjugated() * q_a.conjugated());
//! ```
//!
//! [`Quaternion`]: ./quaternion/struct.Quaternion.html

macro_rules! impl_coerce_to_fields {
    (
        $( $type:ident < $generic:ident > => $fields_type:ident [ $len:literal ] ),+ $(,)?
    ) => {
        $(
            impl<$generic> core::ops::Deref for $type<$generic> {
                type Target = crate::fields:: $fields_type<$generic>;
                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref(&self) -> &Self::Target {
                    const _: () = assert!(
                        core::mem::size_of::<$type<f32>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<f32>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<$type<f32>>()
                            == core::mem::align_of::<crate::fields:: $fields_type<f32>>()
                    );

                    const _: () = assert!(
                        core::mem::size_of::<$type<f64>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<f64>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<$type<f64>>()
                            == core::mem::align_of::<crate::fields:: $fields_type<f64>>()
                    );

                    // Both types are `repr(C)` over `$len` values of the same type.
                    unsafe { &*(self as *const _ as *const crate::fields:: $fields_type<$generic>) }
                }
            }

            impl<$generic> From<$type<$generic>> for crate::fields:: $fields_type<$generic> {
                #[inline]
                fn from(value: $type<$generic>) -> Self {
                    let as_array: [$generic; $len] = value.into();
                    From::from(as_array)
                }
            }

            impl<$generic> From<crate::fields:: $fields_type<$generic>> for $type<$generic> {
                #[inline]
                fn from(value: crate::fields:: $fields_type<$generic>) -> Self {
                    let as_array: [$generic; $len] = value.into();
                    From::from(as_array)
                }
            }
        )+
    };
}

pub mod component;
pub mod error;
pub mod fields;
pub mod quaternion;
pub mod utils;

pub use crate::{
    component::{Base, Component},
    error::QuaternionError,
    quaternion::Quaternion,
};
