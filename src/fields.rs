// SPDX-License-Identifier: MIT OR Apache-2.0

macro_rules! decl_fields {
    (
        $(
            $ty_name:ident <{ $dim:expr }> {
                $( $field:ident ),+
                $(,)?
            }
        )*
    ) => {
        $(
            #[repr(C)]
            #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
            pub struct $ty_name <T> {
                $( pub $field : T ),+
            }

            impl<T> $ty_name<T> {
                #[must_use]
                #[inline]
                pub const fn new( $( $field : T ),+ ) -> Self {
                    Self {
                        $($field),+
                    }
                }
            }

            impl<T> From<$ty_name<T>> for [T; $dim] {
                #[inline]
                fn from($ty_name { $( $field ),+}: $ty_name<T>) -> Self {
                    [ $($field),+ ]
                }
            }

            impl<T> From<[T; $dim]> for $ty_name<T> {
                #[inline]
                fn from([ $( $field ),+ ]: [T ; $dim]) -> Self {
                    Self {
                        $($field),+
                    }
                }
            }

            #[cfg(feature = "bytemuck")]
            unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $ty_name<T> {
                #[inline]
                fn zeroed() -> Self {
                    Self {
                        $( $field: bytemuck::Zeroable::zeroed() ),+
                    }
                }
            }

            #[cfg(feature = "bytemuck")]
            unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $ty_name<T>{}
        )*
    };
}

decl_fields! {
    Rxyz <{ 4 }> { r, x, y, z }
}
