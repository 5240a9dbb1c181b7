use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Implements a four-lane `f32` value type backed by `cgmath`.
///
/// Accessors are declared as `accessor => inner_field`, so a color can
/// expose `r g b a` over the `x y z w` lanes of the underlying vector.
macro_rules! impl_vector {
    ($(#[$meta:meta])* $ident:ident; $components:expr; $ty:ty; $constructor:ident; $inner:path; $($field:ident => $inner_field:ident),*) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[repr(transparent)]
        pub struct $ident {
            inner: $inner,
        }

        impl $ident {
            pub const fn new($($field: $ty),*) -> Self {
                Self { inner: <$inner>::new($($field),*) }
            }

            $(
                #[inline]
                pub fn $field(&self) -> $ty {
                    self.inner.$inner_field
                }
            )*
        }

        #[doc = concat!("Shorthand for [`", stringify!($ident), "::new`].")]
        pub const fn $constructor($($field: $ty),*) -> $ident {
            $ident::new($($field),*)
        }

        impl Default for $ident {
            fn default() -> Self {
                <$ident>::new(
                    $(impl_vector!(@zero_field $field)),*
                )
            }
        }

        impl Add for $ident {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self { inner: self.inner + rhs.inner }
            }
        }

        impl AddAssign for $ident {
            fn add_assign(&mut self, rhs: Self) {
                self.inner += rhs.inner;
            }
        }

        impl Sub for $ident {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self { inner: self.inner - rhs.inner }
            }
        }

        impl Mul<$ty> for $ident {
            type Output = Self;

            fn mul(self, rhs: $ty) -> Self::Output {
                Self { inner: self.inner * rhs }
            }
        }

        impl From<$ident> for [$ty; $components] {
            fn from(value: $ident) -> Self {
                value.inner.into()
            }
        }

        impl From<[$ty; $components]> for $ident {
            fn from(value: [$ty; $components]) -> Self {
                Self { inner: <$inner>::from(value) }
            }
        }

        impl Serialize for $ident {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                <[$ty; $components]>::from(*self).serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ident {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <[$ty; $components]>::deserialize(deserializer).map(Self::from)
            }
        }
    };

    (@zero_field $field:ident) => { Default::default() };
}

impl_vector!(
    /// A four-component vector.
    Vector4; 4; f32; vec4; cgmath::Vector4<f32>; x => x, y => y, z => z, w => w
);
impl_vector!(
    /// A linear RGBA color.
    ///
    /// ```
    /// use vislum_math::{Color4, color4};
    ///
    /// assert_eq!(color4(0.0, 0.0, 0.0, 1.0), Color4::BLACK);
    /// assert_eq!(Color4::WHITE.a(), 1.0);
    /// ```
    Color4; 4; f32; color4; cgmath::Vector4<f32>; r => x, g => y, b => z, a => w
);

impl Color4 {
    pub const WHITE: Color4 = Color4::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color4 = Color4::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color4 = Color4::new(0.0, 0.0, 0.0, 0.0);

    /// Returns the same color with the alpha replaced.
    pub fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r(), self.g(), self.b(), a)
    }
}

impl From<Color4> for Vector4 {
    #[inline]
    fn from(value: Color4) -> Self {
        Vector4 { inner: value.inner }
    }
}

impl From<Vector4> for Color4 {
    #[inline]
    fn from(value: Vector4) -> Self {
        Color4 { inner: value.inner }
    }
}
