// Component-wise operator impls shared by the vector-like types.
// Each type lists its components along with their index for Index/IndexMut.

macro_rules! impl_component_ops {
    ( $vec_type:ident [ $( $component:ident $index:literal )+ ] ) => {
        impl<T> std::ops::Add for $vec_type<T>
        where
            T: ValueType,
        {
            type Output = Self;

            #[inline]
            fn add(self, other: Self) -> Self {
                Self {
                    $($component: self.$component + other.$component,)*
                }
            }
        }

        impl<T> std::ops::Sub for $vec_type<T>
        where
            T: ValueType,
        {
            type Output = Self;

            #[inline]
            fn sub(self, other: Self) -> Self {
                Self {
                    $($component: self.$component - other.$component,)*
                }
            }
        }

        impl<T> std::ops::AddAssign for $vec_type<T>
        where
            T: ValueType,
        {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                $(self.$component += other.$component;)*
            }
        }

        impl<T> std::ops::SubAssign for $vec_type<T>
        where
            T: ValueType,
        {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                $(self.$component -= other.$component;)*
            }
        }

        impl<T> std::ops::Mul<T> for $vec_type<T>
        where
            T: ValueType,
        {
            type Output = Self;

            #[inline]
            fn mul(self, s: T) -> Self {
                Self {
                    $($component: self.$component * s,)*
                }
            }
        }

        impl std::ops::Mul<$vec_type<f32>> for f32 {
            type Output = $vec_type<f32>;

            #[inline]
            fn mul(self, v: $vec_type<f32>) -> $vec_type<f32> {
                v * self
            }
        }

        impl<T> std::ops::Div<T> for $vec_type<T>
        where
            T: ValueType,
        {
            type Output = Self;

            #[inline]
            fn div(self, s: T) -> Self {
                debug_assert!(s != T::zero());

                Self {
                    $($component: self.$component / s,)*
                }
            }
        }

        impl<T> std::ops::MulAssign<T> for $vec_type<T>
        where
            T: ValueType,
        {
            #[inline]
            fn mul_assign(&mut self, s: T) {
                $(self.$component *= s;)*
            }
        }

        impl<T> std::ops::DivAssign<T> for $vec_type<T>
        where
            T: ValueType,
        {
            #[inline]
            fn div_assign(&mut self, s: T) {
                debug_assert!(s != T::zero());

                $(self.$component /= s;)*
            }
        }

        impl<T> std::ops::Neg for $vec_type<T>
        where
            T: ValueType + std::ops::Neg<Output = T>,
        {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self {
                    $($component: -self.$component,)*
                }
            }
        }

        impl<T> std::ops::Index<usize> for $vec_type<T>
        where
            T: ValueType,
        {
            type Output = T;

            #[inline]
            fn index(&self, i: usize) -> &T {
                match i {
                    $($index => &self.$component,)*
                    _ => panic!("Index {} out of bounds for {}", i, stringify!($vec_type)),
                }
            }
        }

        impl<T> std::ops::IndexMut<usize> for $vec_type<T>
        where
            T: ValueType,
        {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i {
                    $($index => &mut self.$component,)*
                    _ => panic!("Index {} out of bounds for {}", i, stringify!($vec_type)),
                }
            }
        }

        impl<T> From<T> for $vec_type<T>
        where
            T: ValueType,
        {
            #[inline]
            fn from(v: T) -> Self {
                Self {
                    $($component: v,)*
                }
            }
        }

        impl<T> approx::AbsDiffEq for $vec_type<T>
        where
            T: ValueType + approx::AbsDiffEq<Epsilon = T>,
        {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                $(self.$component.abs_diff_eq(&other.$component, epsilon))&&*
            }
        }

        impl<T> approx::RelativeEq for $vec_type<T>
        where
            T: ValueType + approx::RelativeEq<Epsilon = T>,
        {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                $(self.$component.relative_eq(&other.$component, epsilon, max_relative))&&*
            }
        }

        impl<T> $vec_type<T>
        where
            T: ValueType,
        {
            /// Constructs a new value.
            ///
            /// Has a debug assert that checks for NaNs.
            #[inline]
            pub fn new($($component: T),*) -> Self {
                let v = Self { $($component),* };
                debug_assert!(!v.has_nans());
                v
            }

            /// Constructs a new value of 0s.
            #[inline]
            pub fn zeros() -> Self {
                Self {
                    $($component: T::zero(),)*
                }
            }

            /// Constructs a new value of 1s.
            #[inline]
            pub fn ones() -> Self {
                Self {
                    $($component: T::one(),)*
                }
            }

            /// Returns `true` if any component is NaN.
            #[inline]
            pub fn has_nans(&self) -> bool {
                // Not all T have is_nan()
                #[allow(clippy::eq_op)]
                let nan = $((self.$component != self.$component))||*;
                nan
            }

            /// Returns the component-wise minimum of the two values.
            #[inline]
            pub fn min(&self, other: Self) -> Self {
                Self {
                    $($component: self.$component.mini(other.$component),)*
                }
            }

            /// Returns the component-wise maximum of the two values.
            #[inline]
            pub fn max(&self, other: Self) -> Self {
                Self {
                    $($component: self.$component.maxi(other.$component),)*
                }
            }
        }
    };
}
