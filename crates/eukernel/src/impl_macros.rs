macro_rules! impl_vector_ops {
    (impl for $type:ident { $($field:ident),+ }) => {
        impl std::ops::Add for $type {
            type Output = $type;

            fn add(self, rhs: $type) -> $type {
                $type { $($field: self.$field + rhs.$field),+ }
            }
        }
        impl std::ops::Sub for $type {
            type Output = $type;

            fn sub(self, rhs: $type) -> $type {
                $type { $($field: self.$field - rhs.$field),+ }
            }
        }
        impl std::ops::Neg for $type {
            type Output = $type;

            fn neg(self) -> $type {
                $type { $($field: -self.$field),+ }
            }
        }
        impl std::ops::Mul<$crate::Float> for $type {
            type Output = $type;

            fn mul(self, rhs: $crate::Float) -> $type {
                $type { $($field: self.$field * rhs),+ }
            }
        }
        impl std::ops::Mul<$type> for $crate::Float {
            type Output = $type;

            fn mul(self, rhs: $type) -> $type {
                rhs * self
            }
        }
        impl std::ops::Div<$crate::Float> for $type {
            type Output = $type;

            #[allow(clippy::suspicious_arithmetic_impl)]
            fn div(self, rhs: $crate::Float) -> $type {
                let mult = 1.0 / rhs;
                self * mult
            }
        }

        impl std::ops::AddAssign for $type {
            fn add_assign(&mut self, rhs: $type) {
                *self = *self + rhs;
            }
        }
        impl std::ops::SubAssign for $type {
            fn sub_assign(&mut self, rhs: $type) {
                *self = *self - rhs;
            }
        }
        impl std::ops::MulAssign<$crate::Float> for $type {
            fn mul_assign(&mut self, rhs: $crate::Float) {
                *self = *self * rhs;
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = $type>>(iter: I) -> $type {
                iter.fold(<$type as $crate::vector::EuclideanVector>::ZERO, |a, b| a + b)
            }
        }
    };
}

macro_rules! impl_vector_approx_eq {
    (impl for $type:ident { $($field:ident),+ }) => {
        impl approx::AbsDiffEq for $type {
            type Epsilon = $crate::Float;

            fn default_epsilon() -> Self::Epsilon {
                $crate::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                true $(&& approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))+
            }
        }
    };
}
