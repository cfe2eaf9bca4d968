use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::config::{MathConfig, ZeroDivisionPolicy, DEFAULT_ANGLE_PRECISION};
use crate::error::{check_component, check_scalar, invalid_argument, ArgumentKind, MathResult};
use crate::number_traits::{Float, Zero};

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;

/// Operations shared by the fixed-size vector types.
///
/// Operators (`+`, `-`, `*`, `/`) follow IEEE semantics: dividing by zero or
/// normalizing a zero vector yields infinite or NaN components. The `try_*`
/// variants validate their operand first and leave the receiver untouched on
/// failure.
pub trait Vector<T: Float>:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<T, Output = Self>
    + Div<T, Output = Self>
{
    type Array;

    fn dot(&self, other: &Self) -> T;

    fn as_array(&self) -> Self::Array;

    fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    fn normalize(&mut self) {
        *self = *self / self.magnitude();
    }

    fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    fn try_normalized(&self, policy: ZeroDivisionPolicy) -> MathResult<Self> {
        let magnitude = policy.check_divisor(self.magnitude())?;
        Ok(*self / magnitude)
    }

    fn try_mul(self, scalar: T) -> MathResult<Self> {
        Ok(self * check_scalar(scalar)?)
    }

    fn try_div(self, scalar: T, policy: ZeroDivisionPolicy) -> MathResult<Self> {
        let scalar = policy.check_divisor(check_scalar(scalar)?)?;
        Ok(self / scalar)
    }

    fn distance_to(&self, other: &Self) -> T {
        (*self - *other).magnitude()
    }

    /// Angle to `other` in degrees, rounded to six decimals.
    fn angle_to(&self, other: &Self) -> T {
        self.angle_to_with_precision(other, DEFAULT_ANGLE_PRECISION)
    }

    fn angle_to_with(&self, other: &Self, config: &MathConfig) -> T {
        self.angle_to_with_precision(other, config.angle_precision)
    }

    /// `acos(a.b / (|a| |b|))` in degrees, rounded to `precision` decimals.
    ///
    /// The cosine is clamped to `[-1, 1]` so that rounding drift on (anti)parallel
    /// vectors still yields 0 or 180 degrees. Zero-length operands yield NaN.
    fn angle_to_with_precision(&self, other: &Self, precision: u32) -> T {
        let cosine = self.dot(other) / (self.magnitude() * other.magnitude());
        cosine.clamp_unit().acos().to_degrees().round_to(precision)
    }
}

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, $arity:literal, ($($dim:ident / $setter:ident : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[derive(Clone, Copy, PartialEq, Debug)]
        pub struct $name<T = f64> {
            $($dim: T,)*
        }

        impl<T> $name<T> {
            pub const fn new($($dim: T),*) -> Self {
                Self {
                    $($dim),*
                }
            }
        }

        impl<T> $name<T>
        where T: Copy {
            $(
                pub fn $dim(&self) -> T {
                    self.$dim
                }
            )*

            pub fn splat(value: T) -> Self {
                Self {
                    $($dim: value,)*
                }
            }
        }

        impl<T> $name<T>
        where T: Float {
            /// Builds a vector, rejecting non-finite components.
            pub fn try_new($($dim: T),*) -> MathResult<Self> {
                Ok(Self {
                    $($dim: check_component($dim)?,)*
                })
            }

            /// Builds a vector from up to as many components as it has.
            ///
            /// No components yields the zero vector and a single component is
            /// copied to every axis. Otherwise missing trailing components are zero.
            pub fn from_partial(values: &[T]) -> MathResult<Self> {
                if values.len() > $arity {
                    return Err(invalid_argument(
                        ArgumentKind::Vector { arity: $arity },
                        format_args!("{} components", values.len()),
                    ));
                }
                if let [value] = values {
                    return Ok(Self::splat(check_component(*value)?));
                }

                let mut padded = [T::zero(); $arity];
                for (slot, value) in padded.iter_mut().zip(values) {
                    *slot = check_component(*value)?;
                }
                Ok(Self::from(padded))
            }

            $(
                pub fn $setter(&mut self, value: T) -> MathResult<()> {
                    self.$dim = check_scalar(value)?;
                    Ok(())
                }
            )*
        }

        impl<T> Vector<T> for $name<T>
        where T: Float {
            type Array = [T; $arity];

            fn dot(&self, other: &Self) -> T {
                let mut dot = T::zero();
                $(dot += self.$dim * other.$dim;)*
                dot
            }

            fn as_array(&self) -> Self::Array {
                [$(self.$dim),*]
            }
        }

        impl<T> Default for $name<T>
        where T: Zero {
            fn default() -> Self {
                Self {
                    $($dim: T::zero(),)*
                }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> AddAssign for $name<T>
        where
            T: Copy + Add<Output = T>, {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> SubAssign for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> MulAssign<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> DivAssign<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Debug,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl<T> From<($($TY),*)> for $name<T>
        where
            T: Copy {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($($TY),*)
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                ($(vector.$dim),*)
            }
        }

        impl<T> From<[T; $arity]> for $name<T> {
            fn from(value: [T; $arity]) -> Self {
                let [$($dim),*] = value;
                Self::new($($dim),*)
            }
        }

        impl<T> From<$name<T>> for [T; $arity] {
            fn from(value: $name<T>) -> Self {
                [$(value.$dim),*]
            }
        }

        impl<T> TryFrom<&[T]> for $name<T>
        where
            T: Float,
        {
            type Error = crate::error::MathError;

            fn try_from(values: &[T]) -> MathResult<Self> {
                if values.len() != $arity {
                    return Err(invalid_argument(
                        ArgumentKind::Vector { arity: $arity },
                        format_args!("{} components", values.len()),
                    ));
                }
                Ok(Self {
                    $($dim: check_component(values[$idx])?,)*
                })
            }
        }
    };
}

struct_vec!(Vector2: "Vector2: [{:?}, {:?}]", 2, (x / set_x: T => 0, y / set_y: T => 1,));
struct_vec!(Vector3: "Vector3: [{:?}, {:?}, {:?}]", 3, (x / set_x: T => 0, y / set_y: T => 1, z / set_z: T => 2,));

impl<T> Vector3<T>
where
    T: Copy + Float,
{
    /// Right-handed cross product.
    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}
