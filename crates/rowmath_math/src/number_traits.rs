use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub trait Zero {
    fn zero() -> Self;
}

impl Zero for f32 {
    fn zero() -> Self {
        0.0
    }
}

impl Zero for f64 {
    fn zero() -> Self {
        0.0
    }
}

pub trait One {
    fn one() -> Self;
}

impl One for f32 {
    fn one() -> Self {
        1.0
    }
}

impl One for f64 {
    fn one() -> Self {
        1.0
    }
}

/// Tolerance-aware zero test.
///
/// Values whose magnitude does not exceed `tolerance` count as zero. A tolerance
/// of `0.0` only accepts exact (signed) zeros.
pub trait IsZero {
    fn is_zero_within(&self, tolerance: f64) -> bool;

    fn is_zero(&self) -> bool {
        self.is_zero_within(0.0)
    }
}

impl IsZero for f32 {
    fn is_zero_within(&self, tolerance: f64) -> bool {
        f64::from(self.abs()) <= tolerance
    }
}

impl IsZero for f64 {
    fn is_zero_within(&self, tolerance: f64) -> bool {
        self.abs() <= tolerance
    }
}

pub trait NumericOps:
    Sized
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
    + PartialOrd
{
}

impl NumericOps for f32 {}

impl NumericOps for f64 {}

/// Floating point component type shared by vectors and matrices.
pub trait Float:
    Debug + Display + Copy + Default + Zero + One + IsZero + NumericOps + std::str::FromStr
{
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn acos(self) -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn to_radians(self) -> Self;
    fn to_degrees(self) -> Self;
    fn is_finite(self) -> bool;
    /// Rounds half away from zero to `decimals` places.
    fn round_to(self, decimals: u32) -> Self;
    fn clamp_unit(self) -> Self;
    fn to_f64(self) -> f64;
}

impl Float for f32 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn acos(self) -> Self {
        self.acos()
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn abs(self) -> Self {
        self.abs()
    }

    fn to_radians(self) -> Self {
        self.to_radians()
    }

    fn to_degrees(self) -> Self {
        self.to_degrees()
    }

    fn is_finite(self) -> bool {
        self.is_finite()
    }

    fn round_to(self, decimals: u32) -> Self {
        let factor = 10_f32.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
        let scaled = self * factor;
        if scaled.is_finite() {
            scaled.round() / factor
        } else {
            self
        }
    }

    fn clamp_unit(self) -> Self {
        self.clamp(-1.0, 1.0)
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Float for f64 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn acos(self) -> Self {
        self.acos()
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn abs(self) -> Self {
        self.abs()
    }

    fn to_radians(self) -> Self {
        self.to_radians()
    }

    fn to_degrees(self) -> Self {
        self.to_degrees()
    }

    fn is_finite(self) -> bool {
        self.is_finite()
    }

    fn round_to(self, decimals: u32) -> Self {
        let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
        let scaled = self * factor;
        if scaled.is_finite() {
            scaled.round() / factor
        } else {
            self
        }
    }

    fn clamp_unit(self) -> Self {
        self.clamp(-1.0, 1.0)
    }

    fn to_f64(self) -> f64 {
        self
    }
}
