use crate::error::{MathError, MathResult};
use crate::number_traits::Float;

/// Number of decimals `angle_to` rounds to.
pub const DEFAULT_ANGLE_PRECISION: u32 = 6;

/// What a checked division does when the divisor is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroDivisionPolicy {
    /// Divide anyway and let the components become infinite or NaN.
    #[default]
    Ieee,
    /// Fail with [`MathError::DivisionByZero`].
    Error,
}

impl ZeroDivisionPolicy {
    pub(crate) fn check_divisor<T: Float>(self, divisor: T) -> MathResult<T> {
        match self {
            Self::Error if divisor.is_zero() => Err(MathError::DivisionByZero),
            _ => Ok(divisor),
        }
    }
}

/// Tunables for the fallible vector and matrix operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MathConfig {
    pub zero_division: ZeroDivisionPolicy,
    pub angle_precision: u32,
    /// Determinants whose magnitude does not exceed this are treated as singular.
    pub singular_tolerance: f64,
}

impl MathConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_zero_division(mut self, policy: ZeroDivisionPolicy) -> Self {
        self.zero_division = policy;
        self
    }

    #[must_use]
    pub fn with_angle_precision(mut self, decimals: u32) -> Self {
        self.angle_precision = decimals;
        self
    }

    #[must_use]
    pub fn with_singular_tolerance(mut self, tolerance: f64) -> Self {
        self.singular_tolerance = tolerance.abs();
        self
    }
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            zero_division: ZeroDivisionPolicy::Ieee,
            angle_precision: DEFAULT_ANGLE_PRECISION,
            singular_tolerance: 0.0,
        }
    }
}
