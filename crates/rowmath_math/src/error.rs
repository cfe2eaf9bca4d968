//! Error types for vector and matrix operations.
//!
//! All fallible operations return [`MathResult<T>`]. Validation happens at the
//! API boundary before any value is written, so a failed setter or `try_*` call
//! leaves its receiver untouched.

use std::fmt::Display;

use thiserror::Error;

use crate::number_traits::Float;

/// The kind of argument an operation expected.
///
/// Used together with [`invalid_argument`] to build a descriptive error for an
/// offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// A vector of a given arity.
    Vector { arity: usize },
    /// A single vector component.
    VectorComponent,
    /// A finite scalar operand.
    Scalar,
    /// A 3x3 matrix, or one of its rows.
    Matrix,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    #[error("argument must be a vector with {expected} components, got: {found}")]
    VectorArgument { expected: usize, found: String },

    #[error("vector components must be finite numbers, got: {found}")]
    VectorComponentArgument { found: String },

    #[error("argument must be a finite number, got: {found}")]
    NumTypeArgument { found: String },

    #[error("argument must be a 3x3 matrix, got: {found}")]
    MatrixArgument { found: String },

    #[error("matrix is singular (determinant {determinant}) and cannot be inverted")]
    SingularMatrix { determinant: f64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unsupported rotation order: {0:?} (expected \"zyx\" or \"xyz\")")]
    UnsupportedRotationOrder(String),
}

pub type MathResult<T> = Result<T, MathError>;

/// Builds the error matching `kind` for an offending value.
///
/// `observed` is only rendered into the message; callers never inspect it
/// afterwards.
pub fn invalid_argument(kind: ArgumentKind, observed: impl Display) -> MathError {
    let found = observed.to_string();
    match kind {
        ArgumentKind::Vector { arity } => MathError::VectorArgument {
            expected: arity,
            found,
        },
        ArgumentKind::VectorComponent => MathError::VectorComponentArgument { found },
        ArgumentKind::Scalar => MathError::NumTypeArgument { found },
        ArgumentKind::Matrix => MathError::MatrixArgument { found },
    }
}

/// Rejects NaN and infinite vector components.
pub fn check_component<T: Float>(value: T) -> MathResult<T> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid_argument(ArgumentKind::VectorComponent, value))
    }
}

/// Rejects NaN and infinite scalar operands.
pub fn check_scalar<T: Float>(value: T) -> MathResult<T> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid_argument(ArgumentKind::Scalar, value))
    }
}

pub(crate) fn check_index(index: usize, len: usize) -> MathResult<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(MathError::IndexOutOfRange { index, len })
    }
}
