//! Determinant, cofactor expansion and adjugate inversion of [`Matrix3`].
//!
//! Every operation is available as a free function over an explicit matrix and
//! as a method on the receiver. The inverse is assembled step by step:
//!
//! ```text
//! inverse(M) = adjugate(det(M), transpose(cofactor(minors(M))))
//! ```
//!
//! Reordering the steps gives a different (wrong) matrix, so the pipeline is only
//! exposed through [`inverse`] and [`Matrix3::inverse`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::{debug, trace, warn};

use crate::config::MathConfig;
use crate::error::{MathError, MathResult};
use crate::matrix::Matrix3;
use crate::number_traits::Float;
use crate::vector::Vector3;

/// `a(ei - fh) - b(di - fg) + c(dh - eg)` for rows `(a b c) (d e f) (g h i)`.
///
/// A zero result is a valid answer and marks the matrix as singular.
pub fn determinant<T: Float>(m: &Matrix3<T>) -> T {
    let (a, b, c) = (m[0][0], m[0][1], m[0][2]);
    let (d, e, f) = (m[1][0], m[1][1], m[1][2]);
    let (g, h, i) = (m[2][0], m[2][1], m[2][2]);

    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

/// Each cell replaced by the determinant of the 2x2 submatrix left after
/// deleting that cell's row and column.
///
/// ```text
/// |a b c|    |ei-hf  di-gf  dh-ge|
/// |d e f| -> |bi-hc  ai-gc  ah-gb|
/// |g h i|    |bf-ec  af-dc  ae-db|
/// ```
#[rustfmt::skip]
pub fn matrix_of_minors<T: Float>(m: &Matrix3<T>) -> Matrix3<T> {
    let (a, b, c) = (m[0][0], m[0][1], m[0][2]);
    let (d, e, f) = (m[1][0], m[1][1], m[1][2]);
    let (g, h, i) = (m[2][0], m[2][1], m[2][2]);

    Matrix3::with_values([
        e * i - h * f, d * i - g * f, d * h - g * e,
        b * i - h * c, a * i - g * c, a * h - g * b,
        b * f - e * c, a * f - d * c, a * e - d * b,
    ])
}

/// Applies the checkerboard sign pattern `(+ - +) (- + -) (+ - +)`.
pub fn cofactor_matrix<T: Float>(m: &Matrix3<T>) -> Matrix3<T> {
    m.map_indexed(|row, column, value| {
        if (row + column) % 2 == 0 {
            value
        } else {
            -value
        }
    })
}

pub fn transpose<T: Float>(m: &Matrix3<T>) -> Matrix3<T> {
    m.map_indexed(|row, column, _| m[column][row])
}

/// Divides every cell of `transposed_cofactor` by `determinant`.
///
/// Fails with [`MathError::SingularMatrix`] when the determinant is zero or not
/// finite, or when a cell of the result overflows.
pub fn adjugate<T: Float>(determinant: T, transposed_cofactor: &Matrix3<T>) -> MathResult<Matrix3<T>> {
    adjugate_within(determinant, transposed_cofactor, 0.0)
}

fn adjugate_within<T: Float>(
    determinant: T,
    transposed_cofactor: &Matrix3<T>,
    tolerance: f64,
) -> MathResult<Matrix3<T>> {
    if !determinant.is_finite() || determinant.is_zero_within(tolerance) {
        debug!("rejecting singular matrix with determinant {determinant}");
        return Err(MathError::SingularMatrix {
            determinant: determinant.to_f64(),
        });
    }

    let inverse = transposed_cofactor.map_indexed(|_, _, value| value / determinant);
    if inverse.as_array().iter().any(|value| !value.is_finite()) {
        debug!("rejecting matrix whose adjugate overflows, determinant {determinant}");
        return Err(MathError::SingularMatrix {
            determinant: determinant.to_f64(),
        });
    }

    Ok(inverse)
}

pub fn inverse<T: Float>(m: &Matrix3<T>) -> MathResult<Matrix3<T>> {
    inverse_with(m, &MathConfig::default())
}

/// Inverse, treating determinants within `config.singular_tolerance` of zero as singular.
pub fn inverse_with<T: Float>(m: &Matrix3<T>, config: &MathConfig) -> MathResult<Matrix3<T>> {
    let determinant = determinant(m);
    trace!("inverting matrix with determinant {determinant}");

    let minors = matrix_of_minors(m);
    let cofactor = cofactor_matrix(&minors);
    let transposed_cofactor = transpose(&cofactor);

    adjugate_within(determinant, &transposed_cofactor, config.singular_tolerance)
}

/// The order the per-axis rotations are composed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationOrder {
    /// `Rz * Ry * Rx`: x is applied first.
    #[default]
    Zyx,
    /// `Rx * Ry * Rz`: z is applied first.
    Xyz,
}

impl FromStr for RotationOrder {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zyx" => Ok(Self::Zyx),
            "xyz" => Ok(Self::Xyz),
            _ => {
                warn!("unsupported rotation order {s:?}");
                Err(MathError::UnsupportedRotationOrder(s.to_string()))
            }
        }
    }
}

impl Display for RotationOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zyx => write!(f, "zyx"),
            Self::Xyz => write!(f, "xyz"),
        }
    }
}

/// Rotation matrix from Euler angles given in degrees around x, y and z.
#[rustfmt::skip]
pub fn rotation_matrix<T: Float>(rotation_degrees: &Vector3<T>, order: RotationOrder) -> Matrix3<T> {
    trace!("building {order} rotation from {rotation_degrees}");
    let (sx, cx) = sin_cos(rotation_degrees.x());
    let (sy, cy) = sin_cos(rotation_degrees.y());
    let (sz, cz) = sin_cos(rotation_degrees.z());

    match order {
        RotationOrder::Zyx => Matrix3::with_values([
            cy * cz, cz * sx * sy - cx * sz, cx * cz * sy + sx * sz,
            cy * sz, cx * cz + sx * sy * sz, -cz * sx + cx * sy * sz,
            -sy, cy * sx, cx * cy,
        ]),
        RotationOrder::Xyz => Matrix3::with_values([
            cy * cz, -cy * sz, sy,
            cx * sz + sx * sy * cz, cx * cz - sx * sy * sz, -sx * cy,
            sx * sz - cx * sy * cz, sx * cz + cx * sy * sz, cx * cy,
        ]),
    }
}

fn sin_cos<T: Float>(degrees: T) -> (T, T) {
    let radians = degrees.to_radians();
    (radians.sin(), radians.cos())
}

impl<T> Matrix3<T>
where
    T: Float,
{
    pub fn determinant(&self) -> T {
        determinant(self)
    }

    #[must_use]
    pub fn matrix_of_minors(&self) -> Self {
        matrix_of_minors(self)
    }

    #[must_use]
    pub fn cofactor_matrix(&self) -> Self {
        cofactor_matrix(self)
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        transpose(self)
    }

    pub fn inverse(&self) -> MathResult<Self> {
        inverse(self)
    }

    pub fn inverse_with(&self, config: &MathConfig) -> MathResult<Self> {
        inverse_with(self, config)
    }

    pub fn from_rotation(rotation_degrees: &Vector3<T>, order: RotationOrder) -> Self {
        rotation_matrix(rotation_degrees, order)
    }
}
