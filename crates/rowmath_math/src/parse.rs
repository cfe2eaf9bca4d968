//! Text input for vectors and matrices.
//!
//! Components may be separated by commas, semicolons or whitespace and wrapped
//! in any mix of brackets and parentheses, so `"1, 2, 3"`, `"(1 2 3)"` and
//! `"[[1, 0, 0], [0, 1, 0], [0, 0, 1]]"` are all accepted. Integers are read
//! as floats. Anything that is not a finite number is rejected.

use std::str::FromStr;

use crate::error::{check_component, invalid_argument, ArgumentKind, MathError, MathResult};
use crate::matrix::Matrix3;
use crate::number_traits::Float;
use crate::vector::{Vector2, Vector3};

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | '[' | ']' | '(' | ')')
}

/// Parses up to `N` components, returning them with the number actually read.
///
/// `noun` names the components in the error raised when there are more than `N`.
fn parse_components<T: Float, const N: usize>(
    s: &str,
    too_many: ArgumentKind,
    noun: &str,
) -> MathResult<([T; N], usize)> {
    let mut values = [T::zero(); N];
    let mut count = 0;

    for token in s.split(is_separator).filter(|token| !token.is_empty()) {
        if count == N {
            let total = s.split(is_separator).filter(|t| !t.is_empty()).count();
            return Err(invalid_argument(too_many, format_args!("{total} {noun}")));
        }
        let value = token
            .parse::<T>()
            .map_err(|_| invalid_argument(ArgumentKind::VectorComponent, token))?;
        values[count] = check_component(value)?;
        count += 1;
    }

    Ok((values, count))
}

impl<T: Float> FromStr for Vector2<T> {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (values, count) =
            parse_components::<T, 2>(s, ArgumentKind::Vector { arity: 2 }, "components")?;
        Self::from_partial(&values[..count])
    }
}

impl<T: Float> FromStr for Vector3<T> {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (values, count) =
            parse_components::<T, 3>(s, ArgumentKind::Vector { arity: 3 }, "components")?;
        Self::from_partial(&values[..count])
    }
}

impl<T: Float> FromStr for Matrix3<T> {
    type Err = MathError;

    /// Nine row-major values. A blank string yields the identity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (values, count) = parse_components::<T, 9>(s, ArgumentKind::Matrix, "values")?;
        match count {
            0 => Ok(Self::default()),
            9 => Ok(Self::with_values(values)),
            _ => Err(invalid_argument(
                ArgumentKind::Matrix,
                format_args!("{count} values"),
            )),
        }
    }
}
