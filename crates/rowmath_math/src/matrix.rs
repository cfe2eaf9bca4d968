use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, Index, IndexMut, Mul, MulAssign};

use crate::error::{
    check_component, check_index, check_scalar, invalid_argument, ArgumentKind, MathResult,
};
use crate::number_traits::{Float, One, Zero};
use crate::vector::Vector3;

pub type Matrix3f = Matrix3<f32>;

/// Row-major 3x3 matrix.
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix3<T = f64> {
    values: [T; 9],
}

impl<T> Debug for Matrix3<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[")?;
        for i in 0..Self::ROWS {
            write!(f, "\t")?;
            for j in 0..Self::COLS {
                write!(f, "{}, ", self.values[i * Self::COLS + j])?;
            }
            writeln!(f)?;
        }
        writeln!(f, "]")
    }
}

impl<T> Display for Matrix3<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let v = &self.values;
        write!(
            f,
            "Matrix3: [[{:?}, {:?}, {:?}], [{:?}, {:?}, {:?}], [{:?}, {:?}, {:?}]]",
            v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8]
        )
    }
}

impl<T> Matrix3<T> {
    pub(crate) const COLS: usize = 3;
    pub(crate) const ROWS: usize = 3;

    /// Builds a matrix from nine row-major values.
    pub const fn with_values(values: [T; 9]) -> Self {
        Self { values }
    }
}

impl<T> Matrix3<T>
where
    T: Copy,
{
    #[rustfmt::skip]
    pub fn from_rows(row_0: Vector3<T>, row_1: Vector3<T>, row_2: Vector3<T>) -> Self {
        Self::with_values([
            row_0.x(), row_0.y(), row_0.z(),
            row_1.x(), row_1.y(), row_1.z(),
            row_2.x(), row_2.y(), row_2.z(),
        ])
    }

    pub fn as_array(&self) -> [T; 9] {
        self.values
    }

    pub fn as_rows(&self) -> [[T; 3]; 3] {
        [self.row_array(0), self.row_array(1), self.row_array(2)]
    }

    fn row_array(&self, row: usize) -> [T; 3] {
        let start = row * Self::COLS;
        [
            self.values[start],
            self.values[start + 1],
            self.values[start + 2],
        ]
    }

    pub fn row(&self, row: usize) -> MathResult<Vector3<T>> {
        let row = check_index(row, Self::ROWS)?;
        Ok(Vector3::from(self.row_array(row)))
    }

    pub fn column(&self, column: usize) -> MathResult<Vector3<T>> {
        let column = check_index(column, Self::COLS)?;
        Ok(Vector3::new(
            self.values[column],
            self.values[Self::COLS + column],
            self.values[Self::COLS * 2 + column],
        ))
    }

    /// Value at `row`, `column`, both in `0..3`.
    pub fn get(&self, row: usize, column: usize) -> MathResult<T> {
        let row = check_index(row, Self::ROWS)?;
        let column = check_index(column, Self::COLS)?;
        Ok(self.values[row * Self::COLS + column])
    }

    pub(crate) fn map_indexed(&self, f: impl Fn(usize, usize, T) -> T) -> Self {
        let mut values = self.values;
        for (index, value) in values.iter_mut().enumerate() {
            *value = f(index / Self::COLS, index % Self::COLS, *value);
        }
        Self { values }
    }
}

impl<T> Matrix3<T>
where
    T: Copy + Zero + One,
{
    /// Uniform scale: `value` on the diagonal.
    pub fn from_scale(value: T) -> Self {
        Self::from_diagonal(value, value, value)
    }

    #[rustfmt::skip]
    pub fn from_diagonal(a: T, b: T, c: T) -> Self {
        Self::with_values([
            a, T::zero(), T::zero(),
            T::zero(), b, T::zero(),
            T::zero(), T::zero(), c,
        ])
    }
}

impl<T> Matrix3<T>
where
    T: Float,
{
    /// Builds a matrix from three row slices of three finite values each.
    pub fn try_from_rows(rows: &[&[T]]) -> MathResult<Self> {
        if rows.len() != Self::ROWS {
            return Err(invalid_argument(
                ArgumentKind::Matrix,
                format_args!("{} rows", rows.len()),
            ));
        }

        let mut values = [T::zero(); 9];
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != Self::COLS {
                return Err(invalid_argument(
                    ArgumentKind::Matrix,
                    format_args!("row {row} with {} values", cells.len()),
                ));
            }
            for (column, cell) in cells.iter().enumerate() {
                values[row * Self::COLS + column] = check_component(*cell)?;
            }
        }

        Ok(Self { values })
    }

    /// Replaces a row. The matrix is left untouched if any value is not finite.
    pub fn set_row(&mut self, row: usize, values: Vector3<T>) -> MathResult<()> {
        let row = check_index(row, Self::ROWS)?;
        let mut cells = <[T; 3]>::from(values);
        for cell in &mut cells {
            *cell = check_scalar(*cell)?;
        }

        let start = row * Self::COLS;
        self.values[start..start + Self::COLS].copy_from_slice(&cells);
        Ok(())
    }

    pub fn transform_vec(&self, vec: &Vector3<T>) -> Vector3<T> {
        let row = |i: usize| {
            self.values[i * Self::COLS] * vec.x()
                + self.values[i * Self::COLS + 1] * vec.y()
                + self.values[i * Self::COLS + 2] * vec.z()
        };
        Vector3::new(row(0), row(1), row(2))
    }
}

impl<T> Default for Matrix3<T>
where
    T: One + Zero,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Mul<Self> for Matrix3<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut values = [T::zero(); 9];

        for j in 0..Self::ROWS {
            for i in 0..Self::COLS {
                values[j * Self::COLS + i] = self.values[j * Self::COLS] * rhs.values[i]
                    + self.values[j * Self::COLS + 1] * rhs.values[i + Self::COLS]
                    + self.values[j * Self::COLS + 2] * rhs.values[i + Self::COLS * 2];
            }
        }

        Self { values }
    }
}

impl<T> MulAssign<Self> for Matrix3<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T> Mul<Vector3<T>> for Matrix3<T>
where
    T: Float,
{
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        self.transform_vec(&rhs)
    }
}

impl<T> Index<usize> for Matrix3<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index * Self::COLS..index * Self::COLS + Self::COLS]
    }
}

impl<T> IndexMut<usize> for Matrix3<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index * Self::COLS..index * Self::COLS + Self::COLS]
    }
}

impl<T> From<[[T; 3]; 3]> for Matrix3<T>
where
    T: Copy,
{
    fn from(rows: [[T; 3]; 3]) -> Self {
        Self::from_rows(rows[0].into(), rows[1].into(), rows[2].into())
    }
}

impl<T> From<Matrix3<T>> for [[T; 3]; 3]
where
    T: Copy,
{
    fn from(matrix: Matrix3<T>) -> Self {
        matrix.as_rows()
    }
}

impl<T> TryFrom<&[T]> for Matrix3<T>
where
    T: Float,
{
    type Error = crate::error::MathError;

    fn try_from(values: &[T]) -> MathResult<Self> {
        let values: [T; 9] = values.try_into().map_err(|_| {
            invalid_argument(
                ArgumentKind::Matrix,
                format_args!("{} values", values.len()),
            )
        })?;
        for value in values {
            check_component(value)?;
        }
        Ok(Self { values })
    }
}

pub trait Identity {
    fn identity() -> Self;
}

#[rustfmt::skip]
impl<T> Identity for Matrix3<T>
    where T: One + Zero {
    fn identity() -> Self {
        Self {
            values: [
                T::one(), T::zero(), T::zero(),
                T::zero(), T::one(), T::zero(),
                T::zero(), T::zero(), T::one(),
            ]
        }
    }
}
