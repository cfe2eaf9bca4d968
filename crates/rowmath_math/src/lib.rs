#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algebra;
pub mod config;
pub mod error;
pub mod matrix;
mod number_traits;
mod parse;
pub mod vector;

pub use algebra::RotationOrder;
pub use config::{MathConfig, ZeroDivisionPolicy, DEFAULT_ANGLE_PRECISION};
pub use error::{MathError, MathResult};
pub use matrix::{Identity, Matrix3, Matrix3f};
pub use number_traits::Float;
pub use vector::{Vector, Vector2, Vector2f, Vector3, Vector3f};
