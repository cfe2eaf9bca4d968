pub use rowmath_math as math;

pub mod prelude {
    pub use rowmath_math::{
        Identity, MathConfig, MathError, MathResult, Matrix3, RotationOrder, Vector, Vector2,
        Vector3, ZeroDivisionPolicy,
    };
}
