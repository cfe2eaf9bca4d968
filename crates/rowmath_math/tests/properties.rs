use proptest::prelude::*;
use rowmath_math::{Identity, MathError, Matrix3, Vector, Vector3};

fn component() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3
}

fn integral_component() -> impl Strategy<Value = f64> {
    (-100_i32..100).prop_map(f64::from)
}

fn vector3() -> impl Strategy<Value = Vector3> {
    (component(), component(), component()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn integral_vector3() -> impl Strategy<Value = Vector3> {
    (integral_component(), integral_component(), integral_component())
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn largest_cell(m: &Matrix3) -> f64 {
    m.as_array().iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

fn matrix3() -> impl Strategy<Value = Matrix3> {
    prop::array::uniform9(component()).prop_map(Matrix3::with_values)
}

fn close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance * (1.0 + a.abs().max(b.abs()))
}

fn vectors_close(a: &Vector3, b: &Vector3, tolerance: f64) -> bool {
    a.as_array()
        .iter()
        .zip(b.as_array())
        .all(|(x, y)| close(*x, y, tolerance))
}

/// Cell-wise comparison scaled by the largest cell of `expected`.
fn matrices_close(actual: &Matrix3, expected: &Matrix3, tolerance: f64) -> bool {
    let bound = tolerance * (1.0 + largest_cell(expected));
    actual
        .as_array()
        .iter()
        .zip(expected.as_array())
        .all(|(x, y)| (x - y).abs() <= bound)
}

proptest! {
    #[test]
    fn components_round_trip(x in component(), y in component(), z in component()) {
        prop_assert_eq!(Vector3::new(x, y, z).as_array(), [x, y, z]);
        prop_assert_eq!(Vector3::try_new(x, y, z), Ok(Vector3::new(x, y, z)));
    }

    #[test]
    fn add_then_sub_is_identity(a in vector3(), b in vector3()) {
        prop_assert!(vectors_close(&(a + b - b), &a, 1e-12));
    }

    #[test]
    fn mul_then_div_is_identity(a in vector3(), k in prop_oneof![-1.0e3..-1.0e-3, 1.0e-3..1.0e3]) {
        prop_assert!(vectors_close(&((a * k) / k), &a, 1e-12));
    }

    #[test]
    fn normalized_has_unit_magnitude(a in vector3()) {
        prop_assume!(a.magnitude() > 1e-6);
        prop_assert!(close(a.normalized().magnitude(), 1.0, 1e-12));
    }

    #[test]
    fn cross_is_anticommutative(a in vector3(), b in vector3()) {
        prop_assert_eq!(a.cross(&b), -b.cross(&a));
    }

    #[test]
    fn dot_is_commutative(a in vector3(), b in vector3()) {
        prop_assert_eq!(a.dot(&b), b.dot(&a));
    }

    #[test]
    fn cross_is_orthogonal_to_operands(a in vector3(), b in vector3()) {
        let c = a.cross(&b);
        let scale = a.magnitude() * b.magnitude() * (a.magnitude() + b.magnitude()) + 1.0;
        prop_assert!(c.dot(&a).abs() <= 1e-9 * scale);
        prop_assert!(c.dot(&b).abs() <= 1e-9 * scale);
    }

    #[test]
    fn transpose_is_an_involution(m in matrix3()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn transpose_keeps_determinant(m in matrix3()) {
        let bound = 1e-10 * (1.0 + largest_cell(&m).powi(3));
        prop_assert!((m.transpose().determinant() - m.determinant()).abs() <= bound);
    }

    #[test]
    fn inverse_round_trips(m in matrix3()) {
        // Keep away from nearly singular matrices where the round trip loses precision.
        prop_assume!(m.determinant().abs() > 1e-3 * largest_cell(&m).powi(3));

        let inverse = m.inverse().unwrap();
        prop_assert!(matrices_close(&inverse.inverse().unwrap(), &m, 1e-6));
        prop_assert!(matrices_close(&(m * inverse), &Matrix3::identity(), 1e-6));
    }

    #[test]
    fn repeated_rows_are_singular(row in integral_vector3(), other in integral_vector3()) {
        let m = Matrix3::from_rows(row, other, row);

        prop_assert_eq!(m.determinant(), 0.0);
        prop_assert!(
            matches!(m.inverse(), Err(MathError::SingularMatrix { .. })),
            "expected singular matrix error"
        );
    }
}

#[test]
fn identity_inverse_is_identity() {
    let _ = env_logger::builder().is_test(true).try_init();

    let identity = Matrix3::<f64>::default();

    assert_eq!(identity.determinant(), 1.0);
    assert_eq!(identity.inverse(), Ok(identity));
}

#[test]
fn concrete_vector_scenarios() {
    assert_eq!(Vector3::new(0.0, 90.0, 0.0).magnitude(), 90.0);
    assert_eq!(
        Vector3::new(5.0, 4.0, 3.0).dot(&Vector3::new(10.0, 10.0, 10.0)),
        120.0
    );
    assert_eq!(
        Vector3::new(0.0, 0.0, 1.0).cross(&Vector3::new(1.0, 0.0, 0.0)),
        Vector3::new(0.0, 1.0, 0.0)
    );
    assert_eq!(
        Vector3::new(0.0, 0.0, 90.0).angle_to(&Vector3::new(1.0, 0.0, 0.0)),
        90.0
    );
    assert_eq!(
        Vector3::new(0.0, 0.0, 90.0).angle_to(&Vector3::new(1.0, 0.0, 1.0)),
        45.0
    );
}

#[test]
fn flat_identity_has_unit_determinant() {
    let m = Matrix3::with_values([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    assert_eq!(m, Matrix3::identity());
    assert_eq!(m.determinant(), 1.0);
}

#[test]
fn non_numeric_component_is_rejected() {
    let err = "a, 1, 1".parse::<Vector3>().unwrap_err();

    assert!(matches!(err, MathError::VectorComponentArgument { .. }));
}
