//! Property-based tests for matrix algebra using proptest.

use proptest::prelude::*;
use tracer_math::transform::{rotation_x, scaling, translation};
use tracer_math::{Matrix, Tuple};

const EPS: f64 = 1e-8;

// ── Strategies ───────────────────────────────────────────────────────

fn matrix(n: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(-10.0f64..10.0, n * n).prop_map(move |data| {
        let rows: Vec<&[f64]> = data.chunks(n).collect();
        Matrix::from_rows(&rows).expect("generated rows are uniform")
    })
}

fn sized_matrix() -> impl Strategy<Value = Matrix> {
    (2usize..=4).prop_flat_map(matrix)
}

// ── Algebraic identities ─────────────────────────────────────────────

proptest! {
    /// Transposing twice is a no-op.
    #[test]
    fn transpose_is_involution(a in sized_matrix()) {
        prop_assert!(a.transpose().transpose().approx_eq(&a, EPS));
    }

    /// The identity is neutral on both sides.
    #[test]
    fn identity_is_neutral(a in sized_matrix()) {
        let id = Matrix::identity(a.width());
        prop_assert!(a.multiply(&id).unwrap().approx_eq(&a, EPS));
        prop_assert!(id.multiply(&a).unwrap().approx_eq(&a, EPS));
    }

    /// A · A⁻¹ ≈ I whenever the determinant is comfortably away from zero.
    #[test]
    fn inverse_recovers_identity(a in sized_matrix()) {
        prop_assume!(a.determinant().abs() > 1.0);
        let inv = a.inverse(EPS).unwrap();
        let id = Matrix::identity(a.width());
        prop_assert!(a.multiply(&inv).unwrap().approx_eq(&id, 1e-6),
            "A·A⁻¹ =\n{}", a.multiply(&inv).unwrap());
    }

    /// det(Aᵀ) = det(A).
    #[test]
    fn determinant_survives_transpose(a in sized_matrix()) {
        let (d, dt) = (a.determinant(), a.transpose().determinant());
        prop_assert!((d - dt).abs() <= 1e-9 * d.abs().max(1.0));
    }

    /// A repeated row always makes the matrix singular.
    #[test]
    fn repeated_row_is_singular(a in matrix(4)) {
        let mut b = a.clone();
        for c in 0..4 {
            b.set(3, c, a.get(0, c));
        }
        prop_assert!(b.inverse(1e-6).is_err());
    }

    /// Applying A, B, C in sequence equals applying C·B·A once.
    #[test]
    fn composition_matches_sequence(
        angle in -6.3f64..6.3,
        s in 0.1f64..5.0,
        (tx, ty, tz) in (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0),
        (x, y, z) in (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0),
    ) {
        let (a, b, c) = (rotation_x(angle), scaling(s, s, s), translation(tx, ty, tz));
        let p = Tuple::point(x, y, z);
        let sequential = &c * (&b * (&a * p));
        let combined = &(&c * &b) * &a;
        prop_assert!((&combined * p).approx_eq(&sequential, 1e-9));
    }
}
