//! Float tolerance shared by every comparison in the workspace.
//!
//! `approx_eq` is a predicate, not an ordering: it is not transitive and must
//! never back `PartialOrd`, `Ord` or `Hash` impls.

/// Convenience tolerance for callers without their own. Nothing in this crate
/// reads it implicitly; every comparison takes `epsilon` as an argument.
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// `true` when `a` and `b` differ by strictly less than `epsilon`.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_tolerance() {
        assert!(approx_eq(1.0, 1.0 + 1e-9, DEFAULT_EPSILON));
        assert!(approx_eq(-3.5, -3.5, 0.0001));
    }

    #[test]
    fn boundary_is_exclusive() {
        assert!(!approx_eq(0.0, 0.5, 0.5));
        assert!(approx_eq(0.0, 0.25, 0.5));
    }

    #[test]
    fn not_transitive() {
        let e = 0.1;
        assert!(approx_eq(0.0, 0.06, e));
        assert!(approx_eq(0.06, 0.12, e));
        assert!(!approx_eq(0.0, 0.12, e));
    }
}
