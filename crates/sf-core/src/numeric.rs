use crate::{SfError, SfResult};

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Absolute + relative comparison tolerance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Loose tolerance for comparing balances after a few float ops.
    pub const BALANCE: Tolerances = Tolerances {
        abs: 1e-6,
        rel: 1e-9,
    };
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> SfResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SfError::NonFinite { what, value: v })
    }
}

/// `true` when `v` lies in the closed unit interval. NaN is never in range.
pub fn in_unit_interval(v: Real) -> bool {
    (0.0..=1.0).contains(&v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn balance_tolerance_accepts_micro_drift() {
        assert!(nearly_equal(30.0, 30.0 + 5e-7, Tolerances::BALANCE));
        assert!(!nearly_equal(30.0, 30.01, Tolerances::BALANCE));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn unit_interval_edges() {
        assert!(in_unit_interval(0.0));
        assert!(in_unit_interval(1.0));
        assert!(!in_unit_interval(-0.1));
        assert!(!in_unit_interval(1.1));
        assert!(!in_unit_interval(Real::NAN));
    }

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::BALANCE;
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
