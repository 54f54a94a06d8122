//! Numeric property tests for the linear and quadratic strategies.
//!
//! Displayed roots are rounded to two decimals, so they are compared against
//! the exact root with a half-cent tolerance; substitution back into the
//! polynomial uses the unrounded roots.

use crate::quadratic::{discriminant, roots_from_discriminant};
use crate::{solve, ErrorKind};
use proptest::prelude::*;

const DISPLAY_EPS: f64 = 0.005 + 1e-9;

fn parse_single_root(result: &str) -> f64 {
    result
        .trim_start_matches("x = ")
        .trim_end_matches(" (solution double)")
        .parse()
        .unwrap_or_else(|_| panic!("not a single root: {result}"))
}

fn parse_two_roots(result: &str) -> (f64, f64) {
    let (first, second) = result
        .split_once(", ")
        .unwrap_or_else(|| panic!("not two roots: {result}"));
    let x1 = first.trim_start_matches("x₁ = ").parse().unwrap();
    let x2 = second.trim_start_matches("x₂ = ").parse().unwrap();
    (x1, x2)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn linear_root_matches_closed_form(a in -50i64..50, b in -100i64..100) {
        prop_assume!(a != 0);
        let out = solve(format!("{a}x{b:+}=0"));
        prop_assert!(out.error.is_none(), "unexpected error {:?}", out.error);
        let expected = -(b as f64) / (a as f64);
        let got = parse_single_root(&out.result);
        prop_assert!((got - expected).abs() <= DISPLAY_EPS, "got {got}, expected {expected}");
    }

    #[test]
    fn quadratic_roots_satisfy_polynomial(a in 1i64..10, b in -20i64..20, c in -20i64..20, neg in any::<bool>()) {
        let a = if neg { -a } else { a };
        let (af, bf, cf) = (a as f64, b as f64, c as f64);
        let delta = discriminant(af, bf, cf);
        prop_assume!(delta > 0.0);

        let (r1, r2) = roots_from_discriminant(af, bf, delta);
        for r in [r1, r2] {
            prop_assert!((af * r * r + bf * r + cf).abs() < 0.01);
        }

        let out = solve(format!("{a}x^2{b:+}x{c:+}=0"));
        prop_assert!(out.error.is_none(), "unexpected error {:?}", out.error);
        let (x1, x2) = parse_two_roots(&out.result);
        prop_assert!((x1 - r1).abs() <= DISPLAY_EPS);
        prop_assert!((x2 - r2).abs() <= DISPLAY_EPS);
    }

    #[test]
    fn negative_discriminant_never_yields_a_result(a in 1i64..10, b in -20i64..20, c in -20i64..20) {
        prop_assume!(discriminant(a as f64, b as f64, c as f64) < 0.0);
        let out = solve(format!("{a}x^2{b:+}x{c:+}=0"));
        prop_assert_eq!(out.error_kind, Some(ErrorKind::NoRealSolutionError));
        prop_assert!(out.result.is_empty());
    }

    #[test]
    fn cancelled_square_matches_linear(b in -30i64..30, c in -30i64..30) {
        prop_assume!(b != 0);
        let degenerate = solve(format!("x^2{b:+}x{c:+}=x^2"));
        let linear = solve(format!("{b}x{c:+}=0"));
        prop_assert_eq!(degenerate.result, linear.result);
        prop_assert_eq!(degenerate.error, linear.error);
    }

    #[test]
    fn solving_is_idempotent(input in "[x0-9+=^. -]{0,14}") {
        prop_assert_eq!(solve(input.as_str()), solve(input.as_str()));
    }
}

#[test]
fn double_root_is_labelled() {
    let out = solve("x^2 + 2x + 1 = 0");
    assert_eq!(out.result, "x = -1.00 (solution double)");
    assert!((parse_single_root(&out.result) + 1.0).abs() < 1e-9);
}
