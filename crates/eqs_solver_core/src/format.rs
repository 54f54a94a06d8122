//! ASCII-ish rendering of coefficients and roots for step expressions.

/// Render a coefficient the way it appears inside an equation (`2`, `-4`, `0.5`).
///
/// Negative zero is printed as `0`.
pub fn display_number(value: f64) -> String {
    format!("{}", value + 0.0)
}

/// Render a root with two decimals (`4.00`, `-2.00`).
///
/// Values that round to zero print as `0.00`, never `-0.00`.
pub fn display_root(value: f64) -> String {
    let rendered = format!("{:.2}", value);
    if rendered == "-0.00" {
        "0.00".to_string()
    } else {
        rendered
    }
}

/// Render `coef·x + constant = 0` in the compact form used by the linear steps,
/// e.g. `2x-8=0` or `0.5x+3=0`.
pub fn display_linear_form(coef: f64, constant: f64) -> String {
    let sign = if constant < 0.0 { '-' } else { '+' };
    format!(
        "{}x{}{}=0",
        display_number(coef),
        sign,
        display_number(constant.abs())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_trailing_zero_fraction() {
        assert_eq!(display_number(2.0), "2");
        assert_eq!(display_number(-4.0), "-4");
        assert_eq!(display_number(0.5), "0.5");
        assert_eq!(display_number(-0.0), "0");
    }

    #[test]
    fn roots_use_two_decimals() {
        assert_eq!(display_root(4.0), "4.00");
        assert_eq!(display_root(-2.0), "-2.00");
        assert_eq!(display_root(1.0 / 3.0), "0.33");
        assert_eq!(display_root(-0.0), "0.00");
        assert_eq!(display_root(-0.001), "0.00");
    }

    #[test]
    fn linear_form_carries_constant_sign() {
        assert_eq!(display_linear_form(2.0, -8.0), "2x-8=0");
        assert_eq!(display_linear_form(-1.5, 3.0), "-1.5x+3=0");
        assert_eq!(display_linear_form(1.0, 0.0), "1x+0=0");
    }
}
