//! Numeric formatting for the script snapshot.
//!
//! The supervisory layer re-parses every snapshot line, so the float format
//! is a wire contract: exactly-integral values render with no decimal
//! digits, everything else with exactly two.

use core::fmt::Write;

/// Append `v` to `out` in the snapshot wire format.
///
/// `3.0` renders as `"3"`, `3.5` as `"3.50"`.
pub fn write_wire_float(out: &mut String, v: f32) {
    if v.fract() == 0.0 {
        let _ = write!(out, "{v:.0}");
    } else {
        let _ = write!(out, "{v:.2}");
    }
}

/// Convenience wrapper returning a fresh string.
pub fn wire_float(v: f32) -> String {
    let mut s = String::new();
    write_wire_float(&mut s, v);
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn integral_values_drop_decimals() {
        assert_eq!(wire_float(3.0), "3");
        assert_eq!(wire_float(0.0), "0");
        assert_eq!(wire_float(-17.0), "-17");
    }

    #[test]
    fn fractional_values_keep_two_decimals() {
        assert_eq!(wire_float(3.5), "3.50");
        assert_eq!(wire_float(0.25), "0.25");
        assert_eq!(wire_float(-1.75), "-1.75");
    }

    proptest! {
        #[test]
        fn whole_numbers_never_render_a_dot(n in -100_000i32..100_000) {
            prop_assert!(!wire_float(n as f32).contains('.'));
        }

        #[test]
        fn fractional_numbers_render_exactly_two_decimals(
            n in -100_000i32..100_000,
        ) {
            let v = n as f32 + 0.5;
            let s = wire_float(v);
            let dot = s.find('.').expect("fractional value must have a dot");
            prop_assert_eq!(s.len() - dot - 1, 2);
        }
    }
}
