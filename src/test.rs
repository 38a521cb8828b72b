/// Check for equality between two components allowing for 16-bit rounding
/// errors.
///
/// Expected values in the tests are written with about six decimals, and a
/// byte channel only resolves steps of 1/255. A tolerance of `1 / i16::MAX`
/// accepts the rounding in the written values while still telling apart two
/// neighbouring byte levels.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1.0 / i16::MAX as f64);
    }};
}
