//! Numeric Formatting Module
//! Locale-free conversion of f64 values for pgfplots coordinate lists.

/// Format a coordinate component.
///
/// Uses Rust's shortest round-trip representation: `0.0` renders as `0`,
/// `2.5` as `2.5`. Output never depends on the system locale.
pub fn coord(value: f64) -> String {
    format!("{}", value)
}

/// Format an error-pair component.
///
/// Same as [`coord`] except the result always carries a decimal point:
/// `0.0` renders as `0.0`, `1.0` as `1.0`. pgfplots error entries are
/// conventionally written as floats even when the value is integral.
pub fn error(value: f64) -> String {
    let s = format!("{}", value);
    if s.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        format!("{}.0", s)
    } else {
        s
    }
}
