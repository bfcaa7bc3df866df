//! Integer arithmetic for stat values.
//!
//! Stats are non-negative integers and every step of the formula floors
//! its result. Rational steps are computed exactly in `u64`; only the
//! nature multiplier goes through `f64`.

/// Type alias for stat values.
pub type StatValue = u32;

/// `floor(value * numerator / denominator)`, computed exactly.
///
/// Saturates at `StatValue::MAX` instead of wrapping.
///
/// # Examples
///
/// ```rust
/// use petstat::numeric::floor_ratio;
///
/// assert_eq!(floor_ratio(378, 3, 2), 567);
/// assert_eq!(floor_ratio(378, 2, 3), 252);
/// ```
pub fn floor_ratio(value: StatValue, numerator: u64, denominator: u64) -> StatValue {
    debug_assert!(denominator > 0);
    let scaled = value as u64 * numerator / denominator;
    StatValue::try_from(scaled).unwrap_or(StatValue::MAX)
}

/// `floor(value * factor)` in floating point, floored once.
pub fn floor_scale(value: StatValue, factor: f64) -> StatValue {
    let scaled = (value as f64 * factor).floor();
    if scaled <= 0.0 {
        0
    } else if scaled >= StatValue::MAX as f64 {
        StatValue::MAX
    } else {
        scaled as StatValue
    }
}

/// Parse the leading integer of user text.
///
/// Accepts leading whitespace, an optional sign, then at least one digit;
/// anything after the digits is ignored. Returns `None` when no digit leads.
///
/// # Examples
///
/// ```rust
/// use petstat::numeric::parse_leading_int;
///
/// assert_eq!(parse_leading_int(" 42abc"), Some(42));
/// assert_eq!(parse_leading_int("-7"), Some(-7));
/// assert_eq!(parse_leading_int("abc"), None);
/// ```
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = rest[..digits_len]
        .bytes()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add((d - b'0') as i64));
    Some(if negative { -magnitude } else { magnitude })
}
