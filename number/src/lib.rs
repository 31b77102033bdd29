//! Numerical types used across modsum

mod modular;

pub use modular::{sum_mod, ModularSum};

use std::num::NonZeroU64;

/// The type of test case items and of the values written as results.
pub type Integer = u64;

/// A divisor. Zero can not be represented.
pub type Modulus = NonZeroU64;

/// Returns the value of `s` if it is a canonically written integer in the
/// inclusive range `[minimum_value, maximum_value]`, and None otherwise.
///
/// Leading zeroes (other than in `0` itself) and negative zero are not
/// allowed. A leading `+` is accepted.
pub fn to_integer(
    s: &str,
    minimum_value: Option<Integer>,
    maximum_value: Option<Integer>,
) -> Option<Integer> {
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    if s.starts_with("-0") {
        return None;
    }
    let value = s.parse::<Integer>().ok()?;
    if minimum_value.is_some_and(|min| value < min) {
        return None;
    }
    if maximum_value.is_some_and(|max| value > max) {
        return None;
    }
    Some(value)
}
