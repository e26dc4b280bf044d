//! # Validation Engine
//!
//! Pure character-class and price checks. Labels and namespace keys share one
//! rule; only pricing differs between public and private namespaces.

use crate::config::MAX_LABEL_LEN;
use crate::domain::value_objects::U256;

/// Returns true iff `s` is a valid label or namespace key.
///
/// Rules:
/// - 1 to 20 bytes long
/// - only `[a-z0-9-]`
/// - no leading or trailing `-`
/// - no `--`
#[must_use]
pub fn is_valid_label_or_namespace(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_LABEL_LEN {
        return false;
    }
    if bytes[0] == b'-' || bytes[bytes.len() - 1] == b'-' {
        return false;
    }

    let mut prev_hyphen = false;
    for &b in bytes {
        let hyphen = b == b'-';
        if !(b.is_ascii_lowercase() || b.is_ascii_digit() || hyphen) {
            return false;
        }
        if hyphen && prev_hyphen {
            return false;
        }
        prev_hyphen = hyphen;
    }
    true
}

/// Price rule a namespace price failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRule {
    /// Below the minimum for the namespace kind.
    BelowMinimum,
    /// Not a multiple of the price step (or the step is zero).
    NotStepMultiple,
}

/// Checks `price` against `min_price` then `step`, reporting the first rule broken.
///
/// # Errors
///
/// Returns [`PriceRule::BelowMinimum`] when `price < min_price`, otherwise
/// [`PriceRule::NotStepMultiple`] when `price` is not a multiple of a non-zero `step`.
pub fn check_price(price: U256, min_price: U256, step: U256) -> Result<(), PriceRule> {
    if price < min_price {
        return Err(PriceRule::BelowMinimum);
    }
    if !is_step_multiple(price, step) {
        return Err(PriceRule::NotStepMultiple);
    }
    Ok(())
}

/// Returns true iff `price >= min_price` and `price` is a multiple of `step`.
///
/// A zero step accepts no price.
#[must_use]
pub fn is_price_valid(price: U256, min_price: U256, step: U256) -> bool {
    check_price(price, min_price, step).is_ok()
}

/// Returns true iff `price` is a multiple of a non-zero `step`.
#[must_use]
pub fn is_step_multiple(price: U256, step: U256) -> bool {
    !step.is_zero() && (price % step).is_zero()
}
