//! Phone-number masking for donors shown to unauthenticated callers.
//!
//! Cosmetic only: it hides the middle digits from casual viewing and is not
//! an access-control boundary.

use regex::Captures;

use crate::shared::constants::PHONE_MASK;
use crate::shared::validation::PHONE_MASK_REGEX;

/// Keep the first three and the last three digits and replace everything in
/// between with a fixed four-character mask, whatever the middle's length.
/// Only the first digit run long enough (10+) is touched; shorter inputs come
/// back unchanged.
///
/// `01712345678` becomes `017****678`.
pub fn mask_phone_number(phone: &str) -> String {
    if phone.is_empty() {
        return String::new();
    }

    PHONE_MASK_REGEX
        .replacen(phone, 1, |caps: &Captures| {
            format!("{}{}{}", &caps[1], PHONE_MASK, &caps[2])
        })
        .into_owned()
}
