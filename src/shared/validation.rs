use lazy_static::lazy_static;
use regex::Regex;

use crate::core::error::{AppError, Result};

lazy_static! {
    /// Bangladeshi mobile number: 11 digits, `01` prefix, operator digit 3-9
    /// - Valid: "01712345678", "01312345678", "01999999999"
    /// - Invalid: "01212345678", "+8801712345678", "0171234567"
    pub static ref BD_MOBILE_REGEX: Regex = Regex::new(r"^01[3-9]\d{8}$").unwrap();

    /// First digit run of 10+ digits: leading three, a middle of four or more, trailing three
    pub static ref PHONE_MASK_REGEX: Regex = Regex::new(r"(\d{3})\d{4,}(\d{3})").unwrap();
}

/// Parse a free-form identifier (path segment or query value) as a positive id
pub fn parse_id(raw: &str, field: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::Validation(format!("{} must be a positive integer", field)))
}
