/// Mask run substituted for the middle digits of a phone number
pub const PHONE_MASK: &str = "****";

/// Upper bound for `lastDonationWithin`, roughly one hundred years of days
pub const MAX_LAST_DONATION_WITHIN_DAYS: i32 = 36_500;
