use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use crate::features::donors::models::BloodGroup;

/// Database model for a donor.
///
/// Deliberately not `Serialize`: donors only leave the service as
/// `DonorResponseDto`, which masks the phone number.
#[derive(Debug, Clone, FromRow)]
pub struct Donor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub blood_group: BloodGroup,
    pub division_id: i32,
    pub zila_id: i32,
    pub upazila_id: i32,
    pub village: Option<String>,
    pub current_location: String,
    pub last_donation_date: NaiveDate,
    pub phone_number: String,
    pub is_available: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated donor ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonor {
    pub first_name: String,
    pub last_name: String,
    pub blood_group: BloodGroup,
    pub division_id: i32,
    pub zila_id: i32,
    pub upazila_id: i32,
    pub village: Option<String>,
    pub current_location: String,
    pub last_donation_date: NaiveDate,
    pub phone_number: String,
    pub is_available: bool,
    pub notes: Option<String>,
}
