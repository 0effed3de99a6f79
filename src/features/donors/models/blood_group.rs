use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

use crate::core::error::AppError;

/// ABO/Rh blood group matching the `blood_group` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "blood_group")]
pub enum BloodGroup {
    #[sqlx(rename = "A+")]
    #[serde(rename = "A+")]
    APositive,
    #[sqlx(rename = "A-")]
    #[serde(rename = "A-")]
    ANegative,
    #[sqlx(rename = "B+")]
    #[serde(rename = "B+")]
    BPositive,
    #[sqlx(rename = "B-")]
    #[serde(rename = "B-")]
    BNegative,
    #[sqlx(rename = "AB+")]
    #[serde(rename = "AB+")]
    AbPositive,
    #[sqlx(rename = "AB-")]
    #[serde(rename = "AB-")]
    AbNegative,
    #[sqlx(rename = "O+")]
    #[serde(rename = "O+")]
    OPositive,
    #[sqlx(rename = "O-")]
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

impl std::fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BloodGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut normalized = s.trim().to_ascii_uppercase();
        // An unencoded '+' in a query string decodes to a space ("O+" arrives as "O ")
        if s.ends_with(' ') && !normalized.ends_with(['+', '-']) {
            normalized.push('+');
        }

        BloodGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == normalized)
            .ok_or_else(|| {
                AppError::Validation(
                    "invalid bloodGroup: expected one of A+, A-, B+, B-, AB+, AB-, O+, O-"
                        .to_string(),
                )
            })
    }
}
