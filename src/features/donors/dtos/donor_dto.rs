use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::donors::masking::mask_phone_number;
use crate::features::donors::models::{BloodGroup, Donor, NewDonor};
use crate::features::donors::repositories::DonorFilter;
use crate::shared::constants::MAX_LAST_DONATION_WITHIN_DAYS;
use crate::shared::validation::{parse_id, BD_MOBILE_REGEX};

// ==================== Search ====================

/// Raw query parameters for donor search.
///
/// Kept as strings so malformed values become a structured validation error
/// instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DonorSearchQuery {
    /// Exact blood group (A+, A-, B+, B-, AB+, AB-, O+, O-)
    #[param(example = "O+")]
    pub blood_group: Option<String>,
    /// Division id
    #[param(example = "1")]
    pub division_id: Option<String>,
    /// Zila id
    pub zila_id: Option<String>,
    /// Upazila id
    pub upazila_id: Option<String>,
    /// "true" for available donors only; any other value for unavailable donors only
    #[param(example = "true")]
    pub available: Option<String>,
    /// Last donation within this many days of today (0 = today)
    #[param(example = "90")]
    pub last_donation_within: Option<String>,
}

/// Empty query-string values count as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_days(raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|days| (0..=MAX_LAST_DONATION_WITHIN_DAYS).contains(days))
        .ok_or_else(|| {
            AppError::Validation(format!(
                "lastDonationWithin must be a whole number of days between 0 and {}",
                MAX_LAST_DONATION_WITHIN_DAYS
            ))
        })
}

impl TryFrom<DonorSearchQuery> for DonorFilter {
    type Error = AppError;

    fn try_from(query: DonorSearchQuery) -> Result<Self> {
        Ok(DonorFilter {
            blood_group: non_empty(query.blood_group)
                .map(|v| v.parse::<BloodGroup>())
                .transpose()?,
            division_id: non_empty(query.division_id)
                .map(|v| parse_id(&v, "divisionId"))
                .transpose()?,
            zila_id: non_empty(query.zila_id)
                .map(|v| parse_id(&v, "zilaId"))
                .transpose()?,
            upazila_id: non_empty(query.upazila_id)
                .map(|v| parse_id(&v, "upazilaId"))
                .transpose()?,
            available: query.available.map(|v| v.trim() == "true"),
            last_donation_within: non_empty(query.last_donation_within)
                .map(|v| parse_days(&v))
                .transpose()?,
        })
    }
}

// ==================== Create ====================

/// Request DTO for registering a donor.
///
/// Fields are optional at the serde level so that a missing field is reported
/// by name rather than as a JSON decoding failure.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonorDto {
    #[validate(
        required(message = "missing required field: firstName"),
        length(min = 1, max = 100, message = "firstName must be 1-100 characters")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "missing required field: lastName"),
        length(min = 1, max = 100, message = "lastName must be 1-100 characters")
    )]
    pub last_name: Option<String>,

    #[validate(required(message = "missing required field: bloodGroup"))]
    #[schema(example = "O+")]
    pub blood_group: Option<String>,

    #[validate(
        required(message = "missing required field: divisionId"),
        range(min = 1, message = "divisionId must be a positive integer")
    )]
    pub division_id: Option<i32>,

    #[validate(
        required(message = "missing required field: zilaId"),
        range(min = 1, message = "zilaId must be a positive integer")
    )]
    pub zila_id: Option<i32>,

    #[validate(
        required(message = "missing required field: upazilaId"),
        range(min = 1, message = "upazilaId must be a positive integer")
    )]
    pub upazila_id: Option<i32>,

    #[validate(length(max = 100, message = "village must not exceed 100 characters"))]
    pub village: Option<String>,

    #[validate(
        required(message = "missing required field: currentLocation"),
        length(min = 1, max = 255, message = "currentLocation must be 1-255 characters")
    )]
    pub current_location: Option<String>,

    /// `YYYY-MM-DD` (an RFC 3339 timestamp is also accepted)
    #[validate(required(message = "missing required field: lastDonationDate"))]
    #[schema(example = "2024-01-15")]
    pub last_donation_date: Option<String>,

    #[validate(
        required(message = "missing required field: phoneNumber"),
        regex(path = *BD_MOBILE_REGEX, message = "invalid phone")
    )]
    #[schema(example = "01712345678")]
    pub phone_number: Option<String>,

    /// Defaults to true
    pub is_available: Option<bool>,

    pub notes: Option<String>,

    /// Must be the JSON boolean `true`
    #[schema(value_type = bool)]
    pub consent: Option<serde_json::Value>,
}

fn parse_donation_date(raw: &str, today: NaiveDate) -> Result<NaiveDate> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| AppError::Validation("invalid date".to_string()))?;

    if date > today {
        return Err(AppError::Validation(
            "invalid date: lastDonationDate is in the future".to_string(),
        ));
    }

    Ok(date)
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    trimmed(value)
        .ok_or_else(|| AppError::Validation(format!("missing required field: {}", field)))
}

fn required_id(value: Option<i32>, field: &str) -> Result<i32> {
    value.ok_or_else(|| AppError::Validation(format!("missing required field: {}", field)))
}

impl CreateDonorDto {
    /// Check every precondition and produce an insertable donor.
    ///
    /// Fails on the first violated condition; nothing is written on failure.
    pub fn into_new_donor(self, today: NaiveDate) -> Result<NewDonor> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if !matches!(self.consent, Some(serde_json::Value::Bool(true))) {
            return Err(AppError::Validation("consent not given".to_string()));
        }

        let blood_group = required(self.blood_group, "bloodGroup")?.parse::<BloodGroup>()?;
        let last_donation_date =
            parse_donation_date(&required(self.last_donation_date, "lastDonationDate")?, today)?;

        Ok(NewDonor {
            first_name: required(self.first_name, "firstName")?,
            last_name: required(self.last_name, "lastName")?,
            blood_group,
            division_id: required_id(self.division_id, "divisionId")?,
            zila_id: required_id(self.zila_id, "zilaId")?,
            upazila_id: required_id(self.upazila_id, "upazilaId")?,
            village: trimmed(self.village),
            current_location: required(self.current_location, "currentLocation")?,
            last_donation_date,
            phone_number: required(self.phone_number, "phoneNumber")?,
            is_available: self.is_available.unwrap_or(true),
            notes: trimmed(self.notes),
        })
    }
}

/// Response DTO for a newly registered donor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedDonorDto {
    pub id: i32,
}

// ==================== Update ====================

/// Request DTO for toggling donor availability
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityDto {
    pub is_available: bool,
}

// ==================== Response ====================

/// Public view of a donor; the phone number is always masked
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonorResponseDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub blood_group: BloodGroup,
    pub division_id: i32,
    pub zila_id: i32,
    pub upazila_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    pub current_location: String,
    pub last_donation_date: NaiveDate,
    /// Masked, e.g. `017****678`
    pub phone_number: String,
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Donor> for DonorResponseDto {
    fn from(donor: Donor) -> Self {
        Self {
            id: donor.id,
            first_name: donor.first_name,
            last_name: donor.last_name,
            blood_group: donor.blood_group,
            division_id: donor.division_id,
            zila_id: donor.zila_id,
            upazila_id: donor.upazila_id,
            village: donor.village,
            current_location: donor.current_location,
            last_donation_date: donor.last_donation_date,
            phone_number: mask_phone_number(&donor.phone_number),
            is_available: donor.is_available,
            notes: donor.notes,
            created_at: donor.created_at,
            updated_at: donor.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn valid_body() -> serde_json::Value {
        json!({
            "firstName": "Ahmed",
            "lastName": "Rahman",
            "bloodGroup": "O+",
            "divisionId": 1,
            "zilaId": 1,
            "upazilaId": 1,
            "village": "Dhanmondi",
            "currentLocation": "Dhaka, Bangladesh",
            "lastDonationDate": "2024-01-15",
            "phoneNumber": "01712345678",
            "consent": true
        })
    }

    fn parse(body: serde_json::Value) -> Result<NewDonor> {
        let dto: CreateDonorDto = serde_json::from_value(body).unwrap();
        dto.into_new_donor(today())
    }

    fn validation_message(result: Result<NewDonor>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_body_produces_new_donor() {
        let donor = parse(valid_body()).unwrap();
        assert_eq!(donor.blood_group, BloodGroup::OPositive);
        assert_eq!(
            donor.last_donation_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(donor.is_available, "availability defaults to true");
        assert_eq!(donor.notes, None);
    }

    #[test]
    fn test_explicit_unavailable_is_kept() {
        let mut body = valid_body();
        body["isAvailable"] = json!(false);
        assert!(!parse(body).unwrap().is_available);
    }

    #[test]
    fn test_consent_must_be_literal_true() {
        for consent in [json!(null), json!(false), json!("true"), json!(1), json!("yes")] {
            let mut body = valid_body();
            body["consent"] = consent.clone();
            assert_eq!(
                validation_message(parse(body)),
                "consent not given",
                "consent {consent}"
            );
        }

        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("consent");
        assert_eq!(validation_message(parse(body)), "consent not given");
    }

    #[test]
    fn test_missing_required_fields_are_named() {
        for field in [
            "firstName",
            "lastName",
            "bloodGroup",
            "divisionId",
            "zilaId",
            "upazilaId",
            "currentLocation",
            "lastDonationDate",
            "phoneNumber",
        ] {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(field);
            let msg = validation_message(parse(body));
            assert!(
                msg.contains(&format!("missing required field: {}", field)),
                "{field}: {msg}"
            );
        }
    }

    #[test]
    fn test_blank_required_field_is_rejected() {
        let mut body = valid_body();
        body["firstName"] = json!("   ");
        assert!(validation_message(parse(body)).contains("firstName"));
    }

    #[test]
    fn test_invalid_phone_numbers() {
        for phone in ["0171234567", "01212345678", "+8801712345678", "0171234567x"] {
            let mut body = valid_body();
            body["phoneNumber"] = json!(phone);
            assert!(
                validation_message(parse(body)).contains("invalid phone"),
                "{phone}"
            );
        }
    }

    #[test]
    fn test_invalid_dates() {
        for date in ["2024-02-30", "15/01/2024", "yesterday"] {
            let mut body = valid_body();
            body["lastDonationDate"] = json!(date);
            assert!(
                validation_message(parse(body)).starts_with("invalid date"),
                "{date}"
            );
        }

        let mut body = valid_body();
        body["lastDonationDate"] = json!("2025-06-02");
        assert!(validation_message(parse(body)).contains("in the future"));
    }

    #[test]
    fn test_rfc3339_date_keeps_date_part() {
        let mut body = valid_body();
        body["lastDonationDate"] = json!("2024-01-15T10:30:00Z");
        assert_eq!(
            parse(body).unwrap().last_donation_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_unknown_blood_group_is_rejected() {
        let mut body = valid_body();
        body["bloodGroup"] = json!("Z+");
        assert!(validation_message(parse(body)).contains("bloodGroup"));
    }

    #[test]
    fn test_search_query_to_filter() {
        let query = DonorSearchQuery {
            blood_group: Some("AB-".to_string()),
            division_id: Some("1".to_string()),
            zila_id: Some("".to_string()),
            upazila_id: None,
            available: Some("true".to_string()),
            last_donation_within: Some("0".to_string()),
        };

        let filter = DonorFilter::try_from(query).unwrap();
        assert_eq!(
            filter,
            DonorFilter {
                blood_group: Some(BloodGroup::AbNegative),
                division_id: Some(1),
                zila_id: None,
                upazila_id: None,
                available: Some(true),
                last_donation_within: Some(0),
            }
        );
    }

    #[test]
    fn test_available_other_than_true_means_unavailable() {
        for raw in ["false", "yes", "1", ""] {
            let query = DonorSearchQuery {
                available: Some(raw.to_string()),
                ..Default::default()
            };
            assert_eq!(DonorFilter::try_from(query).unwrap().available, Some(false));
        }
    }

    #[test]
    fn test_malformed_search_values_are_rejected() {
        let cases = [
            DonorSearchQuery {
                division_id: Some("one".to_string()),
                ..Default::default()
            },
            DonorSearchQuery {
                upazila_id: Some("1 OR 1=1".to_string()),
                ..Default::default()
            },
            DonorSearchQuery {
                blood_group: Some("O+' OR '1'='1".to_string()),
                ..Default::default()
            },
            DonorSearchQuery {
                last_donation_within: Some("-1".to_string()),
                ..Default::default()
            },
            DonorSearchQuery {
                last_donation_within: Some("ninety".to_string()),
                ..Default::default()
            },
        ];

        for query in cases {
            let debug = format!("{:?}", query);
            assert!(
                matches!(DonorFilter::try_from(query), Err(AppError::Validation(_))),
                "{debug}"
            );
        }
    }

    #[test]
    fn test_days_above_upper_bound_name_the_range() {
        let query = DonorSearchQuery {
            last_donation_within: Some("36501".to_string()),
            ..Default::default()
        };

        match DonorFilter::try_from(query) {
            Err(AppError::Validation(msg)) => {
                assert!(msg.contains("between 0 and 36500"), "{msg}")
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        let query = DonorSearchQuery {
            last_donation_within: Some("36500".to_string()),
            ..Default::default()
        };
        assert_eq!(
            DonorFilter::try_from(query).unwrap().last_donation_within,
            Some(36_500)
        );
    }
}
