use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::locations::models::{Division, Upazila, Zila};

/// Response DTO for division data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DivisionResponseDto {
    pub id: i32,
    pub name: String,
}

impl From<Division> for DivisionResponseDto {
    fn from(division: Division) -> Self {
        Self {
            id: division.id,
            name: division.name,
        }
    }
}

/// Response DTO for zila data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZilaResponseDto {
    pub id: i32,
    pub division_id: i32,
    pub name: String,
}

impl From<Zila> for ZilaResponseDto {
    fn from(zila: Zila) -> Self {
        Self {
            id: zila.id,
            division_id: zila.division_id,
            name: zila.name,
        }
    }
}

/// Response DTO for upazila data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpazilaResponseDto {
    pub id: i32,
    pub zila_id: i32,
    pub name: String,
}

impl From<Upazila> for UpazilaResponseDto {
    fn from(upazila: Upazila) -> Self {
        Self {
            id: upazila.id,
            zila_id: upazila.zila_id,
            name: upazila.name,
        }
    }
}
