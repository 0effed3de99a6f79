use sqlx::FromRow;

/// Upazila (sub-district), child of exactly one zila
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Upazila {
    pub id: i32,
    pub zila_id: i32,
    pub name: String,
}
