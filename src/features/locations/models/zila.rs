use sqlx::FromRow;

/// Zila (district), child of exactly one division
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Zila {
    pub id: i32,
    pub division_id: i32,
    pub name: String,
}
