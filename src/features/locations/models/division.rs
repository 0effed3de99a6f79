use sqlx::FromRow;

/// Division, the root level of the location hierarchy
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Division {
    pub id: i32,
    pub name: String,
}
