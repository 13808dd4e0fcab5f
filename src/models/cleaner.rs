use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Cleaner {
    pub id: i64,
    pub name: String,
    pub surname: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCleaner {
    #[validate(length(min = 1, message = "cleaner name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "cleaner surname is required"))]
    pub surname: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCleaner {
    #[validate(length(min = 1, message = "cleaner name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "cleaner surname cannot be empty"))]
    pub surname: Option<String>,
}
