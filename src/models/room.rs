use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: i64,
    pub floor: i64,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoom {
    #[validate(range(min = 0, message = "floor number must be non-negative"))]
    pub floor: i64,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRoom {
    #[validate(range(min = 0, message = "floor number must be non-negative"))]
    pub floor: Option<i64>,
    pub desc: Option<String>,
}
