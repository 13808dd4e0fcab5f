use async_trait::async_trait;
use sqlx::SqlitePool;

use super::expect_affected;
use crate::models::{CreateRoom, Room};
use crate::store::{RoomStore, StoreError, StoreResult};

#[derive(Debug, Clone)]
pub struct SqliteRoomStore {
    pool: SqlitePool,
}

impl SqliteRoomStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomStore for SqliteRoomStore {
    async fn create(&self, room: &CreateRoom) -> StoreResult<Room> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (floor, "desc")
            VALUES (?, ?)
            RETURNING id, floor, "desc"
            "#,
        )
        .bind(room.floor)
        .bind(&room.desc)
        .fetch_one(&self.pool)
        .await?;

        Ok(room)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Room> {
        sqlx::query_as::<_, Room>(r#"SELECT id, floor, "desc" FROM rooms WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> StoreResult<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>(r#"SELECT id, floor, "desc" FROM rooms ORDER BY id"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(rooms)
    }

    async fn update(&self, room: &Room) -> StoreResult<()> {
        let result = sqlx::query(r#"UPDATE rooms SET floor = ?, "desc" = ? WHERE id = ?"#)
            .bind(room.floor)
            .bind(&room.desc)
            .bind(room.id)
            .execute(&self.pool)
            .await?;
        expect_affected(result)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        expect_affected(result)
    }
}
