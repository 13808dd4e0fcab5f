use std::sync::Arc;

use validator::Validate;

use crate::error::{Context, ServiceError};
use crate::models::{CreateRoom, Room, UpdateRoom};
use crate::store::RoomStore;

#[derive(Clone)]
pub struct RoomService {
    rooms: Arc<dyn RoomStore>,
}

impl RoomService {
    pub fn new(rooms: Arc<dyn RoomStore>) -> Self {
        Self { rooms }
    }

    pub async fn create(&self, req: CreateRoom) -> Result<Room, ServiceError> {
        req.validate()?;
        self.rooms
            .create(&req)
            .await
            .context("failed to create room")
    }

    pub async fn get(&self, id: i64) -> Result<Room, ServiceError> {
        self.rooms.get_by_id(id).await.context("room not found")
    }

    pub async fn list(&self) -> Result<Vec<Room>, ServiceError> {
        self.rooms.list().await.context("failed to get rooms")
    }

    /// Only the fields present in `req` change.
    pub async fn update(&self, id: i64, req: UpdateRoom) -> Result<Room, ServiceError> {
        let mut room = self.get(id).await?;
        req.validate()?;

        if let Some(floor) = req.floor {
            room.floor = floor;
        }
        if req.desc.is_some() {
            room.desc = req.desc;
        }

        self.rooms
            .update(&room)
            .await
            .context("failed to update room")?;
        Ok(room)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.rooms.delete(id).await.context("failed to delete room")
    }
}
