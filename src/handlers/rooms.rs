use actix_web::{web, HttpResponse};

use crate::error::ServiceError;
use crate::models::{CreateRoom, UpdateRoom};
use crate::services::Services;

pub async fn create_room(
    services: web::Data<Services>,
    body: web::Json<CreateRoom>,
) -> Result<HttpResponse, ServiceError> {
    let room = services.rooms.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(room))
}

pub async fn list_rooms(services: web::Data<Services>) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(services.rooms.list().await?))
}

pub async fn get_room(
    services: web::Data<Services>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(services.rooms.get(path.into_inner()).await?))
}

pub async fn update_room(
    services: web::Data<Services>,
    path: web::Path<i64>,
    body: web::Json<UpdateRoom>,
) -> Result<HttpResponse, ServiceError> {
    let room = services
        .rooms
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(room))
}

pub async fn delete_room(
    services: web::Data<Services>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    services.rooms.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
