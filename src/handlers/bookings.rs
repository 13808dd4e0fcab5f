use actix_web::{web, HttpResponse};

use crate::error::ServiceError;
use crate::models::{CreateBooking, UpdateBooking};
use crate::services::Services;

pub async fn create_booking(
    services: web::Data<Services>,
    body: web::Json<CreateBooking>,
) -> Result<HttpResponse, ServiceError> {
    let booking = services.bookings.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(booking))
}

pub async fn list_bookings(services: web::Data<Services>) -> Result<HttpResponse, ServiceError> {
    let bookings = services.bookings.list().await?;
    Ok(HttpResponse::Ok().json(bookings))
}

pub async fn get_booking(
    services: web::Data<Services>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let booking = services.bookings.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(booking))
}

pub async fn update_booking(
    services: web::Data<Services>,
    path: web::Path<i64>,
    body: web::Json<UpdateBooking>,
) -> Result<HttpResponse, ServiceError> {
    let booking = services
        .bookings
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(booking))
}

pub async fn delete_booking(
    services: web::Data<Services>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    services.bookings.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
