use actix_web::{web, HttpResponse};

use crate::error::ServiceError;
use crate::models::{CreateCleaner, UpdateCleaner};
use crate::services::Services;

pub async fn create_cleaner(
    services: web::Data<Services>,
    body: web::Json<CreateCleaner>,
) -> Result<HttpResponse, ServiceError> {
    let cleaner = services.cleaners.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(cleaner))
}

pub async fn list_cleaners(services: web::Data<Services>) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(services.cleaners.list().await?))
}

pub async fn get_cleaner(
    services: web::Data<Services>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(services.cleaners.get(path.into_inner()).await?))
}

pub async fn update_cleaner(
    services: web::Data<Services>,
    path: web::Path<i64>,
    body: web::Json<UpdateCleaner>,
) -> Result<HttpResponse, ServiceError> {
    let cleaner = services
        .cleaners
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(cleaner))
}

pub async fn delete_cleaner(
    services: web::Data<Services>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    services.cleaners.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
