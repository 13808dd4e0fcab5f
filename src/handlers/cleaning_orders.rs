use actix_web::{web, HttpResponse};

use crate::error::ServiceError;
use crate::models::{AssignCleaner, CreateCleaningOrder, UpdateCleaningOrder};
use crate::services::Services;

pub async fn create_order(
    services: web::Data<Services>,
    body: web::Json<CreateCleaningOrder>,
) -> Result<HttpResponse, ServiceError> {
    let order = services.cleaning_orders.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(order))
}

pub async fn list_orders(services: web::Data<Services>) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(services.cleaning_orders.list().await?))
}

pub async fn list_orders_by_cleaner(
    services: web::Data<Services>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let orders = services
        .cleaning_orders
        .list_by_cleaner(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(orders))
}

pub async fn get_order(
    services: web::Data<Services>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(services.cleaning_orders.get(path.into_inner()).await?))
}

pub async fn update_order(
    services: web::Data<Services>,
    path: web::Path<i64>,
    body: web::Json<UpdateCleaningOrder>,
) -> Result<HttpResponse, ServiceError> {
    let order = services
        .cleaning_orders
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(order))
}

pub async fn delete_order(
    services: web::Data<Services>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    services.cleaning_orders.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn assign_cleaner(
    services: web::Data<Services>,
    path: web::Path<i64>,
    body: web::Json<AssignCleaner>,
) -> Result<HttpResponse, ServiceError> {
    services
        .cleaning_orders
        .assign_cleaner(path.into_inner(), body.cleaner_id)
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "cleaner assigned" })))
}

pub async fn remove_cleaner(
    services: web::Data<Services>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, ServiceError> {
    let (order_id, cleaner_id) = path.into_inner();
    services
        .cleaning_orders
        .remove_cleaner(order_id, cleaner_id)
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "cleaner removed" })))
}
