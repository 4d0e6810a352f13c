use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::Authenticated;
use crate::entities::order::{NewOrder, OrderUpdate};
use crate::errors::ApiError;
use crate::repositories::ListOrdersQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status_filter: Option<String>,
    pub limit: Option<i64>,
}

pub async fn create_order(
    _auth: Authenticated,
    state: web::Data<AppState>,
    payload: web::Json<NewOrder>,
) -> Result<HttpResponse, ApiError> {
    let created = state.orders.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn list_orders(
    _auth: Authenticated,
    state: web::Data<AppState>,
    q: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let q = q.into_inner();
    let items = state
        .orders
        .list(ListOrdersQuery {
            status: q.status_filter,
            limit: q.limit,
        })
        .await;
    Ok(HttpResponse::Ok().json(items))
}

pub async fn get_order(
    _auth: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let order = state
        .orders
        .get_by_id(&id)
        .await
        .ok_or_else(|| ApiError::order_not_found(&id))?;
    Ok(HttpResponse::Ok().json(order))
}

pub async fn update_order(
    _auth: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<OrderUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let updated = state
        .orders
        .update(&id, payload.into_inner())
        .await
        .ok_or_else(|| ApiError::order_not_found(&id))?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_order(
    _auth: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if state.orders.delete(&id).await {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::order_not_found(&id))
    }
}
