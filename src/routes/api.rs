//! JSON renditions of the list views, filtered with the same query
//! parameters as the HTML pages.

use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde_json::json;

use crate::domain::auth::AuthenticatedUser;
use crate::dto::category::CategoryListParams;
use crate::dto::customer::CustomerListParams;
use crate::dto::product::ProductListParams;
use crate::repository::{CategoryReader, CustomerReader, DieselRepository, ProductReader};

#[get("/v1/categories")]
pub async fn api_v1_categories(
    params: web::Query<CategoryListParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match repo.list_categories(params.to_query()) {
        Ok((total, categories)) => HttpResponse::Ok().json(json!({
            "total": total,
            "categories": categories,
        })),
        Err(e) => {
            error!("Failed to list categories: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/customers")]
pub async fn api_v1_customers(
    params: web::Query<CustomerListParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match repo.list_customers(params.to_query()) {
        Ok((total, customers)) => HttpResponse::Ok().json(json!({
            "total": total,
            "customers": customers,
        })),
        Err(e) => {
            error!("Failed to list customers: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/products")]
pub async fn api_v1_products(
    params: web::Query<ProductListParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match repo.list_products(params.to_query()) {
        Ok((total, products)) => HttpResponse::Ok().json(json!({
            "total": total,
            "products": products,
        })),
        Err(e) => {
            error!("Failed to list products: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
