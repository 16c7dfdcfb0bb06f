use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::dto::api::ActionResult;
use crate::dto::product::ProductListParams;
use crate::forms::product::{AddProductForm, SaveProductForm, SaveVariantForm};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::product as service;

#[get("/products")]
pub async fn list_products(
    params: web::Query<ProductListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match service::get_product_list_page(repo.get_ref(), &params) {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to list products: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "products",
        &server_config.auth_service_url,
    );
    context.insert("products", &page.products);
    context.insert("total", &page.total);
    context.insert("categories", &page.categories);
    context.insert("params", &params.into_inner());

    render_template(&tera, "product/list.html", &context)
}

#[get("/product/{product_id}")]
pub async fn show_product(
    product_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match service::get_product_detail_page(repo.get_ref(), &product_id) {
        Ok(page) => page,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Product not found.").send();
            return redirect("/products");
        }
        Err(e) => {
            error!("Failed to load product: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "products",
        &server_config.auth_service_url,
    );
    context.insert("product", &page.product);
    context.insert("category_name", &page.category_name);
    context.insert("variants", &page.variants);
    context.insert("upload_service_url", &server_config.upload_service_url);

    render_template(&tera, "product/detail.html", &context)
}

// Product forms repeat the zones field once per checked box, so the body is
// parsed with serde_html_form instead of web::Form.
#[post("/product/add")]
pub async fn add_product(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: String,
) -> impl Responder {
    let form: AddProductForm = match serde_html_form::from_str(&body) {
        Ok(form) => form,
        Err(e) => {
            error!("Failed to parse product form: {e}");
            FlashMessage::error("Enter the fields properly.").send();
            return redirect("/products");
        }
    };

    match service::create_product(repo.get_ref(), &user, &form) {
        Ok(product) => {
            FlashMessage::success("Product created.").send();
            redirect(&format!("/product/{}", product.id))
        }
        Err(e) => {
            error!("Failed to create product: {e}");
            FlashMessage::error(ActionResult::from(e).message).send();
            redirect("/products")
        }
    }
}

#[post("/product/save")]
pub async fn save_product(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: String,
) -> impl Responder {
    let form: SaveProductForm = match serde_html_form::from_str(&body) {
        Ok(form) => form,
        Err(e) => {
            error!("Failed to parse product form: {e}");
            FlashMessage::error("Enter the fields properly.").send();
            return redirect("/products");
        }
    };

    let location = format!("/product/{}", form.id);
    match service::update_product(repo.get_ref(), &user, &form) {
        Ok(_) => {
            FlashMessage::success("Product updated.").send();
        }
        Err(e) => {
            error!("Failed to update product: {e}");
            FlashMessage::error(ActionResult::from(e).message).send();
        }
    }
    redirect(&location)
}

#[post("/product/{product_id}/delete")]
pub async fn delete_product(
    product_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::soft_delete_product(repo.get_ref(), &user, &product_id) {
        Ok(()) => HttpResponse::Ok().json(ActionResult::success("Product moved to trash.")),
        Err(e) => {
            error!("Failed to delete product: {e}");
            HttpResponse::Ok().json(ActionResult::from(e))
        }
    }
}

#[post("/product/{product_id}/restore")]
pub async fn restore_product(
    product_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::restore_product(repo.get_ref(), &user, &product_id) {
        Ok(()) => HttpResponse::Ok().json(ActionResult::success("Product restored.")),
        Err(e) => {
            error!("Failed to restore product: {e}");
            HttpResponse::Ok().json(ActionResult::from(e))
        }
    }
}

// Variant forms repeat the media_* and component_* fields once per row, so the
// body is parsed with serde_html_form instead of web::Form.
fn parse_variant_form(body: &str) -> Result<SaveVariantForm, serde_html_form::de::Error> {
    serde_html_form::from_str(body)
}

#[post("/variant/add")]
pub async fn add_variant(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: String,
) -> impl Responder {
    let form = match parse_variant_form(&body) {
        Ok(form) => form,
        Err(e) => {
            error!("Failed to parse variant form: {e}");
            FlashMessage::error("Enter the fields properly.").send();
            return redirect("/products");
        }
    };

    let location = format!("/product/{}", form.product_id);
    match service::create_variant(repo.get_ref(), &form) {
        Ok(_) => {
            FlashMessage::success("Variant created.").send();
        }
        Err(e) => {
            error!("Failed to create variant: {e}");
            FlashMessage::error(ActionResult::from(e).message).send();
        }
    }
    redirect(&location)
}

#[post("/variant/save")]
pub async fn save_variant(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: String,
) -> impl Responder {
    let form = match parse_variant_form(&body) {
        Ok(form) => form,
        Err(e) => {
            error!("Failed to parse variant form: {e}");
            FlashMessage::error("Enter the fields properly.").send();
            return redirect("/products");
        }
    };

    let location = format!("/product/{}", form.product_id);
    match service::update_variant(repo.get_ref(), &form) {
        Ok(_) => {
            FlashMessage::success("Variant updated.").send();
        }
        Err(e) => {
            error!("Failed to update variant: {e}");
            FlashMessage::error(ActionResult::from(e).message).send();
        }
    }
    redirect(&location)
}

#[post("/variant/{variant_id}/toggle")]
pub async fn toggle_variant(
    variant_id: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::toggle_variant_status(repo.get_ref(), &variant_id) {
        Ok(variant) => HttpResponse::Ok().json(ActionResult::success(format!(
            "Variant is now {}.",
            variant.status
        ))),
        Err(e) => {
            error!("Failed to toggle variant: {e}");
            HttpResponse::Ok().json(ActionResult::from(e))
        }
    }
}
