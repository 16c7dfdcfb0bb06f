use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::dto::api::ActionResult;
use crate::dto::category::CategoryListParams;
use crate::forms::category::{AddCategoryForm, SaveCategoryForm};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::category as service;

#[get("/categories")]
pub async fn list_categories(
    params: web::Query<CategoryListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match service::get_category_list_page(repo.get_ref(), &params) {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to list categories: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "categories",
        &server_config.auth_service_url,
    );
    context.insert("categories", &page.categories);
    context.insert("total", &page.total);
    context.insert("params", &params.into_inner());

    render_template(&tera, "category/list.html", &context)
}

#[get("/category/{category_id}")]
pub async fn show_category(
    category_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let category = match service::get_category(repo.get_ref(), &category_id) {
        Ok(category) => category,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Category not found.").send();
            return redirect("/categories");
        }
        Err(e) => {
            error!("Failed to load category: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "categories",
        &server_config.auth_service_url,
    );
    context.insert("category", &category);

    render_template(&tera, "category/detail.html", &context)
}

#[post("/category/add")]
pub async fn add_category(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCategoryForm>,
) -> impl Responder {
    match service::create_category(repo.get_ref(), &user, &form) {
        Ok(_) => {
            FlashMessage::success("Category created.").send();
        }
        Err(e) => {
            error!("Failed to create category: {e}");
            FlashMessage::error(ActionResult::from(e).message).send();
        }
    }
    redirect("/categories")
}

#[post("/category/save")]
pub async fn save_category(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveCategoryForm>,
) -> impl Responder {
    let location = format!("/category/{}", form.id);
    match service::update_category(repo.get_ref(), &user, &form) {
        Ok(_) => {
            FlashMessage::success("Category updated.").send();
        }
        Err(e) => {
            error!("Failed to update category: {e}");
            FlashMessage::error(ActionResult::from(e).message).send();
        }
    }
    redirect(&location)
}

#[post("/category/{category_id}/delete")]
pub async fn delete_category(
    category_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::soft_delete_category(repo.get_ref(), &user, &category_id) {
        Ok(()) => HttpResponse::Ok().json(ActionResult::success("Category moved to trash.")),
        Err(e) => {
            error!("Failed to delete category: {e}");
            HttpResponse::Ok().json(ActionResult::from(e))
        }
    }
}

#[post("/category/{category_id}/restore")]
pub async fn restore_category(
    category_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::restore_category(repo.get_ref(), &user, &category_id) {
        Ok(()) => HttpResponse::Ok().json(ActionResult::success("Category restored.")),
        Err(e) => {
            error!("Failed to restore category: {e}");
            HttpResponse::Ok().json(ActionResult::from(e))
        }
    }
}
