use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::dto::api::ActionResult;
use crate::dto::customer::CustomerListParams;
use crate::forms::customer::{AddCustomerForm, SaveCustomerForm};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::customer as service;

#[get("/customers")]
pub async fn list_customers(
    params: web::Query<CustomerListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match service::get_customer_list_page(repo.get_ref(), &params) {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to list customers: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "customers",
        &server_config.auth_service_url,
    );
    context.insert("customers", &page.customers);
    context.insert("total", &page.total);
    context.insert("params", &params.into_inner());

    render_template(&tera, "customer/list.html", &context)
}

#[get("/customer/{customer_id}")]
pub async fn show_customer(
    customer_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let customer = match service::get_customer(repo.get_ref(), &customer_id) {
        Ok(customer) => customer,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Customer not found.").send();
            return redirect("/customers");
        }
        Err(e) => {
            error!("Failed to load customer: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "customers",
        &server_config.auth_service_url,
    );
    context.insert("customer", &customer);

    render_template(&tera, "customer/detail.html", &context)
}

#[post("/customer/add")]
pub async fn add_customer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCustomerForm>,
) -> impl Responder {
    match service::create_customer(repo.get_ref(), &user, &form) {
        Ok(_) => {
            FlashMessage::success("Customer created.").send();
        }
        Err(e) => {
            error!("Failed to create customer: {e}");
            FlashMessage::error(ActionResult::from(e).message).send();
        }
    }
    redirect("/customers")
}

#[post("/customer/save")]
pub async fn save_customer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveCustomerForm>,
) -> impl Responder {
    let location = format!("/customer/{}", form.id);
    match service::update_customer(repo.get_ref(), &user, &form) {
        Ok(_) => {
            FlashMessage::success("Customer updated.").send();
        }
        Err(e) => {
            error!("Failed to update customer: {e}");
            FlashMessage::error(ActionResult::from(e).message).send();
        }
    }
    redirect(&location)
}

#[post("/customer/{customer_id}/delete")]
pub async fn delete_customer(
    customer_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::soft_delete_customer(repo.get_ref(), &user, &customer_id) {
        Ok(()) => HttpResponse::Ok().json(ActionResult::success("Customer moved to trash.")),
        Err(e) => {
            error!("Failed to delete customer: {e}");
            HttpResponse::Ok().json(ActionResult::from(e))
        }
    }
}

#[post("/customer/{customer_id}/restore")]
pub async fn restore_customer(
    customer_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::restore_customer(repo.get_ref(), &user, &customer_id) {
        Ok(()) => HttpResponse::Ok().json(ActionResult::success("Customer restored.")),
        Err(e) => {
            error!("Failed to restore customer: {e}");
            HttpResponse::Ok().json(ActionResult::from(e))
        }
    }
}
