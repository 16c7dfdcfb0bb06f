use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::api::{api_v1_categories, api_v1_customers, api_v1_products};
use crate::routes::category::{
    add_category, delete_category, list_categories, restore_category, save_category, show_category,
};
use crate::routes::customer::{
    add_customer, delete_customer, list_customers, restore_customer, save_customer, show_customer,
};
use crate::routes::main::{index, logout};
use crate::routes::product::{
    add_product, add_variant, delete_product, list_products, restore_product, save_product,
    save_variant, show_product, toggle_variant,
};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(
                web::scope("/api")
                    .service(api_v1_categories)
                    .service(api_v1_customers)
                    .service(api_v1_products),
            )
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(index)
                    .service(list_categories)
                    .service(show_category)
                    .service(add_category)
                    .service(save_category)
                    .service(delete_category)
                    .service(restore_category)
                    .service(list_customers)
                    .service(show_customer)
                    .service(add_customer)
                    .service(save_customer)
                    .service(delete_customer)
                    .service(restore_customer)
                    .service(list_products)
                    .service(show_product)
                    .service(add_product)
                    .service(save_product)
                    .service(delete_product)
                    .service(restore_product)
                    .service(add_variant)
                    .service(save_variant)
                    .service(toggle_variant)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
