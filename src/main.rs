#[macro_use]
extern crate lazy_static;

use std::sync::Arc;

use actix_files::{Files, NamedFile};
use actix_web::{
    http::{Method, StatusCode},
    middleware,
    web::{self, Data},
    App, Either, HttpResponse, HttpServer, Responder,
};
use log::info;
use tera::Tera;

mod catalog;
mod config;
mod data;
mod errors;
mod routes;
mod structs;
mod utils;

use catalog::{build_categories, missing_owners};
use config::Config;
use errors::AppError;
use structs::EnrichedCategory;

/// Read-only state shared by every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    categories: Arc<Vec<EnrichedCategory>>,
    owners: Arc<Vec<String>>,
}

lazy_static! {
    pub static ref TEMPLATES: Tera = {
        let mut tera = match Tera::new("templates/**/*") {
            Ok(t) => t,
            Err(e) => {
                log::error!("Parsing error(s): {}", e);
                ::std::process::exit(1);
            }
        };
        tera.autoescape_on(vec![".html"]);
        tera
    };
}

/// Joins the source data and applies the owner integrity policy.
fn prepare_state(source: data::SourceData, strict: bool) -> Result<AppState, AppError> {
    let categories = build_categories(&source.users, &source.categories, &source.products);

    for (category_id, owner_id) in missing_owners(&categories) {
        if strict {
            return Err(AppError::MissingOwner {
                category_id,
                owner_id,
            });
        }
        log::warn!(
            "Category {} refers to unknown owner {}, rendering it without one",
            category_id,
            owner_id
        );
    }

    Ok(AppState {
        categories: Arc::new(categories),
        owners: Arc::new(data::owner_names(&source.users)),
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("FATAL: {}", e);
        e
    })?;

    let source = data::load(&config).await?;
    let state = prepare_state(source, config.strict).map_err(|e| {
        log::error!("FATAL: {}", e);
        e
    })?;

    info!(
        "Starting HTTP server on http://{}:{}/",
        config.host, config.port
    );

    HttpServer::new(move || {
        App::new()
            // enable automatic response compression - usually register this first
            .wrap(middleware::Compress::default())
            // enable logger - always register Actix Web Logger middleware last
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .service(routes::index_handler)
            .service(routes::categories_api_handler)
            .service(routes::category_api_handler)
            .app_data(Data::new(state.clone()))
            .default_service(web::to(default_handler))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

async fn default_handler(req_method: Method) -> Result<impl Responder, std::io::Error> {
    match req_method {
        Method::GET => {
            let file = NamedFile::open("static/404.html")?
                .customize()
                .with_status(StatusCode::NOT_FOUND);
            Ok(Either::Left(file))
        }
        _ => Ok(Either::Right(HttpResponse::MethodNotAllowed().finish())),
    }
}
