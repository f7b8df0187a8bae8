use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tera::Context;

use crate::{
    catalog::{filter_categories, product_rows},
    errors::AppError,
    AppState, TEMPLATES,
};

/// Filter criteria carried in the query string. Missing means empty.
#[derive(Deserialize, Debug)]
pub struct FilterParams {
    #[serde(default)]
    user: String,
    #[serde(default)]
    query: String,
}

#[get("/")]
pub async fn index_handler(
    state: web::Data<AppState>,
    params: web::Query<FilterParams>,
) -> Result<impl Responder, AppError> {
    let selected = filter_categories(&state.categories, &params.user, &params.query);
    let rows = product_rows(&selected);
    let category_titles: Vec<&str> = state
        .categories
        .iter()
        .map(|category| category.title.as_str())
        .collect();

    log::debug!(
        "Filter user={:?} query={:?} -> {} categories, {} rows",
        params.user,
        params.query,
        selected.len(),
        rows.len()
    );

    let mut context = Context::new();
    context.insert("title", "Product Categories");
    context.insert("owners", state.owners.as_slice());
    context.insert("selected_user", &params.user);
    context.insert("query", &params.query);
    context.insert("category_titles", &category_titles);
    context.insert("rows", &rows);
    context.insert("version", env!("CARGO_PKG_VERSION"));

    let rendered = TEMPLATES.render("index.html", &context).map_err(|e| {
        log::error!("Failed to render template: {}", e);
        AppError::TemplateError(e)
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(rendered))
}

#[get("/api/categories")]
pub async fn categories_api_handler(
    state: web::Data<AppState>,
    params: web::Query<FilterParams>,
) -> Result<impl Responder, AppError> {
    let selected = filter_categories(&state.categories, &params.user, &params.query);
    Ok(HttpResponse::Ok().json(selected))
}

#[get("/api/categories/{id}")]
pub async fn category_api_handler(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let id = path.into_inner();
    let category = state
        .categories
        .iter()
        .find(|category| category.id == id)
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(category))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};

    use super::*;
    use crate::{catalog::build_categories, data, structs::EnrichedCategory};

    fn bundled_state() -> AppState {
        let source = data::bundled().unwrap();
        AppState {
            categories: Arc::new(build_categories(
                &source.users,
                &source.categories,
                &source.products,
            )),
            owners: Arc::new(data::owner_names(&source.users)),
        }
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(bundled_state()))
                    .service(index_handler)
                    .service(categories_api_handler)
                    .service(category_api_handler),
            )
            .await
        };
    }

    macro_rules! get_html {
        ($app:expr, $uri:expr) => {{
            let req = test::TestRequest::get().uri($uri).to_request();
            let body = test::call_and_read_body(&$app, req).await;
            String::from_utf8(body.to_vec()).unwrap()
        }};
    }

    #[actix_web::test]
    async fn index_lists_every_product() {
        let app = app!();
        let html = get_html!(app, "/");
        for name in ["Milk", "Bread", "Jacket", "Apples"] {
            assert!(html.contains(name), "missing {name}");
        }
        assert!(!html.contains("No products matching selected criteria"));
    }

    #[actix_web::test]
    async fn index_renders_inert_sort_icons_and_category_buttons() {
        let app = app!();
        let html = get_html!(app, "/");
        for class in ["fas fa-sort\"", "fas fa-sort-down\"", "fas fa-sort-up\""] {
            assert!(html.contains(class), "missing {class}");
        }
        assert_eq!(html.matches("data-cy=\"SortIcon\"").count(), 4);
        assert_eq!(html.matches("button mr-2 my-1 is-info").count(), 3);
        assert_eq!(html.matches("data-cy=\"Category\"").count(), 5);
    }

    #[actix_web::test]
    async fn index_filters_by_owner() {
        let app = app!();
        let html = get_html!(app, "/?user=Max");
        assert!(html.contains("Jacket"));
        assert!(!html.contains("Milk"));
        assert!(!html.contains("Bread"));
    }

    #[actix_web::test]
    async fn index_reports_no_matches() {
        let app = app!();
        let html = get_html!(app, "/?user=Anna&query=xyz");
        assert!(html.contains("No products matching selected criteria"));
    }

    #[actix_web::test]
    async fn api_filters_by_owner_and_query() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/categories?user=Anna&query=EGG")
            .to_request();
        let found: Vec<EnrichedCategory> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Grocery");
        assert_eq!(found[0].owner_name(), Some("Anna"));
        assert_eq!(found[0].products.len(), 4);
    }

    #[actix_web::test]
    async fn api_search_alone_spans_owners() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/categories?query=s")
            .to_request();
        let found: Vec<EnrichedCategory> = test::call_and_read_body_json(&app, req).await;
        let titles: Vec<&str> = found.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Grocery", "Fruits"]);
    }

    #[actix_web::test]
    async fn api_unknown_category_is_404() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/categories/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
