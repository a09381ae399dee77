use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::dto::products::SearchParams;
use crate::repository::DieselRepository;
use crate::routes::{error_response, render_template};
use crate::services::products as product_service;

/// Route the search button sends the table inputs to.
pub const SEARCH_ROUTE: &str = "/search/";

#[get("/")]
pub async fn show_all_products(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match product_service::load_all_products(repo.get_ref()) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("products", &data.products);
            context.insert("search", &SearchParams::default());
            context.insert("search_route", SEARCH_ROUTE);
            context.insert("current_page", "index");
            render_template(&tera, "products/index.html", &context)
        }
        Err(err) => error_response(&tera, err),
    }
}

#[get("/search/")]
pub async fn search_products(
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match product_service::search_products(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("products", &data.products);
            context.insert("search", &data.search);
            context.insert("search_route", SEARCH_ROUTE);
            context.insert("current_page", "search");
            render_template(&tera, "products/search.html", &context)
        }
        Err(err) => error_response(&tera, err),
    }
}

#[get("/product/{product_id}")]
pub async fn show_single_product(
    product_id: web::Path<u64>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match product_service::load_product(repo.get_ref(), product_id.into_inner()) {
        Ok(product) => {
            let mut context = Context::new();
            context.insert("product", &product);
            render_template(&tera, "products/show.html", &context)
        }
        Err(err) => error_response(&tera, err),
    }
}

fn render_products_page(repo: &DieselRepository, tera: &Tera, page: usize) -> HttpResponse {
    match product_service::load_products_page(repo, page) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("products", &data.products);
            context.insert("current_page", "pages");
            render_template(tera, "products/pages.html", &context)
        }
        Err(err) => error_response(tera, err),
    }
}

#[get("/pages/")]
pub async fn first_products_page(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_products_page(&repo, &tera, 1)
}

#[get("/pages/{page}")]
pub async fn products_page(
    page: web::Path<usize>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_products_page(&repo, &tera, page.into_inner())
}
