use actix_web::{HttpResponse, Responder, delete, get, patch, post, put, web};

use crate::domain::pagination::SearchQuery;
use crate::domain::types::CategoryId;
use crate::forms::SearchParams;
use crate::forms::categories::CategoryForm;
use crate::repository::DieselRepository;
use crate::routes::{created, notification_response, service_error_response, unknown_id};
use crate::services::categories::{
    activate_category as activate_category_service, create_category as create_category_service,
    deactivate_category as deactivate_category_service,
    delete_category as delete_category_service, find_category_by_id, list_categories,
    update_category as update_category_service,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_category)
        .service(show_categories)
        .service(show_category)
        .service(update_category)
        .service(delete_category)
        .service(activate_category)
        .service(deactivate_category);
}

#[post("/categories")]
pub async fn create_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    match create_category_service(form.into(), repo.get_ref()) {
        Ok(output) => created(output),
        Err(notification) => notification_response("Could not save category", notification),
    }
}

#[get("/categories")]
pub async fn show_categories(
    repo: web::Data<DieselRepository>,
    params: web::Query<SearchParams>,
) -> impl Responder {
    let query: SearchQuery = params.into_inner().into();
    match list_categories(&query, repo.get_ref()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}

#[get("/categories/{id}")]
pub async fn show_category(
    repo: web::Data<DieselRepository>,
    path: web::Path<i64>,
) -> impl Responder {
    let Ok(id) = CategoryId::new(path.into_inner()) else {
        return unknown_id("category");
    };
    match find_category_by_id(id, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => service_error_response(err),
    }
}

#[put("/categories/{id}")]
pub async fn update_category(
    repo: web::Data<DieselRepository>,
    path: web::Path<i64>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let Ok(id) = CategoryId::new(path.into_inner()) else {
        return unknown_id("category");
    };
    match update_category_service(form.into_update(id), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(notification) => notification_response("Could not update category", notification),
    }
}

#[delete("/categories/{id}")]
pub async fn delete_category(
    repo: web::Data<DieselRepository>,
    path: web::Path<i64>,
) -> impl Responder {
    let Ok(id) = CategoryId::new(path.into_inner()) else {
        return unknown_id("category");
    };
    match delete_category_service(id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}

#[patch("/categories/{id}/activate")]
pub async fn activate_category(
    repo: web::Data<DieselRepository>,
    path: web::Path<i64>,
) -> impl Responder {
    let Ok(id) = CategoryId::new(path.into_inner()) else {
        return unknown_id("category");
    };
    match activate_category_service(id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}

#[patch("/categories/{id}/deactivate")]
pub async fn deactivate_category(
    repo: web::Data<DieselRepository>,
    path: web::Path<i64>,
) -> impl Responder {
    let Ok(id) = CategoryId::new(path.into_inner()) else {
        return unknown_id("category");
    };
    match deactivate_category_service(id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}
