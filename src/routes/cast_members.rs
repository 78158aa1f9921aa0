use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::pagination::SearchQuery;
use crate::domain::types::CastMemberId;
use crate::forms::SearchParams;
use crate::forms::cast_members::CastMemberForm;
use crate::repository::DieselRepository;
use crate::routes::{created, notification_response, service_error_response, unknown_id};
use crate::services::cast_members::{
    create_cast_member as create_cast_member_service,
    delete_cast_member as delete_cast_member_service, find_cast_member_by_id, list_cast_members,
    update_cast_member as update_cast_member_service,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_cast_member)
        .service(show_cast_members)
        .service(show_cast_member)
        .service(update_cast_member)
        .service(delete_cast_member);
}

#[post("/cast_members")]
pub async fn create_cast_member(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CastMemberForm>,
) -> impl Responder {
    match create_cast_member_service(form.into(), repo.get_ref()) {
        Ok(output) => created(output),
        Err(notification) => notification_response("Could not save cast member", notification),
    }
}

#[get("/cast_members")]
pub async fn show_cast_members(
    repo: web::Data<DieselRepository>,
    params: web::Query<SearchParams>,
) -> impl Responder {
    let query: SearchQuery = params.into_inner().into();
    match list_cast_members(&query, repo.get_ref()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}

#[get("/cast_members/{id}")]
pub async fn show_cast_member(
    repo: web::Data<DieselRepository>,
    path: web::Path<i64>,
) -> impl Responder {
    let Ok(id) = CastMemberId::new(path.into_inner()) else {
        return unknown_id("cast member");
    };
    match find_cast_member_by_id(id, repo.get_ref()) {
        Ok(member) => HttpResponse::Ok().json(member),
        Err(err) => service_error_response(err),
    }
}

#[put("/cast_members/{id}")]
pub async fn update_cast_member(
    repo: web::Data<DieselRepository>,
    path: web::Path<i64>,
    web::Json(form): web::Json<CastMemberForm>,
) -> impl Responder {
    let Ok(id) = CastMemberId::new(path.into_inner()) else {
        return unknown_id("cast member");
    };
    match update_cast_member_service(form.into_update(id), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(notification) => {
            notification_response("Could not update cast member", notification)
        }
    }
}

#[delete("/cast_members/{id}")]
pub async fn delete_cast_member(
    repo: web::Data<DieselRepository>,
    path: web::Path<i64>,
) -> impl Responder {
    let Ok(id) = CastMemberId::new(path.into_inner()) else {
        return unknown_id("cast member");
    };
    match delete_cast_member_service(id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}
