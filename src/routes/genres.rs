use actix_web::{HttpResponse, Responder, delete, get, patch, post, put, web};

use crate::domain::types::GenreId;
use crate::forms::genres::GenreForm;
use crate::repository::DieselRepository;
use crate::routes::{
    created, form_error_response, notification_response, service_error_response, unknown_id,
};
use crate::services::genres::{
    CreateGenreCommand, activate_genre as activate_genre_service,
    create_genre as create_genre_service, deactivate_genre as deactivate_genre_service,
    delete_genre as delete_genre_service, find_genre_by_id, list_genres,
    update_genre as update_genre_service,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_genre)
        .service(show_genres)
        .service(show_genre)
        .service(update_genre)
        .service(delete_genre)
        .service(activate_genre)
        .service(deactivate_genre);
}

#[post("/genres")]
pub async fn create_genre(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<GenreForm>,
) -> impl Responder {
    let command = match CreateGenreCommand::try_from(form) {
        Ok(command) => command,
        Err(err) => return form_error_response("Could not save genre", err),
    };
    match create_genre_service(command, repo.get_ref()) {
        Ok(output) => created(output),
        Err(notification) => notification_response("Could not save genre", notification),
    }
}

#[get("/genres")]
pub async fn show_genres(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_genres(repo.get_ref()) {
        Ok(genres) => HttpResponse::Ok().json(genres),
        Err(err) => service_error_response(err),
    }
}

#[get("/genres/{id}")]
pub async fn show_genre(repo: web::Data<DieselRepository>, path: web::Path<i64>) -> impl Responder {
    let Ok(id) = GenreId::new(path.into_inner()) else {
        return unknown_id("genre");
    };
    match find_genre_by_id(id, repo.get_ref()) {
        Ok(genre) => HttpResponse::Ok().json(genre),
        Err(err) => service_error_response(err),
    }
}

#[put("/genres/{id}")]
pub async fn update_genre(
    repo: web::Data<DieselRepository>,
    path: web::Path<i64>,
    web::Json(form): web::Json<GenreForm>,
) -> impl Responder {
    let Ok(id) = GenreId::new(path.into_inner()) else {
        return unknown_id("genre");
    };
    let command = match form.into_update(id) {
        Ok(command) => command,
        Err(err) => return form_error_response("Could not update genre", err),
    };
    match update_genre_service(command, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(notification) => notification_response("Could not update genre", notification),
    }
}

#[delete("/genres/{id}")]
pub async fn delete_genre(
    repo: web::Data<DieselRepository>,
    path: web::Path<i64>,
) -> impl Responder {
    let Ok(id) = GenreId::new(path.into_inner()) else {
        return unknown_id("genre");
    };
    match delete_genre_service(id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}

#[patch("/genres/{id}/activate")]
pub async fn activate_genre(
    repo: web::Data<DieselRepository>,
    path: web::Path<i64>,
) -> impl Responder {
    let Ok(id) = GenreId::new(path.into_inner()) else {
        return unknown_id("genre");
    };
    match activate_genre_service(id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}

#[patch("/genres/{id}/deactivate")]
pub async fn deactivate_genre(
    repo: web::Data<DieselRepository>,
    path: web::Path<i64>,
) -> impl Responder {
    let Ok(id) = GenreId::new(path.into_inner()) else {
        return unknown_id("genre");
    };
    match deactivate_genre_service(id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}
