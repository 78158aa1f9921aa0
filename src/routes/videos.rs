use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::domain::types::VideoId;
use crate::forms::videos::CreateVideoForm;
use crate::repository::DieselRepository;
use crate::routes::{
    created, form_error_response, notification_response, service_error_response, unknown_id,
};
use crate::services::videos::{
    CreateVideoCommand, create_video as create_video_service,
    delete_video as delete_video_service, find_video_by_id,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_video)
        .service(show_video)
        .service(delete_video);
}

#[post("/videos")]
pub async fn create_video(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateVideoForm>,
) -> impl Responder {
    let command = match CreateVideoCommand::try_from(form) {
        Ok(command) => command,
        Err(err) => return form_error_response("Could not save video", err),
    };
    match create_video_service(command, repo.get_ref()) {
        Ok(output) => created(output),
        Err(notification) => notification_response("Could not save video", notification),
    }
}

#[get("/videos/{id}")]
pub async fn show_video(repo: web::Data<DieselRepository>, path: web::Path<i64>) -> impl Responder {
    let Ok(id) = VideoId::new(path.into_inner()) else {
        return unknown_id("video");
    };
    match find_video_by_id(id, repo.get_ref()) {
        Ok(video) => HttpResponse::Ok().json(video),
        Err(err) => service_error_response(err),
    }
}

#[delete("/videos/{id}")]
pub async fn delete_video(
    repo: web::Data<DieselRepository>,
    path: web::Path<i64>,
) -> impl Responder {
    let Ok(id) = VideoId::new(path.into_inner()) else {
        return unknown_id("video");
    };
    match delete_video_service(id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}
