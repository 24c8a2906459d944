use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::response::{CopyContentDto, CopyLabelDto, GeneratedContentDto, ToggleAnswerDto},
    services::session::NO_CONTENT_MESSAGE,
};

#[get("/api/content")]
async fn get_content(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let outcome = state
        .session
        .outcome()
        .await
        .ok_or_else(|| AppError::NotFound(NO_CONTENT_MESSAGE.to_string()))?;
    let revealed = state.session.revealed_answers().await;

    Ok(HttpResponse::Ok().json(GeneratedContentDto::from_outcome(outcome, revealed)))
}

#[post("/api/content/copy")]
async fn copy_content(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let outcome = state
        .session
        .outcome()
        .await
        .ok_or_else(|| AppError::NotFound(NO_CONTENT_MESSAGE.to_string()))?;

    state.session.note_copied().await;
    let label = state.session.copy_label().await;

    Ok(HttpResponse::Ok().json(CopyContentDto {
        text: outcome.raw,
        label,
    }))
}

#[get("/api/content/copy-label")]
async fn copy_label(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let label = state.session.copy_label().await;
    Ok(HttpResponse::Ok().json(CopyLabelDto { label }))
}

/// Streams the exact raw bytes received from the model, never a
/// re-serialization of the parsed quiz.
#[get("/api/content/download")]
async fn download_content(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let outcome = state
        .session
        .outcome()
        .await
        .ok_or_else(|| AppError::NotFound(NO_CONTENT_MESSAGE.to_string()))?;

    let content_type = outcome.content_type();
    let filename = format!("ai-generated-content.{}", content_type.file_extension());

    Ok(HttpResponse::Ok()
        .content_type(content_type.mime_type())
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(outcome.raw))
}

#[post("/api/content/quiz/answers/{key}/toggle")]
async fn toggle_answer(
    state: web::Data<AppState>,
    key: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let key = key.into_inner();
    let revealed = state.session.toggle_answer(&key).await?;

    Ok(HttpResponse::Ok().json(ToggleAnswerDto { key, revealed }))
}
