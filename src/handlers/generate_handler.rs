use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::GenerateContentRequestDto,
    models::dto::response::GeneratedContentDto,
};

#[post("/api/generate")]
async fn generate_content(
    state: web::Data<AppState>,
    request: web::Json<GenerateContentRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let options = request.into_options()?;
    let outcome = state.generation_service.generate(options).await?;

    // A fresh cycle always starts with every answer hidden.
    Ok(HttpResponse::Ok().json(GeneratedContentDto::from_outcome(outcome, Vec::new())))
}
