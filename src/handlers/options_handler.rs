use actix_web::{get, HttpResponse};

use crate::errors::AppError;
use crate::models::dto::response::OptionsCatalogDto;

#[get("/api/options")]
async fn get_options() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(OptionsCatalogDto::catalog()))
}
