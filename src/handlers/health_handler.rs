use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::response::{HealthDto, ModelHealthDto},
};

#[get("/api/health")]
async fn health() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(HealthDto { status: "ok" }))
}

/// Round-trips a trivial prompt through the configured model.
#[get("/api/health/model")]
async fn model_health(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.generation_service.ping().await?;

    Ok(HttpResponse::Ok().json(ModelHealthDto {
        status: "ok",
        model: state.config.gemini_model.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn health_endpoint_reports_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
    }
}
