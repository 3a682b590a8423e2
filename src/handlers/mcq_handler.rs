use std::path::Path;

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{GenerateMcqRequest, GeneratePdfMcqRequest},
        response::{GenerateMcqResponse, McqDto},
    },
    services::mcq_writer,
};

#[get("/api/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[post("/api/mcqs/generate")]
pub async fn generate_mcqs(
    state: web::Data<AppState>,
    request: web::Json<GenerateMcqRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let mcqs = state
        .mcq_generator
        .generate_batch(&request.topic, request.complexity, request.count)
        .await;

    if request.save {
        for mcq in &mcqs {
            // Best effort: a failed append must not fail the request.
            if let Err(e) = mcq_writer::append_mcq(&state.config.output_file, mcq) {
                log::error!(
                    "Failed to append MCQ to '{}': {}",
                    state.config.output_file,
                    e
                );
            }
        }
    }

    let response = GenerateMcqResponse {
        mcqs: mcqs.into_iter().map(McqDto::from).collect(),
    };
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/mcqs/from-pdf")]
pub async fn generate_mcq_from_pdf(
    state: web::Data<AppState>,
    request: web::Json<GeneratePdfMcqRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let mcq = state
        .pdf_service
        .generate_from_pdf(Path::new(&request.pdf_path), &request.topic, request.complexity)
        .await?;

    Ok(HttpResponse::Ok().json(McqDto::from(mcq)))
}
