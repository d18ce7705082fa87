//! HTTP handlers for the receipt endpoints.

use actix_web::{error::InternalError, http::header, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::receipt::{amount_to_words, Amount, GeneratorError, ReceiptRequest};
use crate::{AppState, ErrorResponse};

const LETTERHEAD_FAILURE: &str = "Fallo al cargar la imagen de membrete para el recibo. Verifique que la URL es correcta y el bucket es público.";
const RENDER_FAILURE: &str = "Fallo en la generación del PDF.";

/// Issue date of the returned receipt, as printed on it (DD/MM/YYYY).
pub const FECHA_EMISION_HEADER: &str = "x-fecha-emision";

#[derive(Deserialize, ToSchema)]
pub struct AmountInWordsRequest {
    /// Monto en soles, number or decimal string
    #[schema(value_type = f64, example = 250.0)]
    pub monto: Amount,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AmountInWordsResponse {
    /// Monto normalizado a dos decimales
    pub monto: String,
    pub letras: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[utoipa::path(
    post,
    path = "/api/receipts",
    tag = "Receipts",
    request_body = ReceiptRequest,
    responses(
        (status = 200, description = "Receipt PDF as an application/pdf attachment"),
        (status = 400, description = "Invalid receipt data", body = ErrorResponse),
        (status = 502, description = "Letterhead image could not be loaded", body = ErrorResponse),
        (status = 500, description = "PDF rendering failed", body = ErrorResponse)
    )
)]
pub async fn create_receipt(
    state: web::Data<AppState>,
    body: web::Json<ReceiptRequest>,
) -> impl Responder {
    let request = body.into_inner();
    log::info!("Generating receipt {}", request.correlative);

    match state.generator.generate(request).await {
        Ok(document) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.filename),
            ))
            .insert_header((FECHA_EMISION_HEADER, document.fecha))
            .body(document.pdf),
        Err(GeneratorError::Validation(message)) => {
            log::info!("Rejected receipt request: {}", message);
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message))
        }
        Err(e @ GeneratorError::Letterhead { .. }) => {
            log::error!("Error preloading images for PDF: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse::new("BadGateway", LETTERHEAD_FAILURE))
        }
        Err(e) => {
            log::error!("Error generating receipt PDF: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(RENDER_FAILURE))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/receipts/amount-in-words",
    tag = "Receipts",
    request_body = AmountInWordsRequest,
    responses(
        (status = 200, description = "Amount spelled out", body = AmountInWordsResponse),
        (status = 400, description = "Invalid amount", body = ErrorResponse)
    )
)]
pub async fn amount_in_words(body: web::Json<AmountInWordsRequest>) -> impl Responder {
    let amount = body.monto;
    HttpResponse::Ok().json(AmountInWordsResponse {
        monto: amount.to_string(),
        letras: amount_to_words(amount),
    })
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Receipts",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Malformed JSON bodies answer with an `ErrorResponse` instead of plain text.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::bad_request(&err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Configure receipt routes; mount under `/api`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/receipts").route(web::post().to(create_receipt)))
        .service(
            web::resource("/receipts/amount-in-words").route(web::post().to(amount_in_words)),
        )
        .service(web::resource("/health").route(web::get().to(health)));
}
