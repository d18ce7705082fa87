//! Generator for the Recibo de Pago.
//!
//! Builds the association's payment receipt: client data, the amount spelled
//! out for legal purposes, the payment detail table and the signature line,
//! laid over the configured letterhead images.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use utoipa::ToSchema;

use super::amount::Amount;
use super::common::{
    escape_typst_string, format_numeric_date, format_spanish_date, get_static_dir,
    sanitize_filename,
};
use super::engine::TypstRenderEngine;
use super::letterhead::preload_images;
use super::traits::{Generator, Validator};
use super::words::amount_to_words;
use super::{GeneratedDocument, GeneratorError};

const TEMPLATE_FILE: &str = "recibo_pago.typ";
const TEMPLATE_FN: &str = "#recibo_pago()";

/// Datos del recibo de pago, as sent by the dashboard form.
#[derive(Debug, Clone, Deserialize, Default, ToSchema)]
pub struct ReceiptRequest {
    /// Número correlativo del recibo
    pub correlative: String,
    pub client_full_name: String,
    pub client_dni: String,
    /// Monto en soles, number or decimal string
    #[schema(value_type = f64, example = 250.0)]
    pub monto: Amount,
    pub concepto: String,
    pub metodo_pago: String,
    #[serde(default)]
    pub numero_operacion: Option<String>,
    /// Fecha de emisión (YYYY-MM-DD)
    pub fecha_emision: NaiveDate,
}

impl Validator for ReceiptRequest {
    fn validate(&self) -> Result<(), String> {
        use super::validation::*;

        let mut errors = ValidationErrors::new();

        validate_required(&self.correlative, "correlative", "Correlativo", &mut errors);
        validate_required(
            &self.client_full_name,
            "client_full_name",
            "Nombre del cliente",
            &mut errors,
        );
        validate_dni(&self.client_dni, "client_dni", &mut errors);
        validate_amount(self.monto, "monto", &mut errors);
        validate_required(&self.concepto, "concepto", "Concepto", &mut errors);
        validate_required(&self.metodo_pago, "metodo_pago", "Método de pago", &mut errors);

        errors.into_result()
    }
}

impl ReceiptRequest {
    pub fn validate(&self) -> Result<(), String> {
        Validator::validate(self)
    }
}

/// Fixed settings shared by every receipt.
#[derive(Debug, Clone)]
pub struct ReceiptSettings {
    pub organization: String,
    pub ruc: String,
    pub letterhead_urls: Vec<String>,
    pub typst_bin: String,
}

/// Generator for the Recibo de Pago.
pub struct ReceiptGenerator {
    template: String,
    settings: ReceiptSettings,
    client: reqwest::Client,
}

impl ReceiptGenerator {
    /// Create a new generator, loading the template from the static directory.
    pub fn new(settings: ReceiptSettings, client: reqwest::Client) -> Result<Self, GeneratorError> {
        let template_path = get_static_dir().join(TEMPLATE_FILE);
        let template = fs::read_to_string(&template_path).map_err(GeneratorError::TemplateIo)?;
        Ok(Self {
            template,
            settings,
            client,
        })
    }

    /// Full Typst source for `request`, with `membretes` as background image paths.
    pub fn render_source(&self, request: &ReceiptRequest, membretes: &[String]) -> String {
        let numero_operacion = request
            .numero_operacion
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("---");

        format!(
            r#"#let recibo_pago(
  data: (
    correlativo: "{}",
    cliente: "{}",
    dni: "{}",
    monto: "{}",
    monto_letras: "{}",
    concepto: "{}",
    metodo_pago: "{}",
    numero_operacion: "{}",
  ),
  meta: (
    organizacion: "{}",
    ruc: "{}",
    fecha: "{}",
    fecha_larga: "{}",
    membretes: {},
  ),
) = {{
{}

{}
"#,
            escape_typst_string(request.correlative.trim()),
            escape_typst_string(request.client_full_name.trim()),
            escape_typst_string(request.client_dni.trim()),
            request.monto,
            amount_to_words(request.monto),
            escape_typst_string(request.concepto.trim()),
            escape_typst_string(request.metodo_pago.trim()),
            escape_typst_string(numero_operacion),
            escape_typst_string(&self.settings.organization),
            escape_typst_string(&self.settings.ruc),
            format_numeric_date(request.fecha_emision),
            format_spanish_date(request.fecha_emision),
            typst_array(membretes),
            self.extract_function_body(),
            TEMPLATE_FN,
        )
    }

    fn extract_function_body(&self) -> &str {
        if let Some(start) = self.template.find(") = {") {
            let body_start = start + 5;
            if let Some(end) = self.template.rfind(TEMPLATE_FN) {
                if body_start <= end {
                    return &self.template[body_start..end];
                }
            }
        }
        &self.template
    }
}

/// Typst array literal; a single element needs the trailing comma.
fn typst_array(items: &[String]) -> String {
    if items.is_empty() {
        return "()".to_string();
    }
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("\"{}\"", escape_typst_string(item)))
        .collect();
    format!("({},)", quoted.join(", "))
}

#[async_trait]
impl Generator<ReceiptRequest> for ReceiptGenerator {
    /// Validate, preload letterheads, then compile the receipt.
    async fn generate(&self, request: ReceiptRequest) -> Result<GeneratedDocument, GeneratorError> {
        Validator::validate(&request).map_err(GeneratorError::Validation)?;

        let letterheads = preload_images(&self.client, &self.settings.letterhead_urls).await?;
        let membretes: Vec<String> = letterheads
            .iter()
            .enumerate()
            .map(|(i, image)| image.file_name(i))
            .collect();

        let source = self.render_source(&request, &membretes);
        let typst_bin = self.settings.typst_bin.clone();
        let pdf = tokio::task::spawn_blocking(move || {
            TypstRenderEngine::render(&typst_bin, TEMPLATE_FILE, &source, &letterheads)
        })
        .await
        .map_err(GeneratorError::RenderTask)??;

        log::info!(
            "Generated receipt {} ({} bytes)",
            request.correlative,
            pdf.len()
        );

        Ok(GeneratedDocument {
            filename: format!(
                "recibo-{}.pdf",
                sanitize_filename(&request.correlative, "sin-numero")
            ),
            pdf,
            fecha: format_numeric_date(request.fecha_emision),
        })
    }
}

impl ReceiptGenerator {
    pub async fn generate(
        &self,
        request: ReceiptRequest,
    ) -> Result<GeneratedDocument, GeneratorError> {
        Generator::generate(self, request).await
    }
}
