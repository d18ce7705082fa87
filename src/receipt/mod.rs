//! Receipt module - amount wording and PDF generation for payment receipts.
//!
//! - `words` - monetary amounts spelled out for the legal receipt text
//! - `generator` - `ReciboPago` documents rendered through a Typst template

pub mod amount;
pub mod common;
pub mod engine;
pub mod generator;
pub mod letterhead;
pub mod traits;
pub mod validation;
pub mod words;

pub use amount::{Amount, AmountError};
pub use engine::TypstRenderEngine;
pub use generator::{ReceiptGenerator, ReceiptRequest};
pub use traits::{Generator, Validator};
pub use words::{amount_to_words, integer_to_words};

use thiserror::Error;

/// Errors that can occur during receipt generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to load Typst template: {0}")]
    TemplateIo(#[source] std::io::Error),
    #[error("invalid receipt data: {0}")]
    Validation(String),
    #[error("failed to load letterhead image {url}: {source}")]
    Letterhead {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteTypst(#[source] std::io::Error),
    #[error("failed to write letterhead image: {0}")]
    WriteAsset(#[source] std::io::Error),
    #[error("Typst CLI execution failed: {0}")]
    TypstIo(#[source] std::io::Error),
    #[error("Typst CLI exited with status {0}")]
    TypstExit(i32),
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
    #[error("render task aborted: {0}")]
    RenderTask(#[source] tokio::task::JoinError),
}

/// Result of a successful receipt generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
    pub fecha: String,
}
