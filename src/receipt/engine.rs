//! Typst rendering engine.
//!
//! Handles the low-level details of writing Typst source and letterhead images
//! to a temporary directory, invoking the compiler, and reading back the PDF.

use std::fs;
use std::process::Command;
use tempfile::tempdir;
use tempfile::TempDir;

use super::common::sanitize_filename;
use super::letterhead::LetterheadImage;
use super::GeneratorError;

/// Stateless engine for rendering Typst sources to PDF bytes.
pub struct TypstRenderEngine;

impl TypstRenderEngine {
    /// Compile a complete Typst source into a PDF.
    ///
    /// # Arguments
    /// * `typst_bin` - The Typst executable to invoke.
    /// * `template_filename` - Name the source is written under (e.g., "recibo_pago.typ").
    /// * `typst_source` - The complete, rendered Typst source code string.
    /// * `letterheads` - Images referenced by the source, written as `membrete-<i>.<ext>`.
    pub fn render(
        typst_bin: &str,
        template_filename: &str,
        typst_source: &str,
        letterheads: &[LetterheadImage],
    ) -> Result<Vec<u8>, GeneratorError> {
        let temp_dir = tempdir().map_err(GeneratorError::TempDir)?;

        fs::write(temp_dir.path().join(template_filename), typst_source)
            .map_err(GeneratorError::WriteTypst)?;

        for (index, image) in letterheads.iter().enumerate() {
            fs::write(temp_dir.path().join(image.file_name(index)), &image.bytes)
                .map_err(GeneratorError::WriteAsset)?;
        }

        let output_filename = format!(
            "{}.pdf",
            sanitize_filename(template_filename.trim_end_matches(".typ"), "recibo")
        );

        compile_typst_to_pdf(typst_bin, &temp_dir, template_filename, &output_filename)
    }
}

/// Compile a Typst source file to PDF.
fn compile_typst_to_pdf(
    typst_bin: &str,
    temp_dir: &TempDir,
    typ_filename: &str,
    output_filename: &str,
) -> Result<Vec<u8>, GeneratorError> {
    let typ_path = temp_dir.path().join(typ_filename);
    let output_path = temp_dir.path().join(output_filename);

    let status = Command::new(typst_bin)
        .arg("compile")
        .arg(&typ_path)
        .arg(&output_path)
        .current_dir(temp_dir.path())
        .status()
        .map_err(GeneratorError::TypstIo)?;

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        return Err(GeneratorError::TypstExit(code));
    }

    fs::read(&output_path).map_err(GeneratorError::ReadPdf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_reports_io_error() {
        let result = TypstRenderEngine::render(
            "typst-binary-that-does-not-exist",
            "recibo_pago.typ",
            "= Recibo",
            &[],
        );
        assert!(matches!(result, Err(GeneratorError::TypstIo(_))));
    }
}
