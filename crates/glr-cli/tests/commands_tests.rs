//! Integration tests for the CLI commands

use glr_cli::cli::{ExtractArgs, FillArgs, PlaceholdersArgs};
use glr_cli::commands::{execute_extract, execute_fill, execute_placeholders};
use glr_cli::config::OutputFormat;
use glr_cli::{CliError, Config, Formatter};
use glr_template::{minimal_docx, TemplateDocument};
use std::path::{Path, PathBuf};

/// Single-page PDF drawing `line` in Helvetica
fn one_page_pdf(line: &str) -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 72 720 Td ({line}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>".to_string(),
        format!("<< /Length {} >>\nstream\n{}\nendstream", content.len(), content),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::new();
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
    for offset in offsets {
        pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    pdf.extend_from_slice(
        format!("trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n", objects.len() + 1, xref).as_bytes(),
    );
    pdf
}

fn write_template(dir: &Path, paragraph: &str) -> PathBuf {
    let xml = format!(
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>{paragraph}</w:t></w:r></w:p></w:body></w:document>"#
    );
    let path = dir.join("template.docx");
    std::fs::write(&path, minimal_docx(&xml).unwrap()).unwrap();
    path
}

fn formatter() -> Formatter {
    Formatter::new(OutputFormat::Json, false)
}

#[tokio::test]
async fn test_fill_without_ai_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path(), "Insured: [INSURED_NAME] {{ADJUSTER}}");
    let report = dir.path().join("inspection.pdf");
    std::fs::write(&report, one_page_pdf("Insured: Jane Doe")).unwrap();
    let out = dir.path().join("out");

    let args = FillArgs {
        template,
        reports: vec![report],
        out: Some(out.clone()),
        no_ai: true,
    };
    execute_fill(args, &Config::default(), &formatter()).await.unwrap();

    let written = TemplateDocument::from_path(out.join("Final_GLR_Report.docx")).unwrap();
    let text = &written.containers()[0].text;
    assert!(text.starts_with("Insured: Jane Doe"), "rendered: {text:?}");
    assert!(text.ends_with("{{ADJUSTER}}"));
}

#[tokio::test]
async fn test_fill_missing_report_file() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path(), "[INSURED_NAME]");

    let args = FillArgs {
        template,
        reports: vec![dir.path().join("missing.pdf")],
        out: Some(dir.path().join("out")),
        no_ai: true,
    };
    let result = execute_fill(args, &Config::default(), &formatter()).await;

    assert!(matches!(result, Err(CliError::Report(_))));
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn test_fill_rejects_non_docx_template() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("template.docx");
    std::fs::write(&template, b"not a zip").unwrap();
    let report = dir.path().join("inspection.pdf");
    std::fs::write(&report, one_page_pdf("Insured: Jane Doe")).unwrap();

    let args = FillArgs {
        template,
        reports: vec![report],
        out: Some(dir.path().join("out")),
        no_ai: true,
    };
    let result = execute_fill(args, &Config::default(), &formatter()).await;

    assert!(matches!(result, Err(CliError::Pipeline(_))));
}

#[test]
fn test_placeholders_command() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path(), "[Insured Name] {{DATE_LOSS}}");

    execute_placeholders(PlaceholdersArgs { template }, &formatter()).unwrap();
}

#[test]
fn test_extract_rejects_non_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("notes.pdf");
    std::fs::write(&report, b"plain text").unwrap();

    let result = execute_extract(ExtractArgs { reports: vec![report] }, &Config::default(), &formatter());
    assert!(matches!(result, Err(CliError::Report(_))));
}
