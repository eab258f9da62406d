//! DOCX package access

use crate::error::TemplateError;
use std::io::{Cursor, Read, Write};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Path of the main document part inside the package
pub(crate) const DOCUMENT_PART: &str = "word/document.xml";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Read the main document part as text
pub(crate) fn read_document_part(package: &[u8]) -> Result<String, TemplateError> {
    let mut archive = ZipArchive::new(Cursor::new(package))?;

    let mut entry = archive.by_name(DOCUMENT_PART).map_err(|e| match e {
        ZipError::FileNotFound => TemplateError::MissingDocumentPart,
        other => TemplateError::Zip(other),
    })?;

    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Copy a package, replacing the main document part
///
/// Every other entry is copied without recompression.
pub(crate) fn replace_document_part(package: &[u8], document_xml: &str) -> Result<Vec<u8>, TemplateError> {
    let mut archive = ZipArchive::new(Cursor::new(package))?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for index in 0..archive.len() {
        let entry = archive.by_index_raw(index)?;
        if entry.name() == DOCUMENT_PART {
            drop(entry);
            writer.start_file(DOCUMENT_PART, options)?;
            writer.write_all(document_xml.as_bytes())?;
        } else {
            writer.raw_copy_file(entry)?;
        }
    }

    Ok(writer.finish()?.into_inner())
}

/// Build a minimal DOCX package around a `word/document.xml` body
///
/// Produces the content-types and relationship parts Word needs to open
/// the file. Used to create templates and test fixtures programmatically.
///
/// # Examples
///
/// ```
/// use glr_template::{minimal_docx, TemplateDocument};
///
/// let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>[INSURED_NAME]</w:t></w:r></w:p></w:body></w:document>"#;
/// let template = TemplateDocument::from_bytes(minimal_docx(xml).unwrap()).unwrap();
/// assert_eq!(template.containers()[0].text, "[INSURED_NAME]");
/// ```
pub fn minimal_docx(document_xml: &str) -> Result<Vec<u8>, TemplateError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, body) in [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        (DOCUMENT_PART, document_xml),
    ] {
        writer.start_file(name, options)?;
        writer.write_all(body.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}
