//! Template rendering

use crate::document::TemplateDocument;
use crate::error::TemplateError;
use crate::package::replace_document_part;
use crate::xml::rewrite_paragraphs;
use glr_domain::{normalize_field_name, FieldMapping};
use regex::Regex;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Default file name of a rendered report
pub const OUTPUT_FILE_NAME: &str = "Final_GLR_Report.docx";

/// Media type of a rendered report
pub const DOCX_MEDIA_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}|\[(.*?)\]").expect("valid regex"));

/// A filled-in report, ready to be written or served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// DOCX package bytes
    pub bytes: Vec<u8>,
    /// Suggested file name
    pub file_name: String,
    /// Media type of `bytes`
    pub media_type: &'static str,
}

impl RenderedDocument {
    /// Use a different file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Write the document into `dir` under its file name
    ///
    /// The directory is created if needed. Returns the written path.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, TemplateError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;

        tracing::info!("Wrote {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// Replace every known placeholder in `text`
///
/// Text is scanned once, left to right; substituted values are never
/// scanned again. Placeholders whose normalized name is not a key of
/// `mapping` are left exactly as written, and scanning resumes just past
/// their opening delimiter so a known placeholder inside them is still
/// filled. Returns `Cow::Borrowed` when nothing was replaced.
pub fn substitute<'t>(text: &'t str, mapping: &FieldMapping) -> Cow<'t, str> {
    let mut out = String::new();
    let mut copied = 0;
    let mut pos = 0;

    while let Some(caps) = PLACEHOLDER.captures_at(text, pos) {
        let Some(whole) = caps.get(0) else { break };
        let (name, opening) = match (caps.get(1), caps.get(2)) {
            (Some(name), _) => (name.as_str(), 2),
            (None, Some(name)) => (name.as_str(), 1),
            (None, None) => ("", 1),
        };

        match mapping.get(&normalize_field_name(name)) {
            Some(value) => {
                out.push_str(&text[copied..whole.start()]);
                out.push_str(value);
                copied = whole.end();
                pos = whole.end();
            }
            None => pos = whole.start() + opening,
        }
    }

    if copied == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[copied..]);
    Cow::Owned(out)
}

/// Fill a template with resolved field values
///
/// Produces a new package; `template` is left as it was.
pub fn render(template: &TemplateDocument, mapping: &FieldMapping) -> Result<RenderedDocument, TemplateError> {
    let mut changed = 0usize;

    let document_xml = rewrite_paragraphs(template.document_xml(), |text| {
        match substitute(text, mapping) {
            Cow::Owned(new_text) if new_text != text => {
                changed += 1;
                Some(new_text)
            }
            _ => None,
        }
    })?;

    let bytes = replace_document_part(template.package(), &document_xml)?;

    tracing::info!(
        "Rendered template: {} of {} paragraphs changed, {} bytes",
        changed,
        template.containers().len(),
        bytes.len()
    );

    Ok(RenderedDocument {
        bytes,
        file_name: OUTPUT_FILE_NAME.to_string(),
        media_type: DOCX_MEDIA_TYPE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{discover_placeholders, minimal_docx, ContainerLocation};
    use proptest::prelude::*;

    fn mapping(pairs: &[(&str, &str)]) -> FieldMapping {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn template(body: &str) -> TemplateDocument {
        let xml = format!(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );
        TemplateDocument::from_bytes(minimal_docx(&xml).unwrap()).unwrap()
    }

    #[test]
    fn test_substitute_both_syntaxes() {
        let values = mapping(&[("INSURED_NAME", "Jane Doe"), ("DATE_LOSS", "3/4/2024")]);

        let out = substitute("Insured: [INSURED_NAME], loss {{DATE_LOSS}}", &values);
        assert_eq!(out, "Insured: Jane Doe, loss 3/4/2024");
    }

    #[test]
    fn test_substitute_normalizes_names() {
        let values = mapping(&[("INSURED_NAME", "Jane Doe")]);

        assert_eq!(substitute("[Insured Name] / {{ insured-name }}", &values), "Jane Doe / Jane Doe");
    }

    #[test]
    fn test_unknown_placeholders_untouched() {
        let values = mapping(&[("KNOWN", "x")]);

        let out = substitute("[UNKNOWN] {{ Other }} [KNOWN]", &values);
        assert_eq!(out, "[UNKNOWN] {{ Other }} x");
    }

    #[test]
    fn test_nothing_to_replace_borrows() {
        let values = mapping(&[("KNOWN", "x")]);
        assert!(matches!(substitute("plain [UNKNOWN]", &values), Cow::Borrowed(_)));
    }

    #[test]
    fn test_placeholder_inside_unknown_brackets() {
        let values = mapping(&[("DATE_LOSS", "3/4/2024"), ("INSURED_NAME", "Jane Doe")]);

        assert_eq!(substitute("[see {{DATE_LOSS}}]", &values), "[see 3/4/2024]");
        assert_eq!(substitute("Note [x [INSURED_NAME]", &values), "Note [x Jane Doe");
        assert_eq!(substitute("{{ a [INSURED_NAME] }}", &values), "{{ a Jane Doe }}");
    }

    #[test]
    fn test_replacement_owns() {
        let values = mapping(&[("KNOWN", "x")]);
        assert!(matches!(substitute("[KNOWN]", &values), Cow::Owned(_)));
    }

    #[test]
    fn test_values_not_rescanned() {
        let values = mapping(&[("A", "[B]"), ("B", "wrong")]);
        assert_eq!(substitute("[A]", &values), "[B]");
    }

    #[test]
    fn test_empty_value_replaces() {
        let values = mapping(&[("MORTGAGEE", "")]);
        assert_eq!(substitute("Mortgagee: [MORTGAGEE].", &values), "Mortgagee: .");
    }

    #[test]
    fn test_render_body_and_table() {
        let doc = template(concat!(
            "<w:p><w:r><w:t>Insured: [INSURED_NAME]</w:t></w:r></w:p>",
            "<w:tbl><w:tr><w:tc><w:p><w:r><w:t>{{DATE_LOSS}}</w:t></w:r></w:p></w:tc></w:tr></w:tbl>",
        ));
        let values = mapping(&[("INSURED_NAME", "Jane Doe"), ("DATE_LOSS", "3/4/2024")]);

        let rendered = render(&doc, &values).unwrap();
        assert_eq!(rendered.file_name, OUTPUT_FILE_NAME);
        assert_eq!(rendered.media_type, DOCX_MEDIA_TYPE);

        let out = TemplateDocument::from_bytes(rendered.bytes).unwrap();
        assert_eq!(out.containers()[0].text, "Insured: Jane Doe");
        let cell = out.containers_at(ContainerLocation::TableCell).next().unwrap();
        assert_eq!(cell.text, "3/4/2024");
        assert!(discover_placeholders(&out).is_empty());
    }

    #[test]
    fn test_render_split_run_placeholder() {
        let doc = template(
            r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Claim </w:t></w:r><w:r><w:t>[CLAIM_</w:t></w:r><w:r><w:t>NUMBER]</w:t></w:r></w:p>"#,
        );
        let values = mapping(&[("CLAIM_NUMBER", "C-42")]);

        let out = TemplateDocument::from_bytes(render(&doc, &values).unwrap().bytes).unwrap();
        assert_eq!(out.containers()[0].text, "Claim C-42");
    }

    #[test]
    fn test_render_fills_every_discovered_name() {
        let doc = template(concat!(
            "<w:p><w:r><w:t>[see {{DATE_LOSS}}]</w:t></w:r></w:p>",
            "<w:p><w:r><w:t>Note [x [INSURED_NAME]</w:t></w:r></w:p>",
        ));
        let discovered = discover_placeholders(&doc);
        let values: FieldMapping = discovered
            .iter()
            .map(|name| (normalize_field_name(name), "v".to_string()))
            .collect();

        let out = TemplateDocument::from_bytes(render(&doc, &values).unwrap().bytes).unwrap();
        assert_eq!(out.containers()[0].text, "v");
        assert_eq!(out.containers()[1].text, "Note v");
        assert!(discover_placeholders(&out).is_empty());
    }

    #[test]
    fn test_render_leaves_template_intact() {
        let doc = template("<w:p><w:r><w:t>[INSURED_NAME]</w:t></w:r></w:p>");
        let before = doc.text();

        render(&doc, &mapping(&[("INSURED_NAME", "Jane Doe")])).unwrap();
        assert_eq!(doc.text(), before);
    }

    #[test]
    fn test_write_to_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let doc = template("<w:p><w:r><w:t>[X]</w:t></w:r></w:p>");
        let rendered = render(&doc, &mapping(&[("X", "y")])).unwrap().with_file_name("out.docx");

        let path = rendered.write_to(dir.path().join("nested")).unwrap();
        assert_eq!(path, dir.path().join("nested").join("out.docx"));
        assert_eq!(std::fs::read(&path).unwrap(), rendered.bytes);
    }

    proptest! {
        #[test]
        fn prop_unknown_text_byte_identical(text in "[0-9 \\[\\]{}.]{0,40}") {
            let values = mapping(&[("KNOWN", "x")]);
            prop_assert_eq!(substitute(&text, &values), text.as_str());
        }

        #[test]
        fn prop_known_keys_fully_replaced(count in 1usize..6, value in "[a-z ]{0,10}") {
            let values = mapping(&[("FIELD", value.as_str())]);
            let text = "[FIELD] {{FIELD}} ".repeat(count);

            let out = substitute(&text, &values);
            prop_assert!(!out.contains("FIELD"));
            prop_assert_eq!(out.into_owned(), format!("{value} {value} ").repeat(count));
        }
    }
}
