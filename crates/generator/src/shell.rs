//! The client-built HTML shell and marker splicing.
//!
//! Replacement is literal: inserted markup is written as-is and never scanned
//! for markers. Escaping is the renderer's job.

use roadtrip_ssg_core::{Error, Locale, Result};

pub const HEAD_MARKER: &str = "<!--helmet-->";
pub const BODY_MARKER: &str = "<!--ssr-outlet-->";
pub const LANG_ATTR: &str = r#"<html lang="de">"#;

/// A validated shell template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlShell {
    template: String,
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

impl HtmlShell {
    /// Check that both markers occur exactly once and the language attribute
    /// is present.
    pub fn parse(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        for marker in [HEAD_MARKER, BODY_MARKER] {
            let n = count(&template, marker);
            if n != 1 {
                return Err(Error::Shell(format!(
                    "expected exactly one '{}' marker, found {}",
                    marker, n
                )));
            }
        }
        if !template.contains(LANG_ATTR) {
            return Err(Error::Shell(format!("missing '{}'", LANG_ATTR)));
        }
        Ok(Self { template })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Shell with the document language set to `locale`.
    pub fn with_lang(&self, locale: Locale) -> Self {
        let attr = format!(r#"<html lang="{}">"#, locale.as_str());
        Self {
            template: self.template.replacen(LANG_ATTR, &attr, 1),
        }
    }

    /// Substitute `head` and `body` for their markers.
    pub fn splice(&self, head: &str, body: &str) -> String {
        let mut out = String::with_capacity(self.template.len() + head.len() + body.len());
        let mut rest = self.template.as_str();

        // Markers in template order, so nothing inserted gets re-scanned
        let mut markers = [(HEAD_MARKER, head), (BODY_MARKER, body)];
        markers.sort_by_key(|(marker, _)| rest.find(marker).unwrap_or(usize::MAX));

        for (marker, content) in markers {
            if let Some(idx) = rest.find(marker) {
                out.push_str(&rest[..idx]);
                out.push_str(content);
                rest = &rest[idx + marker.len()..];
            }
        }
        out.push_str(rest);
        out
    }
}
