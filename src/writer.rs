//! # Structured Writer
//!
//! Renders manifest trees as block-style YAML and writes them out.
//!
//! `serde_yaml` quotes any scalar starting with `{`, which stops Helm from
//! evaluating `{{ ... }}` placeholders. [`TemplateStyle::Bare`] re-emits
//! those scalars unquoted while rendering, so each file is written once.

use crate::error::SwapError;
use regex::Regex;
use serde_yaml::Value;
use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// A quoted scalar made of exactly one `{{ ... }}` expression with no inner braces
static QUOTED_TEMPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"'(\{\{[^{}]*\}\})'|"(\{\{[^{}]*\}\})""#)
        .expect("QUOTED_TEMPLATE pattern is valid - this should never happen")
});

/// How template-shaped scalars are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateStyle {
    /// Leave serializer quoting untouched
    Quoted,
    /// Emit `{{ ... }}` scalars without quotes
    Bare,
}

/// Render a document as YAML text.
///
/// `serde_yaml` always uses block style and never wraps long scalars.
pub fn render(document: &Value, style: TemplateStyle, path: &Path) -> Result<String, SwapError> {
    let text = serde_yaml::to_string(document).map_err(|source| SwapError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match style {
        TemplateStyle::Quoted => text,
        TemplateStyle::Bare => unquote_templates(&text).into_owned(),
    })
}

/// Strip matching quotes around `{{ ... }}` expressions.
#[must_use]
pub fn unquote_templates(text: &str) -> Cow<'_, str> {
    QUOTED_TEMPLATE.replace_all(text, |caps: &regex::Captures<'_>| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map_or_else(String::new, |m| m.as_str().to_string())
    })
}

/// Overwrite `path` with rendered YAML.
pub fn write_manifest(path: &Path, text: &str) -> Result<(), SwapError> {
    std::fs::write(path, text).map_err(|source| SwapError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod unquote_templates_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_single_quotes_removed() {
            let text = "DbPassword: '{{ .Values.sealedsecrets.encrypteddata.dbpassword }}'\n";
            assert_eq!(
                unquote_templates(text),
                "DbPassword: {{ .Values.sealedsecrets.encrypteddata.dbpassword }}\n"
            );
        }

        #[test]
        fn test_double_quotes_removed() {
            let text = "key: \"{{ .Values.x }}\"\n";
            assert_eq!(unquote_templates(text), "key: {{ .Values.x }}\n");
        }

        #[test]
        fn test_mismatched_quotes_left_alone() {
            let text = "key: '{{ .Values.x }}\"\n";
            assert_eq!(unquote_templates(text), text);
        }

        #[test]
        fn test_nested_braces_left_alone() {
            let text = "key: '{{ {a} }}'\n";
            assert_eq!(unquote_templates(text), text);
        }

        #[test]
        fn test_plain_ciphertext_untouched() {
            let text = "key: AgBy3i4OJSWK+PiTySYZZA\n";
            assert!(matches!(unquote_templates(text), Cow::Borrowed(_)));
        }
    }

    mod render_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        fn doc() -> Value {
            serde_yaml::from_str(
                "spec:\n  encryptedData:\n    DbPassword: '{{ .Values.sealedsecrets.encrypteddata.dbpassword }}'\n",
            )
            .unwrap()
        }

        #[test]
        fn test_render_bare() {
            let text = render(&doc(), TemplateStyle::Bare, Path::new("secret.yml")).unwrap();
            assert!(text.contains(
                "DbPassword: {{ .Values.sealedsecrets.encrypteddata.dbpassword }}"
            ));
            assert!(!text.contains('\''));
        }

        #[test]
        fn test_render_quoted() {
            let text = render(&doc(), TemplateStyle::Quoted, Path::new("values.yml")).unwrap();
            assert!(text.contains("'{{ .Values.sealedsecrets.encrypteddata.dbpassword }}'"));
        }

        #[test]
        fn test_render_does_not_wrap_long_scalars() {
            let long = "A".repeat(400);
            let document: Value =
                serde_yaml::from_str(&format!("key: {long}\n")).unwrap();
            let text = render(&document, TemplateStyle::Quoted, Path::new("values.yml")).unwrap();
            assert_eq!(text, format!("key: {long}\n"));
        }
    }
}
