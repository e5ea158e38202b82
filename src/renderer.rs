//! Placeholder substitution for template contents.
//! Only flat `{{ key }}` tokens are recognised; there are no expressions,
//! filters or control structures.

use crate::config::Substitutions;
use crate::constants::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders raw template bytes with the given substitutions.
    ///
    /// # Arguments
    /// * `template` - Template content, not necessarily UTF-8
    /// * `substitutions` - Placeholder keys and their replacement values
    ///
    /// # Returns
    /// * `Vec<u8>` - Newly allocated rendered content
    fn render(&self, template: &[u8], substitutions: &Substitutions) -> Vec<u8>;
}

/// Renderer replacing every literal `{{ key }}` token with its value.
///
/// Keys are applied one after another in mapping order. Values are inserted
/// verbatim; if a value contains another key's token, whether that token is
/// replaced depends on which key comes first.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &[u8], substitutions: &Substitutions) -> Vec<u8> {
        let mut output = template.to_vec();
        for (key, value) in substitutions {
            let token = placeholder(key);
            output = replace_all(&output, token.as_bytes(), value.as_bytes());
        }
        output
    }
}

/// Builds the exact token matched for `key`, e.g. `{{ name }}`.
pub fn placeholder(key: &str) -> String {
    format!("{PLACEHOLDER_OPEN}{key}{PLACEHOLDER_CLOSE}")
}

/// Replaces every non-overlapping occurrence of `needle`, scanning left to right.
pub fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    if needle.is_empty() {
        return haystack.to_vec();
    }

    let mut output = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(pos) = find(rest, needle) {
        output.extend_from_slice(&rest[..pos]);
        output.extend_from_slice(replacement);
        rest = &rest[pos + needle.len()..];
    }
    output.extend_from_slice(rest);
    output
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}
