//! `${identifier}` placeholder scanning and substitution
//!
//! Substitution is single pass: every placeholder span is located up front,
//! then the output is assembled from literal segments and parameter values.
//! Inserted values are never re-scanned.

use ssmenv_core::{Error, LookupKeys, Result, SubstitutionParameters, TemplateMapping};

/// A `${identifier}` occurrence inside a template string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Byte offset of the `$`
    pub start: usize,
    /// Byte offset one past the closing `}`
    pub end: usize,
    /// The identifier between the braces
    pub name: &'a str,
}

/// A placeholder whose identifier has no substitution parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVariable(pub String);

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Locate every placeholder in `template`, left to right, non-overlapping.
///
/// Sequences that are not `${` + one or more `[A-Za-z0-9_]` + `}` are literal text.
pub fn placeholders(template: &str) -> Vec<Placeholder<'_>> {
    let bytes = template.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'$' && bytes[i + 1] == b'{' {
            let name_start = i + 2;
            let mut j = name_start;
            while j < bytes.len() && is_identifier_byte(bytes[j]) {
                j += 1;
            }
            if j > name_start && j < bytes.len() && bytes[j] == b'}' {
                found.push(Placeholder {
                    start: i,
                    end: j + 1,
                    name: &template[name_start..j],
                });
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }

    found
}

/// Substitute every placeholder in `template` with its value from `params`.
pub fn substitute(
    template: &str,
    params: &SubstitutionParameters,
) -> std::result::Result<String, MissingVariable> {
    let spans = placeholders(template);
    if spans.is_empty() {
        return Ok(template.to_string());
    }

    let mut output = String::with_capacity(template.len());
    let mut cursor = 0;

    for span in spans {
        let value = params
            .get(span.name)
            .ok_or_else(|| MissingVariable(span.name.to_string()))?;
        output.push_str(&template[cursor..span.start]);
        output.push_str(value);
        cursor = span.end;
    }
    output.push_str(&template[cursor..]);

    Ok(output)
}

/// Resolve every template entry into a parameter store lookup key.
///
/// Fails on the first undefined variable; no partial mapping is returned.
pub fn substitute_variables(
    template: &TemplateMapping,
    params: &SubstitutionParameters,
) -> Result<LookupKeys> {
    let mut keys = LookupKeys::with_capacity(template.len());

    for (name, raw) in template {
        let key = substitute(raw, params)
            .map_err(|MissingVariable(variable)| Error::undefined_variable(variable, name))?;
        tracing::debug!(name = %name, key = %key, "Resolved lookup key");
        keys.insert(name.clone(), key);
    }

    Ok(keys)
}
