//! Post-parse validation of model metadata.

use std::collections::HashMap;

use miette::SourceSpan;

use crate::{Metadata, ModuleDescriptor, Result, error::SourceContext};

/// Validate a parsed manifest against the source it came from.
pub(crate) fn validate_metadata(metadata: &Metadata, ctx: &SourceContext) -> Result<()> {
    if metadata.name.trim().is_empty() {
        return Err(ctx.validation_error(
            "model name cannot be empty",
            find_key_span(ctx.src(), "name"),
        ));
    }

    // The name becomes the `<name>.tree` file name inside the model directory.
    if let Some(reason) = validate_identifier(&metadata.name) {
        return Err(ctx.validation_error(
            format!("invalid model name '{}': {}", metadata.name, reason),
            find_key_span(ctx.src(), "name"),
        ));
    }

    if let Some(reason) = validate_version(&metadata.version) {
        return Err(ctx.validation_error(
            format!("invalid model version '{}': {}", metadata.version, reason),
            find_key_span(ctx.src(), "version"),
        ));
    }

    if metadata.go_package.trim().is_empty() {
        return Err(ctx.validation_error(
            "go_package is required and cannot be empty",
            find_key_span(ctx.src(), "go_package"),
        ));
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, module) in metadata.modules.iter().enumerate() {
        validate_module(module, ctx)?;

        if seen.insert(module.name.as_str(), index).is_some() {
            let spans = find_module_spans(ctx.src(), &module.name);
            return match (spans.first(), spans.get(1)) {
                (Some(first), Some(second)) => {
                    Err(ctx.duplicate_module_error(&module.name, *first, *second))
                }
                _ => Err(ctx.validation_error(
                    format!("duplicate module '{}'", module.name),
                    spans.first().copied(),
                )),
            };
        }
    }

    Ok(())
}

fn validate_module(module: &ModuleDescriptor, ctx: &SourceContext) -> Result<()> {
    let span = find_module_spans(ctx.src(), &module.name).first().copied();

    if let Some(reason) = validate_identifier(&module.name) {
        return Err(ctx.invalid_identifier_error(&module.name, reason, span));
    }

    if !is_revision_date(&module.revision) {
        let revision_span = find_value_span(ctx.src(), &module.revision);
        return Err(ctx.invalid_revision_error(&module.name, &module.revision, revision_span));
    }

    if module.yang_file.trim().is_empty() {
        return Err(ctx.validation_error(
            format!("module '{}' has an empty file name", module.name),
            span,
        ));
    }

    Ok(())
}

/// Validate that a name is a YANG identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))) {
        return Some("name contains characters not allowed in YANG identifiers");
    }

    None
}

/// Model versions are kept verbatim; they only have to fit in a file name.
pub(crate) fn validate_version(version: &str) -> Option<&'static str> {
    if version.trim().is_empty() {
        return Some("version cannot be empty");
    }
    if version.chars().any(|c| c.is_whitespace() || matches!(c, '/' | '\\')) {
        return Some("version cannot contain whitespace or path separators");
    }
    None
}

/// Check for a `YYYY-MM-DD` date with a plausible month and day.
pub(crate) fn is_revision_date(revision: &str) -> bool {
    let bytes = revision.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    let number = |range: std::ops::Range<usize>| -> Option<u32> {
        let part = &revision[range];
        if part.bytes().all(|b| b.is_ascii_digit()) {
            part.parse().ok()
        } else {
            None
        }
    };

    matches!(
        (number(0..4), number(5..7), number(8..10)),
        (Some(_), Some(1..=12), Some(1..=31))
    )
}

/// Find the span of a top-level `key = value` assignment's value.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        if let Some(rest) = trimmed.strip_prefix(key) {
            let after_key = rest.trim_start();
            if let Some(value) = after_key.strip_prefix('=') {
                let value_trimmed = value.trim();
                if value_trimmed.is_empty() {
                    return Some(SourceSpan::from((offset + indent, key.len())));
                }
                let eq_pos = indent + key.len() + (rest.len() - after_key.len());
                let start = offset + eq_pos + 1 + (value.len() - value.trim_start().len());
                return Some(SourceSpan::from((start, value_trimmed.len())));
            }
        }

        offset += line.len();
    }
    None
}

/// Find every `name = "<module>"` occurrence within the module tables, in
/// source order.
pub(crate) fn find_module_spans(src: &str, name: &str) -> Vec<SourceSpan> {
    // The model name often equals its root module name; skip the header keys.
    let base = src.find("[[modules]]").unwrap_or(0);
    let body = &src[base..];
    let patterns = [
        format!("name = \"{}\"", name),
        format!("name = '{}'", name),
        format!("name=\"{}\"", name),
    ];

    let mut spans: Vec<SourceSpan> = patterns
        .iter()
        .flat_map(|pattern| {
            let skip = pattern.len() - name.len() - 1;
            body.match_indices(pattern.as_str())
                .map(move |(pos, _)| SourceSpan::from((base + pos + skip, name.len())))
        })
        .collect();
    spans.sort_by_key(|span| span.offset());
    spans
}

/// Find the first quoted occurrence of a string value.
fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }
    [format!("\"{}\"", value), format!("'{}'", value)]
        .iter()
        .filter_map(|pattern| src.find(pattern.as_str()))
        .min()
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}
