//! Marker for files produced by external generators.

/// Header prepended to generated bindings.
///
/// The first line matches Go's `^// Code generated .* DO NOT EDIT\.$`
/// convention, which license-header checkers use to skip generated sources.
/// The blank second line keeps the marker detached from the package doc.
pub const GENERATED_HEADER: &str = concat!("// Code generated by YGOT. DO NOT", " EDIT.\n", "\n");

/// Return `content` with [`GENERATED_HEADER`] in front of it.
pub fn prepend_header(content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(GENERATED_HEADER.len() + content.len());
    out.extend_from_slice(GENERATED_HEADER.as_bytes());
    out.extend_from_slice(content);
    out
}
