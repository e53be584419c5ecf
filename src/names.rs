//! Helpers for working with PHP fully-qualified names.
//!
//! Every function here is pure and total: malformed input (stray or
//! doubled separators, empty segments) is tolerated rather than rejected.
//!
//! Names are stored without a leading `\` throughout the crate.  Use
//! [`strip_leading_separator`] at every entry point that accepts a name
//! from a caller.

/// The PHP namespace separator.
pub const SEPARATOR: char = '\\';

/// Names that are never aliased or shortened.  Compared case-insensitively.
///
/// The empty string is part of the set so that "no name" passes through
/// unresolution unchanged.
pub const RESERVED_WORDS: &[&str] = &[
    "self", "parent", "array", "callable", "string", "bool", "float", "int", "",
];

/// Type keywords that are not in [`RESERVED_WORDS`] but must still be
/// printed verbatim in type positions (`void`, `mixed`, …).
pub const BUILTIN_TYPES: &[&str] = &[
    "void", "mixed", "object", "iterable", "static", "null", "never", "true", "false",
];

/// Split a name into `(namespace, short_name)`.
///
/// The namespace is everything before the last separator (empty when there
/// is none); the short name is the remainder.
///
/// ```
/// use phpgen::names::split_namespace;
///
/// assert_eq!(split_namespace("App\\Models\\User"), ("App\\Models", "User"));
/// assert_eq!(split_namespace("User"), ("", "User"));
/// ```
pub fn split_namespace(name: &str) -> (&str, &str) {
    match name.rfind(SEPARATOR) {
        Some(pos) => (&name[..pos], &name[pos + 1..]),
        None => ("", name),
    }
}

/// The namespace part of `name` (empty for global names).
pub fn extract_namespace(name: &str) -> &str {
    split_namespace(name).0
}

/// The last segment of `name`.
pub fn extract_short_name(name: &str) -> &str {
    split_namespace(name).1
}

/// Remove a single leading `\` if present.
pub fn strip_leading_separator(name: &str) -> &str {
    name.strip_prefix(SEPARATOR).unwrap_or(name)
}

/// Whether `name` is one of the [`RESERVED_WORDS`], ignoring ASCII case.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(name))
}

/// Whether `name` is a reserved word or one of the [`BUILTIN_TYPES`].
pub fn is_builtin_type(name: &str) -> bool {
    is_reserved_word(name) || BUILTIN_TYPES.iter().any(|t| t.eq_ignore_ascii_case(name))
}

/// If `name` lies inside `prefix` (or is `prefix` itself), return the rest
/// of `name` after `prefix`, starting with the separator (or empty on an
/// exact match).  The comparison ignores ASCII case, the returned slice
/// keeps the casing of `name`.
pub(crate) fn strip_namespace_prefix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    if name.len() < prefix.len() || !name.is_char_boundary(prefix.len()) {
        return None;
    }
    let (head, rest) = name.split_at(prefix.len());
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    if rest.is_empty() || rest.starts_with(SEPARATOR) {
        Some(rest)
    } else {
        None
    }
}
