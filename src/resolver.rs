/// Name unresolution.
///
/// The inverse of PHP's name resolution: given a fully-qualified name, the
/// namespace a reference appears in, and that namespace's [`AliasTable`],
/// produce the shortest text that PHP would resolve back to the same name.
///
/// # Algorithm
///
///   1. Empty names and reserved words (`self`, `string`, …) are returned
///      verbatim.
///   2. Every import whose target is the name itself or one of its parent
///      namespaces is a candidate: `use Foo\Bar as FB;` turns
///      `Foo\Bar\Baz` into `FB\Baz`.  The shortest candidate wins; ties go
///      to the alphabetically first alias.
///   3. Without a candidate, a name inside the current namespace drops the
///      namespace prefix.
///   4. Anything else is written fully qualified (`\Foo\Bar`), except in
///      the global namespace where no leading `\` is needed.
///
/// A relative reference from step 3 or 4 whose first segment is also an
/// import alias would be expanded through that import by PHP, so it is
/// written fully qualified instead.
///
/// Matching ignores ASCII case because PHP class names are
/// case-insensitive; the remainder keeps the caller's casing.
use tracing::trace;

use crate::aliases::AliasTable;
use crate::names::{SEPARATOR, is_reserved_word, strip_leading_separator, strip_namespace_prefix};

/// Shorten `name` for use inside `namespace`, given the imports in `table`.
///
/// ```
/// use phpgen::aliases::AliasTable;
/// use phpgen::resolver::unresolve;
///
/// let mut table = AliasTable::new("App");
/// table.insert("Foo\\Bar", Some("FB")).unwrap();
///
/// assert_eq!(unresolve("Foo\\Bar\\Baz", "App", &table), "FB\\Baz");
/// assert_eq!(unresolve("App\\Models\\User", "App", &table), "Models\\User");
/// assert_eq!(unresolve("Other\\Thing", "App", &table), "\\Other\\Thing");
/// assert_eq!(unresolve("int", "App", &table), "int");
/// ```
pub fn unresolve(name: &str, namespace: &str, table: &AliasTable) -> String {
    if is_reserved_word(name) {
        return name.to_string();
    }
    let name = strip_leading_separator(name);

    let mut best: Option<String> = None;
    for (alias, target) in table.iter() {
        if let Some(rest) = strip_namespace_prefix(name, target) {
            let short = format!("{alias}{rest}");
            if best.as_ref().is_none_or(|b| short.len() < b.len()) {
                best = Some(short);
            }
        }
    }

    let resolved = match best {
        Some(short) => short,
        None => {
            let relative = strip_namespace_prefix(name, namespace)
                .filter(|rest| !namespace.is_empty() && !rest.is_empty())
                .map(|rest| &rest[SEPARATOR.len_utf8()..]);
            match relative {
                Some(relative) if !is_shadowed(relative, table) => relative.to_string(),
                _ if namespace.is_empty() && !is_shadowed(name, table) => name.to_string(),
                _ => format!("{SEPARATOR}{name}"),
            }
        }
    };

    trace!(name, namespace, resolved = resolved.as_str(), "unresolved name");
    resolved
}

/// Whether the first segment of `reference` is an import alias.  PHP would
/// expand such a reference through the import instead of the namespace.
fn is_shadowed(reference: &str, table: &AliasTable) -> bool {
    let first = reference.split(SEPARATOR).next().unwrap_or(reference);
    table.iter().any(|(alias, _)| alias.eq_ignore_ascii_case(first))
}
