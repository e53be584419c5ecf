#![allow(dead_code)]

use phpgen::{AliasTable, PhpNamespace, Printer, PrinterConfig};

/// Build an alias table for `namespace` from `(name, alias)` pairs,
/// panicking on conflicts.
pub fn table_with(namespace: &str, imports: &[(&str, Option<&str>)]) -> AliasTable {
    let mut table = AliasTable::new(namespace);
    for (name, alias) in imports {
        table
            .insert(name, *alias)
            .unwrap_or_else(|e| panic!("failed to import {name}: {e}"));
    }
    table
}

/// Build a namespace block with the given imports.
pub fn namespace_with(name: &str, imports: &[(&str, Option<&str>)]) -> PhpNamespace {
    let mut namespace = PhpNamespace::new(name);
    for (fqn, alias) in imports {
        namespace
            .add_use(fqn, *alias)
            .unwrap_or_else(|e| panic!("failed to import {fqn}: {e}"));
    }
    namespace
}

/// A printer indenting with four spaces, which keeps expected output in
/// tests readable.
pub fn space_printer() -> Printer {
    Printer::new(PrinterConfig {
        indent_style: phpgen::config::IndentStyle::Space,
        indent_width: 4,
        ..PrinterConfig::default()
    })
}

/// Resolve `reference` the way PHP does for class names: a leading `\`
/// means fully qualified, otherwise the first segment is looked up among
/// the imports (case-insensitively) and the current namespace is
/// prepended when nothing matches.
pub fn php_resolve(reference: &str, namespace: &str, table: &AliasTable) -> String {
    if let Some(fqn) = reference.strip_prefix('\\') {
        return fqn.to_string();
    }
    let (first, rest) = match reference.find('\\') {
        Some(pos) => (&reference[..pos], &reference[pos..]),
        None => (reference, ""),
    };
    if let Some((_, target)) = table
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(first))
    {
        return format!("{target}{rest}");
    }
    if namespace.is_empty() {
        reference.to_string()
    } else {
        format!("{namespace}\\{reference}")
    }
}
