/// Rendering of the code model to PHP source.
///
/// The [`Printer`] walks a [`PhpFile`] (or any part of one) and produces
/// text.  Name shortening is delegated to the namespace the element lives
/// in: every type reference (parameter and property types, return types,
/// `extends`, `implements`, trait uses) goes through
/// [`PhpNamespace::unresolve_name`], and the namespace's import table
/// produces the `use` lines.
///
/// Printing never mutates the model.  Elements printed without a namespace
/// (`None`) keep their type strings as written.
///
/// # Layout
///
///   - `<?php`, the file comment, `declare(strict_types=1);` and each
///     namespace block are separated by one blank line.
///   - Inside a namespace: the `namespace` line, the import lines, then
///     every class and function, again separated by blank lines.
///   - Inside a class: trait uses, constants and properties form one group
///     each; every method is its own group.
use crate::config::PrinterConfig;
use crate::docblock::{format_doc_comment, indent, normalize};
use crate::file::PhpFile;
use crate::names::{SEPARATOR, is_builtin_type, split_namespace};
use crate::namespace::PhpNamespace;
use crate::types::{ClassType, Constant, Method, Parameter, Property};

#[derive(Debug, Clone)]
pub struct Printer {
    config: PrinterConfig,
    indent_unit: String,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrinterConfig::default())
    }
}

impl Printer {
    pub fn new(config: PrinterConfig) -> Self {
        let indent_unit = config.indent_unit();
        Self {
            config,
            indent_unit,
        }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    // ─── Files & namespaces ─────────────────────────────────────────────────

    /// Render a complete file.
    pub fn print_file(&self, file: &PhpFile) -> String {
        let mut blocks = vec!["<?php\n".to_string()];

        if let Some(comment) = file.comment() {
            let doc = format_doc_comment(comment);
            if !doc.is_empty() {
                blocks.push(doc);
            }
        }
        if file.strict_types() || self.config.strict_types {
            blocks.push("declare(strict_types=1);\n".to_string());
        }

        let bracketed = file.needs_bracketed_syntax();
        for namespace in file.namespaces() {
            let block = self.render_namespace(namespace, bracketed);
            if !block.is_empty() {
                blocks.push(block);
            }
        }

        normalize(&blocks.join("\n"))
    }

    /// Render one namespace block.
    pub fn print_namespace(&self, namespace: &PhpNamespace) -> String {
        self.render_namespace(namespace, false)
    }

    fn render_namespace(&self, namespace: &PhpNamespace, force_bracketed: bool) -> String {
        let bracketed =
            force_bracketed || self.config.bracketed_namespaces || namespace.bracketed_syntax();

        let mut blocks: Vec<String> = Vec::new();
        let imports = self.import_lines(namespace);
        if !imports.is_empty() {
            blocks.push(imports.iter().map(|line| format!("{line}\n")).collect());
        }
        for class in namespace.classes() {
            blocks.push(self.print_class(class, Some(namespace)));
        }
        for function in namespace.functions() {
            blocks.push(self.print_function(function, Some(namespace)));
        }
        let body = blocks.join("\n");

        let name = namespace.name();
        if bracketed {
            let header = if name.is_empty() {
                "namespace {\n".to_string()
            } else {
                format!("namespace {name} {{\n")
            };
            if body.is_empty() {
                format!("{header}}}\n")
            } else {
                format!(
                    "{header}\n{}\n}}\n",
                    indent(&body, &self.indent_unit, 1)
                )
            }
        } else if name.is_empty() {
            body
        } else if body.is_empty() {
            format!("namespace {name};\n")
        } else {
            format!("namespace {name};\n\n{body}")
        }
    }

    /// The `use` statements of `namespace`, ordered by alias.
    ///
    /// An unqualified name resolves against the current namespace in PHP,
    /// so a same-namespace import is only dropped when its alias is the
    /// short name.  An import whose alias equals the target's short name
    /// prints without `as`.
    pub fn import_lines(&self, namespace: &PhpNamespace) -> Vec<String> {
        namespace
            .uses()
            .iter()
            .filter_map(|(alias, target)| {
                let (target_namespace, short) = split_namespace(target);
                if alias == short {
                    (!target_namespace.eq_ignore_ascii_case(namespace.name()))
                        .then(|| format!("use {target};"))
                } else {
                    Some(format!("use {target} as {alias};"))
                }
            })
            .collect()
    }

    // ─── Class-likes ────────────────────────────────────────────────────────

    pub fn print_class(&self, class: &ClassType, namespace: Option<&PhpNamespace>) -> String {
        let resolve_all = |names: &[String]| -> String {
            names
                .iter()
                .map(|name| resolve_name(name, namespace))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut out = format_doc_comment(class.comment.as_deref().unwrap_or_default());
        if class.is_abstract {
            out.push_str("abstract ");
        }
        if class.is_final {
            out.push_str("final ");
        }
        out.push_str(class.kind.keyword());
        out.push(' ');
        out.push_str(&class.name);
        if !class.extends.is_empty() {
            out.push_str(" extends ");
            out.push_str(&resolve_all(&class.extends));
        }
        if !class.implements.is_empty() {
            out.push_str(" implements ");
            out.push_str(&resolve_all(&class.implements));
        }
        out.push_str("\n{\n");

        let mut groups: Vec<String> = Vec::new();
        if !class.traits.is_empty() {
            groups.push(
                class
                    .traits
                    .iter()
                    .map(|t| format!("use {};\n", resolve_name(t, namespace)))
                    .collect(),
            );
        }
        if !class.constants.is_empty() {
            groups.push(class.constants.iter().map(|c| self.print_constant(c)).collect());
        }
        if !class.properties.is_empty() {
            groups.push(
                class
                    .properties
                    .iter()
                    .map(|p| self.print_property(p, namespace))
                    .collect(),
            );
        }
        for method in &class.methods {
            groups.push(self.print_method(method, namespace));
        }

        out.push_str(&indent(&groups.join("\n"), &self.indent_unit, 1));
        out.push_str("}\n");
        out
    }

    pub fn print_constant(&self, constant: &Constant) -> String {
        let mut out = format_doc_comment(constant.comment.as_deref().unwrap_or_default());
        if let Some(visibility) = constant.visibility {
            out.push_str(visibility.as_str());
            out.push(' ');
        }
        out.push_str(&format!(
            "const {} = {};\n",
            constant.name,
            constant.value.dump()
        ));
        out
    }

    pub fn print_property(&self, property: &Property, namespace: Option<&PhpNamespace>) -> String {
        let mut out = format_doc_comment(property.comment.as_deref().unwrap_or_default());
        let visibility = property.visibility.map_or("public", |v| v.as_str());
        out.push_str(visibility);
        if property.is_static {
            out.push_str(" static");
        }
        let hint = render_hint(property.type_hint.as_deref(), property.nullable, namespace);
        if let Some(hint) = hint {
            out.push(' ');
            out.push_str(&hint);
        }
        out.push_str(" $");
        out.push_str(&property.name);
        if let Some(value) = &property.value {
            out.push_str(" = ");
            out.push_str(&value.dump());
        }
        out.push_str(";\n");
        out
    }

    // ─── Functions ──────────────────────────────────────────────────────────

    /// Render a class method.  Abstract methods and methods without a body
    /// end with `;`.
    pub fn print_method(&self, method: &Method, namespace: Option<&PhpNamespace>) -> String {
        let mut out = self.signature(method, namespace);
        if method.is_abstract || method.body.is_none() {
            out.push_str(";\n");
        } else {
            out.push_str("\n{\n");
            out.push_str(&self.body(method));
            out.push_str("}\n");
        }
        out
    }

    /// Render a free-standing function.
    pub fn print_function(&self, function: &Method, namespace: Option<&PhpNamespace>) -> String {
        self.print_method(function, namespace)
    }

    /// Render an anonymous function.  The result has no trailing newline so
    /// it can be embedded in an expression.
    pub fn print_closure(&self, closure: &Method, namespace: Option<&PhpNamespace>) -> String {
        let mut out = self.signature(closure, namespace);
        out.push_str(" {\n");
        out.push_str(&self.body(closure));
        out.push('}');
        out
    }

    fn signature(&self, method: &Method, namespace: Option<&PhpNamespace>) -> String {
        let mut out = format_doc_comment(method.comment.as_deref().unwrap_or_default());
        if method.is_abstract {
            out.push_str("abstract ");
        }
        if method.is_final {
            out.push_str("final ");
        }
        if let Some(visibility) = method.visibility {
            out.push_str(visibility.as_str());
            out.push(' ');
        }
        if method.is_static {
            out.push_str("static ");
        }
        out.push_str("function ");
        if method.returns_reference {
            out.push('&');
        }
        out.push_str(&method.name);

        let last = method.parameters.len().saturating_sub(1);
        let parameters: Vec<String> = method
            .parameters
            .iter()
            .enumerate()
            .map(|(i, p)| self.print_parameter(p, method.is_variadic && i == last, namespace))
            .collect();
        out.push('(');
        out.push_str(&parameters.join(", "));
        out.push(')');

        if !method.uses.is_empty() {
            let uses: Vec<String> = method
                .uses
                .iter()
                .map(|u| {
                    let reference = if u.by_reference { "&" } else { "" };
                    format!("{reference}${}", u.name)
                })
                .collect();
            out.push_str(" use (");
            out.push_str(&uses.join(", "));
            out.push(')');
        }

        if let Some(return_type) =
            render_hint(method.return_type.as_deref(), method.return_nullable, namespace)
        {
            out.push_str(": ");
            out.push_str(&return_type);
        }
        out
    }

    fn body(&self, method: &Method) -> String {
        let body = method.body.as_deref().unwrap_or_default().trim();
        if body.is_empty() {
            String::new()
        } else {
            indent(&format!("{body}\n"), &self.indent_unit, 1)
        }
    }

    /// Render one parameter.  A variadic parameter never prints a default.
    pub fn print_parameter(
        &self,
        parameter: &Parameter,
        variadic: bool,
        namespace: Option<&PhpNamespace>,
    ) -> String {
        let mut out = String::new();
        let hint = render_hint(parameter.type_hint.as_deref(), parameter.nullable, namespace);
        if let Some(hint) = hint {
            out.push_str(&hint);
            out.push(' ');
        }
        if parameter.by_reference {
            out.push('&');
        }
        if variadic {
            out.push_str("...");
        }
        out.push('$');
        out.push_str(&parameter.name);
        if let Some(default) = &parameter.default
            && !variadic
        {
            out.push_str(" = ");
            out.push_str(&default.dump());
        }
        out
    }
}

/// Shorten a class reference.  Without a namespace the name is printed as
/// given.
fn resolve_name(name: &str, namespace: Option<&PhpNamespace>) -> String {
    match namespace {
        Some(namespace) => namespace.unresolve_name(name),
        None => name.to_string(),
    }
}

/// Render an optional type hint.  A blank hint counts as no hint.
///
/// `nullable` adds `?`, or `|null` for compound types, unless the type
/// already admits `null`.
fn render_hint(
    hint: Option<&str>,
    nullable: bool,
    namespace: Option<&PhpNamespace>,
) -> Option<String> {
    let hint = hint.map(str::trim).filter(|hint| !hint.is_empty())?;
    let resolved = resolve_type(hint, namespace);
    let admits_null = resolved.starts_with('?')
        || resolved
            .split('|')
            .any(|part| part.eq_ignore_ascii_case("null") || part.eq_ignore_ascii_case("mixed"));

    Some(if !nullable || admits_null {
        resolved
    } else if resolved.contains('&') {
        format!("({resolved})|null")
    } else if resolved.contains('|') {
        format!("{resolved}|null")
    } else {
        format!("?{resolved}")
    })
}

/// Shorten every class name inside a type expression.
///
/// Handles a leading `?`, union (`A|B`) and intersection (`A&B`) types;
/// builtin type keywords are kept as written.
pub fn resolve_type(hint: &str, namespace: Option<&PhpNamespace>) -> String {
    let hint = hint.trim();
    if let Some(inner) = hint.strip_prefix('?') {
        return format!("?{}", resolve_type(inner, namespace));
    }
    if hint.contains('|') {
        return hint
            .split('|')
            .map(|part| resolve_type(part, namespace))
            .collect::<Vec<_>>()
            .join("|");
    }
    if hint.contains('&') {
        return hint
            .split('&')
            .map(|part| resolve_type(part, namespace))
            .collect::<Vec<_>>()
            .join("&");
    }
    if is_builtin_type(hint.trim_start_matches(SEPARATOR)) {
        return hint.trim_start_matches(SEPARATOR).to_string();
    }
    resolve_name(hint, namespace)
}
