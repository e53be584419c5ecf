/// A namespace block of a PHP file.
///
/// [`PhpNamespace`] owns the [`AliasTable`] for its block together with the
/// classes and functions declared in it.  Everything rendered inside the
/// block is shortened against that one table, so the namespace is always
/// passed by shared reference while printing and only mutated while the
/// model is being built.
use tracing::debug;

use crate::aliases::AliasTable;
use crate::error::Result;
use crate::names::{SEPARATOR, strip_leading_separator};
use crate::resolver;
use crate::types::{ClassKind, ClassType, Method};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhpNamespace {
    uses: AliasTable,
    bracketed: bool,
    classes: Vec<ClassType>,
    functions: Vec<Method>,
}

impl PhpNamespace {
    /// Create a namespace block.  An empty name is the global namespace.
    pub fn new(name: &str) -> Self {
        Self {
            uses: AliasTable::new(name),
            ..Self::default()
        }
    }

    /// The namespace name (empty for the global namespace).
    pub fn name(&self) -> &str {
        self.uses.namespace()
    }

    pub fn is_global(&self) -> bool {
        self.name().is_empty()
    }

    /// Whether the block prints as `namespace X { ... }`.
    pub fn bracketed_syntax(&self) -> bool {
        self.bracketed
    }

    pub fn set_bracketed_syntax(&mut self, state: bool) {
        self.bracketed = state;
    }

    /// Import `name` (optionally as `alias`) and return the alias it can be
    /// referred to by.  See [`AliasTable::insert`] for how aliases are
    /// chosen.
    pub fn add_use(&mut self, name: &str, alias: Option<&str>) -> Result<String> {
        self.uses.insert(name, alias)
    }

    /// The import table of this block.
    pub fn uses(&self) -> &AliasTable {
        &self.uses
    }

    /// Shorten a fully-qualified name for use inside this block.
    pub fn unresolve_name(&self, name: &str) -> String {
        resolver::unresolve(name, self.name(), &self.uses)
    }

    /// Add (or fetch) a class declared in this namespace.
    ///
    /// The class name is reserved in the import table so that no import can
    /// later claim it as an alias.
    ///
    /// # Errors
    ///
    /// [`crate::Error::NamingConflict`] when an existing import already uses
    /// the class name as its alias.
    pub fn add_class(&mut self, name: &str) -> Result<&mut ClassType> {
        self.add_class_like(name, ClassKind::Class)
    }

    pub fn add_interface(&mut self, name: &str) -> Result<&mut ClassType> {
        self.add_class_like(name, ClassKind::Interface)
    }

    pub fn add_trait(&mut self, name: &str) -> Result<&mut ClassType> {
        self.add_class_like(name, ClassKind::Trait)
    }

    fn add_class_like(&mut self, name: &str, kind: ClassKind) -> Result<&mut ClassType> {
        let existing = self
            .classes
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name));
        let index = match existing {
            Some(index) => index,
            None => {
                let fqn = self.qualify(name);
                self.uses.insert(&fqn, None)?;
                debug!(class = fqn.as_str(), kind = kind.keyword(), "declared class");
                self.classes.push(ClassType::new(name));
                self.classes.len() - 1
            }
        };
        let class = &mut self.classes[index];
        class.kind = kind;
        Ok(class)
    }

    /// The classes of this block in declaration order.
    pub fn classes(&self) -> &[ClassType] {
        &self.classes
    }

    pub fn class(&self, name: &str) -> Option<&ClassType> {
        self.classes.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Add a free-standing function, replacing one with the same
    /// (case-insensitive) name.
    pub fn add_function(&mut self, function: Method) -> &mut Method {
        let existing = self
            .functions
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(&function.name));
        let index = match existing {
            Some(index) => {
                self.functions[index] = function;
                index
            }
            None => {
                self.functions.push(function);
                self.functions.len() - 1
            }
        };
        &mut self.functions[index]
    }

    pub fn functions(&self) -> &[Method] {
        &self.functions
    }

    /// Prefix `short_name` with this namespace.
    fn qualify(&self, short_name: &str) -> String {
        let short_name = strip_leading_separator(short_name);
        if self.is_global() {
            short_name.to_string()
        } else {
            format!("{}{SEPARATOR}{short_name}", self.name())
        }
    }
}
