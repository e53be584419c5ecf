/// A whole PHP file: an opening tag, an optional file-level doc comment and
/// one or more namespace blocks.
use crate::error::Result;
use crate::names::{split_namespace, strip_leading_separator};
use crate::namespace::PhpNamespace;
use crate::types::ClassType;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhpFile {
    comment: Option<String>,
    strict_types: bool,
    namespaces: Vec<PhpNamespace>,
}

impl PhpFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Replace the file comment.  An empty string clears it.
    pub fn set_comment(&mut self, comment: &str) {
        self.comment = if comment.is_empty() {
            None
        } else {
            Some(comment.to_string())
        };
    }

    /// Append a line to the file comment.
    pub fn add_comment(&mut self, line: &str) {
        match &mut self.comment {
            Some(comment) => {
                comment.push('\n');
                comment.push_str(line);
            }
            None => self.comment = Some(line.to_string()),
        }
    }

    pub fn strict_types(&self) -> bool {
        self.strict_types
    }

    /// Emit `declare(strict_types=1);` after the opening tag.
    pub fn set_strict_types(&mut self, state: bool) {
        self.strict_types = state;
    }

    /// Add (or fetch) the namespace block `name`.  The empty name is the
    /// global namespace.
    pub fn add_namespace(&mut self, name: &str) -> &mut PhpNamespace {
        let name = strip_leading_separator(name);
        let existing = self
            .namespaces
            .iter()
            .position(|ns| ns.name().eq_ignore_ascii_case(name));
        let index = match existing {
            Some(index) => index,
            None => {
                self.namespaces.push(PhpNamespace::new(name));
                self.namespaces.len() - 1
            }
        };
        &mut self.namespaces[index]
    }

    /// Add a class by fully-qualified name, creating its namespace block on
    /// demand.
    pub fn add_class(&mut self, name: &str) -> Result<&mut ClassType> {
        let (namespace, short) = split_namespace(strip_leading_separator(name));
        self.add_namespace(namespace).add_class(short)
    }

    pub fn add_interface(&mut self, name: &str) -> Result<&mut ClassType> {
        let (namespace, short) = split_namespace(strip_leading_separator(name));
        self.add_namespace(namespace).add_interface(short)
    }

    pub fn add_trait(&mut self, name: &str) -> Result<&mut ClassType> {
        let (namespace, short) = split_namespace(strip_leading_separator(name));
        self.add_namespace(namespace).add_trait(short)
    }

    /// The namespace blocks in insertion order.
    pub fn namespaces(&self) -> &[PhpNamespace] {
        &self.namespaces
    }

    pub fn namespace(&self, name: &str) -> Option<&PhpNamespace> {
        let name = strip_leading_separator(name);
        self.namespaces
            .iter()
            .find(|ns| ns.name().eq_ignore_ascii_case(name))
    }

    /// PHP only allows mixing the global namespace with named ones when
    /// every block uses bracketed syntax.
    pub fn needs_bracketed_syntax(&self) -> bool {
        self.namespaces.len() > 1 && self.namespaces.iter().any(PhpNamespace::is_global)
    }
}
