//! JSON description of a PHP file.
//!
//! A model file lists namespaces with their imports, classes and functions.
//! [`FileModel::build`] replays the description through the regular
//! builder API ([`PhpFile::add_namespace`], [`PhpNamespace::add_use`],
//! [`PhpNamespace::add_class`], …) so imports get exactly the aliases and
//! conflict checks a programmatic caller would see.
//!
//! ```json
//! {
//!   "comment": "Generated file.",
//!   "namespaces": [{
//!     "name": "App\\Models",
//!     "uses": [{ "name": "Illuminate\\Support\\Collection" }],
//!     "classes": [{
//!       "name": "User",
//!       "extends": ["Illuminate\\Database\\Eloquent\\Model"],
//!       "methods": [{ "name": "posts", "return-type": "Illuminate\\Support\\Collection" }]
//!     }]
//!   }]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::file::PhpFile;
use crate::namespace::PhpNamespace;
use crate::types::{ClassKind, ClassType, Method};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FileModel {
    pub comment: Option<String>,
    pub strict_types: bool,
    pub namespaces: Vec<NamespaceModel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NamespaceModel {
    /// Empty for the global namespace.
    pub name: String,
    pub bracketed: bool,
    pub uses: Vec<UseModel>,
    pub classes: Vec<ClassType>,
    pub functions: Vec<Method>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UseModel {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
}

impl FileModel {
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| Error::ModelParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ModelRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content, path)
    }

    /// Turn the description into a [`PhpFile`].
    ///
    /// Imports are added before classes, in the order listed, so a class
    /// whose name is already taken by an explicit import alias is a
    /// [`Error::NamingConflict`].
    pub fn build(&self) -> Result<PhpFile> {
        let mut file = PhpFile::new();
        if let Some(comment) = &self.comment {
            file.set_comment(comment);
        }
        file.set_strict_types(self.strict_types);

        for ns in &self.namespaces {
            let namespace = file.add_namespace(&ns.name);
            ns.populate(namespace)?;
        }
        Ok(file)
    }
}

impl NamespaceModel {
    fn populate(&self, namespace: &mut PhpNamespace) -> Result<()> {
        if self.bracketed {
            namespace.set_bracketed_syntax(true);
        }
        for import in &self.uses {
            let alias = namespace.add_use(&import.name, import.alias.as_deref())?;
            debug!(name = import.name.as_str(), alias = alias.as_str(), "imported");
        }
        for class in &self.classes {
            let slot = match class.kind {
                ClassKind::Class => namespace.add_class(&class.name)?,
                ClassKind::Interface => namespace.add_interface(&class.name)?,
                ClassKind::Trait => namespace.add_trait(&class.name)?,
            };
            *slot = class.clone();
        }
        for function in &self.functions {
            namespace.add_function(function.clone());
        }
        Ok(())
    }
}
