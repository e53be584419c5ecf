//! Data types of the PHP code model.
//!
//! These are plain data containers: class-likes, their members, functions
//! and parameters.  Type strings stored here are fully-qualified names (a
//! leading `\` is allowed and ignored); they are shortened against the
//! enclosing namespace only when the model is printed.
//!
//! All types deserialize from the JSON model format (see [`crate::model`]),
//! with every field optional except names.

use serde::{Deserialize, Deserializer};

use crate::error;
use crate::value::{Value, format_args};

/// Visibility of a class member (method, property, or constant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// The flavour of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Trait,
}

impl ClassKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Trait => "trait",
        }
    }
}

/// A function or method parameter.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Parameter {
    /// The parameter name WITHOUT the `$` prefix.
    pub name: String,
    /// Optional type hint (e.g. `"int"`, `"App\\Models\\User"`).
    pub type_hint: Option<String>,
    /// Prefix the type hint with `?`.
    pub nullable: bool,
    /// Passed by reference (`&$name`).
    pub by_reference: bool,
    /// Default value.  `Some(Value::Null)` prints `= null`; `None` prints
    /// no default at all.
    #[serde(deserialize_with = "deserialize_value")]
    pub default: Option<Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, type_hint: impl Into<String>) -> Self {
        self.type_hint = Some(type_hint.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// A method, a free-standing function, or (with an empty name) a closure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Method {
    pub name: String,
    pub comment: Option<String>,
    pub visibility: Option<Visibility>,
    pub parameters: Vec<Parameter>,
    /// Variables captured by a closure (`use ($a, &$b)`).
    pub uses: Vec<Parameter>,
    /// `None` prints a declaration without a body (`;`).
    pub body: Option<String>,
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
    /// `function &name()`.
    pub returns_reference: bool,
    /// The last parameter is variadic (`...$rest`).
    pub is_variadic: bool,
    pub return_type: Option<String>,
    pub return_nullable: bool,
}

impl Default for Method {
    fn default() -> Self {
        Self {
            name: String::new(),
            comment: None,
            visibility: None,
            parameters: Vec::new(),
            uses: Vec::new(),
            body: Some(String::new()),
            is_static: false,
            is_final: false,
            is_abstract: false,
            returns_reference: false,
            is_variadic: false,
            return_type: None,
            return_nullable: false,
        }
    }
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether this is an anonymous function.
    pub fn is_closure(&self) -> bool {
        self.name.is_empty()
    }

    /// Add a parameter, replacing any existing parameter of the same name
    /// in place.
    pub fn add_parameter(&mut self, parameter: Parameter) -> &mut Parameter {
        let index = match self.parameters.iter().position(|p| p.name == parameter.name) {
            Some(index) => {
                self.parameters[index] = parameter;
                index
            }
            None => {
                self.parameters.push(parameter);
                self.parameters.len() - 1
            }
        };
        &mut self.parameters[index]
    }

    /// Append a line to the body.
    pub fn add_body(&mut self, code: &str) {
        let body = self.body.get_or_insert_with(String::new);
        body.push_str(code);
        body.push('\n');
    }

    /// Replace the body with `code`, filling its `?` placeholders from
    /// `args` (see [`crate::value::format_args`]).
    pub fn set_body_with(&mut self, code: &str, args: &[Value]) -> error::Result<()> {
        self.body = Some(format_args(code, args)?);
        Ok(())
    }

    /// Append a line with `?` placeholders filled from `args`.
    pub fn add_body_with(&mut self, code: &str, args: &[Value]) -> error::Result<()> {
        let code = format_args(code, args)?;
        self.add_body(&code);
        Ok(())
    }
}

/// A class property.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Property {
    /// The property name WITHOUT the `$` prefix.
    pub name: String,
    pub comment: Option<String>,
    /// Printed as `public` when unset.
    pub visibility: Option<Visibility>,
    pub is_static: bool,
    /// Optional typed-property hint.
    pub type_hint: Option<String>,
    pub nullable: bool,
    /// Initial value.  `None` prints no initialiser.
    #[serde(deserialize_with = "deserialize_value")]
    pub value: Option<Value>,
}

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A class constant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Constant {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(deserialize_with = "deserialize_required_value")]
    pub value: Value,
}

impl Constant {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            visibility: None,
            value: value.into(),
        }
    }
}

/// A class, interface or trait.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClassType {
    /// Short name, without namespace.
    pub name: String,
    pub kind: ClassKind,
    pub comment: Option<String>,
    pub is_final: bool,
    pub is_abstract: bool,
    /// Parent class, or parent interfaces for an interface.
    pub extends: Vec<String>,
    pub implements: Vec<String>,
    pub traits: Vec<String>,
    pub constants: Vec<Constant>,
    pub properties: Vec<Property>,
    pub methods: Vec<Method>,
}

impl ClassType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a method, replacing an existing method with the same
    /// (case-insensitive) name.
    pub fn add_method(&mut self, method: Method) -> &mut Method {
        let existing = self
            .methods
            .iter()
            .position(|m| m.name.eq_ignore_ascii_case(&method.name));
        let index = match existing {
            Some(index) => {
                self.methods[index] = method;
                index
            }
            None => {
                self.methods.push(method);
                self.methods.len() - 1
            }
        };
        &mut self.methods[index]
    }

    pub fn add_property(&mut self, property: Property) -> &mut Property {
        let existing = self.properties.iter().position(|p| p.name == property.name);
        let index = match existing {
            Some(index) => {
                self.properties[index] = property;
                index
            }
            None => {
                self.properties.push(property);
                self.properties.len() - 1
            }
        };
        &mut self.properties[index]
    }

    pub fn add_constant(&mut self, constant: Constant) -> &mut Constant {
        let existing = self.constants.iter().position(|c| c.name == constant.name);
        let index = match existing {
            Some(index) => {
                self.constants[index] = constant;
                index
            }
            None => {
                self.constants.push(constant);
                self.constants.len() - 1
            }
        };
        &mut self.constants[index]
    }

    /// Look up a method by (case-insensitive) name.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name.eq_ignore_ascii_case(name))
    }
}

/// A present JSON value (including `null`) becomes `Some`.  Absent fields
/// fall back to `None` through `#[serde(default)]`.
fn deserialize_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(|json| Some(Value::from(json)))
}

fn deserialize_required_value<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Value::from)
}
