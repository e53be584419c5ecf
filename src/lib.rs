//! Build PHP code models in Rust and render them as canonical PHP source.
//!
//! Callers assemble a [`PhpFile`] out of namespaces, imports, classes,
//! members, functions and parameters, then hand it to a [`Printer`].  Type
//! names are always given fully qualified; the namespace a class lives in
//! decides how each reference is written:
//!
//! ```
//! use phpgen::{PhpFile, Printer};
//! use phpgen::types::{Method, Parameter};
//!
//! let mut file = PhpFile::new();
//! let ns = file.add_namespace("App\\Http");
//! ns.add_use("Psr\\Http\\Message\\ResponseInterface", None).unwrap();
//!
//! let class = ns.add_class("Controller").unwrap();
//! let mut method = Method::new("handle");
//! method.add_parameter(Parameter::new("request").with_type("App\\Http\\Request"));
//! method.return_type = Some("Psr\\Http\\Message\\ResponseInterface".into());
//! class.add_method(method);
//!
//! let php = Printer::default().print_file(&file);
//! assert!(php.contains("use Psr\\Http\\Message\\ResponseInterface;"));
//! assert!(php.contains("function handle(Request $request): ResponseInterface"));
//! ```
//!
//! # Modules
//!
//!   - [`names`]: splitting and normalising fully-qualified names.
//!   - [`aliases`]: the per-namespace import table and alias allocation.
//!   - [`resolver`]: shortening a fully-qualified name for one namespace.
//!   - [`printer`]: rendering the model, including `use` lines.
//!   - [`types`], [`namespace`], [`file`]: the code model.
//!   - [`value`]: PHP literal values.
//!   - [`config`], [`model`]: `phpgen.toml` settings and the JSON model
//!     format used by the command-line tool.

pub mod aliases;
pub mod config;
pub mod docblock;
pub mod error;
pub mod file;
pub mod model;
pub mod names;
pub mod namespace;
pub mod printer;
pub mod resolver;
pub mod types;
pub mod value;

pub use aliases::AliasTable;
pub use config::{Config, PrinterConfig};
pub use error::{Error, Result};
pub use file::PhpFile;
pub use namespace::PhpNamespace;
pub use printer::Printer;
pub use value::Value;
