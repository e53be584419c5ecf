/// Per-namespace import table.
///
/// An [`AliasTable`] maps local aliases (the name a class is referred to
/// by inside one namespace block) to fully-qualified names.  It is the
/// write side of name shortening: [`AliasTable::insert`] hands out aliases,
/// [`crate::resolver::unresolve`] reads them back when rendering.
///
/// PHP compares class names and aliases without regard to ASCII case, and
/// so does the table: `Foo` and `foo` are the same alias, and `Foo\Bar`
/// and `foo\bar` the same target.  The spelling an alias was first bound
/// with is the one that gets printed.
///
/// # Invariants
///
///   - Aliases are unique keys, case-insensitively.
///   - Once bound, an alias never changes target and is never removed.
///   - Iteration is in alias order, so everything derived from the table
///     (import lines, unresolution tie-breaks) is independent of the order
///     in which names were inserted.
use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::names::{SEPARATOR, extract_namespace, extract_short_name, strip_leading_separator};

/// Alias → fully-qualified name bindings for one namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    /// The namespace the table belongs to (empty for the global namespace).
    namespace: String,
    /// Keyed by the lowercased alias.
    entries: BTreeMap<String, Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    alias: String,
    target: String,
}

impl Entry {
    fn points_to(&self, name: &str) -> bool {
        self.target.eq_ignore_ascii_case(name)
    }
}

fn key(alias: &str) -> String {
    alias.to_ascii_lowercase()
}

impl AliasTable {
    /// Create an empty table for `namespace`.  A leading `\` is ignored.
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: strip_leading_separator(namespace).to_string(),
            entries: BTreeMap::new(),
        }
    }

    /// The namespace this table belongs to.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Import `name`, optionally under an explicit `alias`, and return the
    /// alias it is reachable by.
    ///
    /// Without an explicit alias:
    ///
    ///   - a name from the table's own namespace is aliased to its short
    ///     name (and conflicts are reported as if that alias was explicit);
    ///   - any other name gets a generated alias: the short name, then the
    ///     short name prefixed with preceding segments (`Foo`, `YFoo`,
    ///     `XYFoo`), then a numeric suffix (`XYFoo1`, `XYFoo2`, …) until the
    ///     candidate is free or already bound to `name`.
    ///
    /// Importing a name that is already bound under the chosen alias is a
    /// no-op that returns the existing alias as it was first spelled.
    ///
    /// # Errors
    ///
    /// [`Error::NamingConflict`] when the explicit (or same-namespace
    /// default) alias is bound to a different name.  The table is left
    /// untouched in that case.
    pub fn insert(&mut self, name: &str, alias: Option<&str>) -> Result<String> {
        let name = strip_leading_separator(name);

        let requested = match alias {
            Some(alias) => Some(alias),
            None if extract_namespace(name).eq_ignore_ascii_case(&self.namespace) => {
                Some(extract_short_name(name))
            }
            None => None,
        };

        let alias = match requested {
            Some(alias) => {
                if let Some(existing) = self.entries.get(&key(alias))
                    && !existing.points_to(name)
                {
                    warn!(
                        alias,
                        existing = existing.target.as_str(),
                        requested = name,
                        "alias already taken"
                    );
                    return Err(Error::NamingConflict {
                        alias: alias.to_string(),
                        existing: existing.target.clone(),
                        requested: name.to_string(),
                    });
                }
                alias.to_string()
            }
            None => self.generate_alias(name),
        };

        if let Some(existing) = self.entries.get(&key(&alias))
            && existing.points_to(name)
        {
            debug!(alias = existing.alias.as_str(), name, "reusing existing import");
            return Ok(existing.alias.clone());
        }

        debug!(
            alias = alias.as_str(),
            name,
            namespace = self.namespace.as_str(),
            "binding import"
        );
        self.entries.insert(
            key(&alias),
            Entry {
                alias: alias.clone(),
                target: name.to_string(),
            },
        );
        Ok(alias)
    }

    /// Pick the first free alias for `name` (see [`AliasTable::insert`]).
    fn generate_alias(&self, name: &str) -> String {
        let mut segments = name.split(SEPARATOR).rev();
        let mut base = String::new();
        let mut counter: u32 = 0;

        loop {
            match segments.next() {
                Some(segment) => base.insert_str(0, segment),
                None => counter += 1,
            }

            let candidate = if counter == 0 {
                base.clone()
            } else {
                format!("{base}{counter}")
            };

            match self.entries.get(&key(&candidate)) {
                Some(existing) if !existing.points_to(name) => continue,
                _ => return candidate,
            }
        }
    }

    /// The fully-qualified name bound to `alias`, if any.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(&key(alias)).map(|e| e.target.as_str())
    }

    /// The alias `name` is imported under, if any.  When several aliases
    /// point at `name` the alphabetically first one is returned.
    pub fn alias_of(&self, name: &str) -> Option<&str> {
        let name = strip_leading_separator(name);
        self.entries
            .values()
            .find(|e| e.points_to(name))
            .map(|e| e.alias.as_str())
    }

    /// All `(alias, target)` pairs in case-insensitive alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|e| (e.alias.as_str(), e.target.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
