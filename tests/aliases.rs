mod common;

use common::table_with;
use phpgen::{AliasTable, Error, PhpNamespace};

#[test]
fn test_insert_is_idempotent() {
    let mut table = AliasTable::new("App");

    let first = table.insert("Foo\\Bar", None).unwrap();
    let second = table.insert("Foo\\Bar", None).unwrap();

    assert_eq!(first, "Bar");
    assert_eq!(second, "Bar");
    assert_eq!(table.len(), 1);
}

#[test]
fn test_insert_strips_leading_separator() {
    let mut table = AliasTable::new("App");

    assert_eq!(table.insert("\\Foo\\Bar", None).unwrap(), "Bar");
    assert_eq!(table.get("Bar"), Some("Foo\\Bar"));
    assert_eq!(table.insert("Foo\\Bar", None).unwrap(), "Bar");
    assert_eq!(table.len(), 1);
}

#[test]
fn test_collision_prepends_path_segments() {
    let mut table = AliasTable::new("");

    assert_eq!(table.insert("A\\B\\Foo", None).unwrap(), "Foo");
    assert_eq!(table.insert("X\\Y\\Foo", None).unwrap(), "YFoo");
    assert_eq!(table.insert("P\\Y\\Foo", None).unwrap(), "PYFoo");

    assert_eq!(table.get("Foo"), Some("A\\B\\Foo"));
    assert_eq!(table.get("YFoo"), Some("X\\Y\\Foo"));
    assert_eq!(table.get("PYFoo"), Some("P\\Y\\Foo"));
}

#[test]
fn test_collision_falls_back_to_counter() {
    let mut table = table_with("App", &[("A\\Foo", None), ("X\\BFoo", None)]);

    // `Foo` and `BFoo` are both taken and `B\Foo` has no more segments.
    assert_eq!(table.insert("B\\Foo", None).unwrap(), "BFoo1");

    table.insert("Z\\BFoo1", Some("Other")).unwrap();
    assert_eq!(table.get("BFoo1"), Some("B\\Foo"));

    // Re-importing walks the same candidates and lands on the same alias.
    assert_eq!(table.insert("B\\Foo", None).unwrap(), "BFoo1");
}

#[test]
fn test_counter_increments_past_taken_suffixes() {
    let mut table = table_with(
        "App",
        &[
            ("A\\Foo", None),
            ("Q\\XFoo", None),
            ("Other\\Thing", Some("XFoo1")),
        ],
    );

    assert_eq!(table.insert("X\\Foo", None).unwrap(), "XFoo2");
    assert_eq!(table.len(), 4);
}

#[test]
fn test_generated_alias_is_deterministic() {
    let imports = [
        ("Zeta\\Service\\Client", None),
        ("Alpha\\Service\\Client", None),
        ("Alpha\\Http\\Client", None),
    ];
    let a = table_with("App", &imports);
    let b = table_with("App", &imports);

    assert_eq!(a, b);
    let aliases: Vec<&str> = a.iter().map(|(alias, _)| alias).collect();
    assert_eq!(aliases, vec!["Client", "HttpClient", "ServiceClient"]);
}

#[test]
fn test_explicit_alias_conflict() {
    let mut table = AliasTable::new("App");
    assert_eq!(table.insert("Foo\\Bar", Some("B")).unwrap(), "B");

    let err = table.insert("Other\\Baz", Some("B")).unwrap_err();
    match &err {
        Error::NamingConflict {
            alias,
            existing,
            requested,
        } => {
            assert_eq!(alias, "B");
            assert_eq!(existing, "Foo\\Bar");
            assert_eq!(requested, "Other\\Baz");
        }
        other => panic!("expected NamingConflict, got {other:?}"),
    }
    assert!(err.is_naming_conflict());
    assert_eq!(
        err.to_string(),
        "alias 'B' used already for 'Foo\\Bar', cannot use for 'Other\\Baz'"
    );

    // The failed insertion left the table untouched.
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("B"), Some("Foo\\Bar"));

    // Same target under the same alias is fine and creates nothing new.
    assert_eq!(table.insert("Foo\\Bar", Some("B")).unwrap(), "B");
    assert_eq!(table.len(), 1);
}

#[test]
fn test_same_namespace_defaults_to_short_name() {
    let mut table = AliasTable::new("App\\Models");

    assert_eq!(table.insert("App\\Models\\User", None).unwrap(), "User");
    assert_eq!(table.insert("Other\\User", None).unwrap(), "OtherUser");
}

#[test]
fn test_same_namespace_default_conflicts_like_explicit_alias() {
    let mut table = table_with("App", &[("Vendor\\User", None)]);

    let err = table.insert("App\\User", None).unwrap_err();
    assert!(err.is_naming_conflict());
    assert_eq!(table.len(), 1);
}

#[test]
fn test_same_target_under_second_explicit_alias() {
    let mut table = table_with("App", &[("Foo\\Bar", None)]);

    assert_eq!(table.insert("Foo\\Bar", Some("FB")).unwrap(), "FB");
    assert_eq!(table.len(), 2);
    assert_eq!(table.alias_of("Foo\\Bar"), Some("Bar"));
    assert_eq!(table.alias_of("\\Foo\\Bar"), Some("Bar"));
    assert_eq!(table.alias_of("Foo\\Baz"), None);
}

#[test]
fn test_iteration_is_sorted_by_alias() {
    let table = table_with("App", &[("Zeta\\T", None), ("Alpha\\T2", None)]);

    let entries: Vec<(&str, &str)> = table.iter().collect();
    assert_eq!(entries, vec![("T", "Zeta\\T"), ("T2", "Alpha\\T2")]);
}

#[test]
fn test_namespace_ignores_leading_separator() {
    let mut table = AliasTable::new("\\App");

    assert_eq!(table.namespace(), "App");
    assert_eq!(table.insert("App\\Thing", None).unwrap(), "Thing");
    assert!(!table.is_empty());
}

#[test]
fn test_aliases_differing_only_in_case_collide() {
    let mut table = AliasTable::new("App");

    assert_eq!(table.insert("A\\Foo", None).unwrap(), "Foo");
    assert_eq!(table.insert("B\\foo", None).unwrap(), "Bfoo");

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("FOO"), Some("A\\Foo"));
    assert_eq!(table.get("bfoo"), Some("B\\foo"));
}

#[test]
fn test_explicit_alias_conflict_ignores_case() {
    let mut table = table_with("App", &[("A\\Foo", None)]);

    let err = table.insert("B\\Bar", Some("FOO")).unwrap_err();
    match &err {
        Error::NamingConflict {
            alias,
            existing,
            requested,
        } => {
            assert_eq!(alias, "FOO");
            assert_eq!(existing, "A\\Foo");
            assert_eq!(requested, "B\\Bar");
        }
        other => panic!("expected NamingConflict, got {other:?}"),
    }
    assert_eq!(table.len(), 1);
}

#[test]
fn test_reimport_in_other_case_reuses_first_spelling() {
    let mut table = table_with("App", &[("Foo\\Bar", Some("FB"))]);

    assert_eq!(table.insert("foo\\bar", Some("fb")).unwrap(), "FB");
    assert_eq!(table.len(), 1);
    assert_eq!(table.alias_of("FOO\\BAR"), Some("FB"));
}

#[test]
fn test_same_namespace_default_conflicts_across_case() {
    let mut table = table_with("App", &[("Vendor\\user", None)]);

    let err = table.insert("App\\User", None).unwrap_err();
    assert!(err.is_naming_conflict());
    assert_eq!(table.len(), 1);
}

#[test]
fn test_class_declaration_conflicts_with_import_in_other_case() {
    let mut ns = PhpNamespace::new("App");
    ns.add_use("Vendor\\user", None).unwrap();

    let err = ns.add_class("User").unwrap_err();
    assert!(err.is_naming_conflict());
    assert!(ns.classes().is_empty());
}

#[test]
fn test_class_redeclared_in_other_case_is_the_same_class() {
    let mut ns = PhpNamespace::new("App");
    ns.add_class("User").unwrap().is_final = true;

    let again = ns.add_class("user").unwrap();
    assert!(again.is_final);
    assert_eq!(again.name, "User");
    assert_eq!(ns.classes().len(), 1);
    assert_eq!(ns.uses().len(), 1);
}
