use std::path::Path;

use phpgen::config::{CONFIG_FILE_NAME, IndentStyle};
use phpgen::{Config, Error, PrinterConfig};

#[test]
fn test_empty_config_uses_defaults() {
    let config = Config::from_toml("", Path::new("phpgen.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.printer.indent_style, IndentStyle::Tab);
    assert_eq!(config.printer.indent_unit(), "\t");
    assert!(!config.printer.strict_types);
    assert!(!config.printer.bracketed_namespaces);
}

#[test]
fn test_partial_printer_section() {
    let config = Config::from_toml(
        "[printer]\nindent-style = \"space\"\nindent-width = 2\n",
        Path::new("phpgen.toml"),
    )
    .unwrap();

    assert_eq!(
        config.printer,
        PrinterConfig {
            indent_style: IndentStyle::Space,
            indent_width: 2,
            ..PrinterConfig::default()
        }
    );
    assert_eq!(config.printer.indent_unit(), "  ");
}

#[test]
fn test_all_printer_keys() {
    let config = Config::from_toml(
        r#"
[printer]
indent-style = "tab"
indent-width = 8
strict-types = true
bracketed-namespaces = true
"#,
        Path::new("phpgen.toml"),
    )
    .unwrap();

    assert!(config.printer.strict_types);
    assert!(config.printer.bracketed_namespaces);
    // Width only applies to spaces.
    assert_eq!(config.printer.indent_unit(), "\t");
}

#[test]
fn test_unknown_key_is_rejected() {
    let err = Config::from_toml("[printer]\nindent_width = 2\n", Path::new("bad.toml"))
        .unwrap_err();

    assert!(matches!(err, Error::ConfigParse { .. }));
    assert!(err.to_string().contains("bad.toml"), "{err}");
}

#[test]
fn test_explicit_missing_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Config::load(Some(&missing), dir.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigRead { .. }));
}

#[test]
fn test_explicit_path_wins_over_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[printer]\nstrict-types = true\n",
    )
    .unwrap();
    let explicit = dir.path().join("custom.toml");
    std::fs::write(&explicit, "[printer]\nbracketed-namespaces = true\n").unwrap();

    let config = Config::load(Some(&explicit), dir.path()).unwrap();
    assert!(config.printer.bracketed_namespaces);
    assert!(!config.printer.strict_types);
}

#[test]
fn test_working_dir_config_is_found() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[printer]\nindent-style = \"space\"\n",
    )
    .unwrap();

    let config = Config::load(None, dir.path()).unwrap();
    assert_eq!(config.printer.indent_unit(), "    ");
}

#[test]
fn test_invalid_working_dir_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[printer\n").unwrap();

    let err = Config::load(None, dir.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
}
