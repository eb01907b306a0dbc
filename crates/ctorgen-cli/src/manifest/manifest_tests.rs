#![allow(non_snake_case)]

use super::*;

fn entry(name: &str) -> TypeEntry {
    TypeEntry {
        name: name.to_string(),
        ..TypeEntry::default()
    }
}

fn manifest(types: Vec<TypeEntry>) -> Manifest {
    Manifest {
        defaults: Defaults::default(),
        types,
    }
}

// Manifest parsing tests

#[test]
fn Manifest___from_str___parses_defaults_and_types() {
    let toml = r#"
[defaults]
constructor_types = ["allArgs", "builder"]
return_value = false
setter_prefix = "With"
with_getter = true

[[types]]
name = "Server"
source = "server.go"
output = "server_gen.go"
constructor_types = ["options"]
init = "initialize"

[[types]]
name = "Client"
"#;

    let manifest = Manifest::from_str(toml).unwrap();

    assert_eq!(manifest.defaults.setter_prefix.as_deref(), Some("With"));
    assert_eq!(manifest.defaults.with_getter, Some(true));
    assert_eq!(manifest.types.len(), 2);
    assert_eq!(manifest.types[0].name, "Server");
    assert_eq!(manifest.types[0].source, Some(PathBuf::from("server.go")));
    assert_eq!(manifest.types[0].init.as_deref(), Some("initialize"));
    assert_eq!(manifest.types[1].constructor_types, None);
}

#[test]
fn Manifest___from_str___invalid_toml___fails() {
    let result = Manifest::from_str("[[types]\nname = ");

    assert!(result.is_err());
}

// Manifest validation tests

#[test]
fn Manifest___validate___accepts_valid_manifest() {
    let manifest = manifest(vec![entry("Server"), entry("Client")]);

    assert!(manifest.validate().is_ok());
}

#[test]
fn Manifest___validate___rejects_empty_manifest() {
    let result = manifest(vec![]).validate();

    assert!(result.is_err());
}

#[test]
fn Manifest___validate___rejects_empty_type_name() {
    let result = manifest(vec![entry("  ")]).validate();

    assert!(result.unwrap_err().to_string().contains("cannot be empty"));
}

#[test]
fn Manifest___validate___rejects_duplicate_type_names() {
    let result = manifest(vec![entry("Server"), entry("Server")]).validate();

    assert!(result.unwrap_err().to_string().contains("Duplicate type name"));
}

#[test]
fn Manifest___validate___rejects_unknown_constructor_type() {
    let result = manifest(vec![TypeEntry {
        constructor_types: Some(vec!["allArgs".to_string(), "factory".to_string()]),
        ..entry("Server")
    }])
    .validate();

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("invalid constructor type 'factory'"));
}

#[test]
fn Manifest___validate___rejects_unknown_default_constructor_type() {
    let mut manifest = manifest(vec![entry("Server")]);
    manifest.defaults.constructor_types = Some(vec!["singleton".to_string()]);

    assert!(manifest.validate().is_err());
}

#[test]
fn Manifest___validate___rejects_empty_constructor_types() {
    let result = manifest(vec![TypeEntry {
        constructor_types: Some(vec![]),
        ..entry("Server")
    }])
    .validate();

    assert!(result.unwrap_err().to_string().contains("no constructor types"));
}

#[test]
fn Manifest___validate___rejects_duplicate_explicit_outputs() {
    let result = manifest(vec![
        TypeEntry {
            output: Some(PathBuf::from("gen.go")),
            ..entry("Server")
        },
        TypeEntry {
            output: Some(PathBuf::from("gen.go")),
            ..entry("Client")
        },
    ])
    .validate();

    assert!(result.unwrap_err().to_string().contains("Duplicate output path"));
}

#[test]
fn Manifest___validate___rejects_output_colliding_with_default_path() {
    let result = manifest(vec![
        TypeEntry {
            source: Some(PathBuf::from("models/server.go")),
            ..entry("Server")
        },
        TypeEntry {
            output: Some(PathBuf::from("models/server_gen.go")),
            ..entry("Client")
        },
    ])
    .validate();

    assert!(result.is_err());
}

// Request resolution tests

#[test]
fn Manifest___requests___entry_values_override_defaults() {
    let mut manifest = manifest(vec![
        TypeEntry {
            constructor_types: Some(vec!["options".to_string()]),
            setter_prefix: Some("Set".to_string()),
            with_getter: Some(false),
            source: Some(PathBuf::from("server.go")),
            ..entry("Server")
        },
        entry("Client"),
    ]);
    manifest.defaults = Defaults {
        constructor_types: Some(vec!["builder".to_string()]),
        init: Some("initialize".to_string()),
        return_value: Some(true),
        setter_prefix: Some("With".to_string()),
        with_getter: Some(true),
    };

    let requests = manifest.requests(Path::new("/work")).unwrap();

    let server = &requests[0].config;
    assert_eq!(server.patterns.iter().copied().collect::<Vec<_>>(), vec![Pattern::Options]);
    assert_eq!(server.mutator_prefix.as_deref(), Some("Set"));
    assert!(!server.emit_accessors);
    assert_eq!(server.init_hook.as_deref(), Some("initialize"));
    assert_eq!(requests[0].source, Some(PathBuf::from("/work/server.go")));

    let client = &requests[1].config;
    assert_eq!(client.patterns.iter().copied().collect::<Vec<_>>(), vec![Pattern::Builder]);
    assert_eq!(client.mutator_prefix.as_deref(), Some("With"));
    assert!(client.emit_accessors);
    assert!(client.return_by_value);
    assert_eq!(requests[1].source, None);
    assert_eq!(requests[1].output, None);
}

#[test]
fn Manifest___requests___no_constructor_types_anywhere___defaults_to_all_args() {
    let requests = manifest(vec![entry("Server")])
        .requests(Path::new("."))
        .unwrap();

    assert!(requests[0].config.wants(Pattern::AllArgs));
    assert_eq!(requests[0].config.patterns.len(), 1);
    assert!(!requests[0].config.emit_accessors);
}

// manifest_path tests

#[test]
fn manifest_path___none___uses_default_file() {
    assert_eq!(manifest_path(None), PathBuf::from("ctorgen.toml"));
}

#[test]
fn manifest_path___given___uses_it() {
    assert_eq!(
        manifest_path(Some("config/gen.toml".to_string())),
        PathBuf::from("config/gen.toml")
    );
}
