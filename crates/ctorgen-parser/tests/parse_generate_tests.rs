//! Integration tests from Go source text to generated Go source.

#![allow(non_snake_case)]

use ctorgen_core::{GenerationConfig, Generator, Pattern};
use ctorgen_parser::parse_struct;

const SERVER_SOURCE: &str = r#"package options

import (
	"crypto/tls"
	"net/http"
	"time"
)

type Server struct {
	address    string
	port       int
	timeout    time.Duration
	tlsConfig  *tls.Config `construction:"getter:false"`
	instanceID string      `construction:"setter:false"`
	cache      map[string]int `construction:"-"`
}
"#;

fn generate(config: &GenerationConfig) -> String {
    let model = parse_struct(SERVER_SOURCE, "Server").unwrap();
    Generator::new(config, &model).generate().unwrap()
}

#[test]
fn options_with_accessors___parsed_server___expected_declarations() {
    let config = GenerationConfig::new("Server")
        .with_pattern(Pattern::Options)
        .with_accessors(true);

    let code = generate(&config);

    assert!(code.starts_with("// Code generated by ctorgen. DO NOT EDIT.\n\npackage options\n"));
    assert!(code.contains("type ServerOption func(*Server)"));
    assert!(code.contains("func WithTlsConfig(tlsConfig *tls.Config) ServerOption {"));
    assert!(!code.contains("WithInstanceID"));
    assert!(!code.contains("cache"));
    assert!(code.contains("func (s *Server) GetInstanceID() string {"));
    assert!(!code.contains("GetTlsConfig"));
}

#[test]
fn imports___only_referenced_packages___grouped_and_sorted() {
    let config = GenerationConfig::new("Server").with_pattern(Pattern::AllArgs);

    let code = generate(&config);

    assert!(code.contains("import (\n\t\"crypto/tls\"\n\t\"time\"\n)\n"));
    assert!(!code.contains("net/http"));
}

#[test]
fn imports___accessor_only_reference___single_import() {
    let source = r#"package p

import "time"

type Job struct {
	started time.Time `construction:"setter:false"`
}
"#;
    let model = parse_struct(source, "Job").unwrap();
    let config = GenerationConfig::new("Job")
        .with_pattern(Pattern::Builder)
        .with_accessors(true);

    let code = Generator::new(&config, &model).generate().unwrap();

    assert!(code.contains("import \"time\"\n"));
    assert!(code.contains("func (j *Job) GetStarted() time.Time {"));
}
