use oxs_core::document;
use oxs_core::document::operation::{HttpMethod, OperationNode, PathItemNode};
use oxs_core::error::ParseError;

const VENICE: &str = include_str!("fixtures/venice-subset.yaml");

#[test]
fn parse_venice_subset() {
    let spec = document::from_yaml(VENICE).expect("fixture should parse");
    assert_eq!(spec.openapi, "3.0.0");

    let info = spec.info.as_ref().expect("should have info");
    assert_eq!(info.title.as_deref(), Some("Venice AI API"));

    assert_eq!(spec.paths.len(), 2);
    assert_eq!(spec.tags.len(), 2);
    assert_eq!(spec.servers.len(), 1);

    let components = spec.components.as_ref().expect("should have components");
    assert_eq!(components.schemas.len(), 4);
    assert!(components.security_schemes.contains_key("BearerAuth"));
}

#[test]
fn parse_rejects_non_3x_versions() {
    let input = r#"
openapi: "2.0.0"
info:
  title: Old
  version: "1.0"
paths: {}
"#;
    let result = document::from_yaml(input);
    assert!(matches!(result, Err(ParseError::UnsupportedVersion(_))));
}

#[test]
fn parse_accepts_json_input() {
    let input = r#"{
  "openapi": "3.0.0",
  "info": {"title": "JSON API", "version": "1.0"},
  "paths": {}
}"#;
    let spec = document::from_json(input).expect("JSON should parse");
    assert_eq!(
        spec.info.as_ref().unwrap().title.as_deref(),
        Some("JSON API")
    );
}

#[test]
fn uppercase_method_keys_are_accepted() {
    let input = r#"
openapi: 3.0.0
info:
  title: Shouting
  version: "1.0"
paths:
  /x:
    GET:
      responses:
        '200':
          description: OK
"#;
    let spec = document::from_yaml(input).unwrap();
    let ops: Vec<_> = spec.operations().collect();
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].1, HttpMethod::Get);
}

#[test]
fn mixed_case_method_keys_are_accepted() {
    let input = r#"
openapi: 3.0.0
info:
  title: Mixed
  version: "1.0"
paths:
  /x:
    Get:
      responses:
        '200':
          description: OK
    pAtCh:
      responses:
        '200':
          description: OK
"#;
    let spec = document::from_yaml(input).unwrap();
    let methods: Vec<HttpMethod> = spec.operations().map(|(_, m, _)| m).collect();
    assert_eq!(methods, [HttpMethod::Get, HttpMethod::Patch]);

    // Written back lowercase.
    let output = document::to_yaml(&spec).unwrap();
    assert!(output.contains("get:"));
    assert!(output.contains("patch:"));
    assert!(!output.contains("Get:"));
}

#[test]
fn null_path_items_round_trip() {
    let input = r#"
openapi: 3.0.0
info:
  title: Holey
  version: "1.0"
paths:
  /gone: null
"#;
    let spec = document::from_yaml(input).unwrap();
    assert!(matches!(
        spec.paths.get("/gone"),
        Some(PathItemNode::Other(_))
    ));

    let reparsed = document::from_yaml(&document::to_yaml(&spec).unwrap()).unwrap();
    assert_eq!(reparsed, spec);
}

#[test]
fn scalar_operations_fall_back_to_raw_nodes() {
    let input = r#"
openapi: 3.0.0
info:
  title: Odd
  version: "1.0"
paths:
  /x:
    get: 42
"#;
    let spec = document::from_yaml(input).unwrap();
    let PathItemNode::Item(item) = spec.paths.get("/x").unwrap() else {
        panic!("should parse as a path item");
    };
    assert!(matches!(item.get, Some(OperationNode::Other(_))));
    assert_eq!(spec.operations().count(), 0);
}

#[test]
fn unknown_keys_round_trip() {
    let input = r#"
openapi: 3.0.0
info:
  title: Extended
  version: "1.0"
x-custom-top: marker
paths:
  /x:
    x-path-extension: kept
    get:
      x-op-extension:
        nested: true
      responses:
        '200':
          description: OK
"#;
    let spec = document::from_yaml(input).unwrap();
    assert!(spec.extra.contains_key("x-custom-top"));

    let output = document::to_yaml(&spec).unwrap();
    assert!(output.contains("x-custom-top"));
    assert!(output.contains("x-path-extension"));
    assert!(output.contains("x-op-extension"));

    let reparsed = document::from_yaml(&output).unwrap();
    assert_eq!(reparsed, spec);
}

#[test]
fn authored_samples_parse_without_labels() {
    let input = r#"
openapi: 3.0.0
info:
  title: Authored
  version: "1.0"
paths:
  /x:
    get:
      x-codeSamples:
        - lang: Go
          source: fmt.Println("hi")
      responses:
        '200':
          description: OK
"#;
    let spec = document::from_yaml(input).unwrap();
    let (_, _, op) = spec.operations().next().unwrap();
    assert_eq!(op.code_samples.len(), 1);
    assert_eq!(op.code_samples[0].lang, "Go");
    assert_eq!(op.code_samples[0].label, None);
}

#[test]
fn generated_sources_keep_embedded_newlines() {
    let mut spec = document::from_yaml(VENICE).unwrap();
    oxs_core::synth::annotate(&mut spec, &oxs_core::synth::SynthOptions::default());

    let (_, _, op) = spec.operations().next().unwrap();
    assert!(op.code_samples.iter().all(|s| s.source.contains('\n')));

    let reparsed = document::from_yaml(&document::to_yaml(&spec).unwrap()).unwrap();
    assert_eq!(reparsed, spec);
}
