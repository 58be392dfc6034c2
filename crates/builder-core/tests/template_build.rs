//! End-to-end template builds into a temporary directory

use builder_core::build::Tally;
use builder_core::{BuildConfig, Builder, LineIo, LoadError, PromptCollector, Template};
use std::fs;
use std::io::Cursor;

const PROJECT_TEMPLATE: &str = r##"
version: "1.0"
variables:
  - name: projectName
    type: string
  - name: deps
    type: String
  - name: features
    type: STRING
prompts:
  - name: setup
    result: "# {{projectName}}\r\n\r\n{{\"- \" | deps}}\r\n{{upper(features)}}"
    inputs:
      - input: "Project name: "
        variable: projectname
        type: InputString
      - input: "Dependencies"
        variable: deps
        type: ArrayList
      - input: "Features"
        variable: Features
        type: checklist
        options:
          - { name: Logging, value: a }
          - { name: Metrics, value: b }
          - { name: Tracing, value: c }
files:
  - path: README.md
    prompt: SETUP
  - path: Cargo.toml
    content: 'name = "{{lower(projectName)}}"'
  - path: src/lib.rs
  - path: broken.txt
    content: "{{shout(projectName)}}"
  - path: notes.txt
    content: "see {{missing}}"
    prompt: nowhere
folders:
  - path: src
  - path: tests/fixtures
remote:
  - uri: ftp://example.com/a.txt
    path: vendor/a.txt
"##;

// Name, two list entries, then checklist keys: down, toggle, down, toggle, confirm
const ANSWERS: &str = "Demo\nserde\n  tokio  \n\nd\nx\nd\nx\n\n";

#[tokio::test]
async fn test_full_template_build() {
    let temp = tempfile::tempdir().unwrap();
    let mut template = Template::from_yaml_str(PROJECT_TEMPLATE).unwrap();
    let config = BuildConfig::new(temp.path());
    let mut builder = Builder::new(&config, config.http_client().unwrap(), ());
    let mut collector = PromptCollector::new(LineIo::new(Cursor::new(ANSWERS), Vec::new()));

    let summary = builder.build_all(&mut template, &mut collector).await;

    assert_eq!(summary.folders, Tally { succeeded: 2, failed: 0 });
    assert_eq!(summary.files, Tally { succeeded: 4, failed: 1 });
    assert_eq!(summary.remote_files, Tally { succeeded: 0, failed: 1 });

    let root = temp.path();
    assert!(root.join("tests/fixtures").is_dir());
    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        "# Demo\r\n\r\n- serde\r\n- tokio\r\nB\r\nC"
    );
    assert_eq!(
        fs::read_to_string(root.join("Cargo.toml")).unwrap(),
        "name = \"demo\""
    );
    assert_eq!(fs::read_to_string(root.join("src/lib.rs")).unwrap(), "");
    assert_eq!(
        fs::read_to_string(root.join("notes.txt")).unwrap(),
        "see {{missing}}"
    );
    assert!(!root.join("broken.txt").exists());
    assert!(!root.join("vendor/a.txt").exists());

    let (_, output) = collector.into_inner().into_parts();
    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("Project name: "));
    assert!(output.contains("  [ X ] Metrics"));
    assert!(output.contains("> [ X ] Tracing"));
}

#[test]
fn test_unsupported_version_is_reported() {
    let err = Template::from_yaml_str("version: \"2.0\"\n").unwrap_err();

    assert!(matches!(err, LoadError::UnsupportedVersion { .. }));
    assert!(err.to_string().contains("0.1"));
}

#[test]
fn test_missing_template_file() {
    let temp = tempfile::tempdir().unwrap();
    let err = Template::load(temp.path().join("absent.yaml")).unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
}
