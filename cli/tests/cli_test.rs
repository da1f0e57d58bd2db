use epistemic_product::{Agent, Graph};
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const WORLDS: &str = r#"digraph G {
  edge[arrowsize=0.3];

  edge[
    label="a",
    color="red",
    fontcolor="red",
  ];
  w1 -> w2;
}
"#;

const EVENTS: &str = r#"digraph G {
  edge[
    label="a",
    color="blue",
    fontcolor="blue",
  ];
  e1 -> e2;
}
"#;

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_epistemic-product"))
}

#[test]
fn test_product_on_stdout() {
    let worlds = input_file(WORLDS);
    let events = input_file(EVENTS);
    let compat = input_file("w1 e1\nw2 e2\n");

    let output = binary()
        .arg(worlds.path())
        .arg(events.path())
        .arg(compat.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let result = Graph::from_dot(&stdout).unwrap();

    let a = Agent::new("a");
    assert!(result.has_edge(&a, "w1e1", "w2e2"));
    assert_eq!(result.color(&a), Some("red"));
    assert!(stdout.contains("subgraph cluster_e1 {"));
}

#[test]
fn test_missing_file_is_usage_error() {
    let worlds = input_file(WORLDS);
    let events = input_file(EVENTS);

    let output = binary()
        .arg(worlds.path())
        .arg(events.path())
        .arg("/nonexistent/compat.txt")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_argument_is_usage_error() {
    let worlds = input_file(WORLDS);

    let output = binary().arg(worlds.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_malformed_compat_fails() {
    let worlds = input_file(WORLDS);
    let events = input_file(EVENTS);
    let compat = input_file("w1e1\n");

    let output = binary()
        .arg(worlds.path())
        .arg(events.path())
        .arg(compat.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid COMPAT relation"));
}

#[test]
fn test_log_directive_enables_debug_output() {
    let worlds = input_file(WORLDS);
    let events = input_file(EVENTS);
    let compat = input_file("w1 e1\nw2 e2\n");

    let output = binary()
        .env("EPISTEMIC_PRODUCT_LOG", "epistemic_product=debug")
        .env("NO_COLOR", "1")
        .arg(worlds.path())
        .arg(events.path())
        .arg(compat.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Parsed graph: 1 agents, 2 nodes"), "{}", stderr);
    assert!(stderr.contains("Product graph:"), "{}", stderr);

    // Logs never leak into the rendered document
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Parsed graph"));
    assert!(Graph::from_dot(&stdout).unwrap().has_edge(&Agent::new("a"), "w1e1", "w2e2"));
}

#[test]
fn test_default_log_level_is_quiet() {
    let worlds = input_file(WORLDS);
    let events = input_file(EVENTS);
    let compat = input_file("w1 e1\nw2 e2\n");

    let output = binary()
        .env_remove("EPISTEMIC_PRODUCT_LOG")
        .arg(worlds.path())
        .arg(events.path())
        .arg(compat.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_missing_color_fails() {
    let uncolored = "digraph G {\n  edge[\n    label=\"a\",\n  ];\n  w1 -> w2;\n}\n";
    let worlds = input_file(uncolored);
    let events = input_file(EVENTS);
    let compat = input_file("w1 e1\nw2 e2\n");

    let output = binary()
        .arg(worlds.path())
        .arg(events.path())
        .arg(compat.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No color defined for agent a"), "{}", stderr);
}
