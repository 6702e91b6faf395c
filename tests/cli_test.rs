#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn smart_arrays(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_smart-arrays"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }

    child.wait_with_output().unwrap()
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_flatten_inline_argument() {
    let output = smart_arrays(&["flatten", "[0,[[1],2],[[[3]]]]"], None);
    assert_eq!(stdout_json(&output), serde_json::json!([0, 1, 2, 3]));
}

#[test]
fn test_group_by_reads_stdin() {
    let input = r#"[{"name":"Luke","job":"Jedi"},{"name":"Yoda","job":"Jedi"},{"name":"Vador","job":"Sith"}]"#;
    let output = smart_arrays(&["group-by", "--key", "/job"], Some(input));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_end().starts_with(r#"{"Jedi":"#));
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({
            "Jedi": [{"name": "Luke", "job": "Jedi"}, {"name": "Yoda", "job": "Jedi"}],
            "Sith": [{"name": "Vador", "job": "Sith"}]
        })
    );
}

#[test]
fn test_range_shapes() {
    assert_eq!(stdout_json(&smart_arrays(&["range", "4"], None)), serde_json::json!([0, 1, 2, 3]));
    assert_eq!(
        stdout_json(&smart_arrays(&["range", "3", "7"], None)),
        serde_json::json!([3, 4, 5, 6])
    );
    assert_eq!(stdout_json(&smart_arrays(&["range", "3", "0"], None)), serde_json::json!([]));
}

#[test]
fn test_uniq_and_without() {
    let output = smart_arrays(&["uniq", "[0,1,0,1,2,3,3,2]"], None);
    assert_eq!(stdout_json(&output), serde_json::json!([0, 1, 2, 3]));

    let output = smart_arrays(
        &["without", "[0,1,0,2,0,3]", "--value", "0", "--value", "4", "--value", "5"],
        None,
    );
    assert_eq!(stdout_json(&output), serde_json::json!([1, 2, 3]));
}

#[test]
fn test_non_array_input_fails() {
    let output = smart_arrays(&["flatten", r#"{"a":1}"#], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Expected a JSON array"));
}

#[test]
fn test_invalid_pointer_fails_validation() {
    let output = smart_arrays(&["uniq", "[]", "--key", "job"], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("JSON pointer"));
}
