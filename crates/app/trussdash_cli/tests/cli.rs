use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

const DOCUMENT: &str = r##"{
  "paths": {
    "/api/public/projects": {
      "get": {
        "tags": ["Projects"],
        "responses": { "200": { "content": { "application/json": {
          "schema": { "type": "array", "items": { "$ref": "#/components/schemas/Project" } }
        } } } }
      }
    },
    "/api/PlatePairs/getPlateTypeProperties/{plateType}": {
      "get": {
        "tags": ["PlatePairs"],
        "parameters": [ { "name": "plateType", "in": "path", "required": true } ]
      }
    },
    "/api/Untagged": { "get": {} }
  },
  "components": { "schemas": {
    "Project": { "type": "object", "required": ["id"], "properties": { "id": { "type": "string" } } }
  } }
}"##;

fn cli() -> Command {
    Command::cargo_bin("trussdash_cli").expect("binary")
}

fn document() -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    fs::write(file.path(), DOCUMENT).expect("write document");
    file
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is JSON")
}

#[test]
fn version_prints_name_and_version() {
    cli()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("trussdash_cli "));
}

#[test]
fn endpoints_are_printed_in_tag_order() {
    let doc = document();
    let json = stdout_json(cli().arg("endpoints").arg(doc.path()));
    let tags: Vec<&str> = json
        .as_array()
        .expect("array")
        .iter()
        .map(|e| e["tag"].as_str().expect("tag"))
        .collect();
    assert_eq!(tags, vec!["Other", "PlatePairs", "Projects"]);
}

#[test]
fn endpoints_can_be_filtered_by_tag() {
    let doc = document();
    let json = stdout_json(cli().arg("endpoints").arg(doc.path()).args(["--tag", "PlatePairs"]));
    assert_eq!(json.as_array().expect("array").len(), 1);
    assert_eq!(json[0]["parameters"][0]["in"], "path");
}

#[test]
fn schemas_lists_all_or_one() {
    let doc = document();
    let all = stdout_json(cli().arg("schemas").arg(doc.path()));
    assert!(all.get("Project").is_some());

    let one = stdout_json(cli().arg("schemas").arg(doc.path()).arg("Project"));
    assert_eq!(one["properties"][0]["required"], true);

    cli()
        .arg("schemas")
        .arg(doc.path())
        .arg("Missing")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("schema not found: Missing"));
}

#[test]
fn missing_document_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    cli()
        .arg("endpoints")
        .arg(dir.path().join("v1.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn malformed_document_fails() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    fs::write(file.path(), "{ not json").expect("write");
    cli()
        .arg("schemas")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed"));
}

#[test]
fn member_length_of_points() {
    cli()
        .args(["member-length", "0,0", "3,4", "-1,1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("5\n"));
}

#[test]
fn member_length_rejects_bad_points() {
    cli().args(["member-length", "3"]).assert().failure();
}
