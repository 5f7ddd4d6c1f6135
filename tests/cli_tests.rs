//! CLI integration tests

mod common;

use predicates::prelude::*;

#[test]
fn test_resolve_prints_one_exclusion_per_line() {
    let tree = common::TestTree::new();
    tree.touch("drivers/legacy.c");
    tree.touch("tools/a.py");
    tree.touch("tools/b.py");
    let manifest = tree.manifest_for(&["drivers/legacy.c", "tools/*.py"]);

    common::exclude_list_cmd(&tree.root)
        .arg("resolve")
        .arg(&manifest)
        .assert()
        .success()
        .stdout("*drivers/legacy.c\n*tools/*.py\n");
}

#[test]
fn test_resolve_json_format() {
    let tree = common::TestTree::new();
    tree.touch("drivers/legacy.c");
    let manifest = tree.manifest_for(&["drivers/legacy.c"]);

    let output = common::exclude_list_cmd(&tree.root)
        .arg("resolve")
        .arg(&manifest)
        .args(["--format", "json"])
        .output()
        .expect("command runs");

    assert!(output.status.success());
    let parsed: Vec<String> = serde_json::from_slice(&output.stdout).expect("JSON array");
    assert_eq!(parsed, vec!["*drivers/legacy.c"]);
}

#[test]
fn test_resolve_writes_suppressions_file() {
    let tree = common::TestTree::new();
    tree.touch("lib/zlib/inflate.c");
    let manifest = tree.manifest_for(&["lib/zlib/"]);
    let out = tree.sibling("suppressions.txt");

    common::exclude_list_cmd(&tree.root)
        .arg("resolve")
        .arg(&manifest)
        .args(["--format", "cppcheck-suppressions", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        std::fs::read_to_string(out).expect("output written"),
        "*:*lib/zlib/\n"
    );
}

#[test]
fn test_resolve_missing_path_fails() {
    let tree = common::TestTree::new();
    let manifest = tree.manifest_for(&["drivers/legacy.c"]);

    common::exclude_list_cmd(&tree.root)
        .arg("resolve")
        .arg(&manifest)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error: Malformed path: drivers/legacy.c"));
}

#[test]
fn test_resolve_missing_manifest_fails() {
    let tree = common::TestTree::new();

    common::exclude_list_cmd(&tree.root)
        .arg("resolve")
        .arg(tree.sibling("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Can't open file"));
}

#[test]
fn test_resolve_unsupported_tool_fails() {
    let tree = common::TestTree::new();
    tree.touch("a.c");
    let manifest = tree.manifest_for(&["a.c"]);

    common::exclude_list_cmd(&tree.root)
        .args(["--tool", "eclair", "resolve"])
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unimplemented for eclair!"));
}

#[test]
fn test_tool_from_environment() {
    let tree = common::TestTree::new();
    tree.touch("a.c");
    let manifest = tree.manifest_for(&["a.c"]);

    common::exclude_list_cmd(&tree.root)
        .env("EXCLUDE_LIST_TOOL", "coverity")
        .arg("resolve")
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unimplemented for coverity!"));
}

#[test]
fn test_resolve_missing_source_root_fails() {
    let tree = common::TestTree::new();
    let manifest = tree.manifest_for(&[]);

    common::exclude_list_cmd(&tree.sibling("nowhere"))
        .arg("resolve")
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid source tree root"));
}

#[test]
fn test_check_prints_summary() {
    let tree = common::TestTree::new();
    tree.touch("tools/a.py");
    tree.touch("tools/b.py");
    tree.touch("drivers/legacy.c");
    let manifest = tree.manifest_for(&["tools/*.py", "drivers/legacy.c"]);

    common::exclude_list_cmd(&tree.root)
        .arg("check")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2 exclusions resolved (3 paths)",
        ));
}

#[test]
fn test_check_verbose_lists_entries() {
    let tree = common::TestTree::new();
    tree.touch("drivers/legacy.c");
    let manifest = tree.write_manifest(
        r#"{"content":[{"rel_path":"drivers/legacy.c","comment":"Imported driver"}]}"#,
    );

    common::exclude_list_cmd(&tree.root)
        .args(["-v", "check"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("drivers/legacy.c -> *drivers/legacy.c")
                .and(predicate::str::contains("Imported driver")),
        );
}

#[test]
fn test_tools_lists_cppcheck() {
    let tree = common::TestTree::new();

    common::exclude_list_cmd(&tree.root)
        .arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("cppcheck"));
}

#[test]
fn test_version_command() {
    let tree = common::TestTree::new();

    common::exclude_list_cmd(&tree.root)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("exclude-list"));
}
