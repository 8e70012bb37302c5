use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn knightpath(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("knightpath").unwrap();
    cmd.env("KNIGHTPATH_CONFIG", dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn path_within_limit() {
    let dir = TempDir::new().unwrap();
    knightpath(&dir)
        .args(["path", "a1", "c2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 move (limit 3)"))
        .stdout(predicate::str::contains("Route: a1 -> c2"));
}

#[test]
fn path_beyond_limit_has_own_exit_code() {
    let dir = TempDir::new().unwrap();
    knightpath(&dir)
        .args(["path", "0,0", "7,7"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains(
            "The target can not be reached in 3 moves or less",
        ));
}

#[test]
fn path_unreachable_has_own_exit_code() {
    let dir = TempDir::new().unwrap();
    knightpath(&dir)
        .args(["path", "a1", "b2", "--dimension", "3"])
        .assert()
        .code(4)
        .stdout(predicate::str::contains("The target position is not reachable"));
}

#[test]
fn path_json_output() {
    let dir = TempDir::new().unwrap();
    let output = knightpath(&dir)
        .args(["path", "a1", "h8", "--max-depth", "6", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["result"]["outcome"], "found");
    assert_eq!(report["result"]["move_count"], 6);
    assert_eq!(report["result"]["path"].as_array().unwrap().len(), 7);
    assert_eq!(report["query"]["dimension"], 8);
}

#[test]
fn path_rejects_off_board_cell() {
    let dir = TempDir::new().unwrap();
    knightpath(&dir)
        .args(["path", "--", "-1,0", "a1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn path_rejects_negative_depth() {
    let dir = TempDir::new().unwrap();
    knightpath(&dir)
        .args(["path", "a1", "c2", "--max-depth", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be negative"));
}

#[test]
fn config_values_are_used() {
    let dir = TempDir::new().unwrap();
    knightpath(&dir)
        .args(["config", "set", "max_depth", "6"])
        .assert()
        .success()
        .stdout("Set max_depth = 6\n");

    knightpath(&dir)
        .args(["config", "get", "max_depth"])
        .assert()
        .success()
        .stdout("6\n");

    knightpath(&dir).args(["path", "a1", "h8"]).assert().success();
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    knightpath(&dir).args(["config", "init"]).assert().success();
    knightpath(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    knightpath(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn reach_prints_distance_table() {
    let dir = TempDir::new().unwrap();
    knightpath(&dir)
        .args(["reach", "a1", "--dimension", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25 of 25 cells reachable"));
}

#[test]
fn play_reads_cells_from_stdin() {
    let dir = TempDir::new().unwrap();
    knightpath(&dir)
        .arg("play")
        .write_stdin("a1\na1\nc2\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Knight placed on a1"))
        .stdout(predicate::str::contains("Ignored: the knight already stands there"))
        .stdout(predicate::str::contains("Path from a1 to c2"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    knightpath(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("knightpath"));
}
