use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const HANDLERS: &str = r#"package handlers

func listPosts() {
	rows, err := db.Query(`SELECT id, "teamId", "userId", "createdAt"
		FROM posts WHERE "teamId" = $1`, teamID)
	c.JSON(200, gin.H{"teamId": teamID})
}
"#;

fn handlers_dir(temp: &TempDir) -> assert_fs::fixture::ChildPath {
    let dir = temp.child("internal/handlers");
    dir.create_dir_all().unwrap();
    dir
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("colrename").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("snake_case"));
}

#[test]
fn test_default_targets_with_missing_files() {
    let temp = TempDir::new().unwrap();
    let dir = handlers_dir(&temp);
    dir.child("handlers.go").write_str(HANDLERS).unwrap();
    dir.child("realtime_ws.go")
        .write_str("q := `UPDATE users SET \"imageUrl\" = $1`\n")
        .unwrap();

    let mut cmd = Command::cargo_bin("colrename").unwrap();
    cmd.current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Processing internal/handlers/handlers.go...",
        ))
        .stdout(predicate::str::contains(
            "  Replaced \"teamId\" -> team_id (3 times)",
        ))
        .stdout(predicate::str::contains(
            "✓ Updated internal/handlers/handlers.go (5 replacements)",
        ))
        .stdout(predicate::str::contains(
            "✓ Updated internal/handlers/realtime_ws.go (1 replacements)",
        ))
        .stdout(predicate::str::contains("Complete! Made 6 total replacements"))
        .stdout(predicate::str::contains(
            "diff internal/handlers/handlers.go.bak internal/handlers/handlers.go | head -50",
        ))
        .stdout(predicate::str::contains(
            "for f in \"internal/handlers\"/*.bak; do mv \"$f\" \"${f%.bak}\"; done",
        ))
        .stderr(predicate::str::contains(
            "Warning: internal/handlers/scheduled_posts_worker.go not found, skipping...",
        ));

    dir.child("handlers.go.bak").assert(HANDLERS);
    dir.child("handlers.go")
        .assert(predicate::str::contains("c.JSON(200, gin.H{team_id: teamID})"));
    dir.child("scheduled_posts_worker.go.bak")
        .assert(predicate::path::missing());
}

#[test]
fn test_delimited_mode_keeps_go_map_keys() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("handlers.go");
    file.write_str(HANDLERS).unwrap();

    let mut cmd = Command::cargo_bin("colrename").unwrap();
    cmd.current_dir(temp.path())
        .args(["handlers.go", "--mode", "delimited"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  Replaced \"teamId\" -> team_id (2 times)"))
        .stdout(predicate::str::contains("Made 4 total replacements"));

    file.assert(predicate::str::contains(
        "SELECT id, team_id, user_id, created_at\n\t\tFROM posts WHERE team_id = $1`",
    ));
    file.assert(predicate::str::contains("gin.H{\"teamId\": teamID}"));
}

#[test]
fn test_second_run_makes_no_replacements() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("worker.go");
    file.write_str("`SELECT \"lastPublishStatus\" FROM posts`")
        .unwrap();

    for expected in ["Made 1 total replacements", "Made 0 total replacements"] {
        let mut cmd = Command::cargo_bin("colrename").unwrap();
        cmd.current_dir(temp.path())
            .arg("worker.go")
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }

    file.assert("`SELECT last_publish_status FROM posts`");
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("handlers.go");
    file.write_str(HANDLERS).unwrap();

    let mut cmd = Command::cargo_bin("colrename").unwrap();
    cmd.current_dir(temp.path())
        .args(["handlers.go", "--dry-run", "--diff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would replace \"userId\" -> user_id (1 times)"))
        .stdout(predicate::str::contains("--- handlers.go.bak"))
        .stdout(predicate::str::contains("Dry run: would make 5 total replacements"))
        .stdout(predicate::str::contains("To restore").not());

    file.assert(HANDLERS);
    temp.child("handlers.go.bak")
        .assert(predicate::path::missing());
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    temp.child("a.go").write_str("\"publishedAt\"").unwrap();

    let output = Command::cargo_bin("colrename")
        .unwrap()
        .current_dir(temp.path())
        .args(["a.go", "missing.go", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["operation"], "rename-columns");
    assert_eq!(value["mode"], "unrestricted");
    assert_eq!(value["summary"]["total_replacements"], 1);
    assert_eq!(value["summary"]["files_skipped"], 1);
    assert_eq!(value["files"][0]["backup"], "a.go.bak");
}

#[test]
fn test_quiet_prints_nothing() {
    let temp = TempDir::new().unwrap();
    temp.child("a.go").write_str("\"userId\"").unwrap();

    let mut cmd = Command::cargo_bin("colrename").unwrap();
    cmd.current_dir(temp.path())
        .args(["a.go", "missing.go", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    temp.child("a.go").assert("user_id");
}

#[test]
fn test_unexpected_error_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    temp.child("a.go").write_str("\"userId\"").unwrap();
    temp.child("dir.go").create_dir_all().unwrap();
    temp.child("c.go").write_str("\"userId\"").unwrap();

    let mut cmd = Command::cargo_bin("colrename").unwrap();
    cmd.current_dir(temp.path())
        .args(["a.go", "dir.go", "c.go"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✓ Updated a.go (1 replacements)"))
        .stderr(predicate::str::contains("Error processing dir.go"));

    temp.child("a.go").assert("user_id");
    temp.child("c.go").assert("\"userId\"");
}

#[test]
fn test_config_file_mappings_and_mode() {
    let temp = TempDir::new().unwrap();
    temp.child(".colrename/config.toml")
        .write_str(
            r#"files = ["queries.go"]
columns = ["stripeCustomerId"]

[defaults]
mode = "delimited"

[[mappings]]
old = '"postId"'
new = "post_id"
"#,
        )
        .unwrap();
    temp.child("queries.go")
        .write_str("k := \"postId\"\nq := `SELECT \"postId\", \"stripeCustomerId\", \"teamId\"`\n")
        .unwrap();

    let mut cmd = Command::cargo_bin("colrename").unwrap();
    cmd.current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Made 2 total replacements"));

    temp.child("queries.go").assert(
        "k := \"postId\"\nq := `SELECT post_id, stripe_customer_id, \"teamId\"`\n",
    );
}

#[test]
fn test_invalid_config_exits_with_code_2() {
    let temp = TempDir::new().unwrap();
    temp.child("bad.toml")
        .write_str("[defaults]\nmode = \"everywhere\"\n")
        .unwrap();

    let mut cmd = Command::cargo_bin("colrename").unwrap();
    cmd.current_dir(temp.path())
        .args(["--config", "bad.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config bad.toml"));
}

#[test]
fn test_directory_flag() {
    let temp = TempDir::new().unwrap();
    temp.child("nested/a.go").write_str("\"updatedAt\"").unwrap();

    let mut cmd = Command::cargo_bin("colrename").unwrap();
    cmd.current_dir(temp.path())
        .args(["-C", "nested", "a.go", "--log-file", "run.log"])
        .assert()
        .success();

    temp.child("nested/a.go").assert("updated_at");
    temp.child("nested/run.log")
        .assert(predicate::str::contains("Updated a.go (1 replacements)"));
}

#[test]
fn test_no_color_env_accepts_any_value() {
    let temp = TempDir::new().unwrap();
    temp.child("a.go").write_str("\"userId\"").unwrap();

    let mut cmd = Command::cargo_bin("colrename").unwrap();
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .arg("a.go")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Updated a.go (1 replacements)"))
        .stdout(predicate::str::contains("\x1b[").not());

    temp.child("a.go").assert("user_id");
}

#[test]
fn test_unopenable_log_file_exits_with_code_2() {
    let temp = TempDir::new().unwrap();
    temp.child("a.go").write_str("\"userId\"").unwrap();
    temp.child("logs").create_dir_all().unwrap();

    let mut cmd = Command::cargo_bin("colrename").unwrap();
    cmd.current_dir(temp.path())
        .args(["a.go", "--log-file", "logs", "-q"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Failed to open log file logs"));

    temp.child("a.go").assert("\"userId\"");
    temp.child("a.go.bak").assert(predicate::path::missing());
}
