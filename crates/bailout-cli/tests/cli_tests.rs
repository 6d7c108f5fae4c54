use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn bail_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bail").expect("Failed to find bail binary");
    cmd.env_remove("BAILOUT_BASE_URL").arg("--no-color");
    cmd
}

/// Creates a plan through the CLI and returns its id and participant secrets.
fn create_plan_json(db_arg: &str, participants: u32) -> (String, Vec<String>) {
    let output = bail_cmd()
        .args([
            "--database-file",
            db_arg,
            "--json",
            "create",
            "-n",
            &participants.to_string(),
        ])
        .output()
        .expect("Failed to run create");
    assert!(output.status.success());

    let created: Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON");
    let plan_id = created["planId"].as_str().unwrap().to_string();
    let secrets = created["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["secret"].as_str().unwrap().to_string())
        .collect();

    (plan_id, secrets)
}

#[test]
fn test_cli_create_plan_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    bail_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "create",
            "--description",
            "Dinner on Friday",
            "-n",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID:"))
        .stdout(predicate::str::contains("- Participant 1: http://localhost:3000/bail/"))
        .stdout(predicate::str::contains("- Participant 3: "))
        .stdout(predicate::str::contains("Participant 4").not());
}

#[test]
fn test_cli_create_plan_json() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let (plan_id, secrets) = create_plan_json(db_path.to_str().unwrap(), 4);

    assert!(!plan_id.is_empty());
    assert_eq!(secrets.len(), 4);
    for (i, a) in secrets.iter().enumerate() {
        for b in &secrets[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_cli_create_uses_base_url() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    bail_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "--base-url",
            "https://bail.example/",
            "create",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://bail.example/bail/"))
        .stdout(predicate::str::contains("example//bail").not());
}

#[test]
fn test_cli_create_rejects_participant_count() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    for count in ["1", "6"] {
        bail_cmd()
            .args(["--database-file", db_arg, "create", "-n", count])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "Number of participants must be between 2 and 5.",
            ));
    }
}

#[test]
fn test_cli_status_hides_other_votes() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let (plan_id, secrets) = create_plan_json(db_arg, 2);

    bail_cmd()
        .args(["--database-file", db_arg, "status", &plan_id, &secrets[0]])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("# Plan {plan_id}")))
        .stdout(predicate::str::contains("Status: active"))
        .stdout(predicate::str::contains("A secret plan"))
        .stdout(predicate::str::contains("**Participant 1 (you)**: ○ still in"))
        .stdout(predicate::str::contains("- Participant 2: ? hidden"));
}

#[test]
fn test_cli_status_never_prints_secrets() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let (plan_id, secrets) = create_plan_json(db_arg, 3);

    for flag in [None, Some("--json")] {
        let mut cmd = bail_cmd();
        cmd.args(["--database-file", db_arg]);
        if let Some(flag) = flag {
            cmd.arg(flag);
        }
        let output = cmd
            .args(["status", &plan_id, &secrets[0]])
            .output()
            .expect("Failed to run status");
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        for secret in &secrets {
            assert!(!stdout.contains(secret.as_str()));
        }
    }
}

#[test]
fn test_cli_submit_then_cancel() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let (plan_id, secrets) = create_plan_json(db_arg, 2);

    bail_cmd()
        .args(["--database-file", db_arg, "submit", &plan_id, &secrets[0]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your bail request is registered."))
        .stdout(predicate::str::contains("Status: active"))
        .stdout(predicate::str::contains("- Participant 2: ○ still in"));

    bail_cmd()
        .args(["--database-file", db_arg, "bail", &plan_id, &secrets[1]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plans cancelled! Everyone bailed."))
        .stdout(predicate::str::contains("Status: cancelled"));

    bail_cmd()
        .args(["--database-file", db_arg, "status", &plan_id, &secrets[0]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: cancelled"))
        .stdout(predicate::str::contains("- Participant 2: ✓ wants to bail"));
}

#[test]
fn test_cli_submit_json_reports_outcome() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let (plan_id, secrets) = create_plan_json(db_arg, 2);

    let submit = |secret: &str| -> Value {
        let output = bail_cmd()
            .args(["--database-file", db_arg, "--json", "submit", &plan_id, secret])
            .output()
            .expect("Failed to run submit");
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).expect("Invalid JSON")
    };

    assert_eq!(submit(&secrets[0])["outcome"], "registered");
    assert_eq!(submit(&secrets[0])["outcome"], "already_bailed");

    let last = submit(&secrets[1]);
    assert_eq!(last["outcome"], "cancelled");
    assert_eq!(last["plan"]["status"], "cancelled");

    assert_eq!(submit(&secrets[0])["outcome"], "already_cancelled");
}

#[test]
fn test_cli_unknown_plan_and_wrong_secret_look_the_same() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let (plan_id, secrets) = create_plan_json(db_arg, 2);

    let stderr_of = |plan: &str, secret: &str| -> String {
        let output = bail_cmd()
            .args(["--database-file", db_arg, "status", plan, secret])
            .output()
            .expect("Failed to run status");
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        String::from_utf8(output.stderr).unwrap()
    };

    let wrong_secret = stderr_of(&plan_id, "not-a-secret");
    let wrong_plan = stderr_of("not-a-plan", &secrets[0]);

    assert!(wrong_secret.contains("Bailout plan not found or expired."));
    assert_eq!(wrong_secret, wrong_plan);
}

#[test]
fn test_cli_submit_wrong_secret_changes_nothing() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let (plan_id, secrets) = create_plan_json(db_arg, 2);

    bail_cmd()
        .args(["--database-file", db_arg, "submit", &plan_id, "not-a-secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bailout plan not found or expired."));

    bail_cmd()
        .args(["--database-file", db_arg, "bail", &plan_id, &secrets[0]])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Participant 2: ○ still in"));
}

#[test]
fn test_cli_help() {
    bail_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("serve"));
}
