//! End-to-end tests for the teststub binary.
//!
//! Each test runs the compiled CLI inside a fresh temp directory, seeds a
//! template directory where needed, and asserts on exit codes, output, and
//! the files left behind.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const UNIT_TEMPLATE: &str = "\
import * as feature from '<IMPORT_PATH>';

describe('<FEATURE_NAME>', () => {
  // INSERT_TODO_MARKER_HERE
});
";

const INTEGRATION_TEMPLATE: &str = "\
describe('<FEATURE_NAME> wiring', () => {
  // INSERT_TODO_MARKER_HERE
});
";

/// Seed `templates/tests/` (the default template dir) under `root`.
fn seed_templates(root: &Path) {
    let dir = root.join("templates/tests");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("unit.test.template.ts"), UNIT_TEMPLATE).unwrap();
    fs::write(dir.join("integration.test.template.ts"), INTEGRATION_TEMPLATE).unwrap();
}

fn teststub() -> Command {
    let mut cmd = Command::cargo_bin("teststub").unwrap();
    cmd.env("NO_COLOR", "true");
    cmd
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_subcommands() {
    teststub()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gen"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_matches_cargo() {
    teststub()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_args_shows_help_and_fails() {
    teststub().assert().failure();
}

// ── gen: happy path ───────────────────────────────────────────────────────────

#[test]
fn gen_creates_stub_files_with_substitutions() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());

    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let unit = temp
        .path()
        .join("features/checkout/__tests__/checkout.unit.test.ts");
    assert!(unit.exists());

    let content = fs::read_to_string(&unit).unwrap();
    assert!(content.contains("describe('checkout'"));
    assert!(content.contains("from '../../checkout'"));
    assert!(content.contains("// TODO: write meaningful assertions for checkout"));
    assert!(!content.contains("INSERT_TODO_MARKER_HERE"));
    assert!(!content.contains("<FEATURE_NAME>"));
}

#[test]
fn gen_type_flag_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());

    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout", "--type", "unit", "--yes"])
        .assert()
        .success();

    let tests_dir = temp.path().join("features/checkout/__tests__");
    assert!(tests_dir.join("checkout.unit.test.ts").exists());
    assert!(!tests_dir.join("checkout.integration.test.ts").exists());
}

#[test]
fn gen_unknown_type_warns_and_creates_nothing() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());

    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout", "--type", "perf", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no template for suite type 'perf'"))
        .stdout(predicate::str::contains("No test stub files were created"));

    assert!(!temp
        .path()
        .join("features/checkout/__tests__/checkout.perf.test.ts")
        .exists());
}

// ── gen: write-guard ──────────────────────────────────────────────────────────

#[test]
fn gen_is_idempotent_without_force() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());

    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout", "--type", "unit", "--yes"])
        .assert()
        .success();

    let unit = temp
        .path()
        .join("features/checkout/__tests__/checkout.unit.test.ts");
    fs::write(&unit, "hand edited").unwrap();

    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout", "--type", "unit", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No test stub files were created"));

    assert_eq!(fs::read_to_string(&unit).unwrap(), "hand edited");
}

#[test]
fn gen_force_overwrites_existing_files() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());

    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout", "--type", "unit", "--yes"])
        .assert()
        .success();

    let unit = temp
        .path()
        .join("features/checkout/__tests__/checkout.unit.test.ts");
    fs::write(&unit, "hand edited").unwrap();

    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout", "--type", "unit", "--yes", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&unit).unwrap();
    assert!(content.contains("describe('checkout'"));
}

// ── gen: dry run ──────────────────────────────────────────────────────────────

#[test]
fn gen_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());

    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("would create"));

    assert!(!temp.path().join("features").exists());
}

// ── gen: prompt ───────────────────────────────────────────────────────────────

#[test]
fn gen_declined_prompt_aborts_with_user_error() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());

    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout"])
        .write_stdin("n\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Aborted"))
        .stderr(predicate::str::contains("Operation cancelled"));

    assert!(!temp.path().join("features").exists());
}

#[test]
fn gen_prompt_defaults_to_yes_on_enter() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());

    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout"])
        .write_stdin("\n")
        .assert()
        .success();

    assert!(temp.path().join("features/checkout").exists());
}

#[test]
fn gen_skips_prompt_when_folder_exists() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());
    fs::create_dir_all(temp.path().join("features/checkout")).unwrap();

    // No stdin provided; a prompt would block or fail, so success means
    // the existing folder was used directly.
    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout"])
        .write_stdin("")
        .assert()
        .success();
}

// ── gen: failures ─────────────────────────────────────────────────────────────

#[test]
fn gen_invalid_slug_is_user_error() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());

    teststub()
        .current_dir(temp.path())
        .args(["gen", "bad slug", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid feature slug"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!temp.path().join("features").exists());
}

#[test]
fn gen_missing_template_dir_is_not_found() {
    let temp = TempDir::new().unwrap();

    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout", "--yes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template directory not found"))
        .stderr(predicate::str::contains("teststub init"));
}

// ── quiet mode ────────────────────────────────────────────────────────────────

#[test]
fn gen_quiet_suppresses_stdout() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());

    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp
        .path()
        .join("features/checkout/__tests__/checkout.unit.test.ts")
        .exists());
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_seeds_config_and_templates() {
    let temp = TempDir::new().unwrap();

    teststub()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("teststub.toml"));

    assert!(temp.path().join("teststub.toml").exists());
    for suite in ["unit", "integration", "a11y", "api"] {
        assert!(
            temp.path()
                .join(format!("templates/tests/{suite}.test.template.ts"))
                .exists(),
            "missing starter template for {suite}"
        );
    }

    // The seeded setup must be immediately usable.
    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout", "--yes"])
        .assert()
        .success();
    assert!(temp
        .path()
        .join("features/checkout/__tests__/checkout.unit.test.ts")
        .exists());
}

#[test]
fn init_preserves_existing_files_without_force() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("teststub.toml"), "# custom").unwrap();

    teststub()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(temp.path().join("teststub.toml")).unwrap(),
        "# custom"
    );
}

#[test]
fn init_force_overwrites_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("teststub.toml"), "# custom").unwrap();

    teststub()
        .current_dir(temp.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("teststub.toml")).unwrap();
    assert!(content.contains("[test_scaffold]"));
}

// ── config file ───────────────────────────────────────────────────────────────

#[test]
fn gen_honors_config_overrides() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("stubs");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("smoke.test.template.ts"), "// <FEATURE_NAME>\n").unwrap();

    fs::write(
        temp.path().join("teststub.toml"),
        r#"
[test_scaffold]
template_dir = "stubs"
default_suite_types = ["smoke"]
file_naming_pattern = "{feature}-{type}.spec.ts"
"#,
    )
    .unwrap();

    teststub()
        .current_dir(temp.path())
        .args(["gen", "checkout", "--yes"])
        .assert()
        .success();

    assert!(temp
        .path()
        .join("features/checkout/__tests__/checkout-smoke.spec.ts")
        .exists());
}

#[test]
fn explicit_config_flag_must_parse() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.toml"), "not [valid toml").unwrap();

    teststub()
        .current_dir(temp.path())
        .args(["--config", "broken.toml", "gen", "checkout", "--yes"])
        .assert()
        .code(4);
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_shows_discovered_templates() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());

    teststub()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("unit"))
        .stdout(predicate::str::contains("integration"));
}

#[test]
fn list_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());

    let output = teststub()
        .current_dir(temp.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let types: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["suite_type"].as_str().unwrap())
        .collect();
    assert_eq!(types, ["integration", "unit"]);
}

#[test]
fn list_missing_template_dir_is_not_found() {
    let temp = TempDir::new().unwrap();

    teststub()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(3);
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_bash_mentions_binary() {
    teststub()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("teststub"));
}
