use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to convert path to forward slashes for TOML compatibility on Windows
fn path_to_toml_string(path: &std::path::Path) -> String {
    path.display().to_string().replace('\\', "/")
}

const WELCOME: &str = r##"
[body]
name = "Jon Snow"
intros = ["Welcome to Hermes! We're very excited to have you on board."]
outros = ["Need help, or have questions? Just reply to this email, we'd love to help."]

[[body.dictionary]]
key = "Firstname"
value = "Jon"

[[body.dictionary]]
key = "Birthday"
value = "01/01/283"

[body.table]
data = [
  [{ key = "Item", value = "Golang" }, { key = "Description", value = "Open source programming language that makes it easy to build simple, reliable, and efficient software" }, { key = "Price", value = "$10.99" }],
  [{ key = "Item", value = "Hermes" }, { key = "Description", value = "Programmatically create beautiful e-mails using Golang." }, { key = "Price", value = "$1.99" }],
]

[body.table.columns.custom_width]
Item = "20%"

[body.table.columns.custom_alignment]
Price = "right"

[[body.actions]]
instructions = "To get started with Hermes, please click here:"

[body.actions.button]
color = "#22BC66"
text = "Confirm your account"
link = "https://hermes-example.com/confirm?token=d9729feb74992cc3482b350163a1a010"
"##;

/// Helper to write the welcome message into `dir`
fn write_welcome(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("welcome.toml");
    fs::write(&path, WELCOME).unwrap();
    path
}

#[test]
fn test_config_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("missive.toml");

    cargo::cargo_bin_cmd!("missive")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("theme = \"default\""));
    assert!(content.contains("wrap_width = 30"));
}

#[test]
fn test_config_init_existing() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("missive.toml");
    fs::write(&config_path, "theme = \"flat\"\n").unwrap();

    cargo::cargo_bin_cmd!("missive")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&config_path).unwrap(), "theme = \"flat\"\n");
}

#[test]
fn test_render_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    let message = write_welcome(temp_dir.path());

    cargo::cargo_bin_cmd!("missive")
        .current_dir(temp_dir.path())
        .args(["render", message.to_str().unwrap(), "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi Jon Snow,"))
        .stdout(predicate::str::contains("Birthday: 01/01/283"))
        .stdout(predicate::str::contains(
            "| Golang | Open source programming        | $10.99 |",
        ))
        .stdout(predicate::str::contains(
            "| Hermes | Programmatically create        |  $1.99 |",
        ))
        .stdout(predicate::str::contains("Confirm your account").not());

    assert!(!temp_dir.path().join("welcome.html").exists());
}

#[test]
fn test_render_writes_both_outputs() {
    let temp_dir = TempDir::new().unwrap();
    let message = write_welcome(temp_dir.path());
    let out_dir = temp_dir.path().join("out");
    let config_path = temp_dir.path().join("missive.toml");

    cargo::cargo_bin_cmd!("missive")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success();

    let config_content = fs::read_to_string(&config_path).unwrap();
    let updated_config = config_content.replace("name = \"Missive\"", "name = \"HermesName\"");
    fs::write(&config_path, updated_config).unwrap();

    cargo::cargo_bin_cmd!("missive")
        .args([
            "render",
            message.to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML written to"))
        .stdout(predicate::str::contains("Plaintext written to"));

    let html = fs::read_to_string(out_dir.join("welcome.html")).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("HermesName"));
    assert!(html.contains("Confirm your account"));
    assert!(html.contains("width=\"20%\""));

    let text = fs::read_to_string(out_dir.join("welcome.txt")).unwrap();
    assert!(text.contains("Yours truly,\nHermesName - https://example.com/"));
    assert!(text.contains("+--------+--------------------------------+--------+"));
}

#[test]
fn test_render_json_message_with_flat_theme() {
    let temp_dir = TempDir::new().unwrap();
    let message = temp_dir.path().join("notice.json");
    fs::write(
        &message,
        r#"{"body": {"title": "A new e-mail", "actions": [{"instructions": "Here is your invite code:", "invite_code": "123456"}]}}"#,
    )
    .unwrap();

    cargo::cargo_bin_cmd!("missive")
        .current_dir(temp_dir.path())
        .args([
            "render",
            message.to_str().unwrap(),
            "--theme",
            "flat",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("A new e-mail"))
        .stdout(predicate::str::contains("  123456"))
        .stdout(predicate::str::contains("Hi,").not());
}

#[test]
fn test_render_unknown_theme() {
    let temp_dir = TempDir::new().unwrap();
    let message = write_welcome(temp_dir.path());

    cargo::cargo_bin_cmd!("missive")
        .current_dir(temp_dir.path())
        .args(["render", message.to_str().unwrap(), "--theme", "neon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme 'neon'"));
}

#[test]
fn test_render_missing_message() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("missive")
        .current_dir(temp_dir.path())
        .args(["render", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Message error"));
}

#[test]
fn test_render_mismatched_table_keys() {
    let temp_dir = TempDir::new().unwrap();
    let message = temp_dir.path().join("broken.toml");
    fs::write(
        &message,
        r#"
[body.table]
data = [
  [{ key = "Item", value = "Golang" }, { key = "Price", value = "$10.99" }],
  [{ key = "Item", value = "Hermes" }, { key = "Cost", value = "$1.99" }],
]
"#,
    )
    .unwrap();

    cargo::cargo_bin_cmd!("missive")
        .current_dir(temp_dir.path())
        .args(["render", message.to_str().unwrap(), "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Table row 2"));
}

#[test]
fn test_themes_lists_custom_directory() {
    let temp_dir = TempDir::new().unwrap();
    let themes_dir = temp_dir.path().join("themes");
    fs::create_dir(&themes_dir).unwrap();
    fs::write(
        themes_dir.join("brand.html"),
        "<h1>{{ body.salutation }}</h1>",
    )
    .unwrap();
    fs::write(themes_dir.join("brand.txt"), "{{ body.salutation }}!").unwrap();

    let config_path = temp_dir.path().join("missive.toml");
    cargo::cargo_bin_cmd!("missive")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success();

    let config_content = fs::read_to_string(&config_path).unwrap();
    let updated_config = format!(
        "themes_dir = \"{}\"\n{}",
        path_to_toml_string(&themes_dir),
        config_content.replace("theme = \"default\"", "theme = \"brand\"")
    );
    fs::write(&config_path, updated_config).unwrap();

    cargo::cargo_bin_cmd!("missive")
        .args(["themes", "--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("* brand"))
        .stdout(predicate::str::contains("  default"))
        .stdout(predicate::str::contains("  flat"));

    let message = write_welcome(temp_dir.path());
    cargo::cargo_bin_cmd!("missive")
        .args([
            "render",
            message.to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout("Hi Jon Snow!\n");
}

#[test]
fn test_relative_themes_dir_resolved_from_config_location() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project");
    let themes_dir = project.join("themes");
    fs::create_dir_all(&themes_dir).unwrap();
    fs::write(themes_dir.join("brand.html"), "<h1>{{ body.salutation }}</h1>").unwrap();
    fs::write(themes_dir.join("brand.txt"), "{{ body.salutation }}!").unwrap();

    let config_path = project.join("missive.toml");
    fs::write(&config_path, "themes_dir = \"themes\"\n").unwrap();
    let message = write_welcome(temp_dir.path());

    cargo::cargo_bin_cmd!("missive")
        .current_dir(temp_dir.path())
        .args([
            "render",
            message.to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
            "--theme",
            "brand",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout("Hi Jon Snow!\n");
}

#[test]
fn test_render_message_extra_values() {
    let temp_dir = TempDir::new().unwrap();
    let themes_dir = temp_dir.path().join("themes");
    fs::create_dir(&themes_dir).unwrap();
    fs::write(
        themes_dir.join("voucher.html"),
        "<p>{{ body.extra.voucher.code }}</p>",
    )
    .unwrap();
    fs::write(
        themes_dir.join("voucher.txt"),
        "Code: {{ body.extra.voucher.code }} ({{ body.extra.voucher.amount }})",
    )
    .unwrap();

    let config_path = temp_dir.path().join("missive.toml");
    fs::write(&config_path, "theme = \"voucher\"\nthemes_dir = \"themes\"\n").unwrap();

    let message = temp_dir.path().join("voucher.toml");
    fs::write(
        &message,
        r#"
[body.extra.voucher]
code = "XMAS-2024"
amount = 25
"#,
    )
    .unwrap();

    cargo::cargo_bin_cmd!("missive")
        .args([
            "render",
            message.to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout("Code: XMAS-2024 (25)\n");
}
