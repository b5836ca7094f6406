//! End-to-end tests running the `ui69` binary in temporary project directories

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const KEYS: [&str; 15] = [
    "button",
    "checkbox",
    "radio",
    "switch",
    "skeleton",
    "seperator",
    "card",
    "badge",
    "avatar",
    "accordion",
    "input-otp",
    "input",
    "toast",
    "select",
    "drawer",
];

#[allow(deprecated)]
fn ui69_cmd(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ui69").unwrap();
    cmd.current_dir(project);
    cmd.env("NO_COLOR", "1");
    cmd
}

fn bundled(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("components")
        .join(rel)
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

// ============================================================================
// add
// ============================================================================

#[test]
fn test_add_badge_into_empty_directory() {
    let project = TempDir::new().unwrap();

    ui69_cmd(project.path())
        .args(["add", "badge"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing Badge component"))
        .stdout(predicate::str::contains("Created components/ui/badge.tsx"))
        .stdout(predicate::str::contains("Badge installed successfully!"))
        .stdout(predicate::str::contains("Install them with").not());

    let copied = std::fs::read(project.path().join("components/ui/badge.tsx")).unwrap();
    assert_eq!(copied, std::fs::read(bundled("ui/badge.tsx")).unwrap());
}

#[test]
fn test_add_toast_prints_dependencies_and_install_command() {
    let project = TempDir::new().unwrap();

    ui69_cmd(project.path())
        .args(["add", "toast"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Toast requires the following dependencies:",
        ))
        .stdout(predicate::str::contains("  react-native-reanimated"))
        .stdout(predicate::str::contains("  react-native-gesture-handler"))
        .stdout(predicate::str::contains("  react-native-safe-area-context"))
        .stdout(predicate::str::contains(
            "npm install react-native-reanimated react-native-gesture-handler react-native-safe-area-context",
        ));
}

#[test]
fn test_add_skeleton_suggests_expo_install() {
    let project = TempDir::new().unwrap();

    ui69_cmd(project.path())
        .args(["add", "skeleton"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "npx expo install react-native-reanimated expo-linear-gradient",
        ));
}

#[test]
fn test_add_overwrites_existing_file() {
    let project = TempDir::new().unwrap();
    let dest = project.path().join("components/ui/card.tsx");
    std::fs::create_dir_all(dest.parent().unwrap()).unwrap();
    std::fs::write(&dest, "export const Card = 'edited locally';\n").unwrap();

    ui69_cmd(project.path())
        .args(["add", "card"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read(&dest).unwrap(),
        std::fs::read(bundled("ui/card.tsx")).unwrap()
    );
}

#[test]
fn test_add_every_component() {
    let project = TempDir::new().unwrap();

    for key in KEYS {
        ui69_cmd(project.path()).args(["add", key]).assert().success();

        let rel = format!("ui/{}.tsx", key);
        let copied = std::fs::read(project.path().join("components").join(&rel)).unwrap();
        assert_eq!(copied, std::fs::read(bundled(&rel)).unwrap(), "{}", key);
    }
}

#[test]
fn test_add_ignores_words_after_the_key() {
    let project = TempDir::new().unwrap();

    ui69_cmd(project.path())
        .args(["add", "button", "extra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Button installed successfully!"))
        .stdout(predicate::str::contains("Commands:").not());

    let copied = std::fs::read(project.path().join("components/ui/button.tsx")).unwrap();
    assert_eq!(copied, std::fs::read(bundled("ui/button.tsx")).unwrap());
}

#[test]
fn test_add_unknown_component_lists_valid_keys() {
    let project = TempDir::new().unwrap();

    let assert = ui69_cmd(project.path())
        .args(["add", "sparkle"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Component 'sparkle' not found."))
        .stdout(predicate::str::contains("Available components:"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for key in KEYS {
        assert!(stdout.contains(&format!("  - {}\n", key)), "missing {}", key);
    }
    assert!(!project.path().join("components").exists());
}

#[test]
fn test_add_with_missing_template_dir_fails() {
    let project = TempDir::new().unwrap();

    ui69_cmd(project.path())
        .args(["add", "badge", "--template-dir"])
        .arg(project.path().join("no-components"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Components directory not found"));
}

#[test]
fn test_add_with_missing_source_fails() {
    let project = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    std::fs::create_dir_all(templates.path().join("ui")).unwrap();

    ui69_cmd(project.path())
        .args(["add", "button", "--template-dir"])
        .arg(templates.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Source file not found"));

    assert!(!project.path().join("components/ui/button.tsx").exists());
}

#[test]
fn test_add_from_local_template_dir() {
    let project = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    std::fs::create_dir_all(templates.path().join("ui")).unwrap();
    std::fs::write(templates.path().join("ui/radio.tsx"), "// local radio\n").unwrap();

    ui69_cmd(project.path())
        .args(["--template-dir"])
        .arg(templates.path())
        .args(["add", "radio"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(project.path().join("components/ui/radio.tsx")).unwrap(),
        "// local radio\n"
    );
}

// ============================================================================
// list
// ============================================================================

#[test]
fn test_list_shows_every_key_once_in_order() {
    let project = TempDir::new().unwrap();
    let stdout = stdout_of(ui69_cmd(project.path()).arg("list"));

    let listed: Vec<&str> = stdout.lines().filter(|line| KEYS.contains(line)).collect();
    assert_eq!(listed, KEYS.to_vec());
    assert!(stdout.contains("Dependencies: react-native-svg"));
    assert!(stdout.contains("ui69 add <component>"));
}

#[test]
fn test_list_ignores_extra_words() {
    let project = TempDir::new().unwrap();

    ui69_cmd(project.path())
        .args(["list", "extra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Components"))
        .stdout(predicate::str::contains("Commands:").not());
}

#[test]
fn test_list_does_not_touch_working_directory() {
    let project = TempDir::new().unwrap();

    ui69_cmd(project.path()).arg("list").assert().success();
    assert_eq!(std::fs::read_dir(project.path()).unwrap().count(), 0);
}

// ============================================================================
// help / version
// ============================================================================

#[test]
fn test_no_args_prints_help() {
    let project = TempDir::new().unwrap();

    ui69_cmd(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("add [component]"));
}

#[test]
fn test_unknown_command_prints_help_and_exits_zero() {
    let project = TempDir::new().unwrap();

    ui69_cmd(project.path())
        .args(["remove", "button"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_help_flags() {
    let project = TempDir::new().unwrap();

    for flag in ["--help", "-h"] {
        ui69_cmd(project.path())
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("ui69 add radio"))
            .stdout(predicate::str::contains("ui69 list"));
    }
}

#[test]
fn test_version_flags() {
    let project = TempDir::new().unwrap();

    for flag in ["--version", "-v"] {
        ui69_cmd(project.path())
            .arg(flag)
            .assert()
            .success()
            .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn test_version_ignores_extra_words() {
    let project = TempDir::new().unwrap();

    ui69_cmd(project.path())
        .args(["-v", "extra"])
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}
