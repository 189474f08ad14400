//! End-to-end tests for the `expressos` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expressos(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expressos").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .write_stdin("");
    cmd
}

fn scaffolded(name: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    expressos(tmp.path())
        .args(["create", name, "--typescript"])
        .assert()
        .success();
    tmp
}

// ── top level ─────────────────────────────────────────────────────────────────

#[test]
fn help_lists_every_command() {
    let tmp = TempDir::new().unwrap();
    expressos(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("usecase"))
        .stdout(predicate::str::contains("service"))
        .stdout(predicate::str::contains("middleware"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    expressos(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn argument_errors_exit_with_one() {
    let tmp = TempDir::new().unwrap();
    expressos(tmp.path()).arg("frobnicate").assert().code(1);
    expressos(tmp.path()).assert().code(1);
}

// ── create ────────────────────────────────────────────────────────────────────

#[test]
fn create_scaffolds_and_lists_files() {
    let tmp = TempDir::new().unwrap();
    expressos(tmp.path())
        .args(["create", "shop-api", "--typescript", "--author", "Jane Doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'shop-api' created"))
        .stdout(predicate::str::contains("shop-api/package.json"))
        .stdout(predicate::str::contains("npm install"));

    let project = tmp.path().join("shop-api");
    assert!(project.join("tsconfig.json").is_file());
    assert!(project.join("src/services/services.ts").is_file());
    let manifest = fs::read_to_string(project.join("package.json")).unwrap();
    assert!(manifest.contains("\"author\": \"Jane Doe\""));
}

#[test]
fn init_alias_without_typescript_skips_tsconfig() {
    let tmp = TempDir::new().unwrap();
    expressos(tmp.path())
        .args(["init", "plain-api"])
        .assert()
        .success();
    assert!(tmp.path().join("plain-api/package.json").is_file());
    assert!(!tmp.path().join("plain-api/tsconfig.json").exists());
}

#[test]
fn create_refuses_existing_directory() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("shop-api")).unwrap();

    expressos(tmp.path())
        .args(["create", "shop-api"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Directory \"").and(predicate::str::contains("already exists")));
    assert_eq!(fs::read_dir(tmp.path().join("shop-api")).unwrap().count(), 0);
}

#[test]
fn create_rejects_invalid_name() {
    let tmp = TempDir::new().unwrap();
    expressos(tmp.path())
        .args(["create", "ab"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at least 3 characters"));
    assert!(!tmp.path().join("ab").exists());
}

#[test]
fn create_without_name_needs_a_terminal() {
    let tmp = TempDir::new().unwrap();
    expressos(tmp.path())
        .arg("create")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("project name is required"));
}

#[test]
fn quiet_create_prints_nothing() {
    let tmp = TempDir::new().unwrap();
    expressos(tmp.path())
        .args(["-q", "create", "shop-api"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn config_file_supplies_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("expressos.toml");
    fs::write(&config, "[defaults]\nauthor = \"Config Author\"\ntypescript = true\n").unwrap();

    expressos(tmp.path())
        .args(["--config", config.to_str().unwrap(), "create", "shop-api"])
        .assert()
        .success();

    let project = tmp.path().join("shop-api");
    assert!(project.join("tsconfig.json").is_file());
    let manifest = fs::read_to_string(project.join("package.json")).unwrap();
    assert!(manifest.contains("\"author\": \"Config Author\""));
}

// ── generators ────────────────────────────────────────────────────────────────

#[test]
fn usecase_in_project() {
    let tmp = scaffolded("shop-api");
    let project = tmp.path().join("shop-api");

    expressos(&project)
        .args(["usecase", "auth", "login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created use case AuthLogin"))
        .stdout(predicate::str::contains("src/modules/auth/login/index.ts"));

    let index = fs::read_to_string(project.join("src/modules/auth/login/index.ts")).unwrap();
    assert!(index.contains("/api/auth/login"));
}

#[test]
fn service_twice_registers_once() {
    let tmp = scaffolded("shop-api");
    let project = tmp.path().join("shop-api");

    expressos(&project)
        .args(["service", "user", "profile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered service"));
    expressos(&project)
        .args(["g", "service", "user", "profile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already registered"));

    let registry = fs::read_to_string(project.join("src/services/services.ts")).unwrap();
    assert_eq!(registry.matches("from './userProfile';").count(), 1);
    assert_eq!(registry.matches("userProfile: userProfileService").count(), 1);
}

#[test]
fn service_with_taken_key_warns_and_keeps_registry() {
    let tmp = scaffolded("shop-api");
    let project = tmp.path().join("shop-api");
    let registry_path = project.join("src/services/services.ts");
    let before = fs::read_to_string(&registry_path).unwrap();

    expressos(&project)
        .args(["service", "logger"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("already uses this key")
                .and(predicate::str::contains("Registered service").not()),
        );

    assert!(project.join("src/services/logger.ts").is_file());
    assert_eq!(fs::read_to_string(&registry_path).unwrap(), before);
}

#[test]
fn middleware_in_project() {
    let tmp = scaffolded("shop-api");
    let project = tmp.path().join("shop-api");

    expressos(&project)
        .args(["middleware", "rate", "limit"])
        .assert()
        .success();
    assert!(project.join("src/middlewares/rateLimit.ts").is_file());
}

#[test]
fn generate_module_with_custom_path() {
    let tmp = scaffolded("shop-api");
    let project = tmp.path().join("shop-api");

    expressos(&project)
        .args(["generate", "module", "billing", "--path", "src/features"])
        .assert()
        .success();
    assert!(project.join("src/features/billing/useCase.ts").is_file());
}

#[test]
fn unknown_component_type() {
    let tmp = scaffolded("shop-api");
    expressos(&tmp.path().join("shop-api"))
        .args(["generate", "widget", "login"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Unknown component type: widget. Supported types: usecase, service, middleware, module",
        ));
}

#[test]
fn generator_outside_project() {
    let tmp = TempDir::new().unwrap();
    expressos(tmp.path())
        .args(["usecase", "login"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ExpressOS project directory"));
    assert!(!tmp.path().join("src").exists());
}

// ── config / completions ──────────────────────────────────────────────────────

#[test]
fn config_get_reads_environment() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("expressos.toml");
    fs::write(&config, "").unwrap();

    expressos(tmp.path())
        .env("EXPRESSOS_DEFAULTS__AUTHOR", "Env Author")
        .args(["-c", config.to_str().unwrap(), "config", "get", "defaults.author"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Env Author\n"));
}

#[test]
fn config_get_unknown_key() {
    let tmp = TempDir::new().unwrap();
    expressos(tmp.path())
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    expressos(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expressos"));
}
