mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use support::config::TempConfig;

fn storekeep() -> Command {
    let mut cmd = Command::cargo_bin("storekeep").expect("storekeep binary");
    cmd.env_remove("PORT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_config_prints_summary() {
    let file = TempConfig::write("[documents]\nbackend = \"memory\"\n[server]\nport = 4100\n");
    storekeep()
        .arg("--config")
        .arg(file.path())
        .args(["check", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"))
        .stdout(predicate::str::contains("127.0.0.1:4100"))
        .stdout(predicate::str::contains("memory"));
}

#[test]
fn check_config_fails_on_invalid_value() {
    let file = TempConfig::write("[database]\nmax_connections = 0\n");
    storekeep()
        .arg("--config")
        .arg(file.path())
        .args(["check", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("database.max_connections"));
}

#[test]
fn port_env_overrides_config_file() {
    let file = TempConfig::write("[documents]\nbackend = \"memory\"\n[server]\nport = 4100\n");
    storekeep()
        .env("PORT", "4200")
        .arg("--config")
        .arg(file.path())
        .args(["check", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:4200"));
}

#[test]
fn missing_config_file_fails() {
    let file = TempConfig::write("");
    storekeep()
        .arg("--config")
        .arg(file.sibling("nope.toml"))
        .args(["check", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn seed_loads_fixture_file_into_database() {
    let file = TempConfig::write("");
    let db_path = file.sibling("seeded.db");
    let fixtures = file.sibling("fixtures.json");
    std::fs::write(
        &fixtures,
        r#"{
            "stores": [{ "id": "PP-7", "location": "Wexford", "manager_id": null }],
            "products": [{ "id": "AA-9", "description": "Tea 80 bags" }],
            "pricing": [{ "product_id": "AA-9", "store_id": "PP-7", "price": "3.25" }],
            "managers": [{ "id": "M009", "name": "Orla Nolan", "salary": 47000 }]
        }"#,
    )
    .unwrap();
    std::fs::write(
        file.path(),
        format!(
            "[logging]\nlevel = \"warn\"\n[database]\nurl = {:?}\n[documents]\nbackend = \"memory\"\n",
            db_path.to_str().unwrap()
        ),
    )
    .unwrap();

    storekeep()
        .arg("--config")
        .arg(file.path())
        .arg("seed")
        .arg("--fixtures")
        .arg(&fixtures)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixtures loaded"));

    assert!(db_path.exists());
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    storekeep().arg("launch").assert().failure().code(2);
}
