use assert_cmd::Command;

fn bookshelf() -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.env("BOOKSHELF_CONFIG_DIR", std::env::temp_dir().join("bookshelf-cli-no-config"))
        .env_remove("BOOKSHELF_ENV");
    cmd
}

#[test]
fn settings_prints_defaults_as_json() {
    let output = bookshelf().arg("settings").output().unwrap();
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["environment"], "local");
    assert_eq!(settings["server"]["port"], 8000);
    assert_eq!(settings["catalog"]["seed_on_start"], true);
}

#[test]
fn settings_respects_environment_selection() {
    let output = bookshelf()
        .env("BOOKSHELF_ENV", "staging")
        .arg("settings")
        .output()
        .unwrap();
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["environment"], "staging");
}

#[test]
fn unknown_environment_fails() {
    bookshelf()
        .env("BOOKSHELF_ENV", "qa")
        .arg("settings")
        .assert()
        .failure();
}
