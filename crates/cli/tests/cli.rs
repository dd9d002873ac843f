use assert_cmd::Command;

fn rtdb_cli() -> Command {
    let mut cmd = Command::cargo_bin("rtdb-cli").unwrap();
    cmd.env_remove("RTDB_DATABASE_URL")
        .env("RTDB_ENV", "local")
        .env("RTDB_CONFIG_DIR", "/nonexistent/rtdb-config")
        .env("RUST_LOG", "off");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn config_prints_database_url_record() {
    let mut cmd = rtdb_cli();
    cmd.arg("config")
        .env("RTDB_DATABASE_URL", "https://example-db.firebaseio.com");

    assert_eq!(
        stdout_of(&mut cmd).trim(),
        r#"{"databaseURL":"https://example-db.firebaseio.com"}"#
    );
}

#[test]
fn bootstrap_reports_namespace() {
    let mut cmd = rtdb_cli();
    cmd.arg("bootstrap")
        .env("RTDB_DATABASE_URL", "https://example-db.firebaseio.com");

    assert_eq!(stdout_of(&mut cmd).trim(), "ready namespace=example-db");
}

#[test]
fn bootstrap_without_url_is_absent() {
    let mut cmd = rtdb_cli();
    assert_eq!(stdout_of(&mut cmd).trim(), "absent");
}

#[test]
fn malformed_url_fails_bootstrap() {
    let mut cmd = rtdb_cli();
    cmd.arg("bootstrap").env("RTDB_DATABASE_URL", "not a url");
    cmd.assert().failure();
}

#[test]
fn unknown_environment_fails() {
    let mut cmd = rtdb_cli();
    cmd.arg("config").env("RTDB_ENV", "qa");
    cmd.assert().failure();
}
