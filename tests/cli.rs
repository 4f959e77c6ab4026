use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SECRET: &str = "12345678901234567890123456789012";

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vault-envelope").unwrap();
    cmd.env("VAULT_ENVELOPE_DIR", dir.path())
        .env("VAULT_ENVELOPE_SECRET", SECRET)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn text_round_trip() {
    let dir = TempDir::new().unwrap();

    let output = cmd(&dir)
        .args(["text", "encrypt", "hello world"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let sealed = String::from_utf8(output.stdout).unwrap();

    cmd(&dir)
        .args(["text", "decrypt", sealed.trim()])
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn text_encrypt_from_stdin() {
    let dir = TempDir::new().unwrap();

    let output = cmd(&dir)
        .args(["text", "encrypt"])
        .write_stdin("from stdin\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    cmd(&dir)
        .args(["text", "decrypt"])
        .write_stdin(output.stdout)
        .assert()
        .success()
        .stdout("from stdin\n");
}

#[test]
fn text_decrypt_node_buffer_json() {
    let dir = TempDir::new().unwrap();
    let sealed = vault_envelope::encrypt_text("album", SECRET.as_bytes()).unwrap();
    let raw = vault_envelope::crypto::decode_transport(&sealed).unwrap();
    let json = serde_json::json!({ "type": "Buffer", "data": raw }).to_string();

    cmd(&dir)
        .args(["text", "decrypt", "--json", json.as_str()])
        .assert()
        .success()
        .stdout("album\n");
}

#[test]
fn wrong_secret_shows_generic_message() {
    let dir = TempDir::new().unwrap();
    let sealed = vault_envelope::encrypt_text("private", SECRET.as_bytes()).unwrap();

    cmd(&dir)
        .env("VAULT_ENVELOPE_SECRET", "not-the-secret")
        .args(["text", "decrypt", sealed.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to read this item"))
        .stdout(predicate::str::contains("private").not());
}

#[test]
fn invalid_base64_shows_generic_message() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["text", "decrypt", "###"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to read this item"));
}

#[test]
fn file_round_trip() {
    let dir = TempDir::new().unwrap();
    let photo = dir.path().join("photo.jpg");
    std::fs::write(&photo, b"FAKE JPEG DATA").unwrap();

    cmd(&dir)
        .args(["file", "encrypt"])
        .arg(&photo)
        .assert()
        .success()
        .stdout(predicate::str::contains("photo.jpg.enc"));

    let sealed = dir.path().join("photo.jpg.enc");
    assert_eq!(std::fs::read(&sealed).unwrap().len(), 14 + 96);

    let restored = dir.path().join("restored.jpg");
    cmd(&dir)
        .args(["file", "decrypt"])
        .arg(&sealed)
        .arg("-o")
        .arg(&restored)
        .assert()
        .success();

    assert_eq!(std::fs::read(&restored).unwrap(), b"FAKE JPEG DATA");
}

#[test]
fn secret_file_flag() {
    let dir = TempDir::new().unwrap();
    let key = dir.path().join("shared.key");
    std::fs::write(&key, "file-secret\n").unwrap();

    let output = cmd(&dir)
        .env_remove("VAULT_ENVELOPE_SECRET")
        .arg("--secret-file")
        .arg(&key)
        .args(["text", "encrypt", "caption"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let sealed = String::from_utf8(output.stdout).unwrap();

    assert_eq!(
        vault_envelope::decrypt_text(sealed.trim(), b"file-secret").unwrap(),
        "caption"
    );
}

#[test]
fn missing_secret_is_reported() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .env_remove("VAULT_ENVELOPE_SECRET")
        .args(["text", "encrypt", "caption"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No shared secret configured"));
}

#[test]
fn inspect_shows_layout() {
    let dir = TempDir::new().unwrap();
    let envelope = vault_envelope::encrypt_bytes(b"hello world", SECRET.as_bytes()).unwrap();
    let path = dir.path().join("hello.enc");
    std::fs::write(&path, envelope.as_bytes()).unwrap();

    cmd(&dir)
        .env_remove("VAULT_ENVELOPE_SECRET")
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Envelope length:  107 bytes"))
        .stdout(predicate::str::contains("Plaintext length: 11 bytes"));
}

#[test]
fn inspect_rejects_short_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.enc");
    std::fs::write(&path, [0u8; 20]).unwrap();

    cmd(&dir)
        .arg("inspect")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed envelope"));
}

#[test]
fn init_and_config() {
    let dir = TempDir::new().unwrap();

    cmd(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Iterations:      100000"))
        .stdout(predicate::str::contains("Initialized:      yes"));
}

#[test]
fn invalid_log_level_warns_and_continues() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"log_level":"vault_envelope=loud"}"#,
    )
    .unwrap();

    cmd(&dir)
        .args(["text", "encrypt", "caption"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid log level 'vault_envelope=loud'"));
}

#[test]
fn corrupt_settings_do_not_block_inspect() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{not json").unwrap();
    let envelope = vault_envelope::encrypt_bytes(b"hello world", SECRET.as_bytes()).unwrap();
    let path = dir.path().join("hello.enc");
    std::fs::write(&path, envelope.as_bytes()).unwrap();

    cmd(&dir)
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Envelope length:  107 bytes"));

    cmd(&dir)
        .args(["text", "encrypt", "caption"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}

#[test]
fn corrupt_settings_are_reported_and_repaired_by_init() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{not json").unwrap();

    cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings could not be loaded"));

    cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Replacing unreadable settings"));

    cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Iterations:      100000"));
}
