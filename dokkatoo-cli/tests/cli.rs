use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn dokkatoo_text() -> Command {
    Command::cargo_bin("dokkatoo-text").expect("binary to build")
}

#[test]
fn tokenizes_stdin_as_tags() {
    dokkatoo_text()
        .write_stdin("a   &amp;\n b")
        .assert()
        .success()
        .stdout("plain(\"a \") html(\"&\") plain(\" b\")\n");
}

#[test]
fn tokenizes_file_as_compact_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "x &lt; y").unwrap();

    dokkatoo_text()
        .arg(file.path())
        .args(["--format", "json", "--compact"])
        .assert()
        .success()
        .stdout(
            "[{\"content\":\"x \",\"kind\":\"plain\"},\
             {\"content\":\"<\",\"kind\":\"html-encoded\"},\
             {\"content\":\" y\",\"kind\":\"plain\"}]\n",
        );
}

#[test]
fn emits_doc_tags() {
    dokkatoo_text()
        .args(["-", "--format", "doc-json", "--compact"])
        .write_stdin("&copy; &gt;")
        .assert()
        .success()
        .stdout("[{\"body\":\"\u{A9} \"},{\"body\":\">\",\"params\":{\"content-type\":\"html\"}}]\n");
}

#[test]
fn keeps_whitespace_on_request() {
    dokkatoo_text()
        .arg("--keep-whitespace")
        .write_stdin("a  b")
        .assert()
        .success()
        .stdout("plain(\"a  b\")\n");
}

#[test]
fn reads_output_settings_from_config_file() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[output]\nformat = \"json\"\npretty = false").unwrap();

    dokkatoo_text()
        .arg("--config")
        .arg(config.path())
        .write_stdin("<")
        .assert()
        .success()
        .stdout("[{\"content\":\"<\",\"kind\":\"html-encoded\"}]\n");
}

#[test]
fn picks_up_project_config_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("dokkatoo.toml"),
        "[parser]\nrender_whitespace_as_spaces = false\n",
    )
    .unwrap();

    dokkatoo_text()
        .current_dir(dir.path())
        .write_stdin("a  b")
        .assert()
        .success()
        .stdout("plain(\"a  b\")\n");
}

#[test]
fn config_flag_overrides_project_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("dokkatoo.toml"), "[output]\nformat = \"json\"\n").unwrap();
    std::fs::write(dir.path().join("other.toml"), "[output]\nformat = \"tag\"\n").unwrap();

    dokkatoo_text()
        .current_dir(dir.path())
        .args(["--config", "other.toml"])
        .write_stdin("<")
        .assert()
        .success()
        .stdout("html(\"<\")\n");
}

#[test]
fn missing_input_file_fails() {
    dokkatoo_text()
        .arg("/definitely/not/here.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: cannot read /definitely/not/here.txt"));
}

#[test]
fn invalid_config_file_fails() {
    dokkatoo_text()
        .args(["--config", "/definitely/not/here.toml"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid configuration"));
}
